//! Explanation chips, greeting and share text for a generated set.
//!
//! Wording lives here so every frontend shows the same copy. The UI only
//! decides how to lay the chips out.

use shared::{Explanation, ExplanationKind, GenerationResult, ProfileInsights, Style, UserProfile};

#[derive(Clone, Debug, Default)]
pub struct ExplanationService;

impl ExplanationService {
    pub fn new() -> Self {
        Self
    }

    /// Greeting shown above the numbers
    pub fn greeting(&self, name: Option<&str>) -> String {
        match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => format!("{}, here's a combo tuned to your date of birth and vibe.", name),
            None => "Here's a combo tuned to your date of birth and vibe.".to_string(),
        }
    }

    /// Chips in display order: life path, zodiacs, style, then favorites
    pub fn explanations(
        &self,
        profile: &UserProfile,
        insights: &ProfileInsights,
    ) -> Vec<Explanation> {
        let mut chips = Vec::new();

        if let Some(life_path) = insights.life_path.filter(|lp| *lp > 0) {
            chips.push(chip(
                ExplanationKind::LifePath,
                format!(
                    "Life path {}: your numbers are nudged around that kind of energy.",
                    life_path
                ),
            ));
        }

        if let Some(sign) = non_blank(insights.western_zodiac.as_deref()) {
            chips.push(chip(
                ExplanationKind::WesternZodiac,
                format!(
                    "Western zodiac: {}. Your sign's usual traits influence how spread-out the numbers are.",
                    sign
                ),
            ));
        }

        if let Some(animal) = non_blank(insights.chinese_zodiac.as_deref()) {
            chips.push(chip(
                ExplanationKind::ChineseZodiac,
                format!(
                    "Chinese zodiac: {}. This adds another layer to the \"signature\" seed.",
                    animal
                ),
            ));
        }

        chips.push(chip(
            ExplanationKind::Style,
            self.style_description(profile.style).to_string(),
        ));

        if let Some(favorite) = non_blank(profile.favorite_number.as_deref()) {
            chips.push(chip(
                ExplanationKind::FavoriteNumber,
                format!(
                    "Favorite number {}: lightly considered without forcing it into every position.",
                    favorite
                ),
            ));
        }

        if let Some(color) = non_blank(profile.favorite_color.as_deref()) {
            chips.push(chip(
                ExplanationKind::FavoriteColor,
                format!(
                    "Lucky color {} is folded into your personal \"seed\" for this set.",
                    color
                ),
            ));
        }

        chips
    }

    pub fn style_description(&self, style: Style) -> &'static str {
        match style {
            Style::Safe => {
                "Safe & steady: gently biased toward more centered, less extreme values."
            }
            Style::Wild => "All-in lucky: a bit more weight on very low or very high numbers.",
            Style::Balanced => "Balanced: mix of low, mid, and higher values.",
        }
    }

    /// Text handed to the share sheet or clipboard
    pub fn share_text(&self, result: &GenerationResult) -> String {
        format!(
            "LuckRacle Mega Millions numbers: {}  | Mega Ball: {}",
            join_numbers(&result.primary_numbers),
            result.secondary_number
        )
    }
}

/// "4 - 18 - 22 - 41 - 63"
pub fn join_numbers(numbers: &[u32]) -> String {
    numbers
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" - ")
}

fn chip(kind: ExplanationKind, text: String) -> Explanation {
    Explanation { kind, text }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_profile() -> UserProfile {
        UserProfile {
            name: Some("Ada".to_string()),
            date_of_birth: "1990-05-15".to_string(),
            favorite_number: Some("7".to_string()),
            favorite_color: Some("teal".to_string()),
            style: Style::Wild,
            ..Default::default()
        }
    }

    fn full_insights() -> ProfileInsights {
        ProfileInsights {
            western_zodiac: Some("Taurus".to_string()),
            chinese_zodiac: Some("Horse".to_string()),
            life_path: Some(3),
        }
    }

    #[test]
    fn test_greeting_with_and_without_name() {
        let service = ExplanationService::new();
        assert!(service.greeting(Some("Ada")).starts_with("Ada, here's a combo"));
        assert!(service.greeting(Some("   ")).starts_with("Here's a combo"));
        assert!(service.greeting(None).starts_with("Here's a combo"));
    }

    #[test]
    fn test_explanations_full_profile_order() {
        let service = ExplanationService::new();
        let chips = service.explanations(&full_profile(), &full_insights());

        let kinds: Vec<ExplanationKind> = chips.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ExplanationKind::LifePath,
                ExplanationKind::WesternZodiac,
                ExplanationKind::ChineseZodiac,
                ExplanationKind::Style,
                ExplanationKind::FavoriteNumber,
                ExplanationKind::FavoriteColor,
            ]
        );
        assert!(chips[0].text.contains("Life path 3"));
        assert!(chips[1].text.contains("Taurus"));
        assert!(chips[2].text.contains("Horse"));
        assert!(chips[3].text.starts_with("All-in lucky"));
        assert!(chips[4].text.contains("Favorite number 7"));
        assert!(chips[5].text.contains("teal"));
    }

    #[test]
    fn test_explanations_minimal_profile_only_has_style() {
        let service = ExplanationService::new();
        let profile = UserProfile {
            date_of_birth: "1990-05-15".to_string(),
            favorite_number: Some("  ".to_string()),
            ..Default::default()
        };
        let chips = service.explanations(&profile, &ProfileInsights::default());

        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].kind, ExplanationKind::Style);
        assert!(chips[0].text.starts_with("Balanced"));
    }

    #[test]
    fn test_life_path_zero_is_not_shown() {
        let service = ExplanationService::new();
        let insights = ProfileInsights {
            life_path: Some(0),
            ..Default::default()
        };
        let chips = service.explanations(&UserProfile::default(), &insights);
        assert!(chips.iter().all(|c| c.kind != ExplanationKind::LifePath));
    }

    #[test]
    fn test_share_text() {
        let service = ExplanationService::new();
        let result = GenerationResult {
            primary_numbers: vec![42, 48, 49, 52, 55],
            secondary_number: 5,
        };
        assert_eq!(
            service.share_text(&result),
            "LuckRacle Mega Millions numbers: 42 - 48 - 49 - 52 - 55  | Mega Ball: 5"
        );
    }

    #[test]
    fn test_join_numbers() {
        assert_eq!(join_numbers(&[1, 2, 3]), "1 - 2 - 3");
        assert_eq!(join_numbers(&[]), "");
    }
}
