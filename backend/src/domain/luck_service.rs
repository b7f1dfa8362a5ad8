//! Generation workflow used by frontends.
//!
//! Validates the profile, resolves the zodiac, runs the seeded generator and
//! packages numbers, insights, explanation chips and history into a single
//! response. This is the only place that rejects a profile; the generator
//! itself accepts anything.

use chrono::{Datelike, NaiveDate, Utc};
use log::info;

use shared::{GenerateResponse, HistoryResponse, ProfileInsights, UserProfile};

use super::explanation_service::ExplanationService;
use super::history_service::HistoryService;
use super::models::{parse_date_of_birth, GenerationParams, ProfileValidationError};
use super::number_generator::NumberGenerator;
use super::numerology::life_path;
use super::zodiac::{chinese_zodiac, western_zodiac, western_zodiac_from_str};

#[derive(Clone)]
pub struct LuckService {
    generator: NumberGenerator,
    explanation_service: ExplanationService,
    history_service: HistoryService,
}

impl LuckService {
    pub fn new(
        generator: NumberGenerator,
        explanation_service: ExplanationService,
        history_service: HistoryService,
    ) -> Self {
        Self {
            generator,
            explanation_service,
            history_service,
        }
    }

    /// Generate a set for `profile`. When `record_history` is set the result
    /// is appended to the history and the updated list is returned.
    pub fn generate(
        &self,
        profile: &UserProfile,
        record_history: bool,
    ) -> Result<GenerateResponse, ProfileValidationError> {
        let date = parse_date_of_birth(&profile.date_of_birth)?;
        let zodiac = resolve_zodiac(profile, date);
        info!(
            "Generating numbers: dob={}, zodiac={}, style={}",
            date, zodiac, profile.style
        );

        let params = GenerationParams::from_profile(profile, &zodiac);
        let result = self.generator.generate(&params);
        let insights = self.insights_for(profile, date, &zodiac);

        let history = if record_history {
            let entry = self.history_service.create_entry(
                Utc::now().timestamp_millis(),
                &result,
                &profile.date_of_birth,
                &insights,
                profile.style,
            );
            self.history_service.record(entry)
        } else {
            self.history_service.entries()
        };

        info!(
            "Generated {:?} with mega {}",
            result.primary_numbers, result.secondary_number
        );

        Ok(GenerateResponse {
            greeting: self.explanation_service.greeting(profile.name.as_deref()),
            explanations: self.explanation_service.explanations(profile, &insights),
            share_text: self.explanation_service.share_text(&result),
            result,
            insights,
            history,
        })
    }

    /// Zodiac, Chinese zodiac and life path for a profile without generating
    pub fn insights(
        &self,
        profile: &UserProfile,
    ) -> Result<ProfileInsights, ProfileValidationError> {
        let date = parse_date_of_birth(&profile.date_of_birth)?;
        let zodiac = resolve_zodiac(profile, date);
        Ok(self.insights_for(profile, date, &zodiac))
    }

    /// Western sign to pre-fill when the date of birth changes
    pub fn derive_zodiac(&self, date_of_birth: &str) -> Option<String> {
        western_zodiac_from_str(date_of_birth).map(str::to_string)
    }

    pub fn history(&self) -> HistoryResponse {
        self.history_service.history()
    }

    pub fn clear_history(&self) {
        self.history_service.clear();
    }

    fn insights_for(
        &self,
        profile: &UserProfile,
        date: NaiveDate,
        zodiac: &str,
    ) -> ProfileInsights {
        ProfileInsights {
            western_zodiac: Some(zodiac.to_string()).filter(|z| !z.is_empty()),
            chinese_zodiac: Some(chinese_zodiac(date.year()).to_string()),
            life_path: life_path(&profile.date_of_birth),
        }
    }
}

/// The user's zodiac override when present, otherwise the sign for `date`
fn resolve_zodiac(profile: &UserProfile, date: NaiveDate) -> String {
    profile
        .western_zodiac
        .as_deref()
        .map(str::trim)
        .filter(|z| !z.is_empty())
        .unwrap_or_else(|| western_zodiac(date))
        .to_string()
}
