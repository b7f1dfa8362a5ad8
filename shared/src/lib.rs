use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bias mode applied to primary draws before bounding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Pulls high draws back toward the middle of the range
    Safe,
    /// Draws are used as-is
    #[default]
    Balanced,
    /// Pushes low draws upward
    Wild,
}

impl Style {
    /// Lowercase name used inside the seed material
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Safe => "safe",
            Style::Balanced => "balanced",
            Style::Wild => "wild",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "safe" => Ok(Style::Safe),
            "balanced" => Ok(Style::Balanced),
            "wild" => Ok(Style::Wild),
            other => Err(StyleParseError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleParseError(pub String);

impl fmt::Display for StyleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown style '{}': expected safe, balanced or wild", self.0)
    }
}

impl std::error::Error for StyleParseError {}

/// Personal inputs collected by the wizard
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    /// Display name, only used for the greeting
    pub name: Option<String>,
    /// Date of birth as entered (YYYY-MM-DD); required for generation
    pub date_of_birth: String,
    /// Time of birth (HH:MM), folded into the seed salt
    pub time_of_birth: Option<String>,
    /// Birth location, folded into the seed salt
    pub location: Option<String>,
    /// Western zodiac override; derived from the date of birth when blank
    pub western_zodiac: Option<String>,
    /// Favorite number exactly as typed; non-numeric input is ignored
    pub favorite_number: Option<String>,
    /// Favorite color, folded into the seed salt
    pub favorite_color: Option<String>,
    pub style: Style,
}

/// Output of one generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Five distinct values in 1..=70, ascending
    pub primary_numbers: Vec<u32>,
    /// Single value in 1..=25 (the "mega" number)
    pub secondary_number: u32,
}

/// Derived astrology and numerology values shown alongside the numbers
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfileInsights {
    pub western_zodiac: Option<String>,
    pub chinese_zodiac: Option<String>,
    pub life_path: Option<u32>,
}

/// What an explanation chip talks about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplanationKind {
    LifePath,
    WesternZodiac,
    ChineseZodiac,
    Style,
    FavoriteNumber,
    FavoriteColor,
}

/// One human-readable explanation chip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    pub kind: ExplanationKind,
    pub text: String,
}

/// A past generation as persisted by the history store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Epoch milliseconds when the set was generated
    pub timestamp: i64,
    pub primary_numbers: Vec<u32>,
    pub secondary_number: u32,
    pub date_of_birth: String,
    #[serde(default)]
    pub western_zodiac: Option<String>,
    #[serde(default)]
    pub chinese_zodiac: Option<String>,
    #[serde(default)]
    pub style: Style,
}

/// A history entry ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedHistoryEntry {
    /// e.g. "4 - 18 - 22 - 41 - 63 | Mega: 9"
    pub headline: String,
    /// e.g. "Mar 3, 09:15 PM · 1990-05-15 · Taurus · Horse · balanced"
    pub meta: String,
    pub entry: HistoryEntry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub entries: Vec<FormattedHistoryEntry>,
    /// Shown instead of the list when there is no history yet
    pub empty_hint: Option<String>,
}

/// Everything the presentation layer needs after a generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub greeting: String,
    pub result: GenerationResult,
    pub insights: ProfileInsights,
    pub explanations: Vec<Explanation>,
    pub share_text: String,
    /// Updated history when the generation was recorded, otherwise the current one
    pub history: Vec<HistoryEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_parse() {
        assert_eq!("safe".parse::<Style>().unwrap(), Style::Safe);
        assert_eq!(" Wild ".parse::<Style>().unwrap(), Style::Wild);
        assert_eq!("BALANCED".parse::<Style>().unwrap(), Style::Balanced);
        assert!("reckless".parse::<Style>().is_err());
    }

    #[test]
    fn test_style_defaults_to_balanced() {
        assert_eq!(Style::default(), Style::Balanced);
        let profile: UserProfile =
            serde_json::from_str(r#"{"date_of_birth": "1990-05-15"}"#).unwrap();
        assert_eq!(profile.style, Style::Balanced);
    }

    #[test]
    fn test_style_serializes_lowercase() {
        let json = serde_json::to_string(&Style::Wild).unwrap();
        assert_eq!(json, "\"wild\"");
        let style: Style = serde_json::from_str("\"safe\"").unwrap();
        assert_eq!(style, Style::Safe);
    }

    #[test]
    fn test_user_profile_deserializes_with_missing_fields() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"date_of_birth": "1990-05-15"}"#).unwrap();
        assert_eq!(profile.date_of_birth, "1990-05-15");
        assert_eq!(profile.style, Style::Balanced);
        assert!(profile.favorite_number.is_none());
    }

    #[test]
    fn test_history_entry_tolerates_missing_optional_fields() {
        let json = r#"{
            "timestamp": 1700000000000,
            "primary_numbers": [1, 2, 3, 4, 5],
            "secondary_number": 7,
            "date_of_birth": "2001-02-03"
        }"#;
        let entry: HistoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.western_zodiac, None);
        assert_eq!(entry.style, Style::Balanced);
    }
}
