use chrono::NaiveDate;
use shared::{Style, UserProfile};

/// Date format accepted for dates of birth
pub const DATE_OF_BIRTH_FORMAT: &str = "%Y-%m-%d";

/// Reasons a profile cannot be used for generation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileValidationError {
    #[error("Please enter your date of birth first")]
    MissingDateOfBirth,
    #[error("Date of birth '{0}' is not a valid YYYY-MM-DD date")]
    InvalidDateOfBirth(String),
}

/// Parse a trimmed `YYYY-MM-DD` date of birth
pub fn parse_date_of_birth(value: &str) -> Result<NaiveDate, ProfileValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ProfileValidationError::MissingDateOfBirth);
    }
    NaiveDate::parse_from_str(trimmed, DATE_OF_BIRTH_FORMAT)
        .map_err(|_| ProfileValidationError::InvalidDateOfBirth(trimmed.to_string()))
}

/// Inputs to a single generation, already flattened into seed-ready strings
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationParams {
    pub dob: String,
    pub zodiac: String,
    pub style: Style,
    /// Favorite number exactly as entered (empty when not given)
    pub fav_number: String,
    /// `time_of_birth|location|favorite_color`
    pub extra_salt: String,
}

impl GenerationParams {
    /// Build params from a profile; `zodiac` is the resolved sign (override or derived)
    pub fn from_profile(profile: &UserProfile, zodiac: &str) -> Self {
        Self {
            dob: profile.date_of_birth.trim().to_string(),
            zodiac: zodiac.trim().to_string(),
            style: profile.style,
            fav_number: trimmed_or_empty(&profile.favorite_number),
            extra_salt: Self::extra_salt(profile),
        }
    }

    /// Salt built from the optional profile fields, always with both delimiters
    pub fn extra_salt(profile: &UserProfile) -> String {
        format!(
            "{}|{}|{}",
            trimmed_or_empty(&profile.time_of_birth),
            trimmed_or_empty(&profile.location),
            trimmed_or_empty(&profile.favorite_color)
        )
    }

    /// The seed string. Field order and the `|` delimiter determine every draw.
    pub fn seed_material(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}",
            self.dob,
            self.zodiac,
            self.style.as_str(),
            self.fav_number,
            self.extra_salt
        )
    }

    pub fn favorite_number(&self) -> Option<FavoriteNumber> {
        FavoriteNumber::parse(&self.fav_number)
    }
}

/// A favorite number that parsed as an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteNumber(pub i64);

impl FavoriteNumber {
    /// Leading-integer parse: optional sign followed by at least one digit.
    /// Trailing junk is ignored ("12abc" is 12); anything else is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits_len == 0 {
            return None;
        }

        // Saturate instead of failing on absurdly long inputs; the value is clamped anyway
        let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
        Some(Self(if negative { -magnitude } else { magnitude }))
    }

    /// The value clamped into `1..=max`
    pub fn clamped(&self, max: u32) -> u32 {
        self.0.clamp(1, i64::from(max)) as u32
    }

    /// Whether this favorite equals `value` exactly
    pub fn matches(&self, value: u32) -> bool {
        self.0 == i64::from(value)
    }
}

fn trimmed_or_empty(value: &Option<String>) -> String {
    value.as_deref().map(str::trim).unwrap_or_default().to_string()
}
