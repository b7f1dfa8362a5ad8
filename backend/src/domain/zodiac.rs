//! Western sun-sign and Chinese zodiac derivations.

use chrono::{Datelike, NaiveDate};

use super::models::parse_date_of_birth;

/// Inclusive (month, day) start of each Western sign, in calendar order.
/// A date belongs to the last sign whose start it has reached; dates before
/// Jan 20 wrap around to Capricorn.
const WESTERN_SIGNS: [(u32, u32, &str); 12] = [
    (1, 20, "Aquarius"),
    (2, 19, "Pisces"),
    (3, 21, "Aries"),
    (4, 20, "Taurus"),
    (5, 21, "Gemini"),
    (6, 21, "Cancer"),
    (7, 23, "Leo"),
    (8, 23, "Virgo"),
    (9, 23, "Libra"),
    (10, 23, "Scorpio"),
    (11, 22, "Sagittarius"),
    (12, 22, "Capricorn"),
];

const CHINESE_ANIMALS: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

/// 2020 was a Rat year
const CHINESE_BASE_YEAR: i32 = 2020;

/// Western sun sign for a calendar date
pub fn western_zodiac(date: NaiveDate) -> &'static str {
    let key = (date.month(), date.day());
    WESTERN_SIGNS
        .iter()
        .rev()
        .find(|(month, day, _)| key >= (*month, *day))
        .map(|(_, _, sign)| *sign)
        .unwrap_or("Capricorn")
}

/// Western sun sign for a `YYYY-MM-DD` string; `None` when missing or invalid
pub fn western_zodiac_from_str(date_of_birth: &str) -> Option<&'static str> {
    parse_date_of_birth(date_of_birth).ok().map(western_zodiac)
}

/// Chinese zodiac animal for a year, valid for any year including negatives
pub fn chinese_zodiac(year: i32) -> &'static str {
    let index = (year - CHINESE_BASE_YEAR).rem_euclid(12) as usize;
    CHINESE_ANIMALS[index]
}

/// Chinese zodiac animal for the year of a `YYYY-MM-DD` string
pub fn chinese_zodiac_for_date(date_of_birth: &str) -> Option<&'static str> {
    parse_date_of_birth(date_of_birth)
        .ok()
        .map(|date| chinese_zodiac(date.year()))
}
