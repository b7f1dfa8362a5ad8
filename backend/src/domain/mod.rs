//! # Domain Module
//!
//! All business logic for LuckRacle, independent of any UI or storage.
//!
//! ## Module Organization
//!
//! - **seeded_stream**: deterministic integer stream built from a seed string
//! - **zodiac** / **numerology**: pure derivations from the date of birth
//! - **number_generator**: the seeded draw of five primaries and one secondary
//! - **explanation_service**: greeting, explanation chips and share text
//! - **history_service**: history entries and their display formatting
//! - **luck_service**: the end-to-end generation workflow frontends call
//! - **models**: domain-only types such as `GenerationParams`
//!
//! ## Rules
//!
//! - Identical profiles always produce identical numbers
//! - A date of birth is required and must be a valid `YYYY-MM-DD` date
//! - Malformed optional input (favorite number, zodiac override) is ignored,
//!   never an error

pub mod explanation_service;
pub mod history_service;
pub mod luck_service;
pub mod models;
pub mod number_generator;
pub mod numerology;
pub mod seeded_stream;
pub mod zodiac;

pub use explanation_service::ExplanationService;
pub use history_service::HistoryService;
pub use luck_service::LuckService;
pub use number_generator::NumberGenerator;
pub use seeded_stream::SeededStream;
