//! Domain-only types that never cross the presentation boundary.

pub mod profile;

pub use profile::*;
