//! Seeded lucky number generation.
//!
//! Primary numbers are drawn from a [`SeededStream`] built from the seed
//! material, shifted according to the chosen [`Style`], occasionally replaced
//! by the favorite number and clamped into range. The favorite-number roll
//! uses a second stream seeded from the same material, so identical params
//! always produce identical results.

use log::debug;
use std::collections::BTreeSet;

use shared::{GenerationResult, Style};

use super::models::GenerationParams;
use super::seeded_stream::SeededStream;

pub const PRIMARY_COUNT: usize = 5;
pub const PRIMARY_MAX: u32 = 70;
pub const SECONDARY_MAX: u32 = 25;
pub const DEFAULT_FAVORITE_BIAS_PERCENT: u32 = 25;

/// Suffix appended to the seed material for the favorite-bias stream
const BIAS_STREAM_SALT: &str = "|bias";

/// Safe style pulls draws above this threshold down by `SAFE_SHIFT`
const SAFE_THRESHOLD: u32 = 55;
const SAFE_SHIFT: u32 = 13;
/// Wild style pushes draws below this threshold up by `WILD_SHIFT`
const WILD_THRESHOLD: u32 = 15;
const WILD_SHIFT: u32 = 12;

/// Offset used to move the secondary number off the favorite number
const SECONDARY_REMAP_OFFSET: u32 = 6;

#[derive(Clone, Debug)]
pub struct NumberGenerator {
    favorite_bias_percent: u32,
}

impl Default for NumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberGenerator {
    pub fn new() -> Self {
        Self::with_favorite_bias(DEFAULT_FAVORITE_BIAS_PERCENT)
    }

    /// Generator whose favorite-number override fires with `percent`% probability per draw
    pub fn with_favorite_bias(percent: u32) -> Self {
        Self {
            favorite_bias_percent: percent.min(100),
        }
    }

    pub fn favorite_bias_percent(&self) -> u32 {
        self.favorite_bias_percent
    }

    /// Draw five distinct primary numbers and one secondary number
    pub fn generate(&self, params: &GenerationParams) -> GenerationResult {
        let seed = params.seed_material();
        let mut stream = SeededStream::new(&seed);
        let mut bias_stream = SeededStream::new(&format!("{}{}", seed, BIAS_STREAM_SALT));
        let favorite = params.favorite_number();

        let mut primaries = BTreeSet::new();
        let mut draws = 0u32;
        while primaries.len() < PRIMARY_COUNT {
            let mut value = i64::from(apply_style(params.style, stream.next(PRIMARY_MAX)));
            draws += 1;

            // The bias roll happens on every draw so both streams stay in step.
            // Skipping a favorite already in the set guarantees termination at 100% bias.
            if let Some(fav) = favorite {
                let fires = bias_stream.next(100) <= self.favorite_bias_percent;
                if fires && !primaries.contains(&fav.clamped(PRIMARY_MAX)) {
                    value = fav.0;
                }
            }

            primaries.insert(value.clamp(1, i64::from(PRIMARY_MAX)) as u32);
        }

        let mut secondary = stream.next(SECONDARY_MAX);
        if let Some(fav) = favorite {
            if fav.matches(secondary) {
                secondary = remap_secondary(secondary);
            }
        }

        debug!(
            "Generated {:?} + {} in {} primary draws (style: {})",
            primaries, secondary, draws, params.style
        );

        GenerationResult {
            primary_numbers: primaries.into_iter().collect(),
            secondary_number: secondary,
        }
    }
}

/// Style shift applied to a raw primary draw
fn apply_style(style: Style, draw: u32) -> u32 {
    match style {
        Style::Safe if draw > SAFE_THRESHOLD => draw - SAFE_SHIFT,
        Style::Wild if draw < WILD_THRESHOLD => draw + WILD_SHIFT,
        _ => draw,
    }
}

/// Move a secondary draw that collided with the favorite number to a different value in range
fn remap_secondary(draw: u32) -> u32 {
    (draw + SECONDARY_REMAP_OFFSET) % SECONDARY_MAX + 1
}
