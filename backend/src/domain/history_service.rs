//! History domain logic: turning generations into entries and entries into
//! display rows. Persistence is delegated to an injected [`HistoryStorage`].

use chrono::{DateTime, Local, Utc};
use log::info;
use std::sync::Arc;

use shared::{
    FormattedHistoryEntry, GenerationResult, HistoryEntry, HistoryResponse, ProfileInsights, Style,
};

use super::explanation_service::join_numbers;
use crate::storage::HistoryStorage;

pub const EMPTY_HISTORY_HINT: &str = "No history yet. Generate a set to see recent picks here.";

const META_SEPARATOR: &str = " · ";
const TIMESTAMP_FORMAT: &str = "%b %-d, %I:%M %p";

#[derive(Clone)]
pub struct HistoryService {
    storage: Arc<dyn HistoryStorage>,
}

impl HistoryService {
    pub fn new(storage: Arc<dyn HistoryStorage>) -> Self {
        Self { storage }
    }

    /// Build the entry recorded for a generation at `timestamp` (epoch millis)
    pub fn create_entry(
        &self,
        timestamp: i64,
        result: &GenerationResult,
        date_of_birth: &str,
        insights: &ProfileInsights,
        style: Style,
    ) -> HistoryEntry {
        HistoryEntry {
            timestamp,
            primary_numbers: result.primary_numbers.clone(),
            secondary_number: result.secondary_number,
            date_of_birth: date_of_birth.trim().to_string(),
            western_zodiac: insights.western_zodiac.clone(),
            chinese_zodiac: insights.chinese_zodiac.clone(),
            style,
        }
    }

    /// Store an entry and return the updated history, newest first
    pub fn record(&self, entry: HistoryEntry) -> Vec<HistoryEntry> {
        let entries = self.storage.append(entry);
        info!("History now holds {} entries", entries.len());
        entries
    }

    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.storage.load()
    }

    pub fn clear(&self) {
        info!("Clearing history");
        self.storage.clear();
    }

    /// Formatted history for display
    pub fn history(&self) -> HistoryResponse {
        let entries: Vec<FormattedHistoryEntry> =
            self.entries().into_iter().map(|e| self.format_entry(e)).collect();
        let empty_hint = entries.is_empty().then(|| EMPTY_HISTORY_HINT.to_string());

        HistoryResponse { entries, empty_hint }
    }

    pub fn format_entry(&self, entry: HistoryEntry) -> FormattedHistoryEntry {
        let headline = format!(
            "{} | Mega: {}",
            join_numbers(&entry.primary_numbers),
            entry.secondary_number
        );

        let mut parts: Vec<&str> = Vec::new();
        if !entry.date_of_birth.is_empty() {
            parts.push(&entry.date_of_birth);
        }
        for value in [&entry.western_zodiac, &entry.chinese_zodiac].into_iter().flatten() {
            if !value.is_empty() {
                parts.push(value);
            }
        }
        parts.push(entry.style.as_str());

        let meta = format!(
            "{}{}{}",
            format_timestamp(entry.timestamp),
            META_SEPARATOR,
            parts.join(META_SEPARATOR)
        );

        FormattedHistoryEntry { headline, meta, entry }
    }
}

/// Short local date and time such as "Mar 3, 09:15 PM"; the raw value when out of range
pub fn format_timestamp(epoch_millis: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(epoch_millis) {
        Some(utc) => utc.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string(),
        None => epoch_millis.to_string(),
    }
}
