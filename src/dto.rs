//! # MoodFlow: Request/Response DTOs
//!
//! All API contract types in one module.
//!
//! Conventions:
//! - `*Request`  → deserialized from client JSON body
//! - `*Response` → serialized to client JSON
//! - Validation is expressed via `validator` derive macros

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::{JournalEntry, Mood};
use crate::services::chart::MoodChart;
use crate::services::sentiment::SentimentLabel;

/// Minimum trimmed length, in characters, of text sent for analysis.
pub const MIN_ANALYZE_CHARS: usize = 10;

// ============================================================================
// Analyze
// ============================================================================

/// POST /api/analyze
#[derive(Debug, Deserialize, Validate)]
pub struct AnalyzeRequest {
    #[serde(default)]
    #[validate(custom = "validate_analyze_text")]
    pub text: String,
}

fn validate_analyze_text(text: &str) -> Result<(), ValidationError> {
    if text.trim().chars().count() < MIN_ANALYZE_CHARS {
        let mut error = ValidationError::new("too_short");
        error.message = Some("Please write at least 10 characters".into());
        return Err(error);
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub mood: Mood,
    pub emoji: &'static str,
    /// Rounded to two decimals
    pub score: f64,
    /// Raw label from the sentiment model
    pub sentiment: SentimentLabel,
    pub quote: &'static str,
}

// ============================================================================
// Entries
// ============================================================================

/// POST /api/save-entry
///
/// An emoji with no text is a quick-mood log; anything else is classified
/// from the text.
#[derive(Debug, Default, Deserialize)]
pub struct SaveEntryRequest {
    #[serde(default)]
    pub entry_text: Option<String>,
    #[serde(default)]
    pub emoji: Option<String>,
    /// Defaults to today
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl SaveEntryRequest {
    /// The emoji to log directly, if this is a quick-mood submission.
    pub fn quick_mood(&self) -> Option<&str> {
        let text_empty = self.entry_text.as_deref().map_or(true, str::is_empty);
        self.emoji
            .as_deref()
            .filter(|emoji| !emoji.is_empty() && text_empty)
    }
}

#[derive(Debug, Serialize)]
pub struct SaveEntryResponse {
    pub success: bool,
    pub id: i64,
    pub mood: Mood,
    pub emoji: Option<String>,
    pub message: String,
}

// ============================================================================
// Dashboard
// ============================================================================

/// GET /api/dashboard
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    /// Ten most recent entries, newest first
    pub entries: Vec<JournalEntry>,
    pub mood_counts: BTreeMap<Mood, usize>,
    pub total_entries: usize,
    pub weekly_average_score: Option<f64>,
    pub summary: String,
    pub chart: MoodChart,
}

// ============================================================================
// Demo
// ============================================================================

/// POST /api/demo/seed
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SeedDemoRequest {
    #[validate(range(min = 1, max = 365, message = "Please enter a number between 1 and 365"))]
    pub days: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct SeedDemoResponse {
    pub created: usize,
    pub message: String,
}
