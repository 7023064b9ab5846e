use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::mood::Mood;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JournalEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub entry_text: String,
    #[sqlx(try_from = "String")]
    pub mood: Mood,
    pub mood_score: f64,
    pub emoji: Option<String>,
    pub timestamp: NaiveDateTime,
}

/// Row values supplied at insert time; `id` and `timestamp` are assigned by
/// the store.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub date: NaiveDate,
    pub entry_text: String,
    pub mood: Mood,
    pub mood_score: f64,
    pub emoji: Option<String>,
}

impl NewEntry {
    /// Placeholder text stored for a quick-mood log.
    pub fn quick_mood_text(emoji: &str) -> String {
        format!("Quick mood log: {emoji}")
    }
}
