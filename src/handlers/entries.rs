use axum::{extract::State, Json};

use crate::db::entries;
use crate::dto::{SaveEntryRequest, SaveEntryResponse};
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::models::{JournalEntry, Mood, NewEntry};
use crate::AppState;

pub async fn save_entry(
    State(state): State<AppState>,
    AppJson(body): AppJson<SaveEntryRequest>,
) -> AppResult<Json<SaveEntryResponse>> {
    let date = body.date.unwrap_or_else(super::today);

    let quick_emoji = body.quick_mood().map(str::to_owned);

    let new_entry = match quick_emoji {
        Some(emoji) => {
            let (mood, mood_score) = Mood::from_quick_emoji(&emoji);
            NewEntry {
                date,
                entry_text: NewEntry::quick_mood_text(&emoji),
                mood,
                mood_score,
                emoji: Some(emoji),
            }
        }
        None => {
            let text = body.entry_text.unwrap_or_default();
            let reading = state.classifier.classify(&text).await?;
            NewEntry {
                date,
                entry_text: text,
                mood: reading.mood,
                mood_score: reading.score,
                emoji: Some(reading.emoji.to_string()),
            }
        }
    };

    let entry = entries::insert_entry(&state.db, &new_entry).await?;
    tracing::info!(entry_id = entry.id, mood = %entry.mood, date = %entry.date, "Journal entry saved");

    Ok(Json(SaveEntryResponse {
        success: true,
        id: entry.id,
        mood: entry.mood,
        emoji: entry.emoji,
        message: "Entry saved successfully!".into(),
    }))
}

pub async fn list_entries(State(state): State<AppState>) -> AppResult<Json<Vec<JournalEntry>>> {
    let entries = entries::list_entries(&state.db).await?;
    Ok(Json(entries))
}
