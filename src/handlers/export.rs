use std::str::FromStr;

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::db::entries;
use crate::error::{AppError, AppResult};
use crate::models::JournalEntry;
use crate::AppState;

const CSV_FILENAME: &str = "mood_tracker_export.csv";
const CSV_HEADER: [&str; 5] = ["Date", "Mood", "Emoji", "Entry", "Score"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(AppError::Validation("Invalid format".into())),
        }
    }
}

pub async fn export_entries(
    State(state): State<AppState>,
    Path(format): Path<String>,
) -> AppResult<Response> {
    // Reject before touching the store
    let format: ExportFormat = format.parse()?;
    let entries = entries::list_entries(&state.db).await?;

    tracing::info!(?format, count = entries.len(), "Exporting journal entries");

    let response = match format {
        ExportFormat::Json => Json(entries).into_response(),
        ExportFormat::Csv => (
            [
                (header::CONTENT_TYPE, "text/csv".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename={CSV_FILENAME}"),
                ),
            ],
            render_csv(&entries),
        )
            .into_response(),
    };
    Ok(response)
}

/// Render entries as RFC 4180 CSV with CRLF record terminators.
pub fn render_csv(entries: &[JournalEntry]) -> String {
    let mut out = String::new();
    push_record(&mut out, CSV_HEADER);
    for entry in entries {
        let date = entry.date.to_string();
        // Debug keeps the fractional part, so 1.0 is written as "1.0"
        let score = format!("{:?}", entry.mood_score);
        push_record(
            &mut out,
            [
                date.as_str(),
                entry.mood.label(),
                entry.emoji.as_deref().unwrap_or(""),
                entry.entry_text.as_str(),
                score.as_str(),
            ],
        );
    }
    out
}

fn push_record<const N: usize>(out: &mut String, fields: [&str; N]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if field.contains([',', '"', '\n', '\r']) {
            out.push('"');
            out.push_str(&field.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(field);
        }
    }
    out.push_str("\r\n");
}
