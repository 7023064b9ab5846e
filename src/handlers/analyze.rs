use axum::{extract::State, Json};
use validator::Validate;

use crate::dto::{AnalyzeRequest, AnalyzeResponse};
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::services::quotes::pick_quote;
use crate::AppState;

/// Classify text without storing it.
pub async fn analyze(
    State(state): State<AppState>,
    AppJson(body): AppJson<AnalyzeRequest>,
) -> AppResult<Json<AnalyzeResponse>> {
    body.validate()?;

    let reading = state.classifier.classify(&body.text).await?;
    let quote = pick_quote(reading.mood, super::today());

    Ok(Json(AnalyzeResponse {
        mood: reading.mood,
        emoji: reading.emoji,
        score: round2(reading.score),
        sentiment: reading.sentiment,
        quote,
    }))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
