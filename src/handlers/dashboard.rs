use axum::{extract::State, Json};

use crate::db::entries;
use crate::dto::DashboardResponse;
use crate::error::AppResult;
use crate::services::{aggregator, chart};
use crate::AppState;

const RECENT_ENTRIES: usize = 10;

pub async fn get_dashboard(State(state): State<AppState>) -> AppResult<Json<DashboardResponse>> {
    let all_entries = entries::list_entries(&state.db).await?;

    let stats = aggregator::summarize(&all_entries, super::today());
    let chart = chart::build_mood_chart(&all_entries);
    let recent = all_entries.into_iter().take(RECENT_ENTRIES).collect();

    Ok(Json(DashboardResponse {
        entries: recent,
        mood_counts: stats.mood_counts,
        total_entries: stats.total_entries,
        weekly_average_score: stats.weekly_average_score,
        summary: stats.summary,
        chart,
    }))
}
