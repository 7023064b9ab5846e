use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::AppState;

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "moodflow-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Ready once the journal store answers. The sentiment model loads on first
/// use, so its state is reported but never blocks readiness.
pub async fn readyz(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let store_ok = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db)
        .await
        .is_ok();
    let model_state = if state.classifier.is_loaded() {
        "loaded"
    } else {
        "not_loaded"
    };

    let (status, label, store_state) = if store_ok {
        (StatusCode::OK, "ready", "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "not_ready", "failed")
    };

    (
        status,
        Json(json!({
            "status": label,
            "checks": {
                "journal_store": store_state,
                "sentiment_model": model_state,
            },
        })),
    )
}
