use axum::{body::Bytes, extract::State, Json};
use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use validator::Validate;

use crate::db::entries;
use crate::dto::{SeedDemoRequest, SeedDemoResponse};
use crate::error::{AppError, AppResult};
use crate::models::{Mood, NewEntry};
use crate::AppState;

const DEFAULT_DEMO_DAYS: u32 = 30;
const SCORE_JITTER: f64 = 0.05;
const MIN_DEMO_SCORE: f64 = 0.5;
const MAX_DEMO_SCORE: f64 = 0.99;

const SAMPLE_ENTRIES: [(&str, Mood, f64); 20] = [
    ("Had an amazing day at work! Got promoted and the team celebrated with me. Feeling on top of the world!", Mood::VeryHappy, 0.98),
    ("Nice quiet evening reading my favorite book. Felt peaceful and content.", Mood::Happy, 0.88),
    ("Met up with old friends today. Always good to reconnect!", Mood::Happy, 0.91),
    ("Just a normal day. Nothing special happened.", Mood::Neutral, 0.50),
    ("Feeling a bit down today. Work was stressful and I'm exhausted.", Mood::SlightlySad, 0.72),
    ("Not a great day. Had an argument with a friend and feeling upset.", Mood::Sad, 0.87),
    ("Really struggling today. Everything feels overwhelming.", Mood::VerySad, 0.95),
    ("Accomplished all my goals today! Feeling proud and motivated.", Mood::VeryHappy, 0.96),
    ("Went for a long walk in nature. Felt so refreshing and calming.", Mood::Happy, 0.85),
    ("Tried a new hobby today - painting! It was therapeutic.", Mood::SlightlyHappy, 0.78),
    ("Feeling anxious about upcoming deadlines. Need to manage my time better.", Mood::SlightlySad, 0.75),
    ("Woke up feeling energized! Ready to tackle the day ahead.", Mood::Happy, 0.89),
    ("Spent quality time with family. These moments are precious.", Mood::VeryHappy, 0.97),
    ("Work presentation went well! Boss was impressed.", Mood::Happy, 0.92),
    ("Feeling under the weather today. Just want to rest.", Mood::SlightlySad, 0.70),
    ("Completed my first 5k run! Can't believe I did it!", Mood::VeryHappy, 0.99),
    ("Meditation session helped me find inner peace today.", Mood::Happy, 0.86),
    ("Dealing with some personal challenges. Taking it one day at a time.", Mood::SlightlySad, 0.76),
    ("Cooked a delicious meal tonight. Cooking is my therapy!", Mood::Happy, 0.84),
    ("Feeling grateful for all the good things in my life.", Mood::Happy, 0.90),
];

/// Fill the journal with one sample entry per day, ending today.
pub async fn seed_demo(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<SeedDemoResponse>> {
    if !state.config.demo_seed_enabled {
        return Err(AppError::Forbidden("Demo seeding is disabled".into()));
    }

    let body = parse_seed_request(&body)?;
    body.validate()?;
    let days = body.days.unwrap_or(DEFAULT_DEMO_DAYS);

    // ThreadRng is not Send; draw every sample before the first await
    let samples = {
        let mut rng = rand::thread_rng();
        demo_entries(super::today(), days, &mut rng)
    };

    let mut tx = state.db.begin().await?;
    for sample in &samples {
        entries::insert_entry(&mut *tx, sample).await?;
    }
    tx.commit().await?;

    tracing::info!(created = samples.len(), "Demo journal entries seeded");

    Ok(Json(SeedDemoResponse {
        created: samples.len(),
        message: format!("Created {} demo entries!", samples.len()),
    }))
}

/// An empty body means the defaults; anything else must be a valid request.
fn parse_seed_request(body: &[u8]) -> AppResult<SeedDemoRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(SeedDemoRequest::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(format!("Invalid demo seed request: {e}")))
}

fn demo_entries<R: Rng>(today: NaiveDate, days: u32, rng: &mut R) -> Vec<NewEntry> {
    (0..days)
        .map(|i| {
            let date = today - Duration::days(i64::from(days - i - 1));
            let (text, mood, score) = *SAMPLE_ENTRIES
                .choose(rng)
                .unwrap_or(&SAMPLE_ENTRIES[0]);
            let jittered = score + rng.gen_range(-SCORE_JITTER..=SCORE_JITTER);

            NewEntry {
                date,
                entry_text: text.to_string(),
                mood,
                mood_score: jittered.clamp(MIN_DEMO_SCORE, MAX_DEMO_SCORE),
                emoji: Some(mood.emoji().to_string()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_seed_request_empty_body_uses_defaults() {
        assert_eq!(parse_seed_request(b"").unwrap().days, None);
        assert_eq!(parse_seed_request(b"  \n").unwrap().days, None);
        assert_eq!(parse_seed_request(b"{}").unwrap().days, None);
        assert_eq!(parse_seed_request(br#"{"days": 7}"#).unwrap().days, Some(7));
    }

    #[test]
    fn test_seed_request_rejects_malformed_days() {
        for body in [&br#"{"days": -5}"#[..], br#"{"days": "ten"}"#, b"{days", b"null"] {
            assert!(matches!(
                parse_seed_request(body),
                Err(AppError::Validation(_))
            ));
        }
    }

    #[test]
    fn test_demo_entries_one_per_day_ending_today() {
        let mut rng = StdRng::seed_from_u64(7);
        let samples = demo_entries(today(), 30, &mut rng);

        assert_eq!(samples.len(), 30);
        assert_eq!(samples[0].date, today() - Duration::days(29));
        assert_eq!(samples[29].date, today());
        assert!(samples.windows(2).all(|w| w[1].date - w[0].date == Duration::days(1)));
    }

    #[test]
    fn test_demo_scores_stay_clamped() {
        let mut rng = StdRng::seed_from_u64(42);
        for sample in demo_entries(today(), 365, &mut rng) {
            assert!(
                (MIN_DEMO_SCORE..=MAX_DEMO_SCORE).contains(&sample.mood_score),
                "score {} out of range",
                sample.mood_score
            );
        }
    }

    #[test]
    fn test_demo_emoji_matches_mood() {
        let mut rng = StdRng::seed_from_u64(1);
        for sample in demo_entries(today(), 50, &mut rng) {
            assert_eq!(sample.emoji.as_deref(), Some(sample.mood.emoji()));
            assert!(SAMPLE_ENTRIES.iter().any(|(text, _, _)| *text == sample.entry_text));
        }
    }

    #[test]
    fn test_single_day_is_today() {
        let mut rng = StdRng::seed_from_u64(3);
        let samples = demo_entries(today(), 1, &mut rng);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].date, today());
    }
}
