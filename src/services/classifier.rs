use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::Mood;
use crate::services::sentiment::{self, Sentiment, SentimentLabel, SentimentModel};

/// Inputs longer than this are cut before inference.
pub const MAX_INPUT_CHARS: usize = 512;

const STRONG_THRESHOLD: f64 = 0.95;
const MODERATE_THRESHOLD: f64 = 0.85;

type ModelLoader = Box<dyn Fn() -> anyhow::Result<Arc<dyn SentimentModel>> + Send + Sync>;

/// Text → mood bucket, backed by a lazily loaded sentiment model.
///
/// The model is loaded on first use and shared by every request after that;
/// concurrent first calls wait on the same initialization.
pub struct MoodClassifier {
    loader: ModelLoader,
    model: OnceCell<Arc<dyn SentimentModel>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoodReading {
    pub mood: Mood,
    pub score: f64,
    pub emoji: &'static str,
    pub sentiment: SentimentLabel,
}

impl MoodClassifier {
    pub fn new(config: Arc<Config>) -> Self {
        Self::with_loader(move || sentiment::load_model(&config))
    }

    pub fn with_loader<F>(loader: F) -> Self
    where
        F: Fn() -> anyhow::Result<Arc<dyn SentimentModel>> + Send + Sync + 'static,
    {
        Self {
            loader: Box::new(loader),
            model: OnceCell::new(),
        }
    }

    pub fn with_model(model: Arc<dyn SentimentModel>) -> Self {
        Self::with_loader(move || Ok(model.clone()))
    }

    pub async fn classify(&self, text: &str) -> AppResult<MoodReading> {
        let model = self.model().await?;
        let input = truncate_chars(text, MAX_INPUT_CHARS);

        let sentiment = model.classify(input).await.map_err(AppError::Inference)?;
        if !(0.0..=1.0).contains(&sentiment.score) {
            return Err(AppError::Inference(anyhow::anyhow!(
                "confidence {} is outside [0, 1]",
                sentiment.score
            )));
        }

        let mood = mood_for(sentiment);
        tracing::debug!(mood = %mood, score = sentiment.score, "Classified entry text");

        Ok(MoodReading {
            mood,
            score: sentiment.score,
            emoji: mood.emoji(),
            sentiment: sentiment.label,
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.model.initialized()
    }

    async fn model(&self) -> AppResult<&Arc<dyn SentimentModel>> {
        self.model
            .get_or_try_init(|| async {
                tracing::info!("Loading sentiment analysis model...");
                (self.loader)()
            })
            .await
            .map_err(AppError::Inference)
    }
}

/// Map a binary sentiment onto the six text-reachable mood buckets.
/// Thresholds are exclusive: a confidence of exactly 0.95 is not "very".
pub fn mood_for(sentiment: Sentiment) -> Mood {
    let score = sentiment.score;
    match sentiment.label {
        SentimentLabel::Positive if score > STRONG_THRESHOLD => Mood::VeryHappy,
        SentimentLabel::Positive if score > MODERATE_THRESHOLD => Mood::Happy,
        SentimentLabel::Positive => Mood::SlightlyHappy,
        SentimentLabel::Negative if score > STRONG_THRESHOLD => Mood::VerySad,
        SentimentLabel::Negative if score > MODERATE_THRESHOLD => Mood::Sad,
        SentimentLabel::Negative => Mood::SlightlySad,
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
