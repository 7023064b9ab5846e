//! Sentiment inference backends.
//!
//! Everything above this module sees inference through [`SentimentModel`]:
//! text in, a binary label plus confidence out. Two backends ship:
//!
//! - [`HostedSentiment`] calls a Hugging Face style inference endpoint for a
//!   binary sentiment model (`distilbert-base-uncased-finetuned-sst-2-english`
//!   by default).
//! - [`LexiconSentiment`] is an offline, deterministic cue-word scorer used
//!   when no endpoint is configured.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, bail, Context};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
}

impl FromStr for SentimentLabel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "POSITIVE" => Ok(SentimentLabel::Positive),
            "NEGATIVE" => Ok(SentimentLabel::Negative),
            other => Err(anyhow!("unexpected sentiment label {other:?}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
    pub label: SentimentLabel,
    /// Confidence in `label`, within [0, 1].
    pub score: f64,
}

#[async_trait]
pub trait SentimentModel: Send + Sync {
    async fn classify(&self, text: &str) -> anyhow::Result<Sentiment>;
}

/// Build the backend selected by configuration.
pub fn load_model(config: &Config) -> anyhow::Result<Arc<dyn SentimentModel>> {
    match &config.sentiment_api_url {
        Some(base_url) => {
            let model = HostedSentiment::new(
                base_url,
                &config.sentiment_model,
                config.sentiment_api_token.clone(),
                Duration::from_secs(config.sentiment_timeout_secs),
            )?;
            tracing::info!(endpoint = %model.endpoint, "Using hosted sentiment model");
            Ok(Arc::new(model))
        }
        None => {
            tracing::info!("SENTIMENT_API_URL not set, using offline lexicon sentiment model");
            Ok(Arc::new(LexiconSentiment))
        }
    }
}

// ── Hosted inference ─────────────────────────────────────────────────────────

pub struct HostedSentiment {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Batched(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
    Error { error: String },
}

impl HostedSentiment {
    pub fn new(
        base_url: &str,
        model: &str,
        token: Option<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build inference HTTP client")?;

        Ok(Self {
            client,
            endpoint: format!("{}/{}", base_url.trim_end_matches('/'), model),
            token,
        })
    }
}

#[async_trait]
impl SentimentModel for HostedSentiment {
    async fn classify(&self, text: &str) -> anyhow::Result<Sentiment> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({ "inputs": text }));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("Inference API error {}: {}", status, body);
        }

        let parsed: InferenceResponse = response.json().await?;
        best_label(parsed)
    }
}

fn best_label(response: InferenceResponse) -> anyhow::Result<Sentiment> {
    let candidates = match response {
        InferenceResponse::Batched(mut batches) => {
            if batches.is_empty() {
                bail!("Inference API returned no results");
            }
            batches.swap_remove(0)
        }
        InferenceResponse::Flat(candidates) => candidates,
        InferenceResponse::Error { error } => bail!("Inference API error: {}", error),
    };

    let top = candidates
        .into_iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .ok_or_else(|| anyhow!("Inference API returned no labels"))?;

    Ok(Sentiment {
        label: top.label.parse()?,
        score: top.score,
    })
}

// ── Offline lexicon ──────────────────────────────────────────────────────────

const POSITIVE_CUES: &[&str] = &[
    "amazing", "awesome", "beautiful", "calm", "celebrated", "content", "delicious",
    "energized", "enjoy", "enjoyed", "excited", "fantastic", "fun", "glad", "good",
    "grateful", "great", "happy", "impressed", "inspired", "joy", "love", "loved",
    "motivated", "nice", "peaceful", "precious", "productive", "proud", "refreshing",
    "relaxed", "wonderful",
];

const NEGATIVE_CUES: &[&str] = &[
    "angry", "anxious", "argument", "awful", "bad", "bored", "cried", "depressed",
    "down", "exhausted", "frustrated", "hate", "hurt", "lonely", "lost", "miserable",
    "nervous", "overwhelming", "overwhelmed", "pain", "sad", "sick", "stressed",
    "stressful", "struggling", "terrible", "tired", "upset", "worried", "worse", "worst",
];

/// Deterministic cue-word scorer.
///
/// The label follows the balance of positive and negative cue words (ties
/// count as positive, matching the binary model's bias on bland text), and the
/// confidence grows with the size of the imbalance, staying in [0.5, 1).
pub struct LexiconSentiment;

impl LexiconSentiment {
    pub fn score(text: &str) -> Sentiment {
        let (mut pos, mut neg) = (0u32, 0u32);
        for word in text
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|w| !w.is_empty())
        {
            let word = word.to_lowercase();
            if POSITIVE_CUES.contains(&word.as_str()) {
                pos += 1;
            } else if NEGATIVE_CUES.contains(&word.as_str()) {
                neg += 1;
            }
        }

        let label = if neg > pos {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Positive
        };
        let balance = f64::from(pos.abs_diff(neg));
        let score = 0.5 + 0.5 * balance / f64::from(pos + neg + 1);

        Sentiment { label, score }
    }
}

#[async_trait]
impl SentimentModel for LexiconSentiment {
    async fn classify(&self, text: &str) -> anyhow::Result<Sentiment> {
        Ok(Self::score(text))
    }
}

// ── Test support ─────────────────────────────────────────────────────────────

/// Always answers with the same sentiment; records the last input it saw.
#[cfg(test)]
pub struct FixedSentiment {
    pub sentiment: Sentiment,
    pub last_input: std::sync::Mutex<Option<String>>,
}

#[cfg(test)]
impl FixedSentiment {
    pub fn new(label: SentimentLabel, score: f64) -> Self {
        Self {
            sentiment: Sentiment { label, score },
            last_input: std::sync::Mutex::new(None),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl SentimentModel for FixedSentiment {
    async fn classify(&self, text: &str) -> anyhow::Result<Sentiment> {
        *self.last_input.lock().unwrap() = Some(text.to_string());
        Ok(self.sentiment)
    }
}
