use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The seven mood buckets an entry can land in.
///
/// Variant order runs from happiest to saddest and is the order used when
/// mood counts are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mood {
    #[serde(rename = "Very Happy")]
    VeryHappy,
    #[serde(rename = "Happy")]
    Happy,
    #[serde(rename = "Slightly Happy")]
    SlightlyHappy,
    #[serde(rename = "Neutral")]
    Neutral,
    #[serde(rename = "Slightly Sad")]
    SlightlySad,
    #[serde(rename = "Sad")]
    Sad,
    #[serde(rename = "Very Sad")]
    VerySad,
}

/// Which affirmation pool a mood draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Neutral,
    Negative,
}

/// Score recorded for a quick-mood emoji that is not in the table.
pub const UNKNOWN_EMOJI_SCORE: f64 = 0.50;

impl Mood {
    pub const ALL: [Mood; 7] = [
        Mood::VeryHappy,
        Mood::Happy,
        Mood::SlightlyHappy,
        Mood::Neutral,
        Mood::SlightlySad,
        Mood::Sad,
        Mood::VerySad,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Mood::VeryHappy => "Very Happy",
            Mood::Happy => "Happy",
            Mood::SlightlyHappy => "Slightly Happy",
            Mood::Neutral => "Neutral",
            Mood::SlightlySad => "Slightly Sad",
            Mood::Sad => "Sad",
            Mood::VerySad => "Very Sad",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::VeryHappy => "😄",
            Mood::Happy => "🙂",
            Mood::SlightlyHappy => "😊",
            Mood::Neutral => "😐",
            Mood::SlightlySad => "😕",
            Mood::Sad => "😔",
            Mood::VerySad => "😢",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Mood::VeryHappy | Mood::Happy | Mood::SlightlyHappy => Tone::Positive,
            Mood::Neutral => Tone::Neutral,
            Mood::SlightlySad | Mood::Sad | Mood::VerySad => Tone::Negative,
        }
    }

    /// Fixed score recorded when the mood is picked directly instead of
    /// being inferred from text.
    pub fn quick_score(self) -> f64 {
        match self {
            Mood::VeryHappy | Mood::VerySad => 0.98,
            Mood::Happy | Mood::Sad => 0.90,
            Mood::SlightlyHappy | Mood::SlightlySad => 0.75,
            Mood::Neutral => 0.50,
        }
    }

    /// Resolve a quick-mood emoji to its (mood, score) pair. Unknown glyphs
    /// are logged as neutral.
    pub fn from_quick_emoji(emoji: &str) -> (Mood, f64) {
        Mood::ALL
            .into_iter()
            .find(|mood| mood.emoji() == emoji)
            .map(|mood| (mood, mood.quick_score()))
            .unwrap_or((Mood::Neutral, UNKNOWN_EMOJI_SCORE))
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown mood label: {0:?}")]
pub struct UnknownMood(pub String);

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|mood| mood.label() == s)
            .ok_or_else(|| UnknownMood(s.to_string()))
    }
}

impl TryFrom<String> for Mood {
    type Error = UnknownMood;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
