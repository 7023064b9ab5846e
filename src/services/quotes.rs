use chrono::{Datelike, NaiveDate};

use crate::models::{Mood, Tone};

const POSITIVE_QUOTES: [&str; 4] = [
    "Keep shining! Your positive energy is contagious! ✨",
    "You're doing amazing! Keep up the great vibes! 🌟",
    "Your happiness is inspiring! Share it with the world! 🌈",
    "What a wonderful day! Keep that smile going! 😊",
];

const NEGATIVE_QUOTES: [&str; 4] = [
    "Every storm runs out of rain. Better days are coming! 🌈",
    "You're stronger than you think. This too shall pass! 💪",
    "Be kind to yourself. Tomorrow is a new day! 🌅",
    "It's okay to not be okay. Take care of yourself! 💙",
];

const NEUTRAL_QUOTES: [&str; 4] = [
    "Every day is a fresh start! Make it count! 🌟",
    "You're on your own unique journey. Embrace it! 🚀",
    "Small steps every day lead to big changes! 🌱",
    "Keep going, you're making progress! 💫",
];

/// `NaiveDate::num_days_from_ce` of 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// Pick the affirmation for `mood` on `date`. Every call on the same day
/// returns the same quote for a given tone, across restarts.
pub fn pick_quote(mood: Mood, date: NaiveDate) -> &'static str {
    let pool: &[&'static str] = match mood.tone() {
        Tone::Positive => &POSITIVE_QUOTES,
        Tone::Negative => &NEGATIVE_QUOTES,
        Tone::Neutral => &NEUTRAL_QUOTES,
    };
    pool[day_index(date, pool.len())]
}

fn day_index(date: NaiveDate, len: usize) -> usize {
    let epoch_day = i64::from(date.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE;
    epoch_day.rem_euclid(len as i64) as usize
}
