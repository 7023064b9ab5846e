use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::models::{JournalEntry, Mood};

pub const EMPTY_WEEK_SUMMARY: &str = "Start logging your moods to see your weekly summary!";

/// Days before today that still count towards the weekly summary.
const WEEK_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MoodSummary {
    pub mood_counts: BTreeMap<Mood, usize>,
    pub total_entries: usize,
    pub weekly_average_score: Option<f64>,
    pub summary: String,
}

pub fn summarize(entries: &[JournalEntry], today: NaiveDate) -> MoodSummary {
    let mut mood_counts = BTreeMap::new();
    for entry in entries {
        *mood_counts.entry(entry.mood).or_insert(0) += 1;
    }

    let week_start = today - Duration::days(WEEK_WINDOW_DAYS);
    let weekly: Vec<&JournalEntry> = entries.iter().filter(|e| e.date >= week_start).collect();

    let (weekly_average_score, summary) = match most_frequent(weekly.iter().map(|e| e.mood)) {
        Some(top) => {
            let average = weekly.iter().map(|e| e.mood_score).sum::<f64>() / weekly.len() as f64;
            let summary = format!(
                "This week, you felt mostly {}! You logged {} entries.",
                top.label().to_lowercase(),
                weekly.len()
            );
            (Some(average), summary)
        }
        None => (None, EMPTY_WEEK_SUMMARY.to_string()),
    };

    MoodSummary {
        mood_counts,
        total_entries: entries.len(),
        weekly_average_score,
        summary,
    }
}

/// Most common mood; a tie goes to whichever mood appeared first.
fn most_frequent(moods: impl Iterator<Item = Mood>) -> Option<Mood> {
    let mut tally: Vec<(Mood, usize)> = Vec::new();
    for mood in moods {
        match tally.iter_mut().find(|(m, _)| *m == mood) {
            Some((_, count)) => *count += 1,
            None => tally.push((mood, 1)),
        }
    }

    let mut best: Option<(Mood, usize)> = None;
    for (mood, count) in tally {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((mood, count));
        }
    }
    best.map(|(mood, _)| mood)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, date: NaiveDate, mood: Mood, score: f64) -> JournalEntry {
        JournalEntry {
            id,
            date,
            entry_text: String::new(),
            mood,
            mood_score: score,
            emoji: Some(mood.emoji().to_string()),
            timestamp: date.and_hms_opt(12, 0, 0).unwrap(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_empty_entries() {
        let summary = summarize(&[], today());
        assert!(summary.mood_counts.is_empty());
        assert_eq!(summary.total_entries, 0);
        assert_eq!(summary.weekly_average_score, None);
        assert_eq!(summary.summary, EMPTY_WEEK_SUMMARY);
    }

    #[test]
    fn test_counts_and_weekly_sentence() {
        let entries = vec![
            entry(1, today(), Mood::Happy, 0.9),
            entry(2, today(), Mood::Happy, 0.9),
            entry(3, today(), Mood::Sad, 0.6),
        ];
        let summary = summarize(&entries, today());

        assert_eq!(summary.mood_counts.len(), 2);
        assert_eq!(summary.mood_counts[&Mood::Happy], 2);
        assert_eq!(summary.mood_counts[&Mood::Sad], 1);
        assert_eq!(summary.total_entries, 3);
        assert_eq!(
            summary.summary,
            "This week, you felt mostly happy! You logged 3 entries."
        );
        let avg = summary.weekly_average_score.unwrap();
        assert!((avg - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_window_includes_exactly_seven_days_back() {
        let entries = vec![
            entry(1, today() - Duration::days(7), Mood::Sad, 0.9),
            entry(2, today() - Duration::days(8), Mood::Happy, 0.9),
            entry(3, today() - Duration::days(30), Mood::Happy, 0.9),
        ];
        let summary = summarize(&entries, today());

        assert_eq!(summary.total_entries, 3);
        assert_eq!(
            summary.summary,
            "This week, you felt mostly sad! You logged 1 entries."
        );
    }

    #[test]
    fn test_only_old_entries_gives_prompt_but_counts_everything() {
        let entries = vec![entry(1, today() - Duration::days(20), Mood::VeryHappy, 0.98)];
        let summary = summarize(&entries, today());

        assert_eq!(summary.summary, EMPTY_WEEK_SUMMARY);
        assert_eq!(summary.weekly_average_score, None);
        assert_eq!(summary.mood_counts[&Mood::VeryHappy], 1);
    }

    #[test]
    fn test_future_dates_count_as_this_week() {
        let entries = vec![entry(1, today() + Duration::days(3), Mood::Neutral, 0.5)];
        let summary = summarize(&entries, today());
        assert_eq!(
            summary.summary,
            "This week, you felt mostly neutral! You logged 1 entries."
        );
    }

    #[test]
    fn test_tie_goes_to_first_encountered() {
        let entries = vec![
            entry(1, today(), Mood::SlightlySad, 0.7),
            entry(2, today(), Mood::VeryHappy, 0.99),
            entry(3, today(), Mood::VeryHappy, 0.99),
            entry(4, today(), Mood::SlightlySad, 0.7),
        ];
        let summary = summarize(&entries, today());
        assert!(summary.summary.contains("mostly slightly sad!"));
    }

    #[test]
    fn test_mood_counts_serialize_with_labels() {
        let entries = vec![
            entry(1, today(), Mood::VeryHappy, 0.99),
            entry(2, today(), Mood::SlightlySad, 0.7),
        ];
        let json = serde_json::to_value(summarize(&entries, today())).unwrap();
        assert_eq!(json["mood_counts"]["Very Happy"], 1);
        assert_eq!(json["mood_counts"]["Slightly Sad"], 1);
        assert_eq!(json["total_entries"], 2);
    }
}
