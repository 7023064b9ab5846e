//! Mood trend chart, serialized as a Plotly figure the dashboard can hand
//! straight to `Plotly.newPlot`.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{JournalEntry, Mood};

/// Maximum number of points plotted.
pub const CHART_WINDOW: usize = 30;

const ACCENT_CYAN: &str = "#00f5ff";
const ACCENT_MAGENTA: &str = "#ff00ff";
const BACKGROUND: &str = "#1a1a2e";
const GRID: &str = "#333";

/// Serializes to `{}` when there is nothing to plot.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct MoodChart {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<Trace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub x: Vec<NaiveDate>,
    pub y: Vec<f64>,
    pub mode: &'static str,
    pub name: &'static str,
    pub line: Line,
    pub marker: Marker,
    pub hovertext: Vec<String>,
    pub hoverinfo: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Line {
    pub color: &'static str,
    pub width: u32,
    pub shape: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Marker {
    pub size: u32,
    pub color: &'static str,
    pub line: MarkerOutline,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MarkerOutline {
    pub color: &'static str,
    pub width: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Layout {
    pub title: &'static str,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub plot_bgcolor: &'static str,
    pub paper_bgcolor: &'static str,
    pub font: Font,
    pub hovermode: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Axis {
    pub title: &'static str,
    pub gridcolor: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Font {
    pub color: &'static str,
}

/// Build the trend chart from entries ordered newest first. Only the most
/// recent [`CHART_WINDOW`] entries are plotted, oldest to newest.
pub fn build_mood_chart(entries_newest_first: &[JournalEntry]) -> MoodChart {
    if entries_newest_first.is_empty() {
        return MoodChart::default();
    }

    let window: Vec<&JournalEntry> = entries_newest_first
        .iter()
        .take(CHART_WINDOW)
        .rev()
        .collect();

    let hovertext = window
        .iter()
        .map(|e| {
            let emoji = e.emoji.as_deref().unwrap_or(Mood::Neutral.emoji());
            format!("{} {}<br>{}", e.mood, emoji, e.date)
        })
        .collect();

    let trace = Trace {
        kind: "scatter",
        x: window.iter().map(|e| e.date).collect(),
        y: window.iter().map(|e| e.mood_score).collect(),
        mode: "lines+markers",
        name: "Mood Score",
        line: Line {
            color: ACCENT_CYAN,
            width: 3,
            shape: "spline",
        },
        marker: Marker {
            size: 10,
            color: ACCENT_MAGENTA,
            line: MarkerOutline {
                color: ACCENT_CYAN,
                width: 2,
            },
        },
        hovertext,
        hoverinfo: "text",
    };

    let layout = Layout {
        title: "Mood Trend Over Time",
        xaxis: Axis {
            title: "Date",
            gridcolor: GRID,
            range: None,
        },
        yaxis: Axis {
            title: "Mood Score",
            gridcolor: GRID,
            range: Some([0.0, 1.0]),
        },
        plot_bgcolor: BACKGROUND,
        paper_bgcolor: BACKGROUND,
        font: Font { color: ACCENT_CYAN },
        hovermode: "closest",
    };

    MoodChart {
        data: vec![trace],
        layout: Some(layout),
    }
}
