use chrono::{Local, TimeZone};

pub const APP_TITLE: &str = "Sensor Ripple";

/// Where a quadrant label sits relative to the screen centre.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelAnchor {
    Top,
    Bottom,
    Left,
    Right,
}

pub const QUADRANT_LABELS: [(&str, LabelAnchor); 4] = [
    ("Humidity", LabelAnchor::Top),
    ("Temperature", LabelAnchor::Bottom),
    ("Noise", LabelAnchor::Left),
    ("Light", LabelAnchor::Right),
];

/// Short date and time of a sample timestamp in `tz`.
pub fn format_timestamp_in<Tz>(timestamp: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match tz.timestamp_opt(timestamp, 0).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => format!("@{timestamp}"),
    }
}

#[inline]
pub fn format_timestamp(timestamp: i64) -> String {
    format_timestamp_in(timestamp, &Local)
}

/// Window title carrying the current sample time.
pub fn window_title(timestamp_text: &str) -> String {
    format!("{APP_TITLE} | {timestamp_text}")
}

/// One-line description of the label layout, logged at startup.
pub fn describe_labels() -> String {
    QUADRANT_LABELS
        .iter()
        .map(|(label, anchor)| format!("{anchor:?}: {label}"))
        .collect::<Vec<_>>()
        .join(", ")
}
