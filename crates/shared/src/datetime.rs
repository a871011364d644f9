//! Display formatting for activity timestamps.

use chrono::{DateTime, FixedOffset, Local, Offset, Utc};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Format used for every timestamp returned to clients.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Error returned when a time zone setting cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid time zone '{0}': expected \"local\", \"UTC\" or an offset like \"+08:00\"")]
pub struct InvalidTimeZone(pub String);

/// Time zone in which timestamps are rendered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum DisplayTimeZone {
    /// Local zone of the serving process.
    #[default]
    Local,
    /// Fixed offset from UTC.
    Fixed(FixedOffset),
}

impl DisplayTimeZone {
    /// UTC expressed as a fixed offset.
    pub fn utc() -> Self {
        DisplayTimeZone::Fixed(Utc.fix())
    }

    /// Formats an instant as `YYYY-MM-DD HH:mm` in this zone.
    pub fn format(&self, instant: DateTime<Utc>) -> String {
        match self {
            DisplayTimeZone::Local => instant
                .with_timezone(&Local)
                .format(DISPLAY_FORMAT)
                .to_string(),
            DisplayTimeZone::Fixed(offset) => instant
                .with_timezone(offset)
                .format(DISPLAY_FORMAT)
                .to_string(),
        }
    }

    /// Formats an optional instant, keeping `None` as `None`.
    pub fn format_opt(&self, instant: Option<DateTime<Utc>>) -> Option<String> {
        instant.map(|i| self.format(i))
    }
}

impl FromStr for DisplayTimeZone {
    type Err = InvalidTimeZone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "local" => return Ok(DisplayTimeZone::Local),
            "utc" | "z" => return Ok(DisplayTimeZone::utc()),
            _ => {}
        }
        parse_offset(trimmed)
            .map(DisplayTimeZone::Fixed)
            .ok_or_else(|| InvalidTimeZone(s.to_string()))
    }
}

impl TryFrom<String> for DisplayTimeZone {
    type Error = InvalidTimeZone;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for DisplayTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayTimeZone::Local => f.write_str("local"),
            DisplayTimeZone::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

/// Parses `+HH:MM`, `-HH:MM`, `+HHMM` or `+HH`.
fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let (hours, minutes) = match digits.len() {
        2 => (digits.parse::<i32>().ok()?, 0),
        4 => (
            digits[..2].parse::<i32>().ok()?,
            digits[2..].parse::<i32>().ok()?,
        ),
        _ => return None,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
