//! Whole-hour clock values and the span arithmetic of a shift.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::ScheduleError;

/// Hour on a 24-hour clock, always in `0..=23`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Hour(u8);

impl Hour {
    pub const MIDNIGHT: Hour = Hour(0);

    pub fn new(value: u8) -> Result<Self, ScheduleError> {
        Self::try_from(i64::from(value))
    }

    /// Build an hour, wrapping values past 23 around midnight.
    pub const fn wrapping(value: u8) -> Self {
        Hour(value % 24)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Every hour of the day in order, as offered by the editor dropdowns.
    pub fn all() -> impl Iterator<Item = Hour> {
        (0..24).map(Hour)
    }
}

impl TryFrom<i64> for Hour {
    type Error = ScheduleError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(hour) if hour < 24 => Ok(Hour(hour)),
            _ => Err(ScheduleError::InvalidHour(value)),
        }
    }
}

impl From<Hour> for u8 {
    fn from(hour: Hour) -> Self {
        hour.0
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

/// Time range covered by a shift.
///
/// The persisted form is a bare `(start, end)` pair where `start == end` means a
/// continuous 24-hour service; this type keeps that case apart from ordinary
/// same-day and overnight spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftSpan {
    /// `end > start`, both on the same calendar day.
    SameDay { start: Hour, end: Hour },
    /// `end < start`, crossing midnight into the next day.
    Overnight { start: Hour, end: Hour },
    /// Full 24 hours starting and ending at `start`.
    Continuous { start: Hour },
}

/// Result of the duration computation for a working span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftDuration {
    pub hours: u8,
    pub label: &'static str,
    pub is_overnight: bool,
}

impl ShiftSpan {
    pub fn new(start: Hour, end: Hour) -> Self {
        if end > start {
            ShiftSpan::SameDay { start, end }
        } else if end < start {
            ShiftSpan::Overnight { start, end }
        } else {
            ShiftSpan::Continuous { start }
        }
    }

    pub fn start(&self) -> Hour {
        match *self {
            ShiftSpan::SameDay { start, .. }
            | ShiftSpan::Overnight { start, .. }
            | ShiftSpan::Continuous { start } => start,
        }
    }

    pub fn end(&self) -> Hour {
        match *self {
            ShiftSpan::SameDay { end, .. } | ShiftSpan::Overnight { end, .. } => end,
            ShiftSpan::Continuous { start } => start,
        }
    }

    pub fn duration(&self) -> ShiftDuration {
        match *self {
            ShiftSpan::SameDay { start, end } => ShiftDuration {
                hours: end.0 - start.0,
                label: "journée",
                is_overnight: false,
            },
            ShiftSpan::Overnight { start, end } => ShiftDuration {
                hours: (24 - start.0) + end.0,
                label: "nuit",
                is_overnight: true,
            },
            ShiftSpan::Continuous { .. } => {
                ShiftDuration { hours: 24, label: "service continu", is_overnight: false }
            }
        }
    }

    /// Whether the span finishes on the calendar day after it starts.
    pub fn ends_next_day(&self) -> bool {
        !matches!(self, ShiftSpan::SameDay { .. })
    }

    /// `"HH:00 → HH:00"`, suffixed with `(+1j)` when the span ends the next day.
    pub fn format_range(&self) -> String {
        let range = format!("{} → {}", self.start(), self.end());
        if self.ends_next_day() { format!("{} (+1j)", range) } else { range }
    }
}
