use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ScheduleError;

/// Day of the week used as a column of the schedule grid.
///
/// Serialized with the French labels the backend stores as map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    #[serde(rename = "Lundi")]
    Monday,
    #[serde(rename = "Mardi")]
    Tuesday,
    #[serde(rename = "Mercredi")]
    Wednesday,
    #[serde(rename = "Jeudi")]
    Thursday,
    #[serde(rename = "Vendredi")]
    Friday,
    #[serde(rename = "Samedi")]
    Saturday,
    #[serde(rename = "Dimanche")]
    Sunday,
}

impl DayOfWeek {
    /// All days in canonical order, Monday first.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Label stored by the backend and shown in column headers.
    pub fn label(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Lundi",
            DayOfWeek::Tuesday => "Mardi",
            DayOfWeek::Wednesday => "Mercredi",
            DayOfWeek::Thursday => "Jeudi",
            DayOfWeek::Friday => "Vendredi",
            DayOfWeek::Saturday => "Samedi",
            DayOfWeek::Sunday => "Dimanche",
        }
    }

    /// Parse a day from its label, English name, or three-letter abbreviation.
    pub fn from_label(value: &str) -> Option<DayOfWeek> {
        match value.trim().to_lowercase().as_str() {
            "lundi" | "lun" | "monday" | "mon" => Some(DayOfWeek::Monday),
            "mardi" | "mar" | "tuesday" | "tue" => Some(DayOfWeek::Tuesday),
            "mercredi" | "mer" | "wednesday" | "wed" => Some(DayOfWeek::Wednesday),
            "jeudi" | "jeu" | "thursday" | "thu" => Some(DayOfWeek::Thursday),
            "vendredi" | "ven" | "friday" | "fri" => Some(DayOfWeek::Friday),
            "samedi" | "sam" | "saturday" | "sat" => Some(DayOfWeek::Saturday),
            "dimanche" | "dim" | "sunday" | "sun" => Some(DayOfWeek::Sunday),
            _ => None,
        }
    }
}

impl FromStr for DayOfWeek {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayOfWeek::from_label(s).ok_or_else(|| ScheduleError::InvalidDay(s.to_string()))
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
