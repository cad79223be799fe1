use std::fmt;
use std::str::FromStr;

use super::error::ScheduleError;
use super::time::{Hour, ShiftSpan};

/// Quick-pick spans offered by the editor. Any other pair of hours stays valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Day,
    Morning,
    Afternoon,
    Night,
    Continuous,
}

impl Preset {
    pub const ALL: [Preset; 5] =
        [Preset::Day, Preset::Morning, Preset::Afternoon, Preset::Night, Preset::Continuous];

    /// Name accepted on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Preset::Day => "day",
            Preset::Morning => "morning",
            Preset::Afternoon => "afternoon",
            Preset::Night => "night",
            Preset::Continuous => "24h",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Preset::Day => "Journée",
            Preset::Morning => "Matin",
            Preset::Afternoon => "Après-midi",
            Preset::Night => "Nuit",
            Preset::Continuous => "24h",
        }
    }

    pub fn span(&self) -> ShiftSpan {
        let (start, end) = match self {
            Preset::Day => (8, 17),
            Preset::Morning => (6, 14),
            Preset::Afternoon => (14, 22),
            Preset::Night => (22, 6),
            Preset::Continuous => (0, 0),
        };
        ShiftSpan::new(Hour::wrapping(start), Hour::wrapping(end))
    }
}

impl FromStr for Preset {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" | "journee" | "journée" => Ok(Preset::Day),
            "morning" | "matin" => Ok(Preset::Morning),
            "afternoon" | "apres-midi" | "après-midi" => Ok(Preset::Afternoon),
            "night" | "nuit" => Ok(Preset::Night),
            "24h" | "continuous" | "continu" => Ok(Preset::Continuous),
            _ => Err(ScheduleError::UnknownPreset(s.to_string())),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.span().format_range())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_keys_roundtrip() {
        for preset in Preset::ALL {
            assert_eq!(preset.key().parse::<Preset>().unwrap(), preset);
        }
    }

    #[test]
    fn night_preset_is_overnight() {
        assert!(Preset::Night.span().duration().is_overnight);
        assert_eq!(Preset::Night.span().duration().hours, 8);
    }

    #[test]
    fn continuous_preset_is_the_sentinel() {
        assert_eq!(Preset::Continuous.span(), ShiftSpan::Continuous { start: Hour::MIDNIGHT });
    }

    #[test]
    fn display_includes_range() {
        assert_eq!(Preset::Morning.to_string(), "Matin (06:00 → 14:00)");
    }
}
