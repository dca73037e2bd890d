use std::fmt;
use std::str::FromStr;

use crate::model::taxonomy::ParseSlugError;

/// Countdown configured for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimerDuration {
    #[default]
    Off,
    Seconds(u32),
}

impl TimerDuration {
    /// Choices offered before a quiz starts.
    pub const PRESETS: [TimerDuration; 5] = [
        TimerDuration::Off,
        TimerDuration::Seconds(60),
        TimerDuration::Seconds(120),
        TimerDuration::Seconds(300),
        TimerDuration::Seconds(600),
    ];

    /// Zero seconds means no countdown at all.
    #[must_use]
    pub fn from_secs(secs: u32) -> Self {
        if secs == 0 { Self::Off } else { Self::Seconds(secs) }
    }

    /// `Seconds(0)` collapses to `Off`.
    #[must_use]
    pub fn normalized(self) -> Self {
        match self {
            TimerDuration::Seconds(secs) => Self::from_secs(secs),
            TimerDuration::Off => Self::Off,
        }
    }

    #[must_use]
    pub fn is_preset(self) -> bool {
        Self::PRESETS.contains(&self)
    }

    #[must_use]
    pub fn secs(self) -> Option<u32> {
        match self {
            TimerDuration::Off => None,
            TimerDuration::Seconds(secs) => Some(secs),
        }
    }

    #[must_use]
    pub fn label(self) -> String {
        match self {
            TimerDuration::Off => "No timer".to_string(),
            TimerDuration::Seconds(secs) if secs % 60 == 0 => {
                let minutes = secs / 60;
                if minutes == 1 {
                    "1 minute".to_string()
                } else {
                    format!("{minutes} minutes")
                }
            }
            TimerDuration::Seconds(secs) => format!("{secs} seconds"),
        }
    }
}

impl fmt::Display for TimerDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerDuration::Off => f.write_str("off"),
            TimerDuration::Seconds(secs) => write!(f, "{secs}"),
        }
    }
}

impl FromStr for TimerDuration {
    type Err = ParseSlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("off") || trimmed.eq_ignore_ascii_case("none") {
            return Ok(Self::Off);
        }
        trimmed
            .parse::<u32>()
            .map(Self::from_secs)
            .map_err(|_| ParseSlugError::new("timer", s))
    }
}
