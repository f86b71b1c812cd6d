//! Waiting time until a journey's departure

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A non-negative `hh:mm:ss` countdown until a vehicle leaves the stop
///
/// Sourced verbatim from the upstream schedule payload and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitingTime {
    hours: u32,
    minutes: u32,
    seconds: u32,
}

impl WaitingTime {
    /// Build a waiting time from already-split components
    #[must_use]
    pub const fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Hours component
    #[must_use]
    pub const fn hours(&self) -> u32 {
        self.hours
    }

    /// Minutes component
    #[must_use]
    pub const fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Seconds component
    #[must_use]
    pub const fn seconds(&self) -> u32 {
        self.seconds
    }
}

impl FromStr for WaitingTime {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split(':');
        let (Some(hours), Some(minutes), Some(seconds), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(DomainError::InvalidWaitingTime(s.to_string()));
        };

        let parse = |field: &str| {
            field
                .trim()
                .parse::<u32>()
                .map_err(|_| DomainError::InvalidWaitingTime(s.to_string()))
        };

        Ok(Self {
            hours: parse(hours)?,
            minutes: parse(minutes)?,
            seconds: parse(seconds)?,
        })
    }
}

impl fmt::Display for WaitingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_countdown() {
        let time: WaitingTime = "01:05:30".parse().unwrap();
        assert_eq!(time.hours(), 1);
        assert_eq!(time.minutes(), 5);
        assert_eq!(time.seconds(), 30);
    }

    #[test]
    fn parses_zero_countdown() {
        let time: WaitingTime = "00:00:00".parse().unwrap();
        assert_eq!(time, WaitingTime::new(0, 0, 0));
    }

    #[test]
    fn rejects_missing_fields() {
        assert!("12:30".parse::<WaitingTime>().is_err());
        assert!("".parse::<WaitingTime>().is_err());
    }

    #[test]
    fn rejects_extra_fields() {
        assert!("1:2:3:4".parse::<WaitingTime>().is_err());
    }

    #[test]
    fn rejects_non_numeric_fields() {
        assert!("aa:05:30".parse::<WaitingTime>().is_err());
        assert!("00:-1:30".parse::<WaitingTime>().is_err());
    }

    #[test]
    fn display_is_zero_padded() {
        let time = WaitingTime::new(2, 5, 0);
        assert_eq!(time.to_string(), "02:05:00");
    }

    #[test]
    fn display_roundtrips_through_parse() {
        let time = WaitingTime::new(0, 12, 37);
        let reparsed: WaitingTime = time.to_string().parse().unwrap();
        assert_eq!(time, reparsed);
    }
}
