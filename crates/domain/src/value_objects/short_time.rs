//! Short spoken-language rendering of a waiting time
//!
//! A [`ShortTime`] is the derived, speakable form of a [`WaitingTime`]: a
//! small value tagged with its dominant unit. Some conversions:
//!
//! - `00:00:37` => 37, seconds
//! - `00:02:30` => 2, minutes
//! - `00:01:00` => "une", minutes
//! - `01:05:30` => "1 heure 5 minutes", hours
//! - `02:05:30` => "dans plus de 2 heures", hours

use std::fmt;

use crate::value_objects::WaitingTime;

/// Fixed phrase spoken instead of a detailed countdown for long waits
pub(crate) const LONG_WAIT_PHRASE: &str = "dans plus de 2 heures";

/// The dominant time unit of a [`ShortTime`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    /// Seconds
    Second,
    /// Minutes
    Minute,
    /// Hours
    Hour,
}

impl TimeUnit {
    /// French singular label spoken after the value
    ///
    /// Hour renderings embed their own wording ("1 heure 5 minutes",
    /// "dans plus de 2 heures"), so no label follows them.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Second => "seconde",
            Self::Minute => "minute",
            Self::Hour => "",
        }
    }
}

/// The display value of a [`ShortTime`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortTimeValue {
    /// A number rendered as digits
    Number(u32),
    /// The spoken word "une", used instead of the numeral 1
    ///
    /// The feminine form matches "seconde"/"minute" and is kept even before
    /// the masculine "heure", mirroring the product's established voice.
    One,
    /// A fixed phrase carrying its own unit wording
    Phrase(String),
}

impl ShortTimeValue {
    /// Wrap a numeric value, substituting the spoken word for exactly 1
    fn number(value: u32) -> Self {
        if value == 1 { Self::One } else { Self::Number(value) }
    }
}

impl fmt::Display for ShortTimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::One => write!(f, "une"),
            Self::Phrase(phrase) => write!(f, "{phrase}"),
        }
    }
}

/// A waiting time shortened to its speakable value and dominant unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortTime {
    value: ShortTimeValue,
    unit: TimeUnit,
}

impl ShortTime {
    /// Shorten a countdown to its speakable form
    ///
    /// Waits of two hours or more collapse into a fixed phrase, the minute
    /// count is intentionally discarded. Below one minute the seconds field
    /// is spoken.
    #[must_use]
    pub fn from_waiting_time(time: &WaitingTime) -> Self {
        let hours = time.hours();
        let minutes = time.minutes();

        if hours >= 2 {
            return Self {
                value: ShortTimeValue::Phrase(LONG_WAIT_PHRASE.to_string()),
                unit: TimeUnit::Hour,
            };
        }
        if hours > 0 {
            return Self {
                value: ShortTimeValue::Phrase(format!("{hours} heure {minutes} minutes")),
                unit: TimeUnit::Hour,
            };
        }
        if minutes == 0 {
            return Self {
                value: ShortTimeValue::number(time.seconds()),
                unit: TimeUnit::Second,
            };
        }
        Self {
            value: ShortTimeValue::number(minutes),
            unit: TimeUnit::Minute,
        }
    }

    /// The display value
    #[must_use]
    pub const fn value(&self) -> &ShortTimeValue {
        &self.value
    }

    /// The dominant unit
    #[must_use]
    pub const fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Whether the unit label takes a plural "s"
    ///
    /// Only numeric values greater than 1 pluralize; the word "une" and
    /// fixed phrases never do.
    #[must_use]
    pub const fn pluralizes(&self) -> bool {
        matches!(self.value, ShortTimeValue::Number(n) if n > 1)
    }
}

impl From<&WaitingTime> for ShortTime {
    fn from(time: &WaitingTime) -> Self {
        Self::from_waiting_time(time)
    }
}
