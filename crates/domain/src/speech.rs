//! Speech-fragment assembly for waiting times
//!
//! Turns the next one or two departures toward a destination into a French
//! phrase. Some conversions:
//!
//! - `["00:00:45", "00:15:00"]` => "45 secondes puis dans 15 minutes"
//! - `["00:10:00", "00:15:00"]` => "10 puis dans 15 minutes"
//! - `["00:01:00"]` => "une minute"

use std::fmt;

use crate::value_objects::{ShortTime, WaitingTime};

/// A finished spoken response, tagged with its markup kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Utterance {
    /// SSML markup (wrapped in `<speak>` tags)
    Ssml(String),
    /// Plain text, spoken as-is
    Plain(String),
}

impl Utterance {
    /// The markup or text payload
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ssml(text) | Self::Plain(text) => text,
        }
    }
}

impl fmt::Display for Utterance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Render the next departures toward one destination as a phrase
///
/// Only the first two waiting times are spoken, later ones are ignored.
/// When both have the same unit, the first value's unit label is elided and
/// the shared unit is stated once at the end ("10 puis dans 15 minutes");
/// when units differ, each value carries its own unit. The elision depends
/// solely on unit equality, never on the numeric values.
#[must_use]
pub fn waiting_times_phrase(times: &[WaitingTime]) -> String {
    let Some(first) = times.first() else {
        return String::new();
    };
    let first = ShortTime::from_waiting_time(first);

    let mut phrase = first.value().to_string();
    if let Some(second) = times.get(1) {
        let second = ShortTime::from_waiting_time(second);
        if first.unit() != second.unit() {
            push_unit(&mut phrase, &first);
        }
        phrase.push_str(" puis dans ");
        phrase.push_str(&second.value().to_string());
        push_unit(&mut phrase, &second);
    } else {
        push_unit(&mut phrase, &first);
    }
    phrase
}

/// Append a unit label, pluralized for numeric values above 1
fn push_unit(phrase: &mut String, time: &ShortTime) {
    let label = time.unit().label();
    if label.is_empty() {
        return;
    }
    phrase.push(' ');
    phrase.push_str(label);
    if time.pluralizes() {
        phrase.push('s');
    }
}
