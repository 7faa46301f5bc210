use crate::error::{FormatError, FormatResult};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

const SECS_PER_MIN: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MIN;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

const SEPARATOR: &str = ", ";

/// Whether a duration that ends on a whole minute keeps its dangling `", "`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UptimeStyle {
    /// `120` renders as `"2 minutes, "`.
    #[default]
    Faithful,
    /// `120` renders as `"2 minutes"`.
    Trimmed,
}

/// A second count split into days, hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Uptime {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Uptime {
    pub fn from_secs(total_seconds: u64) -> Self {
        let mins = total_seconds / 60;
        let hours = mins / 60;
        let days = hours / 24;

        Self {
            days,
            hours: hours % 24,
            minutes: mins % 60,
            seconds: total_seconds % 60,
        }
    }

    pub fn total_secs(&self) -> u64 {
        self.days
            .saturating_mul(SECS_PER_DAY)
            .saturating_add(self.hours * SECS_PER_HOUR)
            .saturating_add(self.minutes * SECS_PER_MIN)
            .saturating_add(self.seconds)
    }

    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

impl fmt::Display for Uptime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0 seconds");
        }

        if self.days > 0 {
            write!(f, "{} days{}", self.days, SEPARATOR)?;
        }
        if self.hours > 0 {
            write!(f, "{} hours{}", self.hours, SEPARATOR)?;
        }
        if self.minutes > 0 {
            write!(f, "{} minutes{}", self.minutes, SEPARATOR)?;
        }
        // No separator after seconds; a whole-minute value keeps the one above.
        if self.seconds > 0 {
            write!(f, "{} seconds", self.seconds)?;
        }

        Ok(())
    }
}

pub fn format_uptime(total_seconds: u64) -> String {
    Uptime::from_secs(total_seconds).to_string()
}

pub fn format_uptime_with(total_seconds: u64, style: UptimeStyle) -> String {
    let text = format_uptime(total_seconds);
    match style {
        UptimeStyle::Faithful => text,
        UptimeStyle::Trimmed => match text.strip_suffix(SEPARATOR) {
            Some(trimmed) => trimmed.to_string(),
            None => text,
        },
    }
}

/// Formats a signed second count, rejecting negatives instead of producing
/// a malformed string.
pub fn try_format_uptime(total_seconds: i64) -> FormatResult<String> {
    Ok(format_uptime(checked_seconds(total_seconds)?))
}

fn checked_seconds(value: i64) -> FormatResult<u64> {
    u64::try_from(value).map_err(|_| {
        debug!("rejecting negative second count {}", value);
        FormatError::NegativeSeconds(value)
    })
}

/// Converts a floating point second count, which is how a page script
/// would hand it over, into whole seconds.
pub fn seconds_from_f64(value: f64) -> FormatResult<u64> {
    if value.is_nan() {
        return Err(FormatError::InvalidInput("NaN is not a second count".to_string()));
    }
    if value.is_infinite() {
        return Err(FormatError::OutOfRange(format!("{} seconds", value)));
    }
    if value.fract() != 0.0 {
        debug!("rejecting fractional second count {}", value);
        return Err(FormatError::NotAnInteger(value));
    }
    if value < 0.0 {
        // `as` saturates, which is fine for the error payload.
        return Err(FormatError::NegativeSeconds(value as i64));
    }
    // u64::MAX as f64 rounds up to 2^64, so equality is already out of range.
    if value >= u64::MAX as f64 {
        return Err(FormatError::OutOfRange(format!("{} seconds", value)));
    }
    Ok(value as u64)
}

/// Parses either a plain integer (`"3661"`) or a humantime duration
/// (`"1h 1m 1s"`) into whole seconds.
pub fn parse_seconds(input: &str) -> FormatResult<u64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FormatError::InvalidInput("empty second count".to_string()));
    }

    if let Ok(secs) = trimmed.parse::<u64>() {
        return Ok(secs);
    }
    if let Ok(secs) = trimmed.parse::<i64>() {
        return checked_seconds(secs);
    }
    if let Ok(value) = trimmed.parse::<f64>() {
        return seconds_from_f64(value);
    }

    let duration = humantime::parse_duration(trimmed)
        .map_err(|e| FormatError::InvalidInput(format!("'{}': {}", trimmed, e)))?;
    if duration.subsec_nanos() != 0 {
        return Err(FormatError::NotAnInteger(duration.as_secs_f64()));
    }
    Ok(duration.as_secs())
}
