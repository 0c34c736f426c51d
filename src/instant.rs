//! Fixed-point time values.
//!
//! An [`Instant`] counts millionths of a time unit in an `i64`, so durations
//! such as `1.5` or `2.25` are exact and a slack of zero compares equal
//! without a tolerance. All arithmetic is checked.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A point on (or a span of) the project timeline, measured from the project start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "InstantRepr", into = "InstantRepr")]
pub struct Instant(i64);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseInstantError {
    #[error("{0:?} is not a number")]
    Invalid(String),

    #[error("{0:?} has more than {} decimal places", Instant::DECIMAL_PLACES)]
    TooPrecise(String),

    #[error("{0:?} is out of range")]
    OutOfRange(String),
}

impl Instant {
    pub const TICKS_PER_UNIT: i64 = 1_000_000;
    pub const DECIMAL_PLACES: usize = 6;
    pub const ZERO: Instant = Instant(0);
    pub const MAX: Instant = Instant(i64::MAX);

    pub const fn from_ticks(ticks: i64) -> Self {
        Self(ticks)
    }

    pub const fn ticks(self) -> i64 {
        self.0
    }

    /// `None` when `units` whole units do not fit.
    pub fn from_units(units: i64) -> Option<Self> {
        units.checked_mul(Self::TICKS_PER_UNIT).map(Self)
    }

    /// Rounds to the nearest tick. `None` for NaN, infinities and out of range values.
    pub fn from_f64(value: f64) -> Option<Self> {
        let ticks = (value * Self::TICKS_PER_UNIT as f64).round();
        if !ticks.is_finite() || ticks < i64::MIN as f64 || ticks >= i64::MAX as f64 {
            return None;
        }
        Some(Self(ticks as i64))
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / Self::TICKS_PER_UNIT as f64
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    fn is_whole(self) -> bool {
        self.0 % Self::TICKS_PER_UNIT == 0
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }
}

impl From<i32> for Instant {
    fn from(units: i32) -> Self {
        Self(i64::from(units) * Self::TICKS_PER_UNIT)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let per_unit = Self::TICKS_PER_UNIT.unsigned_abs();
        let (whole, fraction) = (magnitude / per_unit, magnitude % per_unit);
        if fraction == 0 {
            return write!(f, "{sign}{whole}");
        }
        let digits = format!("{fraction:0width$}", width = Self::DECIMAL_PLACES);
        write!(f, "{sign}{whole}.{}", digits.trim_end_matches('0'))
    }
}

/// Accepts `3`, `-2`, `1.5` and `.25`; at most six decimal places.
impl FromStr for Instant {
    type Err = ParseInstantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(ParseInstantError::Invalid(text.to_string()));
        }
        if fraction.len() > Self::DECIMAL_PLACES {
            return Err(ParseInstantError::TooPrecise(text.to_string()));
        }

        let out_of_range = || ParseInstantError::OutOfRange(text.to_string());
        let whole_ticks = if whole.is_empty() {
            0
        } else {
            whole
                .parse::<i64>()
                .ok()
                .and_then(|units| units.checked_mul(Self::TICKS_PER_UNIT))
                .ok_or_else(out_of_range)?
        };
        let fraction_ticks = format!("{fraction:0<width$}", width = Self::DECIMAL_PLACES)
            .parse::<i64>()
            .map_err(|_| ParseInstantError::Invalid(text.to_string()))?;
        let ticks = whole_ticks
            .checked_add(fraction_ticks)
            .ok_or_else(out_of_range)?;

        Ok(Self(if negative { -ticks } else { ticks }))
    }
}

/// Wire form: whole values as integers, fractional ones as floats. Strings are
/// read with the exact decimal parser.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum InstantRepr {
    Whole(i64),
    Fractional(f64),
    Text(String),
}

impl TryFrom<InstantRepr> for Instant {
    type Error = ParseInstantError;

    fn try_from(repr: InstantRepr) -> Result<Self, Self::Error> {
        match repr {
            InstantRepr::Whole(units) => Instant::from_units(units)
                .ok_or_else(|| ParseInstantError::OutOfRange(units.to_string())),
            InstantRepr::Fractional(value) => Instant::from_f64(value)
                .ok_or_else(|| ParseInstantError::OutOfRange(value.to_string())),
            InstantRepr::Text(text) => text.parse(),
        }
    }
}

impl From<Instant> for InstantRepr {
    fn from(instant: Instant) -> Self {
        if instant.is_whole() {
            InstantRepr::Whole(instant.0 / Instant::TICKS_PER_UNIT)
        } else {
            InstantRepr::Fractional(instant.as_f64())
        }
    }
}
