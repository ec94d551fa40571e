use crate::calc::error::CalcError;
use crate::units::Quantity;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Real seconds per tick at the normal rate
pub const SECONDS_PER_TICK: f64 = 1.2;
/// Real seconds per tick with the double-rate modifier
pub const DOUBLE_RATE_SECONDS_PER_TICK: f64 = 0.6;

/// Tick speed, the double-rate modifier halves tick duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickRate {
    #[default]
    Normal,
    Double,
}

impl TickRate {
    pub fn from_double_rate(double_rate: bool) -> Self {
        if double_rate {
            TickRate::Double
        } else {
            TickRate::Normal
        }
    }

    pub fn is_double(self) -> bool {
        self == TickRate::Double
    }

    pub fn seconds_per_tick(self) -> f64 {
        match self {
            TickRate::Normal => SECONDS_PER_TICK,
            TickRate::Double => DOUBLE_RATE_SECONDS_PER_TICK,
        }
    }
}

/// Whole hours, minutes (0-59) and seconds (0-59)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hms {
    pub hours: u64,
    pub minutes: u8,
    pub seconds: u8,
}

impl Hms {
    /// Split a duration in seconds, dropping the fractional part
    ///
    /// Returns `None` for negative, non-finite or out-of-range input.
    pub fn from_seconds(total: f64) -> Option<Self> {
        // u64::MAX as f64 rounds up to 2^64, so `>=` keeps the cast in range
        if !total.is_finite() || total < 0.0 || total >= u64::MAX as f64 {
            return None;
        }

        let whole = total.floor() as u64;
        Some(Self {
            hours: whole / 3600,
            minutes: ((whole % 3600) / 60) as u8,
            seconds: (whole % 60) as u8,
        })
    }

    pub fn total_seconds(&self) -> u64 {
        self.hours * 3600 + u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }
}

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m {}s", self.hours, self.minutes, self.seconds)
    }
}

/// What the result area shows after a successful calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DisplayResult {
    /// The current value already meets or exceeds the goal
    AlreadyReached,
    /// Time left until the goal
    Remaining(Hms),
}

impl DisplayResult {
    pub fn total_seconds(&self) -> u64 {
        match self {
            DisplayResult::AlreadyReached => 0,
            DisplayResult::Remaining(hms) => hms.total_seconds(),
        }
    }
}

/// Remaining time from normalized magnitudes
///
/// The rate is only examined when the goal is still ahead, so a zero rate
/// with `have >= want` reports the goal as reached.
pub fn compute_remaining_time(
    want: f64,
    have: f64,
    per_tick: f64,
    double_rate: bool,
) -> Result<DisplayResult, CalcError> {
    let remaining = want - have;
    if remaining <= 0.0 {
        return Ok(DisplayResult::AlreadyReached);
    }

    if per_tick == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    if per_tick < 0.0 {
        return Err(CalcError::NonPositiveRate(per_tick));
    }

    let ticks = remaining / per_tick;
    let seconds = ticks * TickRate::from_double_rate(double_rate).seconds_per_tick();

    Hms::from_seconds(seconds)
        .map(DisplayResult::Remaining)
        .ok_or(CalcError::OutOfRange)
}

/// The three quantities and modifier the form collects
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressRequest {
    pub want: Quantity,
    pub have: Quantity,
    pub per_tick: Quantity,
    pub rate: TickRate,
}

impl ProgressRequest {
    /// Build a request straight from entry texts and unit suffixes
    pub fn from_texts(
        want: (&str, &str),
        have: (&str, &str),
        per_tick: (&str, &str),
        double_rate: bool,
    ) -> Self {
        Self {
            want: Quantity::parse(want.0, want.1),
            have: Quantity::parse(have.0, have.1),
            per_tick: Quantity::parse(per_tick.0, per_tick.1),
            rate: TickRate::from_double_rate(double_rate),
        }
    }

    pub fn evaluate(&self) -> Result<DisplayResult, CalcError> {
        let result = compute_remaining_time(
            self.want.normalized(),
            self.have.normalized(),
            self.per_tick.normalized(),
            self.rate.is_double(),
        );

        match &result {
            Ok(DisplayResult::AlreadyReached) => info!("Goal already reached"),
            Ok(DisplayResult::Remaining(hms)) => info!("Time to goal: {}", hms),
            Err(e) => warn!("Calculation failed: {}", e),
        }

        result
    }
}
