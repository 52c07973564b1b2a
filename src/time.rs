use hifitime::{Duration, Epoch};

use crate::constants::JulianDay;
use crate::heliorot_errors::HeliorotError;

/// Parse a calendar date/time string into an [`Epoch`]
///
/// Argument
/// --------
/// * `date`: a date in the format YYYY-MM-dd or YYYY-MM-ddTHH:mm:ss,
///   optionally followed by a time scale (UTC assumed when absent)
///
/// Return
/// ------
/// * the parsed epoch, or a time error for a malformed string
pub fn parse_time(date: &str) -> Result<Epoch, HeliorotError> {
    let date = date.trim();
    if date.contains('T') {
        Ok(Epoch::from_gregorian_str(date)?)
    } else {
        // date-only form, midnight assumed
        Ok(Epoch::from_gregorian_str(&format!("{date}T00:00:00"))?)
    }
}

/// Julian day number of a calendar instant (UTC scale, no offset applied)
///
/// Argument
/// --------
/// * `epoch`: a calendar instant
///
/// Return
/// ------
/// * the Julian day number as a float
pub fn julian_day(epoch: &Epoch) -> JulianDay {
    epoch.to_jde_utc_days()
}

/// A fully specified rotation time window.
///
/// The two variants are the two complete ways of pinning down an elapsed
/// duration: a start and an end instant, or a start instant and a signed
/// interval. Incomplete combinations are rejected by [`TimeWindow::from_parts`]
/// before any rotation arithmetic runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeWindow {
    /// Rotate from `start` to `end`
    StartEnd { start: Epoch, end: Epoch },
    /// Rotate from `start` over a signed interval (negative rotates backward)
    StartInterval { start: Epoch, interval: Duration },
}

impl TimeWindow {
    /// Assemble a window from optional parts, rejecting incomplete combinations.
    ///
    /// An `interval` takes precedence over an `end` when both are given. A
    /// missing `end` resolves to the current instant, at call time.
    ///
    /// Arguments
    /// ---------
    /// * `start`: date/time to which the coordinates are referred; required
    /// * `end`: date/time the coordinates will be rotated to
    /// * `interval_seconds`: elapsed time in seconds; positive rotates forward
    ///
    /// Return
    /// ------
    /// * the validated window, or [`HeliorotError::InsufficientTimeSpecification`]
    ///   when no start is given
    pub fn from_parts(
        start: Option<&str>,
        end: Option<&str>,
        interval_seconds: Option<f64>,
    ) -> Result<Self, HeliorotError> {
        let Some(start) = start else {
            return Err(HeliorotError::InsufficientTimeSpecification);
        };
        let start = parse_time(start)?;

        if let Some(seconds) = interval_seconds {
            return Ok(TimeWindow::StartInterval {
                start,
                interval: Duration::from_seconds(seconds),
            });
        }

        let end = match end {
            Some(end) => parse_time(end)?,
            None => Epoch::now()?,
        };
        Ok(TimeWindow::StartEnd { start, end })
    }

    /// Instant the window's coordinates are referred to.
    pub fn start(&self) -> Epoch {
        match *self {
            TimeWindow::StartEnd { start, .. } => start,
            TimeWindow::StartInterval { start, .. } => start,
        }
    }

    /// Signed elapsed time over the window; negative for backward rotation.
    pub fn elapsed(&self) -> Duration {
        match *self {
            TimeWindow::StartEnd { start, end } => end - start,
            TimeWindow::StartInterval { interval, .. } => interval,
        }
    }
}
