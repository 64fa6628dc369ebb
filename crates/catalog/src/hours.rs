//! Operating-hours evaluation.
//!
//! Shifts are stored as raw "HH:MM" strings and parsed on evaluation. A
//! shift whose close time is numerically before its open time runs past
//! midnight (e.g. 22:00 to 02:00). "24:00" is accepted as a close time
//! meaning end of day; an open time equal to the close time means the
//! shift runs around the clock.
//!
//! The reference time is always passed in by the caller; nothing here reads
//! the system clock.

use crate::error::{CatalogError, Result};
use crate::types::{OperatingHours, Shift};
use chrono::{NaiveTime, Timelike};

const MINUTES_PER_DAY: u16 = 24 * 60;

/// A parsed shift, in minutes since midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub open: u16,
    pub close: u16,
}

impl Window {
    /// True when the window spans midnight
    pub fn wraps(&self) -> bool {
        self.close < self.open
    }

    /// Whether `minute` (0..1440) falls inside the window.
    ///
    /// Open is inclusive, close is exclusive.
    pub fn contains(&self, minute: u16) -> bool {
        if self.open == self.close {
            true
        } else if self.wraps() {
            minute >= self.open || minute < self.close
        } else {
            minute >= self.open && minute < self.close
        }
    }
}

/// Parse "HH:MM" into minutes since midnight.
///
/// "24:00" is only valid when `allow_end_of_day` is set (close times).
fn parse_clock(value: &str, allow_end_of_day: bool) -> Result<u16> {
    let value = value.trim();
    if allow_end_of_day && value == "24:00" {
        return Ok(MINUTES_PER_DAY);
    }
    let time = NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| {
        CatalogError::MalformedOperatingHours {
            value: value.to_string(),
        }
    })?;
    Ok(minute_of_day(time))
}

/// Minutes since midnight for a time of day
pub fn minute_of_day(time: NaiveTime) -> u16 {
    (time.hour() * 60 + time.minute()) as u16
}

impl Shift {
    /// Parse both ends of the shift
    pub fn window(&self) -> Result<Window> {
        let open = parse_clock(&self.open, false)?;
        let close = parse_clock(&self.close, true)?;
        if open == 0 && close == MINUTES_PER_DAY {
            // 00:00-24:00 is the same as an around-the-clock shift
            return Ok(Window { open: 0, close: 0 });
        }
        Ok(Window { open, close })
    }
}

impl OperatingHours {
    /// Parse every shift, failing on the first malformed one
    pub fn windows(&self) -> Result<Vec<Window>> {
        self.shifts.iter().map(Shift::window).collect()
    }

    /// Whether any shift is open at the reference time `at`.
    ///
    /// An entity without shifts is never open. Any malformed shift makes the
    /// whole descriptor malformed, so a half-valid schedule never reports a
    /// partial answer.
    pub fn is_open_at(&self, at: NaiveTime) -> Result<bool> {
        let minute = minute_of_day(at);
        let windows = self.windows()?;
        Ok(windows.iter().any(|window| window.contains(minute)))
    }
}
