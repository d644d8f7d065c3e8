// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Process-wide calendar settings.
//!
//! The only setting is the first day of the week used when a rule does
//! not name one explicitly. It is meant to be installed once at startup;
//! reads are atomic so they are sound from any thread.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU8, Ordering};

/// Sunday, stored as days from Monday.
const SUNDAY: u8 = 6;

static DEFAULT_FIRST_DAY_OF_WEEK: AtomicU8 = AtomicU8::new(SUNDAY);

/// Calendar configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// The day a week starts on when a rule leaves it unspecified.
    pub first_day_of_week: Weekday,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            first_day_of_week: Weekday::Sun,
        }
    }
}

impl CalendarConfig {
    /// Reads the currently installed configuration.
    #[must_use]
    pub fn current() -> Self {
        Self {
            first_day_of_week: default_first_day_of_week(),
        }
    }

    /// Publishes this configuration as the process-wide default.
    pub fn install(self) {
        set_default_first_day_of_week(self.first_day_of_week);
    }
}

/// Returns the process-wide default first day of the week.
#[must_use]
pub fn default_first_day_of_week() -> Weekday {
    let stored: u8 = DEFAULT_FIRST_DAY_OF_WEEK.load(Ordering::Relaxed);
    Weekday::try_from(stored).unwrap_or(Weekday::Sun)
}

/// Replaces the process-wide default first day of the week.
pub fn set_default_first_day_of_week(day: Weekday) {
    // num_days_from_monday is always < 7
    #[allow(clippy::cast_possible_truncation)]
    let stored: u8 = day.num_days_from_monday() as u8;
    DEFAULT_FIRST_DAY_OF_WEEK.store(stored, Ordering::Relaxed);
    tracing::debug!(first_day_of_week = %day, "Default first day of week changed");
}

/// Resolves an optional start of week against the process-wide default.
pub(crate) fn start_of_week_or_default(start_of_week: Option<Weekday>) -> Weekday {
    start_of_week.unwrap_or_else(default_first_day_of_week)
}
