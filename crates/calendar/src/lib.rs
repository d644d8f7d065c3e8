// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Calendar rules for the `LeeboardsLog` sailing log.
//!
//! Everything here is pure date arithmetic over a caller supplied reference
//! date: relative date offsets, named date ranges, periodic date sequences
//! and the time periods attached to log entries.

mod config;
mod date_offset;
mod date_range;
pub mod date_util;
mod error;
mod periodic;
mod quarter;
mod record;
mod time_period;

#[cfg(test)]
mod tests;

pub use config::{CalendarConfig, default_first_day_of_week, set_default_first_day_of_week};
pub use date_offset::{
    BasicOffset, DateOffset, DayOffset, Interval, IntervalRelation, NthDayOfWeekOffset,
    SubIntervalOffset,
};
pub use date_range::{DateRange, RangeGenerator, Standard, StandardGenerator};
pub use error::{CalendarError, require_positive};
pub use periodic::{PeriodicDateGenerator, PeriodicDates};
pub use quarter::Quarter;
pub use time_period::{Overlap, Relation, TimePeriod, parse_zone};
