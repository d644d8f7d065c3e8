// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Declarative date offsets.
//!
//! A date offset maps a reference date to another date. Offsets are built
//! once (typically from a user's choices) and then resolved repeatedly
//! against a moving reference such as today or the active journal date.
//!
//! ## Variants
//!
//! - [`BasicOffset`]: snap to an edge of a calendar interval, move a number
//!   of whole intervals, then optionally refine with a sub-interval offset
//! - [`DayOffset`]: a fixed number of days
//! - [`NthDayOfWeekOffset`]: the Nth occurrence of a weekday
//!
//! ## Invariants
//!
//! - Resolution is pure; equal configurations resolve identically
//! - `LastDay` reverses the direction of the interval offset: positive
//!   offsets move into the past
//! - Persisted records carry a `type` discriminator; unknown
//!   discriminators are rejected

use crate::config::start_of_week_or_default;
use crate::date_util::{
    closest_day_of_week_on_or_after, closest_day_of_week_on_or_before, end_of_month,
    end_of_quarter, end_of_year, minus_days, plus_days, plus_months, plus_quarters,
    plus_weeks, plus_years, start_of_month, start_of_quarter, start_of_week, start_of_year,
};
use crate::error::CalendarError;
use crate::record::{from_record, to_record};
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// A unit of calendar granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Interval {
    /// A single day.
    Day,
    /// Seven days starting on the configured start of week.
    Week,
    /// A calendar month.
    Month,
    /// A calendar quarter.
    Quarter,
    /// A calendar year.
    Year,
}

impl Interval {
    /// All intervals from finest to coarsest.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [Self::Day, Self::Week, Self::Month, Self::Quarter, Self::Year]
    }

    /// Converts this interval to its persisted name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "DAY",
            Self::Week => "WEEK",
            Self::Month => "MONTH",
            Self::Quarter => "QUARTER",
            Self::Year => "YEAR",
        }
    }

    /// Moves `date` by `count` whole intervals without snapping to a boundary.
    ///
    /// # Errors
    ///
    /// Returns an error if the result is out of range.
    pub fn add_to(self, date: NaiveDate, count: i64) -> Result<NaiveDate, CalendarError> {
        match self {
            Self::Day => plus_days(date, count),
            Self::Week => plus_weeks(date, count),
            Self::Month => plus_months(date, count),
            Self::Quarter => plus_quarters(date, count),
            Self::Year => plus_years(date, count),
        }
    }
}

impl FromStr for Interval {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|interval| interval.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CalendarError::InvalidContent(format!("unknown interval '{s}'")))
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which edge of the resolved interval anchors an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntervalRelation {
    /// The first day of the interval.
    FirstDay,
    /// The reference date itself.
    CurrentDay,
    /// The last day of the interval. Positive offsets move into the past.
    LastDay,
}

impl IntervalRelation {
    /// Converts this relation to its persisted name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstDay => "FIRST_DAY",
            Self::CurrentDay => "CURRENT_DAY",
            Self::LastDay => "LAST_DAY",
        }
    }
}

impl FromStr for IntervalRelation {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::FirstDay, Self::CurrentDay, Self::LastDay]
            .into_iter()
            .find(|relation| relation.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                CalendarError::InvalidContent(format!("unknown interval relation '{s}'"))
            })
    }
}

impl std::fmt::Display for IntervalRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Adds or subtracts a fixed number of days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayOffset {
    day_count: i32,
}

impl DayOffset {
    /// Creates an offset of `day_count` days.
    #[must_use]
    pub const fn new(day_count: i32) -> Self {
        Self { day_count }
    }

    /// The number of days moved forward.
    #[must_use]
    pub const fn day_count(self) -> i32 {
        self.day_count
    }

    /// `date` plus the day count.
    ///
    /// # Errors
    ///
    /// Returns an error if the result is out of range.
    pub fn offset_date(self, date: NaiveDate) -> Result<NaiveDate, CalendarError> {
        plus_days(date, i64::from(self.day_count))
    }

    /// `date` minus the day count.
    ///
    /// # Errors
    ///
    /// Returns an error if the result is out of range.
    pub fn reverse_offset_date(self, date: NaiveDate) -> Result<NaiveDate, CalendarError> {
        minus_days(date, i64::from(self.day_count))
    }
}

/// The Nth occurrence of a weekday counted from a date.
///
/// Going forward the first occurrence is the weekday on or after the date;
/// going in reverse it is the weekday on or before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NthDayOfWeekOffset {
    day_of_week: Weekday,
    occurrence: i32,
}

impl NthDayOfWeekOffset {
    /// Creates an offset to the `occurrence`th `day_of_week`.
    #[must_use]
    pub const fn new(day_of_week: Weekday, occurrence: i32) -> Self {
        Self {
            day_of_week,
            occurrence,
        }
    }

    /// The weekday searched for.
    #[must_use]
    pub const fn day_of_week(self) -> Weekday {
        self.day_of_week
    }

    /// Which occurrence of the weekday is selected, 1 being the closest.
    #[must_use]
    pub const fn occurrence(self) -> i32 {
        self.occurrence
    }

    /// The `occurrence`th weekday on or after `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the result is out of range.
    pub fn offset_date(self, date: NaiveDate) -> Result<NaiveDate, CalendarError> {
        let first: NaiveDate = closest_day_of_week_on_or_after(date, self.day_of_week)?;
        plus_weeks(first, i64::from(self.occurrence) - 1)
    }

    /// The `occurrence`th weekday on or before `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the result is out of range.
    pub fn reverse_offset_date(self, date: NaiveDate) -> Result<NaiveDate, CalendarError> {
        let first: NaiveDate = closest_day_of_week_on_or_before(date, self.day_of_week)?;
        plus_weeks(first, 1 - i64::from(self.occurrence))
    }
}

/// A refinement applied after an interval has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SubIntervalOffset {
    /// A fixed number of days.
    DayOffset(DayOffset),
    /// The Nth occurrence of a weekday.
    NthDayOfWeekOffset(NthDayOfWeekOffset),
}

impl SubIntervalOffset {
    /// Applies the offset moving forward from `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the result is out of range.
    pub fn offset_date(&self, date: NaiveDate) -> Result<NaiveDate, CalendarError> {
        match self {
            Self::DayOffset(offset) => offset.offset_date(date),
            Self::NthDayOfWeekOffset(offset) => offset.offset_date(date),
        }
    }

    /// Applies the offset moving backward from `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the result is out of range.
    pub fn reverse_offset_date(&self, date: NaiveDate) -> Result<NaiveDate, CalendarError> {
        match self {
            Self::DayOffset(offset) => offset.reverse_offset_date(date),
            Self::NthDayOfWeekOffset(offset) => offset.reverse_offset_date(date),
        }
    }

    /// Encodes the offset as a tagged record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be built.
    pub fn to_json(&self) -> Result<Value, CalendarError> {
        to_record(self, "sub-interval offset")
    }

    /// Decodes a tagged record produced by [`Self::to_json`].
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidContent`] for an unknown discriminator
    /// or malformed fields.
    pub fn from_json(record: &Value) -> Result<Self, CalendarError> {
        from_record(record, "sub-interval offset")
    }
}

impl From<DayOffset> for SubIntervalOffset {
    fn from(offset: DayOffset) -> Self {
        Self::DayOffset(offset)
    }
}

impl From<NthDayOfWeekOffset> for SubIntervalOffset {
    fn from(offset: NthDayOfWeekOffset) -> Self {
        Self::NthDayOfWeekOffset(offset)
    }
}

/// Snap to an interval edge, move whole intervals, then refine.
///
/// # Resolution
///
/// - `FirstDay`: snap to the first day of the interval containing the
///   reference, add `interval_offset` intervals, then apply the
///   sub-interval offset forward
/// - `CurrentDay`: add `interval_offset` intervals to the reference, then
///   apply the sub-interval offset forward
/// - `LastDay`: subtract `interval_offset` intervals, snap to the last day
///   of that interval, then apply the sub-interval offset in reverse. Weeks
///   instead snap to the first week start on or after the reference and
///   then move back `interval_offset` weeks
///
/// Weeks start on `start_of_week`, or on the process-wide default when it
/// is unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BasicOffset {
    interval: Interval,
    interval_offset: i32,
    interval_relation: IntervalRelation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sub_interval_offset: Option<SubIntervalOffset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start_of_week: Option<Weekday>,
}

impl BasicOffset {
    /// Creates an offset with no sub-interval refinement.
    #[must_use]
    pub const fn new(
        interval: Interval,
        interval_offset: i32,
        interval_relation: IntervalRelation,
    ) -> Self {
        Self {
            interval,
            interval_offset,
            interval_relation,
            sub_interval_offset: None,
            start_of_week: None,
        }
    }

    /// Returns a copy refined by `sub_interval_offset`.
    #[must_use]
    pub fn with_sub_interval_offset(
        mut self,
        sub_interval_offset: impl Into<SubIntervalOffset>,
    ) -> Self {
        self.sub_interval_offset = Some(sub_interval_offset.into());
        self
    }

    /// Returns a copy whose weeks start on `start_of_week`.
    #[must_use]
    pub const fn with_start_of_week(mut self, start_of_week: Weekday) -> Self {
        self.start_of_week = Some(start_of_week);
        self
    }

    /// The interval moved by.
    #[must_use]
    pub const fn interval(&self) -> Interval {
        self.interval
    }

    /// The number of intervals moved.
    #[must_use]
    pub const fn interval_offset(&self) -> i32 {
        self.interval_offset
    }

    /// The edge of the interval the offset is anchored to.
    #[must_use]
    pub const fn interval_relation(&self) -> IntervalRelation {
        self.interval_relation
    }

    /// The refinement applied after the interval is resolved.
    #[must_use]
    pub const fn sub_interval_offset(&self) -> Option<SubIntervalOffset> {
        self.sub_interval_offset
    }

    /// The explicit start of week, if any.
    #[must_use]
    pub const fn start_of_week(&self) -> Option<Weekday> {
        self.start_of_week
    }

    /// Returns a copy with `delta` added to the interval offset.
    ///
    /// # Errors
    ///
    /// Returns an error if the interval offset overflows.
    pub fn plus_interval_offset(&self, delta: i32) -> Result<Self, CalendarError> {
        let interval_offset: i32 = self.interval_offset.checked_add(delta).ok_or_else(|| {
            CalendarError::overflow(format!(
                "adding {delta} to interval offset {}",
                self.interval_offset
            ))
        })?;
        Ok(Self {
            interval_offset,
            ..*self
        })
    }

    /// Resolves the offset against `reference`.
    ///
    /// # Errors
    ///
    /// Returns an error if date arithmetic overflows.
    pub fn offset_date(&self, reference: NaiveDate) -> Result<NaiveDate, CalendarError> {
        let offset: i64 = i64::from(self.interval_offset);
        let week_start: Weekday = start_of_week_or_default(self.start_of_week);

        match self.interval_relation {
            IntervalRelation::FirstDay => {
                let date: NaiveDate = match self.interval {
                    Interval::Year => plus_years(start_of_year(reference), offset)?,
                    Interval::Quarter => plus_quarters(start_of_quarter(reference), offset)?,
                    Interval::Month => plus_months(start_of_month(reference), offset)?,
                    Interval::Week => plus_weeks(start_of_week(reference, week_start)?, offset)?,
                    Interval::Day => plus_days(reference, offset)?,
                };
                self.refine_forward(date)
            }
            IntervalRelation::CurrentDay => {
                let date: NaiveDate = self.interval.add_to(reference, offset)?;
                self.refine_forward(date)
            }
            IntervalRelation::LastDay => {
                let date: NaiveDate = match self.interval {
                    Interval::Year => end_of_year(plus_years(reference, -offset)?),
                    Interval::Quarter => end_of_quarter(plus_quarters(reference, -offset)?),
                    Interval::Month => end_of_month(plus_months(reference, -offset)?),
                    // The week branch lands on a week start, not a week end.
                    Interval::Week => plus_weeks(
                        closest_day_of_week_on_or_after(reference, week_start)?,
                        -offset,
                    )?,
                    Interval::Day => plus_days(reference, -offset)?,
                };
                match &self.sub_interval_offset {
                    Some(sub) => sub.reverse_offset_date(date),
                    None => Ok(date),
                }
            }
        }
    }

    fn refine_forward(&self, date: NaiveDate) -> Result<NaiveDate, CalendarError> {
        match &self.sub_interval_offset {
            Some(sub) => sub.offset_date(date),
            None => Ok(date),
        }
    }

    /// Encodes the offset as a tagged record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be built.
    pub fn to_json(&self) -> Result<Value, CalendarError> {
        DateOffset::Basic(*self).to_json()
    }

    /// Decodes a tagged record that must describe a basic offset.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidContent`] if the record is malformed
    /// or describes another kind of offset.
    pub fn from_json(record: &Value) -> Result<Self, CalendarError> {
        match DateOffset::from_json(record)? {
            DateOffset::Basic(offset) => Ok(offset),
            other => Err(CalendarError::InvalidContent(format!(
                "expected a Basic date offset, found {}",
                other.kind()
            ))),
        }
    }
}

/// Any date offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DateOffset {
    /// Interval based offset.
    Basic(BasicOffset),
    /// Fixed number of days.
    DayOffset(DayOffset),
    /// Nth occurrence of a weekday.
    NthDayOfWeekOffset(NthDayOfWeekOffset),
}

impl DateOffset {
    /// Resolves the offset against `reference`.
    ///
    /// # Errors
    ///
    /// Returns an error if date arithmetic overflows.
    pub fn offset_date(&self, reference: NaiveDate) -> Result<NaiveDate, CalendarError> {
        match self {
            Self::Basic(offset) => offset.offset_date(reference),
            Self::DayOffset(offset) => offset.offset_date(reference),
            Self::NthDayOfWeekOffset(offset) => offset.offset_date(reference),
        }
    }

    /// The persisted discriminator of this variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Basic(_) => "Basic",
            Self::DayOffset(_) => "DayOffset",
            Self::NthDayOfWeekOffset(_) => "NthDayOfWeekOffset",
        }
    }

    /// Encodes the offset as a tagged record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be built.
    pub fn to_json(&self) -> Result<Value, CalendarError> {
        to_record(self, "date offset")
    }

    /// Decodes a tagged record produced by [`Self::to_json`].
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidContent`] for an unknown discriminator
    /// or malformed fields.
    pub fn from_json(record: &Value) -> Result<Self, CalendarError> {
        from_record(record, "date offset")
    }
}

impl From<BasicOffset> for DateOffset {
    fn from(offset: BasicOffset) -> Self {
        Self::Basic(offset)
    }
}

impl From<DayOffset> for DateOffset {
    fn from(offset: DayOffset) -> Self {
        Self::DayOffset(offset)
    }
}

impl From<NthDayOfWeekOffset> for DateOffset {
    fn from(offset: NthDayOfWeekOffset) -> Self {
        Self::NthDayOfWeekOffset(offset)
    }
}

impl From<SubIntervalOffset> for DateOffset {
    fn from(offset: SubIntervalOffset) -> Self {
        match offset {
            SubIntervalOffset::DayOffset(offset) => Self::DayOffset(offset),
            SubIntervalOffset::NthDayOfWeekOffset(offset) => Self::NthDayOfWeekOffset(offset),
        }
    }
}
