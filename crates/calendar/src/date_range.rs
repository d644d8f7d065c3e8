// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Inclusive date ranges and the standard range generators.
//!
//! A [`StandardGenerator`] computes a [`DateRange`] from a reference date,
//! e.g. "the current quarter" or "the three preceding months". Its whole
//! configuration is a [`Standard`] plus a short list of integer
//! parameters, which is also how it is persisted.
//!
//! ## Invariants
//!
//! - Every count parameter is strictly positive; construction fails otherwise
//! - Ranges are computed from the reference date's calendar, never from today

use crate::date_offset::DateOffset;
use crate::date_util::{
    end_of_month, end_of_quarter, end_of_year, plus_days, plus_months, plus_quarters, plus_weeks,
    plus_years, start_of_month, start_of_quarter, start_of_week, start_of_year,
};
use crate::error::{CalendarError, require_positive};
use crate::record::{from_record, to_record};
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// A closed interval of dates, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    oldest_date: NaiveDate,
    newest_date: NaiveDate,
}

impl DateRange {
    /// Creates a range spanning both dates, in whichever order they are given.
    #[must_use]
    pub fn new(first: NaiveDate, second: NaiveDate) -> Self {
        Self {
            oldest_date: first.min(second),
            newest_date: first.max(second),
        }
    }

    /// A range covering exactly one day.
    #[must_use]
    pub const fn single_day(date: NaiveDate) -> Self {
        Self {
            oldest_date: date,
            newest_date: date,
        }
    }

    /// The first date in the range.
    #[must_use]
    pub const fn oldest_date(self) -> NaiveDate {
        self.oldest_date
    }

    /// The last date in the range.
    #[must_use]
    pub const fn newest_date(self) -> NaiveDate {
        self.newest_date
    }

    /// Returns whether `date` falls within the range, edges included.
    #[must_use]
    pub fn is_date_in_range(self, date: NaiveDate) -> bool {
        self.oldest_date <= date && date <= self.newest_date
    }

    /// Returns whether `other` lies entirely within this range.
    #[must_use]
    pub fn contains_range(self, other: Self) -> bool {
        self.is_date_in_range(other.oldest_date) && self.is_date_in_range(other.newest_date)
    }

    /// Number of days in the range.
    #[must_use]
    pub fn day_count(self) -> i64 {
        (self.newest_date - self.oldest_date).num_days() + 1
    }

    /// Iterates over every date in the range, oldest first.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let newest: NaiveDate = self.newest_date;
        self.oldest_date
            .iter_days()
            .take_while(move |date| *date <= newest)
    }

    /// Maps both edges through `offset`.
    ///
    /// The edges are not re-ordered afterwards, so an offset that does not
    /// preserve order can produce a range whose oldest date is after its
    /// newest date.
    ///
    /// # Errors
    ///
    /// Returns an error if resolving the offset overflows.
    pub fn apply_date_offset(self, offset: Option<&DateOffset>) -> Result<Self, CalendarError> {
        let Some(offset) = offset else {
            return Ok(self);
        };
        Ok(Self {
            oldest_date: offset.offset_date(self.oldest_date)?,
            newest_date: offset.offset_date(self.newest_date)?,
        })
    }

    /// The `day_count` days ending on `reference`.
    ///
    /// # Errors
    ///
    /// Returns an error if `day_count` is not positive or date arithmetic overflows.
    pub fn current_date(reference: NaiveDate, day_count: i32) -> Result<Self, CalendarError> {
        let day_count: i32 = require_positive("day_count", day_count)?;
        let oldest: NaiveDate = plus_days(reference, 1 - i64::from(day_count))?;
        Ok(Self::new(oldest, reference))
    }

    /// The current calendar year and the `year_count - 1` years before it.
    ///
    /// # Errors
    ///
    /// Returns an error if `year_count` is not positive or date arithmetic overflows.
    pub fn current_year(reference: NaiveDate, year_count: i32) -> Result<Self, CalendarError> {
        let year_count: i32 = require_positive("year_count", year_count)?;
        let oldest: NaiveDate = plus_years(start_of_year(reference), 1 - i64::from(year_count))?;
        Ok(Self::new(oldest, end_of_year(reference)))
    }

    /// The current calendar month and the `month_count - 1` months before it.
    ///
    /// # Errors
    ///
    /// Returns an error if `month_count` is not positive or date arithmetic overflows.
    pub fn current_month(reference: NaiveDate, month_count: i32) -> Result<Self, CalendarError> {
        let month_count: i32 = require_positive("month_count", month_count)?;
        let oldest: NaiveDate =
            plus_months(start_of_month(reference), 1 - i64::from(month_count))?;
        Ok(Self::new(oldest, end_of_month(reference)))
    }

    /// The current quarter and the `quarter_count - 1` quarters before it.
    ///
    /// # Errors
    ///
    /// Returns an error if `quarter_count` is not positive or date arithmetic overflows.
    pub fn current_quarter(
        reference: NaiveDate,
        quarter_count: i32,
    ) -> Result<Self, CalendarError> {
        let quarter_count: i32 = require_positive("quarter_count", quarter_count)?;
        let oldest: NaiveDate =
            plus_quarters(start_of_quarter(reference), 1 - i64::from(quarter_count))?;
        Ok(Self::new(oldest, end_of_quarter(reference)))
    }

    /// The current week and the `week_count - 1` weeks before it.
    ///
    /// # Errors
    ///
    /// Returns an error if `week_count` is not positive or date arithmetic overflows.
    pub fn current_week(
        reference: NaiveDate,
        start_of_week_day: Weekday,
        week_count: i32,
    ) -> Result<Self, CalendarError> {
        let week_count: i32 = require_positive("week_count", week_count)?;
        let week_start: NaiveDate = start_of_week(reference, start_of_week_day)?;
        let oldest: NaiveDate = plus_weeks(week_start, 1 - i64::from(week_count))?;
        let newest: NaiveDate = plus_days(week_start, 6)?;
        Ok(Self::new(oldest, newest))
    }

    /// January 1st through `reference`.
    #[must_use]
    pub fn year_to_date(reference: NaiveDate) -> Self {
        Self::new(start_of_year(reference), reference)
    }

    /// The start of the current quarter through `reference`.
    #[must_use]
    pub fn quarter_to_date(reference: NaiveDate) -> Self {
        Self::new(start_of_quarter(reference), reference)
    }

    /// The start of the current month through `reference`.
    #[must_use]
    pub fn month_to_date(reference: NaiveDate) -> Self {
        Self::new(start_of_month(reference), reference)
    }

    /// The `year_count` years ending on `reference`.
    ///
    /// # Errors
    ///
    /// Returns an error if `year_count` is not positive or date arithmetic overflows.
    pub fn last_years(reference: NaiveDate, year_count: i32) -> Result<Self, CalendarError> {
        let year_count: i32 = require_positive("year_count", year_count)?;
        let oldest: NaiveDate = plus_days(plus_years(reference, -i64::from(year_count))?, 1)?;
        Ok(Self::new(oldest, reference))
    }

    /// The `month_count` months ending on `reference`.
    ///
    /// # Errors
    ///
    /// Returns an error if `month_count` is not positive or date arithmetic overflows.
    pub fn last_months(reference: NaiveDate, month_count: i32) -> Result<Self, CalendarError> {
        let month_count: i32 = require_positive("month_count", month_count)?;
        let oldest: NaiveDate = plus_days(plus_months(reference, -i64::from(month_count))?, 1)?;
        Ok(Self::new(oldest, reference))
    }

    /// The `week_count` weeks ending on `reference`.
    ///
    /// # Errors
    ///
    /// Returns an error if `week_count` is not positive or date arithmetic overflows.
    pub fn last_weeks(reference: NaiveDate, week_count: i32) -> Result<Self, CalendarError> {
        let week_count: i32 = require_positive("week_count", week_count)?;
        let oldest: NaiveDate = plus_days(plus_weeks(reference, -i64::from(week_count))?, 1)?;
        Ok(Self::new(oldest, reference))
    }

    /// The `day_count` days ending on `reference`.
    ///
    /// # Errors
    ///
    /// Returns an error if `day_count` is not positive or date arithmetic overflows.
    pub fn last_days(reference: NaiveDate, day_count: i32) -> Result<Self, CalendarError> {
        let day_count: i32 = require_positive("day_count", day_count)?;
        let oldest: NaiveDate = plus_days(reference, 1 - i64::from(day_count))?;
        Ok(Self::new(oldest, reference))
    }

    /// The `year_count` whole calendar years before the current one.
    ///
    /// # Errors
    ///
    /// Returns an error if `year_count` is not positive or date arithmetic overflows.
    pub fn preceding_years(reference: NaiveDate, year_count: i32) -> Result<Self, CalendarError> {
        let end_of_previous_year: NaiveDate = plus_years(end_of_year(reference), -1)?;
        Self::last_years(end_of_previous_year, year_count)
    }

    /// The `month_count` whole calendar months before the current one.
    ///
    /// # Errors
    ///
    /// Returns an error if `month_count` is not positive or date arithmetic overflows.
    pub fn preceding_months(
        reference: NaiveDate,
        month_count: i32,
    ) -> Result<Self, CalendarError> {
        let month_count: i32 = require_positive("month_count", month_count)?;
        let newest: NaiveDate = end_of_month(plus_months(reference, -1)?);
        let oldest: NaiveDate = start_of_month(plus_months(newest, 1 - i64::from(month_count))?);
        Ok(Self::new(oldest, newest))
    }

    /// The `quarter_count` whole quarters before the current one.
    ///
    /// # Errors
    ///
    /// Returns an error if `quarter_count` is not positive or date arithmetic overflows.
    pub fn preceding_quarters(
        reference: NaiveDate,
        quarter_count: i32,
    ) -> Result<Self, CalendarError> {
        let quarter_count: i32 = require_positive("quarter_count", quarter_count)?;
        // Not re-snapped: June 30th minus three months is March 30th.
        let newest: NaiveDate = plus_months(end_of_quarter(reference), -3)?;
        let oldest: NaiveDate =
            start_of_quarter(plus_months(newest, 1 - 3 * i64::from(quarter_count))?);
        Ok(Self::new(oldest, newest))
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.oldest_date, self.newest_date)
    }
}

/// Anything that can compute a [`DateRange`] from a reference date.
pub trait RangeGenerator {
    /// Computes the range for `reference`.
    ///
    /// # Errors
    ///
    /// Returns an error if date arithmetic overflows.
    fn generate_range(&self, reference: NaiveDate) -> Result<DateRange, CalendarError>;
}

/// A fixed range ignores the reference date.
impl RangeGenerator for DateRange {
    fn generate_range(&self, _reference: NaiveDate) -> Result<DateRange, CalendarError> {
        Ok(*self)
    }
}

/// The named range rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Standard {
    /// The last N days ending on the reference date.
    CurrentDate,
    /// The current year and N - 1 years before it.
    CurrentYear,
    /// The current month and N - 1 months before it.
    CurrentMonth,
    /// The current quarter and N - 1 quarters before it.
    CurrentQuarter,
    /// The current week and N - 1 weeks before it.
    CurrentWeek,
    /// Start of year through the reference date.
    YearToDate,
    /// Start of quarter through the reference date.
    QuarterToDate,
    /// Start of month through the reference date.
    MonthToDate,
    /// N years ending on the reference date.
    LastYears,
    /// N months ending on the reference date.
    LastMonths,
    /// N weeks ending on the reference date.
    LastWeeks,
    /// N days ending on the reference date.
    LastDays,
    /// N whole years before the current year.
    #[serde(rename = "PRECEEDING_YEARS")]
    PrecedingYears,
    /// N whole months before the current month.
    #[serde(rename = "PRECEEDING_MONTHS")]
    PrecedingMonths,
    /// N whole quarters before the current quarter.
    #[serde(rename = "PRECEEDING_QUARTERS")]
    PrecedingQuarters,
}

impl Standard {
    /// Every standard, in declaration order.
    #[must_use]
    pub const fn all() -> [Self; 15] {
        [
            Self::CurrentDate,
            Self::CurrentYear,
            Self::CurrentMonth,
            Self::CurrentQuarter,
            Self::CurrentWeek,
            Self::YearToDate,
            Self::QuarterToDate,
            Self::MonthToDate,
            Self::LastYears,
            Self::LastMonths,
            Self::LastWeeks,
            Self::LastDays,
            Self::PrecedingYears,
            Self::PrecedingMonths,
            Self::PrecedingQuarters,
        ]
    }

    /// Converts this standard to its persisted name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CurrentDate => "CURRENT_DATE",
            Self::CurrentYear => "CURRENT_YEAR",
            Self::CurrentMonth => "CURRENT_MONTH",
            Self::CurrentQuarter => "CURRENT_QUARTER",
            Self::CurrentWeek => "CURRENT_WEEK",
            Self::YearToDate => "YEAR_TO_DATE",
            Self::QuarterToDate => "QUARTER_TO_DATE",
            Self::MonthToDate => "MONTH_TO_DATE",
            Self::LastYears => "LAST_YEARS",
            Self::LastMonths => "LAST_MONTHS",
            Self::LastWeeks => "LAST_WEEKS",
            Self::LastDays => "LAST_DAYS",
            Self::PrecedingYears => "PRECEEDING_YEARS",
            Self::PrecedingMonths => "PRECEEDING_MONTHS",
            Self::PrecedingQuarters => "PRECEEDING_QUARTERS",
        }
    }

    /// Number of integer parameters the standard takes.
    #[must_use]
    pub const fn parameter_count(self) -> usize {
        match self {
            Self::YearToDate | Self::QuarterToDate | Self::MonthToDate => 0,
            Self::CurrentWeek => 2,
            _ => 1,
        }
    }
}

impl FromStr for Standard {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|standard| standard.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CalendarError::InvalidContent(format!("unknown range standard '{s}'")))
    }
}

impl std::fmt::Display for Standard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated [`Standard`] together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GeneratorRecord", into = "GeneratorRecord")]
pub struct StandardGenerator {
    standard: Standard,
    count: i32,
    start_of_week: Option<Weekday>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GeneratorRecord {
    standard: Standard,
    #[serde(default)]
    parameters: Vec<i32>,
}

impl StandardGenerator {
    fn counted(standard: Standard, name: &'static str, count: i32) -> Result<Self, CalendarError> {
        Ok(Self {
            standard,
            count: require_positive(name, count)?,
            start_of_week: None,
        })
    }

    const fn uncounted(standard: Standard) -> Self {
        Self {
            standard,
            count: 1,
            start_of_week: None,
        }
    }

    /// See [`DateRange::current_date`].
    ///
    /// # Errors
    ///
    /// Returns an error if `day_count` is not positive.
    pub fn current_date(day_count: i32) -> Result<Self, CalendarError> {
        Self::counted(Standard::CurrentDate, "day_count", day_count)
    }

    /// See [`DateRange::current_year`].
    ///
    /// # Errors
    ///
    /// Returns an error if `year_count` is not positive.
    pub fn current_year(year_count: i32) -> Result<Self, CalendarError> {
        Self::counted(Standard::CurrentYear, "year_count", year_count)
    }

    /// See [`DateRange::current_month`].
    ///
    /// # Errors
    ///
    /// Returns an error if `month_count` is not positive.
    pub fn current_month(month_count: i32) -> Result<Self, CalendarError> {
        Self::counted(Standard::CurrentMonth, "month_count", month_count)
    }

    /// See [`DateRange::current_quarter`].
    ///
    /// # Errors
    ///
    /// Returns an error if `quarter_count` is not positive.
    pub fn current_quarter(quarter_count: i32) -> Result<Self, CalendarError> {
        Self::counted(Standard::CurrentQuarter, "quarter_count", quarter_count)
    }

    /// See [`DateRange::current_week`].
    ///
    /// # Errors
    ///
    /// Returns an error if `week_count` is not positive.
    pub fn current_week(start_of_week: Weekday, week_count: i32) -> Result<Self, CalendarError> {
        let mut generator: Self = Self::counted(Standard::CurrentWeek, "week_count", week_count)?;
        generator.start_of_week = Some(start_of_week);
        Ok(generator)
    }

    /// See [`DateRange::year_to_date`].
    #[must_use]
    pub const fn year_to_date() -> Self {
        Self::uncounted(Standard::YearToDate)
    }

    /// See [`DateRange::quarter_to_date`].
    #[must_use]
    pub const fn quarter_to_date() -> Self {
        Self::uncounted(Standard::QuarterToDate)
    }

    /// See [`DateRange::month_to_date`].
    #[must_use]
    pub const fn month_to_date() -> Self {
        Self::uncounted(Standard::MonthToDate)
    }

    /// See [`DateRange::last_years`].
    ///
    /// # Errors
    ///
    /// Returns an error if `year_count` is not positive.
    pub fn last_years(year_count: i32) -> Result<Self, CalendarError> {
        Self::counted(Standard::LastYears, "year_count", year_count)
    }

    /// See [`DateRange::last_months`].
    ///
    /// # Errors
    ///
    /// Returns an error if `month_count` is not positive.
    pub fn last_months(month_count: i32) -> Result<Self, CalendarError> {
        Self::counted(Standard::LastMonths, "month_count", month_count)
    }

    /// See [`DateRange::last_weeks`].
    ///
    /// # Errors
    ///
    /// Returns an error if `week_count` is not positive.
    pub fn last_weeks(week_count: i32) -> Result<Self, CalendarError> {
        Self::counted(Standard::LastWeeks, "week_count", week_count)
    }

    /// See [`DateRange::last_days`].
    ///
    /// # Errors
    ///
    /// Returns an error if `day_count` is not positive.
    pub fn last_days(day_count: i32) -> Result<Self, CalendarError> {
        Self::counted(Standard::LastDays, "day_count", day_count)
    }

    /// See [`DateRange::preceding_years`].
    ///
    /// # Errors
    ///
    /// Returns an error if `year_count` is not positive.
    pub fn preceding_years(year_count: i32) -> Result<Self, CalendarError> {
        Self::counted(Standard::PrecedingYears, "year_count", year_count)
    }

    /// See [`DateRange::preceding_months`].
    ///
    /// # Errors
    ///
    /// Returns an error if `month_count` is not positive.
    pub fn preceding_months(month_count: i32) -> Result<Self, CalendarError> {
        Self::counted(Standard::PrecedingMonths, "month_count", month_count)
    }

    /// See [`DateRange::preceding_quarters`].
    ///
    /// # Errors
    ///
    /// Returns an error if `quarter_count` is not positive.
    pub fn preceding_quarters(quarter_count: i32) -> Result<Self, CalendarError> {
        Self::counted(Standard::PrecedingQuarters, "quarter_count", quarter_count)
    }

    /// Rebuilds a generator from a standard and its parameter list.
    ///
    /// `CurrentWeek` takes `[iso_day_of_week, week_count]` where Monday is 1
    /// and Sunday is 7. The to-date standards take no parameters and every
    /// other standard takes a single count.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidContent`] if the parameter list has the
    /// wrong length or an invalid weekday, and a count error if a count is not
    /// positive.
    pub fn from_parameters(standard: Standard, parameters: &[i32]) -> Result<Self, CalendarError> {
        if parameters.len() != standard.parameter_count() {
            return Err(CalendarError::InvalidContent(format!(
                "{standard} takes {} parameters, got {}",
                standard.parameter_count(),
                parameters.len()
            )));
        }

        match (standard, parameters) {
            (Standard::CurrentDate, [count]) => Self::current_date(*count),
            (Standard::CurrentYear, [count]) => Self::current_year(*count),
            (Standard::CurrentMonth, [count]) => Self::current_month(*count),
            (Standard::CurrentQuarter, [count]) => Self::current_quarter(*count),
            (Standard::CurrentWeek, [day, count]) => {
                Self::current_week(weekday_from_iso(*day)?, *count)
            }
            (Standard::YearToDate, []) => Ok(Self::year_to_date()),
            (Standard::QuarterToDate, []) => Ok(Self::quarter_to_date()),
            (Standard::MonthToDate, []) => Ok(Self::month_to_date()),
            (Standard::LastYears, [count]) => Self::last_years(*count),
            (Standard::LastMonths, [count]) => Self::last_months(*count),
            (Standard::LastWeeks, [count]) => Self::last_weeks(*count),
            (Standard::LastDays, [count]) => Self::last_days(*count),
            (Standard::PrecedingYears, [count]) => Self::preceding_years(*count),
            (Standard::PrecedingMonths, [count]) => Self::preceding_months(*count),
            (Standard::PrecedingQuarters, [count]) => Self::preceding_quarters(*count),
            _ => Err(CalendarError::InvalidContent(format!(
                "malformed parameters for {standard}"
            ))),
        }
    }

    /// The standard this generator implements.
    #[must_use]
    pub const fn standard(self) -> Standard {
        self.standard
    }

    /// The parameter list accepted by [`Self::from_parameters`].
    #[must_use]
    pub fn parameters(self) -> Vec<i32> {
        match (self.standard.parameter_count(), self.start_of_week) {
            (0, _) => Vec::new(),
            (2, Some(day)) => vec![iso_from_weekday(day), self.count],
            _ => vec![self.count],
        }
    }

    /// Encodes the generator as a `{standard, parameters}` record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be built.
    pub fn to_json(&self) -> Result<Value, CalendarError> {
        to_record(self, "range generator")
    }

    /// Decodes a record produced by [`Self::to_json`].
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidContent`] for an unknown standard or
    /// invalid parameters.
    pub fn from_json(record: &Value) -> Result<Self, CalendarError> {
        from_record(record, "range generator")
    }
}

impl RangeGenerator for StandardGenerator {
    fn generate_range(&self, reference: NaiveDate) -> Result<DateRange, CalendarError> {
        let count: i32 = self.count;
        match self.standard {
            Standard::CurrentDate => DateRange::current_date(reference, count),
            Standard::CurrentYear => DateRange::current_year(reference, count),
            Standard::CurrentMonth => DateRange::current_month(reference, count),
            Standard::CurrentQuarter => DateRange::current_quarter(reference, count),
            Standard::CurrentWeek => DateRange::current_week(
                reference,
                crate::config::start_of_week_or_default(self.start_of_week),
                count,
            ),
            Standard::YearToDate => Ok(DateRange::year_to_date(reference)),
            Standard::QuarterToDate => Ok(DateRange::quarter_to_date(reference)),
            Standard::MonthToDate => Ok(DateRange::month_to_date(reference)),
            Standard::LastYears => DateRange::last_years(reference, count),
            Standard::LastMonths => DateRange::last_months(reference, count),
            Standard::LastWeeks => DateRange::last_weeks(reference, count),
            Standard::LastDays => DateRange::last_days(reference, count),
            Standard::PrecedingYears => DateRange::preceding_years(reference, count),
            Standard::PrecedingMonths => DateRange::preceding_months(reference, count),
            Standard::PrecedingQuarters => DateRange::preceding_quarters(reference, count),
        }
    }
}

impl TryFrom<GeneratorRecord> for StandardGenerator {
    type Error = CalendarError;

    fn try_from(record: GeneratorRecord) -> Result<Self, Self::Error> {
        Self::from_parameters(record.standard, &record.parameters)
    }
}

impl From<StandardGenerator> for GeneratorRecord {
    fn from(generator: StandardGenerator) -> Self {
        Self {
            standard: generator.standard,
            parameters: generator.parameters(),
        }
    }
}

fn weekday_from_iso(day: i32) -> Result<Weekday, CalendarError> {
    day.checked_sub(1)
        .and_then(|index| u8::try_from(index).ok())
        .and_then(|index| Weekday::try_from(index).ok())
        .ok_or_else(|| {
            CalendarError::InvalidContent(format!("day of week must be 1 through 7, got {day}"))
        })
}

// number_from_monday is 1..=7
#[allow(clippy::cast_possible_wrap)]
fn iso_from_weekday(day: Weekday) -> i32 {
    day.number_from_monday() as i32
}
