// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stateless calendar arithmetic.
//!
//! Boundary lookups (start and end of month, quarter and year) can never
//! leave the calendar range and are infallible. Anything that moves a date
//! by a caller supplied amount is checked and reports
//! [`CalendarError::DateArithmeticOverflow`].

use crate::error::CalendarError;
use crate::quarter::Quarter;
use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

/// Average number of days in a year used by [`years_until`].
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Number of days in the year containing `date`.
#[must_use]
pub const fn days_in_year(date: NaiveDate) -> u32 {
    if date.leap_year() { 366 } else { 365 }
}

/// Number of days in the month containing `date`.
#[must_use]
pub fn days_in_month(date: NaiveDate) -> u32 {
    u32::from(date.num_days_in_month())
}

// Day 1, the last day of a month and ordinal 1 exist in every month and
// year chrono represents, so the fallbacks below are never taken.

/// First day of the month containing `date`.
#[must_use]
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`.
#[must_use]
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(days_in_month(date)).unwrap_or(date)
}

/// First day of the quarter containing `date`.
#[must_use]
pub fn start_of_quarter(date: NaiveDate) -> NaiveDate {
    let first_month: u32 = Quarter::of(date).first_month().number_from_month();
    NaiveDate::from_ymd_opt(date.year(), first_month, 1).unwrap_or(date)
}

/// Last day of the quarter containing `date`.
#[must_use]
pub fn end_of_quarter(date: NaiveDate) -> NaiveDate {
    let last_month: u32 = Quarter::of(date).last_month().number_from_month();
    NaiveDate::from_ymd_opt(date.year(), last_month, 1).map_or(date, end_of_month)
}

/// January 1st of the year containing `date`.
#[must_use]
pub fn start_of_year(date: NaiveDate) -> NaiveDate {
    date.with_ordinal(1).unwrap_or(date)
}

/// December 31st of the year containing `date`.
#[must_use]
pub fn end_of_year(date: NaiveDate) -> NaiveDate {
    date.with_ordinal(days_in_year(date)).unwrap_or(date)
}

/// Start of the month plus `day_count` days.
///
/// # Errors
///
/// Returns an error if the result is out of range.
pub fn offset_from_start_of_month(
    date: NaiveDate,
    day_count: i64,
) -> Result<NaiveDate, CalendarError> {
    plus_days(start_of_month(date), day_count)
}

/// End of the month minus `day_count` days; positive counts move into the past.
///
/// # Errors
///
/// Returns an error if the result is out of range.
pub fn offset_from_end_of_month(
    date: NaiveDate,
    day_count: i64,
) -> Result<NaiveDate, CalendarError> {
    minus_days(end_of_month(date), day_count)
}

/// Start of the quarter plus `day_count` days.
///
/// # Errors
///
/// Returns an error if the result is out of range.
pub fn offset_from_start_of_quarter(
    date: NaiveDate,
    day_count: i64,
) -> Result<NaiveDate, CalendarError> {
    plus_days(start_of_quarter(date), day_count)
}

/// End of the quarter minus `day_count` days; positive counts move into the past.
///
/// # Errors
///
/// Returns an error if the result is out of range.
pub fn offset_from_end_of_quarter(
    date: NaiveDate,
    day_count: i64,
) -> Result<NaiveDate, CalendarError> {
    minus_days(end_of_quarter(date), day_count)
}

/// Start of the year plus `day_count` days.
///
/// # Errors
///
/// Returns an error if the result is out of range.
pub fn offset_from_start_of_year(
    date: NaiveDate,
    day_count: i64,
) -> Result<NaiveDate, CalendarError> {
    plus_days(start_of_year(date), day_count)
}

/// End of the year minus `day_count` days; positive counts move into the past.
///
/// # Errors
///
/// Returns an error if the result is out of range.
pub fn offset_from_end_of_year(
    date: NaiveDate,
    day_count: i64,
) -> Result<NaiveDate, CalendarError> {
    minus_days(end_of_year(date), day_count)
}

/// The latest date on or before `date` that falls on `day_of_week`.
///
/// # Errors
///
/// Returns an error if the result is out of range.
pub fn closest_day_of_week_on_or_before(
    date: NaiveDate,
    day_of_week: Weekday,
) -> Result<NaiveDate, CalendarError> {
    let delta: u32 = (date.weekday().num_days_from_monday() + 7
        - day_of_week.num_days_from_monday())
        % 7;
    date.checked_sub_days(Days::new(u64::from(delta)))
        .ok_or_else(|| {
            CalendarError::overflow(format!("finding {day_of_week} on or before {date}"))
        })
}

/// The earliest date on or after `date` that falls on `day_of_week`.
///
/// # Errors
///
/// Returns an error if the result is out of range.
pub fn closest_day_of_week_on_or_after(
    date: NaiveDate,
    day_of_week: Weekday,
) -> Result<NaiveDate, CalendarError> {
    let delta: u32 = (day_of_week.num_days_from_monday() + 7
        - date.weekday().num_days_from_monday())
        % 7;
    date.checked_add_days(Days::new(u64::from(delta)))
        .ok_or_else(|| {
            CalendarError::overflow(format!("finding {day_of_week} on or after {date}"))
        })
}

/// First day of the week containing `date` for weeks starting on `start_of_week`.
///
/// # Errors
///
/// Returns an error if the result is out of range.
pub fn start_of_week(date: NaiveDate, start_of_week: Weekday) -> Result<NaiveDate, CalendarError> {
    closest_day_of_week_on_or_before(date, start_of_week)
}

/// Last day of the week containing `date` for weeks starting on `start_of_week`.
///
/// # Errors
///
/// Returns an error if the result is out of range.
pub fn end_of_week(date: NaiveDate, start_of_week: Weekday) -> Result<NaiveDate, CalendarError> {
    closest_day_of_week_on_or_after(date, start_of_week.pred())
}

/// Moves `date` by a signed number of days.
///
/// # Errors
///
/// Returns an error if the result is out of range.
pub fn plus_days(date: NaiveDate, days: i64) -> Result<NaiveDate, CalendarError> {
    let magnitude: Days = Days::new(days.unsigned_abs());
    let moved: Option<NaiveDate> = if days >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    };
    moved.ok_or_else(|| CalendarError::overflow(format!("adding {days} days to {date}")))
}

/// Moves `date` backwards by a signed number of days.
///
/// # Errors
///
/// Returns an error if the result is out of range.
pub fn minus_days(date: NaiveDate, days: i64) -> Result<NaiveDate, CalendarError> {
    let negated: i64 = days
        .checked_neg()
        .ok_or_else(|| CalendarError::overflow(format!("subtracting {days} days from {date}")))?;
    plus_days(date, negated)
}

/// Moves `date` by a signed number of weeks.
///
/// # Errors
///
/// Returns an error if the result is out of range.
pub fn plus_weeks(date: NaiveDate, weeks: i64) -> Result<NaiveDate, CalendarError> {
    let days: i64 = weeks
        .checked_mul(7)
        .ok_or_else(|| CalendarError::overflow(format!("adding {weeks} weeks to {date}")))?;
    plus_days(date, days)
}

/// Moves `date` by a signed number of months.
///
/// The day of month is clamped to the length of the target month, so
/// January 31st plus one month is the last day of February.
///
/// # Errors
///
/// Returns an error if the result is out of range.
pub fn plus_months(date: NaiveDate, months: i64) -> Result<NaiveDate, CalendarError> {
    let overflow = || CalendarError::overflow(format!("adding {months} months to {date}"));
    let magnitude: Months =
        Months::new(u32::try_from(months.unsigned_abs()).map_err(|_| overflow())?);
    let moved: Option<NaiveDate> = if months >= 0 {
        date.checked_add_months(magnitude)
    } else {
        date.checked_sub_months(magnitude)
    };
    moved.ok_or_else(overflow)
}

/// Moves `date` by a signed number of quarters (three months each).
///
/// # Errors
///
/// Returns an error if the result is out of range.
pub fn plus_quarters(date: NaiveDate, quarters: i64) -> Result<NaiveDate, CalendarError> {
    let months: i64 = quarters
        .checked_mul(3)
        .ok_or_else(|| CalendarError::overflow(format!("adding {quarters} quarters to {date}")))?;
    plus_months(date, months)
}

/// Moves `date` backwards by a signed number of quarters.
///
/// # Errors
///
/// Returns an error if the result is out of range.
pub fn minus_quarters(date: NaiveDate, quarters: i64) -> Result<NaiveDate, CalendarError> {
    let negated: i64 = quarters.checked_neg().ok_or_else(|| {
        CalendarError::overflow(format!("subtracting {quarters} quarters from {date}"))
    })?;
    plus_quarters(date, negated)
}

/// Moves `date` by a signed number of years, clamping February 29th.
///
/// # Errors
///
/// Returns an error if the result is out of range.
pub fn plus_years(date: NaiveDate, years: i64) -> Result<NaiveDate, CalendarError> {
    let months: i64 = years
        .checked_mul(12)
        .ok_or_else(|| CalendarError::overflow(format!("adding {years} years to {date}")))?;
    plus_months(date, months)
}

/// Signed number of days from `from` to `to`; positive when `to` is later.
#[must_use]
pub fn days_to(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Approximate number of years from `from` to `to`.
///
/// This is the day count divided by 365.25 and makes no attempt to
/// account for where the leap days actually fall.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn years_until(from: NaiveDate, to: NaiveDate) -> f64 {
    days_to(from, to) as f64 / DAYS_PER_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_days_in_month_and_year() {
        assert_eq!(days_in_month(ymd(2018, 2, 11)), 28);
        assert_eq!(days_in_month(ymd(2020, 2, 1)), 29);
        assert_eq!(days_in_month(ymd(2018, 4, 30)), 30);
        assert_eq!(days_in_month(NaiveDate::MAX), 31);
        assert_eq!(days_in_year(ymd(2018, 7, 4)), 365);
        assert_eq!(days_in_year(ymd(2000, 1, 1)), 366);
        assert_eq!(days_in_year(ymd(1900, 1, 1)), 365);
    }

    #[test]
    fn test_month_boundaries() {
        assert_eq!(start_of_month(ymd(2018, 2, 11)), ymd(2018, 2, 1));
        assert_eq!(end_of_month(ymd(2018, 2, 11)), ymd(2018, 2, 28));
        assert_eq!(end_of_month(ymd(2020, 2, 11)), ymd(2020, 2, 29));
        assert_eq!(end_of_month(ymd(2018, 12, 31)), ymd(2018, 12, 31));
        assert_eq!(end_of_month(ymd(2018, 4, 1)), ymd(2018, 4, 30));
    }

    #[test]
    fn test_quarter_boundaries() {
        assert_eq!(start_of_quarter(ymd(2018, 2, 11)), ymd(2018, 1, 1));
        assert_eq!(end_of_quarter(ymd(2018, 2, 11)), ymd(2018, 3, 31));
        assert_eq!(start_of_quarter(ymd(2018, 6, 30)), ymd(2018, 4, 1));
        assert_eq!(end_of_quarter(ymd(2018, 4, 1)), ymd(2018, 6, 30));
        assert_eq!(start_of_quarter(ymd(2018, 9, 15)), ymd(2018, 7, 1));
        assert_eq!(end_of_quarter(ymd(2018, 11, 30)), ymd(2018, 12, 31));
    }

    #[test]
    fn test_year_boundaries() {
        assert_eq!(start_of_year(ymd(2018, 7, 4)), ymd(2018, 1, 1));
        assert_eq!(end_of_year(ymd(2018, 7, 4)), ymd(2018, 12, 31));
        assert_eq!(end_of_year(ymd(2020, 1, 1)), ymd(2020, 12, 31));
    }

    #[test]
    fn test_boundaries_at_calendar_limits() {
        assert_eq!(end_of_year(NaiveDate::MAX), NaiveDate::MAX);
        assert_eq!(end_of_quarter(NaiveDate::MAX), NaiveDate::MAX);
        assert_eq!(start_of_year(NaiveDate::MIN), NaiveDate::MIN);
        assert_eq!(start_of_quarter(NaiveDate::MIN), NaiveDate::MIN);
    }

    #[test]
    fn test_offsets_from_boundaries() {
        let date: NaiveDate = ymd(2018, 2, 11);
        assert_eq!(offset_from_start_of_month(date, 2).unwrap(), ymd(2018, 2, 3));
        assert_eq!(offset_from_end_of_month(date, 2).unwrap(), ymd(2018, 2, 26));
        assert_eq!(offset_from_end_of_month(date, -1).unwrap(), ymd(2018, 3, 1));
        assert_eq!(offset_from_start_of_quarter(date, 31).unwrap(), ymd(2018, 2, 1));
        assert_eq!(offset_from_end_of_quarter(date, 1).unwrap(), ymd(2018, 3, 30));
        assert_eq!(offset_from_start_of_year(date, 0).unwrap(), ymd(2018, 1, 1));
        assert_eq!(offset_from_end_of_year(date, 30).unwrap(), ymd(2018, 12, 1));
    }

    #[test]
    fn test_closest_day_of_week() {
        // 2018-02-11 is a Sunday
        let sunday: NaiveDate = ymd(2018, 2, 11);
        assert_eq!(
            closest_day_of_week_on_or_before(sunday, Weekday::Sun).unwrap(),
            sunday
        );
        assert_eq!(
            closest_day_of_week_on_or_after(sunday, Weekday::Sun).unwrap(),
            sunday
        );
        assert_eq!(
            closest_day_of_week_on_or_before(sunday, Weekday::Mon).unwrap(),
            ymd(2018, 2, 5)
        );
        assert_eq!(
            closest_day_of_week_on_or_after(sunday, Weekday::Sat).unwrap(),
            ymd(2018, 2, 17)
        );
    }

    #[test]
    fn test_week_boundaries() {
        let wednesday: NaiveDate = ymd(2018, 2, 14);
        assert_eq!(start_of_week(wednesday, Weekday::Sun).unwrap(), ymd(2018, 2, 11));
        assert_eq!(end_of_week(wednesday, Weekday::Sun).unwrap(), ymd(2018, 2, 17));
        assert_eq!(start_of_week(wednesday, Weekday::Mon).unwrap(), ymd(2018, 2, 12));
        assert_eq!(end_of_week(wednesday, Weekday::Mon).unwrap(), ymd(2018, 2, 18));
    }

    #[test]
    fn test_quarter_arithmetic() {
        assert_eq!(plus_quarters(ymd(2018, 2, 11), 1).unwrap(), ymd(2018, 5, 11));
        assert_eq!(minus_quarters(ymd(2018, 2, 11), 1).unwrap(), ymd(2017, 11, 11));
        assert_eq!(plus_quarters(ymd(2018, 11, 30), -3).unwrap(), ymd(2018, 2, 28));
    }

    #[test]
    fn test_month_and_year_clamping() {
        assert_eq!(plus_months(ymd(2018, 1, 31), 1).unwrap(), ymd(2018, 2, 28));
        assert_eq!(plus_years(ymd(2020, 2, 29), 1).unwrap(), ymd(2021, 2, 28));
        assert_eq!(plus_years(ymd(2020, 2, 29), -4).unwrap(), ymd(2016, 2, 29));
    }

    #[test]
    fn test_overflow_is_reported() {
        let result: Result<NaiveDate, CalendarError> = plus_days(NaiveDate::MAX, 1);
        assert!(matches!(
            result,
            Err(CalendarError::DateArithmeticOverflow { .. })
        ));
        let result: Result<NaiveDate, CalendarError> = plus_months(ymd(2018, 1, 1), i64::MAX);
        assert!(result.is_err());
        let result: Result<NaiveDate, CalendarError> = minus_days(ymd(2018, 1, 1), i64::MIN);
        assert!(result.is_err());
    }

    #[test]
    fn test_days_to_is_signed() {
        assert_eq!(days_to(ymd(2018, 1, 1), ymd(2018, 1, 31)), 30);
        assert_eq!(days_to(ymd(2018, 1, 31), ymd(2018, 1, 1)), -30);
        assert_eq!(days_to(ymd(2018, 1, 1), ymd(2018, 1, 1)), 0);
    }

    #[test]
    fn test_years_until_is_approximate() {
        let years: f64 = years_until(ymd(2000, 1, 1), ymd(2004, 1, 1));
        // 1461 days / 365.25
        assert!((years - 4.0).abs() < 1e-9);
        let years: f64 = years_until(ymd(2001, 1, 1), ymd(2002, 1, 1));
        assert!(years < 1.0);
    }
}
