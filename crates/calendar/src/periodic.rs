// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Periodic date sequences.
//!
//! A [`PeriodicDateGenerator`] resolves a start date from a reference
//! date, then steps forward (or backward) by a repeating period.
//!
//! ## Termination
//!
//! - Count mode: exactly `period_count + 1` dates
//! - End-date mode: dates up to and including a second resolved date
//!
//! The two modes are mutually exclusive: an end date offset requires a
//! period count of zero.
//!
//! ## Stepping
//!
//! Date `k` applies the period offset with `k` times the original interval
//! offset to the first date. Each date is derived from the first one rather
//! than from its predecessor, so month-end clamping never accumulates
//! (January 31st steps to February 28th and then March 31st).

use crate::date_offset::{BasicOffset, DateOffset};
use crate::error::CalendarError;
use crate::record::{from_record, to_record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::iter::FusedIterator;
use tracing::debug;

/// Generates a bounded sequence of dates from a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PeriodicRecord", into = "PeriodicRecord")]
pub struct PeriodicDateGenerator {
    start_date_offset: DateOffset,
    period_date_offset: BasicOffset,
    period_count: i32,
    end_date_offset: Option<DateOffset>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PeriodicRecord {
    start_date_offset: DateOffset,
    period_date_offset: BasicOffset,
    #[serde(default)]
    period_count: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_date_offset: Option<DateOffset>,
}

impl PeriodicDateGenerator {
    /// Creates a generator.
    ///
    /// # Arguments
    ///
    /// * `start_date_offset` - Resolves the first date from the reference date
    /// * `period_date_offset` - The step between successive dates
    /// * `period_count` - Number of periods after the first date (count mode)
    /// * `end_date_offset` - Resolves the last date from the reference date
    ///   (end-date mode)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `end_date_offset` is supplied and `period_count` is not 0
    /// - `period_count` is negative
    pub fn new(
        start_date_offset: impl Into<DateOffset>,
        period_date_offset: BasicOffset,
        period_count: i32,
        end_date_offset: Option<DateOffset>,
    ) -> Result<Self, CalendarError> {
        if end_date_offset.is_some() && period_count != 0 {
            return Err(CalendarError::ConflictingTermination { period_count });
        }
        if period_count < 0 {
            return Err(CalendarError::NegativeCount {
                name: "period_count",
                value: i64::from(period_count),
            });
        }

        Ok(Self {
            start_date_offset: start_date_offset.into(),
            period_date_offset,
            period_count,
            end_date_offset,
        })
    }

    /// A count mode generator producing `period_count + 1` dates.
    ///
    /// # Errors
    ///
    /// Returns an error if `period_count` is negative.
    pub fn counted(
        start_date_offset: impl Into<DateOffset>,
        period_date_offset: BasicOffset,
        period_count: i32,
    ) -> Result<Self, CalendarError> {
        Self::new(start_date_offset, period_date_offset, period_count, None)
    }

    /// An end-date mode generator.
    #[must_use]
    pub fn until(
        start_date_offset: impl Into<DateOffset>,
        period_date_offset: BasicOffset,
        end_date_offset: impl Into<DateOffset>,
    ) -> Self {
        Self {
            start_date_offset: start_date_offset.into(),
            period_date_offset,
            period_count: 0,
            end_date_offset: Some(end_date_offset.into()),
        }
    }

    /// The offset resolving the first date.
    #[must_use]
    pub const fn start_date_offset(&self) -> &DateOffset {
        &self.start_date_offset
    }

    /// The step between dates.
    #[must_use]
    pub const fn period_date_offset(&self) -> &BasicOffset {
        &self.period_date_offset
    }

    /// Number of periods after the first date in count mode.
    #[must_use]
    pub const fn period_count(&self) -> i32 {
        self.period_count
    }

    /// The offset resolving the last date in end-date mode.
    #[must_use]
    pub const fn end_date_offset(&self) -> Option<&DateOffset> {
        self.end_date_offset.as_ref()
    }

    /// Starts a new sequence for `reference`.
    ///
    /// Every call returns an independent iterator.
    ///
    /// # Errors
    ///
    /// Returns an error if resolving the first or last date overflows.
    pub fn iter(&self, reference: NaiveDate) -> Result<PeriodicDates, CalendarError> {
        let first_date: NaiveDate = self.start_date_offset.offset_date(reference)?;

        let termination: Termination = match &self.end_date_offset {
            None => {
                debug!(
                    %reference,
                    %first_date,
                    period_count = self.period_count,
                    "Starting counted periodic sequence"
                );
                Termination::Count {
                    last_index: self.period_count,
                }
            }
            Some(end_date_offset) => {
                let end_date: NaiveDate = end_date_offset.offset_date(reference)?;
                let next_date: NaiveDate = self.period_date_offset.offset_date(first_date)?;
                let step_direction: Ordering = next_date.cmp(&first_date);
                let end_direction: Ordering = end_date.cmp(&first_date);

                if step_direction == Ordering::Equal || step_direction != end_direction {
                    debug!(
                        %first_date,
                        %end_date,
                        %next_date,
                        "Period steps away from the end date; sequence collapses to one date"
                    );
                    Termination::EndDate {
                        end_date: first_date,
                        direction: Ordering::Equal,
                        previous: None,
                    }
                } else {
                    debug!(
                        %reference,
                        %first_date,
                        %end_date,
                        "Starting bounded periodic sequence"
                    );
                    Termination::EndDate {
                        end_date,
                        direction: step_direction,
                        previous: None,
                    }
                }
            }
        };

        Ok(PeriodicDates {
            first_date,
            period: self.period_date_offset,
            next_index: 0,
            termination,
            done: false,
        })
    }

    /// Resolves the whole sequence for `reference` into `dates`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while resolving the sequence; dates
    /// produced before the error are left in `dates`.
    pub fn periodic_dates<C>(
        &self,
        reference: NaiveDate,
        dates: &mut C,
    ) -> Result<(), CalendarError>
    where
        C: Extend<NaiveDate>,
    {
        for date in self.iter(reference)? {
            dates.extend(std::iter::once(date?));
        }
        Ok(())
    }

    /// Encodes the generator as a key/value record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be built.
    pub fn to_json(&self) -> Result<Value, CalendarError> {
        to_record(self, "periodic date generator")
    }

    /// Decodes a record produced by [`Self::to_json`], re-validating it.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidContent`] if the record is malformed
    /// or describes an invalid generator.
    pub fn from_json(record: &Value) -> Result<Self, CalendarError> {
        from_record(record, "periodic date generator")
    }
}

impl TryFrom<PeriodicRecord> for PeriodicDateGenerator {
    type Error = CalendarError;

    fn try_from(record: PeriodicRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.start_date_offset,
            record.period_date_offset,
            record.period_count,
            record.end_date_offset,
        )
    }
}

impl From<PeriodicDateGenerator> for PeriodicRecord {
    fn from(generator: PeriodicDateGenerator) -> Self {
        Self {
            start_date_offset: generator.start_date_offset,
            period_date_offset: generator.period_date_offset,
            period_count: generator.period_count,
            end_date_offset: generator.end_date_offset,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Termination {
    Count {
        last_index: i32,
    },
    EndDate {
        end_date: NaiveDate,
        direction: Ordering,
        previous: Option<NaiveDate>,
    },
}

/// The dates of one periodic sequence.
///
/// Yields `Err` at most once, after which the sequence ends.
#[derive(Debug, Clone)]
pub struct PeriodicDates {
    first_date: NaiveDate,
    period: BasicOffset,
    next_index: i32,
    termination: Termination,
    done: bool,
}

impl PeriodicDates {
    fn date_at(&self, index: i32) -> Result<NaiveDate, CalendarError> {
        if index == 0 {
            return Ok(self.first_date);
        }
        let step: i32 = self.period.interval_offset();
        let extra: i32 = step
            .checked_mul(index - 1)
            .ok_or_else(|| CalendarError::overflow(format!("stepping to period {index}")))?;
        self.period
            .plus_interval_offset(extra)?
            .offset_date(self.first_date)
    }
}

impl Iterator for PeriodicDates {
    type Item = Result<NaiveDate, CalendarError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let index: i32 = self.next_index;
        let date: NaiveDate = match self.date_at(index) {
            Ok(date) => date,
            Err(err) => {
                self.done = true;
                return Some(Err(err));
            }
        };

        match &mut self.termination {
            Termination::Count { last_index } => {
                if index >= *last_index {
                    self.done = true;
                }
            }
            Termination::EndDate {
                end_date,
                direction,
                previous,
            } => {
                if date.cmp(end_date) == *direction && *direction != Ordering::Equal {
                    self.done = true;
                    return None;
                }
                // A step that does not advance would never reach the end date.
                if previous.is_some_and(|prior| date.cmp(&prior) != *direction) {
                    self.done = true;
                    return None;
                }
                *previous = Some(date);
                if *direction == Ordering::Equal {
                    self.done = true;
                }
            }
        }

        match index.checked_add(1) {
            Some(next_index) => self.next_index = next_index,
            None => self.done = true,
        }
        Some(Ok(date))
    }
}

impl FusedIterator for PeriodicDates {}
