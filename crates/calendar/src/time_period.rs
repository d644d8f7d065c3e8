// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time spans attached to log entries.
//!
//! A [`TimePeriod`] is either a pair of instants or a run of whole days.
//! Whole days are zone independent; they only become instants when a zone
//! is supplied, running from local midnight of the first day to local
//! midnight after the last day.
//!
//! ## Invariants
//!
//! - The start never follows the end; factories order their inputs
//! - A whole-day period covers at least one day
//! - Values are immutable; edits replace the period

use crate::error::{CalendarError, require_positive};
use chrono::{DateTime, Days, Local, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use std::cmp::Ordering;

/// How a period relates to another period.
///
/// Variants are named from the point of view of the period being asked.
/// [`Overlap::reversed`] gives the answer the other period would give.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlap {
    /// The periods share no instant.
    None,
    /// This period ends exactly where the other starts.
    TouchOtherStart,
    /// This period starts exactly where the other ends.
    TouchOtherEnd,
    /// This period starts first and overlaps the other's start.
    OtherStart,
    /// This period starts inside the other and ends after it.
    OtherEnd,
    /// This period contains the other and is longer.
    EnclosesOther,
    /// Both periods have the same edges.
    Same,
    /// This period lies within the other and is shorter.
    InsideOther,
}

impl Overlap {
    /// The classification seen from the other period.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::None => Self::None,
            Self::TouchOtherStart => Self::TouchOtherEnd,
            Self::TouchOtherEnd => Self::TouchOtherStart,
            Self::OtherStart => Self::OtherEnd,
            Self::OtherEnd => Self::OtherStart,
            Self::EnclosesOther => Self::InsideOther,
            Self::Same => Self::Same,
            Self::InsideOther => Self::EnclosesOther,
        }
    }

    /// Converts this classification to its display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::TouchOtherStart => "TOUCH_OTHER_START",
            Self::TouchOtherEnd => "TOUCH_OTHER_END",
            Self::OtherStart => "OTHER_START",
            Self::OtherEnd => "OTHER_END",
            Self::EnclosesOther => "ENCLOSES_OTHER",
            Self::Same => "SAME",
            Self::InsideOther => "INSIDE_OTHER",
        }
    }

    /// Classifies `[a_start, a_end]` against `[b_start, b_end]`.
    fn classify<T: Ord>(a_start: &T, a_end: &T, b_start: &T, b_end: &T) -> Self {
        if a_end < b_start || a_start > b_end {
            Self::None
        } else if a_start == b_start && a_end == b_end {
            Self::Same
        } else if a_start <= b_start && a_end >= b_end {
            Self::EnclosesOther
        } else if a_start >= b_start && a_end <= b_end {
            Self::InsideOther
        } else if a_end == b_start {
            Self::TouchOtherStart
        } else if a_start == b_end {
            Self::TouchOtherEnd
        } else if a_start < b_start {
            Self::OtherStart
        } else {
            Self::OtherEnd
        }
    }
}

/// Where an instant falls relative to a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Before the start.
    Before,
    /// Exactly at the start.
    OnStartEdge,
    /// Strictly between the edges.
    Inside,
    /// Exactly at the end.
    OnEndEdge,
    /// After the end.
    After,
}

impl Relation {
    /// Converts this relation to its display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Before => "BEFORE",
            Self::OnStartEdge => "ON_START_EDGE",
            Self::Inside => "INSIDE",
            Self::OnEndEdge => "ON_END_EDGE",
            Self::After => "AFTER",
        }
    }
}

impl std::fmt::Display for Overlap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Span {
    Instants {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    FullDays {
        first_full_day: NaiveDate,
        day_after_last: NaiveDate,
    },
}

/// A span of time: either two instants or a run of whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimePeriod {
    span: Span,
}

impl TimePeriod {
    /// The span between two instants, in either order.
    #[must_use]
    pub fn from_edge_times(first: DateTime<Utc>, second: DateTime<Utc>) -> Self {
        Self {
            span: Span::Instants {
                start: first.min(second),
                end: first.max(second),
            },
        }
    }

    /// The whole days from one date through another, in either order.
    ///
    /// # Errors
    ///
    /// Returns an error if the day after the later date is out of range.
    pub fn from_edge_dates(first: NaiveDate, second: NaiveDate) -> Result<Self, CalendarError> {
        let last: NaiveDate = first.max(second);
        let day_after_last: NaiveDate = last
            .checked_add_days(Days::new(1))
            .ok_or_else(|| CalendarError::overflow(format!("finding the day after {last}")))?;
        Ok(Self {
            span: Span::FullDays {
                first_full_day: first.min(second),
                day_after_last,
            },
        })
    }

    /// `full_day_count` whole days starting on `first_full_day`.
    ///
    /// # Errors
    ///
    /// Returns an error if the count is not positive or the span is out of range.
    pub fn from_first_day_and_count(
        first_full_day: NaiveDate,
        full_day_count: i32,
    ) -> Result<Self, CalendarError> {
        let full_day_count: i32 = require_positive("full_day_count", full_day_count)?;
        let day_after_last: NaiveDate = first_full_day
            .checked_add_days(Days::new(full_day_count.unsigned_abs().into()))
            .ok_or_else(|| {
                CalendarError::overflow(format!(
                    "adding {full_day_count} days to {first_full_day}"
                ))
            })?;
        Ok(Self {
            span: Span::FullDays {
                first_full_day,
                day_after_last,
            },
        })
    }

    /// The span from `edge` lasting `duration`.
    ///
    /// A negative duration produces a period ending at `edge`.
    ///
    /// # Errors
    ///
    /// Returns an error if the other edge is out of range.
    pub fn from_edge_and_duration(
        edge: DateTime<Utc>,
        duration: TimeDelta,
    ) -> Result<Self, CalendarError> {
        let other: DateTime<Utc> = edge
            .checked_add_signed(duration)
            .ok_or_else(|| CalendarError::overflow(format!("adding {duration} to {edge}")))?;
        Ok(Self::from_edge_times(edge, other))
    }

    /// The smallest period covering both `a` and `b`.
    ///
    /// Stays in whole days when both inputs are whole days, otherwise the
    /// result is expressed in instants resolved through `zone`.
    #[must_use]
    pub fn join_periods<Z: TimeZone>(a: &Self, b: &Self, zone: &Z) -> Self {
        match (a.span, b.span) {
            (
                Span::FullDays {
                    first_full_day: a_first,
                    day_after_last: a_after,
                },
                Span::FullDays {
                    first_full_day: b_first,
                    day_after_last: b_after,
                },
            ) => Self {
                span: Span::FullDays {
                    first_full_day: a_first.min(b_first),
                    day_after_last: a_after.max(b_after),
                },
            },
            _ => Self {
                span: Span::Instants {
                    start: a.start_instant(zone).min(b.start_instant(zone)),
                    end: a.end_instant(zone).max(b.end_instant(zone)),
                },
            },
        }
    }

    /// Returns whether the period is expressed in whole days.
    #[must_use]
    pub const fn is_full_days(&self) -> bool {
        matches!(self.span, Span::FullDays { .. })
    }

    /// The first whole day, for whole-day periods.
    #[must_use]
    pub const fn first_full_day(&self) -> Option<NaiveDate> {
        match self.span {
            Span::FullDays { first_full_day, .. } => Some(first_full_day),
            Span::Instants { .. } => None,
        }
    }

    /// The last whole day, for whole-day periods.
    #[must_use]
    pub fn last_full_day(&self) -> Option<NaiveDate> {
        match self.span {
            Span::FullDays { day_after_last, .. } => day_after_last.pred_opt(),
            Span::Instants { .. } => None,
        }
    }

    /// Number of whole days, for whole-day periods.
    #[must_use]
    pub fn full_day_count(&self) -> Option<i64> {
        match self.span {
            Span::FullDays {
                first_full_day,
                day_after_last,
            } => Some((day_after_last - first_full_day).num_days()),
            Span::Instants { .. } => None,
        }
    }

    /// The starting instant, resolving whole days through `zone`.
    #[must_use]
    pub fn start_instant<Z: TimeZone>(&self, zone: &Z) -> DateTime<Utc> {
        match self.span {
            Span::Instants { start, .. } => start,
            Span::FullDays { first_full_day, .. } => start_of_day(first_full_day, zone),
        }
    }

    /// The ending instant, resolving whole days through `zone`.
    #[must_use]
    pub fn end_instant<Z: TimeZone>(&self, zone: &Z) -> DateTime<Utc> {
        match self.span {
            Span::Instants { end, .. } => end,
            Span::FullDays { day_after_last, .. } => start_of_day(day_after_last, zone),
        }
    }

    /// Length of the period in `zone`; whole days may be 23 or 25 hours
    /// across daylight saving transitions.
    #[must_use]
    pub fn duration<Z: TimeZone>(&self, zone: &Z) -> TimeDelta {
        self.end_instant(zone) - self.start_instant(zone)
    }

    /// The same span expressed as instants in `zone`.
    #[must_use]
    pub fn as_instant_time_period<Z: TimeZone>(&self, zone: &Z) -> Self {
        Self {
            span: Span::Instants {
                start: self.start_instant(zone),
                end: self.end_instant(zone),
            },
        }
    }

    /// Classifies how this period overlaps `other` in `zone`.
    #[must_use]
    pub fn overlap<Z: TimeZone>(&self, other: &Self, zone: &Z) -> Overlap {
        Overlap::classify(
            &self.start_instant(zone),
            &self.end_instant(zone),
            &other.start_instant(zone),
            &other.end_instant(zone),
        )
    }

    /// Classifies where `instant` falls relative to this period in `zone`.
    ///
    /// For a zero length period an instant on both edges is reported as
    /// [`Relation::OnStartEdge`].
    #[must_use]
    pub fn time_relation<Z: TimeZone>(&self, instant: DateTime<Utc>, zone: &Z) -> Relation {
        let start: DateTime<Utc> = self.start_instant(zone);
        let end: DateTime<Utc> = self.end_instant(zone);
        match (instant.cmp(&start), instant.cmp(&end)) {
            (Ordering::Less, _) => Relation::Before,
            (Ordering::Equal, _) => Relation::OnStartEdge,
            (_, Ordering::Less) => Relation::Inside,
            (_, Ordering::Equal) => Relation::OnEndEdge,
            (_, Ordering::Greater) => Relation::After,
        }
    }

    /// Orders by start instant, then end instant, in `zone`.
    #[must_use]
    pub fn compare_in_zone<Z: TimeZone>(&self, other: &Self, zone: &Z) -> Ordering {
        self.start_instant(zone)
            .cmp(&other.start_instant(zone))
            .then_with(|| self.end_instant(zone).cmp(&other.end_instant(zone)))
    }

    /// Orders by start, then end.
    ///
    /// Two whole-day periods compare by their days. Any comparison involving
    /// instants resolves whole days through the system time zone, so mixed
    /// comparisons can differ between machines.
    #[must_use]
    pub fn compare_to(&self, other: &Self) -> Ordering {
        match (self.span, other.span) {
            (
                Span::FullDays {
                    first_full_day: a_first,
                    day_after_last: a_after,
                },
                Span::FullDays {
                    first_full_day: b_first,
                    day_after_last: b_after,
                },
            ) => a_first.cmp(&b_first).then(a_after.cmp(&b_after)),
            _ => self.compare_in_zone(other, &Local),
        }
    }
}

impl std::fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.span {
            Span::Instants { start, end } => {
                write!(f, "{}/{}", start.to_rfc3339(), end.to_rfc3339())
            }
            Span::FullDays {
                first_full_day,
                day_after_last,
            } => write!(
                f,
                "{first_full_day} ({} days)",
                (day_after_last - first_full_day).num_days()
            ),
        }
    }
}

/// Parses an IANA time zone identifier such as `America/New_York`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidTimezone`] if the identifier is unknown.
pub fn parse_zone(name: &str) -> Result<Tz, CalendarError> {
    name.parse()
        .map_err(|_| CalendarError::InvalidTimezone(name.to_string()))
}

/// Local midnight of `date` in `zone` as an instant.
fn start_of_day<Z: TimeZone>(date: NaiveDate, zone: &Z) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    zone.from_local_datetime(&midnight)
        .earliest()
        // Midnight skipped by a daylight saving jump; the day starts an hour later.
        .or_else(|| {
            midnight
                .checked_add_signed(TimeDelta::hours(1))
                .and_then(|later| zone.from_local_datetime(&later).earliest())
        })
        .map_or_else(|| midnight.and_utc(), |start| start.with_timezone(&Utc))
}
