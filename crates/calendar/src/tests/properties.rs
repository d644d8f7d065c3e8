// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::date_util::{
    days_to, end_of_month, end_of_quarter, end_of_week, end_of_year, start_of_month,
    start_of_quarter, start_of_week, start_of_year,
};
use crate::tests::helpers::ymd;
use crate::{
    BasicOffset, CalendarError, DayOffset, Interval, IntervalRelation, NthDayOfWeekOffset, Overlap,
    PeriodicDateGenerator, SubIntervalOffset, TimePeriod,
};
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeDelta, Utc, Weekday};
use chrono_tz::Tz;
use proptest::prelude::*;
use proptest::sample::select;
use serde_json::Value;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (-40_000_i64..40_000).prop_map(|offset| ymd(2000, 1, 1) + TimeDelta::days(offset))
}

fn any_weekday() -> impl Strategy<Value = Weekday> {
    select(WEEKDAYS.to_vec())
}

fn any_sub_interval_offset() -> impl Strategy<Value = Option<SubIntervalOffset>> {
    prop_oneof![
        Just(None),
        (-40_i32..40).prop_map(|days| Some(SubIntervalOffset::from(DayOffset::new(days)))),
        (any_weekday(), 1_i32..5)
            .prop_map(|(day, occurrence)| {
                Some(SubIntervalOffset::from(NthDayOfWeekOffset::new(day, occurrence)))
            }),
    ]
}

fn any_basic_offset() -> impl Strategy<Value = BasicOffset> {
    (
        select(Interval::all().to_vec()),
        -50_i32..50,
        select(vec![
            IntervalRelation::FirstDay,
            IntervalRelation::CurrentDay,
            IntervalRelation::LastDay,
        ]),
        any_sub_interval_offset(),
        proptest::option::of(any_weekday()),
    )
        .prop_map(|(interval, offset, relation, sub, week_start)| {
            let mut basic: BasicOffset = BasicOffset::new(interval, offset, relation);
            if let Some(sub) = sub {
                basic = basic.with_sub_interval_offset(sub);
            }
            if let Some(day) = week_start {
                basic = basic.with_start_of_week(day);
            }
            basic
        })
}

/// Instant and whole-day periods within a few days of `base`, so that
/// whole days, instants and mixed pairs all meet on shared edges.
fn any_period(base: NaiveDate) -> impl Strategy<Value = TimePeriod> {
    let origin: DateTime<Utc> = base.and_time(NaiveTime::MIN).and_utc();
    prop_oneof![
        (0_i64..96, 0_i64..96).prop_map(move |(first, second)| {
            TimePeriod::from_edge_times(
                origin + TimeDelta::hours(first),
                origin + TimeDelta::hours(second),
            )
        }),
        (0_i64..4, 1_i32..4).prop_map(move |(first, count)| {
            TimePeriod::from_first_day_and_count(base + TimeDelta::days(first), count).unwrap()
        }),
    ]
}

/// Two periods around an ordinary week or the New York spring DST change.
fn any_period_pair() -> impl Strategy<Value = (TimePeriod, TimePeriod)> {
    select(vec![ymd(2018, 1, 1), ymd(2018, 3, 9)])
        .prop_flat_map(|base| (any_period(base), any_period(base)))
}

proptest! {
    #[test]
    fn test_date_lies_within_its_boundaries(date in any_date(), week_start in any_weekday()) {
        prop_assert!(start_of_month(date) <= date && date <= end_of_month(date));
        prop_assert!(start_of_quarter(date) <= date && date <= end_of_quarter(date));
        prop_assert!(start_of_year(date) <= date && date <= end_of_year(date));

        let week_first: NaiveDate = start_of_week(date, week_start).unwrap();
        let week_last: NaiveDate = end_of_week(date, week_start).unwrap();
        prop_assert!(week_first <= date && date <= week_last);
        prop_assert_eq!(days_to(week_first, week_last), 6);
    }

    #[test]
    fn test_first_and_last_day_offsets_match_boundaries(date in any_date()) {
        let boundaries: [(Interval, fn(NaiveDate) -> NaiveDate, fn(NaiveDate) -> NaiveDate); 3] = [
            (Interval::Year, start_of_year, end_of_year),
            (Interval::Quarter, start_of_quarter, end_of_quarter),
            (Interval::Month, start_of_month, end_of_month),
        ];
        for (interval, start, end) in boundaries {
            let first: BasicOffset = BasicOffset::new(interval, 0, IntervalRelation::FirstDay);
            let last: BasicOffset = BasicOffset::new(interval, 0, IntervalRelation::LastDay);
            prop_assert_eq!(first.offset_date(date).unwrap(), start(date));
            prop_assert_eq!(last.offset_date(date).unwrap(), end(date));
        }
    }

    #[test]
    fn test_basic_offset_round_trips(offset in any_basic_offset()) {
        let record: Value = offset.to_json().unwrap();
        prop_assert_eq!(BasicOffset::from_json(&record).unwrap(), offset);
    }

    #[test]
    fn test_nth_day_of_week_reverse_returns_to_first_occurrence(
        date in any_date(),
        day in any_weekday(),
        occurrence in 1_i32..6,
    ) {
        let offset: NthDayOfWeekOffset = NthDayOfWeekOffset::new(day, occurrence);
        let forward: NaiveDate = offset.offset_date(date).unwrap();
        let back: NaiveDate = offset.reverse_offset_date(forward).unwrap();

        prop_assert_eq!(forward.weekday(), day);
        prop_assert_eq!(back.weekday(), day);
        prop_assert!((0..7).contains(&days_to(date, back)));
    }

    #[test]
    fn test_count_mode_yields_count_plus_one_dates(
        date in any_date(),
        period in any_basic_offset(),
        count in 0_i32..24,
    ) {
        let generator: PeriodicDateGenerator =
            PeriodicDateGenerator::counted(DayOffset::new(0), period, count).unwrap();
        let dates: Vec<NaiveDate> = generator
            .iter(date)
            .unwrap()
            .collect::<Result<Vec<NaiveDate>, CalendarError>>()
            .unwrap();
        prop_assert_eq!(dates.len(), usize::try_from(count).unwrap() + 1);
    }

    #[test]
    fn test_overlap_is_symmetric((a, b) in any_period_pair()) {
        let new_york: Tz = chrono_tz::America::New_York;
        prop_assert_eq!(a.overlap(&b, &Utc), b.overlap(&a, &Utc).reversed());
        prop_assert_eq!(a.overlap(&b, &new_york), b.overlap(&a, &new_york).reversed());
        prop_assert_eq!(a.overlap(&a, &new_york), Overlap::Same);
    }
}
