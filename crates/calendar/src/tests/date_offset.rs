// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{reference_date, ymd};
use crate::{
    BasicOffset, CalendarError, DateOffset, DayOffset, Interval, IntervalRelation,
    NthDayOfWeekOffset, SubIntervalOffset,
};
use chrono::{NaiveDate, Weekday};
use serde_json::{Value, json};
use std::collections::HashSet;
use std::str::FromStr;

#[test]
fn test_last_day_of_month_in_february() {
    let offset: BasicOffset = BasicOffset::new(Interval::Month, 0, IntervalRelation::LastDay);
    let date: NaiveDate = offset.offset_date(reference_date()).unwrap();
    assert_eq!(date, ymd(2018, 2, 28));
}

#[test]
fn test_first_day_of_next_year() {
    let offset: BasicOffset = BasicOffset::new(Interval::Year, 1, IntervalRelation::FirstDay);
    assert_eq!(offset.offset_date(reference_date()).unwrap(), ymd(2019, 1, 1));
}

#[test]
fn test_first_day_of_previous_quarter() {
    let offset: BasicOffset = BasicOffset::new(Interval::Quarter, -1, IntervalRelation::FirstDay);
    assert_eq!(offset.offset_date(reference_date()).unwrap(), ymd(2017, 10, 1));
}

#[test]
fn test_last_day_offset_counts_into_the_past() {
    let offset: BasicOffset = BasicOffset::new(Interval::Year, 1, IntervalRelation::LastDay);
    assert_eq!(offset.offset_date(reference_date()).unwrap(), ymd(2017, 12, 31));
}

#[test]
fn test_first_monday_of_month() {
    let offset: BasicOffset = BasicOffset::new(Interval::Month, 0, IntervalRelation::FirstDay)
        .with_sub_interval_offset(NthDayOfWeekOffset::new(Weekday::Mon, 1));
    assert_eq!(offset.offset_date(reference_date()).unwrap(), ymd(2018, 2, 5));
}

#[test]
fn test_last_friday_of_month_searches_backwards() {
    let offset: BasicOffset = BasicOffset::new(Interval::Month, 0, IntervalRelation::LastDay)
        .with_sub_interval_offset(NthDayOfWeekOffset::new(Weekday::Fri, 1));
    assert_eq!(offset.offset_date(reference_date()).unwrap(), ymd(2018, 2, 23));
}

#[test]
fn test_last_day_day_offset_is_subtracted() {
    let offset: BasicOffset = BasicOffset::new(Interval::Month, 0, IntervalRelation::LastDay)
        .with_sub_interval_offset(DayOffset::new(2));
    assert_eq!(offset.offset_date(reference_date()).unwrap(), ymd(2018, 2, 26));
}

#[test]
fn test_current_day_does_not_snap() {
    let offset: BasicOffset = BasicOffset::new(Interval::Day, 3, IntervalRelation::CurrentDay);
    assert_eq!(offset.offset_date(reference_date()).unwrap(), ymd(2018, 2, 14));

    let refined: BasicOffset = offset.with_sub_interval_offset(DayOffset::new(2));
    assert_eq!(refined.offset_date(reference_date()).unwrap(), ymd(2018, 2, 16));
}

#[test]
fn test_current_day_month_clamps_to_month_end() {
    let offset: BasicOffset = BasicOffset::new(Interval::Month, 1, IntervalRelation::CurrentDay);
    assert_eq!(offset.offset_date(ymd(2018, 1, 31)).unwrap(), ymd(2018, 2, 28));
}

#[test]
fn test_first_day_of_week_uses_explicit_start_of_week() {
    let monday: BasicOffset = BasicOffset::new(Interval::Week, 0, IntervalRelation::FirstDay)
        .with_start_of_week(Weekday::Mon);
    assert_eq!(monday.offset_date(reference_date()).unwrap(), ymd(2018, 2, 5));

    let sunday: BasicOffset = BasicOffset::new(Interval::Week, 0, IntervalRelation::FirstDay)
        .with_start_of_week(Weekday::Sun);
    assert_eq!(sunday.offset_date(reference_date()).unwrap(), ymd(2018, 2, 11));
}

#[test]
fn test_first_day_of_week_defaults_to_sunday() {
    let offset: BasicOffset = BasicOffset::new(Interval::Week, 1, IntervalRelation::FirstDay);
    assert_eq!(offset.offset_date(ymd(2018, 2, 14)).unwrap(), ymd(2018, 2, 18));
}

#[test]
fn test_last_day_of_week_lands_on_next_week_start() {
    let offset: BasicOffset = BasicOffset::new(Interval::Week, 0, IntervalRelation::LastDay)
        .with_start_of_week(Weekday::Sun);
    assert_eq!(offset.offset_date(ymd(2018, 2, 14)).unwrap(), ymd(2018, 2, 18));
    // A reference already on the week start stays put.
    assert_eq!(offset.offset_date(reference_date()).unwrap(), ymd(2018, 2, 11));
}

#[test]
fn test_last_day_of_previous_week() {
    let offset: BasicOffset = BasicOffset::new(Interval::Week, 1, IntervalRelation::LastDay)
        .with_start_of_week(Weekday::Mon);
    assert_eq!(offset.offset_date(reference_date()).unwrap(), ymd(2018, 2, 5));
    assert_eq!(offset.offset_date(ymd(2018, 2, 14)).unwrap(), ymd(2018, 2, 12));
}

#[test]
fn test_second_monday_from_a_monday() {
    let offset: NthDayOfWeekOffset = NthDayOfWeekOffset::new(Weekday::Mon, 2);
    assert_eq!(offset.offset_date(ymd(2018, 2, 12)).unwrap(), ymd(2018, 2, 19));
}

#[test]
fn test_third_sunday_from_a_monday() {
    let offset: NthDayOfWeekOffset = NthDayOfWeekOffset::new(Weekday::Sun, 3);
    assert_eq!(offset.offset_date(ymd(2018, 2, 12)).unwrap(), ymd(2018, 3, 4));
}

#[test]
fn test_nth_day_of_week_reverse() {
    let offset: NthDayOfWeekOffset = NthDayOfWeekOffset::new(Weekday::Mon, 2);
    assert_eq!(
        offset.reverse_offset_date(ymd(2018, 2, 11)).unwrap(),
        ymd(2018, 1, 29)
    );
}

#[test]
fn test_day_offset_reverse_subtracts() {
    let offset: DayOffset = DayOffset::new(10);
    assert_eq!(offset.offset_date(ymd(2018, 2, 25)).unwrap(), ymd(2018, 3, 7));
    assert_eq!(
        offset.reverse_offset_date(ymd(2018, 3, 7)).unwrap(),
        ymd(2018, 2, 25)
    );
}

#[test]
fn test_plus_interval_offset_only_changes_offset() {
    let offset: BasicOffset = BasicOffset::new(Interval::Month, 2, IntervalRelation::FirstDay)
        .with_sub_interval_offset(DayOffset::new(1))
        .with_start_of_week(Weekday::Mon);
    let moved: BasicOffset = offset.plus_interval_offset(3).unwrap();

    assert_eq!(moved.interval_offset(), 5);
    assert_eq!(moved.interval(), offset.interval());
    assert_eq!(moved.interval_relation(), offset.interval_relation());
    assert_eq!(moved.sub_interval_offset(), offset.sub_interval_offset());
    assert_eq!(moved.start_of_week(), offset.start_of_week());
}

#[test]
fn test_plus_interval_offset_overflow() {
    let offset: BasicOffset = BasicOffset::new(Interval::Day, i32::MAX, IntervalRelation::FirstDay);
    let result: Result<BasicOffset, CalendarError> = offset.plus_interval_offset(1);
    assert!(matches!(
        result,
        Err(CalendarError::DateArithmeticOverflow { .. })
    ));
}

#[test]
fn test_offset_out_of_calendar_range() {
    let offset: BasicOffset = BasicOffset::new(Interval::Year, i32::MAX, IntervalRelation::FirstDay);
    let result: Result<NaiveDate, CalendarError> = offset.offset_date(reference_date());
    assert!(matches!(
        result,
        Err(CalendarError::DateArithmeticOverflow { .. })
    ));
}

#[test]
fn test_structurally_equal_offsets_hash_alike() {
    let build = || {
        BasicOffset::new(Interval::Quarter, 1, IntervalRelation::LastDay)
            .with_sub_interval_offset(NthDayOfWeekOffset::new(Weekday::Tue, 2))
    };
    let mut offsets: HashSet<BasicOffset> = HashSet::new();
    offsets.insert(build());
    offsets.insert(build());
    assert_eq!(offsets.len(), 1);
    assert_ne!(build(), build().with_start_of_week(Weekday::Mon));
}

#[test]
fn test_interval_and_relation_names() {
    assert_eq!(Interval::from_str("quarter").unwrap(), Interval::Quarter);
    assert_eq!(Interval::Week.to_string(), "WEEK");
    assert_eq!(
        IntervalRelation::from_str("LAST_DAY").unwrap(),
        IntervalRelation::LastDay
    );
    assert!(matches!(
        Interval::from_str("fortnight"),
        Err(CalendarError::InvalidContent(_))
    ));
}

#[test]
fn test_basic_offset_record_shape() {
    let offset: BasicOffset = BasicOffset::new(Interval::Month, 0, IntervalRelation::LastDay)
        .with_sub_interval_offset(DayOffset::new(2));
    let record: Value = offset.to_json().unwrap();

    assert_eq!(
        record,
        json!({
            "type": "Basic",
            "interval": "MONTH",
            "interval_offset": 0,
            "interval_relation": "LAST_DAY",
            "sub_interval_offset": { "type": "DayOffset", "day_count": 2 },
        })
    );
}

#[test]
fn test_basic_offset_round_trip() {
    let plain: BasicOffset = BasicOffset::new(Interval::Week, -2, IntervalRelation::FirstDay);
    let refined: BasicOffset = plain
        .with_sub_interval_offset(NthDayOfWeekOffset::new(Weekday::Thu, 3))
        .with_start_of_week(Weekday::Mon);

    for offset in [plain, refined] {
        let record: Value = offset.to_json().unwrap();
        assert_eq!(BasicOffset::from_json(&record).unwrap(), offset);
    }
}

#[test]
fn test_date_offset_round_trip_for_every_variant() {
    let offsets: [DateOffset; 3] = [
        BasicOffset::new(Interval::Year, 1, IntervalRelation::CurrentDay).into(),
        DayOffset::new(-4).into(),
        NthDayOfWeekOffset::new(Weekday::Sat, 1).into(),
    ];
    for offset in offsets {
        let record: Value = offset.to_json().unwrap();
        assert_eq!(record["type"], offset.kind());
        assert_eq!(DateOffset::from_json(&record).unwrap(), offset);
    }
}

#[test]
fn test_sub_interval_offset_round_trip() {
    let offset: SubIntervalOffset = NthDayOfWeekOffset::new(Weekday::Wed, 2).into();
    let record: Value = offset.to_json().unwrap();
    assert_eq!(SubIntervalOffset::from_json(&record).unwrap(), offset);
}

#[test]
fn test_unknown_discriminator_is_rejected() {
    let record: Value = json!({ "type": "EasterOffset", "year": 2018 });
    assert!(matches!(
        DateOffset::from_json(&record),
        Err(CalendarError::InvalidContent(_))
    ));
    assert!(matches!(
        SubIntervalOffset::from_json(&record),
        Err(CalendarError::InvalidContent(_))
    ));
}

#[test]
fn test_sub_interval_offset_rejects_basic_records() {
    let record: Value = BasicOffset::new(Interval::Day, 1, IntervalRelation::FirstDay)
        .to_json()
        .unwrap();
    assert!(matches!(
        SubIntervalOffset::from_json(&record),
        Err(CalendarError::InvalidContent(_))
    ));
}

#[test]
fn test_basic_from_json_rejects_other_variants() {
    let record: Value = DateOffset::from(DayOffset::new(3)).to_json().unwrap();
    let result: Result<BasicOffset, CalendarError> = BasicOffset::from_json(&record);
    assert!(matches!(result, Err(CalendarError::InvalidContent(_))));
}

#[test]
fn test_malformed_fields_are_rejected() {
    let record: Value = json!({
        "type": "Basic",
        "interval": "FORTNIGHT",
        "interval_offset": 0,
        "interval_relation": "FIRST_DAY",
    });
    assert!(matches!(
        DateOffset::from_json(&record),
        Err(CalendarError::InvalidContent(_))
    ));
}
