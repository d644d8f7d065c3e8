// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Builds a date, panicking on an invalid one.
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// 2018-02-11, a Sunday.
pub fn reference_date() -> NaiveDate {
    ymd(2018, 2, 11)
}

/// An instant `hour` hours after 2018-01-01T00:00Z.
pub fn at_hour(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap() + chrono::TimeDelta::hours(i64::from(hour))
}
