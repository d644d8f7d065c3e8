// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar quarters.
//!
//! Quarters are fixed three month blocks starting in January, April,
//! July and October.

use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

/// One of the four calendar quarters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Quarter {
    /// January through March.
    First,
    /// April through June.
    Second,
    /// July through September.
    Third,
    /// October through December.
    Fourth,
}

const BY_MONTH0: [Quarter; 12] = [
    Quarter::First,
    Quarter::First,
    Quarter::First,
    Quarter::Second,
    Quarter::Second,
    Quarter::Second,
    Quarter::Third,
    Quarter::Third,
    Quarter::Third,
    Quarter::Fourth,
    Quarter::Fourth,
    Quarter::Fourth,
];

impl Quarter {
    /// Returns the quarter containing `date`.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        BY_MONTH0[date.month0() as usize]
    }

    /// Returns the quarter containing `month`.
    #[must_use]
    pub fn of_month(month: Month) -> Self {
        BY_MONTH0[month.number_from_month() as usize - 1]
    }

    /// Returns the quarter containing the 1-based month number, or `None`
    /// if the number is outside 1..=12.
    #[must_use]
    pub fn from_month_number(month: u32) -> Option<Self> {
        let index: usize = usize::try_from(month.checked_sub(1)?).ok()?;
        BY_MONTH0.get(index).copied()
    }

    /// The first month of the quarter.
    #[must_use]
    pub const fn first_month(self) -> Month {
        match self {
            Self::First => Month::January,
            Self::Second => Month::April,
            Self::Third => Month::July,
            Self::Fourth => Month::October,
        }
    }

    /// The last month of the quarter.
    #[must_use]
    pub const fn last_month(self) -> Month {
        match self {
            Self::First => Month::March,
            Self::Second => Month::June,
            Self::Third => Month::September,
            Self::Fourth => Month::December,
        }
    }

    /// The quarter number, 1 through 4.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
        }
    }

    /// The following quarter, wrapping from the fourth to the first.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::Third,
            Self::Third => Self::Fourth,
            Self::Fourth => Self::First,
        }
    }

    /// The preceding quarter, wrapping from the first to the fourth.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::First => Self::Fourth,
            Self::Second => Self::First,
            Self::Third => Self::Second,
            Self::Fourth => Self::Third,
        }
    }
}

impl std::fmt::Display for Quarter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Q{}", self.number())
    }
}
