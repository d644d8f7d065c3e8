// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors raised while configuring or resolving calendar rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// A count that must be strictly positive was zero or negative.
    #[error("{name} must be greater than 0, got {value}")]
    NonPositiveCount {
        /// The name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// A count that must not be negative was negative.
    #[error("{name} must not be negative, got {value}")]
    NegativeCount {
        /// The name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// A periodic generator was given both a period count and an end date offset.
    #[error(
        "Period count must be 0 when an end date offset is supplied, got {period_count}"
    )]
    ConflictingTermination {
        /// The non-zero period count.
        period_count: i32,
    },

    /// Persisted content could not be interpreted.
    #[error("Invalid content: {0}")]
    InvalidContent(String),

    /// Date arithmetic left the representable calendar range.
    #[error("Date arithmetic overflow while {operation}")]
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },

    /// A time zone identifier could not be parsed.
    #[error("Invalid time zone: {0}")]
    InvalidTimezone(String),
}

impl CalendarError {
    pub(crate) fn overflow(operation: impl Into<String>) -> Self {
        Self::DateArithmeticOverflow {
            operation: operation.into(),
        }
    }
}

/// Fails with [`CalendarError::NonPositiveCount`] unless `value` is at least 1.
///
/// # Errors
///
/// Returns an error if `value <= 0`.
pub fn require_positive(name: &'static str, value: i32) -> Result<i32, CalendarError> {
    if value <= 0 {
        return Err(CalendarError::NonPositiveCount {
            name,
            value: i64::from(value),
        });
    }
    Ok(value)
}
