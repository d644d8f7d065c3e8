// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversion between rule types and their persisted key/value records.

use crate::error::CalendarError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub(crate) fn to_record<T: Serialize>(value: &T, kind: &str) -> Result<Value, CalendarError> {
    serde_json::to_value(value)
        .map_err(|err| CalendarError::InvalidContent(format!("cannot encode {kind}: {err}")))
}

pub(crate) fn from_record<T: DeserializeOwned>(
    record: &Value,
    kind: &str,
) -> Result<T, CalendarError> {
    T::deserialize(record).map_err(|err| {
        tracing::debug!(%record, kind, error = %err, "Rejected persisted record");
        CalendarError::InvalidContent(format!("cannot decode {kind}: {err}"))
    })
}
