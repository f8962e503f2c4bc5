/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Parsing helpers for the intranet date formats.
//!
//! The intranet sends timestamps as `%Y-%m-%d %H:%M:%S` and calendar dates as
//! `%Y-%m-%d`, without time zone. Values that do not match are reported as
//! [`AppError::MalformedPayload`] instead of being guessed.

use crate::constants::{DATE_FORMAT, DATETIME_FORMAT};
use crate::error::AppError;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer};

/// Parses an intranet timestamp (`2019-03-04 10:22:51`)
pub fn parse_datetime(field: &str, value: &str) -> Result<NaiveDateTime, AppError> {
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT).map_err(|e| {
        AppError::MalformedPayload(format!("{field}: invalid timestamp {value:?} ({e})"))
    })
}

/// Parses an intranet calendar date (`2019-03-04`)
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| AppError::MalformedPayload(format!("{field}: invalid date {value:?} ({e})")))
}

/// Parses an optional timestamp, `None` staying `None`
pub fn parse_optional_datetime(
    field: &str,
    value: Option<&str>,
) -> Result<Option<NaiveDateTime>, AppError> {
    value.map(|v| parse_datetime(field, v)).transpose()
}

/// Serde adapter writing [`NaiveDateTime`] in the intranet format
pub mod datetime_format {
    use super::*;

    /// Serializes as `%Y-%m-%d %H:%M:%S`
    pub fn serialize<S: Serializer>(value: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&value.format(DATETIME_FORMAT).to_string())
    }

    /// Deserializes from `%Y-%m-%d %H:%M:%S`
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        parse_datetime("timestamp", &raw).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for optional intranet timestamps
pub mod option_datetime_format {
    use super::*;

    /// Serializes `Some` as `%Y-%m-%d %H:%M:%S`, `None` as `null`
    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        s: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => s.serialize_str(&v.format(DATETIME_FORMAT).to_string()),
            None => s.serialize_none(),
        }
    }

    /// Deserializes `null` as `None`, a string as a timestamp
    pub fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        parse_optional_datetime("timestamp", raw.as_deref()).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for intranet calendar dates
pub mod date_format {
    use super::*;

    /// Serializes as `%Y-%m-%d`
    pub fn serialize<S: Serializer>(value: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&value.format(DATE_FORMAT).to_string())
    }

    /// Deserializes from `%Y-%m-%d`
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        parse_date("date", &raw).map_err(serde::de::Error::custom)
    }
}

/// Accepts either a JSON string or a JSON number and keeps it as a string.
///
/// The cohort year of a promotion shows up as both depending on the endpoint version.
pub fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or a number, got {other}"
        ))),
    }
}

/// Deserializes `null` as an empty vector
pub fn deserialize_null_as_empty_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}
