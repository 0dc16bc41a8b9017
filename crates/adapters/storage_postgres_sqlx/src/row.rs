//! Conversion of arbitrary result rows into [`OccupancyRow`]s.
//!
//! The gateway does not know the view's columns, so each value is decoded by
//! the `PostgreSQL` type reported for its column. Rows come from the simple
//! query protocol, so every value arrives in text format: known scalar and
//! array types are parsed into JSON, everything else is passed through as the
//! server's own text.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use serde_json::{Number, Value};
use sqlx::postgres::PgRow;
use sqlx::{Column, Row, TypeInfo, ValueRef};

use rfid_gateway_domain::occupancy::OccupancyRow;

use crate::error::StorageError;

/// How a column's values are turned into JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ColumnKind {
    Bool,
    Int2,
    Int4,
    Int8,
    Float4,
    Float8,
    Json,
    TimestampTz,
    Timestamp,
    Date,
    Time,
    BoolArray,
    TextArray,
    Int2Array,
    Int4Array,
    Int8Array,
    FloatArray,
    /// `NUMERIC`, `UUID`, text types, enums, domains, extension types and
    /// anything not listed above: the value's text, untouched.
    Text,
}

impl ColumnKind {
    /// sqlx reports `bpchar` as `CHAR`; the single-byte `"char"` type keeps
    /// its quotes and falls through to [`ColumnKind::Text`] anyway.
    pub(crate) fn from_type_name(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "BOOL" => Self::Bool,
            "INT2" => Self::Int2,
            "INT4" => Self::Int4,
            "INT8" => Self::Int8,
            "FLOAT4" => Self::Float4,
            "FLOAT8" => Self::Float8,
            "JSON" | "JSONB" => Self::Json,
            "TIMESTAMPTZ" => Self::TimestampTz,
            "TIMESTAMP" => Self::Timestamp,
            "DATE" => Self::Date,
            "TIME" => Self::Time,
            "BOOL[]" => Self::BoolArray,
            "TEXT[]" | "VARCHAR[]" | "CHAR[]" | "NAME[]" => Self::TextArray,
            "INT2[]" => Self::Int2Array,
            "INT4[]" => Self::Int4Array,
            "INT8[]" => Self::Int8Array,
            "FLOAT4[]" | "FLOAT8[]" => Self::FloatArray,
            _ => Self::Text,
        }
    }
}

/// Decode every column of `row`, preserving column order.
pub(crate) fn decode_row(row: &PgRow) -> Result<OccupancyRow, StorageError> {
    let mut out = OccupancyRow::new();
    for column in row.columns() {
        let type_name = column.type_info().name();
        let kind = ColumnKind::from_type_name(type_name);
        let value =
            decode_column(row, column.ordinal(), kind).map_err(|source| StorageError::Decode {
                column: column.name().to_string(),
                type_name: type_name.to_string(),
                source,
            })?;
        out.insert(column.name(), value);
    }
    Ok(out)
}

// Type checks are skipped: text-format values decode by parsing the text, and
// the column kind already pins the Rust type.
fn decode_column(row: &PgRow, index: usize, kind: ColumnKind) -> Result<Value, sqlx::Error> {
    if row.try_get_raw(index)?.is_null() {
        return Ok(Value::Null);
    }

    let value = match kind {
        ColumnKind::Bool => Value::Bool(row.try_get_unchecked(index)?),
        ColumnKind::Int2 => Value::from(row.try_get_unchecked::<i16, _>(index)?),
        ColumnKind::Int4 => Value::from(row.try_get_unchecked::<i32, _>(index)?),
        ColumnKind::Int8 => Value::from(row.try_get_unchecked::<i64, _>(index)?),
        ColumnKind::Float4 => float(f64::from(row.try_get_unchecked::<f32, _>(index)?)),
        ColumnKind::Float8 => float(row.try_get_unchecked::<f64, _>(index)?),
        ColumnKind::Json => row.try_get_unchecked::<Value, _>(index)?,
        ColumnKind::TimestampTz => Value::String(
            row.try_get_unchecked::<DateTime<Utc>, _>(index)?
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        ),
        ColumnKind::Timestamp => Value::String(
            row.try_get_unchecked::<NaiveDateTime, _>(index)?
                .format("%Y-%m-%dT%H:%M:%S%.3f")
                .to_string(),
        ),
        ColumnKind::Date => Value::String(
            row.try_get_unchecked::<NaiveDate, _>(index)?
                .format("%Y-%m-%d")
                .to_string(),
        ),
        ColumnKind::Time => Value::String(
            row.try_get_unchecked::<NaiveTime, _>(index)?
                .format("%H:%M:%S%.f")
                .to_string(),
        ),
        ColumnKind::BoolArray => array(row.try_get_unchecked::<Vec<Option<bool>>, _>(index)?),
        ColumnKind::TextArray => array(row.try_get_unchecked::<Vec<Option<String>>, _>(index)?),
        ColumnKind::Int2Array => array(row.try_get_unchecked::<Vec<Option<i16>>, _>(index)?),
        ColumnKind::Int4Array => array(row.try_get_unchecked::<Vec<Option<i32>>, _>(index)?),
        ColumnKind::Int8Array => array(row.try_get_unchecked::<Vec<Option<i64>>, _>(index)?),
        ColumnKind::FloatArray => Value::Array(
            row.try_get_unchecked::<Vec<Option<f64>>, _>(index)?
                .into_iter()
                .map(|item| item.map_or(Value::Null, float))
                .collect(),
        ),
        ColumnKind::Text => Value::String(row.try_get_unchecked::<String, _>(index)?),
    };
    Ok(value)
}

// JSON has no NaN or infinity.
fn float(value: f64) -> Value {
    Number::from_f64(value).map_or(Value::Null, Value::Number)
}

fn array<T: Into<Value>>(items: Vec<Option<T>>) -> Value {
    Value::Array(
        items
            .into_iter()
            .map(|item| item.map_or(Value::Null, Into::into))
            .collect(),
    )
}
