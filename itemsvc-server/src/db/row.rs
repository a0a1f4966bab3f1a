//! Generic row decoding
//!
//! `SELECT *` rows are returned as JSON objects keyed by column name, with
//! each value decoded according to the column's PostgreSQL type.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::{Map, Number, Value};
use sqlx::postgres::{PgColumn, PgRow};
use sqlx::{Column, Row, TypeInfo, ValueRef};
use uuid::Uuid;

use super::DbError;

/// Decode every column of `row`, in column order.
pub fn row_to_json(row: &PgRow) -> Result<Map<String, Value>, DbError> {
    let mut object = Map::with_capacity(row.len());
    for column in row.columns() {
        object.insert(column.name().to_owned(), column_value(row, column)?);
    }
    Ok(object)
}

fn column_value(row: &PgRow, column: &PgColumn) -> Result<Value, DbError> {
    let i = column.ordinal();
    if row.try_get_raw(i)?.is_null() {
        return Ok(Value::Null);
    }

    let value = match column.type_info().name() {
        "BOOL" => Value::Bool(row.try_get(i)?),
        "INT2" => Value::from(row.try_get::<i16, _>(i)?),
        "INT4" => Value::from(row.try_get::<i32, _>(i)?),
        "INT8" => Value::from(row.try_get::<i64, _>(i)?),
        "FLOAT4" => float(f64::from(row.try_get::<f32, _>(i)?)),
        "FLOAT8" => float(row.try_get::<f64, _>(i)?),
        "NUMERIC" => decimal(row.try_get::<Decimal, _>(i)?),
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => Value::String(row.try_get(i)?),
        "UUID" => Value::String(row.try_get::<Uuid, _>(i)?.to_string()),
        "JSON" | "JSONB" => row.try_get::<Value, _>(i)?,
        "TIMESTAMPTZ" => Value::String(row.try_get::<DateTime<Utc>, _>(i)?.to_rfc3339()),
        "TIMESTAMP" => Value::String(
            row.try_get::<NaiveDateTime, _>(i)?
                .format("%Y-%m-%dT%H:%M:%S%.f")
                .to_string(),
        ),
        "DATE" => Value::String(row.try_get::<NaiveDate, _>(i)?.to_string()),
        "TIME" => Value::String(row.try_get::<NaiveTime, _>(i)?.to_string()),
        other => {
            return Err(DbError::UnsupportedColumn {
                column: column.name().to_owned(),
                type_name: other.to_owned(),
            })
        }
    };

    Ok(value)
}

/// Non-finite floats have no JSON form and become `null`.
fn float(v: f64) -> Value {
    Number::from_f64(v).map(Value::Number).unwrap_or(Value::Null)
}

/// NUMERIC becomes a JSON number; values outside f64 keep their exact text.
fn decimal(d: Decimal) -> Value {
    match d.to_f64() {
        Some(v) if v.is_finite() => float(v),
        _ => Value::String(d.to_string()),
    }
}
