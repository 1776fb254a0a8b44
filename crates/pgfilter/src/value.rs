//! Predicate parameter values.
//!
//! [`Value`] is a closed set over the value domains the builder binds:
//! integers, decimals, dates, instants, and text. Keeping the set closed
//! lets compilation match exhaustively instead of inspecting types at
//! runtime, and the [`ToSql`] impl delegates per variant so a rendered
//! clause and its parameter list bind directly into a prepared statement.

use bytes::BytesMut;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use tokio_postgres::types::{IsNull, ToSql, Type, to_sql_checked};

/// A predicate parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 64-bit integer
    Int(i64),
    /// Fixed-precision decimal
    Decimal(Decimal),
    /// Calendar date
    Date(NaiveDate),
    /// UTC instant
    Timestamp(DateTime<Utc>),
    /// Text
    Text(String),
}

impl Value {
    /// A blank value never activates the predicate slot holding it.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Self::Decimal(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Self::Date(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Timestamp(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl ToSql for Value {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn std::error::Error + Sync + Send>> {
        match self {
            Self::Int(v) => v.to_sql(ty, out),
            Self::Decimal(v) => v.to_sql(ty, out),
            Self::Date(v) => v.to_sql(ty, out),
            Self::Timestamp(v) => v.to_sql(ty, out),
            Self::Text(v) => v.to_sql(ty, out),
        }
    }

    fn accepts(ty: &Type) -> bool {
        // Union of the variant types; the actual variant is checked at bind time.
        <i64 as ToSql>::accepts(ty)
            || <Decimal as ToSql>::accepts(ty)
            || <NaiveDate as ToSql>::accepts(ty)
            || <DateTime<Utc> as ToSql>::accepts(ty)
            || <String as ToSql>::accepts(ty)
    }

    to_sql_checked!();
}
