//! Safe field-name handling.
//!
//! This module provides [`FieldName`], the column/field identifier a
//! criterion targets, supporting dotted notation (e.g. `u.created_at`).
//!
//! - Each dot-separated segment is validated against `[A-Za-z_][A-Za-z0-9_$]*`
//! - Validation is purely syntactic; names are never checked against a schema
//!
//! # Example
//! ```ignore
//! use pgfilter::FieldName;
//!
//! let f = FieldName::parse("users.status")?;
//! # Ok::<(), pgfilter::FilterError>(())
//! ```

use crate::error::{FilterError, FilterResult};

/// A validated field identifier (column, optionally qualified).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldName(String);

impl FieldName {
    /// Parse a field name, supporting dotted notation (`alias.column`).
    pub fn parse(s: &str) -> FilterResult<Self> {
        if s.is_empty() {
            return Err(FilterError::invalid_field("field name cannot be empty"));
        }

        for segment in s.split('.') {
            let mut chars = segment.chars();
            match chars.next() {
                Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
                Some(c) => {
                    return Err(FilterError::invalid_field(format!(
                        "invalid start character '{c}' in field '{s}'"
                    )));
                }
                None => {
                    return Err(FilterError::invalid_field(format!(
                        "empty segment in field '{s}'"
                    )));
                }
            }
            for c in chars {
                if c != '_' && c != '$' && !c.is_ascii_alphanumeric() {
                    return Err(FilterError::invalid_field(format!(
                        "invalid character '{c}' in field '{s}'"
                    )));
                }
            }
        }

        Ok(Self(s.to_string()))
    }

    /// The identifier as it appears in SQL.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Convert an input into a [`FieldName`].
///
/// This is mainly for ergonomics in builder APIs.
pub trait IntoField {
    fn into_field(self) -> FilterResult<FieldName>;
}

impl IntoField for FieldName {
    fn into_field(self) -> FilterResult<FieldName> {
        Ok(self)
    }
}

impl IntoField for &FieldName {
    fn into_field(self) -> FilterResult<FieldName> {
        Ok(self.clone())
    }
}

impl IntoField for &str {
    fn into_field(self) -> FilterResult<FieldName> {
        FieldName::parse(self)
    }
}

impl IntoField for String {
    fn into_field(self) -> FilterResult<FieldName> {
        FieldName::parse(&self)
    }
}
