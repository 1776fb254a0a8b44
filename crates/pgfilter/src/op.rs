//! The closed comparison-operator vocabulary.

use crate::error::{FilterError, FilterResult};

/// A comparison operator usable with
/// [`FilterBuilder::and_cmp`](crate::FilterBuilder::and_cmp).
///
/// The set is closed: operator symbols are parsed into this enum and the
/// enum supplies the SQL token, so a caller-supplied string is never
/// interpolated into the clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    Gte,
    /// `<=`
    Lte,
}

impl CmpOp {
    /// The SQL token for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Gte => ">=",
            Self::Lte => "<=",
        }
    }

    /// Parse an operator symbol.
    ///
    /// Fails with [`FilterError::InvalidOperator`] for anything outside
    /// the vocabulary.
    pub fn parse(symbol: &str) -> FilterResult<Self> {
        match symbol {
            "=" => Ok(Self::Eq),
            "!=" => Ok(Self::Ne),
            ">" => Ok(Self::Gt),
            "<" => Ok(Self::Lt),
            ">=" => Ok(Self::Gte),
            "<=" => Ok(Self::Lte),
            other => Err(FilterError::invalid_operator(other)),
        }
    }
}

impl std::str::FromStr for CmpOp {
    type Err = FilterError;

    fn from_str(s: &str) -> FilterResult<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrips_symbols() {
        for symbol in ["=", "!=", ">", "<", ">=", "<="] {
            assert_eq!(CmpOp::parse(symbol).unwrap().symbol(), symbol);
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!(CmpOp::parse("<>=").unwrap_err().is_invalid_operator());
        assert!(CmpOp::parse("LIKE").is_err());
        assert!(CmpOp::parse("").is_err());
    }

    #[test]
    fn from_str_works() {
        assert_eq!(">=".parse::<CmpOp>().unwrap(), CmpOp::Gte);
    }
}
