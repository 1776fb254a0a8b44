//! Convenient imports for typical `pgfilter` usage.
//!
//! This module is intentionally small and focused on the most common APIs so
//! call sites can start with:
//!
//! ```ignore
//! use pgfilter::prelude::*;
//! ```

pub use crate::{
    Conjunction, Criterion, FieldName, FilterBuilder, FilterError, FilterResult, IntoField, Value,
};

pub use crate::{CmpOp, FullTextSyntax, TsQuery};
