//! # pgfilter
//!
//! A criteria-driven, parameter-safe dynamic WHERE-clause builder for Postgres.
//!
//! ## Features
//!
//! - **Criteria-driven**: describe optional per-field predicates; only the
//!   populated ones render, so a search form with twelve optional inputs
//!   never emits `x = NULL` or empty-string conditions
//! - **Parameter-safe**: values never appear in the clause text; placeholders
//!   are managed automatically (`$1, $2, ...`) and stay aligned with the
//!   parameter list under any composition
//! - **Composable**: AND/OR conjunctions, nested groups, NOT
//! - **Exact ordering**: fragments render in insertion order, never reordered
//!
//! ## Example
//!
//! ```ignore
//! use pgfilter::{Criterion, FilterBuilder};
//!
//! let status = Criterion::new("status")?.equal_to("active");
//! let age = Criterion::new("age")?.greater_than(18).less_than(65);
//!
//! let mut filter = FilterBuilder::new();
//! filter.and_criterion(&status).and_criterion(&age);
//!
//! assert_eq!(
//!     filter.build_clause(),
//!     "status = $1 AND age > $2 AND age < $3"
//! );
//! let params = filter.params_ref(); // aligned with $1..$3, ready to bind
//! # Ok::<(), pgfilter::FilterError>(())
//! ```

pub mod builder;
pub mod criterion;
pub mod error;
pub mod field;
pub mod fulltext;
pub mod op;
pub mod prelude;
pub mod value;

pub use builder::{BuiltFilter, Conjunction, FilterBuilder};
pub use criterion::Criterion;
pub use error::{FilterError, FilterResult};
pub use field::{FieldName, IntoField};
pub use fulltext::{FullTextSyntax, TsQuery};
pub use op::CmpOp;
pub use value::Value;
