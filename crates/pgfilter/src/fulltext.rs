//! Full-text match fragments.
//!
//! The SQL form of a full-text predicate is dialect-specific, so the
//! builder delegates it to a [`FullTextSyntax`] strategy. The default,
//! [`TsQuery`], emits the Postgres tsvector form.

/// Produces the SQL fragment for a full-text match over one field.
///
/// `placeholder` is the already-numbered positional placeholder (e.g.
/// `$3`) that will be bound to the caller's query text.
pub trait FullTextSyntax: Send + Sync {
    fn fragment(&self, field: &str, placeholder: &str) -> String;
}

/// Postgres `tsvector`/`tsquery` full-text form.
#[derive(Debug, Clone, Copy, Default)]
pub struct TsQuery;

impl FullTextSyntax for TsQuery {
    fn fragment(&self, field: &str, placeholder: &str) -> String {
        format!("to_tsvector({field}) @@ plainto_tsquery({placeholder})")
    }
}
