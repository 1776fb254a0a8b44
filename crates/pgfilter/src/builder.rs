//! The filter clause builder.

use std::sync::Arc;

use tokio_postgres::types::ToSql;

use crate::criterion::Criterion;
use crate::error::FilterResult;
use crate::fulltext::{FullTextSyntax, TsQuery};
use crate::op::CmpOp;
use crate::value::Value;

/// The keyword joining accumulated fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Conjunction {
    /// Join fragments with `AND` (the default).
    #[default]
    And,
    /// Join fragments with `OR`.
    Or,
}

impl Conjunction {
    fn keyword(self) -> &'static str {
        match self {
            Self::And => " AND ",
            Self::Or => " OR ",
        }
    }
}

/// Parameter-safe accumulator for WHERE-clause fragments.
///
/// Fragments render in insertion order, joined by the configured
/// conjunction, and every placeholder has a matching entry, in the same
/// left-to-right order, in [`params`](Self::params). Values never appear
/// in the clause text. Rendering does not mutate accumulated state, so a
/// builder can keep accumulating and render again.
pub struct FilterBuilder {
    /// Conditions (without leading AND/OR)
    conditions: Vec<String>,
    /// Parameter values, in placeholder order
    params: Vec<Value>,
    /// Current parameter counter (starts from offset)
    param_count: usize,
    /// Join keyword between conditions
    conjunction: Conjunction,
    /// Full-text fragment strategy
    full_text: Arc<dyn FullTextSyntax>,
}

impl FilterBuilder {
    /// Create a new builder with param numbering starting at 1.
    pub fn new() -> Self {
        Self::with_offset(0)
    }

    /// Create a new builder with param numbering starting after `offset`.
    ///
    /// For example, `with_offset(2)` means the first param will be `$3`.
    /// Useful when the clause is embedded after parameters bound elsewhere,
    /// such as an UPDATE SET list.
    pub fn with_offset(offset: usize) -> Self {
        Self {
            conditions: Vec::new(),
            params: Vec::new(),
            param_count: offset,
            conjunction: Conjunction::And,
            full_text: Arc::new(TsQuery),
        }
    }

    /// Set the join keyword used when rendering.
    pub fn conjunction(&mut self, conjunction: Conjunction) -> &mut Self {
        self.conjunction = conjunction;
        self
    }

    /// Install the strategy producing full-text match fragments.
    pub fn full_text_syntax(&mut self, syntax: impl FullTextSyntax + 'static) -> &mut Self {
        self.full_text = Arc::new(syntax);
        self
    }

    /// Check if any conditions have been added.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Number of accumulated conditions.
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Get current parameter count (includes any offset).
    pub fn param_count(&self) -> usize {
        self.param_count
    }

    fn next_placeholder(&mut self) -> String {
        self.param_count += 1;
        format!("${}", self.param_count)
    }

    // ==================== Conditions ====================

    /// Add an equality condition.
    pub fn and_eq(&mut self, field: &str, value: impl Into<Value>) -> &mut Self {
        let placeholder = self.next_placeholder();
        self.conditions.push(format!("{field} = {placeholder}"));
        self.params.push(value.into());
        self
    }

    /// Add a comparison with an explicit operator symbol.
    ///
    /// The symbol must belong to the closed vocabulary `=`, `!=`, `>`,
    /// `<`, `>=`, `<=`; anything else fails with
    /// [`FilterError::InvalidOperator`](crate::FilterError::InvalidOperator)
    /// and leaves accumulated state untouched.
    pub fn and_cmp(
        &mut self,
        field: &str,
        operator: &str,
        value: impl Into<Value>,
    ) -> FilterResult<&mut Self> {
        let op = CmpOp::parse(operator)?;
        Ok(self.and_cmp_op(field, op, value))
    }

    /// Add a comparison with an already-typed operator.
    pub fn and_cmp_op(&mut self, field: &str, op: CmpOp, value: impl Into<Value>) -> &mut Self {
        let placeholder = self.next_placeholder();
        self.conditions
            .push(format!("{field} {} {placeholder}", op.symbol()));
        self.params.push(value.into());
        self
    }

    /// Add a pre-formed boolean condition without params.
    ///
    /// # Safety
    ///
    /// This directly concatenates SQL. The caller must ensure safety.
    pub fn and_raw(&mut self, sql: &str) -> &mut Self {
        self.conditions.push(sql.to_string());
        self
    }

    /// Add a BETWEEN condition; `from` binds before `to`.
    pub fn and_between(
        &mut self,
        field: &str,
        from: impl Into<Value>,
        to: impl Into<Value>,
    ) -> &mut Self {
        let p1 = self.next_placeholder();
        self.params.push(from.into());

        let p2 = self.next_placeholder();
        self.params.push(to.into());

        self.conditions
            .push(format!("{field} BETWEEN {p1} AND {p2}"));
        self
    }

    /// Add a pattern-match condition.
    ///
    /// With `full_text` false this is a plain `LIKE` and the caller
    /// supplies any wildcard characters; with `full_text` true the
    /// installed [`FullTextSyntax`] produces the fragment instead.
    pub fn and_like(&mut self, field: &str, pattern: &str, full_text: bool) -> &mut Self {
        let placeholder = self.next_placeholder();
        let condition = if full_text {
            self.full_text.fragment(field, &placeholder)
        } else {
            format!("{field} LIKE {placeholder}")
        };
        self.conditions.push(condition);
        self.params.push(Value::Text(pattern.to_string()));
        self
    }

    /// Add a prefix-match condition (`LIKE 'prefix%'`).
    pub fn and_starts_with(&mut self, field: &str, prefix: &str) -> &mut Self {
        let placeholder = self.next_placeholder();
        self.conditions.push(format!("{field} LIKE {placeholder}"));
        self.params.push(Value::Text(format!("{prefix}%")));
        self
    }

    /// Add a suffix-match condition (`LIKE '%suffix'`).
    pub fn and_ends_with(&mut self, field: &str, suffix: &str) -> &mut Self {
        let placeholder = self.next_placeholder();
        self.conditions.push(format!("{field} LIKE {placeholder}"));
        self.params.push(Value::Text(format!("%{suffix}")));
        self
    }

    /// Add an IN (...) condition, one placeholder per value in order.
    ///
    /// An empty list adds nothing: `IN ()` is vacuously false and almost
    /// never what the caller meant.
    pub fn and_in(&mut self, field: &str, values: Vec<i64>) -> &mut Self {
        if values.is_empty() {
            return self;
        }

        let mut placeholders = Vec::with_capacity(values.len());
        for value in values {
            placeholders.push(self.next_placeholder());
            self.params.push(Value::Int(value));
        }

        self.conditions
            .push(format!("{field} IN ({})", placeholders.join(", ")));
        self
    }

    /// Add an IS NULL condition.
    pub fn and_is_null(&mut self, field: &str) -> &mut Self {
        self.conditions.push(format!("{field} IS NULL"));
        self
    }

    /// Add an IS NOT NULL condition.
    pub fn and_is_not_null(&mut self, field: &str) -> &mut Self {
        self.conditions.push(format!("{field} IS NOT NULL"));
        self
    }

    /// Append a compiled [`Criterion`].
    ///
    /// Empty criteria contribute nothing.
    pub fn and_criterion(&mut self, criterion: &Criterion) -> &mut Self {
        criterion.apply(self);
        self
    }

    // ==================== Grouping ====================

    fn nested(&self, conjunction: Conjunction) -> Self {
        let mut inner = Self::with_offset(self.param_count);
        inner.conjunction = conjunction;
        inner.full_text = Arc::clone(&self.full_text);
        inner
    }

    fn push_nested(&mut self, inner: Self, wrap: impl FnOnce(String) -> String) -> &mut Self {
        if inner.conditions.is_empty() {
            return self;
        }
        self.conditions.push(wrap(inner.join_conditions()));
        self.params.extend(inner.params);
        self.param_count = inner.param_count;
        self
    }

    /// Add a parenthesized sub-clause joined internally by `conjunction`.
    ///
    /// Placeholder numbering continues through the group; an empty group
    /// contributes nothing.
    pub fn and_group(
        &mut self,
        conjunction: Conjunction,
        build: impl FnOnce(&mut FilterBuilder),
    ) -> &mut Self {
        let mut inner = self.nested(conjunction);
        build(&mut inner);
        self.push_nested(inner, |clause| format!("({clause})"))
    }

    /// Add a negated sub-clause: `NOT ( ... )`.
    pub fn and_not(&mut self, build: impl FnOnce(&mut FilterBuilder)) -> &mut Self {
        let mut inner = self.nested(Conjunction::And);
        build(&mut inner);
        self.push_nested(inner, |clause| format!("NOT ({clause})"))
    }

    // ==================== Rendering ====================

    fn join_conditions(&self) -> String {
        self.conditions.join(self.conjunction.keyword())
    }

    /// Render the accumulated fragments into one boolean expression.
    ///
    /// Returns the empty string when nothing was added.
    pub fn build_clause(&self) -> String {
        let clause = self.join_conditions();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            clause = %clause,
            params = self.params.len(),
            "rendered filter clause"
        );

        clause
    }

    /// The bound parameter values, in placeholder order.
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// Get parameter references for tokio-postgres.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params
            .iter()
            .map(|v| v as &(dyn ToSql + Sync))
            .collect()
    }

    /// Render into a [`BuiltFilter`] for handoff to an execution layer.
    pub fn build(&self) -> BuiltFilter<'_> {
        BuiltFilter {
            clause: self.build_clause(),
            params: &self.params,
        }
    }
}

impl Default for FilterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FilterBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterBuilder")
            .field("conditions", &self.conditions)
            .field("params", &self.params)
            .field("param_count", &self.param_count)
            .field("conjunction", &self.conjunction)
            .finish_non_exhaustive()
    }
}

/// Built clause holding SQL text and param references.
pub struct BuiltFilter<'a> {
    clause: String,
    params: &'a [Value],
}

impl BuiltFilter<'_> {
    pub fn clause(&self) -> &str {
        &self.clause
    }

    pub fn params(&self) -> &[Value] {
        self.params
    }

    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params
            .iter()
            .map(|v| v as &(dyn ToSql + Sync))
            .collect()
    }
}
