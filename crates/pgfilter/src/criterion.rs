//! Per-field criteria.

use crate::builder::FilterBuilder;
use crate::error::FilterResult;
use crate::field::{FieldName, IntoField};
use crate::op::CmpOp;
use crate::value::Value;

/// A pattern-match slot.
#[derive(Debug, Clone, PartialEq)]
struct LikeMatch {
    pattern: String,
    full_text: bool,
}

/// One field's accumulated set of independently-optional predicates.
///
/// Each setter stores into its own slot and returns the updated value, so
/// criteria chain fluently. Re-setting a slot overwrites it (last write
/// wins); slots never interact, so a single criterion may compile into
/// several conditions on the same field (e.g. `age > $1 AND age < $2`).
/// A slot holding an empty string, an empty set, or a half-set range is
/// treated as unset.
///
/// # Example
/// ```ignore
/// use pgfilter::{Criterion, FilterBuilder};
///
/// let age = Criterion::new("age")?.greater_than(18).less_than(65);
///
/// let mut filter = FilterBuilder::new();
/// filter.and_criterion(&age);
/// assert_eq!(filter.build_clause(), "age > $1 AND age < $2");
/// # Ok::<(), pgfilter::FilterError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Criterion {
    field: FieldName,
    equals: Option<Value>,
    not_equals: Option<Value>,
    greater_than: Option<Value>,
    less_than: Option<Value>,
    greater_or_equal: Option<Value>,
    less_or_equal: Option<Value>,
    like: Option<LikeMatch>,
    starts_with: Option<String>,
    ends_with: Option<String>,
    range: Option<(Value, Value)>,
    is_null: Option<bool>,
    in_set: Option<Vec<i64>>,
}

impl Criterion {
    /// Create a criterion targeting `field`.
    ///
    /// Fails with [`FilterError::InvalidField`](crate::FilterError::InvalidField)
    /// if the name is empty or malformed. The name is never checked
    /// against a schema; that remains the caller's responsibility.
    pub fn new(field: impl IntoField) -> FilterResult<Self> {
        Ok(Self {
            field: field.into_field()?,
            equals: None,
            not_equals: None,
            greater_than: None,
            less_than: None,
            greater_or_equal: None,
            less_or_equal: None,
            like: None,
            starts_with: None,
            ends_with: None,
            range: None,
            is_null: None,
            in_set: None,
        })
    }

    /// The target field.
    pub fn field(&self) -> &FieldName {
        &self.field
    }

    // ==================== Fluent setters ====================

    /// Match rows where the field equals `value`.
    #[must_use]
    pub fn equal_to(mut self, value: impl Into<Value>) -> Self {
        self.equals = Some(value.into());
        self
    }

    /// Match rows where the field differs from `value`.
    #[must_use]
    pub fn not_equal_to(mut self, value: impl Into<Value>) -> Self {
        self.not_equals = Some(value.into());
        self
    }

    /// Match rows where the field exceeds `value`.
    #[must_use]
    pub fn greater_than(mut self, value: impl Into<Value>) -> Self {
        self.greater_than = Some(value.into());
        self
    }

    /// Match rows where the field is below `value`.
    #[must_use]
    pub fn less_than(mut self, value: impl Into<Value>) -> Self {
        self.less_than = Some(value.into());
        self
    }

    /// Match rows where the field is at least `value`.
    #[must_use]
    pub fn greater_or_equal(mut self, value: impl Into<Value>) -> Self {
        self.greater_or_equal = Some(value.into());
        self
    }

    /// Match rows where the field is at most `value`.
    #[must_use]
    pub fn less_or_equal(mut self, value: impl Into<Value>) -> Self {
        self.less_or_equal = Some(value.into());
        self
    }

    /// Match rows where the field matches `pattern`.
    ///
    /// With `full_text` false this is a plain `LIKE` and the caller
    /// supplies any wildcard characters; with `full_text` true the
    /// builder's full-text syntax is used instead.
    #[must_use]
    pub fn like(mut self, pattern: impl Into<String>, full_text: bool) -> Self {
        self.like = Some(LikeMatch {
            pattern: pattern.into(),
            full_text,
        });
        self
    }

    /// Match rows where the field starts with `prefix`.
    #[must_use]
    pub fn starts_with(mut self, prefix: impl Into<String>) -> Self {
        self.starts_with = Some(prefix.into());
        self
    }

    /// Match rows where the field ends with `suffix`.
    #[must_use]
    pub fn ends_with(mut self, suffix: impl Into<String>) -> Self {
        self.ends_with = Some(suffix.into());
        self
    }

    /// Match rows where the field lies between `from` and `to` inclusive.
    ///
    /// The range takes effect only when both endpoints are supplied; a
    /// call missing either endpoint leaves the slot unset.
    #[must_use]
    pub fn in_range<T: Into<Value>>(mut self, from: Option<T>, to: Option<T>) -> Self {
        self.range = from.zip(to).map(|(f, t)| (f.into(), t.into()));
        self
    }

    /// Match rows where the field is NULL (`true`) or NOT NULL (`false`).
    #[must_use]
    pub fn is_null(mut self, null: bool) -> Self {
        self.is_null = Some(null);
        self
    }

    /// Match rows where the field is one of `values`.
    ///
    /// Values bind in the given order and pass through as-is (no dedup,
    /// no validation). An empty set leaves the slot unset.
    #[must_use]
    pub fn in_set(mut self, values: Vec<i64>) -> Self {
        self.in_set = Some(values);
        self
    }

    // ==================== Compilation ====================

    /// True when no slot holds an effective value.
    pub fn is_empty(&self) -> bool {
        !(set(&self.equals)
            || set(&self.not_equals)
            || set(&self.greater_than)
            || set(&self.less_than)
            || set(&self.greater_or_equal)
            || set(&self.less_or_equal)
            || self.like.as_ref().is_some_and(|l| !l.pattern.is_empty())
            || text_set(&self.starts_with)
            || text_set(&self.ends_with)
            || self.range.is_some()
            || self.is_null.is_some()
            || self.in_set.as_ref().is_some_and(|v| !v.is_empty()))
    }

    /// Compile the populated slots into `builder`.
    ///
    /// Emission order is fixed: equality, range, pattern match, the four
    /// ordering comparisons, null check, not-equal, set membership,
    /// starts-with, ends-with. All fragments of one criterion narrow the
    /// match together under the builder's conjunction. Unset and half-set
    /// slots contribute nothing.
    pub fn apply(&self, builder: &mut FilterBuilder) {
        if self.is_empty() {
            return;
        }

        let field = self.field.as_str();

        if let Some(value) = active(&self.equals) {
            builder.and_eq(field, value.clone());
        }
        if let Some((from, to)) = &self.range {
            builder.and_between(field, from.clone(), to.clone());
        }
        if let Some(like) = &self.like {
            if !like.pattern.is_empty() {
                builder.and_like(field, &like.pattern, like.full_text);
            }
        }
        if let Some(value) = active(&self.greater_than) {
            builder.and_cmp_op(field, CmpOp::Gt, value.clone());
        }
        if let Some(value) = active(&self.less_than) {
            builder.and_cmp_op(field, CmpOp::Lt, value.clone());
        }
        if let Some(value) = active(&self.greater_or_equal) {
            builder.and_cmp_op(field, CmpOp::Gte, value.clone());
        }
        if let Some(value) = active(&self.less_or_equal) {
            builder.and_cmp_op(field, CmpOp::Lte, value.clone());
        }
        if let Some(null) = self.is_null {
            if null {
                builder.and_is_null(field);
            } else {
                builder.and_is_not_null(field);
            }
        }
        if let Some(value) = active(&self.not_equals) {
            builder.and_cmp_op(field, CmpOp::Ne, value.clone());
        }
        if let Some(values) = &self.in_set {
            if !values.is_empty() {
                builder.and_in(field, values.clone());
            }
        }
        if let Some(prefix) = self.starts_with.as_deref().filter(|s| !s.is_empty()) {
            builder.and_starts_with(field, prefix);
        }
        if let Some(suffix) = self.ends_with.as_deref().filter(|s| !s.is_empty()) {
            builder.and_ends_with(field, suffix);
        }
    }
}

fn set(slot: &Option<Value>) -> bool {
    slot.as_ref().is_some_and(|v| !v.is_blank())
}

fn text_set(slot: &Option<String>) -> bool {
    slot.as_deref().is_some_and(|s| !s.is_empty())
}

fn active(slot: &Option<Value>) -> Option<&Value> {
    slot.as_ref().filter(|v| !v.is_blank())
}
