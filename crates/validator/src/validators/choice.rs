//! Enum and multi-select rules.

use std::collections::HashMap;
use std::fmt::Write as _;

use crate::foundation::{
    IssueCode, PathSegment, Validate, ValidationContext, ValidationResult, Value, error, fail,
    number_value, ok, type_mismatch,
};

/// Structural equality where numbers compare by value, so `1` equals `1.0`.
fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| same_value(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| same_value(x, y)))
        }
        _ => a == b,
    }
}

fn contains_value(choices: &[Value], item: &Value) -> bool {
    choices.iter().any(|choice| same_value(choice, item))
}

/// Renders `value` so that values equal under [`same_value`] render the same:
/// numbers go through [`number_value`] and object keys are sorted.
fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Number(n) => {
            let rendered = n.as_f64().map_or_else(|| value.clone(), number_value);
            let _ = write!(out, "{rendered}");
        }
        Value::Array(items) => {
            out.push('[');
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
            out.push('{');
            for (index, (key, item)) in entries.into_iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                let _ = write!(out, "{}:", Value::from(key.as_str()));
                write_canonical(item, out);
            }
            out.push('}');
        }
        other => {
            let _ = write!(out, "{other}");
        }
    }
}

fn canonical_key(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

crate::rule! {
    /// One of a fixed set of choices. Numbers compare by value.
    pub OneOf { choices: Vec<Value> } for Value;
    rule(self, input) { contains_value(&self.choices, input) }
    issue(self, input, ctx) {
        error(
            IssueCode::EnumInvalidChoice,
            ctx,
            [("choices", Value::from(self.choices.clone())), ("actual", input.clone())],
        )
    }
    fn one_of(choices: Vec<Value>);
}

crate::rule! {
    /// An array with at most `max` entries.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxSelections { max: usize } for [Value];
    rule(self, input) { input.len() <= self.max }
    issue(self, input, ctx) {
        error(
            IssueCode::EnumTooManySelections,
            ctx,
            [("max", Value::from(self.max)), ("actual", Value::from(input.len()))],
        )
    }
    fn max_selections(max: usize);
}

crate::rule! {
    /// An array with at least `min` entries.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinSelections { min: usize } for [Value];
    rule(self, input) { input.len() >= self.min }
    issue(self, input, ctx) {
        error(
            IssueCode::EnumTooFewSelections,
            ctx,
            [("min", Value::from(self.min)), ("actual", Value::from(input.len()))],
        )
    }
    fn min_selections(min: usize);
}

/// An array whose every entry is one of the choices. Each offending entry
/// gets its own `enum_invalid_choice` issue at its index.
#[derive(Debug, Clone, PartialEq)]
pub struct AllIn {
    /// Allowed entries.
    pub choices: Vec<Value>,
}

impl Validate for AllIn {
    type Output = Value;

    fn validate(&self, value: &Value, ctx: &ValidationContext) -> ValidationResult<Value> {
        let Some(items) = value.as_array() else {
            return type_mismatch("array", value, ctx);
        };

        let issues: Vec<_> = items
            .iter()
            .enumerate()
            .filter(|(_, item)| !contains_value(&self.choices, item))
            .map(|(index, item)| {
                error(
                    IssueCode::EnumInvalidChoice,
                    &ctx.child(&[PathSegment::Index(index)]),
                    [
                        ("choices", Value::from(self.choices.clone())),
                        ("actual", item.clone()),
                    ],
                )
            })
            .collect();

        if issues.is_empty() {
            ok(value.clone())
        } else {
            fail(issues)
        }
    }
}

/// Creates an [`AllIn`] rule.
#[must_use]
pub fn all_in(choices: Vec<Value>) -> AllIn {
    AllIn { choices }
}

/// An array without repeated entries.
///
/// Entries are compared structurally: objects with the same keys and values
/// are duplicates regardless of key order, and `1` repeats `1.0`. Every repeat after the first
/// occurrence is reported at its own index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UniqueItems;

impl Validate for UniqueItems {
    type Output = Value;

    fn validate(&self, value: &Value, ctx: &ValidationContext) -> ValidationResult<Value> {
        let Some(items) = value.as_array() else {
            return type_mismatch("array", value, ctx);
        };

        let mut first_seen: HashMap<String, usize> = HashMap::with_capacity(items.len());
        let mut issues = Vec::new();
        for (index, item) in items.iter().enumerate() {
            let key = canonical_key(item);
            if let Some(&first) = first_seen.get(&key) {
                issues.push(error(
                    IssueCode::EnumDuplicateSelection,
                    &ctx.child(&[PathSegment::Index(index)]),
                    [("duplicate", item.clone()), ("firstIndex", Value::from(first))],
                ));
            } else {
                first_seen.insert(key, index);
            }
        }

        if issues.is_empty() {
            ok(value.clone())
        } else {
            fail(issues)
        }
    }
}

/// Creates a [`UniqueItems`] rule.
#[must_use]
pub const fn unique_items() -> UniqueItems {
    UniqueItems
}
