//! The recursive walker: shape dispatch, per-field classification, masking.
//!
//! Traversal is total. There is no input that makes it fail: classified
//! fields holding non-string values pass through unchanged, and subtrees
//! deeper than the policy's depth bound are returned unmasked rather than
//! recursed into. The output tree always has the same shape as the input.

use super::policy::{MaskPolicy, SensitivityLevel};
use crate::value::{Scalar, Value};

/// A non-fatal diagnostic produced during traversal.
///
/// Notes never abort a mask call; they exist so callers can surface policy
/// misconfiguration (a `password` field holding a number, say) without the
/// engine deciding how loud to be about it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MaskNote {
    /// A field was classified as sensitive, but its value was not a string
    /// scalar. The value was passed through unchanged.
    TypeMismatch {
        /// Dotted path to the field, e.g. `user.password`.
        path: String,
        /// The tier the field name matched.
        level: SensitivityLevel,
    },
    /// Traversal reached the policy's depth bound; the subtree at `path`
    /// was returned unmasked.
    DepthLimit {
        /// Dotted path to the subtree.
        path: String,
    },
}

/// Masks `value` under `policy`, discarding diagnostics.
#[must_use]
pub fn mask(policy: &MaskPolicy, value: Value) -> Value {
    let mut walker = Walker::new(policy);
    walker.walk(value, 0)
}

/// Masks `value` under `policy` and reports any [`MaskNote`]s encountered.
#[must_use]
pub fn mask_with_report(policy: &MaskPolicy, value: Value) -> (Value, Vec<MaskNote>) {
    let mut walker = Walker::new(policy);
    let masked = walker.walk(value, 0);
    (masked, walker.notes)
}

impl MaskPolicy {
    /// Masks `value` under this policy. See [`mask`].
    #[must_use]
    pub fn mask(&self, value: Value) -> Value {
        mask(self, value)
    }

    /// Masks `value` and collects diagnostics. See [`mask_with_report`].
    #[must_use]
    pub fn mask_with_report(&self, value: Value) -> (Value, Vec<MaskNote>) {
        mask_with_report(self, value)
    }
}

struct Walker<'a> {
    policy: &'a MaskPolicy,
    path: Vec<String>,
    notes: Vec<MaskNote>,
}

impl<'a> Walker<'a> {
    fn new(policy: &'a MaskPolicy) -> Self {
        Self {
            policy,
            path: Vec::new(),
            notes: Vec::new(),
        }
    }

    fn walk(&mut self, value: Value, depth: usize) -> Value {
        if depth >= self.policy.max_depth() {
            self.notes.push(MaskNote::DepthLimit {
                path: self.path.join("."),
            });
            return value;
        }

        match value {
            Value::Record(fields) => Value::Record(
                fields
                    .into_iter()
                    .map(|(name, field_value)| {
                        let masked = self.walk_field(&name, field_value, depth);
                        (name, masked)
                    })
                    .collect(),
            ),
            Value::Map(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(key, entry_value)| {
                        let masked = self.walk_field(&key, entry_value, depth);
                        (key, masked)
                    })
                    .collect(),
            ),
            Value::Seq(elements) => Value::Seq(
                elements
                    .into_iter()
                    .enumerate()
                    .map(|(index, element)| {
                        self.path.push(index.to_string());
                        let masked = self.walk(element, depth + 1);
                        self.path.pop();
                        masked
                    })
                    .collect(),
            ),
            Value::Ref(Some(target)) => {
                Value::Ref(Some(Box::new(self.walk(*target, depth + 1))))
            }
            Value::Ref(None) => Value::Ref(None),
            // A bare scalar has no field name attached, so nothing to mask.
            scalar @ Value::Scalar(_) => scalar,
        }
    }

    fn walk_field(&mut self, name: &str, value: Value, depth: usize) -> Value {
        match self.policy.classify(name) {
            SensitivityLevel::Unclassified => {
                self.path.push(name.to_owned());
                let masked = self.walk(value, depth + 1);
                self.path.pop();
                masked
            }
            level => self.apply_masker(level, name, value),
        }
    }

    /// Applies the tier transform if the value is a string scalar; anything
    /// else is a classification mismatch and passes through unchanged.
    fn apply_masker(&mut self, level: SensitivityLevel, name: &str, value: Value) -> Value {
        match value {
            Value::Scalar(Scalar::Str(text)) => {
                Value::Scalar(Scalar::Str(self.policy.apply(level, &text)))
            }
            other => {
                self.path.push(name.to_owned());
                self.notes.push(MaskNote::TypeMismatch {
                    path: self.path.join("."),
                    level,
                });
                self.path.pop();
                other
            }
        }
    }
}
