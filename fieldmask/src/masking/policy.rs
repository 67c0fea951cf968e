//! Sensitivity tiers and the immutable masking policy.
//!
//! A policy is built once, merging caller-supplied field names into the
//! built-in defaults, and never mutated afterwards. That makes a single
//! policy safe to share read-only across any number of concurrent `mask`
//! calls.

use super::transform::{EmailMask, FallbackMask, FixedMask, MiddleMask, ShapeMask};

/// How sensitive a field is, from least to most.
///
/// When a field name matches rules in more than one tier, the higher tier
/// wins; the derived ordering reflects that priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SensitivityLevel {
    /// Not matched by any tier; the field's value is traversed, not masked.
    Unclassified,
    /// Identifying but low-impact values (usernames). Middle-masked.
    Low,
    /// Contact addresses (emails). Local part masked, domain preserved.
    Medium,
    /// Reachable identifiers (phone numbers). Shape-masked with a suffix.
    High,
    /// Credentials (passwords). Fully replaced by an opaque token.
    VeryHigh,
}

/// Built-in field names per tier. Caller-supplied names are merged in
/// additively; they never replace these.
const DEFAULT_VERY_HIGH: &[&str] = &["password"];
const DEFAULT_HIGH: &[&str] = &["mobileNO", "phone"];
const DEFAULT_MEDIUM: &[&str] = &["email"];
const DEFAULT_LOW: &[&str] = &["username"];

/// Default recursion bound for the walker. Deep enough for any sane payload;
/// shallow enough that an accidentally cyclic adapter cannot hang a process.
const DEFAULT_MAX_DEPTH: usize = 128;

/// An immutable sensitivity policy: field-name sets per tier plus the
/// per-tier transform configuration.
///
/// Construct with [`MaskPolicy::builder`] or use [`MaskPolicy::default`].
/// Construction cannot fail.
#[derive(Clone, Debug)]
pub struct MaskPolicy {
    very_high: Vec<String>,
    high: Vec<String>,
    medium: Vec<String>,
    low: Vec<String>,
    very_high_mask: FixedMask,
    high_mask: ShapeMask,
    medium_mask: EmailMask,
    low_mask: MiddleMask,
    max_depth: usize,
}

impl MaskPolicy {
    /// Starts building a policy on top of the built-in defaults.
    #[must_use]
    pub fn builder() -> MaskPolicyBuilder {
        MaskPolicyBuilder::new()
    }

    /// Returns the sensitivity tier for a field name.
    ///
    /// Matching is case-insensitive and exact (no wildcards), checked in
    /// priority order VeryHigh, High, Medium, Low. Unknown names are the
    /// common case and return [`SensitivityLevel::Unclassified`].
    #[must_use]
    pub fn classify(&self, field: &str) -> SensitivityLevel {
        if contains(&self.very_high, field) {
            SensitivityLevel::VeryHigh
        } else if contains(&self.high, field) {
            SensitivityLevel::High
        } else if contains(&self.medium, field) {
            SensitivityLevel::Medium
        } else if contains(&self.low, field) {
            SensitivityLevel::Low
        } else {
            SensitivityLevel::Unclassified
        }
    }

    /// Applies the tier's string transform to `value`.
    ///
    /// [`SensitivityLevel::Unclassified`] returns the value unchanged; the
    /// walker never routes unclassified fields here, but the method stays
    /// total.
    #[must_use]
    pub fn apply(&self, level: SensitivityLevel, value: &str) -> String {
        match level {
            SensitivityLevel::VeryHigh => self.very_high_mask.apply_to(value),
            SensitivityLevel::High => self.high_mask.apply_to(value),
            SensitivityLevel::Medium => self.medium_mask.apply_to(value),
            SensitivityLevel::Low => self.low_mask.apply_to(value),
            SensitivityLevel::Unclassified => value.to_owned(),
        }
    }

    pub(crate) fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for MaskPolicy {
    fn default() -> Self {
        Self::builder().build()
    }
}

fn contains(names: &[String], field: &str) -> bool {
    names.iter().any(|name| name.eq_ignore_ascii_case(field))
}

/// Builder for [`MaskPolicy`].
///
/// Field-name additions are unions: duplicate names within a tier are
/// harmless, and the same name in several tiers resolves by priority at
/// lookup time, not at construction.
#[derive(Clone, Debug)]
pub struct MaskPolicyBuilder {
    very_high: Vec<String>,
    high: Vec<String>,
    medium: Vec<String>,
    low: Vec<String>,
    low_keep: (usize, usize),
    medium_fallback: FallbackMask,
    max_depth: usize,
}

impl MaskPolicyBuilder {
    fn new() -> Self {
        Self {
            very_high: to_owned_names(DEFAULT_VERY_HIGH),
            high: to_owned_names(DEFAULT_HIGH),
            medium: to_owned_names(DEFAULT_MEDIUM),
            low: to_owned_names(DEFAULT_LOW),
            low_keep: (2, 2),
            medium_fallback: FallbackMask::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Adds field names to the VeryHigh tier.
    #[must_use]
    pub fn very_high<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.very_high.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Adds field names to the High tier.
    #[must_use]
    pub fn high<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.high.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Adds field names to the Medium tier.
    #[must_use]
    pub fn medium<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.medium.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Adds field names to the Low tier.
    #[must_use]
    pub fn low<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.low.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Sets the Low-tier keep spans (leading and trailing characters left
    /// visible). The default is `2, 2`.
    #[must_use]
    pub fn low_keep(mut self, keep_prefix: usize, keep_suffix: usize) -> Self {
        self.low_keep = (keep_prefix, keep_suffix);
        self
    }

    /// Sets the strategy for Medium-tier values that are not email-shaped.
    /// The default is [`FallbackMask::partial`].
    #[must_use]
    pub fn medium_fallback(mut self, fallback: FallbackMask) -> Self {
        self.medium_fallback = fallback;
        self
    }

    /// Sets the maximum traversal depth. Subtrees below the limit are
    /// returned unmasked rather than recursed into.
    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Finalizes the policy.
    #[must_use]
    pub fn build(self) -> MaskPolicy {
        let (keep_prefix, keep_suffix) = self.low_keep;
        MaskPolicy {
            very_high: self.very_high,
            high: self.high,
            medium: self.medium,
            low: self.low,
            very_high_mask: FixedMask::default(),
            high_mask: ShapeMask::default(),
            medium_mask: EmailMask::new(self.medium_fallback),
            low_mask: MiddleMask::keep(keep_prefix, keep_suffix),
            max_depth: self.max_depth,
        }
    }
}

impl Default for MaskPolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn to_owned_names(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_owned()).collect()
}
