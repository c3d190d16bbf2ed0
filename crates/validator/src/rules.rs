//! Ordered rule-sets
//!
//! A [`RuleSet`] is the aggregator behind every `validate_*` function: an
//! ordered list of validators, each carrying the fixed message that is
//! reported when it fails. Evaluation never short-circuits; every rule runs
//! against the same input and each failure contributes exactly one message,
//! in rule order.
//!
//! ```rust
//! use formcheck_validator::prelude::*;
//!
//! let rules = RuleSet::new("nickname")
//!     .rule(min_length(3), "Nickname is too short")
//!     .rule(contains_uppercase(), "Nickname needs a capital letter");
//!
//! let result = rules.evaluate("ab");
//! assert_eq!(result.broken_rules, ["Nickname is too short", "Nickname needs a capital letter"]);
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationErrors};
use crate::result::ValidationResult;

type BoxedRule<I> = Box<dyn Validate<Input = I> + Send + Sync>;

/// An ordered, non-short-circuiting list of rules over one input type.
pub struct RuleSet<I: ?Sized + 'static> {
    name: Cow<'static, str>,
    rules: Vec<BoxedRule<I>>,
}

impl<I: ?Sized + 'static> RuleSet<I> {
    /// Creates an empty rule-set. The name only appears in logs and in the
    /// summary error produced through [`Validate`].
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Appends a rule whose failures are reported as `message`.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<V>(mut self, validator: V, message: impl Into<Cow<'static, str>>) -> Self
    where
        V: Validate<Input = I> + Send + Sync + 'static,
    {
        self.rules.push(Box::new(validator.with_message(message)));
        self
    }

    /// Returns the rule-set name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules were added.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs every rule and returns the structured failures, in rule order.
    pub fn check(&self, input: &I) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for (index, rule) in self.rules.iter().enumerate() {
            if let Err(error) = rule.validate(input) {
                tracing::trace!(rule_set = %self.name, index, code = %error.code, "rule broken");
                errors.add(error);
            }
        }

        tracing::debug!(
            rule_set = %self.name,
            rules = self.rules.len(),
            broken = errors.len(),
            "rule set evaluated"
        );

        errors.finish()
    }

    /// Runs every rule and returns the broken-rule messages.
    pub fn evaluate(&self, input: &I) -> ValidationResult {
        self.check(input).into()
    }
}

impl<I: ?Sized + 'static> Validate for RuleSet<I> {
    type Input = I;

    fn validate(&self, input: &I) -> Result<(), ValidationError> {
        self.check(input).map_err(|errors| {
            let summary = format!("{} rule(s) of '{}' broken", errors.len(), self.name);
            errors.into_single_error(summary)
        })
    }
}

impl<I: ?Sized + 'static> fmt::Debug for RuleSet<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("name", &self.name)
            .field("rules", &self.rules.len())
            .finish()
    }
}
