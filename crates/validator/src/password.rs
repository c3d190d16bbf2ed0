//! Password rule-set
//!
//! Six independent rules, always evaluated in this order:
//!
//! 1. at least `min_length` characters (default 8)
//! 2. at most `max_length` characters (default 30)
//! 3. an ASCII lowercase letter
//! 4. an ASCII uppercase letter
//! 5. an ASCII digit
//! 6. a character from the special allow-list
//!
//! Both length bounds are inclusive and counted in `char`s.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::PolicyError;
use crate::foundation::Validate;
use crate::result::ValidationResult;
use crate::rules::RuleSet;
use crate::validators::{
    contains_any_of, contains_digit, contains_lowercase, contains_uppercase, max_length,
    min_length,
};

/// Default minimum password length.
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Default maximum password length.
pub const DEFAULT_MAX_LENGTH: usize = 30;

/// Default special-character allow-list.
pub const DEFAULT_SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{}|;:',.<>?/~`";

static DEFAULT_RULES: LazyLock<RuleSet<str>> =
    LazyLock::new(|| PasswordPolicy::default().rule_set());

/// Tunable limits of the password rule-set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PasswordPolicy {
    /// Minimum length (inclusive).
    pub min_length: usize,
    /// Maximum length (inclusive).
    pub max_length: usize,
    /// Characters that satisfy the special-character rule.
    pub special_characters: String,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            special_characters: DEFAULT_SPECIAL_CHARACTERS.to_string(),
        }
    }
}

impl PasswordPolicy {
    /// Creates a policy, rejecting inverted bounds and an empty allow-list.
    pub fn new(
        min_length: usize,
        max_length: usize,
        special_characters: impl Into<String>,
    ) -> Result<Self, PolicyError> {
        Self {
            min_length,
            max_length,
            special_characters: special_characters.into(),
        }
        .validated()
    }

    /// Checks the policy invariants, e.g. after deserialization.
    pub fn validated(self) -> Result<Self, PolicyError> {
        if self.min_length > self.max_length {
            return Err(PolicyError::InvertedLengthBounds {
                min: self.min_length,
                max: self.max_length,
            });
        }
        if self.special_characters.is_empty() {
            return Err(PolicyError::EmptySpecialCharacters);
        }
        Ok(self)
    }

    /// Builds the ordered rule-set for this policy.
    pub fn rule_set(&self) -> RuleSet<str> {
        RuleSet::new("password")
            .rule(
                min_length(self.min_length),
                format!(
                    "Password must be at least {} characters long",
                    self.min_length
                ),
            )
            .rule(
                max_length(self.max_length),
                format!(
                    "Password must be at most {} characters long",
                    self.max_length
                ),
            )
            .rule(
                contains_lowercase(),
                "Password must contain at least one lowercase letter",
            )
            .rule(
                contains_uppercase(),
                "Password must contain at least one uppercase letter",
            )
            .rule(contains_digit(), "Password must contain at least one number")
            .rule(
                contains_any_of(self.special_characters.clone()),
                "Password must contain at least one special character",
            )
    }

    /// Evaluates all six rules against `candidate`.
    pub fn validate(&self, candidate: &str) -> ValidationResult {
        self.rule_set().evaluate(candidate)
    }

    /// True iff `candidate` has at least `min_length` characters.
    pub fn has_minimum_length(&self, candidate: &str) -> bool {
        min_length(self.min_length).is_valid(candidate)
    }

    /// True iff `candidate` has at most `max_length` characters.
    pub fn has_maximum_length(&self, candidate: &str) -> bool {
        max_length(self.max_length).is_valid(candidate)
    }

    /// True iff `candidate` contains a character from the allow-list.
    pub fn contains_special_character(&self, candidate: &str) -> bool {
        contains_any_of(self.special_characters.clone()).is_valid(candidate)
    }
}

/// Validates a password against the default policy.
pub fn validate_password(candidate: &str) -> ValidationResult {
    DEFAULT_RULES.evaluate(candidate)
}

/// True iff `candidate` has at least 8 characters.
pub fn has_minimum_length(candidate: &str) -> bool {
    min_length(DEFAULT_MIN_LENGTH).is_valid(candidate)
}

/// True iff `candidate` has at most 30 characters.
pub fn has_maximum_length(candidate: &str) -> bool {
    max_length(DEFAULT_MAX_LENGTH).is_valid(candidate)
}

/// True iff `candidate` contains an ASCII lowercase letter.
pub fn contains_lowercase_letter(candidate: &str) -> bool {
    contains_lowercase().is_valid(candidate)
}

/// True iff `candidate` contains an ASCII uppercase letter.
pub fn contains_uppercase_letter(candidate: &str) -> bool {
    contains_uppercase().is_valid(candidate)
}

/// True iff `candidate` contains an ASCII digit.
pub fn contains_number(candidate: &str) -> bool {
    contains_digit().is_valid(candidate)
}

/// True iff `candidate` contains a character from the default allow-list.
pub fn contains_special_character(candidate: &str) -> bool {
    contains_any_of(DEFAULT_SPECIAL_CHARACTERS).is_valid(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_policy_messages() {
        let result = validate_password("");
        assert_eq!(
            result.broken_rules,
            [
                "Password must be at least 8 characters long",
                "Password must contain at least one lowercase letter",
                "Password must contain at least one uppercase letter",
                "Password must contain at least one number",
                "Password must contain at least one special character",
            ]
        );
    }

    #[test]
    fn test_policy_rejects_inverted_bounds() {
        assert_eq!(
            PasswordPolicy::new(12, 10, "!"),
            Err(PolicyError::InvertedLengthBounds { min: 12, max: 10 })
        );
    }

    #[test]
    fn test_policy_rejects_empty_specials() {
        assert_eq!(
            PasswordPolicy::new(8, 30, ""),
            Err(PolicyError::EmptySpecialCharacters)
        );
    }

    #[test]
    fn test_custom_policy_interpolates_bounds() {
        let policy = PasswordPolicy::new(4, 6, "#").unwrap();
        let result = policy.validate("Ab1!xyz");
        assert_eq!(
            result.broken_rules,
            [
                "Password must be at most 6 characters long",
                "Password must contain at least one special character",
            ]
        );
        assert!(policy.validate("Ab1#").is_valid);
        assert!(policy.contains_special_character("#"));
        assert!(!policy.contains_special_character("!"));
    }

    #[test]
    fn test_policy_deserializes_with_defaults() {
        let policy: PasswordPolicy = serde_json::from_str(r#"{ "min_length": 12 }"#).unwrap();
        assert_eq!(policy.min_length, 12);
        assert_eq!(policy.max_length, DEFAULT_MAX_LENGTH);
        assert_eq!(policy.special_characters, DEFAULT_SPECIAL_CHARACTERS);
    }

    #[test]
    fn test_policy_predicates() {
        let policy = PasswordPolicy::default();
        assert!(policy.has_minimum_length("12345678"));
        assert!(!policy.has_minimum_length("1234567"));
        assert!(policy.has_maximum_length(&"x".repeat(30)));
        assert!(!policy.has_maximum_length(&"x".repeat(31)));
    }
}
