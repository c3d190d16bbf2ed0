//! Email shape rule-set
//!
//! A simplified structural check, not RFC 5322. Four rules, always evaluated
//! in this order and never short-circuited:
//!
//! 1. exactly one `@`
//! 2. the local part (before the *first* `@`) has 1..=64 characters
//! 3. the domain (after the first `@`) is non-empty and contains a `.`
//! 4. something follows the last `.` of the domain
//!
//! Rules 2-4 split at the first `@` even when rule 1 fails, so
//! `test@@example.com` breaks only the first rule.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::PolicyError;
use crate::compose;
use crate::combinators::{And, Segment, segment};
use crate::foundation::{Validate, ValidateExt, ValidationError};
use crate::result::ValidationResult;
use crate::rules::RuleSet;
use crate::validators::{
    CharCount, ContainsChar, LengthRange, NotEmpty, contains_char, not_empty,
};

/// Default local-part limit.
pub const DEFAULT_MAX_LOCAL_PART_LENGTH: usize = 64;

static DEFAULT_RULES: LazyLock<RuleSet<str>> = LazyLock::new(|| EmailPolicy::default().rule_set());

/// Text before the first `@`, if there is one.
pub fn local_part(candidate: &str) -> Option<&str> {
    candidate.split_once('@').map(|(local, _)| local)
}

/// Text after the first `@`, if there is one.
pub fn domain(candidate: &str) -> Option<&str> {
    candidate.split_once('@').map(|(_, domain)| domain)
}

/// Text after the last `.` of the domain, if the domain has a dot.
pub fn domain_extension(candidate: &str) -> Option<&str> {
    domain(candidate)?
        .rsplit_once('.')
        .map(|(_, extension)| extension)
}

/// Exactly one `@` in the whole address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleAtSymbol(CharCount);

impl SingleAtSymbol {
    /// Creates the check.
    pub const fn new() -> Self {
        Self(CharCount { ch: '@', count: 1 })
    }
}

impl Default for SingleAtSymbol {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for SingleAtSymbol {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.0.validate(input)
    }
}

/// Local part of 1..=`max` characters; fails when there is no `@`.
#[derive(Debug, Clone)]
pub struct LocalPartLength(Segment<LengthRange>);

impl LocalPartLength {
    /// A `max` of zero is treated as one; [`EmailPolicy::validated`] rejects it.
    pub fn new(max: usize) -> Self {
        let range = LengthRange {
            min: 1,
            max: max.max(1),
        };
        Self(segment("local_part", local_part, range))
    }
}

impl Validate for LocalPartLength {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.0.validate(input)
    }
}

/// Non-empty domain containing a `.`.
#[derive(Debug, Clone)]
pub struct DomainHasDot(Segment<And<NotEmpty, ContainsChar>>);

impl DomainHasDot {
    /// Creates the check.
    pub fn new() -> Self {
        Self(segment(
            "domain",
            domain,
            compose![not_empty(), contains_char('.')],
        ))
    }
}

impl Default for DomainHasDot {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for DomainHasDot {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.0.validate(input)
    }
}

/// At least one character after the last `.` of the domain.
#[derive(Debug, Clone)]
pub struct DomainExtension(Segment<NotEmpty>);

impl DomainExtension {
    /// Creates the check.
    pub fn new() -> Self {
        Self(segment("domain_extension", domain_extension, not_empty()))
    }
}

impl Default for DomainExtension {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for DomainExtension {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.0.validate(input)
    }
}

/// Tunable limits of the email rule-set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmailPolicy {
    /// Maximum local-part length (inclusive); the minimum is always 1.
    pub max_local_part_length: usize,
}

impl Default for EmailPolicy {
    fn default() -> Self {
        Self {
            max_local_part_length: DEFAULT_MAX_LOCAL_PART_LENGTH,
        }
    }
}

impl EmailPolicy {
    /// Creates a policy, rejecting a zero local-part limit.
    pub fn new(max_local_part_length: usize) -> Result<Self, PolicyError> {
        Self {
            max_local_part_length,
        }
        .validated()
    }

    /// Checks the policy invariants, e.g. after deserialization.
    pub fn validated(self) -> Result<Self, PolicyError> {
        if self.max_local_part_length == 0 {
            return Err(PolicyError::ZeroLocalPartLength);
        }
        Ok(self)
    }

    /// Builds the ordered rule-set for this policy.
    pub fn rule_set(&self) -> RuleSet<str> {
        RuleSet::new("email")
            .rule(SingleAtSymbol::new(), "Email must contain exactly one @ symbol")
            .rule(
                LocalPartLength::new(self.max_local_part_length),
                format!(
                    "Email local part must be between 1 and {} characters",
                    self.max_local_part_length
                ),
            )
            .rule(DomainHasDot::new(), "Email domain must contain at least one dot")
            .rule(DomainExtension::new(), "Email domain must end with a valid extension")
    }

    /// Evaluates all four rules against `candidate`.
    pub fn validate(&self, candidate: &str) -> ValidationResult {
        self.rule_set().evaluate(candidate)
    }

    /// True iff the local part has 1..=`max_local_part_length` characters.
    pub fn has_valid_local_part(&self, candidate: &str) -> bool {
        LocalPartLength::new(self.max_local_part_length).is_valid(candidate)
    }
}

/// Validates an email address against the default policy.
pub fn validate_email(candidate: &str) -> ValidationResult {
    DEFAULT_RULES.evaluate(candidate)
}

/// True iff `candidate` contains exactly one `@`.
pub fn has_only_one_at_symbol(candidate: &str) -> bool {
    SingleAtSymbol::new().is_valid(candidate)
}

/// True iff the text before the first `@` has 1..=64 characters.
pub fn has_valid_local_part(candidate: &str) -> bool {
    EmailPolicy::default().has_valid_local_part(candidate)
}

/// True iff the text after the first `@` is non-empty and contains a `.`.
pub fn has_valid_domain(candidate: &str) -> bool {
    DomainHasDot::new().is_valid(candidate)
}

/// True iff at least one character follows the last `.` of the domain.
pub fn has_valid_domain_extension(candidate: &str) -> bool {
    DomainExtension::new().is_valid(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_segments() {
        assert_eq!(local_part("a@b@c.d"), Some("a"));
        assert_eq!(domain("a@b@c.d"), Some("b@c.d"));
        assert_eq!(domain_extension("a@mail.example.org"), Some("org"));
        assert_eq!(domain_extension("a@localhost"), None);
        assert_eq!(local_part("no-at"), None);
    }

    #[test]
    fn test_all_messages_for_plain_word() {
        assert_eq!(
            validate_email("plainword").broken_rules,
            [
                "Email must contain exactly one @ symbol",
                "Email local part must be between 1 and 64 characters",
                "Email domain must contain at least one dot",
                "Email domain must end with a valid extension",
            ]
        );
    }

    #[test]
    fn test_trailing_dot_breaks_only_extension() {
        assert_eq!(
            validate_email("user@example.").broken_rules,
            ["Email domain must end with a valid extension"]
        );
    }

    #[test]
    fn test_custom_local_part_limit() {
        let policy = EmailPolicy::new(3).unwrap();
        assert!(policy.validate("abc@x.io").is_valid);
        assert_eq!(
            policy.validate("abcd@x.io").broken_rules,
            ["Email local part must be between 1 and 3 characters"]
        );
    }

    #[test]
    fn test_named_checks_report_their_segment() {
        let error = DomainHasDot::new().validate("user@localhost").unwrap_err();
        assert_eq!(error.field.as_deref(), Some("domain"));
        assert_eq!(error.code, "missing_character");

        let error = LocalPartLength::new(64).validate("@example.com").unwrap_err();
        assert_eq!(error.field.as_deref(), Some("local_part"));
        assert_eq!(error.code, "length_range");

        let error = DomainExtension::new().validate("no-at-sign").unwrap_err();
        assert_eq!(error.code, "missing_segment");

        let error = SingleAtSymbol::new().validate("a@@b.c").unwrap_err();
        assert_eq!(error.param("actual"), Some("2"));
    }

    #[test]
    fn test_predicates_agree_with_rule_set() {
        for candidate in ["test@example.com", "test@", "@x.io", "a@b@c", "a@b.", "", "@"] {
            let result = validate_email(candidate);
            let predicates = [
                has_only_one_at_symbol(candidate),
                has_valid_local_part(candidate),
                has_valid_domain(candidate),
                has_valid_domain_extension(candidate),
            ];
            let broken = predicates.iter().filter(|ok| !**ok).count();
            assert_eq!(result.broken_rules.len(), broken, "{candidate:?}");
        }
    }

    #[test]
    fn test_zero_limit_rejected() {
        assert_eq!(EmailPolicy::new(0), Err(PolicyError::ZeroLocalPartLength));
    }
}
