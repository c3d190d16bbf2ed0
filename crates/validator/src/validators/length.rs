//! String length validators
//!
//! Length is measured in Unicode scalar values (`char`s), so `"héllo"` has
//! length 5 even though it is 6 bytes long. This is not the user-perceived
//! length: a combining sequence such as `"e\u{301}"` renders as one glyph but
//! counts as 2.

use crate::foundation::{Validate, ValidationError};

#[inline]
fn measure(input: &str) -> usize {
    input.chars().count()
}

crate::validator! {
    /// Rejects the empty string.
    pub NotEmpty for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::new("not_empty", "String must not be empty") }
    fn not_empty();
}

crate::validator! {
    /// At least `min` characters (`char`s, not grapheme clusters).
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { measure(input) >= self.min }
    error(self, input) { ValidationError::min_length(self.min, measure(input)) }
    fn min_length(min: usize);
}

crate::validator! {
    /// At most `max` characters (`char`s, not grapheme clusters).
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { measure(input) <= self.max }
    error(self, input) { ValidationError::max_length(self.max, measure(input)) }
    fn max_length(max: usize);
}

/// Between `min` and `max` characters, both inclusive.
///
/// Counts the input once, unlike `min_length(..).and(max_length(..))`, and
/// reports a single `length_range` error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthRange {
    /// Minimum length (inclusive).
    pub min: usize,
    /// Maximum length (inclusive).
    pub max: usize,
}

impl LengthRange {
    /// Fails with `invalid_range` when `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self, ValidationError> {
        if min > max {
            return Err(ValidationError::new("invalid_range", "min must be <= max"));
        }
        Ok(Self { min, max })
    }
}

impl Validate for LengthRange {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let len = measure(input);
        if (self.min..=self.max).contains(&len) {
            Ok(())
        } else {
            Err(ValidationError::length_range(self.min, self.max, len))
        }
    }
}

/// Shorthand for [`LengthRange::new`].
pub fn length_range(min: usize, max: usize) -> Result<LengthRange, ValidationError> {
    LengthRange::new(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length_is_inclusive() {
        let v = min_length(8);
        assert!(v.is_valid("12345678"));
        assert!(!v.is_valid("1234567"));
        assert!(!v.is_valid(""));
    }

    #[test]
    fn test_max_length_is_inclusive() {
        let v = max_length(30);
        assert!(v.is_valid(&"x".repeat(30)));
        assert!(v.is_valid(""));
        assert!(!v.is_valid(&"x".repeat(31)));
    }

    #[test]
    fn test_max_length_error_params() {
        let error = max_length(3).validate("abcd").unwrap_err();
        assert_eq!(error.code, "max_length");
        assert_eq!(error.param("max"), Some("3"));
        assert_eq!(error.param("actual"), Some("4"));
    }

    #[test]
    fn test_length_range_boundaries() {
        let validator = LengthRange::new(1, 64).unwrap();
        assert!(validator.validate("a").is_ok());
        assert!(validator.validate(&"a".repeat(64)).is_ok());
        assert!(validator.validate("").is_err());
        assert!(validator.validate(&"a".repeat(65)).is_err());
    }

    #[test]
    fn test_length_range_invalid() {
        assert!(LengthRange::new(10, 5).is_err());
        assert!(length_range(5, 5).is_ok());
    }

    #[test]
    fn test_not_empty() {
        assert!(not_empty().validate(" ").is_ok());
        assert!(NotEmpty.validate("").is_err());
    }

    #[test]
    fn test_unicode_counts_chars() {
        assert_eq!("h\u{e9}llo".len(), 6);
        assert!(min_length(5).validate("h\u{e9}llo").is_ok());
        assert!(max_length(5).validate("h\u{e9}llo").is_ok());
        assert!(min_length(3).validate("\u{1f44b}\u{1f30d}").is_err());
        // combining acute accent is its own char
        assert!(min_length(2).validate("e\u{301}").is_ok());
    }
}
