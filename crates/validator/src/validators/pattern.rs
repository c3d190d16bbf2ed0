//! Character-class validators
//!
//! Each validator asks whether the input contains at least one character of
//! some class. Letter and digit classes are ASCII-only: `é` is not a
//! lowercase letter for these rules and `٣` is not a number.

use std::borrow::Cow;

use crate::foundation::ValidationError;

// ============================================================================
// ASCII CLASSES
// ============================================================================

crate::validator! {
    /// Requires at least one ASCII lowercase letter.
    pub ContainsLowercase for str;
    rule(input) { input.chars().any(|c| c.is_ascii_lowercase()) }
    error(input) {
        ValidationError::new("missing_lowercase", "Must contain a lowercase letter")
    }
    fn contains_lowercase();
}

crate::validator! {
    /// Requires at least one ASCII uppercase letter.
    pub ContainsUppercase for str;
    rule(input) { input.chars().any(|c| c.is_ascii_uppercase()) }
    error(input) {
        ValidationError::new("missing_uppercase", "Must contain an uppercase letter")
    }
    fn contains_uppercase();
}

crate::validator! {
    /// Requires at least one ASCII digit.
    pub ContainsDigit for str;
    rule(input) { input.chars().any(|c| c.is_ascii_digit()) }
    error(input) { ValidationError::new("missing_digit", "Must contain a digit") }
    fn contains_digit();
}

// ============================================================================
// ALLOW-LIST
// ============================================================================

crate::validator! {
    /// Requires at least one character from an allow-list.
    #[derive(PartialEq, Eq, Hash)]
    pub ContainsAnyOf { allowed: Cow<'static, str> } for str;
    rule(self, input) { input.chars().any(|c| self.allowed.contains(c)) }
    error(self, input) {
        ValidationError::new("missing_character", "Must contain one of the allowed characters")
            .with_param("allowed", self.allowed.clone())
    }
    new(allowed: impl Into<Cow<'static, str>>) { Self { allowed: allowed.into() } }
    fn contains_any_of(allowed: impl Into<Cow<'static, str>>);
}

// ============================================================================
// SINGLE CHARACTER
// ============================================================================

crate::validator! {
    /// Requires the character to appear at least once.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub ContainsChar { ch: char } for str;
    rule(self, input) { input.contains(self.ch) }
    error(self, input) {
        ValidationError::new("missing_character", format!("Must contain '{}'", self.ch))
            .with_param("character", self.ch)
    }
    fn contains_char(ch: char);
}

crate::validator! {
    /// Requires the character to appear exactly `count` times.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub CharCount { ch: char, count: usize } for str;
    rule(self, input) { input.matches(self.ch).count() == self.count }
    error(self, input) {
        ValidationError::new(
            "char_count",
            format!("Must contain '{}' exactly {} time(s)", self.ch, self.count),
        )
        .with_param("expected", self.count)
        .with_param("actual", input.matches(self.ch).count())
    }
    fn char_count(ch: char, count: usize);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_ascii_classes() {
        assert!(contains_lowercase().validate("ABCd").is_ok());
        assert!(contains_lowercase().validate("ABC1").is_err());
        assert!(contains_uppercase().validate("abcD").is_ok());
        assert!(contains_uppercase().validate("abc1").is_err());
        assert!(contains_digit().validate("abc1").is_ok());
        assert!(contains_digit().validate("abcd").is_err());
    }

    #[test]
    fn test_ascii_classes_ignore_non_ascii() {
        assert!(contains_lowercase().validate("\u{e9}").is_err());
        assert!(contains_uppercase().validate("\u{c9}").is_err());
        assert!(contains_digit().validate("\u{663}").is_err());
    }

    #[test]
    fn test_contains_any_of() {
        let validator = contains_any_of("!?");
        assert!(validator.validate("hey!").is_ok());
        assert!(validator.validate("hey").is_err());
        assert_eq!(
            validator.validate("").unwrap_err().param("allowed"),
            Some("!?")
        );
    }

    #[test]
    fn test_contains_char() {
        assert!(contains_char('.').validate("a.b").is_ok());
        assert!(contains_char('.').validate("ab").is_err());
    }

    #[test]
    fn test_char_count() {
        let validator = char_count('@', 1);
        assert!(validator.validate("a@b").is_ok());
        assert!(validator.validate("ab").is_err());
        let error = validator.validate("a@@b").unwrap_err();
        assert_eq!(error.param("actual"), Some("2"));
    }
}
