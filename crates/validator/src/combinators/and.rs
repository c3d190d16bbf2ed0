//! Conjunction of two validators over the same input.
//!
//! ```rust
//! use formcheck_validator::combinators::and;
//! use formcheck_validator::prelude::*;
//!
//! let domain = and(not_empty(), contains_char('.'));
//! assert!(domain.validate("example.com").is_ok());
//! assert_eq!(domain.validate("").unwrap_err().code, "not_empty");
//! assert_eq!(domain.validate("localhost").unwrap_err().code, "missing_character");
//! ```

use crate::foundation::{Validate, ValidationError};

/// Passes when both `left` and `right` pass.
///
/// `right` is not consulted once `left` fails, so the reported error is
/// always the first one in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<L, R> And<L, R> {
    /// Pairs two validators.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input).and_then(|()| self.right.validate(input))
    }
}

/// Shorthand for [`And::new`].
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{contains_digit, max_length, min_length};

    #[test]
    fn test_both_pass() {
        assert!(and(min_length(8), max_length(30)).is_valid("Passw0rd!"));
    }

    #[test]
    fn test_left_failure_wins() {
        let error = and(min_length(8), contains_digit()).validate("abc").unwrap_err();
        assert_eq!(error.code, "min_length");
    }

    #[test]
    fn test_right_failure_reported() {
        let error = and(min_length(1), max_length(3)).validate("hello").unwrap_err();
        assert_eq!(error.code, "max_length");
    }

    #[test]
    fn test_chained_through_ext() {
        let v = min_length(3).and(max_length(10)).and(contains_digit());
        assert!(v.is_valid("abc1"));
        assert!(!v.is_valid("abcd"));
    }
}
