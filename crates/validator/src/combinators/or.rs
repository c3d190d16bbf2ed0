//! Disjunction of two validators over the same input.
//!
//! ```rust
//! use formcheck_validator::prelude::*;
//!
//! // At least three characters, or shorter with a digit.
//! let handle = min_length(3).or(contains_digit());
//! assert!(handle.validate("ann").is_ok());
//! assert!(handle.validate("a1").is_ok());
//! assert_eq!(handle.validate("ab").unwrap_err().code, "or_failed");
//! ```

use crate::foundation::{Validate, ValidationError};

/// Passes when either `left` or `right` passes.
///
/// `right` only runs when `left` fails. When both fail, the result is an
/// `or_failed` error with both failures nested, left first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<L, R> Or<L, R> {
    /// Pairs two alternatives.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let Err(left) = self.left.validate(input) else {
            return Ok(());
        };
        self.right.validate(input).map_err(|right| {
            ValidationError::new("or_failed", "None of the alternatives passed")
                .with_nested_error(left)
                .with_nested_error(right)
        })
    }
}

/// Shorthand for [`Or::new`].
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}
