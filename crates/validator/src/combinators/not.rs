//! Negation of a validator.

use crate::foundation::{Validate, ValidationError};

/// Passes exactly when `inner` fails.
///
/// ```rust
/// use formcheck_validator::prelude::*;
///
/// let no_at = contains_char('@').not();
/// assert!(no_at.validate("example.com").is_ok());
/// assert_eq!(no_at.validate("a@b").unwrap_err().code, "not_failed");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    inner: V,
}

impl<V> Not<V> {
    /// Inverts `inner`.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }
}

impl<V: Validate> Validate for Not<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                "not_failed",
                "Must not satisfy the negated rule",
            )),
            Err(_) => Ok(()),
        }
    }
}

/// Shorthand for [`Not::new`].
pub fn not<V: Validate>(validator: V) -> Not<V> {
    Not::new(validator)
}
