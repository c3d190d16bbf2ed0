//! The `Validate` trait and its combinator extension.

use std::borrow::Cow;

use crate::foundation::ValidationError;

/// A single check over an input.
///
/// Implementations must be pure: the same input always yields the same
/// outcome, and nothing about the input is retained.
///
/// # Examples
///
/// ```rust
/// use formcheck_validator::foundation::{Validate, ValidationError};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.contains(' ') {
///             Err(ValidationError::new("no_spaces", "Must not contain spaces"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoSpaces.validate("hunter2").is_ok());
/// assert!(NoSpaces.validate("hunter 2").is_err());
/// ```
pub trait Validate {
    /// Checked type; usually `str`.
    type Input: ?Sized;

    /// Checks `input`, describing the failure on `Err`.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Returns `true` if the input passes.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

/// Combinator methods, implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```rust
/// use formcheck_validator::prelude::*;
///
/// let validator = min_length(3).and(max_length(10));
/// assert!(validator.validate("hello").is_ok());
/// assert!(validator.validate("hi").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Requires `other` to pass as well; stops at the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Passes when either validator passes; `other` only runs if `self` fails.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Passes exactly when `self` fails.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Reports failures under `message`; see [`WithMessage`].
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::{And, Not, Or, WithMessage};
