//! Rewording of a validator's failure.

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Reports failures of `inner` under a fixed message.
///
/// Rule-sets use this to attach their user-facing broken-rule text to
/// generic validators. The inner error's code and field carry over and the
/// inner error itself is kept as the only nested error. [`with_code`]
/// replaces the code as well.
///
/// ```rust
/// use formcheck_validator::prelude::*;
///
/// let rule = min_length(8).with_message("Password must be at least 8 characters long");
///
/// let error = rule.validate("short").unwrap_err();
/// assert_eq!(error.message, "Password must be at least 8 characters long");
/// assert_eq!(error.code, "min_length");
/// assert_eq!(error.nested[0].param("actual"), Some("5"));
/// ```
///
/// [`with_code`]: WithMessage::with_code
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Cow<'static, str>,
    code: Option<Cow<'static, str>>,
}

impl<V> WithMessage<V> {
    /// Wraps `inner` with `message`.
    pub fn new(inner: V, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
            code: None,
        }
    }

    /// Overrides the error code too.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = Some(code.into());
        self
    }
}

impl<V: Validate> Validate for WithMessage<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|mut inner| {
            let code = self.code.clone().unwrap_or_else(|| inner.code.clone());
            ValidationError {
                field: inner.field.take(),
                ..ValidationError::new(code, self.message.clone())
            }
            .with_nested_error(inner)
        })
    }
}

/// Shorthand for [`WithMessage::new`].
pub fn with_message<V>(validator: V, message: impl Into<Cow<'static, str>>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}
