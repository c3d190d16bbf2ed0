//! # formcheck-validator
//!
//! Composable rule validation for sign-up style forms: a password rule-set,
//! a simplified email shape check, and the aggregator that turns rule
//! failures into a [`ValidationResult`].
//!
//! ## Quick Start
//!
//! ```rust
//! use formcheck_validator::{validate_email, validate_password};
//!
//! let result = validate_password("abc");
//! assert!(!result.is_valid);
//! assert_eq!(result.broken_rules.len(), 4);
//!
//! assert!(validate_email("test@example.com").is_valid);
//! ```
//!
//! ## Policies
//!
//! The free functions use the default policies. Tighter or looser limits go
//! through [`PasswordPolicy`] and [`EmailPolicy`], which are also
//! deserializable from configuration.
//!
//! ## Building rules
//!
//! Every rule is a [`Validate`](foundation::Validate) implementation; the
//! [`validator!`] macro declares single-check validators and
//! [`RuleSet`](rules::RuleSet) evaluates an ordered list of them without
//! short-circuiting.

// ValidationError is the fundamental error type for all validators;
// boxing it would add indirection to every validation call.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod email;
pub mod form;
pub mod foundation;
mod macros;
pub mod password;
pub mod prelude;
pub mod result;
pub mod rules;
pub mod validators;

pub use email::{EmailPolicy, validate_email};
pub use form::{FormOutcome, Policies, validate_form};
pub use password::{PasswordPolicy, validate_password};
pub use result::ValidationResult;

/// Errors raised when a policy cannot be used to build a rule-set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    /// The minimum length exceeds the maximum length.
    #[error("password min_length ({min}) must not exceed max_length ({max})")]
    InvertedLengthBounds {
        /// Configured minimum.
        min: usize,
        /// Configured maximum.
        max: usize,
    },

    /// The special-character allow-list is empty.
    #[error("password special_characters must not be empty")]
    EmptySpecialCharacters,

    /// The local-part limit is zero, so no address could pass.
    #[error("email max_local_part_length must be at least 1")]
    ZeroLocalPartLength,
}
