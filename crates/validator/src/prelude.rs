//! Prelude module for convenient imports.
//!
//! ```rust
//! use formcheck_validator::prelude::*;
//!
//! let nickname = min_length(3).and(max_length(20));
//! assert!(nickname.validate("alice").is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    Validate, ValidateExt, ValidationError, ValidationErrors, validate_with_all,
};

// ============================================================================
// VALIDATORS + COMBINATORS
// ============================================================================

pub use crate::validators::*;

pub use crate::combinators::{
    And, Not, Or, Segment, WithMessage, and, not, or, segment, with_message,
};

// ============================================================================
// RULE-SETS
// ============================================================================

pub use crate::email::{
    DomainExtension, DomainHasDot, EmailPolicy, LocalPartLength, SingleAtSymbol, validate_email,
};
pub use crate::form::{FormOutcome, Policies, validate_form};
pub use crate::password::{PasswordPolicy, validate_password};
pub use crate::result::ValidationResult;
pub use crate::rules::RuleSet;
pub use crate::PolicyError;
