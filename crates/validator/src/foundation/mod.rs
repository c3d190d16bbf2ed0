//! Validation traits and error types
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//!
//! Validators are generic over their input type and compose through
//! [`ValidateExt`]:
//!
//! ```rust
//! use formcheck_validator::prelude::*;
//!
//! let validator = min_length(8).with_message("Password must be at least 8 characters long");
//! let error = validator.validate("short").unwrap_err();
//! assert_eq!(error.message, "Password must be at least 8 characters long");
//! ```

pub mod error;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use traits::{Validate, ValidateExt};

/// Runs every validator against `value`, collecting each failure.
///
/// Unlike [`And`](crate::combinators::And) this never stops early; it is the
/// slice form of what [`RuleSet`](crate::rules::RuleSet) does for owned rules.
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    validators
        .iter()
        .filter_map(|v| v.validate(value).err())
        .collect::<ValidationErrors>()
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{contains_digit, contains_uppercase, min_length};

    #[test]
    fn test_all_pass() {
        let rules: [&dyn Validate<Input = str>; 2] = [&min_length(8), &contains_digit()];
        assert!(validate_with_all("Passw0rd!", &rules).is_ok());
    }

    #[test]
    fn test_every_failure_collected_in_order() {
        let rules: [&dyn Validate<Input = str>; 3] =
            [&min_length(8), &contains_uppercase(), &contains_digit()];

        let errors = validate_with_all("abc", &rules).unwrap_err();
        let codes: Vec<_> = errors.errors().iter().map(|e| e.code.as_ref()).collect();
        assert_eq!(codes, ["min_length", "missing_uppercase", "missing_digit"]);
    }
}
