//! Sign-up form gate: both checks must pass before submission is allowed.

use serde::{Deserialize, Serialize};

use crate::PolicyError;
use crate::email::EmailPolicy;
use crate::password::PasswordPolicy;
use crate::result::ValidationResult;

/// The policies a form is checked against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policies {
    /// Password rules.
    pub password: PasswordPolicy,
    /// Email rules.
    pub email: EmailPolicy,
}

impl Policies {
    /// Checks both policies' invariants.
    pub fn validated(self) -> Result<Self, PolicyError> {
        Ok(Self {
            password: self.password.validated()?,
            email: self.email.validated()?,
        })
    }
}

/// Result of checking a whole form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormOutcome {
    /// Outcome of the email rules.
    pub email: ValidationResult,
    /// Outcome of the password rules.
    pub password: ValidationResult,
    /// True iff both outcomes are valid.
    pub can_submit: bool,
}

impl FormOutcome {
    fn new(email: ValidationResult, password: ValidationResult) -> Self {
        let can_submit = email.is_valid && password.is_valid;
        Self {
            email,
            password,
            can_submit,
        }
    }
}

/// Checks an email/password pair against `policies`.
pub fn validate_form(policies: &Policies, email: &str, password: &str) -> FormOutcome {
    let outcome = FormOutcome::new(
        policies.email.validate(email),
        policies.password.validate(password),
    );
    tracing::debug!(can_submit = outcome.can_submit, "form checked");
    outcome
}
