//! The outcome handed back to callers of a rule-set.

use serde::Serialize;

use crate::foundation::ValidationErrors;

/// Pass/fail outcome plus the ordered broken-rule messages.
///
/// `is_valid` is true exactly when `broken_rules` is empty; both constructors
/// derive one from the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Whether every rule passed.
    pub is_valid: bool,
    /// One message per failing rule, in rule order.
    pub broken_rules: Vec<String>,
}

impl ValidationResult {
    /// Builds a result from broken-rule messages.
    pub fn from_broken_rules(broken_rules: Vec<String>) -> Self {
        Self {
            is_valid: broken_rules.is_empty(),
            broken_rules,
        }
    }

    /// A result with no broken rules.
    pub fn valid() -> Self {
        Self::from_broken_rules(Vec::new())
    }

    /// Returns true if `message` is among the broken rules.
    pub fn breaks(&self, message: &str) -> bool {
        self.broken_rules.iter().any(|m| m == message)
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}

impl From<ValidationErrors> for ValidationResult {
    fn from(errors: ValidationErrors) -> Self {
        Self::from_broken_rules(errors.into_iter().map(|e| e.message.into_owned()).collect())
    }
}

impl From<Result<(), ValidationErrors>> for ValidationResult {
    fn from(result: Result<(), ValidationErrors>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(errors) => errors.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidationError;

    #[test]
    fn test_validity_follows_broken_rules() {
        assert!(ValidationResult::valid().is_valid);
        let result = ValidationResult::from_broken_rules(vec!["nope".to_string()]);
        assert!(!result.is_valid);
        assert!(result.breaks("nope"));
    }

    #[test]
    fn test_from_errors_keeps_order() {
        let errors: ValidationErrors = [
            ValidationError::new("a", "first"),
            ValidationError::new("b", "second"),
        ]
        .into_iter()
        .collect();

        let result = ValidationResult::from(Err::<(), _>(errors));
        assert_eq!(result.broken_rules, ["first", "second"]);
    }

    #[test]
    fn test_json_shape() {
        let result = ValidationResult::from_broken_rules(vec!["too short".to_string()]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "is_valid": false, "broken_rules": ["too short"] })
        );
    }
}
