//! Structured rule failures
//!
//! A rule that fails produces a [`ValidationError`] carrying a stable `code`
//! (`"min_length"`, `"at_symbol_count"`, ...), the message shown to the user
//! and a few parameters describing what was measured. [`ValidationErrors`]
//! keeps the failures of one rule-set run in evaluation order.
//!
//! Codes and messages are `Cow<'static, str>` so the fixed rule texts never
//! allocate.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

type Text = Cow<'static, str>;

/// One failed rule.
///
/// ```rust
/// use formcheck_validator::foundation::ValidationError;
///
/// let error = ValidationError::min_length(8, 3);
/// assert_eq!(error.code, "min_length");
/// assert_eq!(error.param("actual"), Some("3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Stable identifier of the failed check.
    pub code: Text,

    /// Message reported to the user.
    pub message: Text,

    /// Part of the input the failure refers to, e.g. `"local_part"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Text>,

    /// Measured values, in insertion order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<(Text, Text)>,

    /// Underlying failures this one summarizes or rewords.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates an error with no field, params or nested errors.
    pub fn new(code: impl Into<Text>, message: impl Into<Text>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Attaches the input segment this error is about.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Text>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Records a measured value.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, key: impl Into<Text>, value: impl ToString) -> Self {
        self.params.push((key.into(), Cow::Owned(value.to_string())));
        self
    }

    /// Wraps `error` underneath this one.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested_error(mut self, error: ValidationError) -> Self {
        self.nested.push(error);
        self
    }

    /// Looks up a recorded value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v.as_ref()))
    }

    /// "min_length": fewer than `min` characters.
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new("min_length", format!("Must be at least {min} characters"))
            .with_param("min", min)
            .with_param("actual", actual)
    }

    /// "max_length": more than `max` characters.
    pub fn max_length(max: usize, actual: usize) -> Self {
        Self::new("max_length", format!("Must be at most {max} characters"))
            .with_param("max", max)
            .with_param("actual", actual)
    }

    /// "length_range": outside `min..=max` characters.
    pub fn length_range(min: usize, max: usize, actual: usize) -> Self {
        Self::new(
            "length_range",
            format!("Must be between {min} and {max} characters"),
        )
        .with_param("min", min)
        .with_param("max", max)
        .with_param("actual", actual)
    }

    /// "missing_segment": the named part of the input could not be located.
    pub fn missing_segment(segment: impl Into<Text>) -> Self {
        let segment = segment.into();
        Self::new("missing_segment", format!("Missing {segment}")).with_field(segment)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "{field}: ")?;
        }
        write!(f, "{} [{}]", self.message, self.code)?;
        for (i, (k, v)) in self.params.iter().enumerate() {
            let sep = if i == 0 { " (" } else { ", " };
            write!(f, "{sep}{k}={v}")?;
        }
        if !self.params.is_empty() {
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// The failures of one evaluation, in the order the rules ran.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Number of failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when nothing failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The failures, in order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// The failure messages, in order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.message.as_ref())
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    pub fn finish(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Folds the collection into one `"validation_errors"` error.
    pub fn into_single_error(self, message: impl Into<Text>) -> ValidationError {
        ValidationError {
            nested: self.errors,
            ..ValidationError::new("validation_errors", message)
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<T: IntoIterator<Item = ValidationError>>(iter: T) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rule(s) broken", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n  - {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_params() {
        let error = ValidationError::new("no_digit", "Needs a digit");
        assert_eq!(error.to_string(), "Needs a digit [no_digit]");
    }

    #[test]
    fn test_display_with_field_and_params() {
        let error = ValidationError::min_length(8, 3).with_field("password");
        assert_eq!(error.param("min"), Some("8"));
        assert_eq!(error.param("actual"), Some("3"));
        assert_eq!(
            error.to_string(),
            "password: Must be at least 8 characters [min_length] (min=8, actual=3)"
        );
    }

    #[test]
    fn test_missing_segment_sets_field() {
        let error = ValidationError::missing_segment("domain");
        assert_eq!(error.field.as_deref(), Some("domain"));
        assert_eq!(error.message, "Missing domain");
    }

    #[test]
    fn test_collection_keeps_rule_order() {
        let mut errors = ValidationErrors::new();
        errors.add(ValidationError::new("first", "First rule"));
        errors.add(ValidationError::new("second", "Second rule"));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.messages().collect::<Vec<_>>(), ["First rule", "Second rule"]);
        assert_eq!(
            errors.to_string(),
            "2 rule(s) broken\n  - First rule [first]\n  - Second rule [second]"
        );
    }

    #[test]
    fn test_finish() {
        assert!(ValidationErrors::new().finish().is_ok());

        let mut errors = ValidationErrors::new();
        errors.add(ValidationError::new("x", "X"));
        assert_eq!(errors.finish().unwrap_err().len(), 1);
    }

    #[test]
    fn test_single_error_nests_all() {
        let mut errors = ValidationErrors::new();
        errors.add(ValidationError::new("a", "A"));
        errors.add(ValidationError::new("b", "B"));
        let single = errors.into_single_error("2 broken");
        assert_eq!(single.code, "validation_errors");
        assert_eq!(single.nested.len(), 2);
    }

    #[test]
    fn test_static_text_is_borrowed() {
        let error = ValidationError::new("required", "Required");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }
}
