//! Validation of a borrowed slice of a string.
//!
//! Where a struct validator would project a field, string rules often need to
//! project a *segment*: the local part of an address, the text after the last
//! dot, and so on. [`Segment`] pairs an extractor with an inner validator;
//! when the extractor finds nothing, validation fails with a
//! `missing_segment` error instead of running the inner validator.
//!
//! # Examples
//!
//! ```rust
//! use formcheck_validator::combinators::segment;
//! use formcheck_validator::prelude::*;
//!
//! fn before_colon(s: &str) -> Option<&str> {
//!     s.split_once(':').map(|(head, _)| head)
//! }
//!
//! let validator = segment("key", before_colon, min_length(1));
//! assert!(validator.validate("a:b").is_ok());
//! assert!(validator.validate(":b").is_err());
//! assert!(validator.validate("ab").is_err()); // no colon at all
//! ```

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Function that borrows a segment out of its input, if present.
pub type Extractor = fn(&str) -> Option<&str>;

/// Validates the segment of a string selected by an extractor.
#[derive(Debug, Clone)]
pub struct Segment<V> {
    name: Cow<'static, str>,
    extractor: Extractor,
    validator: V,
}

impl<V> Segment<V> {
    /// Creates a new segment validator.
    pub fn new(name: impl Into<Cow<'static, str>>, extractor: Extractor, validator: V) -> Self {
        Self {
            name: name.into(),
            extractor,
            validator,
        }
    }

    /// Returns the segment name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<V> Validate for Segment<V>
where
    V: Validate<Input = str>,
{
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let Some(part) = (self.extractor)(input) else {
            return Err(ValidationError::missing_segment(self.name.clone()));
        };

        self.validator.validate(part).map_err(|e| {
            if e.field.is_some() {
                e
            } else {
                e.with_field(self.name.clone())
            }
        })
    }
}

/// Creates a [`Segment`] combinator.
pub fn segment<V>(name: impl Into<Cow<'static, str>>, extractor: Extractor, validator: V) -> Segment<V>
where
    V: Validate<Input = str>,
{
    Segment::new(name, extractor, validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{max_length, min_length};

    fn after_slash(s: &str) -> Option<&str> {
        s.split_once('/').map(|(_, tail)| tail)
    }

    #[test]
    fn test_segment_passes_inner() {
        let validator = segment("path", after_slash, min_length(2));
        assert!(validator.validate("a/bc").is_ok());
    }

    #[test]
    fn test_segment_tags_error_with_name() {
        let validator = segment("path", after_slash, max_length(1));
        let error = validator.validate("a/bc").unwrap_err();
        assert_eq!(error.code, "max_length");
        assert_eq!(error.field.as_deref(), Some("path"));
    }

    #[test]
    fn test_missing_segment_skips_inner() {
        let validator = segment("path", after_slash, max_length(100));
        let error = validator.validate("no-slash").unwrap_err();
        assert_eq!(error.code, "missing_segment");
        assert_eq!(validator.name(), "path");
    }
}
