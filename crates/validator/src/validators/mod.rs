//! Built-in validators
//!
//! - **Length**: [`MinLength`], [`MaxLength`], [`LengthRange`], [`NotEmpty`]
//! - **Character classes**: [`ContainsLowercase`], [`ContainsUppercase`],
//!   [`ContainsDigit`], [`ContainsAnyOf`], [`ContainsChar`], [`CharCount`]
//!
//! # Examples
//!
//! ```rust
//! use formcheck_validator::prelude::*;
//!
//! let strong = min_length(8).and(contains_digit()).and(contains_uppercase());
//! assert!(strong.validate("Hunter22").is_ok());
//! assert!(strong.validate("hunter22").is_err());
//! ```

pub mod length;
pub mod pattern;

pub use length::{
    LengthRange, MaxLength, MinLength, NotEmpty, length_range, max_length, min_length, not_empty,
};

pub use pattern::{
    CharCount, ContainsAnyOf, ContainsChar, ContainsDigit, ContainsLowercase, ContainsUppercase,
    char_count, contains_any_of, contains_char, contains_digit, contains_lowercase,
    contains_uppercase,
};
