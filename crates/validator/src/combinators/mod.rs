//! Validator combinators
//!
//! - [`And`]: both validators must pass (short-circuits)
//! - [`Or`]: either validator may pass
//! - [`Not`]: inverts a validator
//! - [`WithMessage`]: replace the user-facing message of a validator
//! - [`Segment`]: validate a borrowed slice of the input

pub mod and;
pub mod message;
pub mod not;
pub mod or;
pub mod segment;

pub use and::{And, and};
pub use message::{WithMessage, with_message};
pub use not::{Not, not};
pub use or::{Or, or};
pub use segment::{Extractor, Segment, segment};
