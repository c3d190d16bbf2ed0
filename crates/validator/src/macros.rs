//! Declarative helpers for single-check validators.
//!
//! [`validator!`] generates the struct, its `Validate` impl and a factory
//! function; [`compose!`] chains validators with `and`.

/// Declares a validator: the struct, its `Validate` impl and a factory fn.
///
/// The rule block returns `true` when the input passes; the error block
/// builds the [`ValidationError`](crate::foundation::ValidationError) for a
/// failing input. Field structs always derive `Debug` and `Clone` and get a
/// `new` taking every field unless a `new(...)` block is given.
///
/// Unit validator:
/// ```rust
/// use formcheck_validator::foundation::{Validate, ValidationError};
///
/// formcheck_validator::validator! {
///     pub NotBlank for str;
///     rule(input) { !input.trim().is_empty() }
///     error(input) { ValidationError::new("not_blank", "Must not be blank") }
///     fn not_blank();
/// }
///
/// assert!(not_blank().validate("  ").is_err());
/// ```
///
/// With fields:
/// ```rust
/// use formcheck_validator::foundation::{Validate, ValidationError};
///
/// formcheck_validator::validator! {
///     #[derive(Copy, PartialEq, Eq)]
///     pub StartsWith { ch: char } for str;
///     rule(self, input) { input.starts_with(self.ch) }
///     error(self, input) { ValidationError::new("starts_with", format!("Must start with {}", self.ch)) }
///     fn starts_with(ch: char);
/// }
///
/// assert!(starts_with('#').validate("#tag").is_ok());
/// ```
#[macro_export]
macro_rules! validator {
    (@impl $name:ident, $input:ty, $s:ident, $inp:ident, $einp:ident, $rule:block, $err:block) => {
        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$s, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    return Ok(());
                }
                let $einp = $inp;
                Err($err)
            }
        }
    };

    // unit struct
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        $crate::validator!(@impl $name, $input, self, $inp, $einp, $rule, $err);

        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };

    // fields with a hand-written `new`
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($s:ident, $inp:ident) $rule:block
        error($s2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::validator!(@impl $name, $input, $s, $inp, $einp, $rule, $err);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // fields, `new` takes them all in order
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($s:ident, $inp:ident) $rule:block
        error($s2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($s, $inp) $rule
            error($s2, $einp) $err
            new($($field: $fty),+) { Self { $($field),+ } }
            fn $factory($($farg: $faty),*);
        }
    };
}

/// Chains validators with `and`; the first failure wins.
///
/// ```rust
/// use formcheck_validator::prelude::*;
///
/// let domain = formcheck_validator::compose![not_empty(), contains_char('.')];
/// assert!(domain.validate("example.com").is_ok());
/// assert!(domain.validate("localhost").is_err());
/// ```
#[macro_export]
macro_rules! compose {
    ($first:expr $(,)?) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.and($rest))+
    };
}
