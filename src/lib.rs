//! # Accrue
//!
//! Validation that reports *every* problem, not just the first one.
//!
//! A [`Validated<S, F>`] is either `Valid(S)` or `Invalid(NonEmptyList<F>)`. The
//! failure list of an invalid value is a [`NonEmptyList`], so "invalid with no
//! reasons" cannot be represented.
//!
//! Two composition policies are available and deliberately kept apart:
//!
//! - **Short-circuit** with [`Validated::and_then`]: for checks that depend on an
//!   earlier result. Stops at the first invalid value.
//! - **Accumulate** with [`Validated::zip`], [`Validated::zip_all`],
//!   [`Validated::sequence`] and [`Validated::accumulate`]: for independent checks.
//!   Every failure is kept, in left-to-right order.
//!
//! ## Quick Example
//!
//! ```rust
//! use accrue::{ensure, NonEmptyList, Validated};
//!
//! #[derive(Debug, PartialEq)]
//! enum SignupError {
//!     EmailMissingAt,
//!     PasswordTooShort,
//!     Underage(u8),
//! }
//!
//! fn email(raw: &str) -> Validated<String, SignupError> {
//!     if raw.contains('@') {
//!         Validated::pure(raw.to_string())
//!     } else {
//!         Validated::failed(SignupError::EmailMissingAt)
//!     }
//! }
//!
//! fn password(raw: &str) -> Validated<String, SignupError> {
//!     if raw.len() >= 8 {
//!         Validated::pure(raw.to_string())
//!     } else {
//!         Validated::failed(SignupError::PasswordTooShort)
//!     }
//! }
//!
//! // Independent fields: collect every failure
//! let fields = Validated::zip_all((email("ada.example.com"), password("hunter2")));
//! assert_eq!(
//!     fields,
//!     Validated::Invalid(NonEmptyList::new(
//!         SignupError::EmailMissingAt,
//!         vec![SignupError::PasswordTooShort],
//!     ))
//! );
//!
//! // Several checks over one subject
//! let age = Validated::pure(15u8).accumulate((
//!     ensure(|a: &u8| *a >= 16, |a| SignupError::Underage(*a)),
//! ));
//! assert_eq!(age, Validated::failed(SignupError::Underage(15)));
//! ```
//!
//! ## Features
//!
//! - `async`: `map_async`, `and_then_async`, `or_else_async`
//! - `serde`: `Serialize`/`Deserialize` for [`NonEmptyList`] and [`Validated`]
//! - `tracing`: debug/trace events from [`Validated::accumulate`] and [`Validated::catching`]
//! - `proptest`: `Arbitrary` for [`NonEmptyList`] and [`Validated`]
//! - `try_trait` (nightly): `?` on [`Validated`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![cfg_attr(feature = "try_trait", feature(try_trait_v2))]

pub mod accumulate;
#[cfg(feature = "async")]
pub mod async_ext;
pub mod nonempty;
pub mod semigroup;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod testing;
#[cfg(feature = "try_trait")]
mod try_impl;
pub mod validated;

// Re-exports
pub use accumulate::{ensure, from_result_fn, Ensure, FromResultFn, StepList, Validator};
pub use nonempty::{EmptyListError, NonEmptyList};
pub use semigroup::Semigroup;
pub use validated::{Validated, ZipAll};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::accumulate::{ensure, from_result_fn, StepList, Validator};
    pub use crate::nonempty::NonEmptyList;
    pub use crate::semigroup::Semigroup;
    pub use crate::validated::{Validated, ZipAll};
}
