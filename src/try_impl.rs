//! `?` operator support (nightly, `try_trait` feature)
//!
//! `?` on a [`Validated`] short-circuits like [`Validated::and_then`]: the first
//! invalid value ends the function with its failures. `?` on a `Result<_, F>`
//! inside a function returning `Validated<_, F>` turns the error into a single
//! failure.

use std::convert::Infallible;
use std::ops::{ControlFlow, FromResidual, Try};

use crate::Validated;

impl<S, F> Try for Validated<S, F> {
    type Output = S;
    type Residual = Validated<Infallible, F>;

    #[inline]
    fn from_output(output: S) -> Self {
        Validated::Valid(output)
    }

    #[inline]
    fn branch(self) -> ControlFlow<Self::Residual, S> {
        match self {
            Validated::Valid(value) => ControlFlow::Continue(value),
            Validated::Invalid(failures) => ControlFlow::Break(Validated::Invalid(failures)),
        }
    }
}

impl<S, F> FromResidual<Validated<Infallible, F>> for Validated<S, F> {
    #[inline]
    fn from_residual(residual: Validated<Infallible, F>) -> Self {
        match residual {
            Validated::Invalid(failures) => Validated::Invalid(failures),
            Validated::Valid(never) => match never {},
        }
    }
}

impl<S, F> FromResidual<Result<Infallible, F>> for Validated<S, F> {
    #[inline]
    fn from_residual(residual: Result<Infallible, F>) -> Self {
        match residual {
            Err(error) => Validated::failed(error),
            Ok(never) => match never {},
        }
    }
}
