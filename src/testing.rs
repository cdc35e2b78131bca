//! Test helpers for code that returns [`Validated`](crate::Validated)
//!
//! Assertion macros that print the unexpected side on failure, and (with the
//! `proptest` feature) `Arbitrary` impls for [`NonEmptyList`](crate::NonEmptyList)
//! and [`Validated`](crate::Validated).
//!
//! ```rust
//! use accrue::{assert_failures, assert_invalid, assert_valid, Validated};
//!
//! assert_valid!(Validated::<_, String>::pure(42));
//! assert_invalid!(Validated::<i32, _>::failed("error"));
//! assert_failures!(
//!     Validated::<i32, _>::failed("e1").zip(Validated::<i32, _>::failed("e2")),
//!     vec!["e1", "e2"]
//! );
//! ```

/// Assert that a validated value is `Valid`.
///
/// Panics with the failure list otherwise.
#[macro_export]
macro_rules! assert_valid {
    ($validated:expr) => {
        match $validated {
            $crate::Validated::Valid(_) => {}
            $crate::Validated::Invalid(failures) => {
                panic!("Expected Valid, got Invalid: {:?}", failures);
            }
        }
    };
}

/// Assert that a validated value is `Invalid`.
#[macro_export]
macro_rules! assert_invalid {
    ($validated:expr) => {
        match $validated {
            $crate::Validated::Invalid(_) => {}
            $crate::Validated::Valid(v) => {
                panic!("Expected Invalid, got Valid: {:?}", v);
            }
        }
    };
}

/// Assert that a validated value is `Invalid` with exactly these failures, in
/// this order.
///
/// The expected failures are given as a `Vec`.
#[macro_export]
macro_rules! assert_failures {
    ($validated:expr, $expected:expr) => {
        match $validated {
            $crate::Validated::Invalid(failures) => {
                assert_eq!(failures.into_vec(), $expected);
            }
            $crate::Validated::Valid(v) => {
                panic!(
                    "Expected Invalid with failures {:?}, got Valid: {:?}",
                    $expected, v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use crate::{NonEmptyList, Validated};
#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T> Arbitrary for NonEmptyList<T>
where
    T: Arbitrary + 'static,
    T::Parameters: Clone,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
        (
            any_with::<T>(params.clone()),
            prop::collection::vec(any_with::<T>(params), 0..8),
        )
            .prop_map(|(head, tail)| NonEmptyList::new(head, tail))
            .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<S, F> Arbitrary for Validated<S, F>
where
    S: Arbitrary + 'static,
    F: Arbitrary + 'static,
    F::Parameters: Clone,
{
    type Parameters = (S::Parameters, F::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (s_params, f_params) = args;
        prop_oneof![
            any_with::<S>(s_params).prop_map(Validated::Valid),
            any_with::<NonEmptyList<F>>(f_params).prop_map(Validated::Invalid),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::Validated;

    #[test]
    fn assert_valid_macro() {
        assert_valid!(Validated::<_, String>::pure(42));
    }

    #[test]
    fn assert_invalid_macro() {
        assert_invalid!(Validated::<i32, _>::failed("error".to_string()));
    }

    #[test]
    fn assert_failures_macro() {
        let v = Validated::<i32, _>::failed("error1").zip(Validated::<i32, _>::failed("error2"));
        assert_failures!(v, vec!["error1", "error2"]);
    }

    #[test]
    #[should_panic(expected = "Expected Valid, got Invalid")]
    fn assert_valid_panics_on_invalid() {
        assert_valid!(Validated::<i32, _>::failed("error".to_string()));
    }

    #[test]
    #[should_panic(expected = "Expected Invalid, got Valid")]
    fn assert_invalid_panics_on_valid() {
        assert_invalid!(Validated::<_, String>::pure(42));
    }

    #[test]
    #[should_panic(expected = "Expected Invalid with failures")]
    fn assert_failures_panics_on_valid() {
        assert_failures!(Validated::<_, String>::pure(42), vec!["error".to_string()]);
    }

    #[test]
    #[should_panic]
    fn assert_failures_panics_on_wrong_order() {
        let v = Validated::<i32, _>::failed("b").zip(Validated::<i32, _>::failed("a"));
        assert_failures!(v, vec!["a", "b"]);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::{NonEmptyList, Validated};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn nonempty_arbitrary_is_never_empty(nel in any::<NonEmptyList<u8>>()) {
                prop_assert!(nel.len() >= 1);
                prop_assert_eq!(nel.len(), nel.into_vec().len());
            }

            #[test]
            fn validated_arbitrary_generates_both_variants(
                v in any::<Validated<i32, String>>()
            ) {
                match &v {
                    Validated::Valid(_) => prop_assert!(v.is_valid()),
                    Validated::Invalid(_) => prop_assert!(v.is_invalid()),
                }
            }
        }
    }
}
