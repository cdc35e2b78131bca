//! Validated values with two composition policies
//!
//! [`Validated`] is either `Valid(value)` or `Invalid(failures)`, where the failures
//! are a [`NonEmptyList`]. Two ways of combining validated values coexist and must
//! not be confused:
//!
//! - **Short-circuit** ([`Validated::and_then`]): stops at the first invalid value.
//!   Use it when a later check cannot run without an earlier result.
//! - **Accumulate** ([`Validated::zip`] and friends): evaluates every operand and
//!   concatenates all failures, left operand first. Use it for independent checks.
//!
//! # Examples
//!
//! ## Short-circuit
//!
//! ```
//! use accrue::Validated;
//!
//! let parsed: Validated<i32, &str> = Validated::failed("not a number");
//! let checked = parsed.and_then(|n| {
//!     if n > 0 { Validated::pure(n) } else { Validated::failed("not positive") }
//! });
//! assert_eq!(checked, Validated::failed("not a number"));
//! ```
//!
//! ## Accumulate
//!
//! ```
//! use accrue::{NonEmptyList, Validated};
//!
//! let name = Validated::<&str, _>::failed("name is empty");
//! let age = Validated::<u8, _>::failed("age is missing");
//!
//! assert_eq!(
//!     name.zip(age),
//!     Validated::Invalid(NonEmptyList::new("name is empty", vec!["age is missing"]))
//! );
//! ```
//!
//! ## Tuples
//!
//! ```
//! use accrue::Validated;
//!
//! let result = Validated::<_, String>::zip_all((
//!     Validated::pure(1),
//!     Validated::pure("two"),
//!     Validated::pure(3.0),
//! ));
//! assert_eq!(result, Validated::Valid((1, "two", 3.0)));
//! ```

use crate::{NonEmptyList, Semigroup};

/// Either a successful value or a non-empty list of failures.
///
/// The failure list of `Invalid` can never be empty: there is no way to build a
/// [`NonEmptyList`] without an element. Every operation consumes its inputs and
/// returns a new value. Reading the outcome is done with `match`:
///
/// ```
/// use accrue::Validated;
///
/// let v = Validated::<u32, String>::pure(7);
/// match v {
///     Validated::Valid(n) => assert_eq!(n, 7),
///     Validated::Invalid(failures) => panic!("unexpected {:?}", failures),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validated<S, F> {
    /// The checked value
    Valid(S),
    /// Every failure found, in the order it was found
    Invalid(NonEmptyList<F>),
}

impl<S, F> Validated<S, F> {
    /// Wrap a value as valid.
    #[inline]
    pub fn pure(value: S) -> Self {
        Validated::Valid(value)
    }

    /// Wrap a single failure as invalid.
    ///
    /// ```
    /// use accrue::{NonEmptyList, Validated};
    ///
    /// let v = Validated::<i32, _>::failed("boom");
    /// assert_eq!(v, Validated::Invalid(NonEmptyList::singleton("boom")));
    /// ```
    #[inline]
    pub fn failed(error: F) -> Self {
        Validated::Invalid(NonEmptyList::singleton(error))
    }

    /// Wrap an existing failure list as invalid.
    #[inline]
    pub fn invalid(failures: NonEmptyList<F>) -> Self {
        Validated::Invalid(failures)
    }

    /// Lift a `Result`: `Ok` becomes valid, `Err` becomes a single failure.
    ///
    /// ```
    /// use accrue::Validated;
    ///
    /// let v = Validated::from_result("42".parse::<i32>());
    /// assert_eq!(v, Validated::Valid(42));
    /// ```
    #[inline]
    pub fn from_result(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Validated::Valid(value),
            Err(error) => Validated::failed(error),
        }
    }

    /// Run a fallible block and capture its outcome.
    ///
    /// An `Err` returned by the block becomes a single failure. The error is
    /// never propagated further.
    ///
    /// ```
    /// use accrue::Validated;
    ///
    /// let v = Validated::catching(|| {
    ///     let port: u16 = "80800".parse()?;
    ///     Ok::<_, std::num::ParseIntError>(port)
    /// });
    /// assert!(v.is_invalid());
    /// ```
    pub fn catching<B>(block: B) -> Self
    where
        B: FnOnce() -> Result<S, F>,
    {
        match block() {
            Ok(value) => Validated::Valid(value),
            Err(error) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("catching: block returned an error");
                Validated::failed(error)
            }
        }
    }

    /// Convert into a `Result` carrying the whole failure list.
    ///
    /// ```
    /// use accrue::{NonEmptyList, Validated};
    ///
    /// let original: Result<i32, NonEmptyList<&str>> = Err(NonEmptyList::new("a", vec!["b"]));
    /// let back = Validated::from(original.clone()).into_result();
    /// assert_eq!(back, original);
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<S, NonEmptyList<F>> {
        match self {
            Validated::Valid(value) => Ok(value),
            Validated::Invalid(failures) => Err(failures),
        }
    }

    /// `true` for `Valid`.
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Validated::Valid(_))
    }

    /// `true` for `Invalid`.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Validated::Invalid(_))
    }

    /// Transform the valid value. Invalid values pass through unchanged.
    ///
    /// ```
    /// use accrue::Validated;
    ///
    /// assert_eq!(Validated::<_, ()>::pure(5).map(|x| x * 2), Validated::Valid(10));
    /// ```
    #[inline]
    pub fn map<S2, G>(self, f: G) -> Validated<S2, F>
    where
        G: FnOnce(S) -> S2,
    {
        match self {
            Validated::Valid(value) => Validated::Valid(f(value)),
            Validated::Invalid(failures) => Validated::Invalid(failures),
        }
    }

    /// Transform the failure list as a whole, e.g. to re-tag or reorder it.
    ///
    /// ```
    /// use accrue::{NonEmptyList, Validated};
    ///
    /// let v = Validated::<(), _>::invalid(NonEmptyList::new(1, vec![2, 3]));
    /// let reversed = v.map_failures(|errs| {
    ///     let mut all = errs.into_vec();
    ///     all.reverse();
    ///     NonEmptyList::from_vec_unchecked(all)
    /// });
    /// assert_eq!(reversed, Validated::Invalid(NonEmptyList::new(3, vec![2, 1])));
    /// ```
    #[inline]
    pub fn map_failures<F2, G>(self, f: G) -> Validated<S, F2>
    where
        G: FnOnce(NonEmptyList<F>) -> NonEmptyList<F2>,
    {
        match self {
            Validated::Valid(value) => Validated::Valid(value),
            Validated::Invalid(failures) => Validated::Invalid(f(failures)),
        }
    }

    /// Transform each failure individually.
    ///
    /// ```
    /// use accrue::Validated;
    ///
    /// let v = Validated::<(), _>::failed(404).map_each_failure(|code| format!("E{code}"));
    /// assert_eq!(v, Validated::failed("E404".to_string()));
    /// ```
    #[inline]
    pub fn map_each_failure<F2, G>(self, f: G) -> Validated<S, F2>
    where
        G: FnMut(F) -> F2,
    {
        self.map_failures(|failures| failures.map(f))
    }

    /// Chain a dependent validation (monadic bind).
    ///
    /// `f` runs only when `self` is valid. If `self` is invalid its failures are
    /// returned untouched and `f` is never called, so only the first failure set
    /// encountered is reported.
    ///
    /// ```
    /// use accrue::Validated;
    ///
    /// let v = Validated::<_, &str>::pure(5)
    ///     .and_then(|x| if x > 0 { Validated::pure(x * 2) } else { Validated::failed("neg") });
    /// assert_eq!(v, Validated::Valid(10));
    /// ```
    #[inline]
    pub fn and_then<S2, G>(self, f: G) -> Validated<S2, F>
    where
        G: FnOnce(S) -> Validated<S2, F>,
    {
        match self {
            Validated::Valid(value) => f(value),
            Validated::Invalid(failures) => Validated::Invalid(failures),
        }
    }

    /// Bind over the failure channel.
    ///
    /// `f` runs only when `self` is invalid and may recover to a valid value or
    /// produce failures of a different type.
    ///
    /// ```
    /// use accrue::Validated;
    ///
    /// let recovered = Validated::<u16, &str>::failed("missing port")
    ///     .or_else(|_| Validated::<_, String>::pure(8080));
    /// assert_eq!(recovered, Validated::Valid(8080));
    /// ```
    #[inline]
    pub fn or_else<F2, G>(self, f: G) -> Validated<S, F2>
    where
        G: FnOnce(NonEmptyList<F>) -> Validated<S, F2>,
    {
        match self {
            Validated::Valid(value) => Validated::Valid(value),
            Validated::Invalid(failures) => f(failures),
        }
    }

    /// Pair two validated values, accumulating failures.
    ///
    /// | self | other | result |
    /// |---|---|---|
    /// | `Valid(a)` | `Valid(b)` | `Valid((a, b))` |
    /// | `Valid` | `Invalid(eb)` | `Invalid(eb)` |
    /// | `Invalid(ea)` | `Valid` | `Invalid(ea)` |
    /// | `Invalid(ea)` | `Invalid(eb)` | `Invalid(ea ++ eb)` |
    ///
    /// Both operands are already evaluated; there is no short-circuit and no
    /// deduplication.
    ///
    /// ```
    /// use accrue::{NonEmptyList, Validated};
    ///
    /// let a = Validated::<i32, _>::failed("e1");
    /// let b = Validated::<i32, _>::failed("e2");
    /// assert_eq!(a.zip(b), Validated::Invalid(NonEmptyList::new("e1", vec!["e2"])));
    /// ```
    pub fn zip<S2>(self, other: Validated<S2, F>) -> Validated<(S, S2), F> {
        match (self, other) {
            (Validated::Valid(a), Validated::Valid(b)) => Validated::Valid((a, b)),
            (Validated::Invalid(ea), Validated::Invalid(eb)) => Validated::Invalid(ea.combine(eb)),
            (Validated::Invalid(ea), Validated::Valid(_)) => Validated::Invalid(ea),
            (Validated::Valid(_), Validated::Invalid(eb)) => Validated::Invalid(eb),
        }
    }

    /// [`zip`](Validated::zip), then fuse the pair with `combine`.
    ///
    /// ```
    /// use accrue::Validated;
    ///
    /// let sum = Validated::<_, ()>::pure(2).zip_with(Validated::pure(3), |a, b| a + b);
    /// assert_eq!(sum, Validated::Valid(5));
    /// ```
    #[inline]
    pub fn zip_with<S2, R, G>(self, other: Validated<S2, F>, combine: G) -> Validated<R, F>
    where
        G: FnOnce(S, S2) -> R,
    {
        self.zip(other).map(|(a, b)| combine(a, b))
    }

    /// Zip with a plain `Result`, lifting it first.
    ///
    /// ```
    /// use accrue::Validated;
    ///
    /// let name = Validated::<_, String>::pure("ada");
    /// let age: Result<u8, String> = Err("age missing".into());
    /// assert!(name.zip_result(age).is_invalid());
    /// ```
    #[inline]
    pub fn zip_result<S2>(self, other: Result<S2, F>) -> Validated<(S, S2), F> {
        self.zip(Validated::from_result(other))
    }

    /// Zip with a plain `Result` and fuse the pair with `combine`.
    #[inline]
    pub fn zip_result_with<S2, R, G>(self, other: Result<S2, F>, combine: G) -> Validated<R, F>
    where
        G: FnOnce(S, S2) -> R,
    {
        self.zip_with(Validated::from_result(other), combine)
    }

    /// Combine a tuple of validated values, accumulating every failure.
    ///
    /// Failures are concatenated left to right in tuple order. Works with tuples of
    /// 1 to 8 elements, each with its own success type.
    ///
    /// ```
    /// use accrue::{NonEmptyList, Validated};
    ///
    /// let result = Validated::<(i32, i32, i32), _>::zip_all((
    ///     Validated::failed("first"),
    ///     Validated::pure(2),
    ///     Validated::failed("third"),
    /// ));
    /// assert_eq!(result, Validated::Invalid(NonEmptyList::new("first", vec!["third"])));
    /// ```
    pub fn zip_all<V>(validations: V) -> Self
    where
        V: ZipAll<F, Output = S>,
    {
        validations.zip_all()
    }
}

impl<S, F> Validated<Vec<S>, F> {
    /// Fold a runtime-sized collection of validated values.
    ///
    /// Every element is consumed. Returns all values in order when every element
    /// is valid, otherwise every failure in order. An empty input is `Valid(vec![])`.
    ///
    /// ```
    /// use accrue::{NonEmptyList, Validated};
    ///
    /// let inputs = vec![Validated::pure(1), Validated::failed("x"), Validated::failed("y")];
    /// assert_eq!(
    ///     Validated::sequence(inputs),
    ///     Validated::Invalid(NonEmptyList::new("x", vec!["y"]))
    /// );
    /// ```
    pub fn sequence<I>(validations: I) -> Self
    where
        I: IntoIterator<Item = Validated<S, F>>,
    {
        validations
            .into_iter()
            .fold(Validated::Valid(Vec::new()), |acc, next| {
                acc.zip_with(next, |mut values, value| {
                    values.push(value);
                    values
                })
            })
    }
}

impl<S, F> From<Result<S, NonEmptyList<F>>> for Validated<S, F> {
    fn from(result: Result<S, NonEmptyList<F>>) -> Self {
        match result {
            Ok(value) => Validated::Valid(value),
            Err(failures) => Validated::Invalid(failures),
        }
    }
}

impl<S, F> From<Validated<S, F>> for Result<S, NonEmptyList<F>> {
    fn from(validated: Validated<S, F>) -> Self {
        validated.into_result()
    }
}

/// Combine a tuple of validated values that share a failure type.
///
/// Implemented for tuples of 1 to 8 [`Validated`] values. See
/// [`Validated::zip_all`].
pub trait ZipAll<F> {
    /// Tuple of the success types
    type Output;

    /// Zip every element, accumulating failures left to right.
    fn zip_all(self) -> Validated<Self::Output, F>;
}

// a.zip(b.zip(c.zip(d))): failures still come out in a, b, c, d order
macro_rules! nested_zip {
    ($last:expr) => { $last };
    ($head:expr, $($rest:expr),+) => { $head.zip(nested_zip!($($rest),+)) };
}

macro_rules! nested_pat {
    ($last:ident) => { $last };
    ($head:ident, $($rest:ident),+) => { ($head, nested_pat!($($rest),+)) };
}

macro_rules! impl_zip_all {
    ($($T:ident),+) => {
        impl<F, $($T),+> ZipAll<F> for ($(Validated<$T, F>,)+) {
            type Output = ($($T,)+);

            #[allow(non_snake_case)]
            fn zip_all(self) -> Validated<Self::Output, F> {
                let ($($T,)+) = self;
                nested_zip!($($T),+).map(|nested| {
                    let nested_pat!($($T),+) = nested;
                    ($($T,)+)
                })
            }
        }
    };
}

impl_zip_all!(T1);
impl_zip_all!(T1, T2);
impl_zip_all!(T1, T2, T3);
impl_zip_all!(T1, T2, T3, T4);
impl_zip_all!(T1, T2, T3, T4, T5);
impl_zip_all!(T1, T2, T3, T4, T5, T6);
impl_zip_all!(T1, T2, T3, T4, T5, T6, T7);
impl_zip_all!(T1, T2, T3, T4, T5, T6, T7, T8);
