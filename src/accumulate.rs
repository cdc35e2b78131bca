//! Running a list of independent checks against one subject
//!
//! [`Validated::accumulate`] takes an already-validated subject and an ordered list
//! of validator steps. Every step sees the subject by reference; every failure from
//! every step is collected, in declared order. When all steps pass the subject is
//! returned untouched.
//!
//! The subject's own validity is a precondition: if it is already `Invalid`, no
//! step runs and the original failures are returned as they are. Plain
//! [`Validated::zip`] has no such gate.
//!
//! Steps can be:
//! - closures `Fn(&V) -> Validated<U, F>` (the success value `U` is discarded),
//! - closures returning `Result<U, F>`, wrapped with [`from_result_fn`],
//! - predicate checks built with [`ensure`].
//!
//! They are passed as a tuple (mixed step types, up to 8), an array or a `Vec`.
//!
//! # Example
//!
//! ```
//! use accrue::{ensure, from_result_fn, NonEmptyList, Validated};
//!
//! let result = Validated::<u32, String>::pure(42).accumulate((
//!     ensure(|n: &u32| *n > 0, |_| "must be positive".to_string()),
//!     |n: &u32| if n % 2 == 1 { Validated::pure(()) } else { Validated::failed(format!("{n} is even")) },
//!     from_result_fn(|n: &u32| if *n < 10 { Ok(()) } else { Err(format!("{n} is too large")) }),
//! ));
//!
//! assert_eq!(
//!     result,
//!     Validated::Invalid(NonEmptyList::new(
//!         "42 is even".to_string(),
//!         vec!["42 is too large".to_string()],
//!     ))
//! );
//! ```

use crate::Validated;

/// One check in an accumulation.
///
/// Implemented for every closure `Fn(&V) -> Validated<U, F>`, and by the
/// adapters [`FromResultFn`] and [`Ensure`].
pub trait Validator<V, F> {
    /// Success payload of this step. Discarded by [`Validated::accumulate`].
    type Output;

    /// Check `subject`.
    fn validate(&self, subject: &V) -> Validated<Self::Output, F>;
}

impl<V, F, U, C> Validator<V, F> for C
where
    C: Fn(&V) -> Validated<U, F>,
{
    type Output = U;

    fn validate(&self, subject: &V) -> Validated<U, F> {
        self(subject)
    }
}

/// Step built from a closure returning a `Result`.
///
/// Created by [`from_result_fn`].
pub struct FromResultFn<C> {
    f: C,
}

impl<C> std::fmt::Debug for FromResultFn<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromResultFn")
            .field("f", &"<function>")
            .finish()
    }
}

impl<V, F, U, C> Validator<V, F> for FromResultFn<C>
where
    C: Fn(&V) -> Result<U, F>,
{
    type Output = U;

    fn validate(&self, subject: &V) -> Validated<U, F> {
        Validated::from_result((self.f)(subject))
    }
}

/// Use a closure returning `Result<U, F>` as a validator step.
///
/// This is the shape produced by validators that close over external
/// configuration:
///
/// ```
/// use accrue::{from_result_fn, Validated};
///
/// struct Limits { max_len: usize }
/// let limits = Limits { max_len: 5 };
///
/// let max_len = from_result_fn(move |s: &String| {
///     if s.len() <= limits.max_len { Ok(()) } else { Err("too long") }
/// });
///
/// let v = Validated::pure("abcdefg".to_string()).accumulate((max_len,));
/// assert_eq!(v, Validated::failed("too long"));
/// ```
pub fn from_result_fn<V, F, U, C>(f: C) -> FromResultFn<C>
where
    C: Fn(&V) -> Result<U, F>,
{
    FromResultFn { f }
}

/// Step that fails with a computed failure when a predicate does not hold.
///
/// Created by [`ensure`].
pub struct Ensure<P, E> {
    predicate: P,
    on_failure: E,
}

impl<P, E> std::fmt::Debug for Ensure<P, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ensure")
            .field("predicate", &"<function>")
            .field("on_failure", &"<function>")
            .finish()
    }
}

impl<V, F, P, E> Validator<V, F> for Ensure<P, E>
where
    P: Fn(&V) -> bool,
    E: Fn(&V) -> F,
{
    type Output = ();

    fn validate(&self, subject: &V) -> Validated<(), F> {
        if (self.predicate)(subject) {
            Validated::Valid(())
        } else {
            Validated::failed((self.on_failure)(subject))
        }
    }
}

/// Check `predicate`; if it fails, report `on_failure(subject)`.
///
/// ```
/// use accrue::{ensure, Validated};
///
/// let adult = ensure(|age: &u8| *age >= 18, |age| format!("{age} is under 18"));
/// let v = Validated::pure(16u8).accumulate([adult]);
/// assert_eq!(v, Validated::failed("16 is under 18".to_string()));
/// ```
pub fn ensure<V, F, P, E>(predicate: P, on_failure: E) -> Ensure<P, E>
where
    P: Fn(&V) -> bool,
    E: Fn(&V) -> F,
{
    Ensure {
        predicate,
        on_failure,
    }
}

/// An ordered collection of validator steps over the same subject.
///
/// Implemented for `()` (no steps), tuples of 1 to 8 validators of any mix of
/// types, arrays and `Vec`s. Steps run in declared order.
pub trait StepList<V, F> {
    /// Number of steps.
    fn step_count(&self) -> usize;

    /// Run every step against `subject`, concatenating failures in order.
    fn run_steps(self, subject: &V) -> Validated<(), F>;
}

// Fold one more step into the running result, keeping the left value.
#[inline]
fn fold_step<V, F, S>(acc: Validated<(), F>, step: &S, subject: &V) -> Validated<(), F>
where
    S: Validator<V, F> + ?Sized,
{
    acc.zip_with(step.validate(subject), |kept, _| kept)
}

impl<V, F> StepList<V, F> for () {
    fn step_count(&self) -> usize {
        0
    }

    fn run_steps(self, _subject: &V) -> Validated<(), F> {
        Validated::Valid(())
    }
}

impl<V, F, S> StepList<V, F> for Vec<S>
where
    S: Validator<V, F>,
{
    fn step_count(&self) -> usize {
        self.len()
    }

    fn run_steps(self, subject: &V) -> Validated<(), F> {
        self.iter()
            .fold(Validated::Valid(()), |acc, step| fold_step(acc, step, subject))
    }
}

impl<V, F, S, const N: usize> StepList<V, F> for [S; N]
where
    S: Validator<V, F>,
{
    fn step_count(&self) -> usize {
        N
    }

    fn run_steps(self, subject: &V) -> Validated<(), F> {
        self.iter()
            .fold(Validated::Valid(()), |acc, step| fold_step(acc, step, subject))
    }
}

macro_rules! count {
    () => { 0usize };
    ($head:ident $($rest:ident)*) => { 1usize + count!($($rest)*) };
}

macro_rules! impl_step_list {
    ($($S:ident),+) => {
        impl<V, F, $($S),+> StepList<V, F> for ($($S,)+)
        where
            $($S: Validator<V, F>,)+
        {
            fn step_count(&self) -> usize {
                count!($($S)+)
            }

            #[allow(non_snake_case)]
            fn run_steps(self, subject: &V) -> Validated<(), F> {
                let ($($S,)+) = self;
                let acc = Validated::Valid(());
                $(let acc = fold_step(acc, &$S, subject);)+
                acc
            }
        }
    };
}

impl_step_list!(S1);
impl_step_list!(S1, S2);
impl_step_list!(S1, S2, S3);
impl_step_list!(S1, S2, S3, S4);
impl_step_list!(S1, S2, S3, S4, S5);
impl_step_list!(S1, S2, S3, S4, S5, S6);
impl_step_list!(S1, S2, S3, S4, S5, S6, S7);
impl_step_list!(S1, S2, S3, S4, S5, S6, S7, S8);

impl<V, F> Validated<V, F> {
    /// Run every step against the valid subject and collect all failures.
    ///
    /// - `Invalid` input: returned unchanged, no step is evaluated.
    /// - every step valid: `Valid(subject)`.
    /// - otherwise: `Invalid` with the failures of every failing step, in declared
    ///   order, without deduplication.
    ///
    /// An empty step list returns `self` unchanged.
    ///
    /// ```
    /// use accrue::{NonEmptyList, Validated};
    ///
    /// let steps: Vec<Box<dyn Fn(&i32) -> Validated<(), &'static str>>> = vec![
    ///     Box::new(|_: &i32| Validated::pure(())),
    ///     Box::new(|_: &i32| Validated::failed("E1")),
    ///     Box::new(|_: &i32| Validated::failed("E2")),
    /// ];
    /// let v = Validated::pure(42).accumulate(steps);
    /// assert_eq!(v, Validated::Invalid(NonEmptyList::new("E1", vec!["E2"])));
    /// ```
    pub fn accumulate<L>(self, steps: L) -> Self
    where
        L: StepList<V, F>,
    {
        let subject = match self {
            Validated::Valid(subject) => subject,
            invalid @ Validated::Invalid(_) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    steps = steps.step_count(),
                    "accumulate: subject already invalid, skipping steps"
                );
                return invalid;
            }
        };

        #[cfg(feature = "tracing")]
        let step_count = steps.step_count();

        let checked = steps.run_steps(&subject);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            steps = step_count,
            failures = match &checked {
                Validated::Valid(()) => 0,
                Validated::Invalid(failures) => failures.len(),
            },
            "accumulate finished"
        );

        checked.map(|()| subject)
    }
}
