//! Asynchronous transforms for [`Validated`]
//!
//! Available with the `async` feature. These mirror [`Validated::map`],
//! [`Validated::and_then`] and [`Validated::or_else`] for transforms that need to
//! `.await`.
//!
//! Evaluation is strictly sequential: the variant is inspected first, and the
//! transform is only created and awaited when it applies. Dropping the returned
//! future before it completes cancels the transform; no partially applied
//! `Validated` is ever produced.
//!
//! ```
//! use accrue::Validated;
//!
//! # tokio_test::block_on(async {
//! let v = Validated::<u32, String>::pure(7)
//!     .and_then_async(|id| async move {
//!         if id == 7 { Validated::pure("alice") } else { Validated::failed(format!("no user {id}")) }
//!     })
//!     .await;
//! assert_eq!(v, Validated::Valid("alice"));
//! # });
//! ```

use std::future::Future;

use crate::{NonEmptyList, Validated};

impl<S, F> Validated<S, F> {
    /// Transform the valid value with an async function.
    ///
    /// `f` is not called for `Invalid` values.
    pub async fn map_async<S2, G, Fut>(self, f: G) -> Validated<S2, F>
    where
        G: FnOnce(S) -> Fut,
        Fut: Future<Output = S2>,
    {
        match self {
            Validated::Valid(value) => Validated::Valid(f(value).await),
            Validated::Invalid(failures) => Validated::Invalid(failures),
        }
    }

    /// Chain a dependent async validation.
    ///
    /// Short-circuits exactly like [`Validated::and_then`]: when `self` is invalid
    /// `f` is never called and the failures are returned unchanged.
    pub async fn and_then_async<S2, G, Fut>(self, f: G) -> Validated<S2, F>
    where
        G: FnOnce(S) -> Fut,
        Fut: Future<Output = Validated<S2, F>>,
    {
        match self {
            Validated::Valid(value) => f(value).await,
            Validated::Invalid(failures) => Validated::Invalid(failures),
        }
    }

    /// Async bind over the failure channel.
    ///
    /// ```
    /// use accrue::Validated;
    ///
    /// # tokio_test::block_on(async {
    /// let v = Validated::<u16, &str>::failed("no port configured")
    ///     .or_else_async(|_| async { Validated::<_, String>::pure(8080) })
    ///     .await;
    /// assert_eq!(v, Validated::Valid(8080));
    /// # });
    /// ```
    pub async fn or_else_async<F2, G, Fut>(self, f: G) -> Validated<S, F2>
    where
        G: FnOnce(NonEmptyList<F>) -> Fut,
        Fut: Future<Output = Validated<S, F2>>,
    {
        match self {
            Validated::Valid(value) => Validated::Valid(value),
            Validated::Invalid(failures) => f(failures).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_map_async_on_valid() {
        let v = Validated::<_, String>::pure(21).map_async(|x| async move { x * 2 }).await;
        assert_eq!(v, Validated::Valid(42));
    }

    #[tokio::test]
    async fn test_map_async_skips_invalid() {
        let calls = AtomicUsize::new(0);
        let v = Validated::<i32, _>::failed("e")
            .map_async(|x| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move { x }
            })
            .await;
        assert_eq!(v, Validated::failed("e"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_and_then_async_short_circuits() {
        let calls = AtomicUsize::new(0);
        let failures = NonEmptyList::new("first", vec!["second"]);
        let v = Validated::<i32, _>::invalid(failures.clone())
            .and_then_async(|x| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move { Validated::<i32, &str>::pure(x) }
            })
            .await;
        assert_eq!(v, Validated::Invalid(failures));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_and_then_async_chains_sequentially() {
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));
        let first = {
            let order = Arc::clone(&order);
            move |x: i32| async move {
                order.lock().unwrap().push("first");
                Validated::<_, String>::pure(x + 1)
            }
        };
        let second = {
            let order = Arc::clone(&order);
            move |x: i32| async move {
                tokio::time::sleep(Duration::from_millis(1)).await;
                order.lock().unwrap().push("second");
                Validated::<_, String>::pure(x * 10)
            }
        };

        let v = Validated::pure(1)
            .and_then_async(first)
            .await
            .and_then_async(second)
            .await;
        assert_eq!(v, Validated::Valid(20));
        assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_or_else_async_remaps() {
        let v = Validated::<i32, _>::invalid(NonEmptyList::new(1, vec![2]))
            .or_else_async(|errs| async move {
                Validated::<i32, _>::invalid(errs.map(|e| e.to_string()))
            })
            .await;
        assert_eq!(
            v,
            Validated::Invalid(NonEmptyList::new("1".to_string(), vec!["2".to_string()]))
        );
    }

    #[test]
    fn test_dropped_future_never_completes_transform() {
        let finished = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&finished);
        let pending = Validated::<_, String>::pure(5).map_async(move |x| async move {
            futures::future::pending::<()>().await;
            flag.store(true, Ordering::SeqCst);
            x
        });

        // one poll, then dropped
        assert!(pending.now_or_never().is_none());
        assert!(!finished.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_timeout_cancels_pending_transform() {
        let slow = Validated::<_, String>::pure(1).and_then_async(|x| async move {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Validated::pure(x)
        });
        let outcome = tokio::time::timeout(Duration::from_millis(10), slow).await;
        assert!(outcome.is_err());
    }
}
