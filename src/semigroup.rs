//! Associative combination of failure collections
//!
//! `Semigroup` is the seam the applicative algebra uses to join failures: when two
//! invalid values are zipped, their failure lists are combined left-to-right with
//! [`Semigroup::combine`]. The only law is associativity:
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use accrue::{NonEmptyList, Semigroup};
//!
//! let left = NonEmptyList::new("e1", vec!["e2"]);
//! let right = NonEmptyList::singleton("e3");
//! assert_eq!(left.combine(right).into_vec(), vec!["e1", "e2", "e3"]);
//! ```

use crate::NonEmptyList;

/// A type that supports an associative binary operation
///
/// `combine` takes both operands by value. Clone first if the originals are
/// still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    ///
    /// ```
    /// use accrue::Semigroup;
    ///
    /// assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
    /// ```
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

// Concatenation, self first
impl<T> Semigroup for NonEmptyList<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self.concat(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_semigroup() {
        let v1 = vec![1, 2, 3];
        let v2 = vec![4, 5, 6];
        assert_eq!(v1.combine(v2), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_vec_semigroup_empty() {
        let v1: Vec<i32> = vec![];
        assert_eq!(v1.combine(vec![1, 2]), vec![1, 2]);
    }

    #[test]
    fn test_string_semigroup() {
        let s1 = "Hello, ".to_string();
        assert_eq!(s1.combine("World!".to_string()), "Hello, World!");
    }

    #[test]
    fn test_nonempty_semigroup_keeps_order() {
        let a = NonEmptyList::new(1, vec![2]);
        let b = NonEmptyList::new(3, vec![4, 5]);
        assert_eq!(a.combine(b).into_vec(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_nonempty_associativity() {
        let a = NonEmptyList::new("a", vec!["b"]);
        let b = NonEmptyList::singleton("c");
        let c = NonEmptyList::new("d", vec!["e", "f"]);

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));

        assert_eq!(left, right);
    }

    #[test]
    fn test_string_associativity() {
        let a = "hello".to_string();
        let b = " ".to_string();
        let c = "world".to_string();

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));

        assert_eq!(left, right);
    }
}
