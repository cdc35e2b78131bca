//! Non-empty list type used to carry validation failures
//!
//! `NonEmptyList<T>` stores its first element separately from the rest, so a
//! zero-length instance cannot be represented at all. Every `Invalid` value in
//! this crate holds one of these, which is how "an invalid value always has at
//! least one failure" is guaranteed by the type system rather than by checks.
//!
//! # Examples
//!
//! ```
//! use accrue::NonEmptyList;
//!
//! let nel = NonEmptyList::new(1, vec![2, 3, 4]);
//! assert_eq!(nel.head(), &1);
//! assert_eq!(nel.tail(), &[2, 3, 4]);
//! assert_eq!(nel.len(), 4);
//!
//! assert!(NonEmptyList::<i32>::from_vec(vec![]).is_none());
//! ```

use std::fmt;

/// A list guaranteed to contain at least one element.
///
/// Equality and hashing are structural: two lists are equal when they have the
/// same elements in the same order.
///
/// ```
/// use accrue::NonEmptyList;
///
/// let a = NonEmptyList::new("x", vec!["y"]);
/// let b = NonEmptyList::from_vec(vec!["x", "y"]).unwrap();
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyList<T> {
    head: T,
    tail: Vec<T>,
}

/// Returned when converting an empty collection into a [`NonEmptyList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyListError;

impl fmt::Display for EmptyListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot build a NonEmptyList from an empty collection")
    }
}

impl std::error::Error for EmptyListError {}

impl<T> NonEmptyList<T> {
    /// Create a list from a head element and a (possibly empty) tail.
    ///
    /// ```
    /// use accrue::NonEmptyList;
    ///
    /// let nel = NonEmptyList::new(1, vec![2, 3]);
    /// assert_eq!(nel.len(), 3);
    /// ```
    pub fn new(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// Create a one-element list.
    pub fn singleton(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    /// Split a `Vec` into head and tail.
    ///
    /// Returns `None` if the vector is empty.
    ///
    /// ```
    /// use accrue::NonEmptyList;
    ///
    /// let nel = NonEmptyList::from_vec(vec![1, 2, 3]).unwrap();
    /// assert_eq!(nel.head(), &1);
    ///
    /// assert!(NonEmptyList::from_vec(Vec::<i32>::new()).is_none());
    /// ```
    pub fn from_vec(vec: Vec<T>) -> Option<Self> {
        Self::from_iter_opt(vec)
    }

    /// Build a list from any iterator, or `None` if it yields nothing.
    ///
    /// `FromIterator` cannot be implemented for `Option<NonEmptyList<T>>`
    /// because of the orphan rules, so this stands in for `collect`.
    ///
    /// ```
    /// use accrue::NonEmptyList;
    ///
    /// let nel = NonEmptyList::from_iter_opt((1..=3).map(|x| x * 10)).unwrap();
    /// assert_eq!(nel.into_vec(), vec![10, 20, 30]);
    /// assert!(NonEmptyList::from_iter_opt(std::iter::empty::<u8>()).is_none());
    /// ```
    pub fn from_iter_opt<I>(iter: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut iter = iter.into_iter();
        let head = iter.next()?;
        Some(Self::new(head, iter.collect()))
    }

    /// Build a list from a `Vec` that the caller knows is non-empty.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    ///
    /// ```should_panic
    /// use accrue::NonEmptyList;
    ///
    /// let _ = NonEmptyList::from_vec_unchecked(Vec::<i32>::new());
    /// ```
    pub fn from_vec_unchecked(vec: Vec<T>) -> Self {
        Self::from_vec(vec).expect("NonEmptyList::from_vec_unchecked called on empty Vec")
    }

    /// First element.
    pub fn head(&self) -> &T {
        &self.head
    }

    /// All elements after the first. May be empty.
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// Last element.
    ///
    /// ```
    /// use accrue::NonEmptyList;
    ///
    /// assert_eq!(NonEmptyList::new(1, vec![2, 3]).last(), &3);
    /// assert_eq!(NonEmptyList::singleton(42).last(), &42);
    /// ```
    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Number of elements. Always at least 1.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`. Present to satisfy `clippy::len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Return a new list with `value` appended at the end.
    ///
    /// ```
    /// use accrue::NonEmptyList;
    ///
    /// let nel = NonEmptyList::singleton(1).append(2).append(3);
    /// assert_eq!(nel.into_vec(), vec![1, 2, 3]);
    /// ```
    pub fn append(mut self, value: T) -> Self {
        self.tail.push(value);
        self
    }

    /// Concatenate two lists.
    ///
    /// The result starts with `self`'s head, followed by `self`'s tail and then
    /// every element of `other` in order. Associative, linear in the combined
    /// length.
    ///
    /// ```
    /// use accrue::NonEmptyList;
    ///
    /// let a = NonEmptyList::new(1, vec![2]);
    /// let b = NonEmptyList::new(3, vec![4]);
    /// assert_eq!(a.concat(b).into_vec(), vec![1, 2, 3, 4]);
    /// ```
    pub fn concat(mut self, other: NonEmptyList<T>) -> Self {
        self.tail.reserve(other.len());
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }

    /// Apply `f` to every element, preserving order and length.
    ///
    /// ```
    /// use accrue::NonEmptyList;
    ///
    /// let doubled = NonEmptyList::new(1, vec![2, 3]).map(|x| x * 2);
    /// assert_eq!(doubled.into_vec(), vec![2, 4, 6]);
    /// ```
    pub fn map<U, F>(self, mut f: F) -> NonEmptyList<U>
    where
        F: FnMut(T) -> U,
    {
        let head = f(self.head);
        let tail = self.tail.into_iter().map(f).collect();
        NonEmptyList::new(head, tail)
    }

    /// Iterate over all elements by reference.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Convert into a plain `Vec`, head first.
    pub fn into_vec(self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.len());
        vec.push(self.head);
        vec.extend(self.tail);
        vec
    }
}

impl<T> TryFrom<Vec<T>> for NonEmptyList<T> {
    type Error = EmptyListError;

    fn try_from(vec: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_vec(vec).ok_or(EmptyListError)
    }
}

impl<T> From<NonEmptyList<T>> for Vec<T> {
    fn from(nel: NonEmptyList<T>) -> Self {
        nel.into_vec()
    }
}

impl<T> IntoIterator for NonEmptyList<T> {
    type Item = T;
    type IntoIter = std::iter::Chain<std::iter::Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyList<T> {
    type Item = &'a T;
    type IntoIter = std::iter::Chain<std::iter::Once<&'a T>, std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(&self.head).chain(self.tail.iter())
    }
}

impl<T> std::ops::Index<usize> for NonEmptyList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        if index == 0 {
            &self.head
        } else {
            &self.tail[index - 1]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_singleton() {
        let nel = NonEmptyList::singleton(42);
        assert_eq!(nel.head(), &42);
        assert_eq!(nel.tail(), &[] as &[i32]);
        assert_eq!(nel.len(), 1);
        assert!(!nel.is_empty());
    }

    #[test]
    fn test_new() {
        let nel = NonEmptyList::new(1, vec![2, 3]);
        assert_eq!(nel.head(), &1);
        assert_eq!(nel.tail(), &[2, 3]);
        assert_eq!(nel.len(), 3);
    }

    #[test]
    fn test_from_vec() {
        let nel = NonEmptyList::from_vec(vec![1, 2, 3]).unwrap();
        assert_eq!(nel.head(), &1);
        assert_eq!(nel.tail(), &[2, 3]);

        assert!(NonEmptyList::from_vec(Vec::<i32>::new()).is_none());
    }

    #[test]
    fn test_try_from_empty_is_error() {
        let result = NonEmptyList::try_from(Vec::<String>::new());
        assert_eq!(result, Err(EmptyListError));
        assert_eq!(
            EmptyListError.to_string(),
            "cannot build a NonEmptyList from an empty collection"
        );
    }

    #[test]
    fn test_try_from_non_empty() {
        let nel = NonEmptyList::try_from(vec!['a', 'b']).unwrap();
        assert_eq!(nel, NonEmptyList::new('a', vec!['b']));
    }

    #[test]
    #[should_panic(expected = "NonEmptyList::from_vec_unchecked called on empty Vec")]
    fn test_from_vec_unchecked_panics() {
        NonEmptyList::from_vec_unchecked(Vec::<i32>::new());
    }

    #[test]
    fn test_append_returns_extended_list() {
        let nel = NonEmptyList::singleton(1).append(2);
        assert_eq!(nel.len(), 2);
        assert_eq!(nel.last(), &2);
    }

    #[test]
    fn test_concat_order() {
        let a = NonEmptyList::new("a1", vec!["a2"]);
        let b = NonEmptyList::new("b1", vec!["b2", "b3"]);
        let joined = a.concat(b);
        assert_eq!(joined.head(), &"a1");
        assert_eq!(joined.tail(), &["a2", "b1", "b2", "b3"]);
    }

    #[test]
    fn test_concat_singletons() {
        let joined = NonEmptyList::singleton(1).concat(NonEmptyList::singleton(1));
        // no deduplication
        assert_eq!(joined.into_vec(), vec![1, 1]);
    }

    #[test]
    fn test_map_preserves_length_and_order() {
        let nel = NonEmptyList::new(3, vec![1, 2]);
        let mapped = nel.map(|x| x.to_string());
        assert_eq!(mapped.into_vec(), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_iter_and_into_iter() {
        let nel = NonEmptyList::new(1, vec![2, 3]);
        let sum: i32 = nel.iter().sum();
        assert_eq!(sum, 6);

        let by_ref: Vec<_> = (&nel).into_iter().copied().collect();
        assert_eq!(by_ref, vec![1, 2, 3]);

        let owned: Vec<_> = nel.into_iter().collect();
        assert_eq!(owned, vec![1, 2, 3]);
    }

    #[test]
    fn test_into_vec_conversion() {
        let vec: Vec<_> = NonEmptyList::new(1, vec![2]).into();
        assert_eq!(vec, vec![1, 2]);
    }

    #[test]
    fn test_index() {
        let nel = NonEmptyList::new(1, vec![2, 3]);
        assert_eq!(nel[0], 1);
        assert_eq!(nel[2], 3);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds() {
        let nel = NonEmptyList::singleton(42);
        let _ = nel[1];
    }

    #[test]
    fn test_structural_hash() {
        let mut set = HashSet::new();
        set.insert(NonEmptyList::new(1, vec![2]));
        set.insert(NonEmptyList::from_vec(vec![1, 2]).unwrap());
        set.insert(NonEmptyList::new(2, vec![1]));
        assert_eq!(set.len(), 2);
    }
}
