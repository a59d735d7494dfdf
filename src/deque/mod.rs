//! A double-ended queue built from fixed-length buckets.
//!
//! See [the crate documentation](crate) and [`Deque`] for details.

use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;
use core::ops::{Index, IndexMut};

use crate::error::Error;

mod raw;

pub use raw::{DEFAULT_BUCKET_LEN, MIN_BUCKET_LEN};

/// Creates a [`Deque`] containing the given elements.
///
/// `deque!` allows `Deque`s to be defined with the same syntax as array expressions.
/// There are two forms of this macro:
///
/// - Create a [`Deque`] containing a given list of elements:
///
/// ```
/// let deque = bucketed::deque![1, 2, 3];
/// assert_eq!(deque[0], 1);
/// assert_eq!(deque[1], 2);
/// assert_eq!(deque[2], 3);
/// ```
///
/// - Create a [`Deque`] from a given element and size:
///
/// ```
/// let deque = bucketed::deque![1; 3];
/// assert_eq!(deque, [1, 1, 1]);
/// ```
#[macro_export]
macro_rules! deque {
    () => {
        $crate::Deque::new()
    };
    ($elem:expr; $n:expr) => {{
        let n = $n;
        let mut deque = $crate::Deque::new();
        let iter = ::core::iter::Iterator::take(::core::iter::repeat($elem), n);
        ::core::iter::Extend::extend(&mut deque, iter);
        deque
    }};
    ($($x:expr),+ $(,)?) => (
        <$crate::Deque<_> as ::core::iter::FromIterator<_>>::from_iter([$($x),+])
    );
}

/// A double-ended queue built from fixed-length buckets.
///
/// Elements live in buckets of [`bucket_len`](Deque::bucket_len) slots,
/// referenced from a table that doubles toward whichever end runs out of
/// room. Growing the table never moves the elements themselves, and any
/// element can be reached in constant time through its index.
///
/// See [the crate documentation](crate) for details.
pub struct Deque<T> {
    raw: raw::Deque<T>,
}

impl<T> Default for Deque<T> {
    fn default() -> Deque<T> {
        Deque::new()
    }
}

impl<T> Deque<T> {
    /// Constructs a new, empty `Deque<T>` with buckets of
    /// [`DEFAULT_BUCKET_LEN`] slots.
    ///
    /// No buckets are allocated until the first element is pushed.
    ///
    /// # Examples
    ///
    /// ```
    /// let deque: bucketed::Deque<i32> = bucketed::Deque::new();
    /// assert_eq!(deque.bucket_len(), bucketed::DEFAULT_BUCKET_LEN);
    /// ```
    #[inline]
    pub fn new() -> Deque<T> {
        Deque::with_bucket_len(DEFAULT_BUCKET_LEN)
    }

    /// Constructs a new, empty `Deque<T>` with buckets of `bucket_len` slots.
    ///
    /// Lengths below [`MIN_BUCKET_LEN`] are raised to it.
    ///
    /// # Examples
    ///
    /// ```
    /// let deque: bucketed::Deque<i32> = bucketed::Deque::with_bucket_len(64);
    /// assert_eq!(deque.bucket_len(), 64);
    ///
    /// let deque: bucketed::Deque<i32> = bucketed::Deque::with_bucket_len(1);
    /// assert_eq!(deque.bucket_len(), bucketed::MIN_BUCKET_LEN);
    /// ```
    #[inline]
    pub fn with_bucket_len(bucket_len: usize) -> Deque<T> {
        Deque {
            raw: raw::Deque::with_bucket_len(bucket_len),
        }
    }

    /// Prepends an element to the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut deque = bucketed::deque![2, 3];
    /// deque.push_front(1);
    /// assert_eq!(deque, [1, 2, 3]);
    /// ```
    #[inline]
    pub fn push_front(&mut self, value: T) {
        self.raw.push_front(value)
    }

    /// Appends an element to the back of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut deque = bucketed::deque![1, 2];
    /// deque.push_back(3);
    /// assert_eq!(deque, [1, 2, 3]);
    /// ```
    #[inline]
    pub fn push_back(&mut self, value: T) {
        self.raw.push_back(value)
    }

    /// Removes the first element and returns it.
    ///
    /// Returns [`Error::EmptyStructure`] if the deque is empty, in which
    /// case the deque is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucketed::Error;
    ///
    /// let mut deque = bucketed::deque![1, 2];
    /// assert_eq!(deque.pop_front(), Ok(1));
    /// assert_eq!(deque.pop_front(), Ok(2));
    /// assert_eq!(deque.pop_front(), Err(Error::EmptyStructure));
    /// ```
    #[inline]
    pub fn pop_front(&mut self) -> Result<T, Error> {
        self.raw.pop_front()
    }

    /// Removes the last element and returns it.
    ///
    /// Returns [`Error::EmptyStructure`] if the deque is empty, in which
    /// case the deque is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucketed::Error;
    ///
    /// let mut deque = bucketed::deque![1, 2];
    /// assert_eq!(deque.pop_back(), Ok(2));
    /// assert_eq!(deque.pop_back(), Ok(1));
    /// assert_eq!(deque.pop_back(), Err(Error::EmptyStructure));
    /// ```
    #[inline]
    pub fn pop_back(&mut self) -> Result<T, Error> {
        self.raw.pop_back()
    }

    /// Returns a reference to the first element, or `None` if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut deque = bucketed::Deque::new();
    /// assert_eq!(deque.front(), None);
    ///
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.raw.get(0)
    }

    /// Returns a mutable reference to the first element, or `None` if the
    /// deque is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.raw.get_mut(0)
    }

    /// Returns a reference to the last element, or `None` if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut deque = bucketed::Deque::new();
    /// assert_eq!(deque.back(), None);
    ///
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.back(), Some(&2));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.raw.get(self.len().checked_sub(1)?)
    }

    /// Returns a mutable reference to the last element, or `None` if the
    /// deque is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let last = self.len().checked_sub(1)?;
        self.raw.get_mut(last)
    }

    /// Returns a reference to the element at the given index.
    ///
    /// Unlike [`get`](Deque::get), an out-of-range index is reported as an
    /// [`Error::IndexOutOfRange`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bucketed::Error;
    ///
    /// let deque = bucketed::deque![10, 40, 30];
    /// assert_eq!(deque.at(1), Ok(&40));
    /// assert_eq!(deque.at(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        self.raw.at(index)
    }

    /// Returns a reference to the element at the given index.
    ///
    /// # Examples
    ///
    /// ```
    /// let deque = bucketed::deque![10, 40, 30];
    /// assert_eq!(Some(&40), deque.get(1));
    /// assert_eq!(None, deque.get(3));
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.raw.get(index)
    }

    /// Returns a mutable reference to the element at the given index.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut deque = bucketed::deque![10, 40, 30];
    /// assert_eq!(Some(&mut 40), deque.get_mut(1));
    /// assert_eq!(None, deque.get_mut(3));
    /// ```
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.raw.get_mut(index)
    }

    /// Returns the number of elements in the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut deque = bucketed::Deque::new();
    /// assert_eq!(deque.len(), 0);
    /// deque.push_back(1);
    /// deque.push_front(2);
    /// assert_eq!(deque.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the deque contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut deque = bucketed::Deque::new();
    /// assert!(deque.is_empty());
    ///
    /// deque.push_back(1);
    /// assert!(!deque.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of slots in every bucket.
    #[inline]
    pub fn bucket_len(&self) -> usize {
        self.raw.bucket_len()
    }

    /// Returns the number of buckets the bucket table can currently reference.
    ///
    /// The table starts with room for four buckets and doubles every time
    /// either end runs out of room.
    #[inline]
    pub fn table_len(&self) -> usize {
        self.raw.table_len()
    }

    /// Returns an iterator over the deque, from front to back.
    ///
    /// # Examples
    ///
    /// ```
    /// let deque = bucketed::deque![1, 2, 4];
    /// let mut iterator = deque.iter();
    ///
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), Some(&4));
    /// assert_eq!(iterator.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            raw: &self.raw,
            head: 0,
            tail: self.len(),
        }
    }

    /// Copies the elements of the deque, front to back, into a [`Vec`].
    ///
    /// # Examples
    ///
    /// ```
    /// let mut deque = bucketed::deque![2];
    /// deque.push_front(1);
    /// deque.push_back(3);
    /// assert_eq!(deque.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Clears the deque, removing all values.
    ///
    /// Every bucket is released and the deque returns to the state it was
    /// created in, keeping its bucket length.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut deque = bucketed::Deque::with_bucket_len(16);
    /// deque.push_back(1);
    /// deque.push_back(2);
    ///
    /// deque.clear();
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.bucket_len(), 16);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.raw.clear();
    }
}

impl<T> Index<usize> for Deque<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.raw[index]
    }
}

impl<T> IndexMut<usize> for Deque<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.raw[index]
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { raw: self.raw }
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator that moves out of a deque.
///
/// This struct is created by the `into_iter` method on [`Deque`]
/// (provided by the [`IntoIterator`] trait).
pub struct IntoIter<T> {
    raw: raw::Deque<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.raw.pop_front().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.raw.len(), Some(self.raw.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.raw.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.raw.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

/// An iterator over the elements of a [`Deque<T>`].
///
/// The deque cannot be modified while the iterator is alive. Iteration can
/// be restarted by calling [`Deque::iter`] again, or resumed from a
/// [`clone`](Clone::clone) of the iterator.
///
/// See [`Deque::iter`] for details.
pub struct Iter<'a, T> {
    raw: &'a raw::Deque<T>,
    head: usize,
    tail: usize,
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Iter<'a, T> {
        Iter {
            raw: self.raw,
            head: self.head,
            tail: self.tail,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }

        let item = self.raw.get(self.head);
        self.head += 1;
        item
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tail - self.head;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }

        self.tail -= 1;
        self.raw.get(self.tail)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Contents<'a, I>(&'a I);

        impl<I> fmt::Debug for Contents<'_, I>
        where
            I: Iterator + Clone,
            I::Item: fmt::Debug,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.clone()).finish()
            }
        }

        f.debug_tuple("Iter").field(&Contents(self)).finish()
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Deque::new();
        deque.extend(iter);
        deque
    }
}

impl<T> Extend<T> for Deque<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T: Clone> Clone for Deque<T> {
    fn clone(&self) -> Deque<T> {
        let mut deque = Deque::with_bucket_len(self.bucket_len());
        deque.extend(self.iter().cloned());
        deque
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<A, T> PartialEq<A> for Deque<T>
where
    A: AsRef<[T]>,
    T: PartialEq,
{
    fn eq(&self, other: &A) -> bool {
        let other = other.as_ref();
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Deque<T> {}
