use core::ops::{Index, IndexMut};

use crate::error::Error;
use crate::table::{resolve, BucketTable, Direction, Position};

/// The bucket length used by [`Deque::new`](crate::Deque::new).
pub const DEFAULT_BUCKET_LEN: usize = 8;

/// The smallest bucket length a deque will be created with.
pub const MIN_BUCKET_LEN: usize = 8;

/// A double-ended queue stored in a table of fixed-length buckets.
pub struct Deque<T> {
    table: BucketTable<T>,

    /// The slot holding the first element.
    ///
    /// The front sentinel is the slot immediately before this one. Storing the
    /// slot after the sentinel keeps the cursor from going negative; `slot` may
    /// equal the bucket length, in which case the first element lives at the
    /// start of the next bucket.
    front: Position,

    /// The slot immediately after the last element.
    ///
    /// `slot` may equal the bucket length, in which case the next push wraps
    /// into the following bucket.
    back: Position,

    /// The number of occupied slots between the cursors.
    len: usize,
}

impl<T> Deque<T> {
    /// Create an empty deque with buckets of at least `bucket_len` slots.
    pub fn with_bucket_len(bucket_len: usize) -> Deque<T> {
        let bucket_len = bucket_len.max(MIN_BUCKET_LEN);
        let table = BucketTable::new(bucket_len);

        // Park the cursors back to back in the middle of the table.
        let mid = table.len() / 2;

        Deque {
            front: Position::new(mid - 1, bucket_len),
            back: Position::new(mid, 0),
            table,
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn bucket_len(&self) -> usize {
        self.table.bucket_len()
    }

    #[inline]
    pub fn table_len(&self) -> usize {
        self.table.len()
    }

    /// Returns the number of buckets that have been allocated.
    #[cfg(test)]
    pub fn allocated(&self) -> usize {
        self.table.allocated()
    }

    /// Prepends an element to the deque.
    #[inline]
    pub fn push_front(&mut self, value: T) {
        if self.front.slot == 0 {
            if self.front.bucket == 0 {
                self.grow(Direction::Front);
            }

            self.front.bucket -= 1;
            self.front.slot = self.table.bucket_len();
        }

        self.front.slot -= 1;
        self.table.write(self.front, value);
        self.len += 1;
    }

    /// Appends an element to the deque.
    #[inline]
    pub fn push_back(&mut self, value: T) {
        if self.back.slot == self.table.bucket_len() {
            if self.back.bucket + 1 == self.table.len() {
                self.grow(Direction::Back);
            }

            self.back.bucket += 1;
            self.back.slot = 0;
        }

        self.table.write(self.back, value);
        self.back.slot += 1;
        self.len += 1;
    }

    /// Removes the first element of the deque.
    #[inline]
    pub fn pop_front(&mut self) -> Result<T, Error> {
        if self.len == 0 {
            return Err(Error::EmptyStructure);
        }

        if self.front.slot == self.table.bucket_len() {
            self.front.bucket += 1;
            self.front.slot = 0;
        }

        let Some(value) = self.table.take(self.front) else {
            unreachable!("occupied slot {:?} is empty", self.front);
        };

        self.front.slot += 1;
        self.len -= 1;
        Ok(value)
    }

    /// Removes the last element of the deque.
    #[inline]
    pub fn pop_back(&mut self) -> Result<T, Error> {
        if self.len == 0 {
            return Err(Error::EmptyStructure);
        }

        if self.back.slot == 0 {
            self.back.bucket -= 1;
            self.back.slot = self.table.bucket_len();
        }

        self.back.slot -= 1;

        let Some(value) = self.table.take(self.back) else {
            unreachable!("occupied slot {:?} is empty", self.back);
        };

        self.len -= 1;
        Ok(value)
    }

    /// Maps a logical index to its position in the table.
    ///
    /// Only depends on the front cursor.
    #[inline]
    fn position(&self, index: usize) -> Option<Position> {
        if index >= self.len {
            return None;
        }

        Some(resolve(index, self.front, self.table.bucket_len()))
    }

    /// Returns a reference to the element at the given index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.table.get(self.position(index)?)
    }

    /// Returns a mutable reference to the element at the given index.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let position = self.position(index)?;
        self.table.get_mut(position)
    }

    /// Returns a reference to the element at the given index, or an error
    /// if it is out of range.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        self.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.len,
        })
    }

    /// Drops every element and resets the deque to its freshly created state.
    ///
    /// The bucket length the deque was created with is kept.
    pub fn clear(&mut self) {
        _debug!(
            len = self.len,
            table_len = self.table.len(),
            "clearing deque"
        );

        *self = Deque::with_bucket_len(self.table.bucket_len());
    }

    /// Doubles the bucket table toward `direction`, keeping both cursors on
    /// the elements they pointed to.
    #[cold]
    fn grow(&mut self, direction: Direction) {
        let shift = self.table.grow(direction);
        self.front.bucket += shift;
        self.back.bucket += shift;
    }
}

impl<T> Index<usize> for Deque<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Some(value) => value,
            None => out_of_range(index, self.len),
        }
    }
}

impl<T> IndexMut<usize> for Deque<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.len;

        match self.get_mut(index) {
            Some(value) => value,
            None => out_of_range(index, len),
        }
    }
}

#[cold]
#[inline(never)]
fn out_of_range(index: usize, len: usize) -> ! {
    panic!("{}", Error::IndexOutOfRange { index, len });
}
