//! The low-level primitive behind [`Deque`](crate::Deque): an indirection table of
//! fixed-length buckets that grows by doubling toward either end.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::iter;

/// The length of a freshly created [`BucketTable`].
pub(crate) const INITIAL_TABLE_LEN: usize = 4;

/// A fixed-length run of slots, the unit of storage.
///
/// Empty slots hold `None`.
pub(crate) struct Bucket<T> {
    slots: Box<[Option<T>]>,
}

impl<T> Bucket<T> {
    fn new(len: usize) -> Bucket<T> {
        Bucket {
            slots: iter::repeat_with(|| None).take(len).collect(),
        }
    }
}

/// The end of the table a cursor ran off of.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    Front,
    Back,
}

/// The location of a slot in the table.
///
/// When used as a cursor, `slot` may equal the bucket length, meaning the
/// position has not yet been wrapped into the following bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Position {
    pub(crate) bucket: usize,
    pub(crate) slot: usize,
}

impl Position {
    #[inline]
    pub(crate) const fn new(bucket: usize, slot: usize) -> Position {
        Position { bucket, slot }
    }
}

/// Resolves the element `index` slots after `first` to its position in the table.
///
/// `first` is the slot holding the first element, which may be the unwrapped
/// position one past the end of a bucket. The result is always wrapped.
#[inline]
pub(crate) const fn resolve(index: usize, first: Position, bucket_len: usize) -> Position {
    let absolute = first.slot + index;

    Position {
        bucket: first.bucket + absolute / bucket_len,
        slot: absolute % bucket_len,
    }
}

/// A resizable table of lazily allocated buckets.
///
/// Buckets are referenced by their index in the table. Growing the table
/// moves the boxed buckets, never their contents, so a bucket's slots stay
/// where they were allocated for as long as the table owns them.
pub(crate) struct BucketTable<T> {
    buckets: Vec<Option<Bucket<T>>>,
    bucket_len: usize,
}

impl<T> BucketTable<T> {
    /// Creates a table of [`INITIAL_TABLE_LEN`] unallocated buckets.
    pub(crate) fn new(bucket_len: usize) -> BucketTable<T> {
        debug_assert!(bucket_len > 0);

        BucketTable {
            buckets: iter::repeat_with(|| None).take(INITIAL_TABLE_LEN).collect(),
            bucket_len,
        }
    }

    /// Returns the number of buckets the table can reference.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of slots in every bucket.
    #[inline]
    pub(crate) fn bucket_len(&self) -> usize {
        self.bucket_len
    }

    /// Returns the number of buckets that have been allocated.
    #[cfg(test)]
    pub(crate) fn allocated(&self) -> usize {
        self.buckets.iter().filter(|bucket| bucket.is_some()).count()
    }

    /// Doubles the length of the table, adding unallocated buckets toward `direction`.
    ///
    /// Returns the distance every existing bucket was shifted by, which is
    /// the old length when growing toward the front and zero otherwise.
    pub(crate) fn grow(&mut self, direction: Direction) -> usize {
        let old_len = self.buckets.len();
        let Some(new_len) = old_len.checked_mul(2) else {
            panic!("capacity overflow");
        };

        let shift = match direction {
            Direction::Front => {
                let mut buckets = Vec::with_capacity(new_len);
                buckets.resize_with(old_len, || None);
                buckets.append(&mut self.buckets);
                self.buckets = buckets;
                old_len
            }
            Direction::Back => {
                self.buckets.reserve_exact(old_len);
                self.buckets.resize_with(new_len, || None);
                0
            }
        };

        _trace!(?direction, old_len, new_len, "grew bucket table");

        shift
    }

    /// Returns a reference to the element at `position`, if there is one.
    #[inline]
    pub(crate) fn get(&self, position: Position) -> Option<&T> {
        self.buckets
            .get(position.bucket)?
            .as_ref()?
            .slots
            .get(position.slot)?
            .as_ref()
    }

    /// Returns a mutable reference to the element at `position`, if there is one.
    #[inline]
    pub(crate) fn get_mut(&mut self, position: Position) -> Option<&mut T> {
        self.buckets
            .get_mut(position.bucket)?
            .as_mut()?
            .slots
            .get_mut(position.slot)?
            .as_mut()
    }

    /// Stores `value` at `position`, allocating its bucket if necessary.
    ///
    /// # Panics
    ///
    /// Panics if `position` lies outside of the table.
    #[inline]
    pub(crate) fn write(&mut self, position: Position, value: T) {
        let bucket_len = self.bucket_len;
        let bucket = self.buckets[position.bucket].get_or_insert_with(|| Bucket::new(bucket_len));

        let previous = bucket.slots[position.slot].replace(value);
        debug_assert!(previous.is_none(), "overwrote an occupied slot");
    }

    /// Moves the element out of `position`, leaving the slot empty.
    #[inline]
    pub(crate) fn take(&mut self, position: Position) -> Option<T> {
        self.buckets
            .get_mut(position.bucket)?
            .as_mut()?
            .slots
            .get_mut(position.slot)?
            .take()
    }
}

#[cfg(test)]
mod tests {
    use super::{resolve, BucketTable, Direction, Position, INITIAL_TABLE_LEN};
    use core::cell::Cell;

    std::thread_local!(static COUNTER: Cell<usize> = const { Cell::new(0) });

    struct Helper;
    impl Drop for Helper {
        fn drop(&mut self) {
            COUNTER.with(|c| c.set(c.get() + 1));
        }
    }

    fn drops_with(f: impl FnOnce()) -> usize {
        COUNTER.with(|c| c.set(0));
        f();
        COUNTER.with(|c| c.get())
    }

    #[test]
    fn new() {
        let table = <BucketTable<usize>>::new(8);
        assert_eq!(table.len(), INITIAL_TABLE_LEN);
        assert_eq!(table.bucket_len(), 8);
        assert_eq!(table.allocated(), 0);
    }

    #[test]
    fn resolve_within_bucket() {
        assert_eq!(resolve(0, Position::new(1, 3), 8), Position::new(1, 3));
        assert_eq!(resolve(4, Position::new(1, 3), 8), Position::new(1, 7));
    }

    #[test]
    fn resolve_across_buckets() {
        assert_eq!(resolve(5, Position::new(1, 3), 8), Position::new(2, 0));
        assert_eq!(resolve(21, Position::new(1, 3), 8), Position::new(4, 0));
        assert_eq!(resolve(20, Position::new(0, 0), 4), Position::new(5, 0));
    }

    #[test]
    fn resolve_unwrapped_first() {
        // The first element sits at the start of the bucket after `first.bucket`.
        assert_eq!(resolve(0, Position::new(1, 8), 8), Position::new(2, 0));
        assert_eq!(resolve(9, Position::new(1, 8), 8), Position::new(3, 1));
    }

    #[test]
    fn write_allocates_lazily() {
        let mut table = BucketTable::new(8);
        table.write(Position::new(2, 5), 'a');
        assert_eq!(table.allocated(), 1);

        table.write(Position::new(2, 6), 'b');
        assert_eq!(table.allocated(), 1);

        assert_eq!(table.get(Position::new(2, 5)), Some(&'a'));
        assert_eq!(table.get(Position::new(2, 4)), None);
        assert_eq!(table.get(Position::new(0, 0)), None);
        assert_eq!(table.get(Position::new(9, 0)), None);

        *table.get_mut(Position::new(2, 6)).unwrap() = 'c';
        assert_eq!(table.take(Position::new(2, 6)), Some('c'));
        assert_eq!(table.take(Position::new(2, 6)), None);
    }

    #[test]
    fn grow_back_keeps_positions() {
        let mut table = BucketTable::new(8);
        table.write(Position::new(3, 7), 1);

        assert_eq!(table.grow(Direction::Back), 0);
        assert_eq!(table.len(), INITIAL_TABLE_LEN * 2);
        assert_eq!(table.get(Position::new(3, 7)), Some(&1));
        assert_eq!(table.allocated(), 1);

        table.write(Position::new(4, 0), 2);
        assert_eq!(table.get(Position::new(4, 0)), Some(&2));
    }

    #[test]
    fn grow_front_shifts_positions() {
        let mut table = BucketTable::new(8);
        table.write(Position::new(0, 0), 1);
        table.write(Position::new(1, 3), 2);

        let shift = table.grow(Direction::Front);
        assert_eq!(shift, INITIAL_TABLE_LEN);
        assert_eq!(table.len(), INITIAL_TABLE_LEN * 2);
        assert_eq!(table.allocated(), 2);

        assert_eq!(table.get(Position::new(shift, 0)), Some(&1));
        assert_eq!(table.get(Position::new(shift + 1, 3)), Some(&2));
        assert_eq!(table.get(Position::new(0, 0)), None);
    }

    #[test]
    fn grow_does_not_move_slots() {
        let mut table = BucketTable::new(8);
        table.write(Position::new(1, 0), 7);
        let before: *const i32 = table.get(Position::new(1, 0)).unwrap();

        let shift = table.grow(Direction::Front);
        table.grow(Direction::Back);

        let after: *const i32 = table.get(Position::new(shift + 1, 0)).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn drops_remaining() {
        let mut table = BucketTable::new(8);
        table.write(Position::new(0, 0), Helper);
        table.write(Position::new(0, 1), Helper);
        table.write(Position::new(3, 7), Helper);

        assert_eq!(drops_with(|| drop(table.take(Position::new(0, 1)))), 1);
        assert_eq!(drops_with(|| drop(table)), 2);
    }
}
