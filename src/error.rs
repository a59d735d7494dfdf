//! Errors returned by [`Deque`](crate::Deque) operations.

/// An error returned by a fallible [`Deque`](crate::Deque) operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An element was popped from an empty deque.
    #[error("deque is empty")]
    EmptyStructure,

    /// An element was requested at a position past the end of the deque.
    #[error("index {index} out of range for deque of length {len}")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The length of the deque at the time of the request.
        len: usize,
    },
}
