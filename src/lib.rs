#![doc = include_str!("../README.md")]
#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod table;

pub mod deque;
pub mod error;

#[doc(inline)]
pub use deque::Deque;

#[doc(inline)]
pub use error::Error;

pub use deque::{IntoIter, Iter, DEFAULT_BUCKET_LEN, MIN_BUCKET_LEN};
