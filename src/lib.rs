//! This crate provides a doubly-linked list with owned nodes, implemented as a
//! ring, and a first-in-first-out [`Queue`] built on top of it.
//!
//! The [`List`] allows inserting and removing elements at both ends in
//! constant time. In compromise, accessing or mutating elements by index
//! takes *O*(*n*) time, walking from whichever end is nearer.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use ring_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! list.push_front(0);
//! list.push_back(5);
//! assert_eq!(list.to_string(), "(0, 1, 2, 3, 4, 5)");
//!
//! // Signed indices count from the back.
//! assert_eq!(list[-1], 5);
//! assert_eq!(list[-6], 0);
//! assert!(list.get(6).is_err());
//!
//! let mut cursor = list.cursor_mut(3).unwrap();
//! assert_eq!(cursor.remove(), Ok(3)); // becomes [0, 1, 2, 4, 5], points to 4
//! assert_eq!(cursor.current(), Ok(&4));
//! assert_eq!(Vec::from_iter(list), vec![0, 1, 2, 4, 5]);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────┐
//!          ↓                                                         │
//!    ╔═══════════╗           ╔═══════════╗                ╔═══════════╗
//!    ║   next    ║ ────────→ ║   next    ║ ──→ ┄┄ ──────→ ║   next    ║ ─┘
//!    ╟───────────╢           ╟───────────╢                ╟───────────╢
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←── ┄┄ ←────── ║   prev    ║
//! │  ╟───────────╢           ╟───────────╢                ╟───────────╢
//! │  ║ payload T ║           ║ payload T ║                ║ payload T ║
//! │  ╚═══════════╝           ╚═══════════╝                ╚═══════════╝
//! │      Node 0                  Node 1                     Node N - 1
//! │       ↑                                                  ↑   ↑
//! │  ╔═══════════╗                                           │   │
//! │  ║   head    ║                                           │   │
//! │  ╟───────────╢                                           │   │
//! │  ║   tail    ║ ──────────────────────────────────────────┘   │
//! │  ╟───────────╢                                               │
//! │  ║    len    ║                                               │
//! │  ╚═══════════╝                                               │
//! │      List                                                    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//! The `List` contains:
//! - a pointer `head` to the first node and a pointer `tail` to the last node,
//!   both `None` if and only if the list is empty;
//! - a length field `len`.
//!
//! Each node of the list `List<T>` is allocated on heap, which contains:
//! - the `next` pointer that points to the next element (or the first element
//!   if it is the last one);
//! - the `prev` pointer that points to the previous element (or the last
//!   element if it is the first one);
//! - the actual payload `T`.
//!
//! A list of a single element links the node to itself in both directions.
//!
//! In convention, in a list with length *n*, the nodes are indexed by 0, 1, ...,
//! *n* - 1, and the null position past the last node is indexed by *n*.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These are
//! double-ended iterators and iterate the list like an array (fused and non-cyclic).
//! [`IterMut`] provides mutability of the elements (but not the linked structure of
//! the list).
//!
//! ## Examples
//!
//! ```
//! use ring_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused and non-cyclic
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursor Views
//!
//! Beside iteration, the cursors [`Cursor`] and [`CursorMut`] provide more
//! flexible ways of viewing a list.
//!
//! As the names suggest, they are like cursors and can move forward or backward
//! over the list. In a list with length *n*, there are *n* + 1 valid locations
//! for the cursor, indexed by 0, 1, ..., *n*, where *n* is the null position.
//! [`List::cursor_end`] is the null position, so `cursor_start()..cursor_end()`
//! covers the whole list.
//!
//! Moving off either end of the list reaches the null position, and moving or
//! reading there fails with [`Error::NullCursor`]. The cyclic moves
//! [`move_next_cyclic`] and [`move_prev_cyclic`] wrap around the ring instead.
//!
//! Cursors can also be used as iterators, which are cyclic and not fused.
//!
//! **Warning**: Though cursor iterators have methods `rev`, they **DO NOT** behave
//! as double-ended iterators. Instead, they create a new iterator that reverses
//! the moving direction of the cursor.
//!
//! ## Examples
//!
//! ```
//! use ring_list::List;
//! use std::iter::FromIterator;
//!
//! let list = List::from_iter([1, 2, 3]);
//! // Create a cursor iterator
//! let mut cursor_iter = list.cursor_start().into_iter();
//! assert_eq!(cursor_iter.next(), Some(&1));
//! assert_eq!(cursor_iter.next(), Some(&2));
//! assert_eq!(cursor_iter.next(), Some(&3));
//! assert_eq!(cursor_iter.next(), Some(&1)); // Not fused and cyclic
//!
//! // Create a cursor back iterator which reverses the moving direction
//! // of the cursor
//! let mut cursor_iter = cursor_iter.rev();
//! assert_eq!(cursor_iter.next(), Some(&2)); // Iterate in reversed direction
//! assert_eq!(cursor_iter.next(), Some(&1));
//! assert_eq!(cursor_iter.next(), Some(&3)); // Wraps around the ring
//! ```
//!
//! # Cursor Mutations
//!
//! [`CursorMut`] provides ways to mutate the list at the cursor.
//! - [`insert`]: insert a new item before the cursor;
//! - [`remove`]: remove the item at the cursor;
//!
//! See more functions in [`CursorMut`].
//!
//! # Queue
//!
//! [`Queue`] wraps a [`List`], pushing at the back and popping at the front.
//!
//! ```
//! use ring_list::{Error, Queue};
//!
//! let mut queue = Queue::new();
//! queue.push("a");
//! queue.push("b");
//! assert_eq!(queue.to_string(), "(a, b)");
//! assert_eq!(queue.pop(), Ok("a"));
//! assert_eq!(queue.pop(), Ok("b"));
//! assert_eq!(queue.pop(), Err(Error::Empty));
//! ```
//!
//! # Features
//!
//! - `tracing` (default): emit node lifecycle events through the
//!   [`tracing`](https://docs.rs/tracing) crate.
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`move_next_cyclic`]: crate::list::cursor::Cursor::move_next_cyclic
//! [`move_prev_cyclic`]: crate::list::cursor::Cursor::move_prev_cyclic
//! [`insert`]: crate::list::cursor::CursorMut::insert
//! [`remove`]: crate::list::cursor::CursorMut::remove

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    }};
}

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::debug!($($arg)*);
        }
    }};
}

pub mod error;
pub mod list;
pub mod queue;

#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use list::cursor::{Cursor, CursorMut};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;
#[doc(inline)]
pub use queue::Queue;
