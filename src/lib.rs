//! This crate provides a sequence container with six bounds-checked,
//! random-access traversal orders.
//!
//! The [`Container`] keeps its elements in insertion order (duplicates
//! allowed). Each traversal copies the current elements into a snapshot, so
//! the container stays free to change while the traversal is alive.
//!
//! Here is a quick example showing how the container works.
//!
//! ```
//! use multi_order::{Container, Error};
//! use std::iter::FromIterator;
//!
//! let mut container = Container::from_iter(vec![7, 15, 6, 1, 2, 2, 2, 2]);
//!
//! container.remove(&2).unwrap(); // removes every 2
//! assert_eq!(container.size(), 4);
//! assert_eq!(container.to_string(), "[ 7 15 6 1 ]");
//!
//! assert_eq!(container.remove(&99), Err(Error::NotFound));
//! ```
//!
//! # Traversal Orders
//!
//! For a snapshot `S` with length *n*:
//!
//! | Order | Visits | Empty snapshot |
//! |---|---|---|
//! | [`NaturalOrder`] | `S[0], S[1], ..., S[n-1]` | error |
//! | [`AscendingOrder`] | `S` sorted ascending | empty traversal |
//! | [`DescendingOrder`] | `S` sorted descending | empty traversal |
//! | [`ReverseOrder`] | `S[n-1], ..., S[0]` | error |
//! | [`SideCrossOrder`] | `sorted[0], sorted[n-1], sorted[1], sorted[n-2], ...` | empty traversal |
//! | [`MiddleOutOrder`] | `S[n/2], S[n/2-1], S[n/2+1], ...` | error |
//!
//! ```
//! use multi_order::Container;
//! use std::iter::FromIterator;
//!
//! let container = Container::from_iter(vec![7, 15, 6, 1]);
//! fn collect<'a>(iter: impl Iterator<Item = &'a i32>) -> Vec<i32> {
//!     iter.copied().collect()
//! }
//!
//! assert_eq!(collect(container.order().unwrap().iter()), vec![7, 15, 6, 1]);
//! assert_eq!(collect(container.ascending_order().unwrap().iter()), vec![1, 6, 7, 15]);
//! assert_eq!(collect(container.descending_order().unwrap().iter()), vec![15, 7, 6, 1]);
//! assert_eq!(collect(container.reverse_order().unwrap().iter()), vec![1, 6, 15, 7]);
//! assert_eq!(collect(container.side_cross_order().unwrap().iter()), vec![1, 15, 6, 7]);
//! assert_eq!(collect(container.middle_out_order().unwrap().iter()), vec![6, 15, 1, 7]);
//! ```
//!
//! # Positions
//!
//! Beside iteration, [`Position`] provides a bidirectional, random-access view
//! of a traversal. In a traversal with length *n*, there are *n* + 1 valid
//! positions, with progress 0, 1, ..., *n*, where *n* is the end.
//!
//! Every move is checked: dereferencing the end, stepping past either
//! boundary, or jumping outside `0..=n` returns an [`Error`] and leaves the
//! position where it was.
//!
//! ```
//! use multi_order::Container;
//! use std::iter::FromIterator;
//!
//! let container = Container::from_iter(vec![10, 20, 30, 40]);
//! let side_cross = container.side_cross_order().unwrap();
//!
//! let mut position = side_cross.begin();
//! assert_eq!(position.get(), Ok(&10));
//! assert!(position.step_backward().is_err());
//!
//! position.step_forward().unwrap();
//! assert_eq!(position.get(), Ok(&40));
//! assert_eq!(position.index(2), Ok(&30));
//!
//! let end = position.offset_by(3).unwrap();
//! assert_eq!(end, side_cross.end());
//! assert!(end.get().is_err());
//! ```
//!
//! [`NaturalOrder`]: crate::order::NaturalOrder
//! [`AscendingOrder`]: crate::order::AscendingOrder
//! [`DescendingOrder`]: crate::order::DescendingOrder
//! [`ReverseOrder`]: crate::order::ReverseOrder
//! [`SideCrossOrder`]: crate::order::SideCrossOrder
//! [`MiddleOutOrder`]: crate::order::MiddleOutOrder
//! [`Position`]: crate::order::Position

#[doc(inline)]
pub use container::Container;
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use order::{
    AscendingOrder, DescendingOrder, MiddleOutOrder, NaturalOrder, Order, Position, ReverseOrder,
    SideCrossOrder,
};

pub mod container;
pub mod error;
pub mod order;
