//! A module containing [`Vector`] and associated types.
//!
//! Owned iteration reuses [`IntoIter`](super::array::IntoIter) from the array module, since a
//! Vector hands its buffer to the iterator in the same shape an Array does.
//! [`Iter`](std::slice::Iter) and [`IterMut`](std::slice::IterMut) from [`std::slice`] are used
//! for borrowed iteration.
//!
//! [`Vector`] is also re-exported under the parent module.

mod iter;
mod vector;

pub use iter::*;
pub use vector::*;
