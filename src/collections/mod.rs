//! Various general-purpose container types.
//!
//! # Purpose
//! Everything here exists to pin down one hard invariant or another: the contiguous types own the
//! initialized/uninitialized boundary of a raw allocation, while the product types push element
//! lookup entirely into the type system.
//!
//! # Method
//! Applicable types implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! supplies the whole read-side slice API without repeating it on every container.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "product")]
pub mod product;
