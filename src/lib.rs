//! A ground-up reimplementation of a few core standard-library containers.
//!
//! # Purpose
//! This crate rebuilds the containers I consider the heart of any standard library: a
//! runtime-sized [`Array`](collections::contiguous::Array), a growable
//! [`Vector`](collections::contiguous::Vector) on top of it, and a heterogeneous
//! [`Cons`](collections::product::Cons) chain for holding a fixed set of differently-typed values.
//! The point is to own every invariant myself - the raw allocations, the initialized/uninitialized
//! boundary, the growth arithmetic - instead of leaning on [`Vec`] or tuples and trusting that
//! somebody else got it right.
//!
//! # Method
//! Each container is written against its stated invariants rather than copied from `std`, although
//! the APIs deliberately rhyme with `std` so that switching between them is unsurprising. Unsafe
//! code is kept behind small, documented helpers, and every `unsafe` block carries the reasoning
//! for why it is sound.
//!
//! # Error Handling
//! Functions that users call in a tight loop (`push`, indexing through the slice view) panic on
//! contract violations, because forcing a [`Result`] onto every append is worse than useless.
//! The fallible operations that warrant it also have a `try_` form returning a strongly-typed
//! error (`IndexOutOfBounds`, `CapacityOverflow`); the panicking forms are thin wrappers that
//! raise the same error's message. Out-of-memory is reported through
//! [`handle_alloc_error`](std::alloc::handle_alloc_error), never a panic, so no allocation happens
//! on the failure path.
//!
//! # Dependencies
//! The containers allocate through the (nightly) [`Allocator`](std::alloc::Allocator) trait with
//! [`Global`](std::alloc::Global) as the default, so any allocation strategy can be injected
//! without the containers assuming one. [`Vec`] appears only at the conversion boundary, never as
//! a building block. Error enums lean on `derive_more` to avoid a pile of hand-written trait
//! impls.

#![feature(allocator_api)]
#![feature(box_vec_non_null)]
#![feature(extend_one)]
#![feature(extend_one_unchecked)]
#![feature(trusted_len)]
#![feature(debug_closure_helpers)]

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
