//! A module containing the heterogeneous chain types [`Cons`] and [`Nil`] and their associated
//! traits.
//!
//! Values are built with the [`hlist!`](crate::hlist) macro and types are named with the
//! [`HList!`](crate::HList) macro; element access goes through [`Pick`] with the index aliases
//! [`I0`]..[`I7`].

mod convert;
mod hlist;
mod index;
mod macros;

pub use convert::*;
pub use hlist::*;
pub use index::*;
