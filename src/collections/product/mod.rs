//! Product collection types: the heterogeneous [`Cons`]/[`Nil`] chain, holding a statically
//! fixed sequence of possibly-distinct element types with compile-time indexed access.
#![warn(missing_docs)]

pub mod hlist;

#[doc(inline)]
pub use hlist::{Arity, Cons, DebugElements, Here, IntoTuple, LiftInto, Nil, Pick, SwapElements, There};
#[doc(inline)]
pub use hlist::{I0, I1, I2, I3, I4, I5, I6, I7};
