use std::marker::PhantomData;

use super::Cons;

/// The type-level index selecting the head of a chain.
pub struct Here;

/// The type-level index selecting position `I` within the tail of a chain.
pub struct There<I>(PhantomData<I>);

/// The first position of a chain. Equal to [`Here`].
pub type I0 = Here;
/// The second position of a chain.
pub type I1 = There<I0>;
/// The third position of a chain.
pub type I2 = There<I1>;
/// The fourth position of a chain.
pub type I3 = There<I2>;
/// The fifth position of a chain.
pub type I4 = There<I3>;
/// The sixth position of a chain.
pub type I5 = There<I4>;
/// The seventh position of a chain.
pub type I6 = There<I5>;
/// The eighth position of a chain.
pub type I7 = There<I6>;

/// Compile-time resolution of the element at position `I` of a chain.
///
/// The walk happens entirely in the trait system: each step strips one [`There`] wrapper off the
/// index and one [`Cons`] layer off the chain, until [`Here`] lands on a head. The compiled
/// accessor is therefore a direct field projection with no runtime recursion, and an index with
/// no matching impl - one past the end of the chain - is rejected at compile time rather than at
/// runtime.
///
/// All three accessors preserve the access expression's relationship to the container: a borrow
/// gives a borrow, a mutable borrow gives a mutable borrow and a consumed chain gives ownership.
pub trait Pick<I> {
    /// The element type at position `I`.
    type Picked;

    /// Borrows the element at position `I`.
    fn pick(&self) -> &Self::Picked;

    /// Mutably borrows the element at position `I`.
    fn pick_mut(&mut self) -> &mut Self::Picked;

    /// Moves the element at position `I` out of the chain, dropping every other element.
    fn pick_into(self) -> Self::Picked;
}

impl<H, T> Pick<Here> for Cons<H, T> {
    type Picked = H;

    fn pick(&self) -> &H {
        &self.head
    }

    fn pick_mut(&mut self) -> &mut H {
        &mut self.head
    }

    fn pick_into(self) -> H {
        self.head
    }
}

impl<H, T, I> Pick<There<I>> for Cons<H, T>
where
    T: Pick<I>,
{
    type Picked = T::Picked;

    fn pick(&self) -> &Self::Picked {
        self.tail.pick()
    }

    fn pick_mut(&mut self) -> &mut Self::Picked {
        self.tail.pick_mut()
    }

    fn pick_into(self) -> Self::Picked {
        self.tail.pick_into()
    }
}
