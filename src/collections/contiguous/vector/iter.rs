use std::alloc::Allocator;

use super::Vector;
use crate::collections::contiguous::Array;

#[doc(inline)]
pub use crate::collections::contiguous::array::IntoIter;

impl<T, A: Allocator> IntoIterator for Vector<T, A> {
    type Item = T;

    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> Self::IntoIter {
        let (ptr, len, cap, alloc) = self.into_parts_with_alloc();
        IntoIter {
            // SAFETY: The parts came straight out of a live Vector buffer.
            buf: unsafe { Array::from_parts_in(ptr, cap, alloc) },
            start: 0,
            end: len,
        }
    }
}
