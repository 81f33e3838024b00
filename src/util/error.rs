use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The error raised when indexing past the initialized length of a collection.
///
/// Carries both the offending index and the length it was checked against, so the message alone
/// is enough to identify an off-by-one.
#[derive(Debug, Display, Error, PartialEq, Eq)]
#[display("index {index} out of bounds for collection with {len} elements")]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The number of initialized elements at the time of the check.
    pub len: usize,
}

/// The error raised when a requested capacity can't be represented as a memory layout.
///
/// A layout's size in bytes is limited to [`isize::MAX`], so this triggers long before an
/// allocator would have a say in the matter. Also raised when a capacity calculation overflows
/// [`usize`] outright.
#[derive(Debug, Display, Error, PartialEq, Eq)]
#[display("capacity overflowed the maximum memory layout size")]
pub struct CapacityOverflow;

/// The combined error for operations that both check an index and may need to grow, like a
/// checked insert.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, PartialEq, Eq)]
pub enum IndexOrCapOverflow {
    /// See [`IndexOutOfBounds`].
    IndexOutOfBounds(IndexOutOfBounds),
    /// See [`CapacityOverflow`].
    CapacityOverflow(CapacityOverflow),
}
