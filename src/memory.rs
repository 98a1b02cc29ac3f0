//! Definition of containers of pre-allocated memory.

use memmap2::{MmapMut, MmapOptions};
use std::{
    io,
    ops::{Deref, DerefMut},
};

/// Fixed size memory that backs a [`crate::Ring`].
///
/// Anything that dereferences to a mutable byte slice will do. Size of the slice
/// is the capacity of the ring and must never change.
pub trait Memory: Deref<Target = [u8]> + DerefMut {}

impl<T: Deref<Target = [u8]> + DerefMut> Memory for T {}

/// Allocate zeroed memory using the registered global allocator.
///
/// # Arguments
///
/// * `cap` - Number of bytes to allocate.
#[track_caller]
pub(crate) fn heap(cap: usize) -> Box<[u8]> {
    assert!(cap > 0, "zero length memory cannot be allocated");
    vec![0; cap].into_boxed_slice()
}

/// Allocate memory using an anonymous mmap, outside of the global allocator.
///
/// Pages are populated upfront, so that no page faults happen on appends.
///
/// # Arguments
///
/// * `cap` - Number of bytes to allocate.
#[track_caller]
pub(crate) fn off_heap(cap: usize) -> io::Result<MmapMut> {
    assert!(cap > 0, "zero length memory cannot be allocated");
    MmapOptions::new().len(cap).populate().map_anon()
}
