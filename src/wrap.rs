//! Index arithmetic for memory that wraps around.
//!
//! A logical run of bytes in a ring starts at some physical index and continues at
//! index 0 once it reaches the end of memory. These helpers are the only place that
//! splits runs at that point, everything else works in terms of them.

use std::cmp::min;

/// Index `count` positions after `index` in memory of size `capacity`.
///
/// # Invariants
///
/// * index < capacity
/// * count <= capacity
#[inline]
pub(crate) fn advance(index: usize, count: usize, capacity: usize) -> usize {
    debug_assert!(index < capacity && count <= capacity);
    (index + count) % capacity
}

/// Copy bytes into memory starting at `index`, wrapping around to 0 at the end.
///
/// Returns index right after the last byte written. This is exactly 2 memcpy
/// operations, either of which can be empty.
///
/// # Invariants
///
/// * index < memory.len()
/// * src.len() <= memory.len()
///
/// # Arguments
///
/// * `memory` - Memory to write into.
/// * `index` - Index of the first byte to write.
/// * `src` - Bytes to write.
pub(crate) fn write(memory: &mut [u8], index: usize, src: &[u8]) -> usize {
    // Bytes till the end of memory go first, rest start over from 0.
    let (first, second) = src.split_at(min(src.len(), memory.len() - index));

    // Split the backing memory into discrete writeable chunks.
    let (wrapped, tail) = memory.split_at_mut(index);
    tail[..first.len()].copy_from_slice(first);
    wrapped[..second.len()].copy_from_slice(second);

    advance(index, src.len(), memory.len())
}

/// View `len` bytes starting at `index` as two slices in logical order.
///
/// Second slice is empty unless the run wraps around the end of memory.
///
/// # Invariants
///
/// * index < memory.len()
/// * len <= memory.len()
pub(crate) fn slices(memory: &[u8], index: usize, len: usize) -> (&[u8], &[u8]) {
    let (wrapped, tail) = memory.split_at(index);
    match tail.split_at_checked(len) {
        Some((first, _)) => (first, Default::default()),
        None => (tail, &wrapped[..len - tail.len()]),
    }
}

/// Logical offset of the first `byte` in `len` bytes starting at `index`.
///
/// # Invariants
///
/// * index < memory.len()
/// * len <= memory.len()
pub(crate) fn position(memory: &[u8], index: usize, len: usize, byte: u8) -> Option<usize> {
    let (first, second) = slices(memory, index, len);
    match first.iter().position(|b| *b == byte) {
        Some(offset) => Some(offset),
        None => second
            .iter()
            .position(|b| *b == byte)
            .map(|offset| first.len() + offset),
    }
}
