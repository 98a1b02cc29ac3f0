//! Definition of a compacting record history.

use crate::{AppendError, History, Oversize, Records};
use std::cmp::{max, min};

/// A record history that keeps resident bytes contiguous.
///
/// Evictions shift remaining bytes to the front of the buffer, so every append that
/// overflows costs O(N) where N is the number of resident bytes. In return traversal
/// never has to stitch records together. Memory is allocated as needed, doubling
/// every time, but never beyond capacity.
///
/// By default input longer than capacity is truncated to its trailing bytes,
/// see [`Compact::with_oversize`] to change that.
#[derive(Debug, Clone)]
pub struct Compact {
    capacity: usize,
    separator: u8,
    oversize: Oversize,
    buffer: Vec<u8>,
}

impl Compact {
    /// Create a new instance of [`Compact`].
    ///
    /// # Panic
    ///
    /// * Panics if capacity == 0.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of resident bytes.
    /// * `separator` - Byte that terminates a record.
    #[track_caller]
    pub fn new(capacity: usize, separator: u8) -> Self {
        assert!(capacity > 0, "Compact must hold at least one byte");

        Self {
            capacity,
            separator,
            oversize: Oversize::TruncateKeepTail,
            buffer: Vec::new(),
        }
    }

    /// Replace the policy for input longer than capacity.
    ///
    /// # Arguments
    ///
    /// * `oversize` - Policy to apply on future appends.
    pub fn with_oversize(mut self, oversize: Oversize) -> Self {
        self.oversize = oversize;
        self
    }

    /// Policy for input longer than capacity.
    pub fn oversize(&self) -> Oversize {
        self.oversize
    }

    /// Make sure allocated memory can hold `needed` bytes.
    ///
    /// # Invariants
    ///
    /// * needed <= capacity
    fn reserve(&mut self, needed: usize) {
        let allocated = self.buffer.capacity();
        if needed <= allocated {
            return;
        }

        // Amortized growth, clamped so that allocation never exceeds capacity.
        let target = min(max(needed, allocated * 2), self.capacity);
        self.buffer.reserve_exact(target - self.buffer.len());
    }

    /// Evict oldest records so that `incoming` more bytes fit within capacity.
    ///
    /// Whole records are evicted one at a time. If there is no separator left,
    /// just enough bytes are dropped from the front, truncating a record.
    ///
    /// # Invariants
    ///
    /// * incoming <= capacity
    fn make_room(&mut self, incoming: usize) {
        while self.buffer.len() + incoming > self.capacity {
            match self.buffer.iter().position(|b| *b == self.separator) {
                Some(index) => {
                    self.buffer.drain(..=index);
                }

                None => {
                    let excess = self.buffer.len() + incoming - self.capacity;
                    trace!(excess, "no record boundary, truncating oldest record");
                    self.buffer.drain(..excess);
                }
            }
        }
    }
}

impl History for Compact {
    fn append(&mut self, data: &[u8]) -> Result<(), AppendError> {
        let data = self.oversize.admit(data, self.capacity)?;
        self.make_room(data.len());
        self.reserve(self.buffer.len() + data.len());
        self.buffer.extend_from_slice(data);
        Ok(())
    }

    fn records(&self) -> Records<'_> {
        Records::new(&self.buffer, Default::default(), self.separator)
    }

    #[inline]
    fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    fn separator(&self) -> u8 {
        self.separator
    }

    fn clear(&mut self) {
        self.buffer.clear();
    }
}
