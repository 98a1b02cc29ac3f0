//! Definition of a circular record history.

use crate::{
    AppendError, History, Memory, Oversize, Records,
    memory::{heap, off_heap},
    wrap,
};
use memmap2::MmapMut;
use std::io;

/// Type alias for a [`Ring`] backed by memory from the global allocator.
pub type HeapRing = Ring<Box<[u8]>>;

/// Type alias for a [`Ring`] backed by anonymous mmap memory.
pub type OffHeapRing = Ring<MmapMut>;

/// Ring is a fixed size circular history of records.
///
/// All memory is allocated upfront. Appends are exactly 2 memcpy operations plus a
/// scan over the bytes being overwritten to find the next record boundary. Records that
/// wrap around the end of memory are stitched together during traversal.
///
/// By default input longer than capacity is rejected with [`AppendError::Oversized`],
/// see [`Ring::with_oversize`] to change that.
#[derive(Debug)]
pub struct Ring<M = Box<[u8]>> {
    // Index of the oldest resident byte.
    head: usize,

    // Index where the next append will occur.
    // This will wrap around to 0 when tail == cap.
    tail: usize,

    // Number of resident bytes. Disambiguates a full ring from an empty one,
    // head == tail in both cases.
    len: usize,

    // Byte that terminates a record.
    separator: u8,

    // What to do with input that can never fit.
    oversize: Oversize,

    // A pre-allocated memory for resident bytes.
    memory: M,
}

impl HeapRing {
    /// Create a new ring using memory from the global allocator.
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
        Ring::from_parts(heap(capacity), separator)
    }
}

impl OffHeapRing {
    /// Create a new ring using anonymous mmap memory.
    ///
    /// Note that this variant panics when memory cannot be allocated via mmap.
    /// For a non-panicking alternative, use [`OffHeapRing::try_new`].
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
        match Self::try_new(capacity, separator) {
            Ok(ring) => ring,
            Err(e) => panic!("Error allocating memory for ring: {e}"),
        }
    }

    /// Create a new ring using anonymous mmap memory.
    ///
    /// * Returns an I/O error if memory allocation fails.
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
    pub fn try_new(capacity: usize, separator: u8) -> io::Result<Self> {
        Ok(Ring::from_parts(off_heap(capacity)?, separator))
    }
}

impl<M: Memory> Ring<M> {
    /// Construct a ring from it's basic parts.
    ///
    /// # Arguments
    ///
    /// * `memory` - Memory for resident bytes, it's length is the capacity.
    /// * `separator` - Byte that terminates a record.
    fn from_parts(memory: M, separator: u8) -> Self {
        assert!(!memory.is_empty(), "Ring must hold at least one byte");

        Self {
            head: 0,
            tail: 0,
            len: 0,
            separator,
            oversize: Oversize::Reject,
            memory,
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

    /// Evict oldest bytes so that `incoming` more bytes fit in memory.
    ///
    /// Bytes that are about to be overwritten are evicted, along with rest of the record
    /// they belong to. Head then starts right after a separator. If no separator exists
    /// in the surviving bytes, all of them are discarded.
    ///
    /// # Invariants
    ///
    /// * incoming <= capacity
    fn make_room(&mut self, incoming: usize) {
        let cap = self.memory.len();
        let overflow = (self.len + incoming).saturating_sub(cap);

        // Early return if there is enough free space.
        if overflow == 0 {
            return;
        }

        // Every resident byte will be overwritten.
        if overflow >= self.len {
            trace!(evicted = self.len, "evicted every resident byte");
            self.head = self.tail;
            self.len = 0;
            return;
        }

        // Find the first separator starting from the last overwritten byte. If the last
        // overwritten byte is a separator, head is already at a record boundary.
        let scan_from = wrap::advance(self.head, overflow - 1, cap);
        let scan_len = self.len - overflow + 1;
        match wrap::position(&self.memory, scan_from, scan_len, self.separator) {
            Some(offset) => {
                let evicted = overflow + offset;
                self.head = wrap::advance(self.head, evicted, cap);
                self.len -= evicted;
                trace!(evicted, head = self.head, "evicted oldest records");
            }

            None => {
                trace!(evicted = self.len, "no record boundary in surviving bytes");
                self.head = self.tail;
                self.len = 0;
            }
        }
    }
}

impl<M: Memory> History for Ring<M> {
    /// Append bytes into this ring, evicting oldest records to make room.
    ///
    /// Appended bytes are never evicted by their own append. Only subsequent appends
    /// can evict them.
    ///
    /// # Arguments
    ///
    /// * `data` - Bytes to append.
    fn append(&mut self, data: &[u8]) -> Result<(), AppendError> {
        let data = self.oversize.admit(data, self.memory.len())?;

        // Early return if there is nothing to append.
        if data.is_empty() {
            return Ok(());
        }

        // Evict first, bytes being overwritten are needed to find a record boundary.
        self.make_room(data.len());

        // Write the bytes and update state.
        self.tail = wrap::write(&mut self.memory, self.tail, data);
        self.len += data.len();
        Ok(())
    }

    fn records(&self) -> Records<'_> {
        let (first, second) = wrap::slices(&self.memory, self.head, self.len);
        Records::new(first, second, self.separator)
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.memory.len()
    }

    #[inline]
    fn separator(&self) -> u8 {
        self.separator
    }

    fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }
}
