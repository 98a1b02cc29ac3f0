//! Definition of the contract shared by all record histories.

use crate::Records;
use thiserror::Error;

/// Different types of error that can happen when bytes are appended to a [`History`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AppendError {
    #[error("Record of {len} bytes exceeds capacity of {capacity} bytes")]
    Oversized { len: usize, capacity: usize },
}

/// A bounded history of separator-terminated records.
///
/// Bytes are appended by a producer and treated as zero or more records, each ending
/// with the separator byte. Once resident bytes would exceed capacity, the oldest
/// records are evicted. A consumer can traverse complete resident records, from oldest
/// to newest, at any time. Bytes after the last separator belong to a record that is
/// still being written and are never surfaced.
///
/// Implementations are single threaded. Wrap a history in a lock to share it.
pub trait History {
    /// Append bytes into this history, evicting oldest records to make room.
    ///
    /// Bytes longer than capacity are handled according to the [`crate::Oversize`]
    /// policy of the history. If they are rejected, history is left untouched.
    ///
    /// # Arguments
    ///
    /// * `data` - Bytes to append.
    fn append(&mut self, data: &[u8]) -> Result<(), AppendError>;

    /// An iterator over complete resident records, oldest first.
    fn records(&self) -> Records<'_>;

    /// Visit every complete resident record, oldest first.
    ///
    /// # Arguments
    ///
    /// * `visit` - Invoked once per record, separator included.
    fn walk(&self, visit: &mut dyn FnMut(&[u8])) {
        for record in self.records() {
            visit(record.as_ref());
        }
    }

    /// Number of bytes currently resident.
    fn len(&self) -> usize;

    /// Maximum number of bytes that can be resident at once.
    fn capacity(&self) -> usize;

    /// Byte that marks the end of a record.
    fn separator(&self) -> u8;

    /// true if no bytes are resident, false otherwise.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discard all resident bytes.
    fn clear(&mut self);
}
