//! Reference implementation of a record history using standard library primitives.

use std::collections::VecDeque;

/// A record history backed by [`VecDeque`], one entry per record.
///
/// Only supports appending complete records that fit within capacity.
pub(crate) struct Oracle {
    len: usize,
    capacity: usize,
    separator: u8,
    deque: VecDeque<Vec<u8>>,
}

impl Oracle {
    pub(crate) fn new(capacity: usize, separator: u8) -> Self {
        Self {
            len: 0,
            capacity,
            separator,
            deque: VecDeque::new(),
        }
    }

    /// Append a single record, evicting oldest records till it fits.
    pub(crate) fn append(&mut self, record: &[u8]) {
        assert!(record.len() <= self.capacity, "Record must fit");
        assert_eq!(record.last(), Some(&self.separator), "Record must be complete");

        self.len += record.len();
        self.deque.push_back(record.to_vec());

        while self.len > self.capacity {
            let evicted = self.deque.pop_front().expect("Oracle is over capacity");
            self.len -= evicted.len();
        }
    }

    pub(crate) fn records(&self) -> Vec<Vec<u8>> {
        self.deque.iter().cloned().collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }
}
