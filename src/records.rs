//! Definition of traversal over resident records.

use std::{borrow::Cow, iter::FusedIterator};

/// An iterator over complete records held in a history, oldest first.
///
/// Resident bytes are viewed as two slices in logical order. A record that lies within
/// one of them is borrowed. A record that starts in the first slice and ends in the
/// second has to be copied into a single contiguous allocation.
///
/// Bytes after the last separator are never yielded.
#[derive(Debug, Clone)]
pub struct Records<'a> {
    first: &'a [u8],
    second: &'a [u8],
    separator: u8,
}

impl<'a> Records<'a> {
    /// Create a new instance of [`Records`].
    ///
    /// # Arguments
    ///
    /// * `first` - Oldest resident bytes.
    /// * `second` - Resident bytes that logically follow `first`.
    /// * `separator` - Byte that marks the end of a record.
    pub(crate) fn new(first: &'a [u8], second: &'a [u8], separator: u8) -> Self {
        Self {
            first,
            second,
            separator,
        }
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = Cow<'a, [u8]>;

    fn next(&mut self) -> Option<Self::Item> {
        // Record completely within the first slice.
        if let Some(index) = self.first.iter().position(|b| *b == self.separator) {
            let (record, rest) = self.first.split_at(index + 1);
            self.first = rest;
            return Some(Cow::Borrowed(record));
        }

        // Anything left in first slice is the head of a record that ends in the second.
        let index = self.second.iter().position(|b| *b == self.separator)?;
        let (end, rest) = self.second.split_at(index + 1);
        let record = if self.first.is_empty() {
            Cow::Borrowed(end)
        } else {
            Cow::Owned([self.first, end].concat())
        };

        self.first = rest;
        self.second = Default::default();
        Some(record)
    }
}

impl FusedIterator for Records<'_> {}
