//! Definition of options to build a record history.

use crate::{Compact, HeapRing, History, OffHeapRing, Oversize};
use std::io;

/// Storage strategy behind a [`History`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Circular buffer in memory from the global allocator, see [`crate::Ring`].
    Ring,

    /// Circular buffer in anonymous mmap memory, see [`crate::Ring`].
    OffHeapRing,

    /// Linear buffer that shifts content to make room, see [`Compact`].
    Compact,
}

/// Options to build a [`History`] with a strategy picked at runtime.
///
/// ```
/// use tailring::{History, Options, Oversize, Strategy};
///
/// let mut history = Options::new(1024)
///     .strategy(Strategy::Compact)
///     .oversize(Oversize::Reject)
///     .build()?;
///
/// history.append(b"hello\n").unwrap();
/// assert_eq!(history.len(), 6);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    capacity: usize,
    separator: u8,
    strategy: Strategy,
    oversize: Option<Oversize>,
}

impl Options {
    /// Create a new instance of [`Options`].
    ///
    /// Records are separated by `\n` and stored in a [`Strategy::Ring`] by default.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of resident bytes.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            separator: b'\n',
            strategy: Strategy::Ring,
            oversize: None,
        }
    }

    /// Byte that terminates a record.
    pub fn separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    /// Storage strategy of the history.
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Policy for input longer than capacity.
    ///
    /// If not set, every strategy uses it's own default.
    pub fn oversize(mut self, oversize: Oversize) -> Self {
        self.oversize = Some(oversize);
        self
    }

    /// Build a history from these options.
    ///
    /// * Returns an I/O error if off-heap memory cannot be allocated.
    ///
    /// # Panic
    ///
    /// * Panics if capacity == 0.
    pub fn build(&self) -> io::Result<Box<dyn History + Send>> {
        let history: Box<dyn History + Send> = match self.strategy {
            Strategy::Ring => {
                let ring = HeapRing::new(self.capacity, self.separator);
                let oversize = self.oversize.unwrap_or(ring.oversize());
                Box::new(ring.with_oversize(oversize))
            }

            Strategy::OffHeapRing => {
                let ring = OffHeapRing::try_new(self.capacity, self.separator)?;
                let oversize = self.oversize.unwrap_or(ring.oversize());
                Box::new(ring.with_oversize(oversize))
            }

            Strategy::Compact => {
                let compact = Compact::new(self.capacity, self.separator);
                let oversize = self.oversize.unwrap_or(compact.oversize());
                Box::new(compact.with_oversize(oversize))
            }
        };

        Ok(history)
    }
}
