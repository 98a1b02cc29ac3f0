//! # Tailring
//!
//! Tailring keeps the most recent separator-terminated records (log lines, scrollback)
//! of a byte stream within a fixed memory budget. Oldest records are evicted once the
//! configured capacity is exceeded.
//!
//! ## Strategies
//!
//! Two interchangeable implementations of [`History`] are provided.
//!
//! * [`Ring`] - Fixed size circular buffer. Appends are at most two memcpy operations,
//!   traversal has to stitch together records that wrap around the end of memory.
//! * [`Compact`] - Linear buffer that shifts its content to the front to make room.
//!   Traversal is a single scan, but every eviction moves the remaining bytes.
//!
//! ## Oversized records
//!
//! What happens with input longer than capacity is an explicit [`Oversize`] policy.
//! [`Ring`] rejects it by default, [`Compact`] keeps the trailing bytes by default.
//!
//! ## Features
//!
//! * `tracing` - Emit trace events on eviction via [`tracing`](https://docs.rs/tracing/latest/tracing/).

// Forwards to tracing when instrumentation is enabled, compiles to nothing otherwise.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

pub(crate) mod compact;
pub(crate) mod history;
pub(crate) mod memory;
pub(crate) mod options;
pub(crate) mod policy;
pub(crate) mod records;
pub(crate) mod ring;
pub(crate) mod wrap;

#[cfg(test)]
pub(crate) mod oracle;

// Externally exposed types.
pub use compact::Compact;
pub use history::{AppendError, History};
pub use memory::Memory;
pub use options::{Options, Strategy};
pub use policy::Oversize;
pub use records::Records;
pub use ring::{HeapRing, OffHeapRing, Ring};
