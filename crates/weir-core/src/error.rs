//! Allocation error types.

use std::error::Error;
use std::fmt;

/// Errors raised by a [`SlotAllocator`](crate::SlotAllocator).
///
/// Both variants are fatal to the requested operation: the allocator never
/// retries, grows, or falls back to the system allocator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The caller asked to (de)allocate a count other than one.
    ///
    /// Pool arenas reason only about single fixed-size slots.
    UnsupportedBatchSize {
        /// Number of objects requested.
        requested: usize,
    },
    /// The arena is exhausted and the free list is empty.
    OutOfMemory {
        /// Size of one slot in bytes.
        slot_bytes: usize,
        /// Total arena capacity in bytes.
        capacity_bytes: usize,
    },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedBatchSize { requested } => {
                write!(
                    f,
                    "unsupported batch size: requested {requested} objects, only single-slot allocation is available"
                )
            }
            Self::OutOfMemory {
                slot_bytes,
                capacity_bytes,
            } => {
                write!(
                    f,
                    "out of memory: no {slot_bytes}-byte slot left in a {capacity_bytes}-byte arena"
                )
            }
        }
    }
}

impl Error for AllocError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_size_message_names_count() {
        let err = AllocError::UnsupportedBatchSize { requested: 3 };
        assert!(err.to_string().contains("requested 3"));
    }

    #[test]
    fn out_of_memory_message_names_sizes() {
        let err = AllocError::OutOfMemory {
            slot_bytes: 24,
            capacity_bytes: 96,
        };
        let msg = err.to_string();
        assert!(msg.contains("24-byte"));
        assert!(msg.contains("96-byte"));
    }
}
