//! Pool configuration parameters.

/// Configuration for a [`PoolAllocator`](crate::PoolAllocator).
///
/// The arena capacity is expressed in bytes, like a raw memory pool; the
/// number of slots follows from the element size. All values are immutable
/// once the allocator is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// Size of the arena in bytes.
    ///
    /// Default: 4096. Capacities smaller than one element yield an
    /// allocator whose first allocation fails with `OutOfMemory`.
    ///
    /// This fixes the slot count, not the exact footprint: every slot also
    /// holds a generation tag, so the reserved memory is somewhat larger.
    pub capacity_bytes: usize,
}

impl PoolConfig {
    /// Default arena size in bytes.
    pub const DEFAULT_CAPACITY_BYTES: usize = 4096;

    /// Create a config for an arena of `capacity_bytes` bytes.
    pub fn new(capacity_bytes: usize) -> Self {
        Self { capacity_bytes }
    }

    /// Create a config with room for exactly `slots` values of type `T`.
    pub fn for_slots<T>(slots: usize) -> Self {
        Self::new(slots.saturating_mul(Self::slot_bytes::<T>()))
    }

    /// Bytes accounted per slot for element type `T`.
    ///
    /// Zero-sized types are accounted as one byte so that the slot count
    /// stays finite.
    pub fn slot_bytes<T>() -> usize {
        std::mem::size_of::<T>().max(1)
    }

    /// Number of `T` slots that fit in the arena.
    pub fn slot_capacity<T>(&self) -> usize {
        self.capacity_bytes / Self::slot_bytes::<T>()
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY_BYTES)
    }
}
