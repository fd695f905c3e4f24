//! The fixed-capacity pool allocator.
//!
//! [`PoolAllocator`] serves single-slot requests from a [`SlotArena`]. A
//! request is satisfied from the free list first (O(1), no bump) and only
//! then by carving a fresh slot. When both are exhausted the request fails
//! with [`AllocError::OutOfMemory`]; the pool never grows.

use weir_core::{AllocError, SlotAllocator, SlotId};

use crate::config::PoolConfig;
use crate::slot::SlotArena;

/// Single-object pool allocator for element type `T`.
///
/// The allocator owns its arena outright and is deliberately not `Clone`:
/// two owners of one arena would alias the same slots. Moving it transfers
/// the whole arena.
///
/// Dropping the allocator drops every value still stored in it. Containers
/// built on it destroy their nodes first so that slot bookkeeping stays
/// balanced.
#[derive(Debug)]
pub struct PoolAllocator<T> {
    arena: SlotArena<T>,
    /// Released slots, most recently released last.
    free_list: Vec<SlotId>,
    config: PoolConfig,
}

impl<T> PoolAllocator<T> {
    /// Create a pool and reserve its arena.
    ///
    /// # Panics
    ///
    /// Panics if the arena cannot be reserved. Sizes taken from user input
    /// should go through [`try_new`](Self::try_new).
    pub fn new(config: PoolConfig) -> Self {
        Self {
            arena: SlotArena::new(config.slot_capacity::<T>()),
            free_list: Vec::new(),
            config,
        }
    }

    /// Create a pool, failing with [`AllocError::OutOfMemory`] when the
    /// arena cannot be reserved.
    pub fn try_new(config: PoolConfig) -> Result<Self, AllocError> {
        let arena = SlotArena::try_new(config.slot_capacity::<T>()).map_err(|_| {
            AllocError::OutOfMemory {
                slot_bytes: PoolConfig::slot_bytes::<T>(),
                capacity_bytes: config.capacity_bytes,
            }
        })?;
        Ok(Self {
            arena,
            free_list: Vec::new(),
            config,
        })
    }

    /// The configuration this pool was built with.
    pub fn config(&self) -> PoolConfig {
        self.config
    }

    /// Bytes accounted per slot.
    pub fn slot_bytes(&self) -> usize {
        PoolConfig::slot_bytes::<T>()
    }

    /// Total number of slots the arena can hold.
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Number of slots currently handed out.
    pub fn used(&self) -> usize {
        self.arena.carved() - self.free_list.len()
    }

    /// Number of released slots waiting for reuse.
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// Slots the bump cursor can still carve.
    pub fn remaining(&self) -> usize {
        self.arena.remaining()
    }

    /// Arena capacity in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.config.capacity_bytes
    }

    fn out_of_memory(&self) -> AllocError {
        AllocError::OutOfMemory {
            slot_bytes: self.slot_bytes(),
            capacity_bytes: self.config.capacity_bytes,
        }
    }
}

impl<T> Default for PoolAllocator<T> {
    fn default() -> Self {
        Self::new(PoolConfig::default())
    }
}

impl<T> SlotAllocator<T> for PoolAllocator<T> {
    fn allocate(&mut self, count: usize) -> Result<SlotId, AllocError> {
        if count != 1 {
            return Err(AllocError::UnsupportedBatchSize { requested: count });
        }
        if let Some(slot) = self.free_list.pop() {
            return Ok(slot);
        }
        self.arena.carve().ok_or_else(|| self.out_of_memory())
    }

    fn deallocate(&mut self, slot: Option<SlotId>, count: usize) -> Result<(), AllocError> {
        if count != 1 {
            return Err(AllocError::UnsupportedBatchSize { requested: count });
        }
        let Some(slot) = slot else {
            return Ok(());
        };
        debug_assert!(
            self.arena.get(slot).is_none(),
            "{slot} deallocated while still holding a value"
        );
        // A handle that does not resolve was never issued by this pool or was
        // already released; pushing it would hand one slot out twice.
        let reusable = self.arena.retire(slot);
        debug_assert!(reusable.is_some(), "{slot} was not issued by this pool");
        if let Some(reusable) = reusable {
            self.free_list.push(reusable);
        }
        Ok(())
    }

    fn construct(&mut self, slot: SlotId, value: T) {
        if self.arena.put(slot, value).is_err() {
            panic!("construct into {slot}, which is stale or occupied");
        }
    }

    fn destroy(&mut self, slot: SlotId) -> Option<T> {
        self.arena.take(slot)
    }

    fn get(&self, slot: SlotId) -> Option<&T> {
        self.arena.get(slot)
    }

    fn get_mut(&mut self, slot: SlotId) -> Option<&mut T> {
        self.arena.get_mut(slot)
    }

    fn available(&self) -> usize {
        self.free_list.len() + self.arena.remaining()
    }

    fn ensure_available(&self, count: usize) -> Result<(), AllocError> {
        if count > self.available() {
            return Err(self.out_of_memory());
        }
        Ok(())
    }
}
