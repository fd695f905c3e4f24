//! The allocator capability trait.

use crate::error::AllocError;
use crate::id::SlotId;

/// Single-object slot allocation for one element type.
///
/// Containers hold exactly one implementor for their whole lifetime and
/// obtain every node from it. Allocation and construction are separate
/// steps: [`allocate`](Self::allocate) reserves a vacant slot,
/// [`construct`](Self::construct) moves a value into it, and
/// [`destroy`](Self::destroy) moves the value back out before the slot is
/// handed to [`deallocate`](Self::deallocate).
pub trait SlotAllocator<T> {
    /// Reserve one vacant slot.
    ///
    /// `count` must be 1; anything else fails with
    /// [`AllocError::UnsupportedBatchSize`]. Fails with
    /// [`AllocError::OutOfMemory`] when no slot is left.
    fn allocate(&mut self, count: usize) -> Result<SlotId, AllocError>;

    /// Return a slot for reuse.
    ///
    /// `count` must be 1. `None` is a no-op. The slot's value must already
    /// have been destroyed; implementors are not required to check where
    /// the handle came from.
    fn deallocate(&mut self, slot: Option<SlotId>, count: usize) -> Result<(), AllocError>;

    /// Move `value` into a slot returned by [`allocate`](Self::allocate).
    ///
    /// # Panics
    ///
    /// Panics if `slot` is stale or already holds a value.
    fn construct(&mut self, slot: SlotId, value: T);

    /// Move the value out of `slot`, leaving it vacant.
    ///
    /// Returns `None` for stale or vacant slots.
    fn destroy(&mut self, slot: SlotId) -> Option<T>;

    /// Shared access to the value in `slot`.
    fn get(&self, slot: SlotId) -> Option<&T>;

    /// Mutable access to the value in `slot`.
    fn get_mut(&mut self, slot: SlotId) -> Option<&mut T>;

    /// Number of slots that can still be handed out (free list plus
    /// uncarved arena).
    fn available(&self) -> usize;

    /// Check that `count` more slots can be allocated, without allocating.
    ///
    /// The answer is advisory: containers use it to reject oversized
    /// requests early but still handle a later `allocate` failure.
    ///
    /// Fails with [`AllocError::OutOfMemory`] when fewer than `count` slots
    /// are [`available`](Self::available).
    fn ensure_available(&self, count: usize) -> Result<(), AllocError>;
}
