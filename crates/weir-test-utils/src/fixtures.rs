//! Reusable fixtures for allocator and container tests.
//!
//! - [`DropTally`] / [`Tracked`]: values that count how often they are dropped.
//! - [`CountingAllocator`]: wraps any [`SlotAllocator`], counts calls, and
//!   fails deterministically after N allocations.

use std::cell::Cell;
use std::rc::Rc;

use weir_core::{AllocError, SlotAllocator, SlotId};

/// Shared counter of dropped [`Tracked`] values.
#[derive(Clone, Debug, Default)]
pub struct DropTally(Rc<Cell<usize>>);

impl DropTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `value` so that dropping it bumps this tally.
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        Tracked {
            value,
            tally: self.clone(),
        }
    }

    /// Number of tracked values dropped so far.
    pub fn dropped(&self) -> usize {
        self.0.get()
    }
}

/// A value whose drop is recorded in a [`DropTally`].
///
/// Clones are tracked by the same tally.
#[derive(Clone, Debug)]
pub struct Tracked<T> {
    value: T,
    tally: DropTally,
}

impl<T> Tracked<T> {
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.tally.0.set(self.tally.0.get() + 1);
    }
}

/// Allocator wrapper that counts calls and can fail on demand.
///
/// With [`failing_after(n)`](Self::failing_after), the first `n`
/// allocations are forwarded and every later one fails with
/// [`AllocError::OutOfMemory`].
#[derive(Debug)]
pub struct CountingAllocator<A> {
    inner: A,
    allocations: usize,
    deallocations: usize,
    fail_after: Option<usize>,
}

impl<A> CountingAllocator<A> {
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            allocations: 0,
            deallocations: 0,
            fail_after: None,
        }
    }

    pub fn failing_after(inner: A, n: usize) -> Self {
        Self {
            fail_after: Some(n),
            ..Self::new(inner)
        }
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }

    /// Successful allocations so far.
    pub fn allocations(&self) -> usize {
        self.allocations
    }

    /// Non-empty deallocations so far.
    pub fn deallocations(&self) -> usize {
        self.deallocations
    }

    /// Slots handed out and not yet returned.
    pub fn live(&self) -> usize {
        self.allocations - self.deallocations
    }

    fn budget(&self) -> Option<usize> {
        self.fail_after.map(|n| n.saturating_sub(self.allocations))
    }
}

impl<T, A> SlotAllocator<T> for CountingAllocator<A>
where
    A: SlotAllocator<T>,
{
    fn allocate(&mut self, count: usize) -> Result<SlotId, AllocError> {
        if count == 1 && self.budget() == Some(0) {
            return Err(AllocError::OutOfMemory {
                slot_bytes: std::mem::size_of::<T>(),
                capacity_bytes: 0,
            });
        }
        let slot = self.inner.allocate(count)?;
        self.allocations += 1;
        Ok(slot)
    }

    fn deallocate(&mut self, slot: Option<SlotId>, count: usize) -> Result<(), AllocError> {
        self.inner.deallocate(slot, count)?;
        if slot.is_some() {
            self.deallocations += 1;
        }
        Ok(())
    }

    fn construct(&mut self, slot: SlotId, value: T) {
        self.inner.construct(slot, value);
    }

    fn destroy(&mut self, slot: SlotId) -> Option<T> {
        self.inner.destroy(slot)
    }

    fn get(&self, slot: SlotId) -> Option<&T> {
        self.inner.get(slot)
    }

    fn get_mut(&mut self, slot: SlotId) -> Option<&mut T> {
        self.inner.get_mut(slot)
    }

    fn available(&self) -> usize {
        let inner = self.inner.available();
        self.budget().map_or(inner, |budget| inner.min(budget))
    }

    fn ensure_available(&self, count: usize) -> Result<(), AllocError> {
        self.inner.ensure_available(count)?;
        if count > self.available() {
            return Err(AllocError::OutOfMemory {
                slot_bytes: std::mem::size_of::<T>(),
                capacity_bytes: 0,
            });
        }
        Ok(())
    }
}
