//! Bump-carved slot storage.
//!
//! A [`SlotArena`] is the backing store of a pool: a `Vec` reserved to full
//! capacity at creation, with a cursor (the vector length) that advances as
//! slots are carved. Carved slots are never removed, only vacated and
//! handed out again by the owning allocator.
//!
//! Each slot stores its generation and an occupancy flag next to the value,
//! so the reserved block is `capacity() * size_of::<Slot<T>>()` bytes, a
//! little more than the byte budget the slot count was derived from.

use std::collections::TryReserveError;

use weir_core::SlotId;

/// One fixed-size cell of the arena.
#[derive(Debug)]
struct Slot<T> {
    /// Bumped on every retire; handles with an older value are stale.
    generation: u32,
    value: Option<T>,
}

/// Contiguous slot storage with bump allocation.
///
/// The arena knows nothing about free lists; it only carves fresh slots,
/// resolves handles, and retires slots by bumping their generation.
#[derive(Debug)]
pub struct SlotArena<T> {
    /// Backing storage. Reserved to `boundary` entries at creation.
    slots: Vec<Slot<T>>,
    /// Maximum number of slots that may ever be carved.
    boundary: usize,
}

impl<T> SlotArena<T> {
    /// Create an arena with room for `boundary` slots.
    ///
    /// The storage is reserved eagerly; no slot is carved yet.
    ///
    /// # Panics
    ///
    /// Panics if the reservation overflows or the system allocator refuses
    /// it. Use [`try_new`](Self::try_new) for sizes that come from input.
    pub fn new(boundary: usize) -> Self {
        Self {
            slots: Vec::with_capacity(boundary),
            boundary,
        }
    }

    /// Create an arena with room for `boundary` slots, reporting a failed
    /// reservation instead of aborting.
    pub fn try_new(boundary: usize) -> Result<Self, TryReserveError> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(boundary)?;
        Ok(Self { slots, boundary })
    }

    /// Carve the next vacant slot at the bump cursor.
    ///
    /// Returns `None` once the cursor has reached the boundary.
    pub fn carve(&mut self) -> Option<SlotId> {
        if self.slots.len() >= self.boundary {
            return None;
        }
        let index = u32::try_from(self.slots.len()).ok()?;
        self.slots.push(Slot {
            generation: 0,
            value: None,
        });
        Some(SlotId::new(index, 0))
    }

    /// Bump the generation of a carved slot, dropping any value left in it.
    ///
    /// Returns the handle the slot is now reachable through, or `None` if
    /// `id` does not resolve (never carved, or already retired).
    pub fn retire(&mut self, id: SlotId) -> Option<SlotId> {
        let slot = self.resolve_mut(id)?;
        slot.value = None;
        slot.generation = slot.generation.wrapping_add(1);
        Some(id.next_generation())
    }

    /// Store `value` in a vacant slot.
    ///
    /// Returns the value back if the handle is stale or the slot is occupied.
    pub fn put(&mut self, id: SlotId, value: T) -> Result<(), T> {
        match self.resolve_mut(id) {
            Some(slot) if slot.value.is_none() => {
                slot.value = Some(value);
                Ok(())
            }
            _ => Err(value),
        }
    }

    /// Move the value out of a slot, leaving it vacant.
    pub fn take(&mut self, id: SlotId) -> Option<T> {
        self.resolve_mut(id)?.value.take()
    }

    /// Shared access to the value stored in a slot.
    pub fn get(&self, id: SlotId) -> Option<&T> {
        let slot = self.slots.get(id.index() as usize)?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.value.as_ref()
    }

    /// Mutable access to the value stored in a slot.
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.resolve_mut(id)?.value.as_mut()
    }

    /// Whether `id` resolves to a carved slot of the same generation.
    pub fn is_live(&self, id: SlotId) -> bool {
        self.slots
            .get(id.index() as usize)
            .is_some_and(|slot| slot.generation == id.generation())
    }

    /// Number of slots carved so far (the bump cursor).
    pub fn carved(&self) -> usize {
        self.slots.len()
    }

    /// Total number of slots the arena may hold.
    pub fn capacity(&self) -> usize {
        self.boundary
    }

    /// Slots still available to the bump cursor.
    pub fn remaining(&self) -> usize {
        self.boundary - self.slots.len()
    }

    fn resolve_mut(&mut self, id: SlotId) -> Option<&mut Slot<T>> {
        let slot = self.slots.get_mut(id.index() as usize)?;
        if slot.generation != id.generation() {
            return None;
        }
        Some(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_reserves_like_new() {
        let arena = SlotArena::<u32>::try_new(3).unwrap();
        assert_eq!(arena.capacity(), 3);
        assert_eq!(arena.carved(), 0);
    }

    #[test]
    fn try_new_rejects_overflowing_reservation() {
        assert!(SlotArena::<u64>::try_new(usize::MAX).is_err());
    }

    #[test]
    fn carve_is_sequential() {
        let mut arena = SlotArena::<u8>::new(4);
        assert_eq!(arena.carve(), Some(SlotId::new(0, 0)));
        assert_eq!(arena.carve(), Some(SlotId::new(1, 0)));
        assert_eq!(arena.carved(), 2);
        assert_eq!(arena.remaining(), 2);
    }

    #[test]
    fn carve_stops_at_boundary() {
        let mut arena = SlotArena::<u8>::new(1);
        assert!(arena.carve().is_some());
        assert!(arena.carve().is_none());
        assert_eq!(arena.remaining(), 0);
    }

    #[test]
    fn zero_boundary_carves_nothing() {
        let mut arena = SlotArena::<u8>::new(0);
        assert!(arena.carve().is_none());
    }

    #[test]
    fn put_then_get_reads_value() {
        let mut arena = SlotArena::new(2);
        let id = arena.carve().unwrap();
        arena.put(id, 42u32).unwrap();
        assert_eq!(arena.get(id), Some(&42));
        *arena.get_mut(id).unwrap() = 7;
        assert_eq!(arena.take(id), Some(7));
        assert_eq!(arena.get(id), None);
    }

    #[test]
    fn put_into_occupied_slot_returns_value() {
        let mut arena = SlotArena::new(1);
        let id = arena.carve().unwrap();
        arena.put(id, 1u8).unwrap();
        assert_eq!(arena.put(id, 2), Err(2));
        assert_eq!(arena.get(id), Some(&1));
    }

    #[test]
    fn retire_invalidates_old_handle() {
        let mut arena = SlotArena::new(1);
        let id = arena.carve().unwrap();
        arena.put(id, 'a').unwrap();
        let fresh = arena.retire(id).unwrap();

        assert!(!arena.is_live(id));
        assert!(arena.is_live(fresh));
        assert_eq!(arena.get(id), None);
        assert_eq!(arena.get(fresh), None, "retire vacates the slot");
        assert_eq!(arena.put(id, 'b'), Err('b'));
        arena.put(fresh, 'c').unwrap();
        assert_eq!(arena.get(fresh), Some(&'c'));
    }

    #[test]
    fn retire_twice_with_same_handle_is_rejected() {
        let mut arena = SlotArena::<u8>::new(1);
        let id = arena.carve().unwrap();
        assert!(arena.retire(id).is_some());
        assert!(arena.retire(id).is_none());
    }

    #[test]
    fn uncarved_handle_does_not_resolve() {
        let arena = SlotArena::<u8>::new(8);
        assert!(!arena.is_live(SlotId::new(3, 0)));
        assert_eq!(arena.get(SlotId::new(3, 0)), None);
    }
}
