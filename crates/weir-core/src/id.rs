//! Generation-checked slot handles.

use std::fmt;

/// Handle to a single slot inside a pool arena.
///
/// A handle is the pair `(index, generation)`. The allocator bumps a slot's
/// generation every time the slot is deallocated, so a handle kept across a
/// deallocation no longer resolves: lookups through it return `None` instead
/// of aliasing whatever value later reuses the slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId {
    index: u32,
    generation: u32,
}

impl SlotId {
    /// Create a handle from its raw parts.
    pub const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Position of the slot within the arena.
    pub fn index(self) -> u32 {
        self.index
    }

    /// Generation the slot had when this handle was issued.
    pub fn generation(self) -> u32 {
        self.generation
    }

    /// The handle the same slot will carry after its next deallocation.
    pub fn next_generation(self) -> Self {
        Self {
            index: self.index,
            generation: self.generation.wrapping_add(1),
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot {}@{}", self.index, self.generation)
    }
}
