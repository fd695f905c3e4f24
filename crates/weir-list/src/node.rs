//! List nodes as stored in the allocator.

use weir_core::SlotId;

/// One element of a [`List`](crate::List) together with its links.
///
/// Nodes live in the list's allocator. `next` is the owning link of the
/// chain: a node is only destroyed after it has been unlinked from its
/// predecessor. `prev` is a plain back-reference used for traversal and
/// splicing.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Option<SlotId>,
    pub(crate) prev: Option<SlotId>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            next: None,
            prev: None,
        }
    }

    /// The stored element.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Slot of the following node, `None` at the tail.
    pub fn next(&self) -> Option<SlotId> {
        self.next
    }

    /// Slot of the preceding node, `None` at the head.
    pub fn prev(&self) -> Option<SlotId> {
        self.prev
    }
}
