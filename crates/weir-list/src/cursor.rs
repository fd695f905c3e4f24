//! Forward cursors over list nodes.

use weir_core::SlotId;

/// A position in a [`List`](crate::List): either a node or the end sentinel.
///
/// Cursors are plain copies of a node handle. Two cursors are equal when
/// they name the same node, so a cursor is invalidated the moment its node
/// is erased; list operations reject such a cursor with
/// [`ListError::InvalidPosition`](crate::ListError::InvalidPosition).
/// Using a cursor with a list other than the one that produced it is a
/// caller error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cursor {
    node: Option<SlotId>,
}

impl Cursor {
    /// The one-past-the-last position.
    pub const END: Self = Self { node: None };

    pub(crate) fn at(node: Option<SlotId>) -> Self {
        Self { node }
    }

    /// Whether this is the end sentinel.
    pub fn is_end(self) -> bool {
        self.node.is_none()
    }

    /// The node this cursor points at, `None` for the end sentinel.
    pub fn slot(self) -> Option<SlotId> {
        self.node
    }
}
