//! List-specific error types.

use std::error::Error;
use std::fmt;

use weir_core::AllocError;

/// Errors that can occur during list operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListError {
    /// The allocator could not supply a node slot.
    Alloc(AllocError),
    /// `front`, `back`, or a pop was called on an empty list.
    EmptyContainer,
    /// An index does not address an existing element.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Length of the list at the time of the request.
        len: usize,
    },
    /// A cursor at the end sentinel, or at an erased node, was used where
    /// an element is required.
    InvalidPosition,
    /// A cursor already at the end sentinel was advanced.
    IteratorAdvancePastEnd,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alloc(e) => write!(f, "node allocation failed: {e}"),
            Self::EmptyContainer => write!(f, "list is empty"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for list of length {len}")
            }
            Self::InvalidPosition => write!(f, "cursor does not point at an element"),
            Self::IteratorAdvancePastEnd => write!(f, "cannot advance cursor past the end"),
        }
    }
}

impl Error for ListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Alloc(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AllocError> for ListError {
    fn from(e: AllocError) -> Self {
        Self::Alloc(e)
    }
}
