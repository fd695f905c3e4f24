//! Weir: a fixed-capacity pool allocator and a doubly linked list that
//! draws every node from it.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! weir sub-crates. For most users, adding `weir` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use weir::prelude::*;
//!
//! // A pool with room for exactly three nodes.
//! let mut list: List<&str> = List::new(PoolConfig::for_slots::<Node<&str>>(3));
//! list.push_back("b").unwrap();
//! list.push_front("a").unwrap();
//! list.push_back("c").unwrap();
//!
//! // The pool is full: the next push fails instead of growing.
//! assert!(matches!(
//!     list.push_back("d"),
//!     Err(ListError::Alloc(AllocError::OutOfMemory { .. }))
//! ));
//!
//! // Popping returns the slot to the free list, so the push now succeeds.
//! assert_eq!(list.pop_front().unwrap(), "a");
//! list.push_back("d").unwrap();
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), ["b", "c", "d"]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `weir-core` | `SlotId`, `AllocError`, the `SlotAllocator` trait |
//! | [`arena`] | `weir-arena` | `PoolConfig`, `PoolAllocator`, `SlotArena` |
//! | [`list`] | `weir-list` | `List`, `Node`, `Cursor`, `Iter`, `ListError` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Slot handles, allocation errors, and the allocator trait (`weir-core`).
pub use weir_core as types;

/// The fixed-capacity pool allocator (`weir-arena`).
pub use weir_arena as arena;

/// The pool-backed doubly linked list (`weir-list`).
///
/// Most users only need [`list::List`] and [`list::ListError`], which are
/// also in the [`prelude`].
pub use weir_list as list;

/// Common imports for typical weir usage.
///
/// ```rust
/// use weir::prelude::*;
/// ```
pub mod prelude {
    // Allocation
    pub use weir_arena::{PoolAllocator, PoolConfig};
    pub use weir_core::{AllocError, SlotAllocator, SlotId};

    // Container
    pub use weir_list::{Cursor, List, ListError, Node};
}
