//! A doubly linked list whose nodes come from a fixed-capacity pool.
//!
//! [`List<T, A>`] owns one allocator `A` for its whole lifetime and obtains
//! every [`Node<T>`] from it: pushes and inserts allocate a slot and
//! construct the node into it, pops and erases unlink the node and return
//! the slot to the allocator's free list. With the default
//! [`PoolAllocator`](weir_arena::PoolAllocator) the list never touches the
//! system allocator after construction.
//!
//! # Positions
//!
//! Besides indices, positions are expressed with [`Cursor`]s: copyable node
//! handles with an explicit end sentinel. Cursors are advanced through the
//! list ([`List::advance`]) so that stepping past the end, or using a cursor
//! whose node has been erased, is reported as a [`ListError`] rather than
//! reading another element.
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `push_front` / `push_back` / `pop_front` / `pop_back` | O(1) |
//! | `insert` / `erase` at a cursor | O(1) |
//! | `get` / `insert_at` / `erase_at` | O(index) |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cursor;
pub mod error;
pub mod iter;
pub mod list;
pub mod node;

pub use cursor::Cursor;
pub use error::ListError;
pub use iter::Iter;
pub use list::List;
pub use node::Node;
