//! Fixed-capacity pool allocation for weir containers.
//!
//! A [`PoolAllocator<T>`] reserves one arena sized in bytes at construction
//! and hands out slots sized for exactly one `T`. Slots are carved from the
//! arena in bump fashion; released slots go on a free list and are reused
//! before the bump cursor advances again. The arena never grows and memory
//! is only returned to the system when the allocator is dropped.
//!
//! # Architecture
//!
//! ```text
//! PoolAllocator<T>
//! ├── PoolConfig (capacity in bytes, fixed at construction)
//! ├── SlotArena<T> (Vec<Slot<T>> reserved up front, bump cursor = len)
//! └── free list (Vec<SlotId>, last released is first reused)
//! ```
//!
//! Every slot carries a generation that is bumped on deallocation, so a
//! [`SlotId`](weir_core::SlotId) kept past a deallocation stops resolving.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod pool;
pub mod slot;

// Public re-exports for the primary API surface.
pub use config::PoolConfig;
pub use pool::PoolAllocator;
pub use slot::SlotArena;
