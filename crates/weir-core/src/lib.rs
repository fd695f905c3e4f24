//! Core types and traits for the weir pool allocator and list.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the allocator and the containers built on it:
//! the [`SlotId`] handle, the [`AllocError`] taxonomy, and the
//! [`SlotAllocator`] capability trait that containers are generic over.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod traits;

pub use error::AllocError;
pub use id::SlotId;
pub use traits::SlotAllocator;
