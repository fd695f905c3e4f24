//! Console driver for a pool-backed list of squares.
//!
//! [`menu::Session`] reads numbered commands from any [`std::io::BufRead`]
//! and writes prompts and results to any [`std::io::Write`], so the `weir`
//! binary runs it on stdin/stdout while tests feed it scripted input.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod menu;
pub mod shape;

pub use error::CliError;
pub use menu::Session;
pub use shape::{ParseSquareError, Square, Vertex};
