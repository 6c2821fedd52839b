//! Growable contiguous sequence container with checked cursors.
//!
//! Provides [`Vector`], a resizable array with amortized O(1) append,
//! checked random access, mid-sequence insert/erase, and forward cursors
//! that fail at `end()` instead of reading past it.
//!
//! # Architecture
//!
//! ```text
//! Vector<T> (owner)
//! ├── Buffer<T> (live elements + logical capacity, replaced on reallocation)
//! ├── GrowthPolicy (min capacity floor, growth factor)
//! ├── VectorId (per-instance identity)
//! └── epoch (reallocation counter)
//!
//! Cursor<'a, T> / CursorMut<'a, T>   borrowed views: (index, &Vector)
//! Position                           detached handle: (index, VectorId, epoch)
//! ```
//!
//! # Invalidation
//!
//! Every capacity change goes through one reallocation path, which bumps
//! the epoch. Borrowed cursors cannot survive it at all; detached
//! [`Position`]s survive but are rejected with
//! [`SeqError::StalePosition`] when used. Removing an element without a
//! reallocation is only caught by the bounds checks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod cursor;
pub mod error;
pub mod id;
pub mod position;
mod render;
pub mod vector;

// Public re-exports for the primary API surface.
pub use config::GrowthPolicy;
pub use cursor::{Cursor, CursorMut};
pub use error::{PolicyError, SeqError};
pub use id::VectorId;
pub use position::Position;
pub use vector::Vector;
