//! Internal crate for `sci-reader`.
//!
//! This crate is separated from `sci_types` so a future dynamically-linked
//! front-end has a stable re-export seam to compile against, and should not
//! be used directly.
//!
//! # Examples
//!
//! ```no_run
//! use sci_internal::prelude::*;
//!
//! let root = Root::open("path/to/game", CompressionTable::Sci01)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// `use sci_internal::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export sci_types for convenience
pub use sci_types;
