//! Prelude module for `sci_internal`.
//!
//! This module provides a convenient way to import the commonly used types
//! for loading and decoding SCI0/SCI01 resources.
//!
//! # Examples
//!
//! ```no_run
//! use sci_internal::prelude::*;
//!
//! let root = Root::open("path/to/game", CompressionTable::Sci01)?;
//! let pic = root.picture(42).expect("resource 42 exists").decode()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Resource map / loader
#[doc(inline)]
pub use sci_types::resource::{
	CompressionMethod, CompressionTable, LoaderError, MapError, Mapping, ResourceMap,
	ResourceNumber, ResourceType, Root,
};

// Mapping wrappers
#[doc(inline)]
pub use sci_types::mapping::{
	CursorMapping, FontMapping, PictureMapping, RawMapping, TextMapping, ViewMapping,
};

// Decoded domain types
#[doc(inline)]
pub use sci_types::cursor::{Cursor, CursorError, Pixel};
#[doc(inline)]
pub use sci_types::font::{FontError, FontTable, Glyph};
#[doc(inline)]
pub use sci_types::palette::{Ditherer, EgaPalette};
#[doc(inline)]
pub use sci_types::pic::{PicError, Picture};
#[doc(inline)]
pub use sci_types::raster::Surface;
#[doc(inline)]
pub use sci_types::text::TextLines;
#[doc(inline)]
pub use sci_types::view::{Sprite, SpriteGroup, ViewError, ViewFile};

// Re-export the whole crate for advanced usage
#[doc(inline)]
pub use sci_types;
