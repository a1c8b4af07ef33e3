//! Error types for resource map parsing and resource loading.

use thiserror::Error;

use crate::compress::CompressError;

/// Errors that can occur while parsing a `RESOURCE.MAP` file.
#[derive(Debug, Error)]
pub enum MapError {
	/// The map file ended mid-record instead of at a sentinel.
	#[error("resource map truncated: {context}")]
	Truncated {
		/// What the parser was trying to read when the data ran out.
		context: &'static str,
	},

	/// The same `(Type, Number)` pair appeared twice.
	#[error("duplicate resource entry: type={resource_type:?} number={number}")]
	DuplicateEntry {
		/// Resource type shared by both entries.
		resource_type: super::ResourceType,
		/// Resource number shared by both entries.
		number: u16,
	},

	/// Underlying I/O failure opening or reading the map file.
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

/// Errors that can occur while loading and decompressing a resource.
#[derive(Debug, Error)]
pub enum LoaderError {
	/// The header's declared compression method has no entry in the active
	/// [`super::CompressionTable`].
	#[error("unknown compression method {method} for table {table:?}")]
	UnknownCompression {
		/// Method index read from the resource header.
		method: u16,
		/// Which table (SCI0 or SCI01) was active.
		table: super::CompressionTable,
	},

	/// A size or range check on the resource header failed.
	#[error("malformed resource header: {context}")]
	MalformedHeader {
		/// What check failed.
		context: &'static str,
	},

	/// Decompression failed after a valid method was selected.
	#[error(transparent)]
	Compress(#[from] CompressError),

	/// Underlying I/O failure opening, seeking, or reading the archive file.
	#[error(transparent)]
	Io(#[from] std::io::Error),
}
