//! Resource body decompressors.
//!
//! Every SCI0/SCI01 resource record is stored with a method tag drawn from
//! one of two small lookup tables (see [`crate::resource::CompressionTable`]).
//! Each decompressor in this module takes a compressed byte source and a
//! known decompressed length, and must produce exactly that many bytes.

mod huffman;
mod lzw;
mod lzw1;
mod none;

pub use huffman::decompress as huffman_decompress;
pub use lzw::decompress as lzw_decompress;
pub use lzw1::decompress as lzw1_decompress;
pub use none::decompress as none_decompress;

use thiserror::Error;

/// Errors produced while decompressing a resource body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompressError {
	/// The source ran out of bytes before `decompressedSize` was reached.
	#[error("decompression truncated: produced {produced} of {expected} expected bytes")]
	Truncated {
		/// Bytes actually produced before the source was exhausted.
		produced: usize,
		/// Bytes the caller declared as the decompressed size.
		expected: usize,
	},

	/// The source bit-stream ran out of bits mid-token.
	#[error("bit stream exhausted while decompressing")]
	BitsExhausted(#[from] crate::bits::BitsError),

	/// A Huffman node table referenced a node index outside the table.
	#[error("huffman node index {index} out of range (table has {len} nodes)")]
	HuffmanNodeOutOfRange {
		/// Index computed while walking the Huffman tree.
		index: usize,
		/// Number of nodes in the table.
		len: usize,
	},

	/// The final output length did not match the declared decompressed size.
	#[error("decompression length mismatch: expected {expected}, got {actual}")]
	LengthMismatch {
		/// Declared decompressed size.
		expected: usize,
		/// Bytes actually emitted.
		actual: usize,
	},
}
