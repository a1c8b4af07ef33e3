//! Method 0: pass-through. The body is stored uncompressed.

use super::CompressError;

/// Copies `decompressed_size` bytes verbatim from `src`.
pub fn decompress(src: &[u8], decompressed_size: usize) -> Result<Vec<u8>, CompressError> {
	if src.len() < decompressed_size {
		return Err(CompressError::Truncated {
			produced: src.len(),
			expected: decompressed_size,
		});
	}
	Ok(src[..decompressed_size].to_vec())
}
