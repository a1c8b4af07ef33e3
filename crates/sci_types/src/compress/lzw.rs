//! Method 1 (SCI0): classic variable-width LZW, LSB-first bit packing.
//!
//! This is the GIF-style LZW variant: codes start at 9 bits and grow to a
//! maximum of 12, code 256 clears the dictionary, code 257 marks end of
//! stream. The decoder does not rely on the end-of-stream code to know when
//! to stop; it stops once the caller's declared decompressed length has been
//! produced, matching resource records that omit a trailing EOF code.

use crate::bits::LsbReader;

use super::CompressError;

const CLEAR_CODE: u32 = 256;
const EOF_CODE: u32 = 257;
const FIRST_CODE: u32 = 258;
const MIN_WIDTH: u32 = 9;
const MAX_WIDTH: u32 = 12;

struct Dictionary {
	entries: Vec<Vec<u8>>,
}

impl Dictionary {
	fn new() -> Self {
		let mut entries = Vec::with_capacity(4096);
		for b in 0..=255u8 {
			entries.push(vec![b]);
		}
		entries.push(Vec::new()); // 256: clear
		entries.push(Vec::new()); // 257: eof
		Self { entries }
	}

	fn len(&self) -> u32 {
		self.entries.len() as u32
	}

	fn push(&mut self, entry: Vec<u8>) {
		self.entries.push(entry);
	}

	fn get(&self, code: u32) -> Option<&[u8]> {
		self.entries.get(code as usize).map(Vec::as_slice)
	}
}

/// Decompresses `src` into exactly `decompressed_size` bytes.
pub fn decompress(src: &[u8], decompressed_size: usize) -> Result<Vec<u8>, CompressError> {
	let mut reader = LsbReader::new(src);
	let mut out = Vec::with_capacity(decompressed_size);
	let mut dict = Dictionary::new();
	let mut width = MIN_WIDTH;
	let mut prev: Option<Vec<u8>> = None;

	while out.len() < decompressed_size {
		let code = reader.read_bits(width)?;

		if code == CLEAR_CODE {
			dict = Dictionary::new();
			width = MIN_WIDTH;
			prev = None;
			continue;
		}
		if code == EOF_CODE {
			break;
		}

		let entry: Vec<u8> = if code < dict.len() {
			dict.get(code).expect("code < dict.len()").to_vec()
		} else if code == dict.len() {
			match &prev {
				Some(p) => {
					let mut e = p.clone();
					e.push(p[0]);
					e
				}
				None => {
					return Err(CompressError::LengthMismatch {
						expected: decompressed_size,
						actual: out.len(),
					});
				}
			}
		} else {
			return Err(CompressError::LengthMismatch {
				expected: decompressed_size,
				actual: out.len(),
			});
		};

		out.extend_from_slice(&entry);

		if let Some(p) = prev {
			let mut new_entry = p;
			new_entry.push(entry[0]);
			if dict.len() < (1 << MAX_WIDTH) {
				dict.push(new_entry);
			}
			if dict.len() == (1 << width) && width < MAX_WIDTH {
				width += 1;
			}
		}

		prev = Some(entry);
	}

	if out.len() != decompressed_size {
		out.truncate(decompressed_size);
		if out.len() != decompressed_size {
			return Err(CompressError::LengthMismatch {
				expected: decompressed_size,
				actual: out.len(),
			});
		}
	}

	Ok(out)
}
