//! Benchmark fixture generators for `sci_types`.
//!
//! Every fixture here is synthesized in-process: no game assets are checked
//! into this repository. Each generator produces a byte stream that the
//! corresponding decoder in `sci_types::compress` or `sci_types::pic` is
//! guaranteed to accept, scaled to a requested size, so the benchmarks in
//! `benches/decode.rs` can sweep sizes without shipping binary fixtures.

/// Builds a "method 0" (stored) fixture: `len` literal bytes, cycling through
/// the full byte range so the copy isn't trivially one repeated value.
pub fn generate_none_fixture(len: usize) -> Vec<u8> {
	(0..len).map(|i| (i % 256) as u8).collect()
}

/// Packs `(code, width)` pairs LSB-first into a byte buffer, as the classic
/// LZW and LZW1 decoders expect.
fn pack_codes(codes: &[(u32, u32)]) -> Vec<u8> {
	let mut bytes = Vec::new();
	let mut bitpos = 0usize;
	for &(code, width) in codes {
		for i in 0..width {
			let bit = (code >> i) & 1;
			let byte_idx = bitpos / 8;
			while bytes.len() <= byte_idx {
				bytes.push(0);
			}
			if bit != 0 {
				bytes[byte_idx] |= 1 << (bitpos % 8);
			}
			bitpos += 1;
		}
	}
	bytes
}

/// Builds a "method 1" (classic LZW) fixture decoding to `len` bytes.
///
/// Every code is a literal byte value below the initial dictionary size
/// (256), so the stream decodes cleanly regardless of how the dictionary
/// grows from the back-references the decoder records along the way.
pub fn generate_lzw_fixture(len: usize) -> (Vec<u8>, usize) {
	let codes: Vec<(u32, u32)> = (0..len).map(|i| (u32::from((i % 256) as u8), 9)).collect();
	(pack_codes(&codes), len)
}

/// Builds a "method 2 under SCI0" (node-table Huffman) fixture decoding to
/// `len` bytes.
///
/// The node table is two nodes: node 0 always escapes to an 8-bit literal
/// (selector bit 0) or selects the terminator leaf at node 1 (selector bit
/// 1). The bit-stream alternates `len` literal escapes with a trailing
/// terminator bit.
pub fn generate_huffman_fixture(len: usize) -> (Vec<u8>, usize) {
	const TERM: u8 = 0xFF;
	let mut src = vec![0x02u8, TERM];
	src.extend_from_slice(&[0x00, 0x01]); // node 0: siblings = 0x01
	src.extend_from_slice(&[TERM, 0x00]); // node 1: leaf, value = term

	let mut bits: Vec<bool> = Vec::with_capacity(len * 9 + 1);
	for i in 0..len {
		bits.push(false); // select the literal escape
		let byte = (i % 256) as u8;
		for shift in (0..8).rev() {
			bits.push((byte >> shift) & 1 != 0);
		}
	}
	bits.push(true); // select node 1, the terminator leaf

	let mut stream = vec![0u8; bits.len().div_ceil(8)];
	for (i, bit) in bits.into_iter().enumerate() {
		if bit {
			stream[i / 8] |= 1 << (7 - (i % 8));
		}
	}
	src.extend_from_slice(&stream);
	(src, len)
}

/// Builds a "method 2 under SCI01" (LZW1) fixture decoding to `len` bytes.
///
/// Every code is a literal byte value, so no KwKwK or back-reference path is
/// exercised; this isolates the steady-state per-token cost.
pub fn generate_lzw1_fixture(len: usize) -> (Vec<u8>, usize) {
	const END: u32 = 0x101;
	let mut codes: Vec<(u32, u32)> = (0..len).map(|i| (u32::from((i % 256) as u8), 9)).collect();
	codes.push((END, 9));
	(pack_codes(&codes), len)
}

/// Builds a picture program that draws `segments` short-line strokes
/// followed by a flood fill, exercising the interpreter's opcode dispatch
/// and the raster line/fill hot paths together.
pub fn generate_pic_fixture(segments: usize) -> Vec<u8> {
	let mut bytes = Vec::new();

	bytes.push(0xF0); // SetColor
	bytes.push(0x01);

	bytes.push(0xF7); // ShortLines
	bytes.extend_from_slice(&encode_absolute_point(10, 10));
	let mut x = 10i32;
	let mut y = 10i32;
	for i in 0..segments {
		let dx = if i % 2 == 0 { 3 } else { -3 };
		let dy = if i % 3 == 0 { 2 } else { -2 };
		x = (x + dx).clamp(0, 300);
		y = (y + dy).clamp(0, 180);
		bytes.push(encode_relative1_point(dx, dy));
	}

	bytes.push(0xF8); // Fill
	bytes.extend_from_slice(&encode_absolute_point(160, 95));

	bytes.push(0xFF); // Done
	bytes
}

fn encode_absolute_point(x: u32, y: u32) -> [u8; 3] {
	let b0 = (((x & 0xF00) >> 4) | ((y & 0xF00) >> 8)) as u8;
	let b1 = (x & 0xFF) as u8;
	let b2 = (y & 0xFF) as u8;
	[b0, b1, b2]
}

fn encode_relative1_point(dx: i32, dy: i32) -> u8 {
	let x_sign = if dx < 0 { 1u8 } else { 0 };
	let x_mag = (dx.unsigned_abs() & 0x7) as u8;
	let y_sign = if dy < 0 { 1u8 } else { 0 };
	let y_mag = (dy.unsigned_abs() & 0x7) as u8;
	(x_sign << 7) | (x_mag << 4) | (y_sign << 3) | y_mag
}

/// Common benchmark sizes for synthetic fixtures.
pub mod sizes {
	/// Tiny payload: 256 bytes.
	pub const TINY: usize = 256;
	/// Small payload: 4 KiB, roughly a single small sprite or picture.
	pub const SMALL: usize = 4 * 1024;
	/// Medium payload: 32 KiB, roughly a detailed background picture.
	pub const MEDIUM: usize = 32 * 1024;
	/// Large payload: 64 KiB, the largest body a `RESOURCE.NNN` record's
	/// 16-bit length fields can address.
	pub const LARGE: usize = 64 * 1024 - 1;
}

#[cfg(test)]
mod tests {
	use super::*;
	use sci_types::compress::{huffman_decompress, lzw1_decompress, lzw_decompress, none_decompress};
	use sci_types::pic::Picture;

	#[test]
	fn none_fixture_round_trips() {
		let data = generate_none_fixture(sizes::SMALL);
		let out = none_decompress(&data, sizes::SMALL).unwrap();
		assert_eq!(out.len(), sizes::SMALL);
	}

	#[test]
	fn lzw_fixture_decodes_to_requested_length() {
		let (src, len) = generate_lzw_fixture(sizes::SMALL);
		let out = lzw_decompress(&src, len).unwrap();
		assert_eq!(out.len(), len);
	}

	#[test]
	fn huffman_fixture_decodes_to_requested_length() {
		let (src, len) = generate_huffman_fixture(sizes::SMALL);
		let out = huffman_decompress(&src, len).unwrap();
		assert_eq!(out.len(), len);
	}

	#[test]
	fn lzw1_fixture_decodes_to_requested_length() {
		let (src, len) = generate_lzw1_fixture(sizes::SMALL);
		let out = lzw1_decompress(&src, len).unwrap();
		assert_eq!(out.len(), len);
	}

	#[test]
	fn pic_fixture_decodes() {
		let program = generate_pic_fixture(200);
		Picture::decode(&program).unwrap();
	}
}
