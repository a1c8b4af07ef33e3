//! Font resource decoding: a fixed-height, variable-width bitmap font.
//!
//! ```text
//! header: { _: u16, characters: u16, lineHeight: u16 } then `characters` u16 offsets
//! glyph:  { width: u8, height: u8 } then ceil(width/8)*height row bytes, MSB-left
//! ```

use thiserror::Error;

/// Errors produced while decoding a font resource.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FontError {
	/// A read ran past the end of the resource payload.
	#[error("font resource truncated")]
	Truncated,

	/// A header field or offset failed a range check.
	#[error("malformed font header: {0}")]
	MalformedHeader(String),
}

/// A decoded font: a shared line height and one glyph per character code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontTable {
	pub line_height: u16,
	pub glyphs: Vec<Glyph>,
}

/// One decoded glyph: its own width/height and packed row bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
	pub width: u8,
	pub height: u8,
	bytes: Vec<u8>,
}

impl Glyph {
	fn bytes_per_row(&self) -> usize {
		(usize::from(self.width) + 7) / 8
	}

	/// Reads pixel `(x, y)`: `true` if set. Bits are packed MSB-first within
	/// each row byte (bit 7 of the first byte is column 0).
	pub fn get_pixel(&self, x: u32, y: u32) -> bool {
		let bpr = self.bytes_per_row();
		let row = y as usize * bpr + (x as usize / 8);
		let bit = 7 - (x % 8);
		(self.bytes[row] >> bit) & 1 != 0
	}
}

impl FontTable {
	/// Decodes a complete font resource payload.
	pub fn decode(bytes: &[u8]) -> Result<Self, FontError> {
		let mut cur = Cursor::new(bytes, 0);
		cur.take(2)?; // reserved
		let characters = cur.read_u16()?;
		let line_height = cur.read_u16()?;

		let mut offsets = Vec::with_capacity(characters as usize);
		for _ in 0..characters {
			offsets.push(cur.read_u16()?);
		}

		let mut glyphs = Vec::with_capacity(characters as usize);
		for &offset in &offsets {
			let mut gcur = Cursor::new(bytes, offset as usize);
			let width = gcur.read_u8()?;
			let height = gcur.read_u8()?;
			let bitmap_len = ((usize::from(width) + 7) / 8) * usize::from(height);
			let data = gcur.take(bitmap_len)?.to_vec();
			glyphs.push(Glyph {
				width,
				height,
				bytes: data,
			});
		}

		Ok(FontTable { line_height, glyphs })
	}
}

struct Cursor<'a> {
	data: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	fn new(data: &'a [u8], pos: usize) -> Self {
		Self { data, pos }
	}

	fn take(&mut self, n: usize) -> Result<&'a [u8], FontError> {
		if self.pos + n > self.data.len() {
			return Err(FontError::Truncated);
		}
		let slice = &self.data[self.pos..self.pos + n];
		self.pos += n;
		Ok(slice)
	}

	fn read_u8(&mut self) -> Result<u8, FontError> {
		Ok(self.take(1)?[0])
	}

	fn read_u16(&mut self) -> Result<u16, FontError> {
		let b = self.take(2)?;
		Ok(u16::from_le_bytes([b[0], b[1]]))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn single_glyph_font(width: u8, height: u8, rows: &[u8]) -> Vec<u8> {
		let mut bytes = Vec::new();
		bytes.extend_from_slice(&[0u8; 2]); // reserved
		bytes.extend_from_slice(&1u16.to_le_bytes()); // characters
		bytes.extend_from_slice(&8u16.to_le_bytes()); // lineHeight
		bytes.extend_from_slice(&8u16.to_le_bytes()); // glyph offset
		bytes.push(width);
		bytes.push(height);
		bytes.extend_from_slice(rows);
		bytes
	}

	#[test]
	fn decodes_header_fields() {
		let bytes = single_glyph_font(8, 1, &[0b1010_0000]);
		let font = FontTable::decode(&bytes).unwrap();
		assert_eq!(font.line_height, 8);
		assert_eq!(font.glyphs.len(), 1);
	}

	#[test]
	fn glyph_bit_order_is_msb_left() {
		let bytes = single_glyph_font(8, 1, &[0b1010_0000]);
		let font = FontTable::decode(&bytes).unwrap();
		let glyph = &font.glyphs[0];
		assert!(glyph.get_pixel(0, 0));
		assert!(!glyph.get_pixel(1, 0));
		assert!(glyph.get_pixel(2, 0));
		assert!(!glyph.get_pixel(3, 0));
	}

	#[test]
	fn multi_byte_row_width_rounds_up() {
		// width=9 -> 2 bytes per row
		let bytes = single_glyph_font(9, 1, &[0xFF, 0x80]);
		let font = FontTable::decode(&bytes).unwrap();
		let glyph = &font.glyphs[0];
		assert!(glyph.get_pixel(8, 0));
	}
}
