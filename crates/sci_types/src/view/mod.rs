//! View (sprite) resource decoding.
//!
//! A view is a list of sprite groups; each group is a list of sprites sharing
//! one mirror flag. Sprite pixel data is RLE-encoded 4-bit color indices,
//! expanded and (for mirrored groups) row-flipped at decode time.
//!
//! ```text
//! header: { groups: u16, mirrored: u16, _: u32 } then `groups` u16 offsets
//! group:  { images: u16, _: u16 } then `images` u16 offsets
//! sprite: { width: u16, height: u16, offsetX: i8, offsetY: i8, keyColor: u8 }
//!         then RLE pixel data
//! ```

use thiserror::Error;

/// Errors produced while decoding a view resource.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ViewError {
	/// The bit stream ran out of data (reserved for bit-level sub-decodes;
	/// a view's own framing is byte-oriented and raises [`ViewError::Truncated`]
	/// instead).
	#[error(transparent)]
	Bits(#[from] crate::bits::BitsError),

	/// A read ran past the end of the resource payload.
	#[error("view resource truncated")]
	Truncated,

	/// A header field or offset failed a range check.
	#[error("malformed view header: {0}")]
	MalformedHeader(String),
}

/// A fully decoded view: one sprite group per entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewFile {
	pub groups: Vec<SpriteGroup>,
}

/// A set of sprites sharing one mirror flag.
pub type SpriteGroup = Vec<Sprite>;

/// One decoded sprite: dimensions, draw offset, transparency key, and
/// expanded (non-RLE) pixel buffer, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
	pub width: u16,
	pub height: u16,
	pub offset_x: i8,
	pub offset_y: i8,
	pub key_color: u8,
	pub pixels: Vec<u8>,
}

impl ViewFile {
	/// Decodes a complete view resource payload.
	pub fn decode(bytes: &[u8]) -> Result<Self, ViewError> {
		let mut cur = Cursor::new(bytes, 0);
		let group_count = cur.read_u16()?;
		let mirrored = cur.read_u16()?;
		cur.take(4)?;

		let mut group_offsets = Vec::with_capacity(group_count as usize);
		for _ in 0..group_count {
			group_offsets.push(cur.read_u16()?);
		}

		let mut groups = Vec::with_capacity(group_count as usize);
		for (g, &group_offset) in group_offsets.iter().enumerate() {
			let mut gcur = Cursor::new(bytes, group_offset as usize);
			let image_count = gcur.read_u16()?;
			gcur.take(2)?;

			let mut sprite_offsets = Vec::with_capacity(image_count as usize);
			for _ in 0..image_count {
				sprite_offsets.push(gcur.read_u16()?);
			}

			let is_mirrored = mirrored & (1 << g) != 0;

			let mut sprites = Vec::with_capacity(image_count as usize);
			for &sprite_offset in &sprite_offsets {
				sprites.push(decode_sprite(bytes, sprite_offset as usize, is_mirrored)?);
			}
			groups.push(sprites);
		}

		Ok(ViewFile { groups })
	}
}

fn decode_sprite(bytes: &[u8], offset: usize, mirrored: bool) -> Result<Sprite, ViewError> {
	let mut cur = Cursor::new(bytes, offset);
	let width = cur.read_u16()?;
	let height = cur.read_u16()?;
	let mut offset_x = cur.read_i8()?;
	let offset_y = cur.read_i8()?;
	let key_color = cur.read_u8()?;

	let total = usize::from(width) * usize::from(height);
	let mut pixels = Vec::with_capacity(total);
	while pixels.len() < total {
		let b = cur.read_u8()?;
		let color = b & 0xF;
		let run = usize::from(b >> 4);
		for _ in 0..run {
			if pixels.len() >= total {
				break;
			}
			pixels.push(color);
		}
	}

	if mirrored {
		offset_x = -offset_x;
		let stride = usize::from(width);
		let half = stride / 2;
		for y in 0..usize::from(height) {
			let row = y * stride;
			for x in 0..half {
				pixels.swap(row + x, row + stride - x - 1);
			}
		}
	}

	Ok(Sprite {
		width,
		height,
		offset_x,
		offset_y,
		key_color,
		pixels,
	})
}

struct Cursor<'a> {
	data: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	fn new(data: &'a [u8], pos: usize) -> Self {
		Self { data, pos }
	}

	fn take(&mut self, n: usize) -> Result<&'a [u8], ViewError> {
		if self.pos + n > self.data.len() {
			return Err(ViewError::Truncated);
		}
		let slice = &self.data[self.pos..self.pos + n];
		self.pos += n;
		Ok(slice)
	}

	fn read_u8(&mut self) -> Result<u8, ViewError> {
		Ok(self.take(1)?[0])
	}

	fn read_i8(&mut self) -> Result<i8, ViewError> {
		Ok(self.read_u8()? as i8)
	}

	fn read_u16(&mut self) -> Result<u16, ViewError> {
		let b = self.take(2)?;
		Ok(u16::from_le_bytes([b[0], b[1]]))
	}
}
