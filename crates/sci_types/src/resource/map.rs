//! `RESOURCE.MAP` parsing.
//!
//! The map is a flat sequence of 6-byte `(id: u16, tail: u32)`
//! little-endian records terminated by the sentinel pair
//! `(0xFFFF, 0xFFFFFFFF)`. `id` packs a 5-bit type tag and an 11-bit
//! resource number; `tail` packs a 6-bit archive file index and a 26-bit
//! byte offset into that file.

use super::MapError;

const ID_END_TOKEN: u16 = u16::MAX;
const TAIL_END_TOKEN: u32 = u32::MAX;

/// The ten resource kinds a map entry's type tag can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
	View,
	Pic,
	Script,
	Text,
	Sound,
	Memory,
	Vocab,
	Font,
	Cursor,
	Patch,
	/// A type tag outside the ten known kinds. Carries the raw 5-bit value.
	Unknown(u8),
}

impl ResourceType {
	fn from_tag(tag: u8) -> Self {
		match tag {
			0 => Self::View,
			1 => Self::Pic,
			2 => Self::Script,
			3 => Self::Text,
			4 => Self::Sound,
			5 => Self::Memory,
			6 => Self::Vocab,
			7 => Self::Font,
			8 => Self::Cursor,
			9 => Self::Patch,
			other => Self::Unknown(other),
		}
	}
}

/// A resource's number within its type, as recorded in the map (11 bits).
pub type ResourceNumber = u16;

/// One parsed `RESOURCE.MAP` record: where a resource lives, not yet
/// loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapEntry {
	pub resource_type: ResourceType,
	pub number: ResourceNumber,
	pub file_index: u8,
	pub offset: u32,
	/// The raw packed id word, kept for the decoded [`super::Resource::id`].
	pub id: u16,
}

/// A fully parsed `RESOURCE.MAP`.
#[derive(Debug, Clone, Default)]
pub struct ResourceMap {
	pub entries: Vec<MapEntry>,
}

impl ResourceMap {
	/// Parses a complete in-memory map file.
	pub fn parse(bytes: &[u8]) -> Result<Self, MapError> {
		let mut entries = Vec::new();
		let mut cursor = 0usize;

		loop {
			if cursor + 6 > bytes.len() {
				return Err(MapError::Truncated {
					context: "expected a map record or end sentinel",
				});
			}

			let id = u16::from_le_bytes([bytes[cursor], bytes[cursor + 1]]);
			let tail = u32::from_le_bytes([
				bytes[cursor + 2],
				bytes[cursor + 3],
				bytes[cursor + 4],
				bytes[cursor + 5],
			]);
			cursor += 6;

			if id == ID_END_TOKEN && tail == TAIL_END_TOKEN {
				break;
			}

			let resource_type = ResourceType::from_tag((id >> 11) as u8);
			let number = id & 0x07ff;
			let file_index = (tail >> 26) as u8;
			let offset = tail & 0x03ff_ffff;

			for existing in &entries {
				let existing: &MapEntry = existing;
				if existing.resource_type == resource_type && existing.number == number {
					return Err(MapError::DuplicateEntry {
						resource_type,
						number,
					});
				}
			}

			entries.push(MapEntry {
				resource_type,
				number,
				file_index,
				offset,
				id,
			});
		}

		Ok(Self { entries })
	}
}
