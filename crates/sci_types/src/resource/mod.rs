//! Resource container: `RESOURCE.MAP` indexing and `RESOURCE.NNN` loading.
//!
//! A game root directory holds one `RESOURCE.MAP` and a handful of numbered
//! `RESOURCE.NNN` archive files. The map is a flat list of fixed-size
//! records, each naming a resource's type, number, archive file, and byte
//! offset within that file; the archive itself stores a small header
//! followed by the (possibly compressed) resource body.

mod error;
mod loader;
mod map;

pub use error::{LoaderError, MapError};
pub use loader::{CompressionMethod, CompressionTable, Root};
pub use map::{MapEntry, ResourceMap, ResourceNumber, ResourceType};

/// The eight-byte header prefixing every resource body inside a
/// `RESOURCE.NNN` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
	/// Resource id as stored in the archive (redundant with the map entry).
	pub id: u16,
	/// Size of the body on disk, before decompression.
	pub compressed_size: u16,
	/// Size of the body once decompressed.
	pub decompressed_size: u16,
	/// Index into the active [`CompressionTable`].
	pub compression_method: u16,
}

impl Header {
	pub(crate) const SIZE: usize = 8;

	pub(crate) fn parse(bytes: &[u8]) -> Option<Self> {
		if bytes.len() < Self::SIZE {
			return None;
		}
		Some(Self {
			id: u16::from_le_bytes([bytes[0], bytes[1]]),
			compressed_size: u16::from_le_bytes([bytes[2], bytes[3]]),
			decompressed_size: u16::from_le_bytes([bytes[4], bytes[5]]),
			compression_method: u16::from_le_bytes([bytes[6], bytes[7]]),
		})
	}
}

/// A decoded resource body, tagged with the id and type it was loaded for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
	/// Id as encoded in the map entry's packed `id` field.
	pub id: u16,
	/// Resource type, derived from the map entry.
	pub resource_type: ResourceType,
	/// Decompressed payload bytes.
	pub bytes: Vec<u8>,
}

/// A single indexed resource: an unresolved pointer into an archive file
/// plus the machinery to load and decompress it on demand.
///
/// Loading is idempotent: the first successful call caches the decoded
/// bytes, and every subsequent call returns the cached copy.
#[derive(Debug, Clone)]
pub struct Mapping {
	pub(crate) entry: MapEntry,
	pub(crate) root: std::path::PathBuf,
	pub(crate) table: CompressionTable,
	pub(crate) cache: std::cell::RefCell<Option<Resource>>,
}

impl Mapping {
	/// The resource's type, as recorded in the map.
	pub fn resource_type(&self) -> ResourceType {
		self.entry.resource_type
	}

	/// The resource's number, as recorded in the map.
	pub fn number(&self) -> ResourceNumber {
		self.entry.number
	}

	/// Loads and decompresses the resource body, caching the result.
	pub fn resource(&self) -> Result<Resource, LoaderError> {
		if let Some(cached) = self.cache.borrow().as_ref() {
			return Ok(cached.clone());
		}
		let resource = loader::load_entry(&self.root, &self.entry, self.table)?;
		*self.cache.borrow_mut() = Some(resource.clone());
		Ok(resource)
	}
}
