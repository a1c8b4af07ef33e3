//! Root directory handling: opening a game's resource files and loading
//! individual resource bodies out of them.

use std::cell::RefCell;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use super::{Header, LoaderError, MapEntry, MapError, Mapping, Resource, ResourceMap, ResourceType};
use crate::compress;

/// The four decompression method slots a resource header's `method` field
/// can index into. Which concrete decompressor each slot names depends on
/// which [`CompressionTable`] is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMethod {
	None,
	Lzw,
	Huffman,
	Lzw1,
}

/// Selects which resource generation's method table a [`Root`] uses to
/// interpret a header's `method` field.
///
/// SCI0 and SCI01 assign the same four decompressors to different slots:
/// SCI0 is `{0: None, 1: Lzw, 2: Huffman}` (slot 3 unused), SCI01 is
/// `{0: None, 1: Huffman, 2: Lzw1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionTable {
	Sci0,
	Sci01,
	/// An alternative SCI01 layout, `{0: None, 1: Lzw1, 2: COMP3, 3: Huffman}`,
	/// found in some historical source snapshots but not the shipping
	/// behavior this loader targets by default. Selectable for callers who
	/// know their game data needs it; slot 2 (`COMP3`) has no decoder here,
	/// so a resource tagged with it still fails with
	/// [`LoaderError::UnknownCompression`].
	Sci01Alt,
}

impl CompressionTable {
	fn method(self, slot: u16) -> Option<CompressionMethod> {
		match (self, slot) {
			(_, 0) => Some(CompressionMethod::None),
			(CompressionTable::Sci0, 1) => Some(CompressionMethod::Lzw),
			(CompressionTable::Sci0, 2) => Some(CompressionMethod::Huffman),
			(CompressionTable::Sci01, 1) => Some(CompressionMethod::Huffman),
			(CompressionTable::Sci01, 2) => Some(CompressionMethod::Lzw1),
			(CompressionTable::Sci01Alt, 1) => Some(CompressionMethod::Lzw1),
			(CompressionTable::Sci01Alt, 3) => Some(CompressionMethod::Huffman),
			_ => None,
		}
	}
}

/// An opened game root: a parsed `RESOURCE.MAP` plus the path the numbered
/// `RESOURCE.NNN` archive files live in.
#[derive(Debug, Clone)]
pub struct Root {
	path: PathBuf,
	table: CompressionTable,
	map: ResourceMap,
}

impl Root {
	/// Opens a game directory, parsing its `RESOURCE.MAP`.
	///
	/// `table` selects which generation's method table (SCI0 or SCI01) is
	/// used to interpret each resource header's compression method field.
	pub fn open(path: impl AsRef<Path>, table: CompressionTable) -> Result<Self, MapError> {
		let path = path.as_ref().to_path_buf();
		let map_bytes = std::fs::read(path.join("RESOURCE.MAP"))?;
		let map = ResourceMap::parse(&map_bytes)?;
		Ok(Self { path, table, map })
	}

	/// Every entry named in the map, in on-disk order.
	pub fn entries(&self) -> &[MapEntry] {
		&self.map.entries
	}

	/// Looks up a single resource by type and number, returning a lazy
	/// [`Mapping`] if the map contains it.
	pub fn mapping(&self, resource_type: ResourceType, number: u16) -> Option<Mapping> {
		let entry = self
			.map
			.entries
			.iter()
			.find(|e| e.resource_type == resource_type && e.number == number)?;
		Some(Mapping {
			entry: *entry,
			root: self.path.clone(),
			table: self.table,
			cache: RefCell::new(None),
		})
	}

	/// All entries of a given type, as lazy mappings.
	pub fn mappings_of(&self, resource_type: ResourceType) -> Vec<Mapping> {
		self.map
			.entries
			.iter()
			.filter(|e| e.resource_type == resource_type)
			.map(|entry| Mapping {
				entry: *entry,
				root: self.path.clone(),
				table: self.table,
				cache: RefCell::new(None),
			})
			.collect()
	}
}

/// Opens the archive file a map entry points into, seeks to it, reads the
/// header, and dispatches to the matching decompressor.
pub(crate) fn load_entry(root: &Path, entry: &MapEntry, table: CompressionTable) -> Result<Resource, LoaderError> {
	let filename = root.join(format!("RESOURCE.{:03}", entry.file_index));
	let mut file = File::open(filename)?;
	file.seek(SeekFrom::Start(u64::from(entry.offset)))?;

	let mut header_bytes = [0u8; Header::SIZE];
	file.read_exact(&mut header_bytes)?;
	let header = Header::parse(&header_bytes).ok_or(LoaderError::MalformedHeader {
		context: "resource header shorter than 8 bytes",
	})?;

	let method = table
		.method(header.compression_method)
		.ok_or(LoaderError::UnknownCompression {
			method: header.compression_method,
			table,
		})?;

	let mut body = vec![0u8; header.compressed_size as usize];
	file.read_exact(&mut body)?;

	let decompressed_size = header.decompressed_size as usize;
	let bytes = match method {
		CompressionMethod::None => compress::none_decompress(&body, decompressed_size)?,
		CompressionMethod::Lzw => compress::lzw_decompress(&body, decompressed_size)?,
		CompressionMethod::Huffman => compress::huffman_decompress(&body, decompressed_size)?,
		CompressionMethod::Lzw1 => compress::lzw1_decompress(&body, decompressed_size)?,
	};

	Ok(Resource {
		id: entry.id,
		resource_type: entry.resource_type,
		bytes,
	})
}
