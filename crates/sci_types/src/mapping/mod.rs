//! Typed mapping wrappers: one thin type per resource kind, each composing
//! a base [`Mapping`] with a single type-specific decode call. No new
//! state — purely type dispatch over an already-lazy, already-cached load.

use crate::cursor::{Cursor, CursorError};
use crate::font::{FontError, FontTable};
use crate::pic::{PicError, Picture};
use crate::resource::{LoaderError, Mapping, ResourceType, Root};
use crate::text::TextLines;
use crate::view::{ViewError, ViewFile};
use thiserror::Error;

/// Wraps a `Pic` mapping: loads, then interprets as a [`Picture`].
#[derive(Debug, Clone)]
pub struct PictureMapping(pub Mapping);

/// Errors from loading or interpreting a picture mapping.
#[derive(Debug, Error)]
pub enum PictureMappingError {
	#[error(transparent)]
	Load(#[from] LoaderError),
	#[error(transparent)]
	Decode(#[from] PicError),
}

impl PictureMapping {
	pub fn decode(&self) -> Result<Picture, PictureMappingError> {
		let resource = self.0.resource()?;
		Ok(Picture::decode(&resource.bytes)?)
	}
}

/// Wraps a `View` mapping: loads, then decodes as a [`ViewFile`].
#[derive(Debug, Clone)]
pub struct ViewMapping(pub Mapping);

/// Errors from loading or decoding a view mapping.
#[derive(Debug, Error)]
pub enum ViewMappingError {
	#[error(transparent)]
	Load(#[from] LoaderError),
	#[error(transparent)]
	Decode(#[from] ViewError),
}

impl ViewMapping {
	pub fn decode(&self) -> Result<ViewFile, ViewMappingError> {
		let resource = self.0.resource()?;
		Ok(ViewFile::decode(&resource.bytes)?)
	}
}

/// Wraps a `Text` mapping: loads, then splits into [`TextLines`].
#[derive(Debug, Clone)]
pub struct TextMapping(pub Mapping);

impl TextMapping {
	pub fn decode(&self) -> Result<TextLines, LoaderError> {
		let resource = self.0.resource()?;
		Ok(TextLines::decode(&resource.bytes))
	}
}

/// Wraps a `Font` mapping: loads, then decodes as a [`FontTable`].
#[derive(Debug, Clone)]
pub struct FontMapping(pub Mapping);

/// Errors from loading or decoding a font mapping.
#[derive(Debug, Error)]
pub enum FontMappingError {
	#[error(transparent)]
	Load(#[from] LoaderError),
	#[error(transparent)]
	Decode(#[from] FontError),
}

impl FontMapping {
	pub fn decode(&self) -> Result<FontTable, FontMappingError> {
		let resource = self.0.resource()?;
		Ok(FontTable::decode(&resource.bytes)?)
	}
}

/// Wraps a `Cursor` mapping: loads, then decodes as a [`Cursor`].
#[derive(Debug, Clone)]
pub struct CursorMapping(pub Mapping);

/// Errors from loading or decoding a cursor mapping.
#[derive(Debug, Error)]
pub enum CursorMappingError {
	#[error(transparent)]
	Load(#[from] LoaderError),
	#[error(transparent)]
	Decode(#[from] CursorError),
}

impl CursorMapping {
	pub fn decode(&self) -> Result<Cursor, CursorMappingError> {
		let resource = self.0.resource()?;
		Ok(Cursor::decode(&resource.bytes)?)
	}
}

/// Wraps any resource kind this crate treats as an opaque payload (`Script`,
/// `Sound`, `Memory`, `Vocab`, `Patch`): no interpreter is defined, so
/// decoding just returns the decompressed bytes verbatim.
#[derive(Debug, Clone)]
pub struct RawMapping(pub Mapping);

impl RawMapping {
	pub fn decode(&self) -> Result<Vec<u8>, LoaderError> {
		Ok(self.0.resource()?.bytes)
	}
}

impl Root {
	/// Looks up a `Pic` resource by number, wrapped for picture decoding.
	pub fn picture(&self, number: u16) -> Option<PictureMapping> {
		self.mapping(ResourceType::Pic, number).map(PictureMapping)
	}

	/// Looks up a `View` resource by number, wrapped for sprite decoding.
	pub fn view(&self, number: u16) -> Option<ViewMapping> {
		self.mapping(ResourceType::View, number).map(ViewMapping)
	}

	/// Looks up a `Text` resource by number, wrapped for message-line decoding.
	pub fn text(&self, number: u16) -> Option<TextMapping> {
		self.mapping(ResourceType::Text, number).map(TextMapping)
	}

	/// Looks up a `Font` resource by number, wrapped for glyph decoding.
	pub fn font(&self, number: u16) -> Option<FontMapping> {
		self.mapping(ResourceType::Font, number).map(FontMapping)
	}

	/// Looks up a `Cursor` resource by number, wrapped for bitplane decoding.
	pub fn cursor(&self, number: u16) -> Option<CursorMapping> {
		self.mapping(ResourceType::Cursor, number).map(CursorMapping)
	}

	/// Looks up any resource by explicit type and number, wrapped as an
	/// opaque payload (for `Script`/`Sound`/`Memory`/`Vocab`/`Patch`).
	pub fn raw(&self, resource_type: ResourceType, number: u16) -> Option<RawMapping> {
		self.mapping(resource_type, number).map(RawMapping)
	}
}
