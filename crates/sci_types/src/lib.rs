//! Core decoder and rasterizer for Sierra On-Line SCI0/SCI01 game resources.
//!
//! This crate has no knowledge of the command-line front-end, file-system
//! walking, or image-file encoding that sit above it: it exposes the
//! `RESOURCE.MAP`/`RESOURCE.NNN` container, the four resource compression
//! schemes, the vector-picture interpreter and its three raster layers, and
//! the view/font/cursor/text decoders as plain library types.

pub mod bits;
pub mod compress;
pub mod cursor;
pub mod font;
pub mod mapping;
pub mod palette;
pub mod pic;
pub mod raster;
pub mod resource;
pub mod text;
pub mod view;
