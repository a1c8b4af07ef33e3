#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `sci-reader` decodes Sierra On-Line SCI0/SCI01 game resources: the typed
//! `RESOURCE.MAP`/`RESOURCE.NNN` container, its four compression schemes, the
//! vector-picture interpreter, the view (sprite) decoder, and the font/cursor
//! decoders.
//!
//! This crate is a thin re-export of [`sci_internal`]; the decoders
//! themselves live in `sci_types`.

pub use sci_internal::*;
