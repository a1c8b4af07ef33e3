//! The picture (vector-drawing) interpreter: an opcode-driven state machine
//! that renders a byte stream into three parallel [`Surface`]s — Visual,
//! Priority, and Control.
//!
//! Opcodes are a single byte in `0xF0..=0xFF`; everything below `0xF0` is a
//! coordinate payload consumed by whichever opcode is currently looping.
//! `0xFE` (OPX) carries a second byte selecting one of a handful of extended
//! operations, most of which exist only to update the four 40-byte palettes
//! this interpreter keeps alongside the three surfaces.

use crate::bits::{BitsError, MsbReader};
use crate::palette::Ditherer;
use crate::raster::Surface;
use thiserror::Error;

/// Errors produced while interpreting a picture resource.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PicError {
	/// The first byte of an instruction did not name a known opcode.
	#[error("unknown pic opcode 0x{0:02x}")]
	UnknownOp(u8),

	/// An OPX (`0xFE`) selector byte did not name a known extended opcode.
	#[error("unknown pic extended opcode 0x{0:02x}")]
	UnknownOpx(u8),

	/// The bit stream ran out of data mid-instruction.
	#[error(transparent)]
	Bits(#[from] BitsError),
}

/// The rendered output of a picture resource: one paletted surface per
/// layer. `priority` and `control` hold raw 4-bit codes, undithered;
/// `visual` holds dithered palette indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
	pub visual: Surface,
	pub priority: Surface,
	pub control: Surface,
}

impl Picture {
	/// Decodes a picture resource using the default EGA ditherer.
	pub fn decode(bytes: &[u8]) -> Result<Self, PicError> {
		Self::decode_with(bytes, &Ditherer::ega())
	}

	/// Decodes a picture resource, dithering the Visual layer through
	/// `ditherer`.
	pub fn decode_with(bytes: &[u8], ditherer: &Ditherer) -> Result<Self, PicError> {
		let mut interpreter = Interpreter::new(bytes, ditherer.clone());
		interpreter.run()?;
		Ok(Picture {
			visual: interpreter.visual,
			priority: interpreter.priority,
			control: interpreter.control,
		})
	}
}

/// One first-byte picture opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Opcode {
	SetColor,
	DisableVisual,
	SetPriority,
	DisablePriority,
	ShortPatterns,
	MediumLines,
	LongLines,
	ShortLines,
	Fill,
	SetPattern,
	AbsolutePatterns,
	SetControl,
	DisableControl,
	MediumPatterns,
	Opx,
	Done,
}

impl TryFrom<u8> for Opcode {
	type Error = PicError;

	fn try_from(op: u8) -> Result<Self, PicError> {
		Ok(match op {
			0xF0 => Opcode::SetColor,
			0xF1 => Opcode::DisableVisual,
			0xF2 => Opcode::SetPriority,
			0xF3 => Opcode::DisablePriority,
			0xF4 => Opcode::ShortPatterns,
			0xF5 => Opcode::MediumLines,
			0xF6 => Opcode::LongLines,
			0xF7 => Opcode::ShortLines,
			0xF8 => Opcode::Fill,
			0xF9 => Opcode::SetPattern,
			0xFA => Opcode::AbsolutePatterns,
			0xFB => Opcode::SetControl,
			0xFC => Opcode::DisableControl,
			0xFD => Opcode::MediumPatterns,
			0xFE => Opcode::Opx,
			0xFF => Opcode::Done,
			other => return Err(PicError::UnknownOp(other)),
		})
	}
}

/// An extended (`0xFE`-prefixed) opcode selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExtOpcode {
	UpdatePaletteEntries,
	SetPalette,
	Unused02,
	SkipByte,
	NoPayload,
	Vector,
	SkipRun,
}

impl TryFrom<u8> for ExtOpcode {
	type Error = PicError;

	fn try_from(opx: u8) -> Result<Self, PicError> {
		Ok(match opx {
			0x00 => ExtOpcode::UpdatePaletteEntries,
			0x01 => ExtOpcode::SetPalette,
			0x02 => ExtOpcode::Unused02,
			0x03 | 0x05 => ExtOpcode::SkipByte,
			0x04 | 0x06 => ExtOpcode::NoPayload,
			0x07 => ExtOpcode::Vector,
			0x08 => ExtOpcode::SkipRun,
			other => return Err(PicError::UnknownOpx(other)),
		})
	}
}

/// Selects the x-delta decode used by [`relative2_point`]. `SignMagnitude`
/// is the shipped behavior; `TwosComplement` is an alternate historical
/// layout, kept reachable but not wired into [`Interpreter::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rel2Mode {
	SignMagnitude,
	TwosComplement,
}

/// Reads a 24-bit absolute point: `XXXXYYYY xxxxxxxx yyyyyyyy`.
fn absolute_point(bits: &mut MsbReader) -> Result<(i32, i32), BitsError> {
	let code = bits.read_bits(24)?;
	let x = ((code & 0xF0_0000) >> 12) | ((code & 0xFF00) >> 8);
	let y = ((code & 0x0F_0000) >> 8) | (code & 0x00FF);
	Ok((x as i32, y as i32))
}

/// Reads a 16-bit relative-2 delta from `(x1, y1)`: first byte is a signed
/// y-delta (sign bit 7, magnitude bits 0-6), second byte the x-delta in
/// `mode`.
fn relative2_point(bits: &mut MsbReader, x1: i32, y1: i32, mode: Rel2Mode) -> Result<(i32, i32), BitsError> {
	let dy = bits.read_bits(8)? as u8;
	let dx = bits.read_bits(8)? as u8;

	let y2 = if dy & 0x80 != 0 {
		y1 - i32::from(dy & 0x7F)
	} else {
		y1 + i32::from(dy & 0x7F)
	};

	let x2 = match mode {
		Rel2Mode::SignMagnitude => {
			if dx & 0x80 != 0 {
				x1 - (128 - i32::from(dx & 0x7F))
			} else {
				x1 + i32::from(dx & 0x7F)
			}
		}
		Rel2Mode::TwosComplement => x1 + i32::from(dx as i8),
	};

	Ok((x2, y2))
}

/// Reads an 8-bit relative-1 delta: top nibble sign+3-bit-magnitude for x,
/// bottom nibble the same for y.
fn relative1_point(bits: &mut MsbReader, x: i32, y: i32) -> Result<(i32, i32), BitsError> {
	let x_sign = bits.read_bit()?;
	let dx = bits.read_bits(3)? as i32;
	let y_sign = bits.read_bit()?;
	let dy = bits.read_bits(3)? as i32;

	let x2 = if x_sign { x - dx } else { x + dx };
	let y2 = if y_sign { y - dy } else { y + dy };
	Ok((x2, y2))
}

/// The 40-byte palette every one of the interpreter's four palette slots
/// starts out holding.
const DEFAULT_PALETTE: [u8; 40] = [
	0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0x88, 0x88, 0x01, 0x02,
	0x03, 0x04, 0x05, 0x06, 0x88, 0x88, 0xf9, 0xfa, 0xfb, 0xfc, 0xfd, 0xfe, 0xff, 0x08, 0x91, 0x2a, 0x3b, 0x4c, 0x5d,
	0x6e, 0x88,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DrawMode {
	visual: bool,
	priority: bool,
	control: bool,
}

impl Default for DrawMode {
	fn default() -> Self {
		Self {
			visual: true,
			priority: true,
			control: false,
		}
	}
}

struct Interpreter<'a> {
	bits: MsbReader<'a>,
	palettes: [[u8; 40]; 4],
	draw_mode: DrawMode,

	color: u8,
	priority_code: u8,
	control_code: u8,
	pattern_code: u8,
	pattern_texture: u8,

	ditherer: Ditherer,
	visual: Surface,
	priority: Surface,
	control: Surface,
}

impl<'a> Interpreter<'a> {
	fn new(bytes: &'a [u8], ditherer: Ditherer) -> Self {
		Self {
			bits: MsbReader::new(bytes),
			palettes: [DEFAULT_PALETTE; 4],
			draw_mode: DrawMode::default(),
			color: 0,
			priority_code: 0,
			control_code: 0,
			pattern_code: 0,
			pattern_texture: 0,
			ditherer,
			visual: Surface::new(0xF),
			priority: Surface::new(0x0),
			control: Surface::new(0x0),
		}
	}

	fn peek_is_op(&self) -> Result<bool, BitsError> {
		Ok(self.bits.peek_bits(8)? >= 0xF0)
	}

	fn maybe_read_texture(&mut self) -> Result<(), BitsError> {
		if self.pattern_code & 0x20 != 0 {
			let texture = self.bits.read_bits(8)? as u8;
			self.pattern_texture = texture >> 1;
		}
		Ok(())
	}

	fn line_at(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
		if self.draw_mode.visual {
			let color = self.color;
			let ditherer = &self.ditherer;
			self.visual.line(x1, y1, x2, y2, |x, y| ditherer.dither_at(x, y, color));
		}
		if self.draw_mode.priority {
			let code = self.priority_code;
			self.priority.line(x1, y1, x2, y2, |_, _| code);
		}
		if self.draw_mode.control {
			let code = self.control_code;
			self.control.line(x1, y1, x2, y2, |_, _| code);
		}
	}

	/// Mirrors the source interpreter's `fill` precedence: exactly one layer
	/// is filled per point, Visual first, then Priority, then Control. Each
	/// branch also carries a zero-code no-op guard preserved from the same
	/// source (Visual's `color == 255` guard is documented upstream; the
	/// Priority/Control `code == 0` guards are the same kind of
	/// source-preserved quirk, undocumented but present in every traced
	/// implementation).
	fn fill_at(&mut self, x: i32, y: i32) {
		if self.draw_mode.visual {
			if self.color == 255 {
				return;
			}
			let color = self.color;
			let ditherer = &self.ditherer;
			self.visual.fill(x, y, 0xF, |px, py| ditherer.dither_at(px, py, color));
			return;
		}
		if self.draw_mode.priority {
			if self.priority_code == 0 {
				return;
			}
			let code = self.priority_code;
			self.priority.fill(x, y, 0, |_, _| code);
			return;
		}
		if self.draw_mode.control {
			if self.control_code == 0 {
				return;
			}
			let code = self.control_code;
			self.control.fill(x, y, 0, |_, _| code);
		}
	}

	fn pattern_at(&mut self, x: i32, y: i32) {
		let size = self.pattern_code & 0x7;
		let is_rect = self.pattern_code & 0x10 != 0;
		let is_solid = self.pattern_code & 0x20 == 0;
		let seed = self.pattern_texture;

		if self.draw_mode.visual {
			let color = self.color;
			let ditherer = &self.ditherer;
			self.visual
				.pattern(x, y, size, is_rect, is_solid, seed, |px, py| ditherer.dither_at(px, py, color));
		}
		if self.draw_mode.priority {
			let code = self.priority_code;
			self.priority.pattern(x, y, size, is_rect, is_solid, seed, |_, _| code);
		}
		if self.draw_mode.control {
			let code = self.control_code;
			self.control.pattern(x, y, size, is_rect, is_solid, seed, |_, _| code);
		}
	}

	fn run(&mut self) -> Result<(), PicError> {
		loop {
			let op = self.bits.read_bits(8)? as u8;
			match Opcode::try_from(op)? {
				Opcode::SetColor => {
					let code = self.bits.read_bits(8)? as usize;
					self.color = self.palettes[code / 40][code % 40];
					self.draw_mode.visual = true;
				}
				Opcode::DisableVisual => self.draw_mode.visual = false,
				Opcode::SetPriority => {
					let code = self.bits.read_bits(8)? as u8;
					self.priority_code = code & 0xF;
					self.draw_mode.priority = true;
				}
				Opcode::DisablePriority => self.draw_mode.priority = false,
				Opcode::SetControl => {
					let code = self.bits.read_bits(8)? as u8;
					self.control_code = code & 0xF;
					self.draw_mode.control = true;
				}
				Opcode::DisableControl => self.draw_mode.control = false,

				Opcode::ShortLines => {
					let (mut x1, mut y1) = absolute_point(&mut self.bits)?;
					while !self.peek_is_op()? {
						let (x2, y2) = relative1_point(&mut self.bits, x1, y1)?;
						self.line_at(x1, y1, x2, y2);
						x1 = x2;
						y1 = y2;
					}
				}
				Opcode::MediumLines => {
					let (mut x1, mut y1) = absolute_point(&mut self.bits)?;
					while !self.peek_is_op()? {
						let (x2, y2) = relative2_point(&mut self.bits, x1, y1, Rel2Mode::SignMagnitude)?;
						self.line_at(x1, y1, x2, y2);
						x1 = x2;
						y1 = y2;
					}
				}
				Opcode::LongLines => {
					let (mut x1, mut y1) = absolute_point(&mut self.bits)?;
					while !self.peek_is_op()? {
						let (x2, y2) = absolute_point(&mut self.bits)?;
						self.line_at(x1, y1, x2, y2);
						x1 = x2;
						y1 = y2;
					}
				}

				Opcode::Fill => {
					while !self.peek_is_op()? {
						let (x, y) = absolute_point(&mut self.bits)?;
						self.fill_at(x, y);
					}
				}

				Opcode::SetPattern => {
					let code = self.bits.read_bits(8)? as u8;
					self.pattern_code = code & 0x3F;
				}
				Opcode::ShortPatterns => {
					self.maybe_read_texture()?;
					let (mut x, mut y) = absolute_point(&mut self.bits)?;
					self.pattern_at(x, y);
					while !self.peek_is_op()? {
						self.maybe_read_texture()?;
						let (x2, y2) = relative1_point(&mut self.bits, x, y)?;
						x = x2;
						y = y2;
						self.pattern_at(x, y);
					}
				}
				Opcode::MediumPatterns => {
					self.maybe_read_texture()?;
					let (mut x, mut y) = absolute_point(&mut self.bits)?;
					self.pattern_at(x, y);
					while !self.peek_is_op()? {
						self.maybe_read_texture()?;
						let (x2, y2) = relative2_point(&mut self.bits, x, y, Rel2Mode::SignMagnitude)?;
						x = x2;
						y = y2;
						self.pattern_at(x, y);
					}
				}
				Opcode::AbsolutePatterns => {
					while !self.peek_is_op()? {
						self.maybe_read_texture()?;
						let (x, y) = absolute_point(&mut self.bits)?;
						self.pattern_at(x, y);
					}
				}

				Opcode::Opx => {
					let opx = self.bits.read_bits(8)? as u8;
					self.run_opx(opx)?;
				}

				Opcode::Done => break,
			}
		}
		Ok(())
	}

	fn run_opx(&mut self, opx: u8) -> Result<(), PicError> {
		match ExtOpcode::try_from(opx)? {
			ExtOpcode::UpdatePaletteEntries => {
				while !self.peek_is_op()? {
					let index = self.bits.read_bits(8)? as usize;
					let color = self.bits.read_bits(8)? as u8;
					self.palettes[index / 40][index % 40] = color;
				}
			}
			ExtOpcode::SetPalette => {
				let i = self.bits.read_bits(8)? as usize;
				for slot in self.palettes[i].iter_mut() {
					*slot = self.bits.read_bits(8)? as u8;
				}
			}
			// Consumed and discarded: the original interpreter reads this
			// payload into a local and never stores it.
			ExtOpcode::Unused02 => {
				self.bits.skip(8)?;
				self.bits.skip(40 * 8)?;
			}
			ExtOpcode::SkipByte => {
				self.bits.skip(8)?;
			}
			ExtOpcode::NoPayload => {}
			ExtOpcode::Vector => {
				self.bits.skip(24)?;
				let length = self.bits.read_bits(16)?;
				self.bits.skip(length * 8)?;
			}
			ExtOpcode::SkipRun => {
				while !self.peek_is_op()? {
					self.bits.skip(8)?;
				}
			}
		}
		Ok(())
	}
}
