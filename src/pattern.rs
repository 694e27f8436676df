// This file is part of cave-smoother.
//
// cave-smoother is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// cave-smoother is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with cave-smoother.  If not, see <https://www.gnu.org/licenses/>.

use crate::error::PatternError;
use crate::tile::TileName;

pub const GRD_W: usize = 4;
pub const GRD_H: usize = 4;

// The friendly, human-typed form of a 4x4 update pattern.
//   X = don't care
//   B = must be not-solid
//   S = must be solid
//   N = must be solid, and is the 1st tile to rewrite
//   M = must be not-solid, and is the 2nd tile to rewrite
//   O = must be not-solid, and is the 1st tile to rewrite (corner/dead-end
//       patterns rewrite a floor cell, not a wall cell)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
	X,
	B,
	S,
	N,
	M,
	O,
}

pub type Template = [[Cell; GRD_W]; GRD_H];

// A compiled update: a 16-bit mask/value pair tested against the packed
// 4x4 window, plus the offsets of the one or two cells to rewrite.
#[derive(Debug, Clone, Copy)]
pub struct UpdateEntry {
	pub mask: u16,
	pub value: u16,
	pub xoff1: i32,
	pub yoff1: i32,
	pub xoff2: i32,
	pub yoff2: i32,
	pub t1: TileName,
	pub t2: TileName,
}

// Turns a template + output tile(s) into a compiled UpdateEntry. Bit s of
// mask/value corresponds to row-major cell (s / GRD_W, s % GRD_W) counting
// down from 15, matching the source's scan order exactly.
pub fn compile_update(
	template: &Template,
	t1: TileName,
	t2: TileName,
) -> Result<UpdateEntry, PatternError> {
	let mut mask: u16 = 0;
	let mut value: u16 = 0;
	let mut xoff1: Option<i32> = None;
	let mut yoff1: Option<i32> = None;
	let mut xoff2: Option<i32> = None;
	let mut yoff2: Option<i32> = None;

	let mut s = (GRD_H * GRD_W) as i32 - 1;
	for r in 0..GRD_H {
		for c in 0..GRD_W {
			let bit = 1u16 << s;
			match template[r][c] {
				Cell::X => {}
				Cell::B => {}
				Cell::S => {
					mask |= bit;
					value |= bit;
				}
				Cell::N => {
					mask |= bit;
					value |= bit;
					xoff1 = Some(c as i32);
					yoff1 = Some(r as i32);
				}
				Cell::M => {
					mask |= bit;
					xoff2 = Some(c as i32);
					yoff2 = Some(r as i32);
				}
				Cell::O => {
					mask |= bit;
					xoff1 = Some(c as i32);
					yoff1 = Some(r as i32);
				}
			}
			s -= 1;
		}
	}

	let xoff1 = xoff1.ok_or(PatternError::NoPrimaryTile)?;
	let yoff1 = yoff1.ok_or(PatternError::NoPrimaryTile)?;

	Ok(UpdateEntry {
		mask,
		value,
		xoff1,
		yoff1,
		// Make pos2 = pos1 so callers never need to branch on 1- vs 2-tile
		// updates.
		xoff2: xoff2.unwrap_or(xoff1),
		yoff2: yoff2.unwrap_or(yoff1),
		t1,
		t2,
	})
}

pub fn compile_table(
	raw: &[(Template, TileName, TileName)],
) -> Result<Vec<UpdateEntry>, PatternError> {
	raw.iter()
		.map(|(t, t1, t2)| compile_update(t, *t1, *t2))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use Cell::*;

	#[test]
	fn single_tile_update_defaults_pos2_to_pos1() {
		let tpl: Template = [
			[X, B, X, X],
			[B, N, B, X],
			[X, B, X, X],
			[X, X, X, X],
		];
		let u = compile_update(&tpl, TileName::Single, TileName::Ignore).unwrap();
		assert_eq!((u.xoff1, u.yoff1), (1, 1));
		assert_eq!((u.xoff2, u.yoff2), (u.xoff1, u.yoff1));
		assert_eq!(u.t2, TileName::Ignore);
	}

	#[test]
	fn mask_and_value_track_solid_cells_only() {
		let tpl: Template = [
			[X, S, X, X],
			[S, N, B, X],
			[S, M, B, X],
			[S, B, X, X],
		];
		let u = compile_update(&tpl, TileName::V60a1, TileName::V60a2).unwrap();
		// top-left cell is bit 15 (X => 0 in both mask/value)
		assert_eq!(mask_bit(u.mask, 0, 0), 0);
		// (0,1) is S => mask 1, value 1
		assert_eq!(mask_bit(u.mask, 1, 0), 1);
		assert_eq!(value_bit(u.value, 1, 0), 1);
		// (1,1) is N => mask 1, value 1, and it's the primary pos
		assert_eq!((u.xoff1, u.yoff1), (1, 1));
		assert_eq!((u.xoff2, u.yoff2), (1, 2));
	}

	fn mask_bit(mask: u16, c: usize, r: usize) -> u16 {
		let s = (GRD_H * GRD_W) - 1 - (r * GRD_W + c);
		(mask >> s) & 1
	}

	fn value_bit(value: u16, c: usize, r: usize) -> u16 {
		let s = (GRD_H * GRD_W) - 1 - (r * GRD_W + c);
		(value >> s) & 1
	}

	#[test]
	fn missing_primary_is_an_error() {
		let tpl: Template = [
			[X, X, X, X],
			[X, B, X, X],
			[X, X, X, X],
			[X, X, X, X],
		];
		let err = compile_update(&tpl, TileName::Floor, TileName::Ignore).unwrap_err();
		assert_eq!(err, PatternError::NoPrimaryTile);
	}
}
