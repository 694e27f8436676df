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

use crate::pattern::{UpdateEntry, GRD_H, GRD_W};
use crate::tile::TileName;
use crate::tilemap::CaveTileMap;

// The 3-valued sentinel the edge/corner/diagonal passes pack into a 4x4
// window. The packed bit test is purely `== Solid`; Floor and Ignore are
// bit-equivalent to the matcher, same as in the source (see the corner
// pass, which relies on this instead of distinguishing the two).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
	Solid,
	Floor,
	Ignore,
}

// A copy of the tile map as Solid/Floor/Ignore, oversized by GRD_W+1 x
// GRD_H+1 and shifted by (1,1) so logical (x,y) lives at (x+1,y+1) and a
// 4x4 window anchored at any logical cell never needs a bounds check.
pub struct PaddedGrid {
	width: usize,
	height: usize,
	cells: Vec<GridCell>,
}

impl PaddedGrid {
	pub fn new(logical_width: usize, logical_height: usize) -> Self {
		let width = logical_width + GRD_W + 1;
		let height = logical_height + GRD_H + 1;
		PaddedGrid {
			width,
			height,
			cells: vec![GridCell::Solid; width * height],
		}
	}

	fn idx(&self, x: usize, y: usize) -> usize {
		y * self.width + x
	}

	pub fn get(&self, x: usize, y: usize) -> GridCell {
		self.cells[self.idx(x, y)]
	}

	pub fn set(&mut self, x: usize, y: usize, cell: GridCell) {
		let i = self.idx(x, y);
		self.cells[i] = cell;
	}

	pub fn set_logical(&mut self, x: usize, y: usize, cell: GridCell) {
		self.set(x + 1, y + 1, cell);
	}
}

// Tracks which padded-grid cells a pass has already rewritten, so a later
// match in the same pass can't clobber an earlier one.
pub struct SmoothedMask {
	width: usize,
	cells: Vec<bool>,
}

impl SmoothedMask {
	pub fn new(logical_width: usize, logical_height: usize) -> Self {
		let width = logical_width + GRD_W + 1;
		let height = logical_height + GRD_H + 1;
		SmoothedMask {
			width,
			cells: vec![false; width * height],
		}
	}

	// The point pass uses a 2x2 window instead of 4x4, so its mask is
	// sized to match (see point.rs).
	pub fn new_sized(logical_width: usize, logical_height: usize, pad_w: usize, pad_h: usize) -> Self {
		let width = logical_width + pad_w + 1;
		let height = logical_height + pad_h + 1;
		SmoothedMask {
			width,
			cells: vec![false; width * height],
		}
	}

	fn idx(&self, x: usize, y: usize) -> usize {
		y * self.width + x
	}

	pub fn get(&self, x: usize, y: usize) -> bool {
		self.cells[self.idx(x, y)]
	}

	pub fn set(&mut self, x: usize, y: usize) {
		let i = self.idx(x, y);
		self.cells[i] = true;
	}

	pub fn reset(&mut self) {
		self.cells.iter_mut().for_each(|c| *c = false);
	}
}

// Slides a 4x4 window over every logical cell in row-major order and
// applies the first update table entries whose targets aren't already
// smoothed. Does NOT stop scanning the table after a match fires for a
// cell -- every remaining entry is still tested against that cell, with
// the mask alone preventing a double rewrite. Returns whether anything
// changed.
pub fn slide_and_rewrite<M: CaveTileMap>(
	updates: &[UpdateEntry],
	grid: &mut PaddedGrid,
	mask: &mut SmoothedMask,
	map: &mut M,
	width: usize,
	height: usize,
	update_in_grid: bool,
) -> bool {
	let mut changed = false;

	for y in 0..height {
		for x in 0..width {
			let mut window: u16 = 0;
			let mut shift = (GRD_H * GRD_W) as i32 - 1;
			for r in 0..GRD_H {
				for c in 0..GRD_W {
					if grid.get(x + c, y + r) == GridCell::Solid {
						window |= 1 << shift;
					}
					shift -= 1;
				}
			}

			for up in updates {
				if (window & up.mask) != up.value {
					continue;
				}

				let (px1, py1) = ((x as i32 + up.xoff1) as usize, (y as i32 + up.yoff1) as usize);
				let (px2, py2) = ((x as i32 + up.xoff2) as usize, (y as i32 + up.yoff2) as usize);

				if mask.get(px1, py1) || mask.get(px2, py2) {
					log::debug!(
						"slide_and_rewrite: skip ({},{}) already smoothed t1={:?}",
						x,
						y,
						up.t1
					);
					continue;
				}

				log::debug!("slide_and_rewrite: ({},{}) matched -> {:?}", x, y, up.t1);
				map.set_cell(px1 as i32 - 1, py1 as i32 - 1, up.t1);
				// Only the diagonal-gap pass sets this, and every one of
				// its entries writes FLOOR, so the window sees a freshly
				// rewritten cell as not-solid from here on, same as the
				// source writing the tile value straight into inGrid.
				if update_in_grid {
					grid.set(px1, py1, GridCell::Floor);
				}
				mask.set(px1, py1);
				changed = true;

				if up.t2 != TileName::Ignore {
					map.set_cell(px2 as i32 - 1, py2 as i32 - 1, up.t2);
					if update_in_grid {
						grid.set(px2, py2, GridCell::Floor);
					}
					mask.set(px2, py2);
				}
			}
		}
	}

	changed
}
