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

use std::sync::OnceLock;

use crate::matcher::{slide_and_rewrite, GridCell, PaddedGrid, SmoothedMask};
use crate::pattern::{compile_table, Cell::*, Template, UpdateEntry};
use crate::tile::TileName::{self, *};
use crate::tilemap::CaveTileMap;

#[rustfmt::skip]
fn raw_table() -> Vec<(Template, TileName, TileName)> {
	vec![
		([[X,X,X,X],[X,S,B,X],[X,B,N,X],[X,X,X,X]], Floor, Ignore),
		([[X,X,X,X],[X,B,S,X],[X,N,B,X],[X,X,X,X]], Floor, Ignore),
	]
}

static TABLE: OnceLock<Vec<UpdateEntry>> = OnceLock::new();

fn table() -> &'static [UpdateEntry] {
	TABLE
		.get_or_init(|| {
			compile_table(&raw_table())
				.unwrap_or_else(|e| panic!("diagonal pattern table failed to compile: {}", e))
		})
		.as_slice()
}

// Solid here means "occupies space", not the narrower isWall: slopes and
// end-caps already placed by smooth_edges still count as solid for this
// pass, only plain FLOOR is empty.
pub fn remove_diagonal_gaps<M: CaveTileMap>(map: &mut M) -> bool {
	log::info!("remove diagonal gaps");
	let (width, height) = (map.width(), map.height());
	let mut grid = PaddedGrid::new(width, height);
	for y in 0..height {
		for x in 0..width {
			let cell = if map.is_empty(x as i32, y as i32) { GridCell::Floor } else { GridCell::Solid };
			grid.set_logical(x, y, cell);
		}
	}
	let mut mask = SmoothedMask::new(width, height);
	slide_and_rewrite(table(), &mut grid, &mut mask, map, width, height, true)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tilemap::Grid;

	#[test]
	fn breaks_a_diagonal_touching_pair() {
		let mut grid = Grid::from_walls(4, 4, |x, y| (x == 1 && y == 1) || (x == 2 && y == 2));
		let changed = remove_diagonal_gaps(&mut grid);
		assert!(changed);
		// one of the two touching walls must now be floor, breaking the
		// diagonal-only connection between them
		let still_both_walls =
			grid.tile(1, 1) == TileName::Wall && grid.tile(2, 2) == TileName::Wall;
		assert!(!still_both_walls);
	}

	#[test]
	fn untouched_grid_reports_no_change() {
		let mut grid = Grid::from_walls(4, 4, |_, _| false);
		assert!(!remove_diagonal_gaps(&mut grid));
	}

	#[test]
	fn second_pass_is_idempotent() {
		let mut grid = Grid::from_walls(5, 5, |x, y| (x == 1 && y == 1) || (x == 2 && y == 2));
		remove_diagonal_gaps(&mut grid);
		assert!(!remove_diagonal_gaps(&mut grid));
	}
}
