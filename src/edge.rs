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

// Declared order matters: the 8 two-tile (30/60 degree) updates must be
// checked before the single-tile 45 degree updates, which are loose
// enough to also match what should be a two-tile slope. The 4 end-cap
// rules erase a 1-wide wall nub to FLOOR rather than giving it a sprite;
// the actual END_* tiles come from the "2 wall" rules below them.
#[rustfmt::skip]
fn raw_table() -> Vec<(Template, TileName, TileName)> {
	vec![
		([[X,S,S,S],[S,N,M,B],[X,B,B,X],[X,X,X,X]], H30a1, H30a2),
		([[X,S,X,X],[B,N,S,X],[B,M,S,X],[X,B,S,X]], V60b1, V60b2),
		([[X,X,X,X],[X,B,B,X],[B,M,N,S],[S,S,S,X]], H30c1, H30c2),
		([[S,B,X,X],[S,M,B,X],[S,N,B,X],[X,S,X,X]], V60d1, V60d2),

		([[X,X,X,X],[S,S,S,X],[B,M,N,S],[X,B,B,X]], H30b1, H30b2),
		([[X,X,B,S],[X,B,M,S],[X,B,N,S],[X,X,S,X]], V60c1, V60c2),
		([[X,X,X,X],[X,B,B,X],[S,N,M,B],[X,S,S,S]], H30d1, H30d2),
		([[X,S,X,X],[S,N,B,X],[S,M,B,X],[S,B,X,X]], V60a1, V60a2),

		([[X,X,S,X],[X,B,N,S],[X,X,B,X],[X,X,X,X]], T45b, Ignore),
		([[X,X,B,X],[X,B,N,S],[X,X,S,X],[X,X,X,X]], T45c, Ignore),
		([[X,B,X,X],[S,N,B,X],[X,S,X,X],[X,X,X,X]], T45d, Ignore),
		([[X,S,X,X],[S,N,B,X],[X,B,X,X],[X,X,X,X]], T45a, Ignore),

		([[X,X,B,S],[X,B,N,S],[X,X,B,S],[X,X,X,X]], Floor, Ignore),
		([[S,B,X,X],[S,N,B,X],[S,B,X,X],[X,X,X,X]], Floor, Ignore),
		([[X,X,X,X],[X,B,X,X],[B,N,B,X],[S,S,S,X]], Floor, Ignore),
		([[S,S,S,X],[B,N,B,X],[X,B,X,X],[X,X,X,X]], Floor, Ignore),

		([[X,B,X,X],[B,N,B,X],[X,B,X,X],[X,X,X,X]], Single, Ignore),

		([[X,B,X,X],[B,N,B,X],[X,S,X,X],[X,X,X,X]], EndN, Ignore),
		([[X,X,X,X],[X,S,X,X],[B,N,B,X],[X,B,X,X]], EndS, Ignore),
		([[X,X,B,X],[X,S,N,B],[X,X,B,X],[X,X,X,X]], EndE, Ignore),
		([[X,B,X,X],[B,N,S,X],[X,B,X,X],[X,X,X,X]], EndW, Ignore),
	]
}

static TABLE: OnceLock<Vec<UpdateEntry>> = OnceLock::new();

fn table() -> &'static [UpdateEntry] {
	TABLE
		.get_or_init(|| {
			compile_table(&raw_table())
				.unwrap_or_else(|e| panic!("edge pattern table failed to compile: {}", e))
		})
		.as_slice()
}

// Raw input before any smoothing: a cell is Solid iff it's the plain
// WALL tile the generator produces, Floor otherwise.
pub fn smooth_edges<M: CaveTileMap>(map: &mut M, mask: &mut SmoothedMask) -> bool {
	log::info!("smooth edges");
	let (width, height) = (map.width(), map.height());
	let mut grid = PaddedGrid::new(width, height);
	for y in 0..height {
		for x in 0..width {
			let cell = if map.is_wall(x as i32, y as i32) { GridCell::Solid } else { GridCell::Floor };
			grid.set_logical(x, y, cell);
		}
	}
	slide_and_rewrite(table(), &mut grid, mask, map, width, height, false)
}
