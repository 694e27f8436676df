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

// Dead-ends (both corners of a 1-wide corridor end) are declared before
// the single-corner rules so a dead-end isn't broken into two corners.
// Each dead-end has two variants to cope with the cell sitting right at
// the cave's border.
#[rustfmt::skip]
fn raw_table() -> Vec<(Template, TileName, TileName)> {
	vec![
		([[X,S,X,X],[S,O,S,X],[X,B,X,X],[X,X,X,X]], DendN, Ignore),
		([[X,X,X,X],[X,B,X,X],[S,O,S,X],[X,S,X,X]], DendS, Ignore),
		([[X,X,S,X],[X,B,O,S],[X,X,S,X],[X,X,X,X]], DendE, Ignore),
		([[X,S,X,X],[S,O,B,X],[X,S,X,X],[X,X,X,X]], DendW, Ignore),

		([[X,X,S,X],[X,S,O,S],[X,X,B,X],[X,X,X,X]], DendN, Ignore),
		([[X,X,X,X],[X,X,B,X],[X,S,O,S],[X,X,S,X]], DendS, Ignore),
		([[X,X,X,X],[X,X,S,X],[X,B,O,S],[X,X,S,X]], DendE, Ignore),
		([[X,X,X,X],[X,S,X,X],[S,O,B,X],[X,S,X,X]], DendW, Ignore),

		([[X,S,X,X],[S,O,X,X],[X,B,X,X],[X,X,X,X]], CornrA, Ignore),
		([[X,X,S,X],[X,X,O,S],[X,X,B,X],[X,X,X,X]], CornrB, Ignore),
		([[X,X,X,X],[X,X,X,X],[X,B,O,S],[X,X,S,X]], CornrC, Ignore),
		([[X,X,X,X],[X,X,X,X],[S,O,B,X],[X,S,X,X]], CornrD, Ignore),
	]
}

static TABLE: OnceLock<Vec<UpdateEntry>> = OnceLock::new();

fn table() -> &'static [UpdateEntry] {
	TABLE
		.get_or_init(|| {
			compile_table(&raw_table())
				.unwrap_or_else(|e| panic!("corner pattern table failed to compile: {}", e))
		})
		.as_slice()
}

// Reuses the mask accumulated by smooth_edges, so corner rules never
// undo an edge rewrite. Walls and already-placed end-caps are Solid;
// plain floor is Floor; everything else (slopes, SINGLE, already-cut
// points) is Ignore. The packed window only tests `== Solid`, so Floor
// and Ignore remain indistinguishable to the matcher itself -- see the
// note in matcher.rs.
pub fn smooth_corners<M: CaveTileMap>(map: &mut M, mask: &mut SmoothedMask) -> bool {
	log::info!("smooth corners");
	let (width, height) = (map.width(), map.height());
	let mut grid = PaddedGrid::new(width, height);
	for y in 0..height {
		for x in 0..width {
			let (xi, yi) = (x as i32, y as i32);
			let is_wall_like = map.is_wall(xi, yi)
				|| map.is_tile(xi, yi, EndN)
				|| map.is_tile(xi, yi, EndS)
				|| map.is_tile(xi, yi, EndE)
				|| map.is_tile(xi, yi, EndW);
			let cell = if is_wall_like {
				GridCell::Solid
			} else if map.is_floor(xi, yi) {
				GridCell::Floor
			} else {
				GridCell::Ignore
			};
			grid.set_logical(x, y, cell);
		}
	}
	slide_and_rewrite(table(), &mut grid, mask, map, width, height, false)
}
