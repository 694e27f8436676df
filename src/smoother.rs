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

use crate::config::CaveInfo;
use crate::corner::smooth_corners;
use crate::diagonal::remove_diagonal_gaps;
use crate::edge::smooth_edges;
use crate::matcher::SmoothedMask;
use crate::point::smooth_points;
use crate::tilemap::CaveTileMap;

// Top-level entry point. Operates on whatever shape the tile map reports
// through `width()`/`height()` -- CaveInfo's own cave_width/cave_height
// describe the caller's intent but aren't re-checked here, the map is
// the single source of truth for its own dimensions.
pub struct CaveSmoother<'a> {
	info: &'a CaveInfo,
}

impl<'a> CaveSmoother<'a> {
	pub fn new(info: &'a CaveInfo) -> Self {
		CaveSmoother { info }
	}

	pub fn smooth<M: CaveTileMap + Clone>(&self, map: &mut M) {
		let (width, height) = (map.width(), map.height());
		let mut mask = SmoothedMask::new(width, height);

		if self.info.smoothing {
			smooth_edges(map, &mut mask);

			// Smoothing can add vertical/horizontal slope tiles that
			// create new diagonal gaps, so diagonals are removed after
			// edges, then edges are re-smoothed once if anything changed.
			if self.info.remove_diagonals && remove_diagonal_gaps(map) {
				mask.reset();
				smooth_edges(map, &mut mask);
			}

			if self.info.smooth_corners {
				smooth_corners(map, &mut mask);
			}
			if self.info.smooth_points {
				smooth_points(map);
			}
		} else if self.info.remove_diagonals {
			remove_diagonal_gaps(map);
		}
	}
}
