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

use crate::matcher::SmoothedMask;
use crate::tile::TileName::{self, *};
use crate::tilemap::CaveTileMap;

// Rounds a sharp point where two 45-degree slopes meet (e.g. /\), cutting
// one or both corners off the slope tile(s) involved. Matches by tile
// identity over a 2x2 window, not by wall/floor, and -- critically --
// reads only from a snapshot taken before the pass started, so a rewrite
// at one point can never feed into the match at another.
pub struct PointUpdate {
	templates: &'static [[[TileName; 2]; 2]],
	xoff1: i32,
	yoff1: i32,
	tile1: TileName,
}

#[rustfmt::skip]
static GRIDS_45A_2CUT: [[[TileName; 2]; 2]; 3] = [
	[[Ignore, T45d], [T45b, T45a]],
	[[Ignore, H30d2], [T45b, T45a]],
	[[Ignore, T45d], [V60b2, T45a]],
];
#[rustfmt::skip]
static GRIDS_45B_2CUT: [[[TileName; 2]; 2]; 3] = [
	[[T45c, Ignore], [T45b, T45a]],
	[[H30c2, Ignore], [T45b, T45a]],
	[[T45c, Ignore], [T45b, V60a2]],
];
#[rustfmt::skip]
static GRIDS_45C_2CUT: [[[TileName; 2]; 2]; 3] = [
	[[T45c, T45d], [T45b, Ignore]],
	[[T45c, T45d], [H30b2, Ignore]],
	[[T45c, V60d2], [T45b, Ignore]],
];
#[rustfmt::skip]
static GRIDS_45D_2CUT: [[[TileName; 2]; 2]; 3] = [
	[[T45c, T45d], [Ignore, T45a]],
	[[V60c2, T45d], [Ignore, T45a]],
	[[T45c, T45d], [Ignore, H30a2]],
];

#[rustfmt::skip]
static GRIDS_45A_B: [[[TileName; 2]; 2]; 2] = [
	[[Ignore, T45d], [Ignore, T45a]],
	[[Ignore, H30d2], [Ignore, T45a]],
];
#[rustfmt::skip]
static GRIDS_45A_D: [[[TileName; 2]; 2]; 2] = [
	[[Ignore, Ignore], [T45b, T45a]],
	[[Ignore, Ignore], [V60b2, T45a]],
];
#[rustfmt::skip]
static GRIDS_45B_A: [[[TileName; 2]; 2]; 2] = [
	[[T45c, Ignore], [T45b, Ignore]],
	[[H30c2, Ignore], [T45b, Ignore]],
];
#[rustfmt::skip]
static GRIDS_45B_C: [[[TileName; 2]; 2]; 2] = [
	[[Ignore, Ignore], [T45b, T45a]],
	[[Ignore, Ignore], [T45b, V60a2]],
];
#[rustfmt::skip]
static GRIDS_45C_B: [[[TileName; 2]; 2]; 2] = [
	[[T45c, T45d], [Ignore, Ignore]],
	[[T45c, V60d2], [Ignore, Ignore]],
];
#[rustfmt::skip]
static GRIDS_45C_D: [[[TileName; 2]; 2]; 2] = [
	[[T45c, Ignore], [T45b, Ignore]],
	[[T45c, Ignore], [H30b2, Ignore]],
];
#[rustfmt::skip]
static GRIDS_45D_A: [[[TileName; 2]; 2]; 2] = [
	[[T45c, T45d], [Ignore, Ignore]],
	[[V60c2, T45d], [Ignore, Ignore]],
];
#[rustfmt::skip]
static GRIDS_45D_C: [[[TileName; 2]; 2]; 2] = [
	[[Ignore, T45d], [Ignore, T45a]],
	[[Ignore, T45d], [Ignore, H30a2]],
];

fn table() -> &'static [PointUpdate] {
	static TABLE: OnceLock<Vec<PointUpdate>> = OnceLock::new();
	TABLE
		.get_or_init(|| {
			vec![
				PointUpdate { templates: &GRIDS_45A_2CUT, xoff1: 1, yoff1: 1, tile1: T45a2Ct },
				PointUpdate { templates: &GRIDS_45B_2CUT, xoff1: 0, yoff1: 1, tile1: T45b2Ct },
				PointUpdate { templates: &GRIDS_45C_2CUT, xoff1: 0, yoff1: 0, tile1: T45c2Ct },
				PointUpdate { templates: &GRIDS_45D_2CUT, xoff1: 1, yoff1: 0, tile1: T45d2Ct },
				PointUpdate { templates: &GRIDS_45A_B, xoff1: 1, yoff1: 1, tile1: T45AbCt },
				PointUpdate { templates: &GRIDS_45A_D, xoff1: 1, yoff1: 1, tile1: T45AdCt },
				PointUpdate { templates: &GRIDS_45B_A, xoff1: 0, yoff1: 1, tile1: T45BaCt },
				PointUpdate { templates: &GRIDS_45B_C, xoff1: 0, yoff1: 1, tile1: T45BcCt },
				PointUpdate { templates: &GRIDS_45C_B, xoff1: 0, yoff1: 0, tile1: T45CbCt },
				PointUpdate { templates: &GRIDS_45C_D, xoff1: 0, yoff1: 0, tile1: T45CdCt },
				PointUpdate { templates: &GRIDS_45D_A, xoff1: 1, yoff1: 0, tile1: T45DaCt },
				PointUpdate { templates: &GRIDS_45D_C, xoff1: 1, yoff1: 0, tile1: T45DcCt },
			]
		})
		.as_slice()
}

pub fn smooth_points<M: CaveTileMap + Clone>(map: &mut M) {
	smooth_points_with(map, table())
}

// Split out so a test can exercise the matching loop against a
// hand-built table instead of the static one -- in particular, to check
// that reordering a descriptor's own template variants doesn't change
// the outcome when the variants address disjoint neighborhoods.
fn smooth_points_with<M: CaveTileMap + Clone>(map: &mut M, updates: &[PointUpdate]) {
	log::info!("smooth points");
	let snapshot = map.clone();
	let (width, height) = (map.width(), map.height());
	// Not a padded grid -- this pass has no border concept of its own,
	// it just looks at 2x2 tile-identity neighborhoods directly.
	let mut mask = SmoothedMask::new_sized(width, height, 2, 2);

	for y in 0..height {
		for x in 0..width {
			for up in updates {
				let (tx, ty) = ((x as i32 + up.xoff1) as usize, (y as i32 + up.yoff1) as usize);
				'templates: for template in up.templates {
					if mask.get(tx, ty) {
						break 'templates;
					}
					for yo in 0..2 {
						for xo in 0..2 {
							let want = template[yo][xo];
							if want == Ignore {
								continue;
							}
							if !snapshot.is_tile(x as i32 + xo as i32, y as i32 + yo as i32, want) {
								continue 'templates;
							}
						}
					}
					log::debug!("smooth_points: ({},{}) matched -> {:?}", x, y, up.tile1);
					map.set_cell(tx as i32, ty as i32, up.tile1);
					mask.set(tx, ty);
					break;
				}
			}
		}
	}
}
