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

// End-to-end scenarios and cross-cutting invariants that don't belong
// to any single module's own unit tests.

use std::cell::RefCell;
use std::collections::HashMap;

use cave_smoother::{CaveInfo, CaveSmoother, CaveTileMap, Grid, TileName};

fn init_logging() {
	let _ = env_logger::Builder::from_default_env().is_test(true).try_init();
}

// Wraps a Grid and counts how many times each coordinate is written,
// so a test can assert a pass never rewrites the same cell twice
// without needing access to the crate's private per-pass entry points.
#[derive(Clone)]
struct CountingMap {
	inner: Grid,
	writes: RefCell<HashMap<(i32, i32), u32>>,
}

impl CountingMap {
	fn new(inner: Grid) -> Self {
		CountingMap { inner, writes: RefCell::new(HashMap::new()) }
	}

	fn max_writes_to_any_cell(&self) -> u32 {
		self.writes.borrow().values().copied().max().unwrap_or(0)
	}
}

impl CaveTileMap for CountingMap {
	fn width(&self) -> usize {
		self.inner.width()
	}

	fn height(&self) -> usize {
		self.inner.height()
	}

	fn tile(&self, x: i32, y: i32) -> TileName {
		self.inner.tile(x, y)
	}

	fn set_cell(&mut self, x: i32, y: i32, tile: TileName) {
		*self.writes.borrow_mut().entry((x, y)).or_insert(0) += 1;
		self.inner.set_cell(x, y, tile);
	}
}

// Invariant 4: within a single pass, no coordinate is written more than
// once. Isolate the edge pass alone (corners/points/diagonals off) so a
// count above 1 can only mean the shared mask failed to stop a second
// rewrite of an already-smoothed cell.
#[test]
fn edge_pass_never_rewrites_the_same_cell_twice() {
	init_logging();
	let is_wall = |x: usize, y: usize| (x * 5 + y * 3) % 4 == 0;
	let raw = Grid::from_walls(20, 15, is_wall);
	let mut map = CountingMap::new(raw);
	let info = CaveInfo {
		smoothing: true,
		remove_diagonals: false,
		smooth_corners: false,
		smooth_points: false,
		cave_width: 20,
		cave_height: 15,
		..CaveInfo::default()
	};
	CaveSmoother::new(&info).smooth(&mut map);
	assert_eq!(map.max_writes_to_any_cell(), 1);
}

// Invariant 7: enabling a later-stage option can't introduce new wall
// tiles. The edge pass alone fixes which cells stay WALL; corners and
// points only ever replace floor-family tiles or 45-degree slopes with
// other non-wall tiles.
#[test]
fn enabling_corners_and_points_introduces_no_new_walls() {
	init_logging();
	let is_wall = |x: usize, y: usize| (x * 7 + y * 11) % 6 == 0;
	let raw = Grid::from_walls(25, 18, is_wall);

	let mut baseline = raw.clone();
	let baseline_info = CaveInfo {
		smoothing: true,
		remove_diagonals: false,
		smooth_corners: false,
		smooth_points: false,
		cave_width: 25,
		cave_height: 18,
		..CaveInfo::default()
	};
	CaveSmoother::new(&baseline_info).smooth(&mut baseline);

	let mut enabled = raw;
	let enabled_info = CaveInfo {
		smoothing: true,
		remove_diagonals: false,
		smooth_corners: true,
		smooth_points: true,
		cave_width: 25,
		cave_height: 18,
		..CaveInfo::default()
	};
	CaveSmoother::new(&enabled_info).smooth(&mut enabled);

	for y in 0..18i32 {
		for x in 0..25i32 {
			let is_wall_enabled = enabled.tile(x, y) == TileName::Wall;
			let is_wall_baseline = baseline.tile(x, y) == TileName::Wall;
			assert_eq!(
				is_wall_enabled, is_wall_baseline,
				"wall-ness of ({}, {}) changed when corners/points were enabled",
				x, y
			);
		}
	}
}

// Scenario 3: a solid NE-corner block (three wall cells forming a right
// angle) in an otherwise open floor field. The corner cell has two
// solid orthogonal neighbors and gets cut into a 45-degree slope; each
// arm has exactly one solid neighbor and becomes the end-cap that faces
// away from it.
#[test]
fn corner_block_produces_a_slope_at_the_bend_and_end_caps_on_its_arms() {
	init_logging();
	let is_wall = |x: usize, y: usize| {
		(x == 3 && y == 3) || (x == 4 && y == 3) || (x == 3 && y == 4)
	};
	let mut grid = Grid::from_walls(8, 8, is_wall);
	let info = CaveInfo {
		smoothing: true,
		remove_diagonals: false,
		smooth_corners: false,
		smooth_points: false,
		cave_width: 8,
		cave_height: 8,
		..CaveInfo::default()
	};
	CaveSmoother::new(&info).smooth(&mut grid);

	assert_eq!(grid.tile(3, 3), TileName::T45c);
	assert_eq!(grid.tile(4, 3), TileName::EndE);
	assert_eq!(grid.tile(3, 4), TileName::EndS);
}
