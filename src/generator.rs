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

// A small cellular-automata cave generator, so the smoother can be
// exercised end to end without a caller bringing their own. Not a
// content pipeline -- just enough to hand the smoother a believable
// raw wall/floor grid.

use std::collections::{HashMap, HashSet};

use rand::Rng;

use crate::tilemap::Grid;

fn ds_union(ds: &mut [i32], r1: i32, r2: i32) {
	let x = ds_find(ds, r1);
	let y = ds_find(ds, r2);

	if x != y {
		ds[y as usize] = x;
	}
}

// It would be smarter to do path compression on find()s but these grids
// are small enough that it isn't worth the extra bookkeeping.
fn ds_find(ds: &[i32], x: i32) -> i32 {
	if ds[x as usize] < 0 {
		x
	} else {
		ds_find(ds, ds[x as usize])
	}
}

fn find_isolated_caves(grid: &[Vec<bool>], width: usize, depth: usize) -> Vec<i32> {
	let mut ds: Vec<i32> = vec![-1; width * depth];

	for r in 1..depth - 1 {
		for c in 1..width - 1 {
			if grid[r][c] {
				continue;
			}
			let v = (r * width + c) as i32;

			if !grid[r - 1][c] {
				ds_union(&mut ds, v, v - width as i32);
			}
			if !grid[r + 1][c] {
				ds_union(&mut ds, v, v + width as i32);
			}
			if !grid[r][c - 1] {
				ds_union(&mut ds, v, v - 1);
			}
			if !grid[r][c + 1] {
				ds_union(&mut ds, v, v + 1);
			}
		}
	}

	ds
}

fn find_sets(grid: &[Vec<bool>], ds: &[i32], width: usize, depth: usize) -> HashMap<i32, i32> {
	let mut sets: HashMap<i32, i32> = HashMap::new();
	for r in 1..depth - 1 {
		for c in 1..width - 1 {
			if grid[r][c] {
				continue;
			}
			let v = (r * width + c) as i32;
			let root = ds_find(ds, v);
			*sets.entry(root).or_insert(0) += 1;
		}
	}

	sets
}

// The caves generated by the cellular automata method can end up disjoint
// -- smaller caves separated from each other. First group floor squares
// into sets with a disjoint-set ADT (adjacency along the 4 cardinal
// points only), then join any two caves separated by a single wall
// square, and finally fill in every remaining cave except the largest.
// That way any two floor squares left in the final map are guaranteed
// reachable from one another.
fn cave_qa(grid: &mut [Vec<bool>], width: usize, depth: usize) {
	let mut ds = find_isolated_caves(grid, width, depth);

	for r in 1..depth - 1 {
		for c in 1..width - 1 {
			if !grid[r][c] {
				continue;
			}
			let i = (r * width + c) as i32;
			let mut adj_sets = HashSet::new();
			let mut nf = false;
			let mut sf = false;
			let mut ef = false;
			let mut wf = false;

			if !grid[r - 1][c] {
				adj_sets.insert(ds_find(&ds, i - width as i32));
				nf = true;
			}
			if !grid[r + 1][c] {
				adj_sets.insert(ds_find(&ds, i + width as i32));
				sf = true;
			}
			if !grid[r][c - 1] {
				adj_sets.insert(ds_find(&ds, i - 1));
				wf = true;
			}
			if !grid[r][c + 1] {
				adj_sets.insert(ds_find(&ds, i + 1));
				ef = true;
			}

			if adj_sets.len() > 1 {
				grid[r][c] = false;
				if nf {
					ds_union(&mut ds, i, i - width as i32);
				}
				if sf {
					ds_union(&mut ds, i, i + width as i32);
				}
				if wf {
					ds_union(&mut ds, i, i - 1);
				}
				if ef {
					ds_union(&mut ds, i, i + 1);
				}
			}
		}
	}

	let sets = find_sets(grid, &ds, width, depth);
	let mut largest_set = 0;
	let mut largest_count = 0;
	for (set, count) in sets {
		if count > largest_count {
			largest_set = set;
			largest_count = count;
		}
	}

	for r in 1..depth - 1 {
		for c in 1..width - 1 {
			if grid[r][c] {
				continue;
			}
			let set = ds_find(&ds, (r * width + c) as i32);
			if set != largest_set {
				grid[r][c] = true;
			}
		}
	}
}

fn count_neighbouring_walls(grid: &[Vec<bool>], row: i32, col: i32, width: i32, depth: i32) -> u32 {
	let mut adj_walls = 0;

	for r in -1..2 {
		for c in -1..2 {
			let nr = row + r;
			let nc = col + c;
			if nr < 0 || nc < 0 || nr == depth || nc == width {
				adj_walls += 1;
			} else if !(r == 0 && c == 0) && grid[nr as usize][nc as usize] {
				adj_walls += 1;
			}
		}
	}

	adj_walls
}

// Fills width x depth with noise at `fill_probability` chance of floor,
// runs one generation of the 4-5 rule (fewer than 4 wall neighbours ->
// floor, more than 5 -> wall, otherwise unchanged), forces the border to
// wall, then joins/cleans up the resulting caves with cave_qa. One
// generation is enough to produce believable maps.
pub fn generate_cave(width: usize, depth: usize, fill_probability: f64) -> Grid {
	assert!(width > 2 && depth > 2, "cave must be larger than its own border");

	let mut grid = vec![vec![true; width]; depth];
	let mut rng = rand::thread_rng();
	for row in grid.iter_mut() {
		for cell in row.iter_mut() {
			let roll: f64 = rng.gen();
			if roll < fill_probability {
				*cell = false;
			}
		}
	}

	let mut next_gen = vec![vec![false; width]; depth];
	for r in 1..depth - 1 {
		for c in 1..width - 1 {
			let adj_walls = count_neighbouring_walls(&grid, r as i32, c as i32, width as i32, depth as i32);
			next_gen[r][c] = if adj_walls < 4 {
				false
			} else if adj_walls > 5 {
				true
			} else {
				grid[r][c]
			};
		}
	}

	for c in 0..width {
		next_gen[0][c] = true;
		next_gen[depth - 1][c] = true;
	}
	for row in next_gen.iter_mut().take(depth - 1).skip(1) {
		row[0] = true;
		row[width - 1] = true;
	}

	cave_qa(&mut next_gen, width, depth);

	Grid::from_walls(width, depth, |x, y| next_gen[y][x])
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tile::TileName;

	#[test]
	fn border_is_always_wall() {
		let cave = generate_cave(30, 20, 0.55);
		for x in 0..30 {
			assert_eq!(cave.tile(x as i32, 0), TileName::Wall);
			assert_eq!(cave.tile(x as i32, 19), TileName::Wall);
		}
		for y in 0..20 {
			assert_eq!(cave.tile(0, y as i32), TileName::Wall);
			assert_eq!(cave.tile(29, y as i32), TileName::Wall);
		}
	}

	#[test]
	fn produces_the_requested_dimensions() {
		let cave = generate_cave(40, 25, 0.55);
		assert_eq!(cave.width(), 40);
		assert_eq!(cave.height(), 25);
	}

	#[test]
	fn cave_qa_leaves_a_single_connected_floor_region() {
		// Two separate 1-cell rooms joined by nothing -- cave_qa should
		// fill in the smaller one since only one region can survive.
		let mut grid = vec![vec![true; 7]; 5];
		grid[1][1] = false;
		grid[3][5] = false;
		cave_qa(&mut grid, 7, 5);
		let floors: usize = grid.iter().flatten().filter(|w| !**w).count();
		assert_eq!(floors, 1);
	}
}
