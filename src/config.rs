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

use serde::{Deserialize, Serialize};

// Mirrors the fields the original CaveInfo struct carries. Only
// smoothing/remove_diagonals/smooth_corners/smooth_points and the cave
// dimensions are consumed by the smoother itself; the rest describe how
// a renderer should place the finished map and are carried here purely
// so a full configuration file round-trips through serde_yaml.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaveInfo {
	pub remove_diagonals: bool,
	pub smoothing: bool,
	// NOTE: not used if smoothing is false
	pub smooth_corners: bool,
	// NOTE: not used if smoothing is false
	pub smooth_points: bool,
	pub cave_width: usize,
	pub cave_height: usize,
	pub border_width: usize,
	pub border_height: usize,
	pub cell_width: usize,
	pub cell_height: usize,
	pub start_cell_x: usize,
	pub start_cell_y: usize,
	pub layer: usize,
}

impl Default for CaveInfo {
	fn default() -> Self {
		CaveInfo {
			remove_diagonals: false,
			smoothing: true,
			smooth_corners: true,
			smooth_points: true,
			cave_width: 2,
			cave_height: 2,
			border_width: 1,
			border_height: 1,
			cell_width: 1,
			cell_height: 1,
			start_cell_x: 0,
			start_cell_y: 0,
			layer: 0,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_the_source() {
		let info = CaveInfo::default();
		assert!(!info.remove_diagonals);
		assert!(info.smoothing);
		assert!(info.smooth_corners);
		assert!(info.smooth_points);
		assert_eq!(info.cave_width, 2);
		assert_eq!(info.cave_height, 2);
	}

	#[test]
	fn round_trips_through_yaml() {
		let info = CaveInfo { cave_width: 40, cave_height: 25, ..CaveInfo::default() };
		let yaml = serde_yaml::to_string(&info).unwrap();
		let back: CaveInfo = serde_yaml::from_str(&yaml).unwrap();
		assert_eq!(info, back);
	}

	#[test]
	fn missing_fields_fall_back_to_defaults() {
		let partial: CaveInfo = serde_yaml::from_str("cave_width: 80\ncave_height: 40\n").unwrap();
		assert_eq!(partial.cave_width, 80);
		assert_eq!(partial.cave_height, 40);
		assert!(partial.smoothing);
	}
}
