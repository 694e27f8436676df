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

// Identifies the sprite/role of a single cell. The generator only ever
// produces Wall and Floor; every other variant is written by a smoothing
// pass. `Ignore` is a placeholder used inside update tables for "no second
// tile" / "don't care" slots, never written to a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileName {
	T45a,
	T45b,
	T45c,
	T45d,

	V60a1,
	V60a2,
	V60b1,
	V60b2,
	V60c1,
	V60c2,
	V60d1,
	V60d2,

	H30a1,
	H30a2,
	H30b1,
	H30b2,
	H30c1,
	H30c2,
	H30d1,
	H30d2,

	Single,

	EndN,
	EndS,
	EndE,
	EndW,

	// The empty tile. FLOOR_START in the range below.
	Floor,
	DendN,
	DendS,
	DendE,
	DendW,
	CornrA,
	CornrB,
	CornrC,
	CornrD,
	// FLOOR_END

	T45a2Ct,
	T45b2Ct,
	T45c2Ct,
	T45d2Ct,

	T45AbCt,
	T45AdCt,
	T45BaCt,
	T45BcCt,
	T45CbCt,
	T45CdCt,
	T45DaCt,
	T45DcCt,

	// Generic wall, the only non-floor tile the generator ever produces.
	Wall,

	// Never placed on a map; marks a don't-care slot in an update template.
	Ignore,
}

impl TileName {
	// Narrower than "solid" -- slopes, SINGLE and the end-caps are each
	// their own identity and don't count, matching the source, where the
	// corner pass has to separately OR in the END_* tiles rather than
	// lean on isWall alone.
	pub fn is_wall(self) -> bool {
		matches!(self, TileName::Wall)
	}

	// FLOOR_START..=FLOOR_END in the source's TileTypes.h.
	pub fn is_floor(self) -> bool {
		matches!(
			self,
			TileName::Floor
				| TileName::DendN | TileName::DendS
				| TileName::DendE | TileName::DendW
				| TileName::CornrA | TileName::CornrB
				| TileName::CornrC | TileName::CornrD
		)
	}

	// Narrower than is_floor: a rounded corner is floor-like but not
	// "empty" for diagonal-gap purposes.
	pub fn is_empty(self) -> bool {
		matches!(self, TileName::Floor)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn wall_is_only_plain_wall() {
		assert!(TileName::Wall.is_wall());
		assert!(!TileName::EndN.is_wall());
		assert!(!TileName::T45a.is_wall());
		assert!(!TileName::Single.is_wall());
	}

	#[test]
	fn floor_family_includes_rounded_variants() {
		assert!(TileName::Floor.is_floor());
		assert!(TileName::DendN.is_floor());
		assert!(TileName::CornrB.is_floor());
		assert!(!TileName::Wall.is_floor());
		assert!(!TileName::T45a.is_floor());
	}

	#[test]
	fn empty_is_strictly_plain_floor() {
		assert!(TileName::Floor.is_empty());
		assert!(!TileName::DendN.is_empty());
		assert!(!TileName::CornrA.is_empty());
	}
}
