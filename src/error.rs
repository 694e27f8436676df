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

use std::fmt;

// Raised only while compiling the static pattern tables, never at runtime.
// A value here means a typo in one of the template grids in this crate,
// not a caller mistake. `Template` is typed as a closed, exhaustively
// matched `Cell` enum rather than the source's raw char grids, so there's
// no "unrecognized character" case left to represent here -- only a
// template missing its primary (N/O) tile position is possible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
	NoPrimaryTile,
}

impl fmt::Display for PatternError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			PatternError::NoPrimaryTile => write!(f, "template has no N/O primary tile position"),
		}
	}
}

impl std::error::Error for PatternError {}
