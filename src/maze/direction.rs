/*
direction.rs

Copyright 2025 Hervé Quatremain

This file is part of Maze Solver.

Maze Solver is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Maze Solver is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Maze Solver. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Sides of a maze cell.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// One of the four sides of a cell.
///
/// The discriminant is the index of the side in the wall array of a
/// [`crate::maze::cell::Cell`].
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

/// Column delta, row delta, and opposite side, indexed by [`Direction`].
const DIRECTION_TABLE: [(isize, isize, Direction); 4] = [
    (0, -1, Direction::Bottom),
    (1, 0, Direction::Left),
    (0, 1, Direction::Top),
    (-1, 0, Direction::Right),
];

impl Direction {
    /// All the sides, in the order top, right, bottom, left.
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    /// Index of the side in the wall array of a cell.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The side facing this one on the adjacent cell.
    pub fn opposite(self) -> Direction {
        DIRECTION_TABLE[self.index()].2
    }

    /// Column and row deltas to reach the adjacent cell on this side.
    pub fn delta(self) -> (isize, isize) {
        let (dcol, drow, _) = DIRECTION_TABLE[self.index()];
        (dcol, drow)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Top => write!(f, "top"),
            Direction::Right => write!(f, "right"),
            Direction::Bottom => write!(f, "bottom"),
            Direction::Left => write!(f, "left"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_symmetric() {
        for d in Direction::ALL {
            assert_ne!(d, d.opposite());
            assert_eq!(d, d.opposite().opposite());
        }
        assert_eq!(Direction::Top.opposite(), Direction::Bottom);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn test_opposite_deltas_cancel() {
        for d in Direction::ALL {
            let (c1, r1) = d.delta();
            let (c2, r2) = d.opposite().delta();
            assert_eq!((c1 + c2, r1 + r2), (0, 0));
        }
        assert_eq!(Direction::Top.delta(), (0, -1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
    }

    #[test]
    fn test_from_repr_matches_index() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_repr(d.index() as u8), Some(d));
        }
        assert_eq!(Direction::from_repr(4), None);
    }

    #[test]
    fn test_serialize_lowercase() {
        let s: String = serde_json::to_string(&Direction::Bottom).unwrap();
        assert_eq!(s, "\"bottom\"");
        assert_eq!(Direction::Left.to_string(), "left");
    }
}
