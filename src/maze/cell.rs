/*
cell.rs

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

//! Wall and visit status of one maze cell.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::direction::Direction;

/// Position of a cell in the grid.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct CellPos {
    pub col: usize,
    pub row: usize,
}

impl CellPos {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// [`Cell`] object.
///
/// A cell is pure data. The generator and the solver notify the renderer after they change it.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Wall status, indexed by [`Direction`]. `true` means that the wall is present.
    walls: [bool; 4],

    /// Transient flag shared by the generator and the solver.
    visited: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

impl Cell {
    /// Create a fully enclosed, unvisited cell.
    pub fn new() -> Self {
        Self {
            walls: [true; 4],
            visited: false,
        }
    }

    /// Whether the wall on the given side is present.
    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.index()]
    }

    pub fn set_wall(&mut self, direction: Direction, present: bool) {
        self.walls[direction.index()] = present;
    }

    /// Return the sides that still have a wall, in the order top, right, bottom, left.
    pub fn walls(&self) -> Vec<Direction> {
        self.walls
            .iter()
            .enumerate()
            .filter(|(_, present)| **present)
            .filter_map(|(i, _)| Direction::from_repr(i as u8))
            .collect()
    }

    /// Number of walls still present.
    pub fn num_walls(&self) -> usize {
        self.walls.iter().filter(|w| **w).count()
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    /// One-line description of the visit status.
    pub fn visit_summary(&self) -> &'static str {
        if self.visited {
            "Cell is visited"
        } else {
            "Cell is not visited"
        }
    }
}

/// Describe the walls of the cell, such as `Cell has 2 walls: top left`.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Cell has {} walls:", self.num_walls())?;
        for d in self.walls() {
            write!(f, " {d}")?;
        }
        Ok(())
    }
}
