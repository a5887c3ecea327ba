/*
ascii.rs

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

//! Draw a maze as text.
//!
//! ```text
//! +   +---+---+
//! | *   * |   |
//! +---+   +   +
//! | .   *   * |
//! +---+---+   +
//! ```
//!
//! - `*` marks the cells of the path.
//! - `.` marks the other visited cells (the dead ends explored by the solver).

use std::collections::HashSet;
use std::fmt;

use crate::maze::cell::{Cell, CellPos};
use crate::maze::direction::Direction;
use crate::maze::grid::Grid;

const CORNER: &str = "+";
const HORIZONTAL_WALL: &str = "---";
const HORIZONTAL_OPEN: &str = "   ";
const VERTICAL_WALL: &str = "|";
const VERTICAL_OPEN: &str = " ";

/// Text drawing of a [`Grid`].
pub struct AsciiMaze<'a> {
    grid: &'a Grid,

    /// Cells to mark as part of the path.
    path: HashSet<CellPos>,
}

impl<'a> AsciiMaze<'a> {
    /// Create the object.
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            path: HashSet::new(),
        }
    }

    /// Mark the given cells as the path.
    pub fn with_path(mut self, path: &[CellPos]) -> Self {
        self.path = path.iter().copied().collect();
        self
    }

    fn marker(&self, pos: CellPos, cell: &Cell) -> char {
        if self.path.contains(&pos) {
            '*'
        } else if cell.is_visited() {
            '.'
        } else {
            ' '
        }
    }

    /// Horizontal walls on the given side of the cells of the row.
    fn write_horizontal(
        &self,
        f: &mut fmt::Formatter,
        row: usize,
        side: Direction,
    ) -> fmt::Result {
        for col in 0..self.grid.num_cols() {
            let cell: &Cell = self.grid.cell(CellPos::new(col, row));
            f.write_str(CORNER)?;
            f.write_str(if cell.has_wall(side) {
                HORIZONTAL_WALL
            } else {
                HORIZONTAL_OPEN
            })?;
        }
        writeln!(f, "{CORNER}")
    }
}

impl fmt::Display for AsciiMaze<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.grid.num_rows() {
            self.write_horizontal(f, row, Direction::Top)?;
            for col in 0..self.grid.num_cols() {
                let pos: CellPos = CellPos::new(col, row);
                let cell: &Cell = self.grid.cell(pos);
                f.write_str(if cell.has_wall(Direction::Left) {
                    VERTICAL_WALL
                } else {
                    VERTICAL_OPEN
                })?;
                write!(f, " {} ", self.marker(pos, cell))?;
            }
            let last: &Cell = self
                .grid
                .cell(CellPos::new(self.grid.num_cols() - 1, row));
            writeln!(
                f,
                "{}",
                if last.has_wall(Direction::Right) {
                    VERTICAL_WALL
                } else {
                    VERTICAL_OPEN
                }
            )?;
        }
        self.write_horizontal(f, self.grid.num_rows() - 1, Direction::Bottom)
    }
}
