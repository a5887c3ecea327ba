/*
grid.rs

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

//! Rectangular grid of cells.
//!
//! Neighbor lookups are split in three steps that the generator and the solver share:
//! [`Grid::neighbor_of`] computes the coordinates, [`Grid::contains`] checks the bounds, and
//! [`Grid::get_cell`] fetches the cell.
//! [`Grid::neighbor_pos`] chains the first two.

use log::debug;

use super::cell::{Cell, CellPos};
use super::direction::Direction;
use super::maze_error::MazeError;

/// Cell size used for axes with fewer cells than this threshold is [`LARGE_CELL_SIZE`].
const CELL_SIZE_THRESHOLD: usize = 25;
const LARGE_CELL_SIZE: usize = 20;
const SMALL_CELL_SIZE: usize = 10;

/// Default cell size, in renderer units, for an axis with the given number of cells.
pub fn default_cell_size(num_cells: usize) -> usize {
    if num_cells < CELL_SIZE_THRESHOLD {
        LARGE_CELL_SIZE
    } else {
        SMALL_CELL_SIZE
    }
}

/// [`Grid`] object.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    num_cols: usize,
    num_rows: usize,

    /// Cell size in renderer units. The maze model never uses it.
    cell_width: usize,
    cell_height: usize,

    /// Cells indexed by `[col][row]`.
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create a fully walled grid with the default cell size.
    ///
    /// # Errors
    ///
    /// Return [`MazeError::Configuration`] if a dimension is zero.
    pub fn new(num_cols: usize, num_rows: usize) -> Result<Self, MazeError> {
        Self::with_cell_size(
            num_cols,
            num_rows,
            default_cell_size(num_cols),
            default_cell_size(num_rows),
        )
    }

    /// Create a fully walled grid.
    ///
    /// # Errors
    ///
    /// Return [`MazeError::Configuration`] if a dimension or the cell size is zero.
    pub fn with_cell_size(
        num_cols: usize,
        num_rows: usize,
        cell_width: usize,
        cell_height: usize,
    ) -> Result<Self, MazeError> {
        if num_cols == 0 {
            return Err(MazeError::Configuration(
                "the number of columns must be positive".to_string(),
            ));
        }
        if num_rows == 0 {
            return Err(MazeError::Configuration(
                "the number of rows must be positive".to_string(),
            ));
        }
        if cell_width == 0 || cell_height == 0 {
            return Err(MazeError::Configuration(format!(
                "the cell size must be positive, got {cell_width}x{cell_height}"
            )));
        }
        debug!("New grid: {num_cols} columns, {num_rows} rows");
        Ok(Self {
            num_cols,
            num_rows,
            cell_width,
            cell_height,
            cells: vec![vec![Cell::new(); num_rows]; num_cols],
        })
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn cell_width(&self) -> usize {
        self.cell_width
    }

    pub fn cell_height(&self) -> usize {
        self.cell_height
    }

    /// Number of cells in the grid.
    pub fn len(&self) -> usize {
        self.num_cols * self.num_rows
    }

    /// A grid always has at least one cell.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Return the cell at the given coordinates, or [`None`] if they are outside the grid.
    pub fn get_cell(&self, col: usize, row: usize) -> Option<&Cell> {
        self.cells.get(col).and_then(|c| c.get(row))
    }

    pub fn get_cell_mut(&mut self, col: usize, row: usize) -> Option<&mut Cell> {
        self.cells.get_mut(col).and_then(|c| c.get_mut(row))
    }

    /// Return the cell at the given position.
    ///
    /// The position must come from [`Grid::neighbor_pos`], [`Grid::positions`], or be otherwise
    /// known to be inside the grid. Use [`Grid::get_cell`] for positions that are not.
    pub(crate) fn cell(&self, pos: CellPos) -> &Cell {
        &self.cells[pos.col][pos.row]
    }

    pub(crate) fn cell_mut(&mut self, pos: CellPos) -> &mut Cell {
        &mut self.cells[pos.col][pos.row]
    }

    /// Top-left position, where the entrance is.
    pub fn start_pos(&self) -> CellPos {
        CellPos::new(0, 0)
    }

    /// Bottom-right position, where the exit is.
    pub fn end_pos(&self) -> CellPos {
        CellPos::new(self.num_cols - 1, self.num_rows - 1)
    }

    pub fn start_cell(&self) -> &Cell {
        self.cell(self.start_pos())
    }

    pub fn end_cell(&self) -> &Cell {
        self.cell(self.end_pos())
    }

    /// Iterate over all the positions, column by column.
    pub fn positions(&self) -> impl Iterator<Item = CellPos> + use<> {
        let num_rows: usize = self.num_rows;
        (0..self.num_cols)
            .flat_map(move |col| (0..num_rows).map(move |row| CellPos::new(col, row)))
    }

    /// Compute the coordinates of the adjacent cell on the given side, and the side of that cell
    /// that faces the given one.
    ///
    /// The coordinates are not bounds-checked. Use [`Grid::contains`] before fetching the cell.
    pub fn neighbor_of(col: usize, row: usize, direction: Direction) -> (isize, isize, Direction) {
        let (dcol, drow) = direction.delta();
        (
            col as isize + dcol,
            row as isize + drow,
            direction.opposite(),
        )
    }

    /// Whether the given signed coordinates are inside the grid.
    pub fn contains(&self, col: isize, row: isize) -> bool {
        col >= 0 && row >= 0 && (col as usize) < self.num_cols && (row as usize) < self.num_rows
    }

    /// Position of the adjacent cell on the given side, or [`None`] at the grid border.
    pub fn neighbor_pos(&self, pos: CellPos, direction: Direction) -> Option<CellPos> {
        let (ncol, nrow, _) = Self::neighbor_of(pos.col, pos.row, direction);
        if self.contains(ncol, nrow) {
            Some(CellPos::new(ncol as usize, nrow as usize))
        } else {
            None
        }
    }

    /// Whether a player can go from the cell to its neighbor on the given side.
    ///
    /// The neighbor must exist and its facing wall must be cleared.
    pub fn is_passage(&self, pos: CellPos, direction: Direction) -> bool {
        match self.neighbor_pos(pos, direction) {
            Some(npos) => !self.cell(npos).has_wall(direction.opposite()),
            None => false,
        }
    }

    /// Remove the wall between the cell and its neighbor on the given side, on both cells.
    ///
    /// Return the position of the neighbor.
    ///
    /// # Errors
    ///
    /// Return [`MazeError::InvalidArgument`] if the position or its neighbor is outside the
    /// grid.
    pub fn carve(&mut self, pos: CellPos, direction: Direction) -> Result<CellPos, MazeError> {
        if !self.contains(pos.col as isize, pos.row as isize) {
            return Err(MazeError::InvalidArgument(format!(
                "cell {pos} is outside the grid"
            )));
        }
        match self.neighbor_pos(pos, direction) {
            Some(npos) => {
                self.carve_pair(pos, direction, npos);
                Ok(npos)
            }
            None => Err(MazeError::InvalidArgument(format!(
                "cell {pos} has no neighbor on the {direction} side"
            ))),
        }
    }

    /// Clear the matching walls of two adjacent cells.
    pub(crate) fn carve_pair(&mut self, pos: CellPos, direction: Direction, npos: CellPos) {
        self.cell_mut(pos).set_wall(direction, false);
        self.cell_mut(npos).set_wall(direction.opposite(), false);
    }

    /// Remove the top wall of the start cell and the bottom wall of the end cell.
    pub fn open_entrance(&mut self) {
        let start: CellPos = self.start_pos();
        let end: CellPos = self.end_pos();
        self.cell_mut(start).set_wall(Direction::Top, false);
        self.cell_mut(end).set_wall(Direction::Bottom, false);
    }

    /// Return the side of `from` that `to` is adjacent to.
    ///
    /// # Errors
    ///
    /// Return [`MazeError::InvalidArgument`] if one of the positions is outside the grid or if
    /// the two cells are not adjacent.
    pub fn direction_between(&self, from: CellPos, to: CellPos) -> Result<Direction, MazeError> {
        for pos in [from, to] {
            if !self.contains(pos.col as isize, pos.row as isize) {
                return Err(MazeError::InvalidArgument(format!(
                    "cell {pos} is outside the grid"
                )));
            }
        }
        Direction::ALL
            .into_iter()
            .find(|d| self.neighbor_pos(from, *d) == Some(to))
            .ok_or_else(|| {
                MazeError::InvalidArgument(format!("cells {from} and {to} are not adjacent"))
            })
    }

    /// Number of open passages between two cells of the grid.
    ///
    /// The entrance and the exit are not counted.
    pub fn open_connections(&self) -> usize {
        self.positions()
            .map(|pos| {
                [Direction::Right, Direction::Bottom]
                    .into_iter()
                    .filter(|d| self.is_passage(pos, *d) && !self.cell(pos).has_wall(*d))
                    .count()
            })
            .sum()
    }

    /// Clear the visited flag of all the cells.
    pub fn reset_visited(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.set_visited(false);
        }
    }

    /// Number of cells with the visited flag set.
    pub fn num_visited(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| c.is_visited())
            .count()
    }

    /// One-line description of the grid.
    pub fn summary(&self) -> String {
        format!(
            "Maze with {} rows and {} columns, cell size: {}x{}",
            self.num_rows, self.num_cols, self.cell_width, self.cell_height
        )
    }
}
