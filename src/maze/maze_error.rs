/*
maze_error.rs

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

//! Errors raised by the maze model.
//!
//! Out-of-range lookups are not errors: [`crate::maze::grid::Grid::get_cell`] returns [`None`].

use std::error::Error;
use std::fmt;

/// Type of errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MazeError {
    /// The grid cannot be built with the requested dimensions or cell size.
    Configuration(String),

    /// A carve, move, or replay operation received positions that are not two adjacent cells
    /// of the grid.
    InvalidArgument(String),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MazeError::Configuration(msg) => write!(f, "invalid maze configuration: {msg}"),
            MazeError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
        }
    }
}

impl Error for MazeError {}
