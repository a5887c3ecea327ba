/*
lib.rs

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

//! Generate perfect rectangular mazes and find a path through them.
//!
//! ```
//! use maze_solver::{DeadEnds, Grid, NoRenderer, Solver, generate};
//!
//! let mut grid = Grid::new(10, 8).unwrap();
//! generate(&mut grid, 42);
//! let mut solver = Solver::with_seed(42, DeadEnds::Keep);
//! assert!(solver.run(&mut grid, &mut NoRenderer));
//! assert_eq!(solver.path().last(), Some(&grid.end_pos()));
//! ```

pub mod ascii;
pub mod maze;

pub use maze::cell::{Cell, CellPos};
pub use maze::direction::Direction;
pub use maze::direction_order::{DirectionOrder, RandomOrder, ScriptedOrder};
pub use maze::generator::{Generator, generate};
pub use maze::grid::Grid;
pub use maze::maze_error::MazeError;
pub use maze::renderer::{Move, NoRenderer, Renderer, Trace};
pub use maze::solver::{DeadEnds, Solver};
