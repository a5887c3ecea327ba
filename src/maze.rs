/*
maze.rs

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

//! Build random mazes and solve them.
//!
//! A maze is a [`grid::Grid`] of [`cell::Cell`] objects.
//! Each cell has four walls, one for each [`direction::Direction`].
//! A new grid is fully walled.
//!
//! * The [`generator::Generator`] removes walls to create the maze.
//!   It opens the entrance at the top of the top-left cell and the exit at the bottom of the
//!   bottom-right cell, and then carves passages so that every cell is reachable from every
//!   other cell through exactly one path.
//!
//! * The [`solver::Solver`] walks the passages from the entrance to the exit with a depth-first
//!   search.
//!
//! Both algorithms try the sides of each cell in an order given by a
//! [`direction_order::DirectionOrder`] object, and report their progress to a
//! [`renderer::Renderer`] object.

pub mod cell;
pub mod direction;
pub mod direction_order;
pub mod generator;
pub mod grid;
pub mod maze_error;
pub mod renderer;
pub mod solver;
