/*
generator.rs

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

//! Carve a random maze with the recursive backtracker algorithm.
//!
//! Starting from the top-left cell, the generator visits the sides of the current cell in a
//! random order.
//! When the neighbor on a side has not been visited yet, the wall between the two cells is
//! removed and the generator continues from the neighbor.
//! When all the sides of a cell have been tried, the generator goes back to the previous cell.
//!
//! The result is a spanning tree: every cell is reachable from every other cell through exactly
//! one path.
//!
//! The recursion is kept on an explicit stack, so the size of the maze is not limited by the
//! call stack.

use log::debug;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

use super::cell::CellPos;
use super::direction::Direction;
use super::direction_order::{DirectionOrder, RandomOrder};
use super::grid::Grid;
use super::renderer::{NoRenderer, Renderer};

/// A cell being carved, with the sides still to try.
struct Frame {
    pos: CellPos,
    order: [Direction; 4],
    next: usize,
}

/// [`Generator`] object.
pub struct Generator<O: DirectionOrder> {
    /// Source of the random side orders.
    order: O,

    /// Number of passages carved during the last run.
    pub passages: usize,

    /// Deepest stack reached during the last run.
    pub max_depth: usize,

    /// Duration in seconds of the last run.
    pub duration: f32,
}

impl Generator<RandomOrder<ChaCha8Rng>> {
    /// Create a generator that produces the same maze for the same seed and dimensions.
    pub fn with_seed(seed: u64) -> Self {
        debug!("Generator seed = {seed}");
        Self::new(RandomOrder::seeded(seed))
    }
}

impl<O: DirectionOrder> Generator<O> {
    /// Create the object.
    pub fn new(order: O) -> Self {
        Self {
            order,
            passages: 0,
            max_depth: 0,
            duration: 0.0,
        }
    }

    /// Carve the maze into the given grid, which must be fully walled.
    ///
    /// Running the generator twice on the same grid gives an undefined maze.
    /// The visited flags of all the cells are cleared when the method returns.
    pub fn run(&mut self, grid: &mut Grid, renderer: &mut impl Renderer) {
        let start_time: Instant = Instant::now();
        self.passages = 0;
        self.max_depth = 0;

        // Entrance and exit
        grid.open_entrance();
        let start: CellPos = grid.start_pos();
        let end: CellPos = grid.end_pos();
        renderer.on_wall_state_changed(start, grid.cell(start));
        renderer.on_wall_state_changed(end, grid.cell(end));

        grid.cell_mut(start).set_visited(true);
        let mut stack: Vec<Frame> = Vec::with_capacity(grid.len());
        stack.push(Frame {
            pos: start,
            order: self.order.next_order(),
            next: 0,
        });

        while let Some(frame) = stack.last_mut() {
            if frame.next == frame.order.len() {
                // All the sides have been tried: back to the previous cell
                stack.pop();
                continue;
            }
            let pos: CellPos = frame.pos;
            let direction: Direction = frame.order[frame.next];
            frame.next += 1;

            let target: Option<CellPos> = grid
                .neighbor_pos(pos, direction)
                .filter(|npos| !grid.cell(*npos).is_visited());
            if let Some(npos) = target {
                debug!("    Carving {pos}-{npos} ({direction})");
                grid.carve_pair(pos, direction, npos);
                grid.cell_mut(npos).set_visited(true);
                self.passages += 1;
            }
            renderer.on_wall_state_changed(pos, grid.cell(pos));

            if let Some(npos) = target {
                stack.push(Frame {
                    pos: npos,
                    order: self.order.next_order(),
                    next: 0,
                });
                self.max_depth = self.max_depth.max(stack.len());
            }
        }

        grid.reset_visited();
        self.duration = start_time.elapsed().as_secs_f32();
        debug!(
            "Passages = {}  Max depth = {}  Duration = {}",
            self.passages, self.max_depth, self.duration
        );
    }
}

/// Carve a random maze into the given grid from a seed, without notifications.
pub fn generate(grid: &mut Grid, seed: u64) {
    Generator::with_seed(seed).run(grid, &mut NoRenderer);
}
