/*
solver.rs

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

//! Find a path from the entrance to the exit with a depth-first search.
//!
//! The path is not necessarily the shortest one.
//! Each step from a cell to an adjacent cell is reported to the [`Renderer`] as a forward move,
//! and each return from a dead end as a backtrack.

use clap::ValueEnum;
use log::debug;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::cell::CellPos;
use super::direction::Direction;
use super::direction_order::{DirectionOrder, RandomOrder};
use super::grid::Grid;
use super::renderer::Renderer;

/// What happens to the visited flag of the cells the solver backtracks from.
///
/// - `Keep` leaves the flag set, so the dead ends stay marked after the search.
/// - `Clear` removes the flag, so only the cells of the accepted path are marked.
///
/// In both cases, call [`Grid::reset_visited`] before solving the same grid again.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeadEnds {
    #[default]
    Keep,
    Clear,
}

/// A cell being explored, with the sides still to try.
struct Frame {
    pos: CellPos,
    order: [Direction; 4],
    next: usize,
}

/// [`Solver`] object.
pub struct Solver<O: DirectionOrder> {
    /// Source of the random side orders.
    order: O,

    /// Visited flag policy for the dead ends.
    pub dead_ends: DeadEnds,

    /// Number of forward moves during the last run.
    pub forward_moves: usize,

    /// Number of backtracks during the last run.
    pub backtracks: usize,

    /// Duration in seconds of the last run.
    pub duration: f32,

    /// Accepted path of the last successful run, from the start cell to the end cell.
    path: Vec<CellPos>,
}

impl Solver<RandomOrder<ChaCha8Rng>> {
    /// Create a solver that explores the sides in a reproducible order.
    pub fn with_seed(seed: u64, dead_ends: DeadEnds) -> Self {
        debug!("Solver seed = {seed}");
        Self::new(RandomOrder::seeded(seed), dead_ends)
    }
}

impl<O: DirectionOrder> Solver<O> {
    /// Create the object.
    pub fn new(order: O, dead_ends: DeadEnds) -> Self {
        Self {
            order,
            dead_ends,
            forward_moves: 0,
            backtracks: 0,
            duration: 0.0,
            path: Vec::new(),
        }
    }

    /// Accepted path of the last run. Empty if no path was found.
    pub fn path(&self) -> &[CellPos] {
        &self.path
    }

    /// Search a path from the start cell to the end cell.
    ///
    /// Only passages are followed: the neighbor's wall facing the current cell must have been
    /// removed.
    /// The method does not reset the visited flags before the search.
    ///
    /// Return whether the end cell was reached. For a grid carved by
    /// [`crate::maze::generator::Generator`], it always is.
    pub fn run(&mut self, grid: &mut Grid, renderer: &mut impl Renderer) -> bool {
        let start_time: Instant = Instant::now();
        self.forward_moves = 0;
        self.backtracks = 0;
        self.path.clear();

        let found: bool = self.search(grid, renderer);

        self.duration = start_time.elapsed().as_secs_f32();
        debug!(
            "Found = {}  Forward moves = {}  Backtracks = {}  Duration = {}",
            found, self.forward_moves, self.backtracks, self.duration
        );
        found
    }

    fn search(&mut self, grid: &mut Grid, renderer: &mut impl Renderer) -> bool {
        let start: CellPos = grid.start_pos();
        let end: CellPos = grid.end_pos();

        grid.cell_mut(start).set_visited(true);
        if start == end {
            self.path.push(start);
            return true;
        }

        let mut stack: Vec<Frame> = Vec::with_capacity(grid.len());
        stack.push(Frame {
            pos: start,
            order: self.order.next_order(),
            next: 0,
        });

        while let Some(frame) = stack.last_mut() {
            let pos: CellPos = frame.pos;

            if frame.next == frame.order.len() {
                // Dead end
                stack.pop();
                if self.dead_ends == DeadEnds::Clear {
                    grid.cell_mut(pos).set_visited(false);
                }
                if let Some(previous) = stack.last() {
                    debug!("    Back: {pos} -> {}", previous.pos);
                    renderer.on_move(pos, previous.pos, true);
                    self.backtracks += 1;
                }
                continue;
            }
            let direction: Direction = frame.order[frame.next];
            frame.next += 1;

            let npos: CellPos = match grid.neighbor_pos(pos, direction) {
                Some(npos) => npos,
                None => continue,
            };
            let neighbor = grid.cell(npos);
            if neighbor.is_visited() || neighbor.has_wall(direction.opposite()) {
                continue;
            }

            debug!("    Moving {pos} -> {npos}");
            renderer.on_move(pos, npos, false);
            self.forward_moves += 1;
            grid.cell_mut(npos).set_visited(true);

            if npos == end {
                self.path = stack.iter().map(|f| f.pos).collect();
                self.path.push(npos);
                return true;
            }
            stack.push(Frame {
                pos: npos,
                order: self.order.next_order(),
                next: 0,
            });
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::direction_order::ScriptedOrder;
    use crate::maze::generator::generate;
    use crate::maze::renderer::{Move, NoRenderer, Trace};

    use crate::maze::direction::Direction::{Bottom, Left, Right, Top};

    fn pos(col: usize, row: usize) -> CellPos {
        CellPos::new(col, row)
    }

    /// 2x2 grid with passages (0,0)-(1,0), (1,0)-(1,1), and (0,0)-(0,1).
    /// (0,1) is a dead end.
    fn grid_with_dead_end() -> Grid {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.open_entrance();
        grid.carve(pos(0, 0), Right).unwrap();
        grid.carve(pos(1, 0), Bottom).unwrap();
        grid.carve(pos(0, 0), Bottom).unwrap();
        grid
    }

    #[test]
    fn test_single_cell() {
        let mut grid = Grid::new(1, 1).unwrap();
        generate(&mut grid, 1);
        let mut solver = Solver::with_seed(1, DeadEnds::Keep);
        let mut trace = Trace::new();
        assert!(solver.run(&mut grid, &mut trace));
        assert!(trace.moves.is_empty());
        assert_eq!(solver.path(), &[pos(0, 0)]);
        assert!(grid.start_cell().is_visited());
    }

    #[test]
    fn test_golden_serpentine() {
        // Maze carved by the golden 2x2 generator test: (0,0)-(1,0)-(1,1)-(0,1)
        let mut grid = Grid::new(2, 2).unwrap();
        grid.open_entrance();
        grid.carve(pos(0, 0), Right).unwrap();
        grid.carve(pos(1, 0), Bottom).unwrap();
        grid.carve(pos(1, 1), Left).unwrap();

        let mut solver = Solver::new(ScriptedOrder::new(&[]), DeadEnds::Keep);
        let mut trace = Trace::new();
        assert!(solver.run(&mut grid, &mut trace));
        assert_eq!(
            trace.moves,
            vec![
                Move {
                    from: pos(0, 0),
                    to: pos(1, 0),
                    undo: false
                },
                Move {
                    from: pos(1, 0),
                    to: pos(1, 1),
                    undo: false
                },
            ]
        );
        assert_eq!(solver.path(), &[pos(0, 0), pos(1, 0), pos(1, 1)]);
        assert_eq!(solver.backtracks, 0);
        assert!(!grid.get_cell(0, 1).unwrap().is_visited());
    }

    #[test]
    fn test_backtrack_keeps_dead_ends() {
        let mut grid = grid_with_dead_end();
        let order = ScriptedOrder::new(&[[Bottom, Right, Top, Left]]);
        let mut solver = Solver::new(order, DeadEnds::Keep);
        let mut trace = Trace::new();
        assert!(solver.run(&mut grid, &mut trace));

        let expected: Vec<(CellPos, CellPos, bool)> = vec![
            (pos(0, 0), pos(0, 1), false),
            (pos(0, 1), pos(0, 0), true),
            (pos(0, 0), pos(1, 0), false),
            (pos(1, 0), pos(1, 1), false),
        ];
        let moves: Vec<(CellPos, CellPos, bool)> =
            trace.moves.iter().map(|m| (m.from, m.to, m.undo)).collect();
        assert_eq!(moves, expected);
        assert_eq!(solver.forward_moves, 3);
        assert_eq!(solver.backtracks, 1);
        assert_eq!(solver.path(), &[pos(0, 0), pos(1, 0), pos(1, 1)]);
        assert_eq!(trace.replay(&grid).unwrap(), solver.path());
        assert!(grid.get_cell(0, 1).unwrap().is_visited());
        assert_eq!(grid.num_visited(), 4);
    }

    #[test]
    fn test_backtrack_clears_dead_ends() {
        let mut grid = grid_with_dead_end();
        let order = ScriptedOrder::new(&[[Bottom, Right, Top, Left]]);
        let mut solver = Solver::new(order, DeadEnds::Clear);
        assert!(solver.run(&mut grid, &mut NoRenderer));
        assert!(!grid.get_cell(0, 1).unwrap().is_visited());
        assert_eq!(grid.num_visited(), 3);
        for p in solver.path() {
            assert!(grid.cell(*p).is_visited());
        }
    }

    #[test]
    fn test_walls_block_the_search() {
        // No passage at all: the solver gives up
        let mut grid = Grid::new(3, 3).unwrap();
        grid.open_entrance();
        let mut solver = Solver::with_seed(4, DeadEnds::Keep);
        let mut trace = Trace::new();
        assert!(!solver.run(&mut grid, &mut trace));
        assert!(trace.moves.is_empty());
        assert!(solver.path().is_empty());
    }

    #[test]
    fn test_passage_needs_the_neighbor_wall_cleared() {
        // Only the current cell's side is open: not a passage
        let mut grid = Grid::new(2, 1).unwrap();
        grid.open_entrance();
        grid.get_cell_mut(0, 0).unwrap().set_wall(Right, false);
        let mut solver = Solver::with_seed(6, DeadEnds::Keep);
        assert!(!solver.run(&mut grid, &mut NoRenderer));
        assert_eq!(solver.forward_moves, 0);
        assert!(!grid.cell(pos(1, 0)).is_visited());

        // Only the neighbor's facing side is open: the solver goes through
        let mut grid = Grid::new(2, 1).unwrap();
        grid.open_entrance();
        grid.get_cell_mut(1, 0).unwrap().set_wall(Left, false);
        let mut solver = Solver::with_seed(6, DeadEnds::Keep);
        assert!(solver.run(&mut grid, &mut NoRenderer));
        assert_eq!(solver.path(), [pos(0, 0), pos(1, 0)]);
    }

    #[test]
    fn test_disconnected_exit() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.carve(pos(0, 0), Right).unwrap();
        grid.carve(pos(0, 0), Bottom).unwrap();
        let mut solver = Solver::with_seed(9, DeadEnds::Keep);
        let mut trace = Trace::new();
        assert!(!solver.run(&mut grid, &mut trace));
        assert_eq!(trace.num_forward(), 2);
        assert_eq!(trace.num_backtracks(), 2);
    }

    #[test]
    fn test_solves_generated_mazes() {
        for seed in 0..20 {
            let mut grid = Grid::new(15, 11).unwrap();
            generate(&mut grid, seed);
            let mut solver = Solver::with_seed(seed, DeadEnds::Keep);
            let mut trace = Trace::new();
            assert!(solver.run(&mut grid, &mut trace), "seed {seed}");
            assert_eq!(solver.path().first(), Some(&grid.start_pos()));
            assert_eq!(solver.path().last(), Some(&grid.end_pos()));
            assert_eq!(trace.replay(&grid).unwrap(), solver.path());
            assert_eq!(
                solver.forward_moves - solver.backtracks,
                solver.path().len() - 1
            );
        }
    }

    #[test]
    fn test_solve_again_after_reset() {
        let mut grid = Grid::new(6, 6).unwrap();
        generate(&mut grid, 21);

        let mut first = Solver::with_seed(5, DeadEnds::Keep);
        assert!(first.run(&mut grid, &mut NoRenderer));

        grid.reset_visited();
        assert_eq!(grid.num_visited(), 0);
        let mut second = Solver::with_seed(5, DeadEnds::Keep);
        assert!(second.run(&mut grid, &mut NoRenderer));
        assert_eq!(first.path(), second.path());
        assert_eq!(first.forward_moves, second.forward_moves);
    }
}
