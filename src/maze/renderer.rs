/*
renderer.rs

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

//! Notifications sent to the application while a maze is carved or solved.
//!
//! The generator and the solver call the [`Renderer`] synchronously after each step, so an
//! application can animate the maze one step at a time.
//! Pacing belongs to the application.
//!
//! [`Trace`] is a renderer that records the moves.
//! A recorded trace can be replayed against the grid with [`Trace::replay`] to retrieve the
//! accepted path.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, CellPos};
use super::grid::Grid;
use super::maze_error::MazeError;

/// Receive the maze events.
///
/// Both methods do nothing by default.
pub trait Renderer {
    /// The wall status of the cell at the given position changed, or must be redrawn.
    fn on_wall_state_changed(&mut self, _pos: CellPos, _cell: &Cell) {}

    /// The solver moved from a cell to an adjacent cell.
    ///
    /// `undo` is `true` when the solver backtracks from a dead end.
    fn on_move(&mut self, _from: CellPos, _to: CellPos, _undo: bool) {}
}

/// Renderer that ignores all the events.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoRenderer;

impl Renderer for NoRenderer {}

/// One solver move.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Move {
    pub from: CellPos,
    pub to: CellPos,
    pub undo: bool,
}

/// Ordered log of the solver moves.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Trace {
    /// Forward moves and backtracks, in the order the solver made them.
    pub moves: Vec<Move>,

    /// Number of wall status notifications received while carving.
    pub wall_updates: usize,
}

impl Renderer for Trace {
    fn on_wall_state_changed(&mut self, _pos: CellPos, _cell: &Cell) {
        self.wall_updates += 1;
    }

    fn on_move(&mut self, from: CellPos, to: CellPos, undo: bool) {
        self.moves.push(Move { from, to, undo });
    }
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of forward moves.
    pub fn num_forward(&self) -> usize {
        self.moves.iter().filter(|m| !m.undo).count()
    }

    /// Number of backtracks.
    pub fn num_backtracks(&self) -> usize {
        self.moves.iter().filter(|m| m.undo).count()
    }

    /// Replay the moves on the given grid and return the path that remains at the end, from the
    /// start cell.
    ///
    /// # Errors
    ///
    /// Return [`MazeError::InvalidArgument`] if a move does not go through an open passage
    /// between two adjacent cells, if a forward move does not leave the last cell of the path,
    /// or if a backtrack does not return to the previous cell of the path.
    pub fn replay(&self, grid: &Grid) -> Result<Vec<CellPos>, MazeError> {
        let mut path: Vec<CellPos> = vec![grid.start_pos()];

        for (i, m) in self.moves.iter().enumerate() {
            let direction = grid.direction_between(m.from, m.to)?;
            if !grid.is_passage(m.from, direction) {
                return Err(MazeError::InvalidArgument(format!(
                    "move {i}: wall between {} and {}",
                    m.from, m.to
                )));
            }
            if path.last() != Some(&m.from) {
                return Err(MazeError::InvalidArgument(format!(
                    "move {i}: {} is not the current cell",
                    m.from
                )));
            }
            if m.undo {
                path.pop();
                if path.last() != Some(&m.to) {
                    return Err(MazeError::InvalidArgument(format!(
                        "move {i}: backtrack to {} does not return to the previous cell",
                        m.to
                    )));
                }
            } else {
                if path.contains(&m.to) {
                    return Err(MazeError::InvalidArgument(format!(
                        "move {i}: {} is already on the path",
                        m.to
                    )));
                }
                path.push(m.to);
            }
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::direction::Direction;

    /// 2x2 grid with passages (0,0)-(1,0), (1,0)-(1,1), and (0,0)-(0,1).
    fn grid_2x2() -> Grid {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.carve(CellPos::new(0, 0), Direction::Right).unwrap();
        grid.carve(CellPos::new(1, 0), Direction::Bottom).unwrap();
        grid.carve(CellPos::new(0, 0), Direction::Bottom).unwrap();
        grid
    }

    fn mv(from: (usize, usize), to: (usize, usize), undo: bool) -> Move {
        Move {
            from: CellPos::new(from.0, from.1),
            to: CellPos::new(to.0, to.1),
            undo,
        }
    }

    #[test]
    fn test_records_events() {
        let mut trace = Trace::new();
        trace.on_wall_state_changed(CellPos::new(0, 0), &Cell::new());
        trace.on_move(CellPos::new(0, 0), CellPos::new(1, 0), false);
        trace.on_move(CellPos::new(1, 0), CellPos::new(0, 0), true);
        assert_eq!(trace.wall_updates, 1);
        assert_eq!(trace.num_forward(), 1);
        assert_eq!(trace.num_backtracks(), 1);
        assert_eq!(trace.moves[1], mv((1, 0), (0, 0), true));
    }

    #[test]
    fn test_replay_with_backtrack() {
        let grid = grid_2x2();
        let trace = Trace {
            moves: vec![
                mv((0, 0), (0, 1), false),
                mv((0, 1), (0, 0), true),
                mv((0, 0), (1, 0), false),
                mv((1, 0), (1, 1), false),
            ],
            wall_updates: 0,
        };
        assert_eq!(
            trace.replay(&grid).unwrap(),
            vec![CellPos::new(0, 0), CellPos::new(1, 0), CellPos::new(1, 1)]
        );
    }

    #[test]
    fn test_replay_rejects_walls() {
        let grid = grid_2x2();
        let trace = Trace {
            moves: vec![mv((0, 0), (0, 1), false), mv((0, 1), (1, 1), false)],
            wall_updates: 0,
        };
        assert!(matches!(
            trace.replay(&grid),
            Err(MazeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_replay_rejects_jumps() {
        let grid = grid_2x2();
        let not_adjacent = Trace {
            moves: vec![mv((0, 0), (1, 1), false)],
            wall_updates: 0,
        };
        assert!(not_adjacent.replay(&grid).is_err());

        let not_current = Trace {
            moves: vec![mv((0, 0), (1, 0), false), mv((0, 0), (0, 1), false)],
            wall_updates: 0,
        };
        assert!(not_current.replay(&grid).is_err());

        let bad_undo = Trace {
            moves: vec![mv((0, 0), (1, 0), true)],
            wall_updates: 0,
        };
        assert!(bad_undo.replay(&grid).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let trace = Trace {
            moves: vec![mv((0, 0), (1, 0), false)],
            wall_updates: 3,
        };
        let json: String = serde_json::to_string(&trace).unwrap();
        assert!(json.contains("\"undo\":false"));
        let back: Trace = serde_json::from_str(&json).unwrap();
        assert_eq!(back, trace);
    }
}
