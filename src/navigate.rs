//! Single-step move validation against the current wall state.

use crate::grid::{Direction, Grid, Position};

/// Result of one attempted step. On a blocked move `position` is the
/// unchanged starting cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub position: Position,
    pub moved: bool,
}

/// Try to step one cell from `from` in `dir`.
///
/// The step succeeds iff the target cell is in bounds and the wall on
/// that side of `from` is open. A blocked step is a normal outcome, not
/// an error; callers just keep the old position.
pub fn attempt_move(grid: &Grid, from: Position, dir: Direction) -> MoveOutcome {
    let blocked = MoveOutcome {
        position: from,
        moved: false,
    };

    let open = match grid.walls_at(from.x, from.y) {
        Ok(cell) => !cell.has_wall(dir),
        // A stale out-of-bounds position cannot move anywhere.
        Err(_) => false,
    };
    if !open {
        return blocked;
    }

    match grid.neighbor(from, dir) {
        Some(next) => MoveOutcome {
            position: next,
            moved: true,
        },
        None => blocked,
    }
}

/// True iff `pos` is the grid's goal cell (the bottom-right corner).
pub fn at_goal(grid: &Grid, pos: Position) -> bool {
    pos == grid.goal()
}
