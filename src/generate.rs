//! Randomized depth-first backtracker.

use crate::grid::{Direction, Grid, Position};
use crate::prng::Prng;

/// Carve a perfect maze over `grid`, starting from `start`.
///
/// The grid is resealed first, then passages are opened along a random
/// depth-first walk: from the cell on top of the stack, pick one
/// unvisited neighbor uniformly at random, open the shared wall, and
/// descend; when no unvisited neighbor remains, backtrack. The walk only
/// ends once every cell reachable from `start` has been visited, which on
/// a full rectangular grid is every cell.
///
/// The stack is an explicit `Vec` bounded by the cell count, so large
/// grids cannot overflow the call stack. The resulting passage graph is a
/// spanning tree: connected, with exactly `width * height - 1` open
/// edges.
pub fn carve(grid: &mut Grid, start: Position, rng: &mut Prng) {
    debug_assert!(grid.in_bounds(start.x, start.y));

    grid.reset();

    // Visit flags are scratch state for this walk only; they never outlive
    // the call, so finished mazes carry no generation residue.
    let mut visited = vec![false; grid.cell_count()];
    let mut stack: Vec<Position> = Vec::with_capacity(grid.cell_count());

    visited[grid.index_of(start)] = true;
    stack.push(start);

    while let Some(&cur) = stack.last() {
        let mut candidates = [cur; 4];
        let mut n = 0usize;
        for dir in Direction::ALL {
            if let Some(next) = grid.neighbor(cur, dir) {
                if !visited[grid.index_of(next)] {
                    candidates[n] = next;
                    n += 1;
                }
            }
        }

        if n == 0 {
            stack.pop();
            continue;
        }

        let next = candidates[rng.gen_index(n)];
        grid.open_passage(cur, next);
        visited[grid.index_of(next)] = true;
        stack.push(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::WALL_ALL;

    fn carved(width: u32, height: u32, seed: u64) -> Grid {
        let mut grid = Grid::new(width, height);
        let mut rng = Prng::new(seed);
        carve(&mut grid, Position::ORIGIN, &mut rng);
        grid
    }

    #[test]
    fn every_cell_gets_at_least_one_opening() {
        let grid = carved(9, 9, 42);
        for y in 0..9 {
            for x in 0..9 {
                assert_ne!(grid.walls_at(x, y).unwrap().walls(), WALL_ALL);
            }
        }
    }

    #[test]
    fn single_cell_grid_is_left_sealed() {
        let grid = carved(1, 1, 42);
        assert_eq!(grid.walls_at(0, 0).unwrap().walls(), WALL_ALL);
    }

    #[test]
    fn same_seed_is_bit_identical() {
        let a = carved(21, 15, 123);
        let b = carved(21, 15, 123);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = carved(21, 15, 123);
        let b = carved(21, 15, 124);
        assert_ne!(a, b);
    }

    #[test]
    fn recarving_reseals_old_passages() {
        let mut grid = Grid::new(7, 7);
        let mut rng = Prng::new(5);
        carve(&mut grid, Position::ORIGIN, &mut rng);

        // A second run under another seed must be a fresh spanning tree,
        // not a union with the first one.
        let mut rng = Prng::new(6);
        carve(&mut grid, Position::ORIGIN, &mut rng);
        assert_eq!(grid, carved(7, 7, 6));
    }
}
