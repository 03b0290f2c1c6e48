//! Rectangular grid of wall-bitmask cells.
//!
//! Wall state is symmetric by construction: the only mutation that clears
//! a wall, [`Grid::open_passage`], clears the shared edge on both sides.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Wall bits per cell.
// 1=north, 2=east, 4=south, 8=west. A set bit means the side is sealed.
pub const WALL_N: u8 = 1;
pub const WALL_E: u8 = 2;
pub const WALL_S: u8 = 4;
pub const WALL_W: u8 = 8;
pub const WALL_ALL: u8 = WALL_N | WALL_E | WALL_S | WALL_W;

/// A cell coordinate. `(0, 0)` is the top-left corner; `x` grows east and
/// `y` grows south.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// The four cardinal directions, in the fixed enumeration order used by
/// the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub const fn wall_bit(self) -> u8 {
        match self {
            Direction::North => WALL_N,
            Direction::East => WALL_E,
            Direction::South => WALL_S,
            Direction::West => WALL_W,
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Direction from `a` to `b`, if `b` is grid-adjacent to `a`.
    pub fn between(a: Position, b: Position) -> Option<Direction> {
        if b.x == a.x && b.y.checked_add(1) == Some(a.y) {
            Some(Direction::North)
        } else if a.x.checked_add(1) == Some(b.x) && b.y == a.y {
            Some(Direction::East)
        } else if b.x == a.x && a.y.checked_add(1) == Some(b.y) {
            Some(Direction::South)
        } else if b.x.checked_add(1) == Some(a.x) && b.y == a.y {
            Some(Direction::West)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        }
    }
}

/// One grid cell: which of its four sides are currently sealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    walls: u8,
}

impl Cell {
    pub(crate) const SEALED: Cell = Cell { walls: WALL_ALL };

    pub fn has_wall(self, dir: Direction) -> bool {
        self.walls & dir.wall_bit() != 0
    }

    /// Raw bitmask, for renderers that want all four sides at once.
    pub fn walls(self) -> u8 {
        self.walls
    }

    fn open(&mut self, dir: Direction) {
        self.walls &= !dir.wall_bit();
    }
}

/// Contract violations on grid queries.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// A `width x height` array of cells. Dimensions are fixed at
/// construction; wall state changes only through [`Grid::reset`] and
/// [`Grid::open_passage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every wall sealed. Dimensions are clamped to at
    /// least 1x1 so a bad config cannot produce an empty grid.
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let cells = vec![Cell::SEALED; (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// The fixed goal cell: the bottom-right corner.
    pub fn goal(&self) -> Position {
        Position::new(self.width - 1, self.height - 1)
    }

    /// Seal every wall again. Used at the start of each generation run.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::SEALED);
    }

    pub fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// The cell one step in `dir` from `pos`, or `None` at the grid edge.
    pub fn neighbor(&self, pos: Position, dir: Direction) -> Option<Position> {
        let next = match dir {
            Direction::North => {
                if pos.y == 0 {
                    return None;
                }
                Position::new(pos.x, pos.y - 1)
            }
            Direction::East => Position::new(pos.x.checked_add(1)?, pos.y),
            Direction::South => Position::new(pos.x, pos.y.checked_add(1)?),
            Direction::West => {
                if pos.x == 0 {
                    return None;
                }
                Position::new(pos.x - 1, pos.y)
            }
        };
        if self.in_bounds(next.x, next.y) {
            Some(next)
        } else {
            None
        }
    }

    /// Wall mask of the cell at `(x, y)`.
    ///
    /// Out-of-bounds coordinates are a caller bug; they come back as
    /// [`GridError::OutOfBounds`] rather than an index panic.
    pub fn walls_at(&self, x: u32, y: u32) -> Result<Cell, GridError> {
        if !self.in_bounds(x, y) {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.cells[self.index(x, y)])
    }

    /// Clear the shared edge between two adjacent cells, on both sides.
    ///
    /// Adjacency is a caller contract: the generator only ever passes
    /// neighbors it enumerated itself. Non-adjacent pairs are a no-op in
    /// release builds.
    pub fn open_passage(&mut self, a: Position, b: Position) {
        debug_assert!(self.in_bounds(a.x, a.y) && self.in_bounds(b.x, b.y));
        let dir = Direction::between(a, b);
        debug_assert!(dir.is_some(), "open_passage called with non-adjacent cells");
        if let Some(dir) = dir {
            let (ia, ib) = (self.index(a.x, a.y), self.index(b.x, b.y));
            self.cells[ia].open(dir);
            self.cells[ib].open(dir.opposite());
        }
    }

    pub(crate) fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub(crate) fn index_of(&self, pos: Position) -> usize {
        self.index(pos.x, pos.y)
    }
}
