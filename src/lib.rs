//! # warren
//!
//! Perfect-maze generation and cell-by-cell navigation on a rectangular
//! grid.
//!
//! The maze is carved with a randomized iterative depth-first backtracker,
//! so the passage graph is always a spanning tree: every cell is reachable
//! and exactly one simple path connects any two cells. Movement is
//! validated against per-cell wall bitmasks; bumping into a wall is a
//! normal outcome, not an error.
//!
//! ## Quick Start
//!
//! ```
//! use warren::prelude::*;
//!
//! let cfg = MazeConfig::new(9, 7).with_seed(42);
//! let mut session = Session::new(cfg);
//!
//! // Feed commands from whatever input source the frontend maps.
//! let event = session.apply(Command::MoveEast);
//! assert!(matches!(event, SessionEvent::Moved | SessionEvent::Blocked));
//!
//! // Frontends query the grid and player to draw.
//! let walls = session.grid().walls_at(0, 0).unwrap();
//! let _ = (walls, session.player(), session.grid().goal());
//! ```
//!
//! ## Modules
//!
//! - [`grid`]: cells, wall bitmasks, and the bounds-checked grid
//! - [`generate`]: the depth-first backtracker
//! - [`navigate`]: single-step move validation and goal detection
//! - [`session`]: the Playing/Won command loop that frontends drive
//! - [`prng`]: seedable randomness injected into generation
//! - [`config`]: maze dimensions and seed

pub mod config;
pub mod generate;
pub mod grid;
pub mod navigate;
pub mod prng;
pub mod session;

/// Prelude module for convenient imports.
///
/// ```
/// use warren::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::MazeConfig;
    pub use crate::generate::carve;
    pub use crate::grid::{Cell, Direction, Grid, GridError, Position};
    pub use crate::navigate::{at_goal, attempt_move, MoveOutcome};
    pub use crate::prng::Prng;
    pub use crate::session::{Command, Phase, Session, SessionEvent, SessionStats};
}
