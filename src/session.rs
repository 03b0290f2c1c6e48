//! The caller-side game loop: a `Playing`/`Won` state machine fed by the
//! closed command set that frontends map input onto.

use serde::{Deserialize, Serialize};

use crate::config::MazeConfig;
use crate::generate::carve;
use crate::grid::{Direction, Grid, Position};
use crate::navigate::{at_goal, attempt_move};
use crate::prng::Prng;

// Reseed step between mazes. Odd, so consecutive seeds never collide.
const RESEED_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

/// Everything a frontend can ask the core to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    MoveNorth,
    MoveEast,
    MoveSouth,
    MoveWest,
    Regenerate,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Won,
}

/// What a command did. Frontends use this to decide what to redraw and
/// log; none of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Moved,
    Blocked,
    Won,
    /// Movement command received while already won.
    Ignored,
    Regenerated,
    /// Echoed back to the caller; the core never exits anything itself.
    Quit,
}

impl SessionEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionEvent::Moved => "moved",
            SessionEvent::Blocked => "blocked",
            SessionEvent::Won => "won",
            SessionEvent::Ignored => "ignored",
            SessionEvent::Regenerated => "regenerated",
            SessionEvent::Quit => "quit",
        }
    }
}

/// Running counters for the HUD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub steps: u32,
    pub bumps: u32,
    pub wins: u32,
    pub mazes: u32,
}

/// One maze plus the agent walking it.
///
/// Regeneration runs to completion inside [`Session::apply`], so a
/// command never observes a half-carved grid.
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    player: Position,
    phase: Phase,
    seed: u64,
    stats: SessionStats,
}

impl Session {
    pub fn new(config: MazeConfig) -> Self {
        let mut session = Self {
            grid: Grid::new(config.width, config.height),
            player: Position::ORIGIN,
            phase: Phase::Playing,
            seed: config.seed,
            stats: SessionStats::default(),
        };
        session.carve_current();
        session
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn apply(&mut self, command: Command) -> SessionEvent {
        let dir = match command {
            Command::Quit => return SessionEvent::Quit,
            Command::Regenerate => {
                self.regenerate();
                return SessionEvent::Regenerated;
            }
            Command::MoveNorth => Direction::North,
            Command::MoveEast => Direction::East,
            Command::MoveSouth => Direction::South,
            Command::MoveWest => Direction::West,
        };

        // Movement is suppressed after winning; only Regenerate restarts.
        if self.phase == Phase::Won {
            return SessionEvent::Ignored;
        }

        let outcome = attempt_move(&self.grid, self.player, dir);
        if !outcome.moved {
            self.stats.bumps += 1;
            return SessionEvent::Blocked;
        }

        self.player = outcome.position;
        self.stats.steps += 1;

        if at_goal(&self.grid, self.player) {
            self.phase = Phase::Won;
            self.stats.wins += 1;
            return SessionEvent::Won;
        }
        SessionEvent::Moved
    }

    /// Carve a fresh maze under a new seed and put the agent back at the
    /// start cell.
    pub fn regenerate(&mut self) {
        self.seed = self.seed.wrapping_add(RESEED_STEP);
        self.carve_current();
        self.player = Position::ORIGIN;
        self.phase = Phase::Playing;
    }

    fn carve_current(&mut self) {
        let mut rng = Prng::new(self.seed);
        carve(&mut self.grid, Position::ORIGIN, &mut rng);
        self.stats.mazes += 1;
    }
}
