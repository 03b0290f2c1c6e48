//! Maze drawing.
//!
//! The board is rendered as a `(2W+1) x (2H+1)` lattice: odd/odd chars
//! are cell interiors, even/even chars are corner posts, and the mixed
//! chars are the wall segments queried from the grid. Every lattice char
//! is printed two columns wide to compensate for terminal cell aspect.

use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;

use warren::grid::{Direction, Grid, Position};
use warren::session::{Phase, Session};

const CELL_W: u16 = 2;

pub struct Screen {
    last_size: (u16, u16),
}

impl Screen {
    pub fn new() -> Self {
        Self { last_size: (0, 0) }
    }

    /// Redraw the whole board. The lattice is small and every char gets
    /// rewritten, so no diffing is needed; a full clear only happens when
    /// the terminal size changes.
    pub fn draw(&mut self, stdout: &mut Stdout, session: &Session) -> io::Result<()> {
        let grid = session.grid();
        let lat_w = grid.width() * 2 + 1;
        let lat_h = grid.height() * 2 + 1;
        // Stay in u32 until the fit check passes; a huge configured board
        // must not truncate through the u16 terminal coordinates.
        let needed_w = lat_w * u32::from(CELL_W);
        let needed_h = lat_h + 2;

        let size = terminal::size()?;
        if size != self.last_size {
            self.last_size = size;
            stdout.queue(Clear(ClearType::All))?;
        }

        let (term_w, term_h) = size;
        if u32::from(term_w) < needed_w || u32::from(term_h) < needed_h {
            stdout.queue(MoveTo(0, 0))?;
            stdout.queue(Print(format!(
                "Terminal too small: need {}x{}, have {}x{}.",
                needed_w, needed_h, term_w, term_h
            )))?;
            stdout.flush()?;
            return Ok(());
        }

        let origin_x = (term_w - needed_w as u16) / 2;
        let origin_y = (term_h - needed_h as u16) / 2 + 1;

        let stats = session.stats();
        let hud = match session.phase() {
            Phase::Playing => format!(
                "warren | arrows/wasd move, r new maze, q quit | steps {} mazes {}",
                stats.steps, stats.mazes
            ),
            Phase::Won => format!(
                "You made it in {} steps! Press r for a new maze, q to quit.",
                stats.steps
            ),
        };
        stdout.queue(MoveTo(origin_x, origin_y - 1))?;
        stdout.queue(Clear(ClearType::CurrentLine))?;
        stdout.queue(SetForegroundColor(Color::White))?;
        stdout.queue(Print(&hud))?;

        for ly in 0..lat_h {
            stdout.queue(MoveTo(origin_x, origin_y + ly as u16))?;
            for lx in 0..lat_w {
                let (text, color) = glyph_at(session, lx, ly);
                stdout.queue(SetForegroundColor(color))?;
                stdout.queue(Print(text))?;
            }
        }

        stdout.queue(ResetColor)?;
        stdout.flush()
    }
}

fn glyph_at(session: &Session, lx: u32, ly: u32) -> (&'static str, Color) {
    if lx % 2 == 1 && ly % 2 == 1 {
        let pos = Position::new((lx - 1) / 2, (ly - 1) / 2);
        if pos == session.player() {
            return ("██", Color::Red);
        }
        if pos == session.grid().goal() {
            return ("██", Color::Green);
        }
        return ("  ", Color::Reset);
    }
    if lattice_is_wall(session.grid(), lx, ly) {
        ("██", Color::White)
    } else {
        ("  ", Color::Reset)
    }
}

/// Whether the lattice char at `(lx, ly)` sits on a sealed edge or a
/// corner post. Wall symmetry means either adjacent cell answers for a
/// shared edge; border edges fall back to the outermost cell's outward
/// side.
fn lattice_is_wall(grid: &Grid, lx: u32, ly: u32) -> bool {
    // Treat any out-of-range lookup as a wall rather than unwrapping.
    let sealed = |x: u32, y: u32, dir: Direction| {
        grid.walls_at(x, y).map(|c| c.has_wall(dir)).unwrap_or(true)
    };

    match (lx % 2 == 1, ly % 2 == 1) {
        // Cell interior: never a wall.
        (true, true) => false,
        // Corner post.
        (false, false) => true,
        // Horizontal edge between cell rows.
        (true, false) => {
            let x = (lx - 1) / 2;
            let y = ly / 2;
            if y < grid.height() {
                sealed(x, y, Direction::North)
            } else {
                sealed(x, grid.height() - 1, Direction::South)
            }
        }
        // Vertical edge between cell columns.
        (false, true) => {
            let x = lx / 2;
            let y = (ly - 1) / 2;
            if x < grid.width() {
                sealed(x, y, Direction::West)
            } else {
                sealed(grid.width() - 1, y, Direction::East)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lattice_borders_are_always_walls() {
        let grid = Grid::new(2, 1);
        let lat_w = grid.width() * 2 + 1;
        let lat_h = grid.height() * 2 + 1;
        for lx in 0..lat_w {
            assert!(lattice_is_wall(&grid, lx, 0));
            assert!(lattice_is_wall(&grid, lx, lat_h - 1));
        }
        for ly in 0..lat_h {
            assert!(lattice_is_wall(&grid, 0, ly));
            assert!(lattice_is_wall(&grid, lat_w - 1, ly));
        }
    }

    #[test]
    fn carved_edge_shows_as_open() {
        let mut grid = Grid::new(2, 1);
        // Sealed edge between the two cells sits at lattice (2, 1).
        assert!(lattice_is_wall(&grid, 2, 1));
        grid.open_passage(Position::new(0, 0), Position::new(1, 0));
        assert!(!lattice_is_wall(&grid, 2, 1));
    }

    #[test]
    fn cell_interiors_are_never_walls() {
        let grid = Grid::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                assert!(!lattice_is_wall(&grid, x * 2 + 1, y * 2 + 1));
            }
        }
    }
}
