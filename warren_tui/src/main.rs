//! Terminal frontend for the `warren` maze core.
//!
//! Walk the red block to the green goal. Controls: arrow keys or WASD to
//! move, `r` for a fresh maze, `q` or Esc to quit.
//!
//! Config is read from `<config_dir>/warren/config.json` when present;
//! `WARREN_SEED` pins the layout for a session. Logs go to stderr so the
//! alternate screen stays clean (redirect with `2>warren.log`).

use std::io::{self, Stdout};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use tracing::info;

use warren::session::{Session, SessionEvent};

mod input;
mod paths;
mod render;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .init();

    let config = paths::load_config();
    info!(
        width = config.width,
        height = config.height,
        seed = config.seed,
        "starting session"
    );
    let mut session = Session::new(config);

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let result = run(&mut stdout, &mut session);

    stdout.execute(Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    result.map_err(Into::into)
}

fn run(stdout: &mut Stdout, session: &mut Session) -> io::Result<()> {
    let mut screen = render::Screen::new();
    screen.draw(stdout, session)?;

    // Nothing animates between inputs, so a blocking read is all the
    // event loop we need.
    loop {
        match event::read()? {
            Event::Key(key) => {
                if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    continue;
                }
                let Some(command) = input::map_key(key.code) else {
                    continue;
                };
                match session.apply(command) {
                    SessionEvent::Quit => return Ok(()),
                    SessionEvent::Regenerated => {
                        info!(seed = session.seed(), "maze regenerated");
                    }
                    SessionEvent::Won => {
                        info!(steps = session.stats().steps, "goal reached");
                    }
                    SessionEvent::Moved | SessionEvent::Blocked | SessionEvent::Ignored => {}
                }
                screen.draw(stdout, session)?;
            }
            Event::Resize(_, _) => screen.draw(stdout, session)?,
            _ => {}
        }
    }
}
