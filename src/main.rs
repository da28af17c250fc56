use std::io::{stdout, BufWriter};

use crossterm::{cursor, terminal, ExecutableCommand};
use rand::thread_rng;

use term_blaster::config::GameConfig;
use term_blaster::display::TermSurface;
use term_blaster::entities::Grid;
use term_blaster::error::GameError;
use term_blaster::input::TermInput;
use term_blaster::logging;
use term_blaster::score::{commentary, kills_line, DEATH_MESSAGE};
use term_blaster::session::Session;

fn main() -> Result<(), GameError> {
    logging::init();

    let (width, height) = terminal::size()?;
    let grid = Grid::new(width as i32, height as i32)?;
    let mut session = Session::new(GameConfig::default(), grid, thread_rng())?;

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    let mut surface = TermSurface::new(out);
    let result = session.run(&mut surface, &mut TermInput);

    // Always restore the terminal
    let mut out = surface.into_inner();
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    match result {
        Ok(kills) => {
            println!("{}", DEATH_MESSAGE);
            println!("{}", kills_line(kills));
            println!("{}", commentary(kills));
            Ok(())
        }
        // Ctrl-C ends the game without a verdict.
        Err(GameError::Interrupted) => Ok(()),
        Err(e) => Err(e),
    }
}
