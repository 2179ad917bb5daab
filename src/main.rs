use std::{fs::File, io};

use anyhow::{Context as _, Result};
use clap::Parser;
use log::{error, info};
use rand::{SeedableRng, rngs::StdRng};
use simplelog::{Config, WriteLogger};

use snake_arcade::app;
use snake_arcade::config::{Context, Settings};
use snake_arcade::game::SnakeGame;
use snake_arcade::term::TermManager;

fn main() -> Result<()> {
    let settings = Settings::parse();

    // The screen belongs to the game, so logs go to a file
    let log_file = File::create(&settings.log_file)
        .with_context(|| format!("creating log file {}", settings.log_file.display()))?;
    WriteLogger::init(settings.log_level, Config::default(), log_file)
        .context("initializing logger")?;

    info!("Starting snake with {:?}", settings);

    let ctx = Context::from_settings(&settings)?;
    let rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut term = TermManager::new().context("reading terminal size")?;
    ctx.ensure_fits(term.get_terminal_size())?;

    if let Err(err) = term.setup() {
        let _ = term.restore();
        return Err(err).context("setting up the terminal");
    }

    let mut game = SnakeGame::new(&ctx, rng);
    let res = app::run(&mut term, &mut game);
    let restored = term.restore();
    finish(res, restored)?;

    info!("Bye");
    Ok(())
}

/// Reports how the run ended once the terminal is back. A game loop error
/// wins over a failed restore; both get logged.
fn finish(res: io::Result<()>, restored: io::Result<()>) -> Result<()> {
    if let Err(err) = &res {
        error!("Game loop failed: {}", err);
    }
    if let Err(err) = &restored {
        error!("Restoring the terminal failed: {}", err);
    }

    res.context("running the game")?;
    restored.context("restoring the terminal")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn broken(msg: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Other, msg.to_string()))
    }

    #[test]
    fn game_loop_error_survives_a_failed_restore() {
        let err = finish(broken("read failed"), broken("tty gone")).unwrap_err();
        assert_eq!(err.to_string(), "running the game");
        assert_eq!(err.root_cause().to_string(), "read failed");
    }

    #[test]
    fn restore_error_alone_is_reported() {
        let err = finish(Ok(()), broken("tty gone")).unwrap_err();
        assert_eq!(err.to_string(), "restoring the terminal");
        assert_eq!(err.root_cause().to_string(), "tty gone");
    }

    #[test]
    fn clean_run_finishes_ok() {
        assert!(finish(Ok(()), Ok(())).is_ok());
    }
}
