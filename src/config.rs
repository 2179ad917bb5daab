use std::{path::PathBuf, time::Duration};

use anyhow::{bail, ensure, Result};
use clap::Parser;
use log::LevelFilter;

use crate::grid::Grid;
use crate::Point;
use crate::layout::{Layout, MAX_GRID_HEIGHT, MAX_GRID_WIDTH};

const MIN_GRID_WIDTH: u32 = 13;
const MIN_GRID_HEIGHT: u32 = 8;

/// Command-line settings for the snake game.
#[derive(Clone, Debug, Parser)]
#[command(author, version, about = "Classic snake on a wraparound grid", long_about = None)]
pub struct Settings {
    /// Width of the play area in pixels. Divided by the cell size to get the grid width.
    #[arg(long, value_name = "PIXELS", default_value_t = 800)]
    pub window_width: u32,
    /// Height of the play area in pixels. Divided by the cell size to get the grid height.
    #[arg(long, value_name = "PIXELS", default_value_t = 600)]
    pub window_height: u32,
    /// Side of one grid cell in pixels.
    #[arg(
        long,
        value_name = "PIXELS",
        default_value_t = 20,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub cell_size: u32,
    /// Snake moves per second.
    #[arg(
        long,
        value_name = "TICKS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(1..=60)
    )]
    pub tick_rate: u32,
    /// Seed for food placement. Random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
    /// File the log is written to.
    #[arg(long, value_name = "PATH", default_value = "snake.log")]
    pub log_file: PathBuf,
    /// Minimum level written to the log file.
    #[arg(long, value_name = "LEVEL", default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            window_width: 800,
            window_height: 600,
            cell_size: 20,
            tick_rate: 10,
            seed: None,
            log_file: PathBuf::from("snake.log"),
            log_level: LevelFilter::Info,
        }
    }
}

/// Everything the state machine and the renderer need to know about the
/// game's surroundings. Owned by the run loop and lent out to the rest.
#[derive(Clone, Debug)]
pub struct Context {
    pub grid: Grid,
    pub tick_interval: Duration,
    pub layout: Layout,
}

impl Context {
    pub fn new(grid: Grid, tick_interval: Duration) -> Self {
        Context { grid, tick_interval, layout: Layout::new(&grid) }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        ensure!(settings.cell_size > 0, "cell size must be positive");
        ensure!(settings.tick_rate > 0, "tick rate must be positive");

        let columns = settings.window_width / settings.cell_size;
        let rows = settings.window_height / settings.cell_size;
        ensure!(
            columns >= MIN_GRID_WIDTH && rows >= MIN_GRID_HEIGHT,
            "a {}x{} window with {} pixel cells gives a {}x{} grid, at least {}x{} is needed",
            settings.window_width,
            settings.window_height,
            settings.cell_size,
            columns,
            rows,
            MIN_GRID_WIDTH,
            MIN_GRID_HEIGHT,
        );
        ensure!(
            columns <= MAX_GRID_WIDTH && rows <= MAX_GRID_HEIGHT,
            "a {}x{} grid is too large to draw, at most {}x{} fits in terminal coordinates",
            columns,
            rows,
            MAX_GRID_WIDTH,
            MAX_GRID_HEIGHT,
        );

        let grid = Grid::from_window(settings.window_width, settings.window_height, settings.cell_size);
        let tick_interval = Duration::from_secs(1) / settings.tick_rate;
        Ok(Context::new(grid, tick_interval))
    }

    /// Fails unless the whole surface fits a terminal of `size`.
    pub fn ensure_fits(&self, size: Point) -> Result<()> {
        let (width, height) = size;
        if width < self.layout.width || height < self.layout.height {
            bail!(
                "terminal is {}x{} but a {}x{} grid needs at least {}x{}; \
                 enlarge the terminal or pass a bigger --cell-size (or smaller \
                 --window-width/--window-height) to shrink the grid",
                width,
                height,
                self.grid.width(),
                self.grid.height(),
                self.layout.width,
                self.layout.height
            );
        }
        Ok(())
    }
}
