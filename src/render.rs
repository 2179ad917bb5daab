use std::io;

use crossterm::style::Color;
use rand::Rng;

use crate::Point;
use crate::game::{GameState, SnakeGame};
use crate::layout::{Button, Layout, CELL_COLUMNS};
use crate::term::TermManager;

const CELL_STR: &str = "██";
const SNAKE_COLOR: Color = Color::Green;
const FOOD_COLOR: Color = Color::Red;
const TEXT_COLOR: Color = Color::White;
const BUTTON_COLOR: Color = Color::Blue;
const BUTTON_HOVER_COLOR: Color = Color::Green;

/// Draws the screen for the current state and flushes it.
///
/// `pointer` is the last known mouse position, used to highlight the
/// button under it.
pub fn draw<R: Rng>(term: &mut TermManager, game: &SnakeGame<R>, pointer: Option<Point>) -> io::Result<()> {
    let layout = &game.context().layout;

    match game.state() {
        GameState::Start => draw_start(term, layout, pointer)?,
        GameState::Playing => draw_field(term, game)?,
        GameState::Paused => {
            draw_field(term, game)?;
            let center = (layout.width / 2, layout.height / 3);
            term.show_message(center, &["PAUSED", "", "Press P to resume"])?;
            draw_button(term, &layout.resume, pointer)?;
        }
        GameState::GameOver => draw_game_over(term, layout, game.score(), pointer)?,
    }

    term.flush()
}

fn draw_start(term: &mut TermManager, layout: &Layout, pointer: Option<Point>) -> io::Result<()> {
    let mid_x = layout.width / 2;

    term.print_centered((mid_x, layout.height / 4), "SNAKE GAME", SNAKE_COLOR)?;
    term.print_centered((mid_x, layout.height / 2), "Use arrow keys or WASD to move", TEXT_COLOR)?;
    term.print_centered((mid_x, layout.height / 2 + 2), "Press P to pause, Q to quit", TEXT_COLOR)?;
    draw_button(term, &layout.start, pointer)
}

fn draw_game_over(term: &mut TermManager, layout: &Layout, score: u32, pointer: Option<Point>) -> io::Result<()> {
    let mid_x = layout.width / 2;

    term.print_centered((mid_x, layout.height / 4), "GAME OVER", FOOD_COLOR)?;
    term.print_centered((mid_x, layout.height / 2), &format!("Score: {}", score), TEXT_COLOR)?;
    draw_button(term, &layout.play_again, pointer)
}

fn draw_field<R: Rng>(term: &mut TermManager, game: &SnakeGame<R>) -> io::Result<()> {
    let ctx = game.context();
    let layout = &ctx.layout;
    let grid = &ctx.grid;

    // Pad so a shorter score never leaves stale digits behind
    term.print_at((1, 0), &format!("Score: {:<8}", game.score()), TEXT_COLOR)?;
    term.draw_borders(layout.field_origin(), layout.width, layout.height - 1)?;

    let blank_row = " ".repeat((grid.width() as usize) * CELL_COLUMNS as usize);
    for y in 0..grid.height() {
        term.print_at(layout.cell_origin((0, y)), &blank_row, TEXT_COLOR)?;
    }

    term.print_at(layout.cell_origin(game.food().position()), CELL_STR, FOOD_COLOR)?;
    for &pos in game.snake().body() {
        term.print_at(layout.cell_origin(pos), CELL_STR, SNAKE_COLOR)?;
    }

    Ok(())
}

fn draw_button(term: &mut TermManager, button: &Button, pointer: Option<Point>) -> io::Result<()> {
    let hovered = pointer.map_or(false, |pos| button.contains(pos));
    term.draw_button(button, if hovered { BUTTON_HOVER_COLOR } else { BUTTON_COLOR })
}
