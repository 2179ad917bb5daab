use std::{io, time::Instant};

use crossterm::event::Event;
use log::debug;
use rand::Rng;

use crate::Point;
use crate::game::{Control, GameState, SnakeGame, TickOutcome};
use crate::input::{translate, Input};
use crate::render;
use crate::term::TermManager;

/// Runs the game until a quit is requested.
///
/// Every screen shares this one loop. While playing it waits for input at
/// most until the next tick is due; on the other screens it blocks until
/// something happens.
pub fn run<R: Rng>(term: &mut TermManager, game: &mut SnakeGame<R>) -> io::Result<()> {
    let tick_interval = game.context().tick_interval;
    let mut next_tick = Instant::now() + tick_interval;
    let mut pointer: Option<Point> = None;
    let mut drawn_state: Option<GameState> = None;
    let mut dirty = true;

    loop {
        if dirty {
            if drawn_state != Some(game.state()) {
                term.clear()?;
                drawn_state = Some(game.state());
            }
            render::draw(term, game, pointer)?;
            dirty = false;
        }

        let timeout = match game.state() {
            GameState::Playing => Some(next_tick.saturating_duration_since(Instant::now())),
            _ => None,
        };

        if let Some(event) = term.next_event(timeout)? {
            if let Event::Resize(..) = event {
                drawn_state = None;
                dirty = true;
            }

            for input in translate(&event, term.reports_release()) {
                if let Input::Pointer(pos) | Input::Click(pos) = input {
                    pointer = Some(pos);
                    dirty |= game.state() != GameState::Playing;
                }

                let before = game.state();
                if game.handle(input) == Control::Quit {
                    return Ok(());
                }

                if game.state() != before {
                    dirty = true;
                    if game.state() == GameState::Playing {
                        next_tick = Instant::now() + tick_interval;
                    }
                }
            }
        }

        if game.state() == GameState::Playing && Instant::now() >= next_tick {
            if game.tick() == TickOutcome::Ate {
                debug!("Snake length now {}", game.snake().target_length());
            }
            next_tick = Instant::now() + tick_interval;
            dirty = true;
        }
    }
}
