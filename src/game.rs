use log::{debug, info};
use rand::{Rng, rngs::StdRng};

use crate::config::Context;
use crate::food::Food;
use crate::input::{Input, Key};
use crate::snake::{Direction, MoveResult, Snake};
use GameState::*;

pub const SCORE_PER_FOOD: u32 = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Start,
    Playing,
    Paused,
    GameOver,
}

/// What the run loop should do after an input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing, nothing happened.
    Idle,
    Moved,
    Ate,
    Crashed,
}

/// The game's state machine. Inputs drive the screen transitions and
/// `tick` advances the snake while playing.
pub struct SnakeGame<'a, R = StdRng> {
    ctx: &'a Context,
    rng: R,
    state: GameState,
    snake: Snake,
    food: Food,
    score: u32,
    // Set once the pause key goes down again while paused, so the release
    // of the key that paused the game doesn't resume it straight away.
    resume_armed: bool,
}

impl<'a, R: Rng> SnakeGame<'a, R> {
    /// A fresh game sitting on the start screen.
    pub fn new(ctx: &'a Context, mut rng: R) -> Self {
        let grid = &ctx.grid;
        let snake = Snake::new(grid, grid.center(), 1, Direction::Right);
        let food = Food::new(grid, &mut rng);

        SnakeGame { ctx, rng, state: Start, snake, food, score: 0, resume_armed: false }
    }

    /// A game already being played, with the given snake and food.
    pub fn in_progress(ctx: &'a Context, snake: Snake, food: Food, rng: R) -> Self {
        SnakeGame { ctx, rng, state: Playing, snake, food, score: 0, resume_armed: false }
    }

    pub fn context(&self) -> &'a Context {
        self.ctx
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn handle(&mut self, input: Input) -> Control {
        if input == Input::Quit {
            info!("Quit requested on {:?} with score {}", self.state, self.score);
            return Control::Quit;
        }

        let ctx = self.ctx;
        let layout = &ctx.layout;

        match (self.state, input) {
            (Start, Input::Release(_)) => self.new_game(),
            (Start, Input::Click(pos)) if layout.start.contains(pos) => self.new_game(),

            (Playing, Input::Press(Key::Arrow(dir))) => {
                if !self.snake.set_direction(dir) {
                    debug!("Ignored reversal to {:?}", dir);
                }
            }
            (Playing, Input::Press(Key::Pause)) => {
                self.resume_armed = false;
                self.set_state(Paused);
            }

            (Paused, Input::Press(Key::Pause)) => self.resume_armed = true,
            (Paused, Input::Release(Key::Pause)) if self.resume_armed => self.set_state(Playing),
            (Paused, Input::Click(pos)) if layout.resume.contains(pos) => self.set_state(Playing),

            (GameOver, Input::Release(_)) => self.set_state(Start),
            (GameOver, Input::Click(pos)) if layout.play_again.contains(pos) => self.set_state(Start),

            _ => {}
        }

        Control::Continue
    }

    /// One simulation step. Does nothing unless playing.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != Playing {
            return TickOutcome::Idle;
        }

        let ctx = self.ctx;
        let grid = &ctx.grid;

        match self.snake.advance(grid) {
            MoveResult::Crashed => {
                info!("Snake crashed at {:?}, final score {}", self.snake.head(), self.score);
                self.set_state(GameOver);
                TickOutcome::Crashed
            }
            MoveResult::Moved { new_head, .. } if new_head == self.food.position() => {
                self.snake.grow();
                self.score += SCORE_PER_FOOD;
                let next = self.food.randomize(grid, &mut self.rng);
                debug!("Food eaten at {:?}, score {}, next food at {:?}", new_head, self.score, next);
                TickOutcome::Ate
            }
            MoveResult::Moved { .. } => TickOutcome::Moved,
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn new_game(&mut self) {
        let ctx = self.ctx;
        let grid = &ctx.grid;
        self.snake.reset(grid);
        self.food.randomize(grid, &mut self.rng);
        self.score = 0;
        self.set_state(Playing);
    }

    fn set_state(&mut self, next: GameState) {
        info!("{:?} -> {:?}", self.state, next);
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use rand::SeedableRng;
    use rand::rngs::mock::StepRng;

    use crate::grid::Grid;
    use crate::snake::Direction::*;

    fn ctx() -> Context {
        Context::new(Grid::new(40, 30), Duration::from_millis(100))
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    fn press(dir: Direction) -> Input {
        Input::Press(Key::Arrow(dir))
    }

    #[test]
    fn eating_grows_scores_and_moves_food() {
        let ctx = ctx();
        let snake = Snake::new(&ctx.grid, (5, 5), 1, Right);
        let mut game = SnakeGame::in_progress(&ctx, snake, Food::at((6, 5)), rng());

        assert_eq!(game.tick(), TickOutcome::Ate);
        assert_eq!(game.snake().head(), (6, 5));
        assert_eq!(game.snake().target_length(), 2);
        assert_eq!(game.score(), 10);

        // The food moved to the first cell drawn from the game's rng
        let mut same_rng = rng();
        let drawn = (same_rng.gen_range(0..40), same_rng.gen_range(0..30));
        assert_eq!(game.food().position(), drawn);

        // Body catches up with the new target on the next move
        assert_eq!(game.snake().len(), 1);
        game.tick();
        assert_eq!(game.snake().len(), 2);
    }

    #[test]
    fn eaten_food_is_relocated_elsewhere() {
        let ctx = ctx();
        let snake = Snake::new(&ctx.grid, (5, 5), 1, Right);
        // A constant zero rng puts the next food in the top left corner
        let mut game = SnakeGame::in_progress(&ctx, snake, Food::at((6, 5)), StepRng::new(0, 0));

        assert_eq!(game.tick(), TickOutcome::Ate);
        assert_eq!(game.food().position(), (0, 0));
        assert_ne!(game.food().position(), game.snake().head());
    }

    #[test]
    fn turning_into_the_body_ends_the_game() {
        let ctx = ctx();
        let snake = Snake::new(&ctx.grid, (10, 10), 5, Right);
        let mut game = SnakeGame::in_progress(&ctx, snake, Food::at((0, 0)), rng());

        game.handle(press(Up));
        assert_eq!(game.tick(), TickOutcome::Moved);
        game.handle(press(Left));
        assert_eq!(game.tick(), TickOutcome::Moved);
        game.handle(press(Down));
        assert_eq!(game.tick(), TickOutcome::Crashed);
        assert_eq!(game.state(), GameOver);

        // No more movement once the game is over
        let head = game.snake().head();
        assert_eq!(game.tick(), TickOutcome::Idle);
        assert_eq!(game.snake().head(), head);
    }

    #[test]
    fn reversal_is_ignored() {
        let ctx = ctx();
        let snake = Snake::new(&ctx.grid, (10, 10), 3, Right);
        let mut game = SnakeGame::in_progress(&ctx, snake, Food::at((0, 0)), rng());

        game.handle(press(Left));
        assert_eq!(game.tick(), TickOutcome::Moved);
        assert_eq!(game.snake().head(), (11, 10));
    }

    #[test]
    fn start_needs_a_release_or_a_click_on_start() {
        let ctx = ctx();
        let mut game = SnakeGame::new(&ctx, rng());
        assert_eq!(game.state(), Start);

        game.handle(Input::Press(Key::Other));
        game.handle(Input::Click((0, 0)));
        game.handle(Input::Pointer(ctx.layout.start.center));
        assert_eq!(game.state(), Start);
        assert_eq!(game.tick(), TickOutcome::Idle);

        game.handle(Input::Click(ctx.layout.start.center));
        assert_eq!(game.state(), Playing);

        let mut game = SnakeGame::new(&ctx, rng());
        game.handle(Input::Release(Key::Other));
        assert_eq!(game.state(), Playing);
    }

    #[test]
    fn pause_and_resume_with_the_pause_key() {
        let ctx = ctx();
        let snake = Snake::new(&ctx.grid, (10, 10), 1, Right);
        let mut game = SnakeGame::in_progress(&ctx, snake, Food::at((0, 0)), rng());

        game.handle(Input::Press(Key::Pause));
        assert_eq!(game.state(), Paused);
        assert_eq!(game.tick(), TickOutcome::Idle);

        // Letting go of the key that paused doesn't resume
        game.handle(Input::Release(Key::Pause));
        assert_eq!(game.state(), Paused);

        // Direction keys are ignored while paused
        game.handle(press(Down));
        game.handle(Input::Release(Key::Other));
        assert_eq!(game.state(), Paused);

        game.handle(Input::Press(Key::Pause));
        assert_eq!(game.state(), Paused);
        game.handle(Input::Release(Key::Pause));
        assert_eq!(game.state(), Playing);

        game.tick();
        assert_eq!(game.snake().head(), (11, 10));
    }

    #[test]
    fn resume_button_only_counts_inside() {
        let ctx = ctx();
        let snake = Snake::new(&ctx.grid, (10, 10), 1, Right);
        let mut game = SnakeGame::in_progress(&ctx, snake, Food::at((0, 0)), rng());
        game.handle(Input::Press(Key::Pause));

        let (left, top) = ctx.layout.resume.top_left();
        game.handle(Input::Click((left.saturating_sub(1), top)));
        assert_eq!(game.state(), Paused);

        game.handle(Input::Click((left, top)));
        assert_eq!(game.state(), Playing);
    }

    #[test]
    fn game_over_goes_back_to_start_and_new_game_resets() {
        let ctx = ctx();
        let snake = Snake::new(&ctx.grid, (5, 5), 1, Right);
        let mut game = SnakeGame::in_progress(&ctx, snake, Food::at((6, 5)), rng());
        game.tick();
        assert_eq!(game.score(), 10);

        // Force a crash on a long snake
        game.snake = Snake::new(&ctx.grid, (10, 10), 5, Right);
        game.food = Food::at((0, 0));
        for dir in [Up, Left, Down] {
            game.handle(press(dir));
            game.tick();
        }
        assert_eq!(game.state(), GameOver);
        assert_eq!(game.score(), 10);

        game.handle(Input::Click((0, 0)));
        assert_eq!(game.state(), GameOver);
        game.handle(Input::Click(ctx.layout.play_again.center));
        assert_eq!(game.state(), Start);

        game.handle(Input::Release(Key::Other));
        assert_eq!(game.state(), Playing);
        assert_eq!(game.score(), 0);
        assert_eq!(game.snake().len(), 1);
        assert_eq!(game.snake().head(), ctx.grid.center());
        assert_eq!(game.snake().get_direction(), Right);
        assert_eq!(game.snake().target_length(), 1);
    }

    #[test]
    fn quit_from_every_state() {
        let ctx = ctx();
        let mut game = SnakeGame::new(&ctx, rng());

        for state in [Start, Playing, Paused, GameOver] {
            game.state = state;
            assert_eq!(game.handle(Input::Quit), Control::Quit);
            assert_eq!(game.state(), state);
        }
        assert_eq!(game.handle(Input::Press(Key::Other)), Control::Continue);
    }

    #[test]
    fn score_tracks_food_eaten() {
        let ctx = Context::new(Grid::new(13, 8), Duration::from_millis(100));
        let mut game = SnakeGame::new(&ctx, rng());
        let mut turns = StdRng::seed_from_u64(99);
        game.handle(Input::Release(Key::Other));

        let mut last_score = 0;
        for _ in 0..2000 {
            if game.state() != Playing {
                break;
            }
            if turns.gen_bool(0.3) {
                let dir = Direction::ALL[turns.gen_range(0..4)];
                game.handle(press(dir));
            }

            let outcome = game.tick();
            let gained = game.score() - last_score;
            match outcome {
                TickOutcome::Ate => assert_eq!(gained, SCORE_PER_FOOD),
                _ => assert_eq!(gained, 0),
            }
            last_score = game.score();

            assert_eq!(game.snake().target_length() as u32, 1 + game.score() / SCORE_PER_FOOD);
            assert!(game.snake().len() <= game.snake().target_length());
        }
    }
}
