use std::collections::VecDeque;

use crate::Coords;
use crate::grid::Grid;
use Direction::*;
use MoveResult::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub const ALL: [Direction; 4] = [Up, Down, Left, Right];

    /// Unit vector, with rows growing downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveResult {
    Moved { new_head: Coords, old_tail: Option<Coords> },
    Crashed
}

/// The snake body is stored head first.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Coords>,
    direction: Direction,
    target_length: usize,
}

impl Snake {
    /// Builds a straight snake of `length` cells whose head is at `head`,
    /// trailing behind it opposite to `direction`.
    ///
    /// `length` is capped at the size of the row or column the body lies
    /// on, since a longer straight body would wrap onto itself.
    pub fn new(grid: &Grid, head: Coords, length: usize, direction: Direction) -> Self {
        let span = match direction {
            Left | Right => grid.width(),
            Up | Down => grid.height(),
        };
        let length = length.clamp(1, span as usize);
        let back = direction.opposite();

        let mut body = VecDeque::with_capacity(length);
        let mut pos = grid.wrap(head);
        body.push_back(pos);
        for _ in 1..length {
            pos = grid.step(pos, back);
            body.push_back(pos);
        }

        Snake { body, direction, target_length: length }
    }

    pub fn head(&self) -> Coords {
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Coords> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    /// Moves one cell forward on `grid`.
    ///
    /// The cell right behind the head is never lethal since a forward step
    /// always vacates it; every cell from index 2 onwards is, including the
    /// tail that would be dropped this same move.
    pub fn advance(&mut self, grid: &Grid) -> MoveResult {
        let new_head = grid.step(self.head(), self.direction);

        if self.body.iter().skip(2).any(|&pos| pos == new_head) {
            return Crashed;
        }

        self.body.push_front(new_head);

        let old_tail = if self.body.len() > self.target_length {
            self.body.pop_back()
        } else {
            None
        };

        Moved { new_head, old_tail }
    }

    /// Turns the snake, unless `new_direction` would reverse it onto itself.
    /// Returns whether the turn was accepted.
    pub fn set_direction(&mut self, new_direction: Direction) -> bool {
        if new_direction == self.direction.opposite() {
            return false;
        }
        self.direction = new_direction;
        true
    }

    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    pub fn reset(&mut self, grid: &Grid) {
        *self = Snake::new(grid, grid.center(), 1, Right);
    }
}
