use rand::Rng;

use crate::Coords;
use crate::grid::Grid;

/// A single piece of food.
///
/// Placement is uniform over the whole grid and does not avoid the snake,
/// so food can show up under the body.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Food {
    position: Coords,
}

impl Food {
    pub fn new<R: Rng>(grid: &Grid, rng: &mut R) -> Self {
        let mut food = Food::at((0, 0));
        food.randomize(grid, rng);
        food
    }

    pub fn at(position: Coords) -> Self {
        Food { position }
    }

    pub fn position(&self) -> Coords {
        self.position
    }

    pub fn randomize<R: Rng>(&mut self, grid: &Grid, rng: &mut R) -> Coords {
        self.position = (rng.gen_range(0..grid.width()), rng.gen_range(0..grid.height()));
        self.position
    }
}
