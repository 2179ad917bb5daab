use crate::Coords;
use crate::snake::Direction;

/// Fixed-size torus of cells. Moving off one edge re-enters on the
/// opposite edge; there are no walls.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        debug_assert!(width > 0 && height > 0);
        Grid { width, height }
    }

    /// Grid covering a window of the given size, one cell per `cell_size` square.
    pub fn from_window(window_width: u32, window_height: u32, cell_size: u32) -> Self {
        Grid::new((window_width / cell_size) as i32, (window_height / cell_size) as i32)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn center(&self) -> Coords {
        (self.width / 2, self.height / 2)
    }

    pub fn contains(&self, pos: Coords) -> bool {
        (0..self.width).contains(&pos.0) && (0..self.height).contains(&pos.1)
    }

    /// The neighbour of `pos` in `direction`, wrapping around the edges.
    pub fn step(&self, pos: Coords, direction: Direction) -> Coords {
        let (dx, dy) = direction.delta();
        self.wrap((pos.0 + dx, pos.1 + dy))
    }

    pub fn wrap(&self, pos: Coords) -> Coords {
        (pos.0.rem_euclid(self.width), pos.1.rem_euclid(self.height))
    }
}
