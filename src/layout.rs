use crate::grid::Grid;
use crate::{Point, TermInt};

/// Terminal columns used to draw one grid cell. Terminal characters are
/// about twice as tall as they are wide, so two columns make a square.
pub const CELL_COLUMNS: TermInt = 2;

/// Largest grid whose surface still has terminal coordinates.
pub const MAX_GRID_WIDTH: u32 = ((TermInt::MAX - 2) / CELL_COLUMNS) as u32;
pub const MAX_GRID_HEIGHT: u32 = (TermInt::MAX - 3) as u32;

const BUTTON_HEIGHT: TermInt = 3;
const BUTTON_WIDTH: TermInt = 20;
const WIDE_BUTTON_WIDTH: TermInt = 24;

/// A clickable rectangle, described by its center and size.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub center: Point,
    pub width: TermInt,
    pub height: TermInt,
}

impl Button {
    pub fn new(label: &'static str, center: Point, width: TermInt, height: TermInt) -> Self {
        Button { label, center, width, height }
    }

    pub fn top_left(&self) -> Point {
        (
            self.center.0.saturating_sub(self.width / 2),
            self.center.1.saturating_sub(self.height / 2),
        )
    }

    /// Left and top edges are inside, right and bottom edges are not.
    pub fn contains(&self, point: Point) -> bool {
        let (left, top) = self.top_left();
        (left..left + self.width).contains(&point.0) && (top..top + self.height).contains(&point.1)
    }
}

/// Where everything goes on the terminal surface.
///
/// The surface is one score row followed by the bordered playing field.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    pub width: TermInt,
    pub height: TermInt,
    pub start: Button,
    pub resume: Button,
    pub play_again: Button,
}

impl Layout {
    pub fn new(grid: &Grid) -> Self {
        let width = grid.width() as TermInt * CELL_COLUMNS + 2;
        let height = grid.height() as TermInt + 3;
        let mid_x = width / 2;
        let at = |num: u32, den: u32| (height as u32 * num / den) as TermInt;

        Layout {
            width,
            height,
            start: Button::new("START", (mid_x, at(3, 4)), BUTTON_WIDTH, BUTTON_HEIGHT),
            resume: Button::new("RESUME", (mid_x, at(2, 3)), BUTTON_WIDTH, BUTTON_HEIGHT),
            play_again: Button::new("PLAY AGAIN", (mid_x, at(3, 4)), WIDE_BUTTON_WIDTH, BUTTON_HEIGHT),
        }
    }

    /// Top left corner of the field border.
    pub fn field_origin(&self) -> Point {
        (0, 1)
    }

    /// Terminal position of the left column of a grid cell.
    pub fn cell_origin(&self, (x, y): (i32, i32)) -> Point {
        let (ox, oy) = self.field_origin();
        (ox + 1 + x as TermInt * CELL_COLUMNS, oy + 1 + y as TermInt)
    }
}
