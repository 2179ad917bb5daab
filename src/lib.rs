pub mod app;
pub mod config;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod layout;
pub mod render;
pub mod snake;
pub mod term;

/// Terminal coordinate unit.
pub type TermInt = u16;
/// A point on the terminal surface, (column, row).
pub type Point = (TermInt, TermInt);
/// A grid cell, (column, row).
pub type Coords = (i32, i32);
