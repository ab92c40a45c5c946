use macroquad::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::{GRID_HEIGHT, GRID_WIDTH, TILE_SIZE};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn in_bounds(self) -> bool {
        (0..GRID_WIDTH).contains(&self.x) && (0..GRID_HEIGHT).contains(&self.y)
    }

    /// Reduces the cell onto the torus formed by the grid edges.
    pub fn wrapped(self) -> Self {
        Self {
            x: self.x.rem_euclid(GRID_WIDTH),
            y: self.y.rem_euclid(GRID_HEIGHT),
        }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self { x: self.x + dx, y: self.y + dy }
    }

    pub fn to_rect(self) -> Rect {
        Rect::new(
            (self.x * TILE_SIZE) as f32,
            (self.y * TILE_SIZE) as f32,
            TILE_SIZE as f32,
            TILE_SIZE as f32,
        )
    }

    /// Every cell of the grid, column by column.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..GRID_WIDTH).flat_map(|x| (0..GRID_HEIGHT).map(move |y| Cell { x, y }))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameMode {
    Single,
    TwoPlayer,
    Infinite,
    ExtraApples,
}

impl GameMode {
    pub fn label(self) -> &'static str {
        match self {
            GameMode::Single => "1 Player",
            GameMode::TwoPlayer => "2 Player",
            GameMode::Infinite => "Infinite",
            GameMode::ExtraApples => "Extra Apples",
        }
    }

    pub fn wraps(self) -> bool {
        self == GameMode::Infinite
    }

    pub fn has_second_snake(self) -> bool {
        self == GameMode::TwoPlayer
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Menu,
    ModeSelect,
    Playing,
    GameOver,
}

/// Which of the two arcade cabinets is running.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// One snake on arrow keys, a Play/Exit menu.
    Classic,
    /// Two snakes, mode select with infinite and extra-apples rules.
    #[default]
    Arcade,
}
