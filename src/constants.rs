use macroquad::prelude::*;

// Window and grid
pub const SCREEN_WIDTH: i32 = 600;
pub const SCREEN_HEIGHT: i32 = 400;
pub const TILE_SIZE: i32 = 20;
pub const GRID_WIDTH: i32 = SCREEN_WIDTH / TILE_SIZE;
pub const GRID_HEIGHT: i32 = SCREEN_HEIGHT / TILE_SIZE;

// Simulation pace
pub const TICKS_PER_SECOND: f32 = 10.0;
pub const TICK_INTERVAL: f32 = 1.0 / TICKS_PER_SECOND;
pub const MAX_CATCH_UP_TICKS: u32 = 3;

/// Food cells kept on the board in extra-apples mode.
pub const MAX_APPLES: usize = 5;

// Palette
pub const SNAKE_ONE_COLOR: Color = GREEN;
pub const SNAKE_TWO_COLOR: Color = BLUE;
pub const FOOD_COLOR: Color = RED;
pub const BUTTON_COLOR: Color = Color::new(0.39, 0.39, 0.39, 1.0);
pub const BUTTON_HOVER_COLOR: Color = WHITE;
pub const BUTTON_TEXT_COLOR: Color = WHITE;
pub const TEXT_COLOR: Color = WHITE;

// Text sizes
pub const TITLE_FONT_SIZE: f32 = 72.0;
pub const BUTTON_FONT_SIZE: f32 = 36.0;
pub const SCORE_FONT_SIZE: f32 = 24.0;

// Buttons are centred horizontally and stacked by a y offset from mid-screen.
pub const BUTTON_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 50.0;

pub const WINDOW_CAPTION: &str = "Snake Game";
