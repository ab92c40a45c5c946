use macroquad::prelude::*;

use crate::constants::{SCORE_FONT_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH, TEXT_COLOR, TITLE_FONT_SIZE};
use crate::game::GameContext;
use crate::types::{GameMode, GameState, Variant};

fn draw_centered(text: &str, center_y: f32, size: f32) {
    let m = measure_text(text, None, size as u16, 1.0);
    let x = (SCREEN_WIDTH as f32 - m.width) * 0.5;
    draw_text(text, x, center_y + m.offset_y * 0.5, size, TEXT_COLOR);
}

// Positions are top-left like the HUD layout; macroquad wants a baseline.
fn draw_line_at(text: &str, x: f32, top: f32) {
    draw_text(text, x, top + SCORE_FONT_SIZE, SCORE_FONT_SIZE, TEXT_COLOR);
}

fn score_lines(game: &GameContext) -> Vec<String> {
    let one = game.snake_one().score();
    match game.mode() {
        Some(GameMode::TwoPlayer) => vec![
            format!("P1 Score: {one}"),
            format!("P2 Score: {}", game.snake_two().score()),
        ],
        Some(_) => vec![format!("Score: {one}")],
        None => Vec::new(),
    }
}

fn draw_buttons(game: &GameContext, pointer: Vec2) {
    for button in game.buttons() {
        button.draw(pointer);
    }
}

pub fn draw(game: &GameContext, pointer: Vec2) {
    clear_background(BLACK);
    let sh = SCREEN_HEIGHT as f32;
    let classic = game.variant() == Variant::Classic;

    match game.state() {
        GameState::Menu => {
            let title_y = if classic { sh / 4.0 } else { sh / 6.0 };
            draw_centered("Snake", title_y, TITLE_FONT_SIZE);
            draw_buttons(game, pointer);
        }
        GameState::ModeSelect => {
            draw_centered("Game Modes", sh / 4.0, TITLE_FONT_SIZE);
            draw_buttons(game, pointer);
        }
        GameState::Playing => {
            game.snake_one().draw();
            if game.mode() == Some(GameMode::TwoPlayer) {
                game.snake_two().draw();
            }
            game.food().draw();
            if !classic {
                for (i, line) in score_lines(game).iter().enumerate() {
                    draw_line_at(line, 10.0, 10.0 + 30.0 * i as f32);
                }
            }
        }
        GameState::GameOver => {
            draw_centered("Game Over", sh / 4.0, TITLE_FONT_SIZE);
            if !classic {
                let x = SCREEN_WIDTH as f32 / 2.0 - 50.0;
                for (i, line) in score_lines(game).iter().enumerate() {
                    draw_line_at(line, x, sh / 2.0 - 40.0 + 30.0 * i as f32);
                }
            }
            draw_buttons(game, pointer);
        }
    }
}
