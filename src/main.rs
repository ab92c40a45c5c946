use log::{info, warn};
use macroquad::prelude::*;

mod button;
mod constants;
mod food;
mod game;
mod input;
mod render;
mod settings;
mod snake;
mod ticker;
mod types;

use constants::{MAX_CATCH_UP_TICKS, SCREEN_HEIGHT, SCREEN_WIDTH, TICK_INTERVAL, WINDOW_CAPTION};
use game::{Flow, GameContext};
use settings::{SETTINGS_PATH, Settings};
use ticker::FixedStep;
use types::GameState;

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_CAPTION.to_owned(),
        window_width: SCREEN_WIDTH,
        window_height: SCREEN_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

fn init_logging(settings: &Settings) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(filter) = &settings.log_filter {
        builder.parse_filters(filter);
    }
    builder.init();
}

async fn run(settings: Settings) {
    // Window close arrives as an input event so the frame can finish first.
    prevent_quit();

    let mut game = GameContext::new(settings.variant);
    let mut step = FixedStep::new(TICK_INTERVAL, MAX_CATCH_UP_TICKS);
    let mut caption = game.caption();
    info!("[Window] {caption} ({:?})", game.variant());

    loop {
        let before = game.state();
        let mut quit = false;
        for event in input::poll_events() {
            if game.handle_event(&event) == Flow::Quit {
                quit = true;
            }
        }
        if game.state() == GameState::Playing && before != GameState::Playing {
            step.reset();
        }

        for _ in 0..step.advance(get_frame_time()) {
            game.tick();
        }

        render::draw(&game, input::pointer());

        let current = game.caption();
        if current != caption {
            info!("[Window] {current}");
            caption = current;
        }

        if quit {
            break;
        }
        next_frame().await;
    }
}

fn main() {
    let loaded = Settings::load(SETTINGS_PATH);
    let settings = loaded.as_ref().cloned().unwrap_or_default();
    init_logging(&settings);
    if let Err(err) = &loaded {
        warn!("[Settings] Falling back to defaults: {err:#}");
    }

    macroquad::Window::from_config(window_conf(), run(settings));
}
