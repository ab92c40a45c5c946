use std::collections::HashSet;

use log::{debug, info};
use macroquad::prelude::*;

use crate::button::{self, Button, MenuAction};
use crate::constants::{
    GRID_HEIGHT, GRID_WIDTH, MAX_APPLES, SNAKE_ONE_COLOR, SNAKE_TWO_COLOR, WINDOW_CAPTION,
};
use crate::food::Food;
use crate::input::InputEvent;
use crate::snake::{Advance, Snake};
use crate::types::{Cell, Direction, GameMode, GameState, Variant};

/// Whether the frame loop should keep going after an event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Player {
    One,
    Two,
}

struct Menus {
    main: Vec<Button>,
    modes: Vec<Button>,
    game_over: Vec<Button>,
}

impl Menus {
    fn for_variant(variant: Variant) -> Self {
        let main = match variant {
            Variant::Classic => vec![
                Button::centered("Play", -40.0, MenuAction::Play),
                Button::centered("Exit", 20.0, MenuAction::Exit),
            ],
            Variant::Arcade => vec![
                Button::centered("1 Player", -70.0, MenuAction::OnePlayer),
                Button::centered("2 Player", -10.0, MenuAction::TwoPlayer),
                Button::centered("Game Modes", 50.0, MenuAction::GameModes),
                Button::centered("Exit", 110.0, MenuAction::Exit),
            ],
        };
        let modes = match variant {
            Variant::Classic => Vec::new(),
            Variant::Arcade => vec![
                Button::centered("Infinite", -100.0, MenuAction::Infinite),
                Button::centered("Extra Apples", -40.0, MenuAction::ExtraApples),
                Button::centered("Back", 20.0, MenuAction::Back),
            ],
        };
        let game_over = vec![Button::centered("Retry", 20.0, MenuAction::Retry)];
        Self { main, modes, game_over }
    }
}

/// Everything the frame loop owns between frames: the screen being shown,
/// the chosen mode and the entities on the board.
pub struct GameContext {
    variant: Variant,
    state: GameState,
    mode: Option<GameMode>,
    pub(crate) snake_one: Snake,
    pub(crate) snake_two: Snake,
    pub(crate) food: Food,
    menus: Menus,
}

impl GameContext {
    pub fn new(variant: Variant) -> Self {
        let snake_one = match variant {
            Variant::Classic => Snake::new(
                SNAKE_ONE_COLOR,
                Cell::new(GRID_WIDTH / 2, GRID_HEIGHT / 2),
                Direction::Right,
            ),
            Variant::Arcade => Snake::new(
                SNAKE_ONE_COLOR,
                Cell::new(GRID_WIDTH / 4, GRID_HEIGHT / 2),
                Direction::Right,
            ),
        };
        let snake_two = Snake::new(
            SNAKE_TWO_COLOR,
            Cell::new(3 * GRID_WIDTH / 4, GRID_HEIGHT / 2),
            Direction::Left,
        );
        Self {
            variant,
            state: GameState::Menu,
            mode: None,
            snake_one,
            snake_two,
            food: Food::new(),
            menus: Menus::for_variant(variant),
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    pub fn snake_one(&self) -> &Snake {
        &self.snake_one
    }

    pub fn snake_two(&self) -> &Snake {
        &self.snake_two
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    /// Buttons live only on the screen they belong to.
    pub fn buttons(&self) -> &[Button] {
        match self.state {
            GameState::Menu => &self.menus.main,
            GameState::ModeSelect => &self.menus.modes,
            GameState::GameOver => &self.menus.game_over,
            GameState::Playing => &[],
        }
    }

    pub fn caption(&self) -> String {
        match (self.state, self.mode) {
            (GameState::Playing | GameState::GameOver, Some(mode)) => {
                format!("{WINDOW_CAPTION} - {}", mode.label())
            }
            _ => WINDOW_CAPTION.to_owned(),
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> Flow {
        if *event == InputEvent::Quit {
            info!("[Game] Quit requested");
            return Flow::Quit;
        }

        match self.state {
            GameState::Playing => {
                if let InputEvent::KeyDown(key) = *event {
                    self.steer(key);
                }
                Flow::Continue
            }
            GameState::Menu | GameState::ModeSelect | GameState::GameOver => {
                match button::clicked(self.buttons(), event) {
                    Some(action) => self.apply(action),
                    None => Flow::Continue,
                }
            }
        }
    }

    fn apply(&mut self, action: MenuAction) -> Flow {
        match action {
            MenuAction::Play | MenuAction::OnePlayer => self.enter_playing(GameMode::Single),
            MenuAction::TwoPlayer => self.enter_playing(GameMode::TwoPlayer),
            MenuAction::Infinite => self.enter_playing(GameMode::Infinite),
            MenuAction::ExtraApples => self.enter_playing(GameMode::ExtraApples),
            MenuAction::GameModes => self.set_state(GameState::ModeSelect),
            MenuAction::Back => self.set_state(GameState::Menu),
            MenuAction::Retry => {
                if let Some(mode) = self.mode {
                    self.enter_playing(mode);
                }
            }
            MenuAction::Exit => {
                info!("[Game] Exit selected");
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    fn steer(&mut self, key: KeyCode) {
        let two_player = self.mode.is_some_and(GameMode::has_second_snake);
        let (player, direction) = match (self.variant, key) {
            (Variant::Classic, KeyCode::Up) => (Player::One, Direction::Up),
            (Variant::Classic, KeyCode::Down) => (Player::One, Direction::Down),
            (Variant::Classic, KeyCode::Left) => (Player::One, Direction::Left),
            (Variant::Classic, KeyCode::Right) => (Player::One, Direction::Right),
            (Variant::Arcade, KeyCode::W) => (Player::One, Direction::Up),
            (Variant::Arcade, KeyCode::S) => (Player::One, Direction::Down),
            (Variant::Arcade, KeyCode::A) => (Player::One, Direction::Left),
            (Variant::Arcade, KeyCode::D) => (Player::One, Direction::Right),
            (Variant::Arcade, KeyCode::Up) if two_player => (Player::Two, Direction::Up),
            (Variant::Arcade, KeyCode::Down) if two_player => (Player::Two, Direction::Down),
            (Variant::Arcade, KeyCode::Left) if two_player => (Player::Two, Direction::Left),
            (Variant::Arcade, KeyCode::Right) if two_player => (Player::Two, Direction::Right),
            _ => return,
        };
        if !self.snake_mut(player).steer(direction) {
            debug!("[Game] {player:?} cannot reverse into {direction:?}");
        }
    }

    fn set_state(&mut self, state: GameState) {
        if self.state != state {
            info!("[Game] {:?} -> {:?}", self.state, state);
        }
        self.state = state;
    }

    /// Starts a fresh round: both snakes back at their marks, food reseeded.
    pub fn enter_playing(&mut self, mode: GameMode) {
        info!("[Game] Starting {} round", mode.label());
        self.set_state(GameState::Playing);
        self.mode = Some(mode);
        self.snake_one.reset();
        self.snake_two.reset();
        self.food.clear();
        let seed_count = if mode == GameMode::ExtraApples { MAX_APPLES } else { 1 };
        let occupied = self.occupied();
        self.food.seed(seed_count, &occupied);
    }

    /// One simulation step. Does nothing outside of play.
    pub fn tick(&mut self) {
        let Some(mode) = self.mode else { return };
        if self.state != GameState::Playing {
            return;
        }

        let two_player = mode.has_second_snake();
        let rival = if two_player { self.snake_two.occupied() } else { HashSet::new() };
        if let Advance::Dead(why) = self.snake_one.advance(&rival, mode.wraps()) {
            // A wrapping snake never dies, so this guard only mirrors the rule.
            if !mode.wraps() {
                info!("[Game] Player one died: {why:?}");
                self.set_state(GameState::GameOver);
            }
        }
        if two_player {
            let rival = self.snake_one.occupied();
            if let Advance::Dead(why) = self.snake_two.advance(&rival, false) {
                info!("[Game] Player two died: {why:?}");
                self.set_state(GameState::GameOver);
            }
        }

        self.feed(Player::One, mode);
        if two_player {
            self.feed(Player::Two, mode);
        }
    }

    fn feed(&mut self, player: Player, mode: GameMode) {
        let head = self.snake_mut(player).head();
        if !self.food.take(head) {
            return;
        }
        let snake = self.snake_mut(player);
        snake.eat();
        debug!("[Game] {player:?} ate at {head:?}, score {}", snake.score());

        let refill = match mode {
            GameMode::ExtraApples => self.food.len() < MAX_APPLES,
            GameMode::Single | GameMode::TwoPlayer | GameMode::Infinite => true,
        };
        if refill {
            let occupied = self.occupied();
            self.food.place_one(&occupied);
        }
    }

    /// Cells apples must avoid. The arcade cabinet always has a second
    /// snake on its mark, even while it sits out a one-player round.
    fn occupied(&self) -> HashSet<Cell> {
        let mut cells = self.snake_one.occupied();
        if self.variant == Variant::Arcade {
            cells.extend(self.snake_two.body());
        }
        cells
    }

    fn snake_mut(&mut self, player: Player) -> &mut Snake {
        match player {
            Player::One => &mut self.snake_one,
            Player::Two => &mut self.snake_two,
        }
    }
}
