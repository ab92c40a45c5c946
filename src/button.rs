use macroquad::prelude::*;

use crate::constants::{
    BUTTON_COLOR, BUTTON_FONT_SIZE, BUTTON_HEIGHT, BUTTON_HOVER_COLOR, BUTTON_TEXT_COLOR,
    BUTTON_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::input::InputEvent;

/// What pressing a button asks the game to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Play,
    OnePlayer,
    TwoPlayer,
    GameModes,
    Infinite,
    ExtraApples,
    Back,
    Retry,
    Exit,
}

#[derive(Clone, Debug)]
pub struct Button {
    pub label: &'static str,
    pub rect: Rect,
    pub color: Color,
    pub hover_color: Color,
    pub text_color: Color,
    pub action: MenuAction,
}

impl Button {
    pub fn new(label: &'static str, rect: Rect, action: MenuAction) -> Self {
        Self {
            label,
            rect,
            color: BUTTON_COLOR,
            hover_color: BUTTON_HOVER_COLOR,
            text_color: BUTTON_TEXT_COLOR,
            action,
        }
    }

    /// A standard-size button centred horizontally, `dy` pixels below mid-screen.
    pub fn centered(label: &'static str, dy: f32, action: MenuAction) -> Self {
        let x = SCREEN_WIDTH as f32 * 0.5 - BUTTON_WIDTH * 0.5;
        let y = SCREEN_HEIGHT as f32 * 0.5 + dy;
        Self::new(label, Rect::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT), action)
    }

    pub fn hit_test(&self, point: Vec2) -> bool {
        self.rect.contains(point)
    }

    /// Only a primary-button press inside the rectangle counts.
    pub fn is_clicked(&self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::PointerDown { button: MouseButton::Left, pos } => self.hit_test(pos),
            _ => false,
        }
    }

    pub fn draw(&self, pointer: Vec2) {
        let fill = if self.hit_test(pointer) { self.hover_color } else { self.color };
        draw_rectangle(self.rect.x, self.rect.y, self.rect.w, self.rect.h, fill);

        let m = measure_text(self.label, None, BUTTON_FONT_SIZE as u16, 1.0);
        let center = self.rect.center();
        draw_text(
            self.label,
            center.x - m.width * 0.5,
            center.y + m.offset_y * 0.5,
            BUTTON_FONT_SIZE,
            self.text_color,
        );
    }
}

/// Returns the action of the button under a click, if any.
pub fn clicked(buttons: &[Button], event: &InputEvent) -> Option<MenuAction> {
    buttons.iter().find(|b| b.is_clicked(event)).map(|b| b.action)
}
