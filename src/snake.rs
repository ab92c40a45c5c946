use std::collections::{HashSet, VecDeque};

use macroquad::prelude::*;

use crate::types::{Cell, Direction};

/// Why a snake stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    OwnBody,
    Opponent,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Advance {
    Alive,
    Dead(Collision),
}

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
    /// Direction of the last completed move; the neck lies opposite to it.
    direction: Direction,
    next_direction: Direction,
    length: usize,
    score: u32,
    start: Cell,
    start_direction: Direction,
    pub color: Color,
}

impl Snake {
    pub fn new(color: Color, start: Cell, start_direction: Direction) -> Self {
        let mut snake = Self {
            body: VecDeque::new(),
            direction: start_direction,
            next_direction: start_direction,
            length: 1,
            score: 0,
            start,
            start_direction,
            color,
        };
        snake.reset();
        snake
    }

    pub fn reset(&mut self) {
        self.body.clear();
        self.body.push_front(self.start);
        self.direction = self.start_direction;
        self.next_direction = self.start_direction;
        self.length = 1;
        self.score = 0;
    }

    pub fn head(&self) -> Cell {
        // The body is never empty: reset seeds it and advance only pops past the new head.
        self.body.front().copied().unwrap_or(self.start)
    }

    pub fn body(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn occupied(&self) -> HashSet<Cell> {
        self.body.iter().copied().collect()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[cfg(test)]
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    #[cfg(test)]
    pub fn direction(&self) -> Direction {
        self.next_direction
    }

    /// Requests a new heading for the next move. Reversing onto the neck is
    /// refused; anything else replaces the pending heading.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if direction == self.direction.opposite() {
            return false;
        }
        self.next_direction = direction;
        true
    }

    /// Counts a meal: one more point, one more cell kept on later moves.
    pub fn eat(&mut self) {
        self.length += 1;
        self.score += 1;
    }

    pub fn advance(&mut self, other_occupied: &HashSet<Cell>, wrap: bool) -> Advance {
        self.direction = self.next_direction;
        let mut candidate = self.head().step(self.direction);

        if wrap {
            candidate = candidate.wrapped();
        } else {
            if !candidate.in_bounds() {
                return Advance::Dead(Collision::Wall);
            }
            // Head and neck are skipped; only a reversal could reach them.
            if self.body.iter().skip(2).any(|c| *c == candidate) {
                return Advance::Dead(Collision::OwnBody);
            }
            if other_occupied.contains(&candidate) {
                return Advance::Dead(Collision::Opponent);
            }
        }

        self.body.push_front(candidate);
        if self.body.len() > self.length {
            self.body.pop_back();
        }
        Advance::Alive
    }

    pub fn draw(&self) {
        for cell in &self.body {
            let r = cell.to_rect();
            draw_rectangle(r.x, r.y, r.w, r.h, self.color);
        }
    }

    #[cfg(test)]
    pub(crate) fn with_body(body: &[Cell], direction: Direction) -> Self {
        let mut snake = Self::new(GREEN, body[0], direction);
        snake.body = body.iter().copied().collect();
        snake.length = body.len();
        snake
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{GRID_HEIGHT, GRID_WIDTH};

    fn nothing() -> HashSet<Cell> {
        HashSet::new()
    }

    #[test]
    fn fresh_snake_is_one_cell_at_start() {
        let snake = Snake::new(GREEN, Cell::new(7, 10), Direction::Right);
        assert_eq!(snake.head(), Cell::new(7, 10));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.length(), 1);
        assert_eq!(snake.score(), 0);
    }

    #[test]
    fn moving_next_to_own_tail_is_not_a_collision() {
        let mut snake = Snake::with_body(
            &[Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)],
            Direction::Right,
        );
        assert_eq!(snake.advance(&nothing(), false), Advance::Alive);
        assert_eq!(snake.head(), Cell::new(6, 5));
        let body: Vec<Cell> = snake.body().collect();
        assert_eq!(body, vec![Cell::new(6, 5), Cell::new(5, 5), Cell::new(4, 5)]);
    }

    #[test]
    fn running_into_own_body_kills() {
        // A hook shape: head at (5,5) heading down into (5,6), which is body index 3.
        let mut snake = Snake::with_body(
            &[
                Cell::new(5, 5),
                Cell::new(6, 5),
                Cell::new(6, 6),
                Cell::new(5, 6),
                Cell::new(4, 6),
            ],
            Direction::Left,
        );
        assert!(snake.steer(Direction::Down));
        assert_eq!(snake.advance(&nothing(), false), Advance::Dead(Collision::OwnBody));
        assert_eq!(snake.head(), Cell::new(5, 5));
        assert_eq!(snake.len(), 5);
    }

    #[test]
    fn leaving_the_grid_kills_without_wrap() {
        let mut snake = Snake::new(GREEN, Cell::new(GRID_WIDTH - 1, 5), Direction::Right);
        assert_eq!(snake.advance(&nothing(), false), Advance::Dead(Collision::Wall));

        let mut snake = Snake::new(GREEN, Cell::new(3, 0), Direction::Up);
        assert_eq!(snake.advance(&nothing(), false), Advance::Dead(Collision::Wall));
    }

    #[test]
    fn entering_opponent_cells_kills() {
        let mut snake = Snake::new(GREEN, Cell::new(3, 3), Direction::Right);
        let other: HashSet<Cell> = [Cell::new(4, 3)].into_iter().collect();
        assert_eq!(snake.advance(&other, false), Advance::Dead(Collision::Opponent));
    }

    #[test]
    fn wrap_mode_reenters_opposite_edge_whatever_is_there() {
        let mut snake = Snake::new(GREEN, Cell::new(GRID_WIDTH - 1, 5), Direction::Right);
        let other: HashSet<Cell> = [Cell::new(0, 5)].into_iter().collect();
        assert_eq!(snake.advance(&other, true), Advance::Alive);
        assert_eq!(snake.head(), Cell::new(0, 5));

        let mut snake = Snake::new(GREEN, Cell::new(4, 0), Direction::Up);
        assert_eq!(snake.advance(&nothing(), true), Advance::Alive);
        assert_eq!(snake.head(), Cell::new(4, GRID_HEIGHT - 1));
    }

    #[test]
    fn reversal_is_refused_even_after_a_turn_request() {
        let mut snake = Snake::new(GREEN, Cell::new(10, 10), Direction::Right);
        assert!(!snake.steer(Direction::Left));
        assert!(snake.steer(Direction::Up));
        // Still moving right on the board, so left stays forbidden until a move happens.
        assert!(!snake.steer(Direction::Left));
        assert!(snake.steer(Direction::Down));
        assert_eq!(snake.direction(), Direction::Down);

        snake.advance(&nothing(), false);
        assert_eq!(snake.head(), Cell::new(10, 11));
        assert!(!snake.steer(Direction::Up));
        assert!(snake.steer(Direction::Left));
    }

    #[test]
    fn repeated_steering_keeps_latest_accepted() {
        let mut snake = Snake::new(GREEN, Cell::new(10, 10), Direction::Up);
        snake.steer(Direction::Left);
        snake.steer(Direction::Up);
        snake.steer(Direction::Right);
        snake.advance(&nothing(), false);
        assert_eq!(snake.head(), Cell::new(11, 10));
    }

    #[test]
    fn growth_converges_within_as_many_ticks() {
        let mut snake = Snake::new(GREEN, Cell::new(2, 10), Direction::Right);
        let meals = 4;
        for _ in 0..meals {
            snake.eat();
        }
        assert_eq!(snake.length(), meals + 1);
        for _ in 0..meals {
            assert_eq!(snake.advance(&nothing(), false), Advance::Alive);
        }
        assert_eq!(snake.len(), meals + 1);
        snake.advance(&nothing(), false);
        assert_eq!(snake.len(), meals + 1);
        assert_eq!(snake.score(), meals as u32);
    }

    #[test]
    fn body_stays_contiguous() {
        let mut snake = Snake::new(GREEN, Cell::new(5, 5), Direction::Right);
        for turn in [Direction::Down, Direction::Left, Direction::Down, Direction::Right] {
            snake.eat();
            snake.steer(turn);
            assert_eq!(snake.advance(&nothing(), false), Advance::Alive);
        }
        let body: Vec<Cell> = snake.body().collect();
        for pair in body.windows(2) {
            let d = (pair[0].x - pair[1].x).abs() + (pair[0].y - pair[1].y).abs();
            assert_eq!(d, 1);
        }
    }

    #[test]
    fn reset_restores_start() {
        let mut snake = Snake::new(BLUE, Cell::new(22, 10), Direction::Left);
        snake.eat();
        snake.steer(Direction::Up);
        snake.advance(&nothing(), false);
        snake.reset();
        assert_eq!(snake.head(), Cell::new(22, 10));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.score(), 0);
        assert_eq!(snake.direction(), Direction::Left);
    }
}
