use std::collections::HashSet;

use log::debug;
use macroquad::prelude::*;

use crate::constants::FOOD_COLOR;
use crate::types::Cell;

/// Apples currently on the board, in placement order.
#[derive(Clone, Debug, Default)]
pub struct Food {
    cells: Vec<Cell>,
}

impl Food {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[cfg(test)]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Removes the apple at `cell`, reporting whether one was there.
    pub fn take(&mut self, cell: Cell) -> bool {
        match self.cells.iter().position(|c| *c == cell) {
            Some(idx) => {
                self.cells.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Drops one apple on a uniformly chosen free cell. A free cell holds no
    /// apple and is not in `occupied`. Returns `None` when the board is full.
    pub fn place_one(&mut self, occupied: &HashSet<Cell>) -> Option<Cell> {
        let free: Vec<Cell> = Cell::all()
            .filter(|c| !occupied.contains(c) && !self.cells.contains(c))
            .collect();
        if free.is_empty() {
            debug!("[Food] No free cell left for an apple");
            return None;
        }
        let cell = free[macroquad::rand::gen_range(0, free.len())];
        self.cells.push(cell);
        Some(cell)
    }

    /// Places up to `count` apples, stopping early if the board fills.
    pub fn seed(&mut self, count: usize, occupied: &HashSet<Cell>) {
        for _ in 0..count {
            if self.place_one(occupied).is_none() {
                break;
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn insert(&mut self, cell: Cell) {
        if !self.cells.contains(&cell) {
            self.cells.push(cell);
        }
    }

    pub fn draw(&self) {
        for cell in &self.cells {
            let r = cell.to_rect();
            draw_rectangle(r.x, r.y, r.w, r.h, FOOD_COLOR);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{GRID_HEIGHT, GRID_WIDTH, MAX_APPLES};

    #[test]
    fn placed_apples_avoid_occupied_and_each_other() {
        for seed in 0..50 {
            macroquad::rand::srand(seed);
            let occupied: HashSet<Cell> = (0..GRID_WIDTH).map(|x| Cell::new(x, 0)).collect();
            let mut food = Food::new();
            food.seed(MAX_APPLES, &occupied);
            assert_eq!(food.len(), MAX_APPLES);
            let unique: HashSet<Cell> = food.cells().iter().copied().collect();
            assert_eq!(unique.len(), MAX_APPLES);
            assert!(food.cells().iter().all(|c| c.in_bounds() && !occupied.contains(c)));
        }
    }

    #[test]
    fn only_free_cell_is_chosen() {
        let free = Cell::new(12, 7);
        let occupied: HashSet<Cell> = Cell::all().filter(|c| *c != free).collect();
        let mut food = Food::new();
        assert_eq!(food.place_one(&occupied), Some(free));
        assert_eq!(food.place_one(&occupied), None);
        assert_eq!(food.len(), 1);
    }

    #[test]
    fn full_board_is_a_no_op() {
        let occupied: HashSet<Cell> = Cell::all().collect();
        let mut food = Food::new();
        food.seed(MAX_APPLES, &occupied);
        assert!(food.is_empty());
    }

    #[test]
    fn seeding_stops_at_available_cells() {
        let keep = [Cell::new(0, 0), Cell::new(GRID_WIDTH - 1, GRID_HEIGHT - 1)];
        let occupied: HashSet<Cell> = Cell::all().filter(|c| !keep.contains(c)).collect();
        let mut food = Food::new();
        food.seed(MAX_APPLES, &occupied);
        assert_eq!(food.len(), keep.len());
    }

    #[test]
    fn take_removes_only_present_cells() {
        let mut food = Food::new();
        let cell = food.place_one(&HashSet::new()).unwrap();
        assert!(!food.take(Cell::new(-1, -1)));
        assert!(food.contains(cell));
        assert!(food.take(cell));
        assert!(food.is_empty());
    }
}
