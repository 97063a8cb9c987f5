use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Presentation tag of a single cell, one byte per cell in the exported buffer.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Blank = 0,
    Wall = 1,
    Food = 2,
    Head = 3,
    Body = 4,
    Tail = 5,
}

impl Cell {
    pub const fn is_snake(self) -> bool {
        matches!(self, Self::Head | Self::Body | Self::Tail)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Wall
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell as u8
    }
}

/// Per-cell classification of the board, rebuilt in place from the game state.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    cells: Array2<Cell>,
}

impl Snapshot {
    pub fn new(world: &World) -> Self {
        Self {
            cells: Array2::default(world.size().to_nd_index()),
        }
    }

    pub fn classify(&mut self, world: &World, snake: &Snake, food: Option<CellIndex>) {
        let Some(cells) = self.cells.as_slice_mut() else {
            return;
        };

        for (cell, &is_wall) in cells.iter_mut().zip(world.wall_slice()) {
            *cell = if is_wall { Cell::Wall } else { Cell::Blank };
        }

        if let Some(food) = food {
            cells[food as usize] = Cell::Food;
        }

        let body = snake.as_slice();
        for &segment in body {
            cells[segment as usize] = Cell::Body;
        }
        if body.len() > 1 {
            cells[snake.tail() as usize] = Cell::Tail;
        }
        cells[snake.head() as usize] = Cell::Head;
    }

    pub fn as_slice(&self) -> &[Cell] {
        self.cells.as_slice().unwrap_or_default()
    }

    pub fn grid(&self) -> ndarray::ArrayView2<'_, Cell> {
        self.cells.view()
    }

    pub fn get(&self, index: CellIndex) -> Option<Cell> {
        self.as_slice().get(index as usize).copied()
    }
}
