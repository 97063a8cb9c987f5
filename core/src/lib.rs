#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use food::*;
pub use snake::*;
pub use snapshot::*;
pub use types::*;
pub use world::*;

mod engine;
mod error;
mod food;
mod snake;
mod snapshot;
mod types;
mod world;

pub const DEFAULT_SNAKE_LENGTH: u32 = 1;

const fn default_snake_length() -> u32 {
    DEFAULT_SNAKE_LENGTH
}

/// Everything needed to construct a [`Game`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: Coord,
    pub height: Coord,
    #[serde(default)]
    pub walls: Vec<CellIndex>,
    #[serde(default = "default_snake_length")]
    pub snake_length: u32,
    /// Seed of the default food spawner.
    #[serde(default)]
    pub seed: u64,
    /// Initial food cell; chosen by the spawner when absent.
    #[serde(default)]
    pub food: Option<CellIndex>,
}

impl GameConfig {
    pub fn new(width: Coord, height: Coord, walls: Vec<CellIndex>) -> Self {
        Self {
            width,
            height,
            walls,
            snake_length: DEFAULT_SNAKE_LENGTH,
            seed: 0,
            food: None,
        }
    }

    /// Board enclosed by a wall on every edge cell.
    pub fn bordered(width: Coord, height: Coord) -> Self {
        Self::new(width, height, border_walls(width, height))
    }

    pub fn with_snake_length(self, snake_length: u32) -> Self {
        Self {
            snake_length,
            ..self
        }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    pub fn with_food(self, food: CellIndex) -> Self {
        Self {
            food: Some(food),
            ..self
        }
    }
}
