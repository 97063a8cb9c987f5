use alloc::string::String;
use thiserror::Error;

use crate::CellIndex;

/// Reasons a game could not be constructed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board width and height must be positive")]
    ZeroDimension,
    #[error("Board is too large to address every cell")]
    BoardTooLarge,
    #[error("Wall index {index} is outside the board")]
    WallOutOfBounds { index: CellIndex },
    #[error("Snake of length {length} does not fit at the spawn point")]
    SnakeDoesNotFit { length: u32 },
    #[error("Food index {index} is outside the board")]
    FoodOutOfBounds { index: CellIndex },
    #[error("Food index {index} is not a free cell")]
    FoodNotFree { index: CellIndex },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = core::result::Result<T, ConfigError>;
