use ndarray::ArrayView2;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Status {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A single snake game: owns the board, the snake, the food and the exported buffers.
///
/// Slices returned by [`Game::classification`] and [`Game::snake_positions`] reuse the same
/// storage across ticks, so anything read through a raw pointer is stale after the next
/// [`Game::tick`].
#[derive(Clone, Debug)]
pub struct Game<S = RandomFoodSpawner<SmallRng>> {
    world: World,
    snake: Snake,
    food: Option<CellIndex>,
    spawner: S,
    status: Status,
    paused: bool,
    next_direction: Option<Direction>,
    ticks: u64,
    snapshot: Snapshot,
}

impl Game {
    pub fn new(config: &GameConfig) -> Result<Self> {
        Self::with_spawner(config, RandomFoodSpawner::from_seed(config.seed))
    }
}

impl<S: FoodSpawner> Game<S> {
    pub fn with_spawner(config: &GameConfig, spawner: S) -> Result<Self> {
        let world = World::new(config.width, config.height, &config.walls)?;
        let snake = Snake::spawn(
            &world,
            world.center(),
            Direction::default(),
            config.snake_length,
        )?;

        if let Some(index) = config.food {
            if !world.contains_index(index) {
                return Err(ConfigError::FoodOutOfBounds { index });
            }
            if world.is_wall(index) || snake.contains(index) {
                return Err(ConfigError::FoodNotFree { index });
            }
        }

        let snapshot = Snapshot::new(&world);
        let mut game = Self {
            world,
            snake,
            food: config.food,
            spawner,
            status: Default::default(),
            paused: false,
            next_direction: None,
            ticks: 0,
            snapshot,
        };

        if game.food.is_none() {
            game.respawn_food();
        }
        game.refresh_snapshot();

        log::debug!(
            "New game: {}x{}, {} walls, snake at {:?}, food at {:?}",
            config.width,
            config.height,
            game.world.wall_count(),
            game.snake.as_slice(),
            game.food
        );
        Ok(game)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<CellIndex> {
        self.food
    }

    /// Number of ticks that moved the snake.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn free_cell_count(&self) -> CellIndex {
        free_cell_count(&self.world, &self.snake)
    }

    /// Direction the snake will take on the next tick.
    pub fn direction(&self) -> Direction {
        self.next_direction.unwrap_or(self.snake.direction())
    }

    /// Queues a turn for the next tick; a reversal onto the neck is ignored.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.status.is_finished() {
            return;
        }
        if self.snake.len() > 1 && direction == self.snake.direction().opposite() {
            log::trace!("Ignoring reversal to {:?}", direction);
            return;
        }
        self.next_direction = Some(direction);
    }

    pub fn pause(&mut self) {
        if self.status.is_playing() {
            self.paused = true;
        }
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advances the game one step; does nothing once the game ended or while paused.
    pub fn tick(&mut self) {
        if !self.status.is_playing() || self.paused {
            return;
        }

        if let Some(direction) = self.next_direction.take() {
            self.snake.set_direction(direction);
        }

        let candidate = self
            .world
            .step(self.snake.head(), self.snake.direction())
            .filter(|&index| !self.world.is_wall(index));
        let Some(candidate) = candidate else {
            self.end_game(Status::Lost);
            return;
        };

        let will_eat = self.food == Some(candidate);
        if !will_eat && self.snake.will_collide(candidate) {
            self.end_game(Status::Lost);
            return;
        }

        self.snake.advance(candidate, will_eat);
        self.ticks += 1;
        log::trace!("Tick {}: head at {}", self.ticks, candidate);

        if will_eat {
            self.food = None;
            self.respawn_food();
        }
        self.refresh_snapshot();
    }

    /// Tag of every cell, `width * height` long, indexed by [`CellIndex`].
    pub fn classification(&self) -> &[Cell] {
        self.snapshot.as_slice()
    }

    pub fn classification_grid(&self) -> ArrayView2<'_, Cell> {
        self.snapshot.grid()
    }

    /// Body cells, head first; the length changes as the snake grows.
    pub fn snake_positions(&self) -> &[CellIndex] {
        self.snake.as_slice()
    }

    fn respawn_food(&mut self) {
        match self.spawner.spawn(&self.world, &self.snake) {
            Some(index) if self.is_free(index) => self.food = Some(index),
            Some(index) => {
                log::warn!("Spawner picked occupied cell {}, using first free cell", index);
                self.food = free_cells(&self.world, &self.snake).next();
                if self.food.is_none() {
                    self.end_game(Status::Won);
                }
            }
            None => self.end_game(Status::Won),
        }
    }

    fn is_free(&self, index: CellIndex) -> bool {
        self.world.contains_index(index) && !self.world.is_wall(index) && !self.snake.contains(index)
    }

    fn refresh_snapshot(&mut self) {
        self.snapshot.classify(&self.world, &self.snake, self.food);
    }

    fn end_game(&mut self, status: Status) {
        if self.status.is_finished() {
            return;
        }

        self.status = status;
        self.paused = false;
        self.next_direction = None;
        log::info!(
            "Game over: {:?} after {} ticks with length {}",
            status,
            self.ticks,
            self.snake.len()
        );
    }
}
