use hungry_snake_core as engine;
use wasm_bindgen::prelude::*;

/// Cell tags as seen by the host, matching the bytes of [`Game::blocks`].
#[wasm_bindgen]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Blank = 0,
    Wall = 1,
    Food = 2,
    Head = 3,
    Body = 4,
    Tail = 5,
}

impl From<engine::Cell> for Block {
    fn from(cell: engine::Cell) -> Self {
        use engine::Cell::*;
        match cell {
            Blank => Self::Blank,
            Wall => Self::Wall,
            Food => Self::Food,
            Head => Self::Head,
            Body => Self::Body,
            Tail => Self::Tail,
        }
    }
}

#[wasm_bindgen]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Playing = 0,
    Won = 1,
    Lost = 2,
}

impl From<engine::Status> for Status {
    fn from(status: engine::Status) -> Self {
        use engine::Status::*;
        match status {
            Playing => Self::Playing,
            Won => Self::Won,
            Lost => Self::Lost,
        }
    }
}

#[wasm_bindgen]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl From<Direction> for engine::Direction {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::Up,
            Direction::Down => Self::Down,
            Direction::Left => Self::Left,
            Direction::Right => Self::Right,
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    // a second initialization keeps the first logger
    console_log::init_with_level(log::Level::Info).ok();
}

/// Changes the console log level, e.g. `"debug"` or `"off"`.
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsError> {
    let filter: log::LevelFilter = level
        .parse()
        .map_err(|_| JsError::new(&format!("Unknown log level {level:?}")))?;
    log::set_max_level(filter);
    Ok(())
}

fn random_seed() -> u64 {
    let high = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    let low = js_sys::Date::now() as u64;
    (high << 32) ^ low
}

/// A game driven by the host once per frame.
///
/// The buffers behind [`Game::blocks`] and [`Game::snake`] are rewritten by [`Game::tick`],
/// re-read both pointers and lengths after every tick.
#[wasm_bindgen]
pub struct Game {
    inner: engine::Game,
}

#[wasm_bindgen]
impl Game {
    pub fn new(width: u32, height: u32, walls: Vec<u32>) -> Result<Game, JsError> {
        let config = engine::GameConfig::new(width, height, walls).with_seed(random_seed());
        Self::from_engine_config(&config)
    }

    /// Builds a game from a JSON encoded `GameConfig`.
    pub fn from_config(json: &str) -> Result<Game, JsError> {
        let config: engine::GameConfig = serde_json::from_str(json)
            .map_err(|err| engine::ConfigError::InvalidConfig(err.to_string()))?;
        Self::from_engine_config(&config)
    }

    pub fn tick(&mut self) {
        self.inner.tick();
    }

    pub fn status(&self) -> Status {
        self.inner.status().into()
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.inner.set_direction(direction.into());
    }

    pub fn pause(&mut self) {
        self.inner.pause();
    }

    pub fn resume(&mut self) {
        self.inner.resume();
    }

    pub fn is_paused(&self) -> bool {
        self.inner.is_paused()
    }

    pub fn width(&self) -> u32 {
        self.inner.world().width()
    }

    pub fn height(&self) -> u32 {
        self.inner.world().height()
    }

    pub fn food(&self) -> Option<u32> {
        self.inner.food()
    }

    pub fn ticks(&self) -> f64 {
        self.inner.ticks() as f64
    }

    /// One [`Block`] byte per cell, `width * height` long.
    pub fn blocks(&self) -> *const u8 {
        self.inner.classification().as_ptr().cast()
    }

    pub fn blocks_len(&self) -> usize {
        self.inner.classification().len()
    }

    /// Snake cell indices, head first.
    pub fn snake(&self) -> *const u32 {
        self.inner.snake_positions().as_ptr()
    }

    pub fn snake_len(&self) -> usize {
        self.inner.snake_positions().len()
    }

    pub fn block_at(&self, index: u32) -> Option<Block> {
        self.inner
            .classification()
            .get(index as usize)
            .map(|&cell| cell.into())
    }
}

impl Game {
    fn from_engine_config(config: &engine::GameConfig) -> Result<Game, JsError> {
        let inner = engine::Game::new(config)?;
        log::info!(
            "Started {}x{} game with {} walls",
            config.width,
            config.height,
            inner.world().wall_count()
        );
        Ok(Self { inner })
    }
}
