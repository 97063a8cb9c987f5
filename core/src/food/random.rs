use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Spawner that picks uniformly among all free cells.
#[derive(Clone, Debug)]
pub struct RandomFoodSpawner<R> {
    rng: R,
}

impl<R: Rng> RandomFoodSpawner<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomFoodSpawner<SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> FoodSpawner for RandomFoodSpawner<R> {
    fn spawn(&mut self, world: &World, snake: &Snake) -> Option<CellIndex> {
        let free_count = free_cell_count(world, snake);
        if free_count == 0 {
            log::debug!("No free cell left for food");
            return None;
        }

        let place = self.rng.gen_range(0..free_count);
        let food = free_cells(world, snake).nth(place as usize);
        if food.is_none() {
            log::warn!(
                "Free cell count mismatch, wanted cell {} of {}",
                place,
                free_count
            );
        }
        food
    }
}
