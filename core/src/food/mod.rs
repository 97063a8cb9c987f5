use crate::*;
pub use random::*;

mod random;

/// Chooses where the next piece of food goes.
pub trait FoodSpawner {
    /// Returns a free cell (not a wall, not the snake), or `None` when the board is full.
    fn spawn(&mut self, world: &World, snake: &Snake) -> Option<CellIndex>;
}

impl<S: FoodSpawner + ?Sized> FoodSpawner for &mut S {
    fn spawn(&mut self, world: &World, snake: &Snake) -> Option<CellIndex> {
        (**self).spawn(world, snake)
    }
}

/// Iterates the cells food may be placed on, in index order.
pub fn free_cells<'a>(world: &'a World, snake: &'a Snake) -> impl Iterator<Item = CellIndex> + 'a {
    world
        .wall_slice()
        .iter()
        .enumerate()
        .filter(|&(_, &is_wall)| !is_wall)
        .map(|(index, _)| index as CellIndex)
        .filter(|&index| !snake.contains(index))
}

/// Number of cells neither walled nor occupied by the snake.
pub fn free_cell_count(world: &World, snake: &Snake) -> CellIndex {
    world.open_cell_count() - snake.len() as CellIndex
}
