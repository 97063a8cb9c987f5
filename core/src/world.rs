use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

/// Fixed-size arena with an immutable wall mask.
#[derive(Clone, Debug, PartialEq)]
pub struct World {
    wall_mask: Array2<bool>,
    wall_count: CellIndex,
}

impl World {
    pub fn new(width: Coord, height: Coord, walls: &[CellIndex]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        let cell_count = area(width, height).ok_or(ConfigError::BoardTooLarge)?;

        let mut wall_mask: Array2<bool> = Array2::default((height, width).to_nd_index());
        let mut wall_count = 0;
        for &index in walls {
            if index >= cell_count {
                return Err(ConfigError::WallOutOfBounds { index });
            }
            let cell = &mut wall_mask[to_coords(index, width).to_nd_index()];
            if !*cell {
                *cell = true;
                wall_count += 1;
            }
        }

        Ok(Self {
            wall_mask,
            wall_count,
        })
    }

    pub fn width(&self) -> Coord {
        self.wall_mask.dim().1 as Coord
    }

    pub fn height(&self) -> Coord {
        self.wall_mask.dim().0 as Coord
    }

    pub fn size(&self) -> Coord2 {
        (self.height(), self.width())
    }

    pub fn cell_count(&self) -> CellIndex {
        self.wall_mask.len() as CellIndex
    }

    pub fn wall_count(&self) -> CellIndex {
        self.wall_count
    }

    /// Cells that are not walls, whether occupied or not.
    pub fn open_cell_count(&self) -> CellIndex {
        self.cell_count() - self.wall_count
    }

    pub fn in_bounds(&self, row: Coord, col: Coord) -> bool {
        row < self.height() && col < self.width()
    }

    pub fn contains_index(&self, index: CellIndex) -> bool {
        index < self.cell_count()
    }

    /// Out-of-range indices are never walls.
    pub fn is_wall(&self, index: CellIndex) -> bool {
        self.contains_index(index) && self.wall_mask[self.coords(index).to_nd_index()]
    }

    pub fn index(&self, coords: Coord2) -> CellIndex {
        to_index(coords, self.width())
    }

    pub fn coords(&self, index: CellIndex) -> Coord2 {
        to_coords(index, self.width())
    }

    /// Neighbour of `index` one step in `direction`, `None` when it leaves the board.
    pub fn step(&self, index: CellIndex, direction: Direction) -> Option<CellIndex> {
        apply_direction(self.coords(index), direction, self.size()).map(|coords| self.index(coords))
    }

    /// Cell the game spawns the snake head on.
    pub fn center(&self) -> CellIndex {
        self.index((self.height() / 2, self.width() / 2))
    }

    pub(crate) fn wall_slice(&self) -> &[bool] {
        // always in standard layout
        self.wall_mask.as_slice().unwrap_or_default()
    }
}

/// Every cell on the outer ring of a `width x height` board.
pub fn border_walls(width: Coord, height: Coord) -> Vec<CellIndex> {
    let mut walls = Vec::new();
    for row in 0..height {
        for col in 0..width {
            if row == 0 || col == 0 || row + 1 == height || col + 1 == width {
                walls.push(to_index((row, col), width));
            }
        }
    }
    walls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(World::new(0, 5, &[]), Err(ConfigError::ZeroDimension));
        assert_eq!(World::new(5, 0, &[]), Err(ConfigError::ZeroDimension));
    }

    #[test]
    fn rejects_out_of_range_walls() {
        assert_eq!(
            World::new(3, 3, &[0, 9]),
            Err(ConfigError::WallOutOfBounds { index: 9 })
        );
    }

    #[test]
    fn rejects_unaddressable_board() {
        assert_eq!(
            World::new(u32::MAX, 3, &[]),
            Err(ConfigError::BoardTooLarge)
        );
    }

    #[test]
    fn duplicate_walls_collapse() {
        let world = World::new(3, 3, &[4, 4, 0]).unwrap();
        assert_eq!(world.wall_count(), 2);
        assert_eq!(world.open_cell_count(), 7);
        assert!(world.is_wall(4));
        assert!(world.is_wall(0));
        assert!(!world.is_wall(1));
        assert!(!world.is_wall(100));
    }

    #[test]
    fn border_of_5x5_has_16_cells() {
        let walls = border_walls(5, 5);
        assert_eq!(walls.len(), 16);
        let world = World::new(5, 5, &walls).unwrap();
        assert_eq!(world.open_cell_count(), 9);
        assert!(!world.is_wall(12));
        assert_eq!(world.center(), 12);
    }

    #[test]
    fn wall_mask_is_row_major() {
        let world = World::new(4, 2, &[5]).unwrap();
        assert_eq!(world.coords(5), (1, 1));
        assert!(world.wall_slice()[5]);
        assert_eq!(world.wall_slice().iter().filter(|&&w| w).count(), 1);
    }

    #[test]
    fn step_respects_bounds() {
        let world = World::new(4, 3, &[]).unwrap();
        assert!(world.in_bounds(2, 3));
        assert!(!world.in_bounds(3, 0));
        assert_eq!(world.step(5, Direction::Right), Some(6));
        assert_eq!(world.step(5, Direction::Up), Some(1));
        assert_eq!(world.step(7, Direction::Right), None);
        assert_eq!(world.step(0, Direction::Up), None);
    }
}
