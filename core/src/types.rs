use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board width, height, rows and columns.
pub type Coord = u32;

/// Linear cell address, `row * width + col`.
pub type CellIndex = u32;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0 as usize, self.1 as usize]
    }
}

/// Total number of cells on a `width x height` board, `None` if it does not fit a [`CellIndex`].
pub const fn area(width: Coord, height: Coord) -> Option<CellIndex> {
    width.checked_mul(height)
}

pub const fn to_index((row, col): Coord2, width: Coord) -> CellIndex {
    row * width + col
}

pub const fn to_coords(index: CellIndex, width: Coord) -> Coord2 {
    (index / width, index % width)
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub const fn opposite(self) -> Self {
        use Direction::*;
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    /// Row and column displacement of a single step.
    pub const fn delta(self) -> (i32, i32) {
        use Direction::*;
        match self {
            Up => (-1, 0),
            Down => (1, 0),
            Left => (0, -1),
            Right => (0, 1),
        }
    }
}

/// Applies the step of `direction` to `coords`, returning a value only when it remains in bounds.
pub fn apply_direction(coords: Coord2, direction: Direction, bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = direction.delta();
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}
