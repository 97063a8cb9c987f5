use alloc::vec::Vec;

use crate::*;

/// Ordered snake body, head first, stored as cell indices into the board.
#[derive(Clone, Debug, PartialEq)]
pub struct Snake {
    body: Vec<CellIndex>,
    direction: Direction,
}

impl Snake {
    /// Places a straight snake with its head on `head`, trailing away from `direction`.
    pub fn spawn(world: &World, head: CellIndex, direction: Direction, length: u32) -> Result<Self> {
        let does_not_fit = ConfigError::SnakeDoesNotFit { length };
        if length == 0 || !world.contains_index(head) || world.is_wall(head) {
            return Err(does_not_fit);
        }

        let mut body = Vec::with_capacity(length as usize);
        body.push(head);
        let mut segment = head;
        for _ in 1..length {
            segment = world
                .step(segment, direction.opposite())
                .filter(|&next| !world.is_wall(next))
                .ok_or_else(|| does_not_fit.clone())?;
            body.push(segment);
        }

        Ok(Self { body, direction })
    }

    pub fn head(&self) -> CellIndex {
        self.body[0]
    }

    pub fn tail(&self) -> CellIndex {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn as_slice(&self) -> &[CellIndex] {
        &self.body
    }

    pub fn contains(&self, index: CellIndex) -> bool {
        self.body.contains(&index)
    }

    /// Whether moving onto `index` without growing would hit the body.
    ///
    /// The tail cell is excluded because it is vacated by the same move.
    pub fn will_collide(&self, index: CellIndex) -> bool {
        self.body[..self.body.len() - 1].contains(&index)
    }

    /// Turns the snake, unless it would reverse straight into its own neck.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.body.len() > 1 && direction == self.direction.opposite() {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Moves the head onto `new_head`, keeping the tail only when `grow` is set.
    ///
    /// The caller computes `new_head` with [`World::step`] from [`Snake::direction`], since
    /// only the world knows the board bounds; bounds and collisions are checked before this.
    pub fn advance(&mut self, new_head: CellIndex, grow: bool) -> CellIndex {
        if !grow {
            self.body.pop();
        }
        self.body.insert(0, new_head);
        new_head
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn open_world() -> World {
        World::new(5, 5, &border_walls(5, 5)).unwrap()
    }

    #[test]
    fn spawn_trails_behind_head() {
        let world = World::new(6, 3, &[]).unwrap();
        let snake = Snake::spawn(&world, 9, Direction::Right, 3).unwrap();

        assert_eq!(snake.as_slice(), &[9, 8, 7]);
        assert_eq!(snake.head(), 9);
        assert_eq!(snake.tail(), 7);
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn spawn_fails_when_body_hits_wall() {
        let world = open_world();
        assert_eq!(
            Snake::spawn(&world, 12, Direction::Right, 3),
            Err(ConfigError::SnakeDoesNotFit { length: 3 })
        );
        assert!(Snake::spawn(&world, 12, Direction::Right, 2).is_ok());
    }

    #[test]
    fn spawn_fails_when_body_leaves_board() {
        let world = World::new(3, 1, &[]).unwrap();
        assert!(Snake::spawn(&world, 1, Direction::Right, 3).is_err());
        assert!(Snake::spawn(&world, 2, Direction::Right, 3).is_ok());
    }

    #[test]
    fn spawn_rejects_empty_and_walled_head() {
        let world = open_world();
        assert!(Snake::spawn(&world, 12, Direction::Up, 0).is_err());
        assert!(Snake::spawn(&world, 0, Direction::Up, 1).is_err());
    }

    #[test]
    fn advance_without_growth_keeps_length() {
        let world = World::new(6, 3, &[]).unwrap();
        let mut snake = Snake::spawn(&world, 9, Direction::Right, 3).unwrap();

        assert_eq!(snake.advance(10, false), 10);
        assert_eq!(snake.as_slice(), &[10, 9, 8]);
        assert!(!snake.contains(7));
    }

    #[test]
    fn advance_with_growth_keeps_tail() {
        let world = World::new(6, 3, &[]).unwrap();
        let mut snake = Snake::spawn(&world, 9, Direction::Right, 2).unwrap();

        snake.advance(10, true);
        assert_eq!(snake.as_slice(), &[10, 9, 8]);
    }

    #[test]
    fn vacating_tail_is_not_a_collision() {
        let world = World::new(4, 4, &[]).unwrap();
        let mut snake = Snake::spawn(&world, 5, Direction::Right, 1).unwrap();
        for (cell, grow) in [(6, true), (10, true), (9, false)] {
            snake.advance(cell, grow);
        }
        assert_eq!(snake.as_slice(), &[9, 10, 6]);

        assert!(snake.contains(6));
        assert!(!snake.will_collide(6));
        assert!(snake.will_collide(10));
    }

    #[test]
    fn reverse_is_ignored_once_longer_than_one() {
        let world = World::new(6, 3, &[]).unwrap();
        let mut single = Snake::spawn(&world, 9, Direction::Right, 1).unwrap();
        assert!(single.set_direction(Direction::Left));
        assert_eq!(single.direction(), Direction::Left);

        let mut long = Snake::spawn(&world, 9, Direction::Right, 2).unwrap();
        assert!(!long.set_direction(Direction::Left));
        assert_eq!(long.direction(), Direction::Right);
        assert!(long.set_direction(Direction::Up));
        assert_eq!(long.direction(), Direction::Up);
    }

    #[test]
    fn body_is_exact_length() {
        let world = open_world();
        let snake = Snake::spawn(&world, 12, Direction::Right, 1).unwrap();
        assert_eq!(snake.as_slice(), vec![12].as_slice());
        assert_eq!(snake.len(), 1);
        assert!(!snake.is_empty());
    }
}
