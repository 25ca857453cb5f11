//! Food and obstacle placement.

use bevy::prelude::*;
use rand::Rng;
use std::collections::VecDeque;

use crate::game::{Cell, GameConfig, Grid, ObstaclePlacement};

/// Picks free cells with a bounded number of random draws.
#[derive(Debug, Clone, Copy)]
pub struct Spawner {
    grid: Grid,
    max_attempts: u32,
}

impl Spawner {
    pub fn new(config: &GameConfig) -> Self {
        Spawner {
            grid: config.grid,
            max_attempts: config.spawn_attempts,
        }
    }

    /// Spawns food away from the snake and the obstacles.
    ///
    /// Once the attempt budget runs out the last candidate is returned even if it
    /// is occupied.
    pub fn food<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        body: &VecDeque<Cell>,
        obstacles: &[Cell],
    ) -> Cell {
        self.sample(rng, |cell| body.contains(&cell) || obstacles.contains(&cell))
    }

    /// Picks the cell for one new obstacle.
    pub fn obstacle<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        placement: ObstaclePlacement,
        body: &VecDeque<Cell>,
        food: Cell,
        obstacles: &[Cell],
    ) -> Cell {
        match placement {
            ObstaclePlacement::Unchecked => self.grid.random_cell(rng),
            ObstaclePlacement::AvoidOccupied => self.sample(rng, |cell| {
                cell == food || body.contains(&cell) || obstacles.contains(&cell)
            }),
        }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R, occupied: impl Fn(Cell) -> bool) -> Cell {
        let mut candidate = self.grid.random_cell(rng);
        for _ in 1..self.max_attempts {
            if !occupied(candidate) {
                return candidate;
            }
            candidate = self.grid.random_cell(rng);
        }
        if occupied(candidate) {
            debug!(
                "No free cell after {} attempts, using {:?}",
                self.max_attempts, candidate
            );
        }
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn cells(list: &[(i32, i32)]) -> VecDeque<Cell> {
        list.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    #[test]
    fn food_never_lands_on_the_snake() {
        let spawner = Spawner::new(&GameConfig::default());
        let body = cells(&[(10, 10), (9, 10), (8, 10), (8, 11), (8, 12)]);
        let obstacles = [Cell::new(0, 0), Cell::new(39, 29)];
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..10_000 {
            let food = spawner.food(&mut rng, &body, &obstacles);
            assert!(!body.contains(&food));
            assert!(!obstacles.contains(&food));
            assert!(GameConfig::default().grid.contains(food));
        }
    }

    #[test]
    fn food_falls_back_when_the_grid_is_full() {
        let config = GameConfig {
            grid: Grid { cols: 2, rows: 1 },
            ..GameConfig::default()
        };
        let spawner = Spawner::new(&config);
        let body = cells(&[(0, 0), (1, 0)]);
        let mut rng = StdRng::seed_from_u64(3);

        let food = spawner.food(&mut rng, &body, &[]);
        assert!(config.grid.contains(food));
        assert!(body.contains(&food));
    }

    #[test]
    fn zero_attempts_still_draws_once() {
        let config = GameConfig {
            spawn_attempts: 0,
            ..GameConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(9);
        let food = Spawner::new(&config).food(&mut rng, &VecDeque::new(), &[]);
        assert!(config.grid.contains(food));
    }

    #[test]
    fn checked_obstacles_avoid_snake_and_food() {
        let config = GameConfig {
            grid: Grid { cols: 3, rows: 1 },
            ..GameConfig::default()
        };
        let spawner = Spawner::new(&config);
        let body = cells(&[(0, 0)]);
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..200 {
            let obstacle = spawner.obstacle(
                &mut rng,
                ObstaclePlacement::AvoidOccupied,
                &body,
                Cell::new(1, 0),
                &[],
            );
            assert_eq!(obstacle, Cell::new(2, 0));
        }
    }

    #[test]
    fn unchecked_obstacles_may_overlap() {
        let config = GameConfig {
            grid: Grid { cols: 1, rows: 1 },
            ..GameConfig::default()
        };
        let spawner = Spawner::new(&config);
        let body = cells(&[(0, 0)]);
        let mut rng = StdRng::seed_from_u64(5);

        let obstacle = spawner.obstacle(
            &mut rng,
            ObstaclePlacement::Unchecked,
            &body,
            Cell::new(0, 0),
            &[],
        );
        assert_eq!(obstacle, Cell::new(0, 0));
    }
}
