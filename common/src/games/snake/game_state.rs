use std::collections::VecDeque;

use crate::{debug_log, log};
use crate::games::SessionRng;
use super::collision::{self, CollisionReport};
use super::invariant::InvariantViolation;
use super::settings::GameSettings;
use super::entity::Snake;
use super::snapshot::{GameOverSummary, GameSnapshot};
use super::types::{DeathReason, Direction, Phase, Point};

const FOOD_SPAWN_ATTEMPTS: usize = 100;

/// What a single tick did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub ate_food: bool,
    pub game_over: Option<DeathReason>,
}

/// Single source of truth for one game. Mutated only by the ticker and the input router.
#[derive(Clone, Debug)]
pub struct SnakeGameState {
    snake: Snake,
    food: Point,
    score: u32,
    phase: Phase,
    death_reason: Option<DeathReason>,
    tick: u64,
    settings: GameSettings,
    rng: SessionRng,
}

impl SnakeGameState {
    pub fn new(settings: GameSettings, mut rng: SessionRng) -> Self {
        let snake = Snake::new(
            settings.start_position,
            settings.start_direction,
            settings.initial_tail_length,
        );
        let food = Self::roll_food(&mut rng, &settings, snake.head, None);

        Self {
            snake,
            food,
            score: 0,
            phase: Phase::Playing,
            death_reason: None,
            tick: 0,
            settings,
            rng,
        }
    }

    pub fn head(&self) -> Point {
        self.snake.head
    }

    pub fn tail(&self) -> &VecDeque<Point> {
        &self.snake.tail
    }

    pub fn tail_capacity(&self) -> usize {
        self.snake.tail_capacity
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.snake.pending_direction
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Moves the snake one step. Frozen while the game is over.
    pub fn advance(&mut self) {
        if !self.is_playing() {
            return;
        }

        self.snake.step(self.settings.speed);
        self.tick += 1;
        self.enforce_invariants();
    }

    /// One full tick: advance, then resolve collisions in food, wall, self order.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_playing() {
            return TickOutcome::default();
        }

        self.advance();
        let report = collision::evaluate(self);
        self.apply_collisions(&report)
    }

    pub fn apply_collisions(&mut self, report: &CollisionReport) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if report.food {
            self.eat_food();
            outcome.ate_food = true;
        }

        if let Some(reason) = report.fatal() {
            self.end_game(reason);
            outcome.game_over = Some(reason);
        }

        outcome
    }

    /// Returns false when the turn was rejected.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if !self.is_playing() {
            return false;
        }

        let accepted = self.snake.queue_direction(direction);
        if accepted {
            debug_log!("Direction queued: {:?}", direction);
        }
        accepted
    }

    pub fn eat_food(&mut self) {
        self.score += 1;
        self.snake.grow(self.settings.tail_growth_per_food);

        let previous = self.food;
        self.food = Self::roll_food(&mut self.rng, &self.settings, self.snake.head, Some(previous));
        debug_log!(
            "Food eaten at ({}, {}), next at ({}, {}). Score: {}",
            previous.x,
            previous.y,
            self.food.x,
            self.food.y,
            self.score
        );
        self.enforce_invariants();
    }

    pub fn end_game(&mut self, reason: DeathReason) {
        if !self.is_playing() {
            return;
        }

        self.phase = Phase::GameOver;
        self.death_reason = Some(reason);
        log!(
            "Game over after {} ticks: snake {}. Final score: {}",
            self.tick,
            reason,
            self.score
        );
    }

    /// Only valid from GameOver; returns false otherwise.
    pub fn restart(&mut self) -> bool {
        if self.phase != Phase::GameOver {
            return false;
        }

        self.snake = Snake::new(
            self.settings.start_position,
            self.settings.start_direction,
            self.settings.initial_tail_length,
        );
        self.food = Self::roll_food(&mut self.rng, &self.settings, self.snake.head, Some(self.food));
        self.score = 0;
        self.tick = 0;
        self.death_reason = None;
        self.phase = Phase::Playing;
        self.enforce_invariants();
        log!("Game restarted");
        true
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            tick: self.tick,
            head: self.snake.head,
            tail: self.snake.tail.iter().copied().collect(),
            food: self.food,
            score: self.score,
            phase: self.phase,
            direction: self.snake.direction,
            death_reason: self.death_reason,
        }
    }

    pub fn game_over_summary(&self) -> Option<GameOverSummary> {
        self.death_reason.map(|reason| GameOverSummary {
            final_score: self.score,
            reason,
            ticks: self.tick,
        })
    }

    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let region = self.settings.food_region();
        if !region.contains(&self.food) {
            return Err(InvariantViolation::FoodOutOfBounds {
                food: self.food,
                region,
            });
        }

        if self.snake.tail.len() > self.snake.tail_capacity {
            return Err(InvariantViolation::TailOverCapacity {
                length: self.snake.tail.len(),
                capacity: self.snake.tail_capacity,
            });
        }

        Ok(())
    }

    fn enforce_invariants(&mut self) {
        while let Err(violation) = self.check_invariants() {
            if cfg!(debug_assertions) {
                panic!("{}", violation);
            }
            log!("Invariant violation, clamping: {}", violation);
            if !self.repair(violation) {
                return;
            }
        }
    }

    /// Release-build recovery. Returns false when there is nothing valid to repair into.
    fn repair(&mut self, violation: InvariantViolation) -> bool {
        match violation {
            InvariantViolation::FoodOutOfBounds { region, .. } => {
                // Settings validation rejects an empty spawn region.
                if region.is_empty() {
                    return false;
                }
                self.food = region.clamp(&self.food);
            }
            InvariantViolation::TailOverCapacity { capacity, .. } => {
                self.snake.tail.truncate(capacity);
            }
        }
        true
    }

    fn roll_food(
        rng: &mut SessionRng,
        settings: &GameSettings,
        head: Point,
        previous: Option<Point>,
    ) -> Point {
        let region = settings.food_region();
        if region.is_empty() {
            return Point::new(region.left, region.top);
        }

        let mut candidate = previous.unwrap_or(head);
        for _ in 0..FOOD_SPAWN_ATTEMPTS {
            candidate = Point::new(
                rng.random_range(region.left..region.right),
                rng.random_range(region.top..region.bottom),
            );

            let repeats_previous = previous == Some(candidate);
            let under_head = collision::hits_food(head, candidate, settings.food_tolerance);
            if !repeats_previous && !under_head {
                return candidate;
            }
        }

        candidate
    }

    #[cfg(test)]
    fn place_food(&mut self, food: Point) {
        self.food = food;
    }

    #[cfg(test)]
    fn snake_mut(&mut self) -> &mut Snake {
        &mut self.snake
    }
}
