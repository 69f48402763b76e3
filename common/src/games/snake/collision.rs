use std::collections::VecDeque;

use super::game_state::SnakeGameState;
use super::types::{DeathReason, Playfield, Point};

/// What the head touched on the current tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub food: bool,
    pub wall: bool,
    pub self_hit: bool,
}

impl CollisionReport {
    /// Wall beats self when both hold.
    pub fn fatal(&self) -> Option<DeathReason> {
        if self.wall {
            Some(DeathReason::WallCollision)
        } else if self.self_hit {
            Some(DeathReason::SelfCollision)
        } else {
            None
        }
    }
}

pub fn evaluate(state: &SnakeGameState) -> CollisionReport {
    let settings = state.settings();
    let head = state.head();

    CollisionReport {
        food: hits_food(head, state.food(), settings.food_tolerance),
        wall: hits_wall(head, &settings.playfield),
        self_hit: settings.self_collision_enabled && hits_self(head, state.tail()),
    }
}

pub fn hits_food(head: Point, food: Point, tolerance: i32) -> bool {
    (head.x - food.x).abs() <= tolerance && (head.y - food.y).abs() <= tolerance
}

pub fn hits_wall(head: Point, playfield: &Playfield) -> bool {
    !playfield.contains(&head)
}

/// Skips the segment nearest the head, which was the head a tick ago.
pub fn hits_self(head: Point, tail: &VecDeque<Point>) -> bool {
    tail.iter().skip(1).any(|segment| *segment == head)
}
