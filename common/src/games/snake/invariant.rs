use super::types::{Playfield, Point};

/// Broken internal invariant. These indicate a bug, not a player mistake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    FoodOutOfBounds { food: Point, region: Playfield },
    TailOverCapacity { length: usize, capacity: usize },
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvariantViolation::FoodOutOfBounds { food, region } => write!(
                f,
                "Food at ({}, {}) outside spawn region [{}, {}) x [{}, {})",
                food.x, food.y, region.left, region.right, region.top, region.bottom
            ),
            InvariantViolation::TailOverCapacity { length, capacity } => {
                write!(f, "Tail length {} exceeds capacity {}", length, capacity)
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}
