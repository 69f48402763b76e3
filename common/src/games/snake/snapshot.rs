use super::types::{DeathReason, Direction, Phase, Point};

/// Read-only copy of the game state handed to the presentation layer.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSnapshot {
    pub tick: u64,
    pub head: Point,
    pub tail: Vec<Point>,
    pub food: Point,
    pub score: u32,
    pub phase: Phase,
    pub direction: Direction,
    pub death_reason: Option<DeathReason>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameOverSummary {
    pub final_score: u32,
    pub reason: DeathReason,
    pub ticks: u64,
}
