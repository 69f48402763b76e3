use std::future::Future;

use super::snake::{GameOverSummary, GameSnapshot};

/// Presentation side of a session: receives a snapshot after every tick
/// and one summary per transition to game over.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(&self, summary: GameOverSummary) -> impl Future<Output = ()> + Send;
}
