use common::games::GameBroadcaster;
use common::games::snake::{GameOverSummary, GameSnapshot};
use common::log;
use crate::state::SharedState;

/// Hands session output to the UI thread through `SharedState`.
#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl GameBroadcaster for LocalBroadcaster {
    async fn broadcast_state(&self, snapshot: GameSnapshot) {
        self.shared_state.update_snapshot(snapshot);
    }

    async fn broadcast_game_over(&self, summary: GameOverSummary) {
        log!(
            "Snake {} after {} ticks, final score {}",
            summary.reason,
            summary.ticks,
            summary.final_score
        );
        self.shared_state.set_game_over(summary);
    }
}
