use std::sync::Arc;

use tokio::sync::Mutex;

use crate::log;
use crate::games::{GameBroadcaster, SessionRng};
use super::game_state::SnakeGameState;
use super::input_router::{InputRouter, Intent, RouteOutcome};
use super::settings::GameSettings;
use super::ticker::Ticker;
use super::types::Phase;

/// A game state, the ticker driving it and the broadcaster it reports to.
pub struct SnakeSession<B: GameBroadcaster> {
    state: Arc<Mutex<SnakeGameState>>,
    ticker: Ticker,
    broadcaster: B,
}

impl<B: GameBroadcaster> SnakeSession<B> {
    pub fn new(settings: GameSettings, rng: SessionRng, broadcaster: B) -> Self {
        log!(
            "Creating snake session (seed {}, tick {} ms)",
            rng.seed(),
            settings.tick_interval_ms
        );
        let ticker = Ticker::new(settings.tick_interval());
        Self {
            state: Arc::new(Mutex::new(SnakeGameState::new(settings, rng))),
            ticker,
            broadcaster,
        }
    }

    pub fn state(&self) -> Arc<Mutex<SnakeGameState>> {
        self.state.clone()
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_running()
    }

    /// Shows the initial frame, then starts ticking.
    pub async fn start(&mut self) {
        self.publish_current_state().await;
        self.ticker
            .start(self.state.clone(), self.broadcaster.clone())
            .await;
    }

    pub async fn handle_intent(&mut self, intent: Intent) -> RouteOutcome {
        match intent {
            Intent::Turn(_) => {
                let mut game_state = self.state.lock().await;
                InputRouter::route(&mut game_state, intent)
            }
            Intent::Confirm => self.confirm().await,
        }
    }

    /// Restart path: the old loop is fully stopped before the state is reset
    /// and a new loop is started.
    async fn confirm(&mut self) -> RouteOutcome {
        if self.state.lock().await.phase() != Phase::GameOver {
            return RouteOutcome::Ignored;
        }

        self.ticker.stop().await;

        let outcome = {
            let mut game_state = self.state.lock().await;
            InputRouter::route(&mut game_state, Intent::Confirm)
        };

        if outcome == RouteOutcome::Restarted {
            self.start().await;
        }
        outcome
    }

    pub async fn shutdown(mut self) {
        self.ticker.stop().await;
        let game_state = self.state.lock().await;
        log!(
            "Snake session closed at tick {} with score {}",
            game_state.tick_count(),
            game_state.score()
        );
    }

    async fn publish_current_state(&self) {
        let snapshot = self.state.lock().await.snapshot();
        self.broadcaster.broadcast_state(snapshot).await;
    }
}
