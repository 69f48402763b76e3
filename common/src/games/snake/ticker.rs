use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

use crate::{debug_log, log};
use crate::games::GameBroadcaster;
use super::game_state::SnakeGameState;

struct RunningLoop {
    stop_tx: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

/// Fixed-interval driver for a game state. Owns at most one tick loop at a time.
pub struct Ticker {
    period: Duration,
    running: Option<RunningLoop>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self { period, running: None }
    }

    /// True while the loop task is alive. The loop exits on its own at game over.
    pub fn is_running(&self) -> bool {
        self.running
            .as_ref()
            .is_some_and(|running| !running.handle.is_finished())
    }

    /// Stops any previous loop first, so two loops never drive the same state.
    pub async fn start<B: GameBroadcaster>(
        &mut self,
        state: Arc<Mutex<SnakeGameState>>,
        broadcaster: B,
    ) {
        self.stop().await;

        let (stop_tx, stop_rx) = oneshot::channel();
        let first_tick = Instant::now() + self.period;
        let period = self.period;
        let handle = tokio::spawn(async move {
            run_tick_loop(state, broadcaster, first_tick, period, stop_rx).await;
        });

        self.running = Some(RunningLoop { stop_tx, handle });
        debug_log!("Ticker started with period {:?}", self.period);
    }

    /// Returns once the loop task has fully finished.
    pub async fn stop(&mut self) {
        let Some(running) = self.running.take() else {
            return;
        };

        // The loop may already be gone after a game over; a closed channel is fine.
        let _ = running.stop_tx.send(());
        if let Err(e) = running.handle.await {
            log!("Tick loop ended abnormally: {}", e);
        }
        debug_log!("Ticker stopped");
    }
}

async fn run_tick_loop<B: GameBroadcaster>(
    state: Arc<Mutex<SnakeGameState>>,
    broadcaster: B,
    first_tick: Instant,
    period: Duration,
    mut stop_rx: oneshot::Receiver<()>,
) {
    let mut timer = interval_at(first_tick, period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = &mut stop_rx => {
                break;
            }
            _ = timer.tick() => {
                let (snapshot, outcome, summary) = {
                    let mut game_state = state.lock().await;
                    if !game_state.is_playing() {
                        break;
                    }
                    let outcome = game_state.tick();
                    (game_state.snapshot(), outcome, game_state.game_over_summary())
                };

                broadcaster.broadcast_state(snapshot).await;

                if outcome.game_over.is_some() {
                    if let Some(summary) = summary {
                        broadcaster.broadcast_game_over(summary).await;
                    }
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::SessionRng;
    use crate::games::broadcaster::test_support::RecordingBroadcaster;
    use crate::games::snake::{DeathReason, GameSettings, Phase, Point};

    fn shared_state(settings: GameSettings) -> Arc<Mutex<SnakeGameState>> {
        Arc::new(Mutex::new(SnakeGameState::new(settings, SessionRng::new(42))))
    }

    /// Starts one step left of the right wall so the first tick is fatal.
    fn doomed_settings() -> GameSettings {
        GameSettings {
            start_position: Point::new(1575, 600),
            ..GameSettings::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_at_fixed_period() {
        let state = shared_state(GameSettings::default());
        let broadcaster = RecordingBroadcaster::default();
        let mut ticker = Ticker::new(Duration::from_millis(50));

        ticker.start(state.clone(), broadcaster.clone()).await;
        tokio::time::sleep(Duration::from_millis(25)).await;
        assert_eq!(broadcaster.snapshot_count(), 0);

        tokio::time::sleep(Duration::from_millis(50 * 12)).await;
        assert_eq!(broadcaster.snapshot_count(), 12);
        assert_eq!(state.lock().await.tick_count(), 12);
        assert_eq!(state.lock().await.head(), Point::new(360, 300));

        ticker.stop().await;
        assert!(!ticker.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_freezes_state() {
        let state = shared_state(GameSettings::default());
        let broadcaster = RecordingBroadcaster::default();
        let mut ticker = Ticker::new(Duration::from_millis(50));

        ticker.start(state.clone(), broadcaster.clone()).await;
        tokio::time::sleep(Duration::from_millis(120)).await;
        ticker.stop().await;

        let ticks = state.lock().await.tick_count();
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(state.lock().await.tick_count(), ticks);
        assert_eq!(broadcaster.snapshot_count() as u64, ticks);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restarting_does_not_duplicate_loop() {
        let state = shared_state(GameSettings::default());
        let broadcaster = RecordingBroadcaster::default();
        let mut ticker = Ticker::new(Duration::from_millis(50));

        ticker.start(state.clone(), broadcaster.clone()).await;
        ticker.start(state.clone(), broadcaster.clone()).await;
        ticker.start(state.clone(), broadcaster.clone()).await;

        tokio::time::sleep(Duration::from_millis(50 * 4 + 10)).await;
        assert_eq!(state.lock().await.tick_count(), 4);
        ticker.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_loop_suspends_itself_on_game_over() {
        let state = shared_state(doomed_settings());
        let broadcaster = RecordingBroadcaster::default();
        let mut ticker = Ticker::new(Duration::from_millis(50));

        ticker.start(state.clone(), broadcaster.clone()).await;
        tokio::time::sleep(Duration::from_millis(500)).await;

        assert!(!ticker.is_running());
        assert_eq!(broadcaster.snapshot_count(), 1);
        assert_eq!(broadcaster.game_over_count(), 1);
        let game_over = broadcaster.game_overs.lock().unwrap()[0].clone();
        assert_eq!(game_over.reason, DeathReason::WallCollision);

        let last = broadcaster.last_snapshot().unwrap();
        assert_eq!(last.phase, Phase::GameOver);
        assert_eq!(state.lock().await.head(), Point::new(1580, 600));

        // Stopping an already finished loop is harmless.
        ticker.stop().await;
    }
}
