use common::games::snake::{GameOverSummary, GameSnapshot, Intent, Phase};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    Input(Intent),
    Quit,
}

/// Everything the UI needs for one frame.
#[derive(Debug, Clone, Default)]
pub struct ScreenState {
    pub snapshot: Option<GameSnapshot>,
    pub game_over: Option<GameOverSummary>,
}

pub struct SharedState {
    screen: Arc<Mutex<ScreenState>>,
    session_finished: Arc<Mutex<bool>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            screen: Arc::new(Mutex::new(ScreenState::default())),
            session_finished: Arc::new(Mutex::new(false)),
        }
    }

    pub fn update_snapshot(&self, snapshot: GameSnapshot) {
        let mut screen = self.screen.lock().unwrap();
        if snapshot.phase == Phase::Playing {
            screen.game_over = None;
        }
        screen.snapshot = Some(snapshot);
    }

    pub fn set_game_over(&self, summary: GameOverSummary) {
        self.screen.lock().unwrap().game_over = Some(summary);
    }

    pub fn get_screen(&self) -> ScreenState {
        self.screen.lock().unwrap().clone()
    }

    pub fn set_session_finished(&self) {
        *self.session_finished.lock().unwrap() = true;
    }

    pub fn is_session_finished(&self) -> bool {
        *self.session_finished.lock().unwrap()
    }
}

impl Clone for SharedState {
    fn clone(&self) -> Self {
        Self {
            screen: Arc::clone(&self.screen),
            session_finished: Arc::clone(&self.session_finished),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::snake::{DeathReason, Direction, Point};

    fn snapshot(phase: Phase) -> GameSnapshot {
        GameSnapshot {
            tick: 1,
            head: Point::new(305, 300),
            tail: vec![Point::new(300, 300)],
            food: Point::new(0, 0),
            score: 2,
            phase,
            direction: Direction::Right,
            death_reason: None,
        }
    }

    #[test]
    fn test_playing_snapshot_hides_game_over() {
        let state = SharedState::new();
        state.update_snapshot(snapshot(Phase::GameOver));
        state.set_game_over(GameOverSummary {
            final_score: 2,
            reason: DeathReason::WallCollision,
            ticks: 1,
        });
        assert!(state.get_screen().game_over.is_some());

        state.update_snapshot(snapshot(Phase::Playing));
        let screen = state.get_screen();
        assert!(screen.game_over.is_none());
        assert_eq!(screen.snapshot.map(|s| s.score), Some(2));
    }

    #[test]
    fn test_clones_share_state() {
        let state = SharedState::new();
        let clone = state.clone();
        clone.set_session_finished();
        assert!(state.is_session_finished());
    }
}
