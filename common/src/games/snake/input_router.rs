use super::game_state::SnakeGameState;
use super::types::{Direction, Phase};

/// Discrete input from the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Turn(Direction),
    Confirm,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteOutcome {
    DirectionQueued,
    Restarted,
    Ignored,
}

pub struct InputRouter;

impl InputRouter {
    pub fn route(state: &mut SnakeGameState, intent: Intent) -> RouteOutcome {
        match intent {
            Intent::Turn(direction) => {
                if state.set_direction(direction) {
                    RouteOutcome::DirectionQueued
                } else {
                    RouteOutcome::Ignored
                }
            }
            Intent::Confirm => {
                if state.phase() == Phase::GameOver && state.restart() {
                    RouteOutcome::Restarted
                } else {
                    RouteOutcome::Ignored
                }
            }
        }
    }
}
