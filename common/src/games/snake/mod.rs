mod collision;
mod entity;
mod game_state;
mod input_router;
mod invariant;
mod session;
mod settings;
mod snapshot;
mod ticker;
mod types;

pub use collision::{CollisionReport, evaluate as evaluate_collisions, hits_food, hits_self, hits_wall};
pub use entity::Snake;
pub use game_state::{SnakeGameState, TickOutcome};
pub use input_router::{InputRouter, Intent, RouteOutcome};
pub use invariant::InvariantViolation;
pub use session::SnakeSession;
pub use settings::GameSettings;
pub use snapshot::{GameOverSummary, GameSnapshot};
pub use ticker::Ticker;
pub use types::{DeathReason, Direction, Phase, Playfield, Point};
