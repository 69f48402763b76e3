use tokio::sync::mpsc;
use common::games::SessionRng;
use common::games::snake::{GameSettings, SnakeSession};
use common::{debug_log, log};
use crate::state::{ClientCommand, SharedState};

use super::LocalBroadcaster;

/// Runs one snake session until the UI asks to quit or drops its sender.
pub async fn run_snake_game(
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
    settings: GameSettings,
    rng: SessionRng,
) {
    let broadcaster = LocalBroadcaster::new(shared_state.clone());
    let mut session = SnakeSession::new(settings, rng, broadcaster);
    session.start().await;

    while let Some(command) = command_rx.recv().await {
        match command {
            ClientCommand::Input(intent) => {
                let outcome = session.handle_intent(intent).await;
                debug_log!("{:?} -> {:?}", intent, outcome);
            }
            ClientCommand::Quit => {
                log!("Quit requested");
                break;
            }
        }
    }

    session.shutdown().await;
    shared_state.set_session_finished();
}
