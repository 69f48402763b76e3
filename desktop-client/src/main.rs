mod config;
mod offline;
mod state;
mod ui;

use clap::Parser;
use common::games::SessionRng;
use common::{log, logger};
use eframe::egui;
use tokio::sync::mpsc;

use config::{get_config_manager, get_default_config_path};
use offline::run_snake_game;
use state::{ClientCommand, SharedState};
use ui::SnakeApp;

#[derive(Parser)]
#[command(name = "snake_arcade")]
struct Args {
    /// Path to the YAML config; created with defaults when missing.
    #[arg(long)]
    config: Option<String>,

    /// Seed for food placement. Overrides the config value.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_path = args.config.clone().unwrap_or_else(get_default_config_path);
    let config = get_config_manager(&config_path)
        .get_or_create_config()
        .map_err(|e| {
            log!("Failed to load config {}: {}", config_path, e);
            e
        })?;
    if config.verbose_logging {
        logger::set_verbose(true);
    }
    log!("Loaded config from {}", config_path);

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let settings = config.game.clone();
    let rng = SessionRng::from_seed_or_random(args.seed.or(config.seed));
    let shared_state_clone = shared_state.clone();

    let game_thread = std::thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log!("Failed to start async runtime: {}", e);
                shared_state_clone.set_session_finished();
                return;
            }
        };
        rt.block_on(run_snake_game(shared_state_clone, command_rx, settings, rng));
    });

    let playfield = config.game.playfield;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window.inner_size(playfield.width(), playfield.height()))
            .with_title("Snake"),
        ..Default::default()
    };

    let app_command_tx = command_tx.clone();
    let window = config.window.clone();
    eframe::run_native(
        "Snake Arcade",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(SnakeApp::new(
                shared_state,
                app_command_tx,
                playfield,
                window,
            )))
        }),
    )?;

    // Covers windows closed without the app seeing it; extra Quits are ignored.
    let _ = command_tx.send(ClientCommand::Quit);
    drop(command_tx);
    if game_thread.join().is_err() {
        log!("Game thread panicked");
    }

    log!("Snake Arcade closed");
    Ok(())
}
