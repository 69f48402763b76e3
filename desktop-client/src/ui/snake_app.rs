use eframe::egui;
use tokio::sync::mpsc;
use common::games::snake::{Direction, Intent, Playfield};

use crate::config::WindowConfig;
use crate::state::{ClientCommand, SharedState};
use super::playfield::draw_game;

const DIRECTION_KEYS: [(egui::Key, Direction); 4] = [
    (egui::Key::ArrowUp, Direction::Up),
    (egui::Key::ArrowDown, Direction::Down),
    (egui::Key::ArrowLeft, Direction::Left),
    (egui::Key::ArrowRight, Direction::Right),
];

pub struct SnakeApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<ClientCommand>,
    playfield: Playfield,
    window: WindowConfig,
    quit_sent: bool,
}

impl SnakeApp {
    pub fn new(
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<ClientCommand>,
        playfield: Playfield,
        window: WindowConfig,
    ) -> Self {
        Self {
            shared_state,
            command_tx,
            playfield,
            window,
            quit_sent: false,
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let (commands, quit) = ctx.input(|i| {
            let mut commands = Vec::new();
            for (key, direction) in DIRECTION_KEYS {
                if i.key_pressed(key) {
                    commands.push(ClientCommand::Input(Intent::Turn(direction)));
                }
            }
            if i.key_pressed(egui::Key::Enter) {
                commands.push(ClientCommand::Input(Intent::Confirm));
            }
            (commands, i.key_pressed(egui::Key::Escape))
        });

        for command in commands {
            let _ = self.command_tx.send(command);
        }

        if quit {
            self.send_quit();
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn send_quit(&mut self) {
        if !self.quit_sent {
            let _ = self.command_tx.send(ClientCommand::Quit);
            self.quit_sent = true;
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            self.send_quit();
        }

        self.handle_input(ctx);

        let screen = self.shared_state.get_screen();
        egui::CentralPanel::default().show(ctx, |ui| match &screen.snapshot {
            Some(snapshot) => draw_game(
                ui,
                snapshot,
                screen.game_over.as_ref(),
                &self.playfield,
                &self.window,
            ),
            None => {
                ui.heading("Starting...");
                ui.spinner();
            }
        });

        if self.shared_state.is_session_finished() && !self.quit_sent {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        ctx.request_repaint();
    }
}
