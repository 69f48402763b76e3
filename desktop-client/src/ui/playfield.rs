use eframe::egui;
use common::games::snake::{GameOverSummary, GameSnapshot, Phase, Playfield, Point};

use crate::config::WindowConfig;
use super::colors;

/// Maps playfield coordinates onto the painter's rectangle.
pub struct ScreenMapping {
    origin: egui::Pos2,
    left: i32,
    top: i32,
    scale: f32,
}

impl ScreenMapping {
    pub fn new(origin: egui::Pos2, playfield: &Playfield, scale: f32) -> Self {
        Self {
            origin,
            left: playfield.left,
            top: playfield.top,
            scale,
        }
    }

    pub fn to_screen(&self, point: Point) -> egui::Pos2 {
        egui::pos2(
            self.origin.x + (point.x - self.left) as f32 * self.scale,
            self.origin.y + (point.y - self.top) as f32 * self.scale,
        )
    }

    pub fn square(&self, center: Point, size: f32) -> egui::Rect {
        egui::Rect::from_center_size(
            self.to_screen(center),
            egui::vec2(size * self.scale, size * self.scale),
        )
    }

    fn font(&self, size: f32) -> egui::FontId {
        egui::FontId::proportional((size * self.scale).max(10.0))
    }
}

pub fn draw_game(
    ui: &mut egui::Ui,
    snapshot: &GameSnapshot,
    game_over: Option<&GameOverSummary>,
    playfield: &Playfield,
    window: &WindowConfig,
) {
    let size = egui::vec2(
        playfield.width() as f32 * window.scale,
        playfield.height() as f32 * window.scale,
    );
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let rect = response.rect;
    let mapping = ScreenMapping::new(rect.min, playfield, window.scale);

    painter.rect_filled(rect.expand(4.0), 0.0, colors::BORDER);
    painter.rect_filled(rect, 0.0, colors::BACKGROUND);

    painter.rect_filled(mapping.square(snapshot.food, window.food_size), 0.0, colors::FOOD);

    // Oldest first so newer segments overlap older ones.
    for segment in snapshot.tail.iter().rev() {
        painter.rect_filled(mapping.square(*segment, window.segment_size), 0.0, colors::SNAKE_TAIL);
    }
    painter.rect_filled(mapping.square(snapshot.head, window.segment_size), 0.0, colors::SNAKE_HEAD);

    painter.text(
        rect.min + egui::vec2(50.0, 50.0) * window.scale,
        egui::Align2::LEFT_TOP,
        format!("Score: {}", snapshot.score),
        mapping.font(32.0),
        colors::SCORE_TEXT,
    );

    if snapshot.phase == Phase::GameOver {
        draw_game_over_overlay(&painter, rect, &mapping, snapshot, game_over);
    }
}

fn draw_game_over_overlay(
    painter: &egui::Painter,
    rect: egui::Rect,
    mapping: &ScreenMapping,
    snapshot: &GameSnapshot,
    game_over: Option<&GameOverSummary>,
) {
    painter.rect_filled(rect, 0.0, colors::OVERLAY);

    let center = rect.center();
    let line = 80.0 * mapping.scale;
    let final_score = game_over.map_or(snapshot.score, |summary| summary.final_score);

    painter.text(
        center - egui::vec2(0.0, line),
        egui::Align2::CENTER_CENTER,
        format!("Your Score: {}", final_score),
        mapping.font(64.0),
        colors::OVERLAY_TEXT,
    );
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        "Game Over!",
        mapping.font(64.0),
        colors::OVERLAY_TEXT,
    );
    if let Some(reason) = game_over.map(|summary| summary.reason).or(snapshot.death_reason) {
        painter.text(
            center + egui::vec2(0.0, line * 0.6),
            egui::Align2::CENTER_CENTER,
            format!("The snake {}", reason),
            mapping.font(32.0),
            colors::OVERLAY_TEXT,
        );
    }
    painter.text(
        center + egui::vec2(0.0, line * 1.2),
        egui::Align2::CENTER_CENTER,
        "Press Enter to Try again",
        mapping.font(40.0),
        colors::OVERLAY_HINT,
    );
}
