use eframe::egui::Color32;

pub const BACKGROUND: Color32 = Color32::from_rgb(0xB9, 0x67, 0xFF);
pub const BORDER: Color32 = Color32::from_rgb(0x28, 0x4B, 0x4B);
pub const SNAKE_HEAD: Color32 = Color32::from_rgb(0x00, 0xFF, 0x00);
pub const SNAKE_TAIL: Color32 = Color32::from_rgb(0x00, 0xC8, 0x00);
pub const FOOD: Color32 = Color32::from_rgb(0xFF, 0x00, 0x00);
pub const SCORE_TEXT: Color32 = Color32::WHITE;
pub const OVERLAY: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 235);
pub const OVERLAY_TEXT: Color32 = Color32::from_rgb(0xDD, 0xDD, 0xDD);
pub const OVERLAY_HINT: Color32 = Color32::from_rgb(0x00, 0xDD, 0x00);
