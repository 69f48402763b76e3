use common::config::Validate;
use serde::{Deserialize, Serialize};

/// How playfield units map to screen pixels.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    pub scale: f32,
    pub segment_size: f32,
    pub food_size: f32,
}

impl WindowConfig {
    pub fn inner_size(&self, playfield_width: i64, playfield_height: i64) -> [f32; 2] {
        [
            playfield_width as f32 * self.scale + 16.0,
            playfield_height as f32 * self.scale + 16.0,
        ]
    }
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if !(0.1..=4.0).contains(&self.scale) {
            return Err("window scale must be between 0.1 and 4.0".to_string());
        }
        if self.segment_size <= 0.0 || self.food_size <= 0.0 {
            return Err("segment_size and food_size must be positive".to_string());
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            scale: 0.5,
            segment_size: 20.0,
            food_size: 30.0,
        }
    }
}
