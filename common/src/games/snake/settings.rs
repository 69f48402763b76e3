use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::{Direction, Playfield, Point};

/// Playfield bounds must stay within this magnitude so movement can never overflow.
pub const PLAYFIELD_COORDINATE_LIMIT: i32 = 1_000_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameSettings {
    pub playfield: Playfield,
    pub start_position: Point,
    pub start_direction: Direction,
    pub speed: i32,
    pub tick_interval_ms: u32,
    pub initial_tail_length: usize,
    /// Extra tail capacity per food eaten; 0 keeps the tail at its initial length.
    pub tail_growth_per_food: usize,
    pub food_margin: i32,
    pub food_tolerance: i32,
    #[serde(default = "default_self_collision_enabled")]
    pub self_collision_enabled: bool,
}

fn default_self_collision_enabled() -> bool {
    true
}

impl GameSettings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms as u64)
    }

    /// Region food may spawn in: the playfield minus the margin on every side.
    pub fn food_region(&self) -> Playfield {
        self.playfield.shrink(self.food_margin)
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        let bounds = [
            self.playfield.left,
            self.playfield.top,
            self.playfield.right,
            self.playfield.bottom,
        ];
        let allowed = -PLAYFIELD_COORDINATE_LIMIT..=PLAYFIELD_COORDINATE_LIMIT;
        if bounds.iter().any(|bound| !allowed.contains(bound)) {
            return Err(format!(
                "playfield bounds must be within -{limit}..={limit}",
                limit = PLAYFIELD_COORDINATE_LIMIT
            ));
        }
        if self.playfield.width() < 100 || self.playfield.height() < 100 {
            return Err("playfield must be at least 100x100".to_string());
        }
        if !self.playfield.contains(&self.start_position) {
            return Err("start_position must be inside the playfield".to_string());
        }
        if !(1..=50).contains(&self.speed) {
            return Err("speed must be between 1 and 50".to_string());
        }
        if !(10..=1000).contains(&self.tick_interval_ms) {
            return Err("tick_interval_ms must be between 10 and 1000".to_string());
        }
        if self.initial_tail_length > 100 {
            return Err("initial_tail_length must not exceed 100".to_string());
        }
        if self.tail_growth_per_food > 10 {
            return Err("tail_growth_per_food must not exceed 10".to_string());
        }
        if self.food_margin < 1 {
            return Err("food_margin must be at least 1".to_string());
        }
        if self.food_region().is_empty() {
            return Err("food_margin leaves no room to spawn food".to_string());
        }
        if !(0..=100).contains(&self.food_tolerance) {
            return Err("food_tolerance must be between 0 and 100".to_string());
        }
        Ok(())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            playfield: Playfield::new(-300, -300, 1580, 740),
            start_position: Point::new(300, 300),
            start_direction: Direction::Right,
            speed: 5,
            tick_interval_ms: 50,
            initial_tail_length: 3,
            tail_growth_per_food: 1,
            food_margin: 30,
            food_tolerance: 20,
            self_collision_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigSerializer, YamlConfigSerializer};
    use crate::games::SessionRng;
    use crate::games::snake::{Phase, SnakeGameState};

    #[test]
    fn test_default_settings_are_valid() {
        assert!(GameSettings::default().validate().is_ok());
    }

    #[test]
    fn test_default_food_region_is_strictly_inside_playfield() {
        let settings = GameSettings::default();
        let region = settings.food_region();
        assert_eq!(region, Playfield::new(-270, -270, 1550, 710));
        assert!(settings.playfield.contains(&Point::new(region.left, region.top)));
        assert!(settings.playfield.contains(&Point::new(region.right - 1, region.bottom - 1)));
    }

    #[test]
    fn test_start_outside_playfield_is_rejected() {
        let settings = GameSettings {
            start_position: Point::new(1580, 0),
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_oversized_playfield_is_rejected() {
        let settings = GameSettings {
            playfield: Playfield::new(-2_000_000_000, -2_000_000_000, 2_000_000_000, 2_000_000_000),
            ..GameSettings::default()
        };
        assert!(settings.validate().unwrap_err().contains("playfield bounds"));
    }

    #[test]
    fn test_playfield_at_integer_edge_is_rejected() {
        let settings = GameSettings {
            playfield: Playfield::new(0, 0, i32::MAX, 1000),
            start_position: Point::new(i32::MAX - 3, 500),
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());

        let settings = GameSettings {
            playfield: Playfield::new(i32::MIN, 0, 1000, 1000),
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_largest_allowed_playfield_ticks_to_the_wall() {
        let limit = PLAYFIELD_COORDINATE_LIMIT;
        let settings = GameSettings {
            playfield: Playfield::new(-limit, -limit, limit, limit),
            start_position: Point::new(limit - 3, 0),
            speed: 50,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_ok());

        let mut state = SnakeGameState::new(settings, SessionRng::new(1));
        state.tick();
        assert_eq!(state.head(), Point::new(limit + 47, 0));
        assert_eq!(state.phase(), Phase::GameOver);
    }

    #[test]
    fn test_huge_margin_is_rejected() {
        let settings = GameSettings {
            food_margin: 600,
            ..GameSettings::default()
        };
        assert_eq!(
            settings.validate(),
            Err("food_margin leaves no room to spawn food".to_string())
        );
    }

    #[test]
    fn test_missing_self_collision_flag_defaults_to_enabled() {
        let yaml = r#"
            playfield: { left: 0, top: 0, right: 400, bottom: 400 }
            start_position: { x: 200, y: 200 }
            start_direction: Up
            speed: 10
            tick_interval_ms: 100
            initial_tail_length: 3
            tail_growth_per_food: 0
            food_margin: 20
            food_tolerance: 10
        "#;
        let settings: GameSettings = YamlConfigSerializer::new().deserialize(yaml).unwrap();
        assert!(settings.self_collision_enabled);
        assert_eq!(settings.start_direction, Direction::Up);
        assert!(settings.validate().is_ok());
    }
}
