use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::snake::GameSettings;
use serde::{Deserialize, Serialize};

use super::WindowConfig;

const CONFIG_FILE_NAME: &str = "snake_arcade_config.yaml";

pub fn get_default_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: &str,
) -> ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct ClientConfig {
    pub game: GameSettings,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub verbose_logging: bool,
    /// Fixed food sequence when set; random otherwise.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.window.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer, InMemoryConfigProvider};
    use common::games::snake::Point;

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_arcade_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ClientConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_survives_yaml() {
        let default_config = ClientConfig::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        assert!(serialized.contains("tick_interval_ms: 50"));
        let deserialized: ClientConfig = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_manager_saves_and_reloads_file() {
        let config = ClientConfig {
            seed: Some(1234),
            verbose_logging: true,
            ..ClientConfig::default()
        };
        let manager = get_config_manager(&get_temp_file_path());

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);
        assert_eq!(manager.get_config().unwrap(), config);
    }

    #[test]
    fn test_missing_file_returns_default_config() {
        let manager = get_config_manager("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_get_or_create_writes_defaults() {
        let path = get_temp_file_path();
        let manager = get_config_manager(&path);

        let config = manager.get_or_create_config().unwrap();
        assert_eq!(config, ClientConfig::default());

        let provider = FileContentConfigProvider::new(path.as_str());
        let written = provider.get_config_content().unwrap();
        assert!(written.is_some_and(|content| content.contains("food_tolerance: 20")));
    }

    #[test]
    fn test_optional_sections_fall_back_to_defaults() {
        let content = r#"
            game:
              playfield: { left: -300, top: -300, right: 1580, bottom: 740 }
              start_position: { x: 300, y: 300 }
              start_direction: Right
              speed: 5
              tick_interval_ms: 50
              initial_tail_length: 3
              tail_growth_per_food: 1
              food_margin: 30
              food_tolerance: 20
        "#;
        let provider = InMemoryConfigProvider::new(Some(content.to_string()));
        let manager: ConfigManager<_, ClientConfig, _> =
            ConfigManager::new(provider, YamlConfigSerializer::new());

        let config = manager.get_config().unwrap();
        assert_eq!(config.window, WindowConfig::default());
        assert_eq!(config.seed, None);
        assert_eq!(config.game.start_position, Point::new(300, 300));
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            game:
              playfield: { left: 0, top: 0, right: 50, bottom: 50 }
              start_position: { x: 10, y: 10 }
              start_direction: Right
              speed: 5
              tick_interval_ms: 50
              initial_tail_length: 3
              tail_growth_per_food: 1
              food_margin: 5
              food_tolerance: 20
        "#;
        let provider = InMemoryConfigProvider::new(Some(invalid_config_content.to_string()));
        let manager: ConfigManager<_, ClientConfig, _> =
            ConfigManager::new(provider, YamlConfigSerializer::new());

        let error = manager.get_config().unwrap_err();
        assert!(error.contains("playfield must be at least 100x100"));
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let provider = InMemoryConfigProvider::new(Some("game: [not, a, map".to_string()));
        let manager: ConfigManager<_, ClientConfig, _> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());
    }
}
