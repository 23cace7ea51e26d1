use serde::{Deserialize, Serialize};
use snake_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use snake_engine::game::SnakeSettings;

const CONFIG_FILE_NAME: &str = "snake_desktop_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>
{
    ConfigManager::from_yaml_file(&get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub board_width: u32,
    pub board_height: u32,
    pub unit_size: u32,
    pub tick_interval_ms: u64,
    pub high_score_file: String,
}

impl Config {
    pub fn session_settings(&self) -> SnakeSettings {
        SnakeSettings {
            board_width: self.board_width,
            board_height: self.board_height,
            unit_size: self.unit_size,
            tick_interval: std::time::Duration::from_millis(self.tick_interval_ms),
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.session_settings().validate()?;
        if self.high_score_file.is_empty() {
            return Err("high_score_file must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_width: 500,
            board_height: 500,
            unit_size: 25,
            tick_interval_ms: 75,
            high_score_file: "snake_high_score.txt".to_string(),
        }
    }
}
