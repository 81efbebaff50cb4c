use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

use super::filter::editor::ClearBehavior;

/// Application settings.
/// NOTE: TypeScript mirror types are in ui/src/types.ts
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Settings {
    /// JSON alert file to browse instead of the built-in sample alerts
    #[serde(default)]
    pub alerts_path: Option<PathBuf>,
    /// Whether "Clear all" in the filter editor commits immediately
    #[serde(default)]
    pub clear_behavior: ClearBehavior,
}

pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(app_config_dir: PathBuf) -> Self {
        Self {
            config_path: app_config_dir.join("settings.json"),
        }
    }

    /// Read settings, falling back to defaults if the file is missing or
    /// unreadable.
    pub fn load(&self) -> Settings {
        if !self.config_path.exists() {
            return Settings::default();
        }
        let parsed: Result<Settings, String> = fs::read_to_string(&self.config_path)
            .map_err(|e| e.to_string())
            .and_then(|content| serde_json::from_str(&content).map_err(|e| e.to_string()));
        match parsed {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring settings at {:?}: {}", self.config_path, e);
                Settings::default()
            }
        }
    }

    pub fn save(&self, settings: &Settings) -> io::Result<()> {
        // Ensure directory exists
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.config_path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().to_path_buf());

        let default = manager.load();
        assert_eq!(default.clear_behavior, ClearBehavior::Immediate);
        assert_eq!(default.alerts_path, None);

        let new_settings = Settings {
            alerts_path: Some(PathBuf::from("/tmp/alerts.json")),
            clear_behavior: ClearBehavior::Staged,
        };

        manager.save(&new_settings).unwrap();
        let loaded = manager.load();

        assert_eq!(loaded, new_settings);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("settings.json"), "{ not json").unwrap();

        let manager = ConfigManager::new(dir.path().to_path_buf());
        assert_eq!(manager.load(), Settings::default());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("settings.json"), r#"{ "clear_behavior": "staged" }"#).unwrap();

        let manager = ConfigManager::new(dir.path().to_path_buf());
        let loaded = manager.load();
        assert_eq!(loaded.clear_behavior, ClearBehavior::Staged);
        assert_eq!(loaded.alerts_path, None);
    }
}
