use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use super::theme::{lenient, size_names, DefaultTheme, ThemeResolver, ThemeState};
use crate::app::infrastructure::error::{ConfigError, ConfigResult};
use crate::app::services::journal_files::default_save_dir;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
        }
    }
}

/// Everything persisted between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(
        rename = "save-dir",
        default = "default_save_dir",
        deserialize_with = "lenient_save_dir"
    )]
    pub save_dir: PathBuf,

    #[serde(rename = "window", default, deserialize_with = "lenient")]
    pub window_size: Dimensions,

    #[serde(rename = "config-window", default, deserialize_with = "lenient")]
    pub config_window_size: Dimensions,

    #[serde(default, deserialize_with = "lenient")]
    pub theme: ThemeState,
}

fn lenient_save_dir<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PathBuf, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => Ok(default_save_dir()),
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            save_dir: default_save_dir(),
            window_size: Dimensions::default(),
            config_window_size: Dimensions::default(),
            theme: ThemeState::default(),
        }
    }
}

impl AppConfig {
    /// Load the config at `path`. A missing file gives the defaults; an
    /// unreadable or malformed one is logged and replaced by the defaults.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}: {}. Using defaults.", e, e.detail());
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let contents = fs::read_to_string(path).map_err(ConfigError::Read)?;
        serde_json::from_str(&contents).map_err(ConfigError::Parse)
    }

    /// Save the config as pretty JSON, creating its directory if needed.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(ConfigError::CreateDirectory)?;
            }
        }

        let json = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        fs::write(path, json).map_err(ConfigError::Write)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("daybook");
        path.push("config.json");
        path
    }
}

/// The editable fields of the settings window, as typed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsForm {
    pub save_dir: String,
    pub zoom: String,
    pub text_size: String,
    pub heading_size: String,
}

impl SettingsForm {
    /// Fill the form from the current configuration.
    pub fn from_current<P: DefaultTheme>(save_dir: &Path, theme: &ThemeResolver<P>) -> Self {
        Self {
            save_dir: save_dir.display().to_string(),
            zoom: format!("{:.2}", theme.resolved_zoom()),
            text_size: format!("{:.2}", theme.size_no_zoom(size_names::TEXT)),
            heading_size: format!("{:.2}", theme.size_no_zoom(size_names::SUB_HEADING_TEXT)),
        }
    }

    /// Apply the form. Fields that don't parse, and sizes the theme rejects,
    /// leave the current value untouched.
    pub fn apply<P: DefaultTheme>(&self, save_dir: &mut PathBuf, theme: &mut ThemeResolver<P>) {
        let dir = self.save_dir.trim();
        if !dir.is_empty() {
            *save_dir = PathBuf::from(dir);
        }

        if let Ok(zoom) = self.zoom.trim().parse::<f32>() {
            theme.set_zoom(zoom);
        }

        if let Ok(size) = self.text_size.trim().parse::<f32>() {
            theme.set_size_override(size_names::TEXT, size);
        }

        if let Ok(size) = self.heading_size.trim().parse::<f32>() {
            theme.set_size_override(size_names::SUB_HEADING_TEXT, size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::default_theme::BuiltinTheme;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window_size, Dimensions { width: 640.0, height: 480.0 });
        assert_eq!(config.config_window_size, Dimensions { width: 640.0, height: 480.0 });
        assert_eq!(config.theme, ThemeState::default());
        assert!(config.save_dir.ends_with("daybook"));
    }

    #[test]
    fn test_persisted_key_names() {
        let config = AppConfig {
            save_dir: PathBuf::from("/tmp/pages"),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"save-dir\":\"/tmp/pages\""));
        assert!(json.contains("\"window\":{\"width\":640.0,\"height\":480.0}"));
        assert!(json.contains("\"config-window\""));
        assert!(json.contains("\"theme\":{\"zoom\":1.0"));
    }

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            "save-dir": "/home/me/Documents/journal",
            "window": {"width": 800, "height": 600},
            "config-window": {"width": 400, "height": 300},
            "theme": {
                "zoom": 1.25,
                "sizes": {"text": 16, "subHeadingText": 22},
                "colors": {"background": 1122867}
            }
        }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.save_dir, PathBuf::from("/home/me/Documents/journal"));
        assert_eq!(config.window_size.width, 800.0);
        assert_eq!(config.config_window_size.height, 300.0);
        assert_eq!(config.theme.zoom(), 1.25);
        assert_eq!(config.theme.size_override("text"), Some(16.0));
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"save-dir": "/x"}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.save_dir, PathBuf::from("/x"));
        assert_eq!(config.window_size, Dimensions::default());
        assert_eq!(config.theme, ThemeState::default());
    }

    #[test]
    fn test_null_theme_uses_default() {
        let json = r#"{"save-dir": "/x", "theme": null}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.theme, ThemeState::default());
    }

    #[test]
    fn test_bad_value_keeps_the_rest_of_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "save-dir": "/home/me/journal",
                "window": {"width": 800, "height": 600},
                "config-window": "wide",
                "theme": {"zoom": 2, "colors": {"background": -1}, "sizes": {"text": 16}}
            }"#,
        )
        .unwrap();

        let config = AppConfig::load(&path);

        assert_eq!(config.save_dir, PathBuf::from("/home/me/journal"));
        assert_eq!(config.window_size, Dimensions { width: 800.0, height: 600.0 });
        assert_eq!(config.config_window_size, Dimensions::default());
        assert_eq!(config.theme.zoom(), 2.0);
        assert_eq!(config.theme.color_override("background"), None);
        assert_eq!(config.theme.size_override("text"), Some(16.0));
    }

    #[test]
    fn test_bad_save_dir_uses_default() {
        let config: AppConfig = serde_json::from_str(r#"{"save-dir": 5}"#).unwrap();
        assert_eq!(config.save_dir, default_save_dir());
    }

    #[test]
    fn test_invalid_zoom_corrected_on_load() {
        let json = r#"{"theme": {"zoom": 42}}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.theme.zoom(), 1.0);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let mut config = AppConfig {
            save_dir: dir.path().join("pages"),
            ..Default::default()
        };
        config.window_size.width = 1024.0;

        config.save(&path).unwrap();
        let loaded = AppConfig::load(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("config.json"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_garbage_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(AppConfig::load_from(&path), Err(ConfigError::Parse(_))));
        assert_eq!(AppConfig::load(&path), AppConfig::default());
    }

    #[test]
    fn test_save_directory_failure() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let err = AppConfig::default()
            .save(&blocker.join("sub").join("config.json"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::CreateDirectory(_)));
        assert_eq!(err.to_string(), "Saving configuration");
    }

    #[test]
    fn test_form_from_current() {
        let theme = ThemeResolver::new(ThemeState::new(1.5), BuiltinTheme);
        let form = SettingsForm::from_current(Path::new("/pages"), &theme);
        assert_eq!(form.save_dir, "/pages");
        assert_eq!(form.zoom, "1.50");
        assert_eq!(form.text_size, "14.00");
        assert_eq!(form.heading_size, "18.00");
    }

    #[test]
    fn test_form_apply() {
        let mut theme = ThemeResolver::new(ThemeState::default(), BuiltinTheme);
        let mut save_dir = PathBuf::from("/old");
        let form = SettingsForm {
            save_dir: " /new ".to_string(),
            zoom: "2".to_string(),
            text_size: "16.5".to_string(),
            heading_size: "18.00".to_string(),
        };

        form.apply(&mut save_dir, &mut theme);

        assert_eq!(save_dir, PathBuf::from("/new"));
        assert_eq!(theme.resolved_zoom(), 2.0);
        assert_eq!(theme.size_no_zoom(size_names::TEXT), 16.5);
        // Unchanged heading size is not stored as an override
        assert_eq!(theme.state().size_override(size_names::SUB_HEADING_TEXT), None);
    }

    #[test]
    fn test_form_apply_ignores_bad_input() {
        let mut theme = ThemeResolver::new(ThemeState::new(1.5), BuiltinTheme);
        let mut save_dir = PathBuf::from("/old");
        let form = SettingsForm {
            save_dir: "   ".to_string(),
            zoom: "huge".to_string(),
            text_size: "0.5".to_string(),
            heading_size: "".to_string(),
        };

        form.apply(&mut save_dir, &mut theme);

        assert_eq!(save_dir, PathBuf::from("/old"));
        assert_eq!(theme.resolved_zoom(), 1.5);
        assert_eq!(theme.size_no_zoom(size_names::TEXT), 14.0);
    }

    #[test]
    fn test_form_apply_out_of_range_zoom_resets() {
        let mut theme = ThemeResolver::new(ThemeState::new(3.0), BuiltinTheme);
        let mut save_dir = PathBuf::from("/old");
        let form = SettingsForm {
            zoom: "25".to_string(),
            ..Default::default()
        };

        form.apply(&mut save_dir, &mut theme);

        assert_eq!(theme.resolved_zoom(), 1.0);
    }
}
