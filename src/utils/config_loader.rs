use crate::core::models::{OptionValue, ProcessConfig};
use crate::utils::{Logger, MinifyError, Result};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "ultra-minify.config.json";

/// Loads the process-wide config and layers command-line values on top
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load `ultra-minify.config.json` from `root` if it exists
    pub fn load_from_file(root: &Path) -> Result<Option<ProcessConfig>> {
        let config_path = root.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            Logger::debug(&format!("No {} found, using defaults", CONFIG_FILE_NAME));
            return Ok(None);
        }

        Self::load_from_path(&config_path).map(Some)
    }

    /// Load an explicit config file; a missing file is an error
    pub fn load_from_path(config_path: &Path) -> Result<ProcessConfig> {
        Logger::debug(&format!("Loading config from {}", config_path.display()));

        let content = std::fs::read_to_string(config_path)?;

        let config: ProcessConfig = serde_json::from_str(&content).map_err(|e| {
            MinifyError::config(format!(
                "Failed to parse {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Logger::debug("✅ Config file loaded successfully");
        Ok(config)
    }

    /// Merge file config with command-line values (command line takes precedence)
    pub fn merge_with_cli(file_config: Option<ProcessConfig>, cli: ProcessConfig) -> ProcessConfig {
        let base = file_config.unwrap_or_default();

        ProcessConfig {
            remove_comments: cli.remove_comments.or(base.remove_comments),
            remove_newlines: cli.remove_newlines.or(base.remove_newlines),
            js_compress: cli.js_compress.or(base.js_compress),
            css_compress: cli.css_compress.or(base.css_compress),
            html5: cli.html5.or(base.html5),
        }
    }

    /// Example config file with every key set to its built-in default
    pub fn generate_example() -> String {
        let example = ProcessConfig {
            remove_comments: Some(OptionValue::Flag(true)),
            remove_newlines: Some(OptionValue::Flag(true)),
            js_compress: Some(OptionValue::from("best")),
            css_compress: Some(OptionValue::from("minify")),
            html5: Some(OptionValue::Flag(true)),
        };

        serde_json::to_string_pretty(&example).unwrap_or_else(|_| {
            r#"{
  "remove_comments": true,
  "remove_newlines": true,
  "js_compress": "best",
  "css_compress": "minify",
  "html5": true
}"#
            .to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_file_not_exists() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = ConfigLoader::load_from_file(temp_dir.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_load_from_file_valid() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            r#"{"js_compress": "shrink", "removeComments": false, "unrelated": 1}"#,
        )
        .unwrap();

        let config = ConfigLoader::load_from_file(temp_dir.path())
            .unwrap()
            .unwrap();
        assert_eq!(config.js_compress, Some(OptionValue::from("shrink")));
        assert_eq!(config.remove_comments, Some(OptionValue::Flag(false)));
        assert_eq!(config.html5, None);
    }

    #[test]
    fn test_load_from_path_invalid_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = ConfigLoader::load_from_path(&path).unwrap_err();
        assert!(matches!(err, MinifyError::Config(_)));
    }

    #[test]
    fn test_load_from_path_missing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = ConfigLoader::load_from_path(&temp_dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, MinifyError::Io(_)));
    }

    #[test]
    fn test_merge_with_cli_override() {
        let file_config = ProcessConfig {
            js_compress: Some("clean".into()),
            css_compress: Some("pretty".into()),
            ..Default::default()
        };
        let cli = ProcessConfig {
            js_compress: Some("best".into()),
            ..Default::default()
        };

        let merged = ConfigLoader::merge_with_cli(Some(file_config), cli);
        assert_eq!(merged.js_compress, Some(OptionValue::from("best")));
        assert_eq!(merged.css_compress, Some(OptionValue::from("pretty")));
        assert_eq!(merged.remove_newlines, None);
    }

    #[test]
    fn test_generate_example() {
        let example = ConfigLoader::generate_example();
        let parsed: ProcessConfig = serde_json::from_str(&example).unwrap();

        assert_eq!(parsed.js_compress, Some(OptionValue::from("best")));
        assert_eq!(parsed.css_compress, Some(OptionValue::from("minify")));
        assert!(example.contains("remove_newlines"));
    }
}
