//! On-disk settings: the host values the CLI persists between runs.

use crate::data_type::DataTypeValue;
use crate::error::ConfigResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strapi_mesh_types::{ConnectionConfig, DataSourceValue, SelectionResult};
use tracing::info;

/// Default settings file name, relative to the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "strapi-mesh.toml";

/// Everything persisted in `strapi-mesh.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Request drafts through the `unpublished` variant.
    pub unpublished: bool,
    pub data_source: DataSourceValue,
    pub data_type: DataTypeValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<SelectionResult>,
}

impl Settings {
    pub fn default_path() -> PathBuf {
        PathBuf::from(DEFAULT_SETTINGS_FILE)
    }

    /// Loads settings from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            info!("No settings file found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let settings = toml::from_str::<Settings>(&contents)?;
        info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Writes settings to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }

    pub fn connection(&self) -> &ConnectionConfig {
        self.data_source.connection()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::data_source_value;
    use strapi_mesh_types::{AllowList, ContentTypeConfig, UNPUBLISHED_VARIANT};
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.data_source.base_url.is_empty());
        assert!(settings.data_type.custom.is_empty());
    }

    #[test]
    fn round_trip_through_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("strapi-mesh.toml");

        let mut hero = ContentTypeConfig::new("Heroes", "hero", "heroes");
        hero.display_field = Some("name".into());
        let settings = Settings {
            unpublished: true,
            data_source: data_source_value(&ConnectionConfig::new(
                "https://cms.example.com/",
                "secret",
            )),
            data_type: DataTypeValue::with_custom(AllowList::PerCollection {
                content_types: vec![hero],
            }),
            selection: Some(SelectionResult::new("doc-1", "heroes")),
        };

        settings.save_to(&path).unwrap();
        let loaded = Settings::load_from(&path).unwrap();

        assert_eq!(loaded, settings);
        assert_eq!(loaded.data_source.base_url, "https://cms.example.com/api");
        assert!(loaded.data_source.variant(UNPUBLISHED_VARIANT).is_some());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("strapi-mesh.toml");
        std::fs::write(
            &path,
            r#"
unpublished = true

[data_source.customPublic]
apiUrl = "http://localhost:1337"
apiToken = "tok"
"#,
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert!(settings.unpublished);
        assert!(settings.connection().is_complete());
        assert_eq!(settings.data_type, DataTypeValue::default());
        assert!(settings.selection.is_none());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("strapi-mesh.toml");
        std::fs::write(&path, "unpublished = [not toml").unwrap();

        assert!(matches!(
            Settings::load_from(&path),
            Err(crate::ConfigError::TomlDe(_))
        ));
    }
}
