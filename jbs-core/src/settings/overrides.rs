use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::entity::BuildSettings;
use crate::error::{SettingsError, SettingsResult};
use crate::version::{VersionSuffix, VersionTriple};

/// 用户可覆盖的配置项（TOML）。
///
/// ```toml
/// node_version = "8.1.0"
/// library_version = "5.4.0"
/// library_version_suffix = "-SNAPSHOT"
/// ```
///
/// 未出现的键保持默认值；目标库目录不可覆盖。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsOverride {
    pub node_version: Option<VersionTriple>,
    pub library_version: Option<VersionTriple>,
    pub library_version_suffix: Option<VersionSuffix>,
}

impl SettingsOverride {
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load(path: &Path) -> SettingsResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::ReadOverride {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| SettingsError::ParseOverride {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.node_version.is_none()
            && self.library_version.is_none()
            && self.library_version_suffix.is_none()
    }

    pub fn apply(self, mut settings: BuildSettings) -> BuildSettings {
        if let Some(version) = self.node_version {
            tracing::debug!(%version, "override node_version");
            settings.set_node_version(version);
        }
        if let Some(version) = self.library_version {
            tracing::debug!(%version, "override library_version");
            settings.set_library_version(version);
        }
        if let Some(suffix) = self.library_version_suffix {
            tracing::debug!(%suffix, "override library_version_suffix");
            settings.set_library_version_suffix(suffix);
        }
        settings
    }
}
