use std::fmt;
use std::path::Path;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::constants::{DEFAULT_LIBRARY_VERSION, DEFAULT_NODE_VERSION, LIBRARY_VERSION_SUFFIX, keys};
use super::env::{EnvSource, resolve_targets_lib_dir, targets_lib_dir_for};
use crate::error::SettingsResult;
use crate::version::{VersionSuffix, VersionTriple};

/// 构建流程共享的配置：版本号与目标库目录。
///
/// 启动时构造一次，之后只读；通过引用传给各个使用方。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSettings {
    node_version: VersionTriple,
    library_version: VersionTriple,
    library_version_suffix: VersionSuffix,
    targets_lib_dir: String,
}

impl BuildSettings {
    pub fn new(
        node_version: VersionTriple,
        library_version: VersionTriple,
        library_version_suffix: VersionSuffix,
        targets_lib_dir: impl Into<String>,
    ) -> Self {
        Self {
            node_version,
            library_version,
            library_version_suffix,
            targets_lib_dir: targets_lib_dir.into(),
        }
    }

    /// 内置默认版本 + 注入的 home 目录
    pub fn with_home(home: &str) -> Self {
        Self::new(
            DEFAULT_NODE_VERSION,
            DEFAULT_LIBRARY_VERSION,
            VersionSuffix::new(LIBRARY_VERSION_SUFFIX),
            targets_lib_dir_for(home),
        )
    }

    pub fn from_env(env: &impl EnvSource) -> SettingsResult<Self> {
        let targets_lib_dir = resolve_targets_lib_dir(env)?;
        Ok(Self::new(
            DEFAULT_NODE_VERSION,
            DEFAULT_LIBRARY_VERSION,
            VersionSuffix::new(LIBRARY_VERSION_SUFFIX),
            targets_lib_dir,
        ))
    }

    pub fn node_version(&self) -> VersionTriple {
        self.node_version
    }

    pub fn node_version_string(&self) -> String {
        self.node_version.render()
    }

    pub fn library_version(&self) -> VersionTriple {
        self.library_version
    }

    pub fn library_version_string(&self) -> String {
        self.library_version.render()
    }

    pub fn library_version_suffix(&self) -> &VersionSuffix {
        &self.library_version_suffix
    }

    /// 带后缀的版本号，例如 `5.3.0-SNAPSHOT`
    pub fn library_full_version(&self) -> String {
        self.library_version_suffix
            .append_to(&self.library_version_string())
    }

    pub fn targets_lib_dir(&self) -> &str {
        &self.targets_lib_dir
    }

    pub fn targets_lib_path(&self) -> &Path {
        Path::new(&self.targets_lib_dir)
    }

    pub(crate) fn set_node_version(&mut self, version: VersionTriple) {
        self.node_version = version;
    }

    pub(crate) fn set_library_version(&mut self, version: VersionTriple) {
        self.library_version = version;
    }

    pub(crate) fn set_library_version_suffix(&mut self, suffix: VersionSuffix) {
        self.library_version_suffix = suffix;
    }

    pub fn exports(&self) -> Vec<SettingExport> {
        use SettingValue::{Integer, Text};

        let node = self.node_version;
        let library = self.library_version;
        vec![
            SettingExport::new(keys::NODE_VERSION_MAJOR, Integer(node.major)),
            SettingExport::new(keys::NODE_VERSION_MINOR, Integer(node.minor)),
            SettingExport::new(keys::NODE_VERSION_PATCH, Integer(node.patch)),
            SettingExport::new(keys::NODE_VERSION, Text(self.node_version_string())),
            SettingExport::new(keys::LIBRARY_VERSION_MAJOR, Integer(library.major)),
            SettingExport::new(keys::LIBRARY_VERSION_MINOR, Integer(library.minor)),
            SettingExport::new(keys::LIBRARY_VERSION_PATCH, Integer(library.patch)),
            SettingExport::new(
                keys::LIBRARY_VERSION_SUFFIX,
                Text(self.library_version_suffix.as_str().to_string()),
            ),
            SettingExport::new(keys::LIBRARY_VERSION, Text(self.library_version_string())),
            SettingExport::new(keys::LIBRARY_FULL_VERSION, Text(self.library_full_version())),
            SettingExport::new(keys::TARGETS_LIB_DIR, Text(self.targets_lib_dir.clone())),
        ]
    }

    /// 按名称取值，名称不区分大小写
    pub fn get(&self, name: &str) -> Option<SettingValue> {
        self.exports()
            .into_iter()
            .find(|export| export.name.eq_ignore_ascii_case(name))
            .map(|export| export.value)
    }
}

impl Serialize for BuildSettings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let exports = self.exports();
        let mut map = serializer.serialize_map(Some(exports.len()))?;
        for export in &exports {
            map.serialize_entry(export.name, &export.value)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    Integer(u32),
    Text(String),
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Integer(value) => write!(f, "{value}"),
            SettingValue::Text(value) => f.write_str(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingExport {
    pub name: &'static str,
    pub value: SettingValue,
}

impl SettingExport {
    fn new(name: &'static str, value: SettingValue) -> Self {
        Self { name, value }
    }
}
