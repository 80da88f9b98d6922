//! 统一的错误处理
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    /// 必需的环境变量不存在，构建流程无法继续。
    #[error("missing environment variable: {name}")]
    MissingEnvironmentValue { name: &'static str },

    /// 变量存在，但不是合法的 Unicode。
    #[error("environment variable {name} is not valid unicode: {value:?}")]
    NonUnicodeEnvironmentValue { name: &'static str, value: OsString },

    #[error("invalid version `{0}`, expected major.minor.patch")]
    InvalidVersion(String),

    #[error("failed to read settings file {path}: {source}")]
    ReadOverride {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse settings file {path}: {source}")]
    ParseOverride {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type SettingsResult<T> = Result<T, SettingsError>;
