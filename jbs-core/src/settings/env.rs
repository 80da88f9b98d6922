//! 环境变量读取的边界层。
//!
//! 核心的 `BuildSettings` 不直接访问进程环境，而是通过 `EnvSource` 注入，
//! 测试时使用 `MapEnv` 即可，无需修改真实的进程环境。

use std::collections::HashMap;
use std::env;
use std::ffi::OsString;

use super::constants::{HOME_ENV_VAR, TARGETS_DIR_SUFFIX};
use crate::error::{SettingsError, SettingsResult};

/// 按原始字节读取，存在但不是合法 Unicode 的值也会返回 `Some`。
pub trait EnvSource {
    fn var_os(&self, key: &str) -> Option<OsString>;
}

/// 读取真实的进程环境
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var_os(&self, key: &str) -> Option<OsString> {
        env::var_os(key)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, OsString>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvSource for MapEnv {
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }
}

/// 直接字符串拼接，不做路径规范化。
pub fn targets_lib_dir_for(home: &str) -> String {
    format!("{home}{TARGETS_DIR_SUFFIX}")
}

/// 解析目标库目录；`HOME` 缺失时直接失败，不回退到任何默认路径。
pub fn resolve_targets_lib_dir(env: &impl EnvSource) -> SettingsResult<String> {
    let Some(raw) = env.var_os(HOME_ENV_VAR) else {
        tracing::error!(name = HOME_ENV_VAR, "required environment variable is not set");
        return Err(SettingsError::MissingEnvironmentValue { name: HOME_ENV_VAR });
    };
    match raw.into_string() {
        Ok(home) => Ok(targets_lib_dir_for(&home)),
        Err(raw) => {
            tracing::error!(name = HOME_ENV_VAR, value = ?raw, "environment value is not valid unicode");
            Err(SettingsError::NonUnicodeEnvironmentValue {
                name: HOME_ENV_VAR,
                value: raw,
            })
        }
    }
}
