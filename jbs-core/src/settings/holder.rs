use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::constants::SETTINGS_PATH_ENV_VAR;
use super::entity::BuildSettings;
use super::env::EnvSource;
use super::overrides::SettingsOverride;
use crate::error::SettingsResult;

static SETTINGS: OnceLock<BuildSettings> = OnceLock::new();

fn override_path(env: &impl EnvSource, explicit: Option<&Path>) -> Option<PathBuf> {
    // 显式传入的路径优先，其次是环境变量 J2V8_BUILD_SETTINGS_PATH
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }
    env.var_os(SETTINGS_PATH_ENV_VAR)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
}

pub fn get_settings() -> Option<&'static BuildSettings> {
    SETTINGS.get()
}

/// 在首次加载前注入配置（例如测试或嵌入场景）。
///
/// - 成功：返回 `Ok(())`
/// - 若已初始化：返回 `Err`
pub fn try_set_settings(settings: BuildSettings) -> Result<(), &'static str> {
    SETTINGS
        .set(settings)
        .map_err(|_| "settings already initialized")
}

/// 解析环境并应用覆盖文件，返回一份独立的配置（不写入全局）。
pub fn build_settings(
    env: &impl EnvSource,
    explicit_override: Option<&Path>,
) -> SettingsResult<BuildSettings> {
    let mut settings = BuildSettings::from_env(env)?;
    if let Some(path) = override_path(env, explicit_override) {
        let ov = SettingsOverride::load(&path)?;
        tracing::debug!(path = %path.display(), empty = ov.is_empty(), "settings override loaded");
        settings = ov.apply(settings);
    }

    tracing::info!(
        node_version = %settings.node_version(),
        library_version = %settings.library_full_version(),
        targets_lib_dir = settings.targets_lib_dir(),
        "build settings loaded"
    );
    Ok(settings)
}

/// 首次调用时构造并发布全局配置，之后的调用直接返回已发布的值。
pub fn load_settings(
    env: &impl EnvSource,
    explicit_override: Option<&Path>,
) -> SettingsResult<&'static BuildSettings> {
    if let Some(settings) = SETTINGS.get() {
        tracing::debug!("build settings already initialized");
        return Ok(settings);
    }
    let settings = build_settings(env, explicit_override)?;
    Ok(SETTINGS.get_or_init(|| settings))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::error::SettingsError;
    use crate::settings::env::MapEnv;

    #[test]
    fn build_without_override() {
        let env = MapEnv::new().with("HOME", "/home/alice");
        let settings = build_settings(&env, None).unwrap();
        assert_eq!(settings, BuildSettings::with_home("/home/alice"));
    }

    #[test]
    fn build_fails_without_home() {
        let err = build_settings(&MapEnv::new(), None).unwrap_err();
        assert!(matches!(err, SettingsError::MissingEnvironmentValue { name: "HOME" }));
    }

    #[test]
    fn build_reads_override_from_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"node_version = "8.1.0""#).unwrap();
        let env = MapEnv::new()
            .with("HOME", "/home/alice")
            .with(SETTINGS_PATH_ENV_VAR, file.path());

        let settings = build_settings(&env, None).unwrap();
        assert_eq!(settings.node_version_string(), "8.1.0");
    }

    #[test]
    fn explicit_override_wins() {
        let mut from_env = tempfile::NamedTempFile::new().unwrap();
        writeln!(from_env, r#"node_version = "8.1.0""#).unwrap();
        let mut explicit = tempfile::NamedTempFile::new().unwrap();
        writeln!(explicit, r#"node_version = "9.0.0""#).unwrap();
        let env = MapEnv::new()
            .with("HOME", "/home/alice")
            .with(SETTINGS_PATH_ENV_VAR, from_env.path());

        let settings = build_settings(&env, Some(explicit.path())).unwrap();
        assert_eq!(settings.node_version_string(), "9.0.0");
    }

    #[test]
    fn empty_override_env_is_ignored() {
        let env = MapEnv::new()
            .with("HOME", "/home/alice")
            .with(SETTINGS_PATH_ENV_VAR, "");
        assert!(build_settings(&env, None).is_ok());
    }

    #[test]
    fn missing_override_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let env = MapEnv::new().with("HOME", "/home/alice");
        let err = build_settings(&env, Some(dir.path().join("nope.toml").as_path())).unwrap_err();
        assert!(matches!(err, SettingsError::ReadOverride { .. }));
    }

    // 全局状态只在这一个测试里触碰
    #[test]
    fn load_publishes_once() {
        let first = load_settings(&MapEnv::new().with("HOME", "/home/alice"), None).unwrap();
        assert_eq!(first.targets_lib_dir(), "/home/alice/src/j2v8_targets");

        let second = load_settings(&MapEnv::new().with("HOME", "/home/bob"), None).unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(second.targets_lib_dir(), "/home/alice/src/j2v8_targets");

        assert!(std::ptr::eq(get_settings().unwrap(), first));
        assert_eq!(
            try_set_settings(BuildSettings::with_home("/home/carol")),
            Err("settings already initialized")
        );
    }
}
