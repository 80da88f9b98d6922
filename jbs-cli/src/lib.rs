mod get;
mod list;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jbs_core::BuildSettings;
use jbs_core::logger::{LogFormat, LogLevel, LogRotation, Logger, LoggerGuard};
use jbs_core::settings::{EnvSource, holder};

pub use list::OutputFormat;

#[derive(Parser)]
#[command(name = "jbs")]
#[command(about = "Print the shared J2V8 build settings", long_about = None)]
pub struct Cli {
    /// 覆盖文件（TOML），优先于 J2V8_BUILD_SETTINGS_PATH
    #[arg(long, global = true, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    #[arg(long, global = true, default_value = "warn", value_parser = parse_log_level)]
    pub log_level: LogLevel,

    #[arg(long, global = true, default_value = "compact", value_parser = parse_log_format)]
    pub log_format: LogFormat,

    /// 日志写入文件而不是 stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn init_logging(&self) -> Result<LoggerGuard> {
        let builder = Logger::builder()
            .level(self.log_level)
            .format(self.log_format);
        let builder = match &self.log_file {
            Some(path) => builder.file(path.clone(), LogRotation::Never),
            None => builder.stderr(),
        };
        Ok(builder.build().init()?)
    }

    pub fn load_settings(&self, env: &impl EnvSource) -> Result<&'static BuildSettings> {
        holder::load_settings(env, self.settings.as_deref())
            .context("failed to load build settings")
    }

    pub fn handle(&self, settings: &BuildSettings, out: &mut impl Write) -> Result<()> {
        match &self.command {
            Commands::Get(get_cli) => get_cli.handle(settings, out),
            Commands::List(list_cli) => list_cli.handle(settings, out),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// 输出单个配置值
    Get(get::GetCli),
    /// 输出全部配置值
    List(list::ListCli),
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::parse(s).ok_or_else(|| format!("unknown log level `{s}`"))
}

fn parse_log_format(s: &str) -> Result<LogFormat, String> {
    LogFormat::parse(s).ok_or_else(|| format!("unknown log format `{s}`"))
}

#[cfg(test)]
mod tests {
    use jbs_core::{MapEnv, SettingsError};

    use super::*;

    fn run(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let settings = BuildSettings::with_home("/home/alice");
        let mut out = Vec::new();
        cli.handle(&settings, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn get_prints_value() {
        assert_eq!(run(&["jbs", "get", "NODE_VERSION"]).unwrap(), "7.9.0\n");
        assert_eq!(
            run(&["jbs", "get", "TARGETS_LIB_DIR"]).unwrap(),
            "/home/alice/src/j2v8_targets\n"
        );
    }

    #[test]
    fn global_options() {
        let cli = Cli::try_parse_from([
            "jbs",
            "list",
            "--log-level",
            "debug",
            "--settings",
            "/etc/jbs.toml",
        ])
        .unwrap();
        assert_eq!(cli.log_level, LogLevel::Debug);
        assert_eq!(cli.log_format, LogFormat::Compact);
        assert_eq!(cli.settings, Some(PathBuf::from("/etc/jbs.toml")));
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn log_format_option() {
        let cli = Cli::try_parse_from(["jbs", "get", "NODE_VERSION", "--log-format", "json"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Json);
        assert!(Cli::try_parse_from(["jbs", "list", "--log-format", "xml"]).is_err());
    }

    #[test]
    fn rejects_unknown_log_level() {
        assert!(Cli::try_parse_from(["jbs", "list", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn requires_subcommand() {
        assert!(Cli::try_parse_from(["jbs"]).is_err());
    }

    // 以下两个测试都以失败告终，不会向全局 holder 发布配置
    #[test]
    fn load_settings_fails_without_home() {
        let cli = Cli::try_parse_from(["jbs", "list"]).unwrap();
        let err = cli.load_settings(&MapEnv::new()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SettingsError>(),
            Some(SettingsError::MissingEnvironmentValue { name: "HOME" })
        ));
        assert!(format!("{err:#}").contains("missing environment variable: HOME"));
    }

    #[test]
    fn load_settings_fails_on_missing_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let cli = Cli::try_parse_from([
            "jbs",
            "list",
            "--settings",
            missing.to_str().unwrap(),
        ])
        .unwrap();
        let env = MapEnv::new().with("HOME", "/home/alice");
        let err = cli.load_settings(&env).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SettingsError>(),
            Some(SettingsError::ReadOverride { path, .. }) if path == &missing
        ));
    }
}
