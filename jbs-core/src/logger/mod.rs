mod config;

pub use config::{LogConfig, LogFormat, LogLevel, LogOutput};

use std::path::Path;

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

pub struct Logger {
    config: LogConfig,
}

impl Logger {
    pub fn new(config: LogConfig) -> Self {
        Self { config }
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// 安装全局 subscriber。重复调用返回 `LogError::AlreadyInitialized`，不会 panic。
    pub fn init(self) -> Result<LoggerGuard, LogError> {
        let filter = self.build_filter();

        match &self.config.output {
            LogOutput::Stderr => {
                self.init_stderr(filter)?;
                Ok(LoggerGuard { _guards: vec![] })
            }
            LogOutput::File { path, rotation } => {
                let guard = self.init_file(filter, path, rotation)?;
                Ok(LoggerGuard {
                    _guards: vec![guard],
                })
            }
        }
    }

    fn build_filter(&self) -> EnvFilter {
        // RUST_LOG 优先
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(self.config.level.as_str()))
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    }

    fn init_stderr(&self, filter: EnvFilter) -> Result<(), LogError> {
        let registry = tracing_subscriber::registry().with(filter);
        let result = match self.config.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_current_span(true)
                        .with_target(true),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_writer(std::io::stderr)
                        .with_span_events(FmtSpan::CLOSE)
                        .with_target(true),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_writer(std::io::stderr)
                        .with_target(true),
                )
                .try_init(),
        };
        result.map_err(|_| LogError::AlreadyInitialized)
    }

    fn init_file(
        &self,
        filter: EnvFilter,
        path: &Path,
        rotation: &LogRotation,
    ) -> Result<tracing_appender::non_blocking::WorkerGuard, LogError> {
        let file_appender = self.create_file_appender(path, rotation)?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let registry = tracing_subscriber::registry().with(filter);
        let result = match self.config.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(non_blocking)
                        .with_current_span(true)
                        .with_target(true)
                        .with_ansi(false),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_writer(non_blocking)
                        .with_span_events(FmtSpan::CLOSE)
                        .with_target(true)
                        .with_ansi(false),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_writer(non_blocking)
                        .with_target(true)
                        .with_ansi(false),
                )
                .try_init(),
        };
        result.map_err(|_| LogError::AlreadyInitialized)?;

        Ok(guard)
    }

    fn create_file_appender(
        &self,
        path: &Path,
        rotation: &LogRotation,
    ) -> Result<tracing_appender::rolling::RollingFileAppender, LogError> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| LogError::InvalidPath(format!("Invalid log path: {}", path.display())))?;

        std::fs::create_dir_all(dir)?;

        let appender = match rotation {
            LogRotation::Hourly => tracing_appender::rolling::hourly(dir, file_name),
            LogRotation::Daily => tracing_appender::rolling::daily(dir, file_name),
            LogRotation::Never => tracing_appender::rolling::never(dir, file_name),
        };

        Ok(appender)
    }
}

pub struct LoggerGuard {
    _guards: Vec<tracing_appender::non_blocking::WorkerGuard>,
}

#[derive(Default)]
pub struct LoggerBuilder {
    level: Option<LogLevel>,
    format: Option<LogFormat>,
    output: Option<LogOutput>,
}

impl LoggerBuilder {
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    pub fn format(mut self, format: LogFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn output(mut self, output: LogOutput) -> Self {
        self.output = Some(output);
        self
    }

    pub fn stderr(self) -> Self {
        self.output(LogOutput::Stderr)
    }

    pub fn file(self, path: impl Into<std::path::PathBuf>, rotation: LogRotation) -> Self {
        self.output(LogOutput::File {
            path: path.into(),
            rotation,
        })
    }

    pub fn build(self) -> Logger {
        let defaults = LogConfig::default();
        Logger::new(LogConfig {
            level: self.level.unwrap_or(defaults.level),
            format: self.format.unwrap_or(defaults.format),
            output: self.output.unwrap_or(defaults.output),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    Daily,
    Never,
}

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid log path: {0}")]
    InvalidPath(String),

    #[error("Logger already initialized")]
    AlreadyInitialized,
}
