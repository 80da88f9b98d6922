use std::io::Write;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use jbs_core::{BuildSettings, SettingValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// 对齐的 `NAME  value`
    Text,
    /// 可被 POSIX shell source 的 `NAME=value`
    Env,
    Json,
}

#[derive(Parser)]
pub struct ListCli {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl ListCli {
    pub fn handle(&self, settings: &BuildSettings, out: &mut impl Write) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                let exports = settings.exports();
                let width = exports.iter().map(|e| e.name.len()).max().unwrap_or(0);
                for export in &exports {
                    writeln!(out, "{:<width$}  {}", export.name, export.value)?;
                }
            }
            OutputFormat::Env => {
                for export in settings.exports() {
                    match &export.value {
                        SettingValue::Integer(v) => writeln!(out, "{}={v}", export.name)?,
                        SettingValue::Text(v) => writeln!(out, "{}={}", export.name, shell_quote(v))?,
                    }
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, settings)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
