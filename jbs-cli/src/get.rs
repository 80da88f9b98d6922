use std::io::Write;

use anyhow::{Result, bail};
use clap::Parser;
use jbs_core::BuildSettings;
use jbs_core::settings::constants::keys;

#[derive(Parser)]
pub struct GetCli {
    /// 配置名，例如 NODE_VERSION、LIBRARY_FULL_VERSION（不区分大小写）
    pub name: String,
}

impl GetCli {
    pub fn handle(&self, settings: &BuildSettings, out: &mut impl Write) -> Result<()> {
        let Some(value) = settings.get(&self.name) else {
            bail!(
                "unknown setting `{}`, expected one of: {}",
                self.name,
                keys::ALL.join(", ")
            );
        };
        writeln!(out, "{value}")?;
        Ok(())
    }
}
