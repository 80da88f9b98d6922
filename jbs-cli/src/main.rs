use std::io::Write;

use clap::Parser;
use jbs_cli::Cli;
use jbs_core::ProcessEnv;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = cli.init_logging()?;

    // HOME 缺失等错误在这里直接终止，构建流程不能在缺少配置的情况下继续
    let settings = match cli.load_settings(&ProcessEnv) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(error = ?e, "build settings unavailable, aborting");
            return Err(e);
        }
    };

    let mut stdout = std::io::stdout().lock();
    cli.handle(settings, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
