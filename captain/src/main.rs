//! The `captain` binary: dispatches its own arguments through the standard
//! dispatcher and waits for the spawned program.

use anyhow::{Context, anyhow};
use captain::{Captain, Settings, logging};
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();
    logging::init(&settings).map_err(|e| anyhow!(e))?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let captain = Captain::standard_with_settings(&settings);

    let mut child = captain
        .command(args)?
        .context("failed to launch command")?;
    let status = child.wait().context("failed to wait for command")?;
    debug!(%status, "command finished");

    std::process::exit(status.code().unwrap_or(1));
}
