use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;

use lda_qr::cli::Cli;
use lda_qr::{app, Config};

fn main() -> Result<()> {
    let config = Config::from(Cli::parse());
    init_logging(config.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    app::run(&config, &mut out).context("lda-qr run failed")?;
    out.flush().context("flushing stdout")?;
    Ok(())
}

/// `-v` sends plain `info` lines to stdout; otherwise only warnings reach
/// stderr. `RUST_LOG` overrides the level either way.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));

    if verbose {
        builder
            .target(env_logger::Target::Stdout)
            .format(|buf, record| writeln!(buf, "{}", record.args()));
    }

    builder.init();
}
