use std::{io, process};

use clap::Parser;
use kubeyaml::Opts;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // usage errors exit 1 like every other failure; --help and --version still exit 0
    let opts = match Opts::try_parse() {
        Ok(opts) => opts,
        Err(e) if e.use_stderr() => {
            e.print()?;
            process::exit(1);
        }
        Err(e) => e.exit(),
    };

    kubeyaml::run(&opts, &mut io::stdout().lock(), &mut io::stderr())?;

    Ok(())
}
