use anyhow::Result;
use clap::Parser;
use questions::{run, Cli};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(&cli, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
