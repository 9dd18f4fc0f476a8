use anyhow::Context;
use movies_manager::config::Config;
use movies_manager::repl::start_repl;
use movies_manager::MoviesManager;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    info!(limit = config.limit, "starting");
    let mut manager = MoviesManager::with_limit(config.limit);

    let code = start_repl(&mut manager).context("line editor failed")?;
    info!(code, stored = manager.len(), "exiting");
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
