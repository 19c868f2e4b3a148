use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use unicode_normalization_prepare::Config;

fn main() -> anyhow::Result<()>
{
    init_logger();

    let config = Config::parse();

    unicode_normalization_prepare::run(&config)?;

    Ok(())
}

/// логи в stderr, без времени; уровень - RUST_LOG, по умолчанию info
fn init_logger()
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .init();
}
