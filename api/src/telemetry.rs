//! Tracing subscriber setup.

use kg_shared::{LogFormat, LoggingConfig};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber
///
/// `RUST_LOG` wins over the configured level. Fails if a subscriber is
/// already installed or the filter does not parse.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))?;
    let subscriber = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => subscriber
            .with(fmt::layer().json().with_target(true))
            .try_init()?,
        LogFormat::Pretty => subscriber
            .with(fmt::layer().pretty().with_target(true))
            .try_init()?,
        LogFormat::Compact => subscriber
            .with(fmt::layer().compact().with_target(true))
            .try_init()?,
    }

    Ok(())
}
