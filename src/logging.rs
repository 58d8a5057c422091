use crate::config::{LogConfig, LogFormat};
use thiserror::Error;
use tracing_subscriber::{fmt, prelude::*, registry, util::TryInitError, EnvFilter};

#[derive(Debug, Error)]
#[error("failed to initialize logging: {0}")]
pub struct LoggingError(#[from] TryInitError);

pub fn init_logging(config: &LogConfig) -> Result<(), LoggingError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let formatting_layer = match config.format {
        LogFormat::Json => fmt::layer().json().boxed(),
        LogFormat::Pretty => fmt::layer().pretty().boxed(),
    };

    registry()
        .with(env_filter)
        .with(formatting_layer)
        .try_init()?;

    Ok(())
}
