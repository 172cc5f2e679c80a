use thiserror::Error;
use waypoint_core::{ConfigError, InputError, LoadError, LookupError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("no trips loaded (use `load`)")]
    NoExportLoaded,

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Error message followed by its chain of causes, "a: b: c".
pub fn report(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
