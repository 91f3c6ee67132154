use thiserror::Error;

/// Errors raised while configuring a reporter.
///
/// Construction is the only fallible surface of the crate; every
/// lifecycle callback is infallible.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A periodic report frequency of zero would never fire.
    #[error("report frequency must be > 0, got {frequency}")]
    InvalidFrequency { frequency: usize },
}
