use core::{error, fmt};

/// Validation errors raised at kernel construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A configuration argument value is invalid.
    InvalidArgument {
        /// Name of the argument.
        arg: &'static str,
        /// Human readable reason.
        reason: &'static str,
    },
    /// A configuration argument is NaN or infinite.
    NonFinite {
        /// Name of the argument.
        arg: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidArgument { arg, reason } => {
                write!(f, "Invalid argument `{arg}`: {reason}")
            }
            ConfigError::NonFinite { arg } => {
                write!(f, "Argument `{arg}` is NaN or infinite.")
            }
        }
    }
}

impl error::Error for ConfigError {}
