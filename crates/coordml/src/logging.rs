//! Logging - Subscriber Setup for coordml Diagnostics
//!
//! coordml reports degenerate transform arguments through `tracing`. These
//! helpers install a formatting subscriber filtered by the `COORDML_LOG`
//! environment variable, falling back to `warn`.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "COORDML_LOG";

/// Directive used when `COORDML_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Builds the filter from `COORDML_LOG`, or `warn` if unset.
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Installs the global subscriber.
///
/// # Panics
/// Panics if a global subscriber is already installed.
pub fn init() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer())
        .init();
}

/// Installs the global subscriber unless one is already set.
pub fn try_init() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer())
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(EnvFilter::new(DEFAULT_DIRECTIVE).to_string(), "warn");
    }

    #[test]
    fn test_try_init_once() {
        let _ = try_init();
        assert!(try_init().is_err());
    }
}
