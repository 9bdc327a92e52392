//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output, matcher internals at trace level
    Development,
    /// JSON structured output at info level
    Production,
    /// Bare registry, no output. Tests asserting on events call
    /// `init_test_capture()` instead, which installs its own subscriber
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Only the first call has an effect. If another global subscriber was
/// already installed (for instance by the test capture layer), it is kept.
///
/// # Profiles
///
/// - **Development**: Human-readable logs, `automatch=trace` unless `RUST_LOG` is set
/// - **Production**: JSON structured logs, `automatch=info` unless `RUST_LOG` is set
/// - **Test**: No output
///
/// # Example
///
/// ```
/// use automatch::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let installed = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("automatch=trace")),
                )
                .try_init()
                .is_ok(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("automatch=info")),
                )
                .try_init()
                .is_ok(),
            Profile::Test => tracing_subscriber::registry().try_init().is_ok(),
        };
        if !installed {
            tracing::debug!(?profile, "global subscriber already installed");
        }
    });
}
