//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Default filter for human-readable output.
const DEVELOPMENT_FILTER: &str = "diffcompact_core=debug,diffcompact_cli=debug";
/// Default filter for JSON output.
const PRODUCTION_FILTER: &str = "diffcompact_core=info,diffcompact_cli=info";

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

impl Profile {
    /// Filter used when `RUST_LOG` is not set.
    pub fn default_filter(&self) -> &'static str {
        match self {
            Profile::Development => DEVELOPMENT_FILTER,
            Profile::Production => PRODUCTION_FILTER,
            Profile::Test => "off",
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Only the first call has an effect, and a subscriber installed elsewhere
/// (e.g. by test capture) is left in place. `RUST_LOG` overrides the profile's
/// default filter. Output goes to stderr so it never mixes with rendered
/// messages on stdout.
///
/// # Profiles
///
/// - **Development**: Human-readable logs with debug level
/// - **Production**: JSON structured logs with info level
/// - **Test**: Bare registry; use `init_test_capture()` to collect events
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(profile.default_filter()));
        match profile {
            Profile::Development => {
                tracing_subscriber::fmt()
                    .with_writer(std::io::stderr)
                    .with_env_filter(filter)
                    .try_init()
                    .ok();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_env_filter(filter)
                    .try_init()
                    .ok();
            }
            Profile::Test => {
                // Test capture installs its own subscriber
                tracing_subscriber::registry().try_init().ok();
            }
        }
    });
}
