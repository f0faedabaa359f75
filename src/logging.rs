// SPDX-License-Identifier: PMPL-1.0-or-later

//! tracing setup for the command-line front end

use tracing_subscriber::{fmt, EnvFilter};

/// Install a compact stderr subscriber. `RUST_LOG` overrides the default
/// `warn` level. Calling this twice is harmless.
pub fn init_logging() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact()
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
