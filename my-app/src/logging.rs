//! Logging setup, installed before startup so shell logs are not lost

/// Install the global tracing subscriber. Honors `RUST_LOG`, defaults to `info`.
#[cfg(not(target_arch = "wasm32"))]
pub fn configure_logging() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    // The Dioxus launcher tries to install its own logger later; keep this one.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}

/// Install the browser console logger. The launcher would install it only
/// after the shell has already logged its startup lines.
#[cfg(target_arch = "wasm32")]
pub fn configure_logging() {
    dioxus::logger::initialize_default();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_logging_installs_subscriber() {
        configure_logging();
        assert!(tracing::dispatcher::has_been_set());

        // later installs (the launcher's) leave the first one in place
        configure_logging();
        assert!(tracing::dispatcher::has_been_set());
    }
}
