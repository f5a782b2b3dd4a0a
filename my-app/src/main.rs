use my_app::{components, shell, App, ShellConfig, WebLauncher};
use tracing::error;

fn main() {
    // Startup logs before the launcher runs, so a subscriber must exist first
    my_app::logging::configure_logging();

    let config = ShellConfig::default().with_production_tip(false);
    if let Err(e) = shell::start(config, WebLauncher, App, &components()) {
        error!("Failed to start my-app: {e}");
        #[cfg(not(target_arch = "wasm32"))]
        std::process::exit(1);
    }
}
