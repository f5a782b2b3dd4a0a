//! One-shot startup: configure, register, mount

use crate::error::ShellError;
use crate::registry::{ComponentFactory, ComponentRegistry};
use dioxus::prelude::*;
use std::sync::OnceLock;
use tracing::info;

/// Id of the element the root tree is mounted onto
pub const DEFAULT_ANCHOR_ID: &str = "app";

static SHELL_CONFIG: OnceLock<ShellConfig> = OnceLock::new();

/// Process-wide shell settings, fixed before the tree is built
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellConfig {
    /// Log a hint at startup when running a development build
    pub production_tip: bool,
    pub anchor_id: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            production_tip: false,
            anchor_id: DEFAULT_ANCHOR_ID.to_string(),
        }
    }
}

impl ShellConfig {
    pub fn with_production_tip(mut self, enabled: bool) -> Self {
        self.production_tip = enabled;
        self
    }

    pub fn with_anchor_id(mut self, anchor_id: impl Into<String>) -> Self {
        self.anchor_id = anchor_id.into();
        self
    }
}

/// Set the process-wide configuration. Only the first call succeeds.
pub fn configure(config: ShellConfig) -> Result<&'static ShellConfig, ShellError> {
    SHELL_CONFIG
        .set(config)
        .map_err(|_| ShellError::AlreadyConfigured)?;
    SHELL_CONFIG.get().ok_or(ShellError::AlreadyConfigured)
}

/// Current configuration, if startup has run
pub fn config() -> Option<&'static ShellConfig> {
    SHELL_CONFIG.get()
}

/// Handle to the rendering framework that puts a root tree on the page
pub trait Launcher {
    fn launch(self, root: fn() -> Element, registry: ComponentRegistry, anchor_id: &str);
}

/// Launches the Dioxus web renderer
pub struct WebLauncher;

impl Launcher for WebLauncher {
    fn launch(self, root: fn() -> Element, registry: ComponentRegistry, anchor_id: &str) {
        dioxus::LaunchBuilder::web()
            .with_cfg(dioxus::web::Config::new().rootname(anchor_id))
            .with_context(registry)
            .launch(root);
    }
}

/// Root component plus the components it may render
pub struct Application {
    root: fn() -> Element,
    registry: ComponentRegistry,
}

impl Application {
    pub fn new(root: fn() -> Element) -> Self {
        Self {
            root,
            registry: ComponentRegistry::new(),
        }
    }

    pub fn register(&mut self, tag: &str, factory: ComponentFactory) -> Result<(), ShellError> {
        self.registry.register(tag, factory)
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Hand the tree to `launcher`. Consumes the application.
    pub fn mount<L: Launcher>(self, launcher: L, anchor_id: &str) {
        info!(
            "Mounting application with {} component(s) onto #{anchor_id}",
            self.registry.len()
        );
        launcher.launch(self.root, self.registry, anchor_id);
    }
}

/// Configure the process, build the application, register `components` and mount it.
///
/// Runs once per process: a second call fails with [`ShellError::AlreadyConfigured`]
/// before anything is mounted.
pub fn start<L: Launcher>(
    config: ShellConfig,
    launcher: L,
    root: fn() -> Element,
    components: &[(&'static str, ComponentFactory)],
) -> Result<(), ShellError> {
    let config = configure(config)?;

    if config.production_tip && cfg!(debug_assertions) {
        info!("my-app is running a development build. Build with --release for production.");
    }

    let mut app = Application::new(root);
    for (tag, factory) in components {
        app.register(tag, *factory)?;
    }

    app.mount(launcher, &config.anchor_id);
    Ok(())
}
