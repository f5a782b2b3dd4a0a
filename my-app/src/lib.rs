//! my-app - Host shell that mounts the button library into a web page
//!
//! Startup is one-shot: configure once, register components explicitly,
//! mount the root tree onto the anchor node.

pub mod components;
pub mod error;
pub mod logging;
pub mod registry;
pub mod shell;

pub use components::{components, my_button, App, ShellView, MY_BUTTON_TAG};
pub use error::ShellError;
pub use registry::{coerce_bool, ComponentFactory, ComponentRegistry, Tag, TagProps};
pub use shell::{configure, start, Application, Launcher, ShellConfig, WebLauncher};
