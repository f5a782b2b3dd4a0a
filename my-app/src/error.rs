use thiserror::Error;

/// Errors raised by the host shell during startup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error("Shell configuration has already been set")]
    AlreadyConfigured,
    #[error("Component tag '{0}' is already registered")]
    DuplicateTag(String),
    #[error("Invalid component tag '{0}': expected lowercase kebab-case")]
    InvalidTag(String),
    #[error("No component registered for tag '{0}'")]
    MissingRegistration(String),
}
