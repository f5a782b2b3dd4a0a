//! my-button - Presentational button component
//!
//! Shared by the story catalog in `my-button-mocks` and the `my-app` host shell.

pub mod button;

pub use button::{button_class, MyButton, MyButtonProps, STYLESHEET};
