//! Component mocks with interactive controls

mod button;
pub mod framework;
pub mod url_state;

pub use button::{scenario_state, ButtonMock};
