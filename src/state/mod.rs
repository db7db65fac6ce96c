//! Application state module

mod app_state;
mod forms;
mod reveal;
mod splash_state;

pub use app_state::*;
pub use forms::*;
pub use reveal::*;
pub use splash_state::*;
