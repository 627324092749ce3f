mod app_state;
mod input;
mod modal;

pub use app_state::*;
pub use input::*;
pub use modal::*;
