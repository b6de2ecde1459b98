//! UI screens.

mod alert_popup;
mod app;
mod main_screen;
mod utils;

pub use alert_popup::AlertPopup;
pub use app::App;
pub use main_screen::{Focus, MainScreen, MainScreenAction, MainScreenState};
