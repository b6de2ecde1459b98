mod footer_bar;
mod input;
mod progress_bar;
mod status_bar;

pub use footer_bar::{FooterBar, FooterBarStyle, KeyHint};
pub use input::TextInput;
pub use progress_bar::ProgressBar;
pub use status_bar::{StatusBar, StatusLevel};
