//! Color themes.

mod service;

pub use service::Theme;
