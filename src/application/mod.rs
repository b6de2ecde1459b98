//! Application layer with use cases, services and session state.

/// Effects issued by the session and their outcomes.
pub mod effects;
/// Application services.
pub mod services;
/// Client session state.
pub mod session;
/// Use case implementations.
pub mod use_cases;

pub use effects::{Effect, EffectRunner, Outcome};
pub use session::{Session, SessionTimings};
