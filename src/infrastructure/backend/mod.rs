//! Test generator backend client.

mod client;
mod dto;

pub use client::{DEFAULT_BACKEND_URL, HttpBackendClient};
