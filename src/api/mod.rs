//! Backend API: wire models, typed errors and the HTTP client.

mod client;
mod error;
pub mod models;

#[cfg(test)]
pub mod fake;

pub use client::*;
pub use error::*;
pub use models::*;
