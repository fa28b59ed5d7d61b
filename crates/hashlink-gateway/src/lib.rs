//! HTTP gateway for the hashlink URL shortener.
//!
//! Accepts URLs to shorten, validates them, hands them to a
//! [`Store`](hashlink_core::Store) and redirects short links back to their
//! targets.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;
pub mod validate;

pub use app::App;
pub use error::AppError;
pub use state::AppState;
