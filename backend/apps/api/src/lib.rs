//! Cheese API Server
//!
//! Wires the auth and catalog crates into one HTTP application.

pub mod app;
pub mod config;

pub use app::build_app;
pub use config::AppConfig;
