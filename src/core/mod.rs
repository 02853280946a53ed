//! Core application functionality
//!
//! This module contains the core application logic, including:
//! - Application initialization and configuration
//! - Settings and CLI handling
//! - Runners for windowed and headless modes

pub mod app;
pub mod config;
pub mod platform;
pub mod runner;

// Re-export commonly used items
pub use app::create_app;
pub use config::{CliArgs, ConfigFile, LayerSettings};
pub use runner::run_app;
