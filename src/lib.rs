//! Recipe browser - search a recipe API and read recipes in the terminal
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod html;
pub mod logging;
pub mod models;
pub mod navigation;
pub mod screens;
pub mod terminal;
pub mod traits;
pub mod ui;
