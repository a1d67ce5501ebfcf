//! Feedback TUI - multi-step showroom feedback form
//!
//! [`feedback`] holds the terminal-independent step controller; the other
//! modules drive it from a Ratatui front end.

pub mod app;
pub mod config;
pub mod feedback;
pub mod platform;
pub mod state;
pub mod ui;
