//! GUI input adapter for the timer demo.
//!
//! This module provides a windowed interface using winit for window management
//! and timer wakeups, pixels for the framebuffer, and egui for the label and
//! button.

pub mod app;
pub mod commands;
pub mod errors;
pub mod window_geometry;

pub use commands::run_gui::RunGuiCommand;
pub use errors::GuiError;
