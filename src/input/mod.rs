//! Input adapters for the timer demo.
//!
//! This module contains adapters that receive input from the windowing system
//! and translate it into `DemoEvent`s for the controller.

#[cfg(feature = "gui")]
pub mod gui;
