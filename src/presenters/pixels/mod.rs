//! Presenter that clears a pixels framebuffer and draws egui on top of it.

pub mod factory;
pub mod presenter;
