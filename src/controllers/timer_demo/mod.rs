//! Controller for the tick/tock timer demo.
//!
//! # Architecture
//!
//! - **Input**: `DemoEvent`s translated from window and timer activity
//! - **Core**: `dispatch`, a pure function from (state, event) to a `Transition`
//! - **Output**: a `ViewModel` holding the text of the label and the button
//!
//! The controller is generic over `TimerPort`, so none of this needs a window.

mod controller;
pub mod data;
pub mod dispatch;
pub mod events;
pub mod view;

pub use controller::TimerDemoController;
pub use data::{ControlRect, DemoConfig};
pub use dispatch::{TimerCommand, Transition, dispatch};
pub use events::DemoEvent;
pub use view::{ViewModel, render};
