mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
#[cfg(feature = "gui")]
mod presenters;

pub use controllers::timer_demo::{
    ControlRect, DemoConfig, DemoEvent, TimerCommand, TimerDemoController, Transition, ViewModel,
    dispatch, render,
};
pub use crate::core::timer::{Clock, DEFAULT_TICK_INTERVAL, DeadlineTimer, SystemClock, TimerPort};
pub use crate::core::toggle::ToggleState;

#[cfg(feature = "gui")]
pub use input::gui::{GuiError, RunGuiCommand};
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
