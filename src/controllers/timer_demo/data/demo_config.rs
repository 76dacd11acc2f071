use std::time::Duration;

use crate::controllers::timer_demo::data::control_rect::ControlRect;
use crate::core::timer::DEFAULT_TICK_INTERVAL;

const DEFAULT_TITLE: &str = "Tick Tock Timer Demo";
const DEFAULT_WIDTH: f64 = 250.0;
const DEFAULT_HEIGHT: f64 = 175.0;
const DEFAULT_FONT_SIZE: f32 = 24.0;

#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub title: &'static str,
    /// Logical size of the content area. The window cannot be resized.
    pub inner_size: [f64; 2],
    pub tick_interval: Duration,
    /// Whether the timer is already running when the window first appears.
    pub start_running: bool,
    pub font_size: f32,
    pub label_rect: ControlRect,
    pub button_rect: ControlRect,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE,
            inner_size: [DEFAULT_WIDTH, DEFAULT_HEIGHT],
            tick_interval: DEFAULT_TICK_INTERVAL,
            start_running: true,
            font_size: DEFAULT_FONT_SIZE,
            label_rect: ControlRect::new(25.0, 25.0, 200.0, 50.0),
            button_rect: ControlRect::new(25.0, 100.0, 200.0, 50.0),
        }
    }
}
