pub mod control_rect;
pub mod demo_config;

pub use control_rect::ControlRect;
pub use demo_config::DemoConfig;
