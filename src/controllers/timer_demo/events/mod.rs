pub mod demo_event;

pub use demo_event::DemoEvent;
