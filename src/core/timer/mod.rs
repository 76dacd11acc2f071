pub mod deadline_timer;
pub mod ports;

pub use deadline_timer::{DEFAULT_TICK_INTERVAL, DeadlineTimer};
pub use ports::{Clock, SystemClock, TimerPort};
