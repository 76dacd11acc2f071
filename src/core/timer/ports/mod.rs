//! Port definitions for the timer facility.
//!
//! Contains the traits that separate the tick/tock core from wall-clock time
//! and from whatever event loop drives the timer.

pub mod clock;
pub mod timer;

pub use clock::{Clock, SystemClock};
pub use timer::TimerPort;
