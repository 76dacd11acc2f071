//! Domain core: the toggle model and the timer that drives it.
//!
//! Nothing in here knows about windows or widgets.

pub mod timer;
pub mod toggle;
