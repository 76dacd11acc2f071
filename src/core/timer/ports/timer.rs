use std::time::Instant;

/// A recurring timer owned by the UI thread.
///
/// Ticks are not pushed; the event loop pulls them with [`TimerPort::poll_tick`]
/// whenever it wakes, and uses [`TimerPort::next_deadline`] to decide how long
/// it may sleep.
pub trait TimerPort {
    /// Starts the timer. Does nothing if it is already running.
    fn start(&mut self);

    /// Stops the timer. Does nothing if it is already stopped.
    fn stop(&mut self);

    fn is_active(&self) -> bool;

    /// Returns `true` once per elapsed interval while active.
    fn poll_tick(&mut self) -> bool;

    fn next_deadline(&self) -> Option<Instant>;
}
