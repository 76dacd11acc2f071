/// Triggers the demo reacts to. Window events that are neither of these never
/// reach the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoEvent {
    ButtonPressed,
    TimerTick,
}
