use crate::controllers::timer_demo::events::DemoEvent;
use crate::controllers::timer_demo::view::{ViewModel, render};
use crate::core::toggle::ToggleState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    Start,
    Stop,
}

/// Result of handling one event: the next model state, what to do with the
/// timer, and what the controls should show afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: ToggleState,
    pub timer_command: Option<TimerCommand>,
    pub view: ViewModel,
}

impl Transition {
    /// Whether the timer is running once `timer_command` has been applied.
    #[must_use]
    pub fn timer_active_after(&self, timer_active_before: bool) -> bool {
        match self.timer_command {
            Some(TimerCommand::Start) => true,
            Some(TimerCommand::Stop) => false,
            None => timer_active_before,
        }
    }
}

#[must_use]
pub fn dispatch(state: ToggleState, timer_active: bool, event: DemoEvent) -> Transition {
    match event {
        DemoEvent::ButtonPressed => {
            let timer_command = if timer_active {
                TimerCommand::Stop
            } else {
                TimerCommand::Start
            };

            Transition {
                state,
                timer_command: Some(timer_command),
                view: render(state, !timer_active),
            }
        }
        DemoEvent::TimerTick => {
            let state = state.next();

            Transition {
                state,
                timer_command: None,
                view: render(state, timer_active),
            }
        }
    }
}
