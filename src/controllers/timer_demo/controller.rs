use std::time::Instant;

use tracing::{debug, info};

use crate::controllers::timer_demo::dispatch::{TimerCommand, dispatch};
use crate::controllers::timer_demo::events::DemoEvent;
use crate::controllers::timer_demo::view::{ViewModel, render};
use crate::core::timer::TimerPort;
use crate::core::toggle::ToggleState;

/// Owns the toggle and the timer, and keeps the view text in step with them.
pub struct TimerDemoController<T: TimerPort> {
    state: ToggleState,
    timer: T,
    view: ViewModel,
}

impl<T: TimerPort> TimerDemoController<T> {
    #[must_use]
    pub fn new(timer: T) -> Self {
        Self {
            state: ToggleState::default(),
            timer,
            view: ViewModel::placeholder(),
        }
    }

    /// Optionally starts the timer, then performs the first refresh.
    pub fn launch(&mut self, start_running: bool) -> ViewModel {
        if start_running {
            self.timer.start();
        }

        self.refresh()
    }

    pub fn handle(&mut self, event: DemoEvent) -> ViewModel {
        let transition = dispatch(self.state, self.timer.is_active(), event);

        match event {
            DemoEvent::TimerTick => info!(state = %transition.state, "timer went off"),
            DemoEvent::ButtonPressed => debug!(command = ?transition.timer_command, "button pressed"),
        }

        match transition.timer_command {
            Some(TimerCommand::Start) => self.timer.start(),
            Some(TimerCommand::Stop) => self.timer.stop(),
            None => {}
        }

        self.state = transition.state;
        self.view = transition.view;
        self.view
    }

    /// Delivers a tick if the timer has one due.
    pub fn poll_timer(&mut self) -> Option<ViewModel> {
        if self.timer.poll_tick() {
            Some(self.handle(DemoEvent::TimerTick))
        } else {
            None
        }
    }

    #[must_use]
    pub fn next_wakeup(&self) -> Option<Instant> {
        self.timer.next_deadline()
    }

    pub fn refresh(&mut self) -> ViewModel {
        self.view = render(self.state, self.timer.is_active());
        self.view
    }

    #[must_use]
    pub fn state(&self) -> ToggleState {
        self.state
    }

    #[must_use]
    pub fn view(&self) -> ViewModel {
        self.view
    }

    #[must_use]
    pub fn timer(&self) -> &T {
        &self.timer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::timer::DeadlineTimer;
    use std::cell::Cell;
    use std::time::Duration;

    #[derive(Debug, Default)]
    struct FakeTimer {
        active: bool,
        due_ticks: u32,
        starts: u32,
        stops: u32,
    }

    impl TimerPort for FakeTimer {
        fn start(&mut self) {
            self.starts += 1;
            self.active = true;
        }

        fn stop(&mut self) {
            self.stops += 1;
            self.active = false;
        }

        fn is_active(&self) -> bool {
            self.active
        }

        fn poll_tick(&mut self) -> bool {
            if self.active && self.due_ticks > 0 {
                self.due_ticks -= 1;
                true
            } else {
                false
            }
        }

        fn next_deadline(&self) -> Option<Instant> {
            None
        }
    }

    fn running_controller() -> TimerDemoController<FakeTimer> {
        let mut controller = TimerDemoController::new(FakeTimer::default());
        controller.launch(true);
        controller
    }

    #[test]
    fn view_is_placeholder_until_launch() {
        let controller = TimerDemoController::new(FakeTimer::default());

        assert_eq!(controller.view().label, "INFO");
        assert_eq!(controller.state(), ToggleState::Tick);
    }

    #[test]
    fn launch_refreshes_view_and_optionally_starts_timer() {
        let mut running = TimerDemoController::new(FakeTimer::default());
        let view = running.launch(true);
        assert_eq!(view.label, "TICK");
        assert_eq!(view.button, "Pause");
        assert!(running.timer().is_active());

        let mut paused = TimerDemoController::new(FakeTimer::default());
        let view = paused.launch(false);
        assert_eq!(view.label, "TICK");
        assert_eq!(view.button, "Resume");
        assert_eq!(paused.timer().starts, 0);
    }

    #[test]
    fn pressing_with_inactive_timer_starts_it_and_keeps_label() {
        let mut controller = TimerDemoController::new(FakeTimer::default());
        controller.launch(false);

        let view = controller.handle(DemoEvent::ButtonPressed);

        assert!(controller.timer().is_active());
        assert_eq!(view.button, "Pause");
        assert_eq!(view.label, "TICK");
    }

    #[test]
    fn one_tick_while_active_flips_label_and_keeps_pause() {
        let mut controller = running_controller();

        let view = controller.handle(DemoEvent::TimerTick);

        assert_eq!(view.label, "TOCK");
        assert_eq!(view.button, "Pause");
    }

    #[test]
    fn pressing_with_active_timer_stops_it_and_freezes_label() {
        let mut controller = running_controller();
        controller.timer.due_ticks = 3;

        let view = controller.handle(DemoEvent::ButtonPressed);
        assert!(!controller.timer().is_active());
        assert_eq!(view.button, "Resume");

        for _ in 0..3 {
            assert_eq!(controller.poll_timer(), None);
        }
        assert_eq!(controller.view().label, "TICK");
        assert_eq!(controller.view().button, "Resume");
    }

    #[test]
    fn two_ticks_while_active_restore_the_label() {
        let mut controller = running_controller();
        let original = controller.view().label;

        controller.handle(DemoEvent::TimerTick);
        let view = controller.handle(DemoEvent::TimerTick);

        assert_eq!(view.label, original);
    }

    #[test]
    fn poll_timer_delivers_due_ticks_only() {
        let mut controller = running_controller();
        controller.timer.due_ticks = 1;

        let view = controller.poll_timer().expect("one tick is due");
        assert_eq!(view.label, "TOCK");
        assert_eq!(controller.poll_timer(), None);
        assert_eq!(controller.state(), ToggleState::Tock);
    }

    #[test]
    fn button_toggles_timer_through_the_port() {
        let mut controller = running_controller();

        controller.handle(DemoEvent::ButtonPressed);
        controller.handle(DemoEvent::ButtonPressed);

        assert_eq!(controller.timer().starts, 2);
        assert_eq!(controller.timer().stops, 1);
        assert!(controller.timer().is_active());
    }

    #[test]
    fn refresh_is_idempotent() {
        let mut controller = running_controller();
        controller.handle(DemoEvent::TimerTick);

        let first = controller.refresh();
        let second = controller.refresh();

        assert_eq!(first, second);
        assert_eq!(controller.state(), ToggleState::Tock);
    }

    #[test]
    fn deadline_timer_drives_the_label_over_time() {
        let origin = Instant::now();
        let now = Cell::new(origin);
        let interval = Duration::from_millis(500);
        let mut controller = TimerDemoController::new(DeadlineTimer::new(interval, || now.get()));
        controller.launch(true);

        assert_eq!(controller.next_wakeup(), Some(origin + interval));
        assert_eq!(controller.poll_timer(), None);

        now.set(origin + interval);
        assert_eq!(controller.poll_timer().map(|view| view.label), Some("TOCK"));

        controller.handle(DemoEvent::ButtonPressed);
        assert_eq!(controller.next_wakeup(), None);

        now.set(origin + interval * 4);
        assert_eq!(controller.poll_timer(), None);
        assert_eq!(controller.view().label, "TOCK");
        assert_eq!(controller.view().button, "Resume");
    }
}
