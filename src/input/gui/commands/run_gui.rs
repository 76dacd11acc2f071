use std::marker::PhantomData;

use tracing::info;
use winit::{
    dpi::LogicalSize,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::controllers::timer_demo::{DemoConfig, TimerDemoController};
use crate::core::timer::DeadlineTimer;
use crate::input::gui::{
    app::{gui_app::GuiApp, ports::presenter::GuiPresenterPort},
    commands::ports::presenter_factory::GuiPresenterFactoryPort,
    errors::GuiError,
    window_geometry::centered_position,
};

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: DemoConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: DemoConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    /// Opens the window and runs until it is closed.
    pub fn execute(&self) -> Result<(), GuiError> {
        let event_loop = EventLoop::new()?;
        let [width, height] = self.config.inner_size;

        // Hidden until positioned; the frame size is only known once built
        let window = WindowBuilder::new()
            .with_title(self.config.title)
            .with_inner_size(LogicalSize::new(width, height))
            .with_resizable(false)
            .with_visible(false)
            .build(&event_loop)?;

        if let Some(monitor) = event_loop.primary_monitor() {
            window.set_outer_position(centered_position(
                monitor.position(),
                monitor.size(),
                window.outer_size(),
            ));
        }
        window.set_visible(true);

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(window));

        let presenter: P = self.presenter_factory.build(window)?;
        let timer = DeadlineTimer::with_system_clock(self.config.tick_interval);
        let controller = TimerDemoController::new(timer);
        let app = GuiApp::new(window, &event_loop, presenter, controller, self.config.clone());

        info!(
            title = self.config.title,
            interval_ms = self.config.tick_interval.as_millis() as u64,
            "timer demo window opened"
        );

        app.run(window, event_loop)
    }
}
