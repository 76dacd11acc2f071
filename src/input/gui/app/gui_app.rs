use egui::{Context, RichText};
use egui_winit::State as EguiWinitState;
use tracing::error;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::Window,
};

use crate::controllers::timer_demo::{ControlRect, DemoConfig, DemoEvent, TimerDemoController};
use crate::core::timer::DeadlineTimer;
use crate::input::gui::{app::ports::presenter::GuiPresenterPort, errors::GuiError};

fn to_egui_rect(rect: ControlRect) -> egui::Rect {
    egui::Rect::from_min_size(egui::pos2(rect.x, rect.y), egui::vec2(rect.width, rect.height))
}

pub struct GuiApp<T: GuiPresenterPort> {
    width: u32,
    height: u32,
    presenter: T,
    pub controller: TimerDemoController<DeadlineTimer>,
    config: DemoConfig,
    redraw_pending: bool,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        controller: TimerDemoController<DeadlineTimer>,
        config: DemoConfig,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();
        egui_ctx.set_visuals(egui::Visuals::dark());

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            width: size.width,
            height: size.height,
            presenter,
            controller,
            config,
            redraw_pending: true,
            egui_ctx,
            egui_state,
        }
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), GuiError> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        self.presenter.render(egui_output, &self.egui_ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.presenter.resize(width, height)
    }

    /// Delivers a due timer tick to the controller, if there is one.
    pub fn poll_timer(&mut self) {
        if self.controller.poll_timer().is_some() {
            self.redraw_pending = true;
        }
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let view = self.controller.view();
        let config = &self.config;
        let mut button_pressed = false;

        let egui_output = self.egui_ctx.run(raw_input, |ctx| {
            egui::CentralPanel::default()
                .frame(egui::Frame::none())
                .show(ctx, |ui| {
                    ui.put(
                        to_egui_rect(config.label_rect),
                        egui::Label::new(RichText::new(view.label).size(config.font_size)),
                    );

                    let button = egui::Button::new(RichText::new(view.button).size(config.font_size));
                    if ui.put(to_egui_rect(config.button_rect), button).clicked() {
                        button_pressed = true;
                    }
                });
        });

        if button_pressed {
            self.controller.handle(DemoEvent::ButtonPressed);
            self.redraw_pending = true;
        }

        egui_output
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }

    /// Sleeps until the next timer deadline, or until the next window event
    /// while the timer is stopped.
    fn control_flow(&self) -> ControlFlow {
        match self.controller.next_wakeup() {
            Some(deadline) => ControlFlow::WaitUntil(deadline),
            None => ControlFlow::Wait,
        }
    }

    /// Runs the event loop. Does not return until the window is closed or
    /// rendering fails.
    pub fn run(mut self, window: &'static Window, event_loop: EventLoop<()>) -> Result<(), GuiError> {
        self.controller.launch(self.config.start_running);

        let mut failure: Option<GuiError> = None;

        event_loop.run(|event, elwt| match event {
            Event::NewEvents(_) => {
                self.poll_timer();
            }
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                let (egui_consumed, egui_repaint) = self.handle_window_event(window, event);

                match event {
                    WindowEvent::CloseRequested => {
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        self.redraw_pending = false;

                        let mut egui_output = self.update_ui(window);
                        let platform_output = std::mem::take(&mut egui_output.platform_output);
                        self.egui_state.handle_platform_output(window, platform_output);

                        if egui_output
                            .viewport_output
                            .values()
                            .any(|v| v.repaint_delay.is_zero())
                        {
                            self.redraw_pending = true;
                        }

                        if let Err(e) = self.render(egui_output) {
                            error!(error = %e, "render failed");
                            failure = Some(e);
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        if let Err(e) = self.resize(size.width, size.height) {
                            error!(error = %e, "resize failed");
                            failure = Some(e);
                            elwt.exit();
                        }
                        self.redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        if let Err(e) = self.resize(size.width, size.height) {
                            error!(error = %e, "resize failed");
                            failure = Some(e);
                            elwt.exit();
                        }
                        self.redraw_pending = true;
                    }
                    _ => {
                        if egui_consumed || egui_repaint {
                            self.redraw_pending = true;
                        }
                    }
                }
            }
            Event::AboutToWait => {
                if self.redraw_pending {
                    window.request_redraw();
                }

                elwt.set_control_flow(self.control_flow());
            }
            _ => {}
        })?;

        failure.map_or(Ok(()), Err)
    }
}
