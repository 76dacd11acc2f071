use egui::Context as EguiContext;
use winit::window::Window;

use crate::input::gui::errors::GuiError;

pub trait GuiPresenterPort: Sized {
    fn new(window: &'static Window) -> Result<Self, GuiError>;
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), GuiError>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError>;
}
