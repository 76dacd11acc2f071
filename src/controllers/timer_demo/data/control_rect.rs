/// Position and size of a control, in logical points from the top-left of
/// the window's content area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ControlRect {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}
