use thiserror::Error;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("pixels surface error: {0}")]
    Pixels(#[from] pixels::Error),

    #[error("failed to resize surface: {0}")]
    Resize(#[from] pixels::TextureError),
}

#[cfg(test)]
mod tests {
    use super::GuiError;
    use winit::error::EventLoopError;

    #[test]
    fn event_loop_errors_convert_and_keep_their_cause() {
        let error = GuiError::from(EventLoopError::AlreadyRunning);

        assert!(matches!(error, GuiError::EventLoop(EventLoopError::AlreadyRunning)));
        assert!(error.to_string().starts_with("failed to create event loop: "));
        assert!(std::error::Error::source(&error).is_some());
    }
}
