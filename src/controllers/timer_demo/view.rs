use crate::core::toggle::ToggleState;

pub const PLACEHOLDER_LABEL: &str = "INFO";
pub const PLACEHOLDER_BUTTON: &str = "PAUSE / RESUME";
pub const PAUSE_BUTTON: &str = "Pause";
pub const RESUME_BUTTON: &str = "Resume";

/// Text currently shown by the two controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewModel {
    pub label: &'static str,
    pub button: &'static str,
}

impl ViewModel {
    /// What the controls show before the first refresh.
    #[must_use]
    pub const fn placeholder() -> Self {
        Self {
            label: PLACEHOLDER_LABEL,
            button: PLACEHOLDER_BUTTON,
        }
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::placeholder()
    }
}

#[must_use]
pub const fn render(state: ToggleState, timer_active: bool) -> ViewModel {
    ViewModel {
        label: state.display_name(),
        button: if timer_active { PAUSE_BUTTON } else { RESUME_BUTTON },
    }
}
