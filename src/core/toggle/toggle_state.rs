/// The two-valued display mode shown in the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToggleState {
    #[default]
    Tick,
    Tock,
}

impl ToggleState {
    pub const ALL: &'static [Self] = &[Self::Tick, Self::Tock];

    /// Flips to the other value. No other states are reachable.
    pub fn advance(&mut self) {
        *self = self.next();
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Tick => Self::Tock,
            Self::Tock => Self::Tick,
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Tick => "TICK",
            Self::Tock => "TOCK",
        }
    }
}

impl std::fmt::Display for ToggleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
