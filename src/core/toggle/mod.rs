pub mod toggle_state;

pub use toggle_state::ToggleState;
