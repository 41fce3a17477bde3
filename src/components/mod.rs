pub mod theme_provider;
pub mod theme_toggle;
pub mod toggle_switch;

pub use theme_provider::ThemeProvider;
pub use theme_toggle::{ThemeToggle, ThemeToggleRoot};
pub use toggle_switch::ToggleSwitch;
