use crate::models::theme::Theme;

/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Theme used when the host page does not specify one
    pub const DEFAULT_THEME: Theme = Theme::Light;

    /// Attribute on `<html>` carrying the active theme
    pub const THEME_ATTRIBUTE: &str = "data-theme";

    /// DOM id shared by the switch's label and checkbox
    pub const TOGGLE_ID: &str = "toggler";
}
