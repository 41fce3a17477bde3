use yew::Callback;

use crate::models::theme::Theme;

/// Current theme plus the setter that replaces it.
///
/// The default value is the empty placeholder seen by consumers mounted
/// outside of any provider: no theme and no setter.
#[derive(Clone, PartialEq, Default)]
pub struct ThemeStore {
    pub theme: Option<Theme>,
    pub set_theme: Option<Callback<Theme>>,
}

impl ThemeStore {
    pub fn new(theme: Theme, set_theme: Callback<Theme>) -> Self {
        Self {
            theme: Some(theme),
            set_theme: Some(set_theme),
        }
    }

    /// Whether a toggle bound to this store should render as "on"
    pub fn is_dark(&self) -> bool {
        self.theme.is_some_and(Theme::is_dark)
    }

    /// Flips the theme through the setter.
    ///
    /// Calls the setter exactly once and returns the new theme, or does
    /// nothing and returns `None` when the store is empty.
    pub fn toggle(&self) -> Option<Theme> {
        let (Some(theme), Some(set_theme)) = (self.theme, self.set_theme.as_ref()) else {
            return None;
        };

        let next = theme.toggled();
        set_theme.emit(next);
        Some(next)
    }
}
