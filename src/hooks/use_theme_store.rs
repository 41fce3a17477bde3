use yew::prelude::*;

use crate::models::store::ThemeStore;

/// Reads the store from the nearest `ThemeProvider`.
///
/// Outside of a provider this yields the empty `ThemeStore`, which renders
/// as "off" and ignores toggles.
#[hook]
pub fn use_theme_store() -> ThemeStore {
    use_context::<ThemeStore>().unwrap_or_default()
}
