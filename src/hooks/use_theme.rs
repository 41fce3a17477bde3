use yew::prelude::*;

use crate::config::Config;
use crate::models::store::ThemeStore;
use crate::models::theme::Theme;

/// Owns the current theme for a provider and reflects it onto the document
#[hook]
pub fn use_theme(initial: Theme) -> ThemeStore {
    let theme = use_state(|| initial);

    // Effect: Apply theme to DOM
    {
        let theme_value = *theme;
        use_effect_with(theme_value, move |theme| {
            apply_theme_to_dom(*theme);
            || ()
        });
    }

    let set_theme = {
        let theme = theme.clone();
        Callback::from(move |new_theme| theme.set(new_theme))
    };

    ThemeStore::new(*theme, set_theme)
}

/// Theme the host page declared on `<html>`, if any
pub fn document_theme() -> Option<Theme> {
    let value = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|html| html.get_attribute(Config::THEME_ATTRIBUTE))?;

    match value.parse() {
        Ok(theme) => Some(theme),
        Err(e) => {
            gloo::console::warn!(format!("{e}, using default theme"));
            None
        }
    }
}

/// Apply theme to DOM by setting data-theme attribute on <html>
fn apply_theme_to_dom(theme: Theme) {
    let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        gloo::console::warn!("No document element, theme not applied");
        return;
    };

    if let Err(e) = html.set_attribute(Config::THEME_ATTRIBUTE, theme.as_str()) {
        gloo::console::warn!("Failed to apply theme:", e);
    }
}
