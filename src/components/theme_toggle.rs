use yew::prelude::*;

use crate::components::toggle_switch::ToggleSwitch;
use crate::hooks::use_theme_store::use_theme_store;
use crate::models::store::ThemeStore;

/// Accessible label describing what a click will do
pub const fn toggle_label(on: bool) -> &'static str {
    if on {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    }
}

/// Click handler flipping the theme held by `store`
pub fn toggle_callback(store: ThemeStore) -> Callback<()> {
    Callback::from(move |()| {
        if store.toggle().is_none() {
            gloo::console::debug!("Theme toggle ignored: no theme provider mounted");
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleRootProps {
    pub store: ThemeStore,
}

/// Binds a `ToggleSwitch` to a theme store: on means dark
#[function_component(ThemeToggleRoot)]
pub fn theme_toggle_root(props: &ThemeToggleRootProps) -> Html {
    let on = props.store.is_dark();

    let on_toggle = toggle_callback(props.store.clone());

    html! {
        <ToggleSwitch {on} {on_toggle} label={toggle_label(on)} />
    }
}

/// Theme toggle bound to the surrounding `ThemeProvider`
#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let store = use_theme_store();

    html! {
        <ThemeToggleRoot {store} />
    }
}
