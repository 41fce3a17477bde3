use yew::prelude::*;

use crate::config::Config;
use crate::hooks::use_theme::use_theme;
use crate::models::store::ThemeStore;
use crate::models::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or(Config::DEFAULT_THEME)]
    pub initial: Theme,
    #[prop_or_default]
    pub children: Html,
}

/// Provides a `ThemeStore` to every descendant
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let store = use_theme(props.initial);

    html! {
        <ContextProvider<ThemeStore> context={store}>
            {props.children.clone()}
        </ContextProvider<ThemeStore>>
    }
}
