use yew::prelude::*;

use theme_switch::components::{ThemeProvider, ThemeToggle};
use theme_switch::config::Config;
use theme_switch::hooks::use_theme::document_theme;

#[function_component(App)]
fn app() -> Html {
    let initial = use_state(|| document_theme().unwrap_or(Config::DEFAULT_THEME));

    html! {
        <ThemeProvider initial={*initial}>
            <div class="app-container">
                <header class="app-header">
                    <h1>{"Theme Switch"}</h1>
                    <ThemeToggle />
                </header>
            </div>

            <style>
                {include_str!("style.css")}
            </style>
        </ThemeProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
