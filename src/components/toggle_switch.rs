use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::Config;

#[derive(Properties, PartialEq)]
pub struct ToggleSwitchProps {
    pub on: bool,
    #[prop_or_default]
    pub on_toggle: Callback<()>,
    #[prop_or(AttrValue::Static(Config::TOGGLE_ID))]
    pub id: AttrValue,
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

/// Wrapper classes for the switch; `toggle-switch--on` drives the slider position
pub fn switch_classes(on: bool) -> Classes {
    classes!("toggle-switch", on.then_some("toggle-switch--on"))
}

/// Restores the control to `on`, then reports the click once
pub fn controlled_click(on: bool, on_toggle: &Callback<()>, set_checked: impl FnOnce(bool)) {
    set_checked(on);
    on_toggle.emit(());
}

/// Controlled on/off switch rendered as a label-wrapped checkbox.
///
/// The checkbox never changes by itself: a click restores `checked` to `on`
/// and emits `on_toggle`, and the new state arrives through props.
#[function_component(ToggleSwitch)]
pub fn toggle_switch(props: &ToggleSwitchProps) -> Html {
    let onclick = {
        let on = props.on;
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            controlled_click(on, &on_toggle, |checked| input.set_checked(checked));
        })
    };

    html! {
        <label class={switch_classes(props.on)} for={props.id.clone()}>
            <input
                id={props.id.clone()}
                type="checkbox"
                checked={props.on}
                readonly={true}
                aria-label={props.label.clone()}
                {onclick}
            />
            <span class="toggle-switch__slider"></span>
            <span class="toggle-switch__wave"></span>
        </label>
    }
}
