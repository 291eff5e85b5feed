use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct NamesInputProps {
    pub value: AttrValue,
    pub on_change: Callback<String>,
    pub on_load: Callback<()>,
    pub disabled: bool,
}

#[function_component(NamesInput)]
pub fn names_input(props: &NamesInputProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(textarea.value());
        })
    };

    let onclick = {
        let on_load = props.on_load.clone();
        Callback::from(move |_: MouseEvent| on_load.emit(()))
    };

    html! {
        <div>
            <label class={styles::TEXT_LABEL}>{"Names (one per line or comma separated)"}</label>
            <textarea
                class={styles::TEXTAREA}
                rows="8"
                value={props.value.clone()}
                {oninput}
            />
            <button class={classes!(styles::BUTTON_SECONDARY, "mb-2")} {onclick} disabled={props.disabled}>
                {"Load Names"}
            </button>
        </div>
    }
}
