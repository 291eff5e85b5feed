pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod styles;

use yew::prelude::*;

use crate::pages::wheel_game::WheelGame;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| config::load_config());

    html! {
        <div class="min-h-screen w-full bg-gray-50 dark:bg-gray-900">
            <WheelGame config={(*config).clone()} />
        </div>
    }
}
