use super::super::Model;
use super::super::Msg;
use yew::html::Scope;
use yew::prelude::*;

pub fn render_theme_toggle(theme: &str, link: &Scope<Model>) -> Html {
    let light = theme == "light";
    html! {
        <button
            id="theme-toggle"
            class="theme-toggle"
            onclick={link.callback(|_| Msg::ToggleTheme)}
            title={ if light { "Switch to dark mode" } else { "Switch to light mode" } }
        >
            <i class={classes!("fa-solid", if light { "fa-moon" } else { "fa-sun" })}></i>
        </button>
    }
}
