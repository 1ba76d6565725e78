use super::super::{Model, Msg};
use shared::AnalysisState;
use yew::prelude::*;

pub fn render_status(model: &Model, ctx: &Context<Model>) -> Html {
    match model.session.state() {
        AnalysisState::Analyzing(_) => html! {
            <div class="card status-card analyzing">
                <div class="spinner"></div>
                <p>{"Analyzing image with AI..."}</p>
            </div>
        },
        AnalysisState::Failed(error) => html! {
            <div class="card status-card failed">
                <i class="fa-solid fa-triangle-exclamation"></i>
                <h3>{"Analysis Failed"}</h3>
                <p>{ &error.message }</p>
                <button class="primary-btn" onclick={ctx.link().callback(|_| Msg::Retry)}>
                    <i class="fa-solid fa-rotate-right"></i>{" Retry"}
                </button>
            </div>
        },
        _ => html! {},
    }
}
