use super::super::{Model, Msg};
use yew::prelude::*;

pub fn render_tips(model: &Model, ctx: &Context<Model>) -> Html {
    let tips = &model.catalog.tips;
    let Some(tip) = model.tips.current(tips) else {
        return html! {};
    };
    let link = ctx.link();

    html! {
        <div class="card tips-card">
            <div class="card-header">
                <h3><i class="fa-solid fa-lightbulb"></i>{" Sustainability Tips"}</h3>
                <span class="muted">{ format!("{} / {}", model.tips.index() + 1, tips.len()) }</span>
            </div>
            <div class={classes!("tip", tip.category_class())}>
                <span class="tip-category">{ &tip.category }</span>
                <h4>{ &tip.title }</h4>
                <p>{ &tip.content }</p>
            </div>
            <div class="tip-nav">
                <button class="icon-btn" title="Previous tip" onclick={link.callback(|_| Msg::PrevTip)}>
                    <i class="fa-solid fa-chevron-left"></i>
                </button>
                <button class="icon-btn" title="Next tip" onclick={link.callback(|_| Msg::NextTip)}>
                    <i class="fa-solid fa-chevron-right"></i>
                </button>
            </div>
        </div>
    }
}
