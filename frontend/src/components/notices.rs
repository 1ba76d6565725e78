use super::super::{Model, Msg};
use shared::notice::NoticeKind;
use yew::prelude::*;

pub fn render_notices(model: &Model, ctx: &Context<Model>) -> Html {
    if model.notices.is_empty() {
        return html! {};
    }
    let link = ctx.link();

    html! {
        <div class="toast-stack" role="status" aria-live="polite">
            { for model.notices.visible().map(|notice| {
                let id = notice.id;
                let (kind_class, icon) = match notice.kind {
                    NoticeKind::Success => ("toast-success", "fa-circle-check"),
                    NoticeKind::Info => ("toast-info", "fa-circle-info"),
                    NoticeKind::Error => ("toast-error", "fa-circle-exclamation"),
                };
                html! {
                    <div key={id} class={classes!("toast", kind_class)}>
                        <i class={classes!("fa-solid", icon)}></i>
                        <div class="toast-body">
                            <strong>{ &notice.title }</strong>
                            <p>{ &notice.description }</p>
                        </div>
                        <button
                            class="icon-btn"
                            title="Dismiss"
                            onclick={link.callback(move |_| Msg::DismissNotice(id))}
                        >
                            <i class="fa-solid fa-xmark"></i>
                        </button>
                    </div>
                }
            })}
        </div>
    }
}
