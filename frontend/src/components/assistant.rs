use super::super::{Model, Msg};
use shared::assistant::Sender;
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

pub fn render_assistant(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let typing = model.chat.is_typing();
    let can_send = model.chat.can_submit(&model.chat_input);

    let on_input = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::ChatInput(input.value())
    });
    let on_keydown = link.batch_callback(|e: KeyboardEvent| {
        (e.key() == "Enter" && !e.shift_key()).then(|| {
            e.prevent_default();
            Msg::ChatSend
        })
    });

    html! {
        <div class="card assistant-card">
            <h3><i class="fa-solid fa-robot"></i>{" Eco Assistant"}</h3>

            <div class="chat-log">
                { for model.chat.messages().iter().map(|message| {
                    let from_user = message.sender == Sender::User;
                    html! {
                        <div key={message.id} class={classes!("chat-message", if from_user { "from-user" } else { "from-assistant" })}>
                            <p>{ &message.text }</p>
                            <span class="chat-time">{ &message.time_label }</span>
                        </div>
                    }
                })}
                {
                    if typing {
                        html! {
                            <div class="chat-message from-assistant typing">
                                <span class="dot"></span><span class="dot"></span><span class="dot"></span>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>

            <div class="chat-input">
                <input
                    type="text"
                    placeholder="Ask about recycling..."
                    value={model.chat_input.clone()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                />
                <button
                    class="icon-btn"
                    title="Send"
                    disabled={!can_send}
                    onclick={link.callback(|_| Msg::ChatSend)}
                >
                    <i class="fa-solid fa-paper-plane"></i>
                </button>
            </div>
        </div>
    }
}
