use super::super::Model;
use shared::rewards::BadgeBoard;
use yew::prelude::*;

pub fn render_rewards(model: &Model) -> Html {
    let board = BadgeBoard::new(&model.catalog.badges);

    html! {
        <div class="card rewards-card">
            <h3><i class="fa-solid fa-trophy"></i>{" Badges"}</h3>

            <div class="badge-grid">
                { for board.earned().into_iter().map(|badge| html! {
                    <div class="badge earned" key={badge.id} title={badge.description.clone()}>
                        <span class="badge-icon">{ &badge.icon }</span>
                        <span class="badge-name">{ &badge.name }</span>
                    </div>
                })}
            </div>

            <h4>{"In progress"}</h4>
            <ul class="badge-progress-list">
                { for board.in_progress(3).into_iter().map(|badge| html! {
                    <li key={badge.id}>
                        <div class="badge-progress-label">
                            <span>{ format!("{} {}", badge.icon, badge.name) }</span>
                            <span>{ format!("{}%", badge.progress.min(100)) }</span>
                        </div>
                        <div class="meter">
                            <div class="meter-fill" style={format!("width: {}%", badge.progress.min(100))}></div>
                        </div>
                        <p class="muted">{ &badge.description }</p>
                    </li>
                })}
            </ul>
        </div>
    }
}
