use super::super::Model;
use shared::leaderboard::format_points;
use yew::prelude::*;

pub fn render_profile_card(model: &Model) -> Html {
    let user = &model.catalog.user;
    let progress = user.progress();

    html! {
        <div class="card profile-card">
            <div class="profile-header">
                <div class="avatar">{ initial(&model.catalog.leaderboard.current_user) }</div>
                <div>
                    <h3>{ &model.catalog.leaderboard.current_user }</h3>
                    <p class="muted">{ format!("Level {} Eco Warrior", user.level) }</p>
                </div>
            </div>

            <div class="stats-grid">
                <div class="stat">
                    <span class="stat-value">{ format_points(user.points) }</span>
                    <span class="stat-label">{"Points"}</span>
                </div>
                <div class="stat">
                    <span class="stat-value">{ format!("#{}", user.rank) }</span>
                    <span class="stat-label">{"Rank"}</span>
                </div>
                <div class="stat">
                    <span class="stat-value">{ user.scans.to_string() }</span>
                    <span class="stat-label">{"Scans"}</span>
                </div>
                <div class="stat">
                    <span class="stat-value">{ user.badges_earned.to_string() }</span>
                    <span class="stat-label">{"Badges"}</span>
                </div>
            </div>

            <div class="level-progress">
                <div class="meter-label">
                    { format!("Progress to Level {}", user.next_level()) }
                    <span>{ format!("{}%", progress) }</span>
                </div>
                <div class="meter">
                    <div class="meter-fill" style={format!("width: {}%", progress)}></div>
                </div>
            </div>
        </div>
    }
}

fn initial(name: &str) -> String {
    name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default()
}
