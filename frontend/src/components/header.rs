use super::super::Model;
use shared::leaderboard::format_points;
use yew::prelude::*;

/// Renders the application header
pub fn render_header(model: &Model) -> Html {
    html! {
        <header class="app-header">
            <div class="brand">
                <i class="fa-solid fa-leaf"></i>
                <h1>{"EcoSnap"}</h1>
            </div>
            <p class="subtitle">{"Snap it, sort it, save the planet"}</p>
            <div class="points-pill" title="Your EcoPoints">
                <i class="fa-solid fa-award"></i>
                { format!(" {} EcoPoints", format_points(model.catalog.user.points)) }
            </div>
        </header>
    }
}
