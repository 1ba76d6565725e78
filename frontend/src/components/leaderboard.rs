use super::super::{Model, Msg};
use shared::leaderboard::{LeaderboardPeriod, format_points};
use yew::prelude::*;

const PERIODS: [LeaderboardPeriod; 2] = [LeaderboardPeriod::Weekly, LeaderboardPeriod::Monthly];

pub fn render_leaderboard(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let board = &model.catalog.leaderboard;
    let period = model.period;

    html! {
        <section class="card leaderboard-card">
            <div class="card-header">
                <h2><i class="fa-solid fa-ranking-star"></i>{" Leaderboard"}</h2>
                <div class="tabs">
                    { for PERIODS.iter().map(|&p| html! {
                        <button
                            class={classes!("tab", (p == period).then_some("active"))}
                            onclick={link.callback(move |_| Msg::SetPeriod(p))}
                        >
                            { p.to_string() }
                        </button>
                    })}
                </div>
            </div>

            {
                match board.current_user_rank(period) {
                    Some(rank) => html! {
                        <p class="muted">{ format!("You are #{} {}", rank, period.to_string().to_lowercase()) }</p>
                    },
                    None => html! {},
                }
            }

            <ol class="leaderboard-list">
                { for board.entries(period).iter().map(|entry| {
                    let classes = classes!(
                        "leader-row",
                        entry.on_podium().then(|| format!("podium-{}", entry.rank)),
                        board.is_current_user(entry).then_some("current-user"),
                    );
                    html! {
                        <li key={entry.id} class={classes}>
                            <span class="leader-rank">{ entry.rank.to_string() }</span>
                            <span class="leader-avatar">{ entry.avatar() }</span>
                            <div class="leader-info">
                                <span class="leader-name">{ &entry.name }</span>
                                <span class="leader-achievement">{ &entry.achievement }</span>
                            </div>
                            <span class="leader-points">{ format!("{} pts", format_points(entry.points)) }</span>
                        </li>
                    }
                })}
            </ol>
        </section>
    }
}
