use super::super::{Model, Msg};
use shared::AnalysisState;
use shared::presenter::ResultView;
use yew::prelude::*;

pub fn render_results(model: &Model, ctx: &Context<Model>) -> Html {
    let AnalysisState::Completed(result) = model.session.state() else {
        return html! {};
    };
    let view = ResultView::from(result);
    let link = ctx.link();

    html! {
        <div class={classes!("card", "results-container", if view.recyclable { "recyclable" } else { "not-recyclable" })}>
            <div class="result-header">
                <h2>{ format!("Classification: {}", view.category) }</h2>
                <span class={classes!("recycle-badge", view.recyclable.then_some("positive"))}>
                    {
                        if view.recyclable {
                            html! { <i class="fa-solid fa-recycle"></i> }
                        } else {
                            html! { <i class="fa-solid fa-ban"></i> }
                        }
                    }
                    { format!(" {}", view.badge) }
                </span>
            </div>

            <div class="detailed-results">
                <h3>{"Confidence"}</h3>
                <div class="result-bars">
                    { for view.bars.iter().map(|bar| html! {
                        <div class={classes!("result-item", bar.primary.then_some("primary"))}>
                            <div class="result-label">{ &bar.label }</div>
                            <div class="result-bar-container">
                                <div class="result-bar" style={format!("width: {}%", bar.percent)}></div>
                            </div>
                            <div class="result-value">{ format!("{}%", bar.percent) }</div>
                        </div>
                    })}
                </div>
            </div>

            <div class="disposal-tips">
                <h3>{"How to dispose"}</h3>
                <ol>
                    { for view.tips.iter().map(|(n, tip)| html! {
                        <li key={*n}>
                            <span class="tip-number">{ n.to_string() }</span>
                            <span>{ tip }</span>
                        </li>
                    })}
                </ol>
            </div>

            <div class="impact-grid">
                { for view.tiles.iter().map(|tile| html! {
                    <div class={classes!("impact-tile", tile.class)}>
                        <span class="impact-value">{ &tile.value }</span>
                        <span class="impact-label">{ tile.label }</span>
                    </div>
                })}
            </div>

            <div class="result-actions">
                <button class="secondary-btn" onclick={link.callback(|_| Msg::SaveResult)}>
                    <i class="fa-solid fa-floppy-disk"></i>{" Save Result"}
                </button>
                <button class="primary-btn" title={view.share_text.clone()} onclick={link.callback(|_| Msg::ShareResult)}>
                    <i class="fa-solid fa-share-nodes"></i>{" Share"}
                </button>
            </div>

            {
                if model.saved.entries().is_empty() {
                    html! {}
                } else {
                    html! {
                        <p class="saved-summary">
                            { format!(
                                "{} saved result(s), {:.1} kg CO₂ avoided",
                                model.saved.entries().len(),
                                model.saved.total_co2_saved_kg()
                            ) }
                        </p>
                    }
                }
            }
        </div>
    }
}
