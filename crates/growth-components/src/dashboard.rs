//! Main dashboard layout component

use growth_charts::{ChartConfig, GrowthChart};
use growth_state::use_app_state;
use leptos::prelude::*;

use crate::YearToggle;

#[component]
pub fn Dashboard(#[prop(optional)] chart: Option<ChartConfig>) -> impl IntoView {
    let state = use_app_state();
    let ranked = state.ranked;

    view! {
        <div class="dashboard">
            <header class="dash-header">
                <h2>"GDP growth by country"</h2>
            </header>

            <main class="dash-main">
                <section class="panel year-panel">
                    <h3>"Select a year"</h3>
                    <YearToggle state=state />
                    <h1 class="selected-year">{move || state.year_label()}</h1>
                </section>

                <section class="panel chart-container">
                    <div class="panel-header">
                        <span class="panel-title">"Growth rate (%)"</span>
                        <label class="rank-toggle">
                            <input
                                type="checkbox"
                                prop:checked=move || ranked.get()
                                on:change=move |_| state.toggle_ranked()
                            />
                            " Rank by growth"
                        </label>
                    </div>
                    <div class="panel-content">
                        <GrowthChart data=state.dataset() config=chart.unwrap_or_default() />
                    </div>
                </section>
            </main>

            <footer class="dash-footer">
                <StatusBar />
            </footer>
        </div>
    }
}

#[component]
fn StatusBar() -> impl IntoView {
    let state = use_app_state();
    let error = state.error;

    view! {
        <div class="status-bar">
            <div class="sb-rows">
                <span class="sb-label">"Countries:"</span>
                <span class="sb-value">{move || state.row_count()}</span>
            </div>

            {move || {
                error.get().map(|e| {
                    view! {
                        <div class="sb-error">
                            <span class="error-icon">"⚠"</span>
                            <span class="error-msg">{e}</span>
                        </div>
                    }
                })
            }}

            <div class="sb-version">
                <span>"v0.1.0"</span>
            </div>
        </div>
    }
}
