//! Year toggle button group

use growth_core::Year;
use growth_state::AppState;
use leptos::prelude::*;

#[component]
pub fn YearToggle(
    #[prop(into)] state: AppState,
    /// Defaults to every selectable year
    #[prop(optional)]
    years: Option<Vec<Year>>,
) -> impl IntoView {
    let years = years.unwrap_or_else(Year::all);
    let selected = state.year;

    view! {
        <div class="btn-group year-toggle" role="group">
            <For
                each=move || years.clone()
                key=|year| year.clone()
                children=move |year| {
                    let label = year.to_string();
                    let active = {
                        let year = year.clone();
                        move || selected.with(|s| s.as_ref() == Some(&year))
                    };
                    view! {
                        <button
                            type="button"
                            class=move || if active() { "btn year-btn active" } else { "btn year-btn" }
                            value=label.clone()
                            on:click=move |_| state.select_year(year.clone())
                        >
                            {label.clone()}
                        </button>
                    }
                }
            />
        </div>
    }
}
