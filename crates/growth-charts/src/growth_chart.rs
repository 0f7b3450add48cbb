//! Growth chart component
//!
//! Leptos wrapper around `ChartView`. Bars are declarative and keyed by
//! category; axis ticks are attached to their mount groups by an effect
//! that runs once the groups exist in the DOM.

use crate::axis::{AxisLayout, AxisOrientation, TickMount};
use crate::svg::LOADING_TEXT;
use crate::view::{AxisMounts, ChartView};
use crate::{ChartConfig, colors};
use growth_core::Dataset;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// DOM mount point: an SVG group whose children are replaced wholesale
struct DomMount(web_sys::Element);

impl TickMount for DomMount {
    fn replace_ticks(&mut self, layout: &AxisLayout) {
        self.0.set_inner_html(&layout.to_markup());
    }
}

/// Mount groups as currently present in the DOM
struct DomMounts {
    bottom: Option<DomMount>,
    left: Option<DomMount>,
}

impl DomMounts {
    fn resolve<E: JsCast>(bottom: Option<E>, left: Option<E>) -> Self {
        let to_mount = |node: Option<E>| {
            node.and_then(|n| n.dyn_into::<web_sys::Element>().ok())
                .map(DomMount)
        };
        Self {
            bottom: to_mount(bottom),
            left: to_mount(left),
        }
    }
}

impl AxisMounts for DomMounts {
    fn mount(&mut self, side: AxisOrientation) -> Option<&mut dyn TickMount> {
        let mount = match side {
            AxisOrientation::Bottom => self.bottom.as_mut(),
            AxisOrientation::Left => self.left.as_mut(),
        };
        mount.map(|m| m as &mut dyn TickMount)
    }
}

/// GDP growth bar chart
#[component]
pub fn GrowthChart(
    /// `None` until the data collaborator has produced a dataset
    #[prop(into)] data: Signal<Option<Dataset>>,
    #[prop(optional)] config: Option<ChartConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();

    let chart_view = match ChartView::new(config) {
        Ok(view) => view,
        Err(e) => {
            tracing::error!("Growth chart disabled: {}", e);
            return view! { <p class="chart-error">{e.to_string()}</p> }.into_any();
        }
    };

    let dims = chart_view.dimensions();
    let chart = RwSignal::new(chart_view);

    let bottom_axis: NodeRef<leptos::svg::G> = NodeRef::new();
    let left_axis: NodeRef<leptos::svg::G> = NodeRef::new();

    // Data changed: rebuild scales and geometry
    Effect::new(move |_| {
        if let Some(dataset) = data.get() {
            chart.update(|c| c.on_data_changed(&dataset));
        }
    });

    // After commit: attach ticks. Re-runs when the mount groups appear.
    Effect::new(move |_| {
        let mut mounts = DomMounts::resolve(bottom_axis.get(), left_axis.get());
        let (attached, revision) = chart.with(|c| (c.on_after_commit(&mut mounts), c.revision()));
        tracing::trace!("Attached {} axes for revision {}", attached, revision);
    });

    view! {
        <Show
            when=move || chart.with(ChartView::is_ready)
            fallback=|| view! { <h3 class="chart-loading">{LOADING_TEXT}</h3> }
        >
            <svg
                class="growth-chart"
                width=dims.width
                height=dims.height
                viewBox=dims.viewbox()
            >
                <rect width=dims.width height=dims.height fill=colors::BACKGROUND />

                <g transform=dims.inner_transform()>
                    <For
                        each=move || chart.with(ChartView::bar_keys)
                        key=|key| key.clone()
                        children=move |key| view! { <Bar chart=chart category=key /> }
                    />

                    // Axis mount points, filled after commit
                    <g
                        class=AxisOrientation::Bottom.css_class()
                        transform=format!("translate(0, {})", dims.inner_height())
                        node_ref=bottom_axis
                    />
                    <g class=AxisOrientation::Left.css_class() node_ref=left_axis />
                </g>
            </svg>
        </Show>
    }
    .into_any()
}

/// One bar; keeps its DOM node across datasets while its category stays
#[component]
fn Bar(chart: RwSignal<ChartView>, category: String) -> impl IntoView {
    let key = category.clone();
    let geometry = Memo::new(move |_| chart.with(|c| c.bar(&category).cloned()));

    view! {
        <rect
            class=move || geometry.with(|g| g.as_ref().map_or("bar", |g| g.style.css_class()))
            data-key=key
            x=move || geometry.with(|g| g.as_ref().map_or(0.0, |g| g.x))
            y=move || geometry.with(|g| g.as_ref().map_or(0.0, |g| g.y))
            width=move || geometry.with(|g| g.as_ref().map_or(0.0, |g| g.width))
            height=move || geometry.with(|g| g.as_ref().map_or(0.0, |g| g.height))
            fill=move || geometry.with(|g| g.as_ref().map_or(colors::POSITIVE, |g| g.style.fill()))
        />
    }
}
