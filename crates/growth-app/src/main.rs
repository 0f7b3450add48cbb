//! # growth-app
//!
//! GDP growth chart application.
//!
//! In the browser (wasm32) this mounts the Leptos dashboard. Natively it
//! renders the static SVG scene for one year to stdout:
//!
//! ```text
//! growth-app [YEAR] [--columns]
//! ```

use growth_charts::{ChartConfig, ChartResult, ChartView, SvgDocument};
use growth_core::{DataResult, GrowthTable, Year};

/// Growth table bundled with the application
const GROWTH_CSV: &str = include_str!("../assets/gdp_growth.csv");

fn load_table() -> DataResult<GrowthTable> {
    GrowthTable::from_csv(GROWTH_CSV.as_bytes())
}

/// Render both phases of the chart for `year` and serialize the scene
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn render_year(table: &GrowthTable, year: &Year, config: ChartConfig) -> ChartResult<String> {
    let mut view = ChartView::new(config)?;
    view.on_data_changed(&table.select_year(year));
    Ok(SvgDocument::render(&view).to_markup())
}

// ============================================================================
// BROWSER ENTRY
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod web {
    use super::load_table;
    use growth_components::Dashboard;
    use growth_state::provide_app_state;
    use leptos::prelude::*;

    #[component]
    pub fn App() -> impl IntoView {
        let state = provide_app_state();

        match load_table() {
            Ok(table) => state.set_table(table),
            Err(e) => {
                tracing::error!("Failed to load growth table: {}", e);
                state.set_error(format!("Could not load data: {}", e));
            }
        }

        view! { <Dashboard /> }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!("Starting GDP growth chart");
    leptos::mount::mount_to_body(web::App);
}

// ============================================================================
// NATIVE ENTRY
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let mut year = Year::new(growth_core::YEARS[0]);
    let mut config = ChartConfig::default();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--columns" => config = ChartConfig::columns(),
            other => year = Year::new(other),
        }
    }

    let table = load_table()?;
    tracing::info!("Rendering {} ({} countries)", year, table.len());
    println!("{}", render_year(&table, &year, config)?);
    Ok(())
}
