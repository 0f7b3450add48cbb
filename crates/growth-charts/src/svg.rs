//! Static SVG scene
//!
//! A committed render tree for a `ChartView`, serialized to markup. The axis
//! groups start out empty and are filled through `AxisMounts` after commit,
//! mirroring what the Leptos component does against the DOM.

use crate::axis::{AxisLayout, AxisOrientation, TickMount, escape_text};
use crate::bars::BarGeometry;
use crate::view::{AxisMounts, ChartView};
use crate::ChartDimensions;
use growth_core::colors;
use std::fmt::Write;

/// Placeholder shown before any dataset has arrived
pub const LOADING_TEXT: &str = "Loading chart…";

/// Axis mount group inside the committed scene
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgMount {
    transform: String,
    class: &'static str,
    content: String,
}

impl SvgMount {
    fn new(side: AxisOrientation, dims: &ChartDimensions) -> Self {
        let transform = match side {
            AxisOrientation::Bottom => format!("translate(0, {})", dims.inner_height()),
            AxisOrientation::Left => "translate(0, 0)".to_string(),
        };
        Self {
            transform,
            class: side.css_class(),
            content: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    fn write_to(&self, out: &mut String) {
        let _ = write!(
            out,
            r#"<g class="{}" transform="{}">{}</g>"#,
            self.class, self.transform, self.content
        );
    }
}

impl TickMount for SvgMount {
    fn replace_ticks(&mut self, layout: &AxisLayout) {
        self.content = layout.to_markup();
    }
}

/// Committed scene for one render pass
#[derive(Debug, Clone, PartialEq)]
pub enum SvgDocument {
    /// `ChartView` is still `Empty`
    Placeholder,
    Chart {
        dims: ChartDimensions,
        bars: Vec<BarGeometry>,
        bottom: SvgMount,
        left: SvgMount,
    },
}

impl SvgDocument {
    /// Declarative phase: bars plus empty axis mount groups
    pub fn commit(view: &ChartView) -> Self {
        let Some(scene) = view.scene() else {
            return Self::Placeholder;
        };
        let dims = view.dimensions();

        Self::Chart {
            bars: scene.bars.clone(),
            bottom: SvgMount::new(AxisOrientation::Bottom, &dims),
            left: SvgMount::new(AxisOrientation::Left, &dims),
            dims,
        }
    }

    /// Both phases: commit, then attach axes to the committed mounts
    pub fn render(view: &ChartView) -> Self {
        let mut doc = Self::commit(view);
        view.on_after_commit(&mut doc);
        doc
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }

    /// Serialize the scene
    pub fn to_markup(&self) -> String {
        let Self::Chart {
            dims,
            bars,
            bottom,
            left,
        } = self
        else {
            return format!(r#"<h3 class="chart-loading">{}</h3>"#, LOADING_TEXT);
        };

        let mut out = String::with_capacity(512 + bars.len() * 128);
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="growth-chart" width="{}" height="{}" viewBox="{}">"#,
            dims.width,
            dims.height,
            dims.viewbox()
        );
        let _ = write!(
            out,
            r#"<rect width="{}" height="{}" fill="{}"/>"#,
            dims.width,
            dims.height,
            colors::BACKGROUND
        );
        let _ = write!(out, r#"<g transform="{}">"#, dims.inner_transform());

        for bar in bars {
            let _ = write!(
                out,
                r#"<rect class="{}" data-key="{}" x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"/>"#,
                bar.style.css_class(),
                escape_text(&bar.key),
                bar.x,
                bar.y,
                bar.width,
                bar.height,
                bar.style.fill()
            );
        }

        bottom.write_to(&mut out);
        left.write_to(&mut out);
        out.push_str("</g></svg>");
        out
    }
}

impl AxisMounts for SvgDocument {
    fn mount(&mut self, side: AxisOrientation) -> Option<&mut dyn TickMount> {
        match self {
            Self::Placeholder => None,
            Self::Chart { bottom, left, .. } => match side {
                AxisOrientation::Bottom => Some(bottom),
                AxisOrientation::Left => Some(left),
            },
        }
    }
}
