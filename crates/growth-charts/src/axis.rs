//! Axis rendering: tick layout plus attachment to committed mount points
//!
//! Ticks are not part of the declarative scene. They are computed from a
//! scale and attached to a mount point once the scene has been committed.

use crate::chartkit::{BandScale, LinearScale, PathBuilder, Scale};
use growth_core::{ValueFormatter, colors};
use std::fmt::Write;

/// Side of the plot an axis is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    Bottom,
    Left,
}

impl AxisOrientation {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Bottom => "axis axis-bottom",
            Self::Left => "axis axis-left",
        }
    }
}

/// Scale an axis is generated from
#[derive(Debug, Clone, Copy)]
pub enum AxisScale<'a> {
    Continuous(&'a LinearScale),
    Banded(&'a BandScale),
}

/// Everything needed to lay out one axis
#[derive(Clone, Copy)]
pub struct AxisSpec<'a> {
    pub mapper: AxisScale<'a>,
    pub orientation: AxisOrientation,
    /// Label strategy for continuous ticks; band ticks use the category
    pub tick_format: &'a dyn ValueFormatter,
    pub tick_size: f64,
    pub tick_padding: f64,
    /// Approximate tick count for continuous axes
    pub tick_count: usize,
}

/// One positioned tick: a short mark plus its label
#[derive(Debug, Clone, PartialEq)]
pub struct TickMark {
    /// Offset along the axis
    pub position: f64,
    pub label: String,
    /// Tick line end point, relative to the tick origin
    pub line_end: (f64, f64),
    /// Label anchor point, relative to the tick origin
    pub label_at: (f64, f64),
}

/// Computed axis content, ready to attach to a mount point
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLayout {
    pub orientation: AxisOrientation,
    /// Axis line with outer ticks
    pub domain_path: String,
    pub ticks: Vec<TickMark>,
}

impl AxisLayout {
    /// Layout with no ticks and no axis line
    pub fn empty(orientation: AxisOrientation) -> Self {
        Self {
            orientation,
            domain_path: String::new(),
            ticks: Vec::new(),
        }
    }

    /// Serialize as SVG children of the mount group
    pub fn to_markup(&self) -> String {
        let (dy, anchor) = match self.orientation {
            AxisOrientation::Bottom => ("0.71em", "middle"),
            AxisOrientation::Left => ("0.32em", "end"),
        };

        let mut out = String::with_capacity(64 + self.ticks.len() * 160);
        if !self.domain_path.is_empty() {
            let _ = write!(
                out,
                r#"<path class="domain" stroke="{}" fill="none" d="{}"/>"#,
                colors::AXIS,
                self.domain_path
            );
        }

        for tick in &self.ticks {
            let transform = match self.orientation {
                AxisOrientation::Bottom => format!("translate({:.2},0)", tick.position),
                AxisOrientation::Left => format!("translate(0,{:.2})", tick.position),
            };
            let _ = write!(
                out,
                r#"<g class="tick" transform="{}"><line stroke="{}" x2="{}" y2="{}"/><text fill="{}" x="{}" y="{}" dy="{}" text-anchor="{}">{}</text></g>"#,
                transform,
                colors::AXIS,
                tick.line_end.0,
                tick.line_end.1,
                colors::TEXT_MUTED,
                tick.label_at.0,
                tick.label_at.1,
                dy,
                anchor,
                escape_text(&tick.label)
            );
        }

        out
    }
}

/// Escape text content for embedding in SVG markup
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

// ============================================================================
// STRATEGY PATTERN: Tick Mount
// ============================================================================

/// A committed node axis ticks can be attached to
pub trait TickMount {
    /// Replace every tick previously attached here with `layout`
    fn replace_ticks(&mut self, layout: &AxisLayout);
}

/// Generates axis ticks and attaches them to mount points
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisRenderer;

impl AxisRenderer {
    /// Pure tick computation
    pub fn layout(spec: &AxisSpec<'_>) -> AxisLayout {
        let outward = spec.tick_size;
        let label_offset = spec.tick_size + spec.tick_padding;

        let (range, ticks): ((f64, f64), Vec<(f64, String)>) = match spec.mapper {
            AxisScale::Continuous(scale) => (
                scale.range_bounds(),
                scale
                    .ticks(spec.tick_count)
                    .into_iter()
                    .map(|v| (scale.scale(v), spec.tick_format.format(v)))
                    .collect(),
            ),
            AxisScale::Banded(scale) => (
                scale.range_bounds(),
                scale
                    .domain()
                    .iter()
                    .filter_map(|c| scale.scale_center(c).map(|pos| (pos, c.clone())))
                    .collect(),
            ),
        };

        let (line_end, label_at, domain_path) = match spec.orientation {
            AxisOrientation::Bottom => (
                (0.0, outward),
                (0.0, label_offset),
                PathBuilder::new()
                    .move_to(range.0, outward)
                    .vertical_to(0.0)
                    .horizontal_to(range.1)
                    .vertical_to(outward)
                    .build(),
            ),
            AxisOrientation::Left => (
                (-outward, 0.0),
                (-label_offset, 0.0),
                PathBuilder::new()
                    .move_to(-outward, range.0)
                    .horizontal_to(0.0)
                    .vertical_to(range.1)
                    .horizontal_to(-outward)
                    .build(),
            ),
        };

        AxisLayout {
            orientation: spec.orientation,
            domain_path,
            ticks: ticks
                .into_iter()
                .map(|(position, label)| TickMark {
                    position,
                    label,
                    line_end,
                    label_at,
                })
                .collect(),
        }
    }

    /// Attach the axis for `spec` to `mount`, replacing earlier ticks.
    /// A mount that is not committed yet makes this a no-op; returns
    /// whether anything was attached.
    pub fn render(spec: &AxisSpec<'_>, mount: Option<&mut dyn TickMount>) -> bool {
        if mount.is_none() {
            tracing::trace!("Axis mount not ready ({:?}), deferring", spec.orientation);
            return false;
        }
        Self::attach(&Self::layout(spec), mount)
    }

    /// Attach a precomputed layout, replacing earlier ticks
    pub fn attach(layout: &AxisLayout, mount: Option<&mut dyn TickMount>) -> bool {
        match mount {
            Some(mount) => {
                mount.replace_ticks(layout);
                true
            }
            None => false,
        }
    }
}
