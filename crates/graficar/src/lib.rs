//! Graficar: a charting engine for performance dashboards.
//!
//! Two coupled visualizations share one category model: a stacked
//! multi-category bar chart over per-period rows and a proportional pie
//! chart over category totals. Scale, geometry, and slices are recomputed
//! from the inputs on every render pass; hover state is the only mutable
//! slot, owned per chart instance.
//!
//! # Example
//!
//! ```
//! use graficar::{render_to_svg, Category, PeriodEntry, StackedBarChart};
//!
//! let mut chart = StackedBarChart::new(vec![
//!     Category::new("activities", "Activities", "primary-500"),
//!     Category::new("content", "Content", "success-500"),
//! ])
//! .entry(
//!     PeriodEntry::new("Mon")
//!         .with_value("activities", 4.0)
//!         .with_value("content", 2.0),
//! )
//! .entry(PeriodEntry::new("Tue").with_value("content", 5.0));
//!
//! let svg = render_to_svg(&mut chart, 480.0, 260.0);
//! assert!(svg.starts_with("<svg"));
//! ```

pub use graficar_core::{
    arc, scale, AccessibleRole, BoxStyle, Canvas, Color, ColorParseError, Constraints,
    CornerRadius, DrawCommand, Event, FontWeight, LayoutResult, Point, Rect, RecordingCanvas,
    Size, StrokeStyle, SvgCanvas, TextAlign, TextStyle, TickScale, TokenPalette, Widget,
};

pub use graficar_charts::{
    compute_slices, stack_segments, BarSegment, Category, CategoryTotals, HoverState, PeriodEntry,
    PieChart, Slice, StackedBarChart, Tooltip, TooltipPlacement, FULL_CIRCLE_PERCENT,
    LABEL_MIN_PERCENT,
};

/// Lay out a widget over a fresh viewport and serialize its paint output to
/// SVG markup.
pub fn render_to_svg(widget: &mut dyn Widget, width: f32, height: f32) -> String {
    widget.layout(Rect::new(0.0, 0.0, width, height));
    let mut canvas = SvgCanvas::new(width, height);
    widget.paint(&mut canvas);
    canvas.finish()
}
