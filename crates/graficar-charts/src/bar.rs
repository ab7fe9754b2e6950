//! Stacked, multi-category bar chart over a sequence of periods.
//!
//! Each [`PeriodEntry`] becomes one column, stacked in category declaration
//! order from the baseline up. All columns share one [`TickScale`] derived
//! from the largest per-period total, so magnitude-to-pixel conversion is
//! uniform and the topmost gridline meets the axis label exactly.

use crate::category::{Category, PeriodEntry};
use crate::hover::HoverState;
use crate::tooltip::Tooltip;
use graficar_core::widget::{AccessibleRole, LayoutResult, TextStyle};
use graficar_core::{
    Canvas, Color, Constraints, CornerRadius, Event, Point, Rect, Size, TextAlign, TickScale,
    TokenPalette, Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

const DEFAULT_WIDTH: f32 = 480.0;
const DEFAULT_HEIGHT: f32 = 260.0;
/// Horizontal band reserved for tick labels left of the plot.
const TICK_LABEL_BAND: f32 = 28.0;
/// Vertical band reserved for period labels beneath the plot.
const PERIOD_LABEL_BAND: f32 = 20.0;
const TITLE_BAND: f32 = 24.0;
/// Fraction of a column slot occupied by the bar.
const BAR_FILL_RATIO: f32 = 0.6;

/// One renderable segment of a stacked column.
///
/// Zero-value categories never become segments; the corner rounding below is
/// therefore decided among non-zero segments only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSegment {
    /// Index into the declared category list
    pub category: usize,
    /// Raw value from the period entry
    pub value: f64,
    /// Pixel height under the shared scale
    pub height: f32,
    /// Corner rounding for this segment's position in the stack
    pub corners: CornerRadius,
}

/// Compute the renderable segments for one period's stacked column.
///
/// Categories are visited in declaration order; the first surviving segment
/// sits at the baseline. Corner rounding: the first non-zero segment rounds
/// its bottom corners, the last its top corners, and a lone segment rounds
/// all four.
#[must_use]
pub fn stack_segments(
    categories: &[Category],
    entry: &PeriodEntry,
    scale: &TickScale,
    chart_height: f32,
    corner_radius: f32,
) -> Vec<BarSegment> {
    let mut segments: Vec<BarSegment> = categories
        .iter()
        .enumerate()
        .filter_map(|(index, category)| {
            let value = entry.value_of(&category.key);
            (value > 0.0).then(|| BarSegment {
                category: index,
                value,
                height: scale.height_for(value, chart_height),
                corners: CornerRadius::ZERO,
            })
        })
        .collect();

    match segments.len() {
        0 => {}
        1 => segments[0].corners = CornerRadius::uniform(corner_radius),
        n => {
            segments[0].corners = CornerRadius::bottom(corner_radius);
            segments[n - 1].corners = CornerRadius::top(corner_radius);
        }
    }
    segments
}

/// Stacked bar chart widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackedBarChart {
    /// Category declarations, bottom of the stack first
    categories: Vec<Category>,
    /// One entry per column, left to right
    data: Vec<PeriodEntry>,
    /// Token table resolving category colors
    palette: TokenPalette,
    /// Chart title
    title: Option<String>,
    /// Preferred width
    width: Option<f32>,
    /// Preferred height
    height: Option<f32>,
    /// Padding around the plot area
    padding: f32,
    /// Segment corner rounding
    corner_radius: f32,
    /// Hover overlay color
    overlay: Color,
    /// Gridline color
    grid_color: Color,
    /// Axis label color
    label_color: Color,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
    /// Hovered period, if any
    #[serde(skip)]
    hover: HoverState<usize>,
}

impl StackedBarChart {
    /// Create a chart over the given category declarations.
    #[must_use]
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            data: Vec::new(),
            palette: TokenPalette::default(),
            title: None,
            width: None,
            height: None,
            padding: 16.0,
            corner_radius: 3.0,
            overlay: Color::WHITE.with_alpha(0.35),
            grid_color: Color::new(0.88, 0.89, 0.90, 1.0),
            label_color: Color::new(0.38, 0.40, 0.42, 1.0),
            accessible_name_value: None,
            test_id_value: None,
            bounds: Rect::default(),
            hover: HoverState::default(),
        }
    }

    /// Append one period entry.
    #[must_use]
    pub fn entry(mut self, entry: PeriodEntry) -> Self {
        self.data.push(entry);
        self
    }

    /// Append multiple period entries.
    #[must_use]
    pub fn data(mut self, entries: impl IntoIterator<Item = PeriodEntry>) -> Self {
        self.data.extend(entries);
        self
    }

    /// Set the color token table.
    #[must_use]
    pub fn palette(mut self, palette: TokenPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the chart title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set preferred width.
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width.max(100.0));
        self
    }

    /// Set preferred height.
    #[must_use]
    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height.max(100.0));
        self
    }

    /// Set plot padding.
    #[must_use]
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    /// Set segment corner rounding.
    #[must_use]
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius.max(0.0);
        self
    }

    /// Set accessible name.
    #[must_use]
    pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Get the declared categories.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Get the period entries.
    #[must_use]
    pub fn entries(&self) -> &[PeriodEntry] {
        &self.data
    }

    /// The shared scale for the current data.
    #[must_use]
    pub fn scale(&self) -> TickScale {
        let max_total = self
            .data
            .iter()
            .map(|entry| entry.total_for(&self.categories))
            .fold(0.0, f64::max);
        TickScale::from_max_value(max_total)
    }

    /// The currently hovered period index, if any.
    #[must_use]
    pub fn hovered_period(&self) -> Option<usize> {
        self.hover.target()
    }

    /// Tooltip lines for a period: every non-zero category's label and raw
    /// value, in declaration order.
    #[must_use]
    pub fn tooltip_lines(&self, entry: &PeriodEntry) -> Vec<String> {
        self.categories
            .iter()
            .filter_map(|category| {
                let value = entry.value_of(&category.key);
                (value > 0.0).then(|| format!("{}: {}", category.label, format_value(value)))
            })
            .collect()
    }

    fn plot_area(&self) -> Rect {
        let title_band = if self.title.is_some() { TITLE_BAND } else { 0.0 };
        Rect::new(
            self.bounds.x + self.padding + TICK_LABEL_BAND,
            self.bounds.y + self.padding + title_band,
            (self.bounds.width - self.padding * 2.0 - TICK_LABEL_BAND).max(0.0),
            (self.bounds.height - self.padding * 2.0 - title_band - PERIOD_LABEL_BAND).max(0.0),
        )
    }

    /// Full-height slot rect for a column, before stacking.
    fn column_rect(&self, plot: &Rect, index: usize) -> Rect {
        let slot = plot.width / self.data.len() as f32;
        let bar_width = slot * BAR_FILL_RATIO;
        Rect::new(
            plot.x + index as f32 * slot + (slot - bar_width) / 2.0,
            plot.y,
            bar_width,
            plot.height,
        )
    }

    /// Extent of the drawn stack for a column (empty for zero totals).
    fn stacked_rect(&self, plot: &Rect, index: usize, scale: &TickScale) -> Rect {
        let column = self.column_rect(plot, index);
        let total = self.data[index].total_for(&self.categories);
        let stack_height = scale.height_for(total, plot.height);
        Rect::new(
            column.x,
            plot.y + plot.height - stack_height,
            column.width,
            stack_height,
        )
    }

    fn hit_test(&self, point: &Point) -> Option<usize> {
        if self.data.is_empty() {
            return None;
        }
        let plot = self.plot_area();
        if plot.size().is_empty() {
            return None;
        }
        let scale = self.scale();
        (0..self.data.len()).find(|&index| {
            let stack = self.stacked_rect(&plot, index, &scale);
            stack.height > 0.0 && stack.contains_point(point)
        })
    }

    fn paint_grid(&self, canvas: &mut dyn Canvas, plot: &Rect, scale: &TickScale) {
        let label_style = TextStyle {
            size: 10.0,
            color: self.label_color,
            align: TextAlign::End,
            ..TextStyle::default()
        };
        for &tick in scale.ticks() {
            let y = plot.y + plot.height - scale.offset_for(tick, plot.height);
            canvas.draw_line(
                Point::new(plot.x, y),
                Point::new(plot.x + plot.width, y),
                self.grid_color,
                1.0,
            );
            canvas.draw_text(
                &tick.to_string(),
                Point::new(plot.x - 8.0, y + 3.0),
                &label_style,
            );
        }
    }

    fn paint_columns(&self, canvas: &mut dyn Canvas, plot: &Rect, scale: &TickScale) {
        let period_style = TextStyle {
            size: 10.0,
            color: self.label_color,
            align: TextAlign::Middle,
            ..TextStyle::default()
        };
        for (index, entry) in self.data.iter().enumerate() {
            let column = self.column_rect(plot, index);
            let segments =
                stack_segments(&self.categories, entry, scale, plot.height, self.corner_radius);

            let mut baseline = plot.y + plot.height;
            for segment in &segments {
                baseline -= segment.height;
                canvas.fill_rounded_rect(
                    Rect::new(column.x, baseline, column.width, segment.height),
                    segment.corners,
                    self.categories[segment.category].color(&self.palette),
                );
            }

            canvas.draw_text(
                &entry.label,
                Point::new(column.center().x, plot.y + plot.height + 14.0),
                &period_style,
            );
        }
    }

    fn paint_hover(&self, canvas: &mut dyn Canvas, plot: &Rect, scale: &TickScale) {
        let Some(index) = self.hover.target() else {
            return;
        };
        if index >= self.data.len() {
            return;
        }
        let stack = self.stacked_rect(plot, index, scale);
        if stack.height <= 0.0 {
            return;
        }

        canvas.fill_rect(stack, self.overlay);

        let lines = self.tooltip_lines(&self.data[index]);
        let mut tooltip = Tooltip::from_lines(lines).visible(true).anchor(stack);
        tooltip.layout(self.bounds);
        tooltip.paint(canvas);
    }
}

impl Widget for StackedBarChart {
    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(
            self.width.unwrap_or(DEFAULT_WIDTH),
            self.height.unwrap_or(DEFAULT_HEIGHT),
        ))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let plot = self.plot_area();
        if plot.size().is_empty() {
            return;
        }

        if let Some(title) = &self.title {
            let style = TextStyle {
                size: 13.0,
                color: self.label_color,
                weight: graficar_core::FontWeight::Bold,
                align: TextAlign::Middle,
            };
            canvas.draw_text(
                title,
                Point::new(
                    self.bounds.x + self.bounds.width / 2.0,
                    self.bounds.y + self.padding,
                ),
                &style,
            );
        }

        let scale = self.scale();
        self.paint_grid(canvas, &plot, &scale);
        if !self.data.is_empty() {
            self.paint_columns(canvas, &plot, &scale);
            self.paint_hover(canvas, &plot, &scale);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::PointerMove { position } | Event::PointerEnter { position } => {
                let target = self.hit_test(position);
                self.hover.hover(target);
            }
            Event::PointerLeave => self.hover.clear(),
            Event::Resize { .. } => {}
        }
        None
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Figure
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value
            .as_deref()
            .or(self.title.as_deref())
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

/// Format a raw value for tooltip display: whole numbers without a decimal
/// point, everything else with one digit.
fn format_value(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
