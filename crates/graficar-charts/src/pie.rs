//! Proportional pie chart over category totals.
//!
//! Totals come either from a caller-supplied [`CategoryTotals`] (server-side
//! aggregation) or by summing the same [`PeriodEntry`] rows the bar chart
//! consumes, so both charts can share one data source and one category model.

use crate::category::{Category, CategoryTotals, PeriodEntry};
use crate::hover::HoverState;
use crate::tooltip::Tooltip;
use graficar_core::arc::polar_to_cartesian;
use graficar_core::widget::{AccessibleRole, LayoutResult, TextStyle};
use graficar_core::{
    Canvas, Color, Constraints, Event, Point, Rect, Size, TextAlign, TokenPalette, Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

const DEFAULT_DIAMETER: f32 = 180.0;
/// Percentage at and above which a slice renders as a full circle.
///
/// Tolerance for floating-point summation error; at exactly 360° the arc
/// path's chord collapses to zero length.
pub const FULL_CIRCLE_PERCENT: f64 = 99.99;
/// Minimum percentage for which a slice label is drawn.
pub const LABEL_MIN_PERCENT: f64 = 5.0;
/// Fraction of the radius at which labels and tooltips anchor.
const LABEL_RADIUS_RATIO: f32 = 0.62;

/// One computed slice: ephemeral, rebuilt from totals every render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    /// Index into the declared category list
    pub category: usize,
    /// Raw magnitude
    pub value: f64,
    /// Share of the grand total, 0-100
    pub percentage: f64,
    /// Start angle, degrees clockwise from 12 o'clock
    pub start_angle: f64,
    /// End angle, degrees clockwise from 12 o'clock
    pub end_angle: f64,
    /// Angle anchoring the label and tooltip
    pub mid_angle: f64,
}

impl Slice {
    /// Angular span in degrees.
    #[must_use]
    pub fn angular_span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Whether this slice must render as a full circle instead of an arc.
    #[must_use]
    pub fn is_full_circle(&self) -> bool {
        self.percentage >= FULL_CIRCLE_PERCENT
    }

    /// Whether this slice is wide enough to carry a percentage label.
    #[must_use]
    pub fn shows_label(&self) -> bool {
        self.percentage >= LABEL_MIN_PERCENT
    }

    /// Whether an angle (degrees, `[0, 360)`) falls inside this slice.
    #[must_use]
    pub fn contains_angle(&self, angle: f64) -> bool {
        self.is_full_circle() || (angle >= self.start_angle && angle < self.end_angle)
    }
}

/// Compute normalized slices for the declared categories.
///
/// The grand total over present values is the denominator for both
/// percentage and angle; a zero grand total yields no slices. Zero-value
/// categories are excluded entirely, so they can never become hover targets
/// or tooltip content. Slices are laid out consecutively from 0° in category
/// declaration order.
#[must_use]
pub fn compute_slices(categories: &[Category], totals: &CategoryTotals) -> Vec<Slice> {
    let grand_total = totals.grand_total(categories);
    if grand_total <= 0.0 {
        return Vec::new();
    }

    let mut slices = Vec::new();
    let mut cursor = 0.0;
    for (index, category) in categories.iter().enumerate() {
        let value = totals.value_of(&category.key);
        if value <= 0.0 {
            continue;
        }
        let percentage = value / grand_total * 100.0;
        let angle = percentage / 100.0 * 360.0;
        slices.push(Slice {
            category: index,
            value,
            percentage,
            start_angle: cursor,
            end_angle: cursor + angle,
            mid_angle: cursor + angle / 2.0,
        });
        cursor += angle;
    }
    slices
}

/// Pie chart widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PieChart {
    /// Category declarations, slices laid out in this order
    categories: Vec<Category>,
    /// Pre-computed totals; when absent, totals derive from `data`
    totals: Option<CategoryTotals>,
    /// Period rows to derive totals from when `totals` is absent
    data: Vec<PeriodEntry>,
    /// Token table resolving slice colors
    palette: TokenPalette,
    /// Chart title
    title: Option<String>,
    /// Preferred diameter
    diameter: Option<f32>,
    /// Placeholder token for the zero-data circle
    placeholder_token: String,
    /// Hover overlay color
    overlay: Color,
    /// Label text color
    label_color: Color,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
    /// Hovered slice index, if any
    #[serde(skip)]
    hover: HoverState<usize>,
}

impl PieChart {
    /// Create a chart over the given category declarations.
    #[must_use]
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            totals: None,
            data: Vec::new(),
            palette: TokenPalette::default(),
            title: None,
            diameter: None,
            placeholder_token: "neutral-200".to_string(),
            overlay: Color::WHITE.with_alpha(0.35),
            label_color: Color::WHITE,
            accessible_name_value: None,
            test_id_value: None,
            bounds: Rect::default(),
            hover: HoverState::default(),
        }
    }

    /// Supply pre-computed totals, bypassing per-period derivation.
    #[must_use]
    pub fn totals(mut self, totals: CategoryTotals) -> Self {
        self.totals = Some(totals);
        self
    }

    /// Append period entries to derive totals from.
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

    /// Set preferred diameter.
    #[must_use]
    pub fn diameter(mut self, diameter: f32) -> Self {
        self.diameter = Some(diameter.max(40.0));
        self
    }

    /// Set the placeholder token for the zero-data circle.
    #[must_use]
    pub fn placeholder_token(mut self, token: impl Into<String>) -> Self {
        self.placeholder_token = token.into();
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

    /// The totals feeding the slices: supplied verbatim, or derived from the
    /// period rows.
    #[must_use]
    pub fn effective_totals(&self) -> CategoryTotals {
        self.totals
            .clone()
            .unwrap_or_else(|| CategoryTotals::from_entries(&self.categories, &self.data))
    }

    /// The current slice list.
    #[must_use]
    pub fn slices(&self) -> Vec<Slice> {
        compute_slices(&self.categories, &self.effective_totals())
    }

    /// The currently hovered slice index, if any.
    #[must_use]
    pub fn hovered_slice(&self) -> Option<usize> {
        self.hover.target()
    }

    fn center(&self) -> Point {
        self.bounds.center()
    }

    fn radius(&self) -> f32 {
        let available = self.bounds.width.min(self.bounds.height);
        (self.diameter.unwrap_or(DEFAULT_DIAMETER).min(available) / 2.0).max(0.0)
    }

    fn hit_test(&self, point: &Point) -> Option<usize> {
        let center = self.center();
        let radius = self.radius();
        if radius <= 0.0 || center.distance(point) > radius {
            return None;
        }
        let angle = graficar_core::arc::angle_at(center, *point);
        let slices = self.slices();
        slices
            .iter()
            .position(|slice| slice.contains_angle(angle))
    }

    fn paint_slice(&self, canvas: &mut dyn Canvas, slice: &Slice, color: Color) {
        let center = self.center();
        let radius = self.radius();
        if slice.is_full_circle() {
            canvas.fill_circle(center, radius, color);
        } else {
            canvas.fill_wedge(center, radius, slice.start_angle, slice.end_angle, color);
        }
    }

    fn paint_labels(&self, canvas: &mut dyn Canvas, slices: &[Slice]) {
        let style = TextStyle {
            size: 11.0,
            color: self.label_color,
            align: TextAlign::Middle,
            ..TextStyle::default()
        };
        let center = self.center();
        let label_radius = self.radius() * LABEL_RADIUS_RATIO;
        for slice in slices {
            if !slice.shows_label() {
                continue;
            }
            let anchor = polar_to_cartesian(center, label_radius, slice.mid_angle);
            canvas.draw_text(&format!("{:.0}%", slice.percentage), anchor, &style);
        }
    }

    fn paint_hover(&self, canvas: &mut dyn Canvas, slices: &[Slice]) {
        let Some(index) = self.hover.target() else {
            return;
        };
        let Some(slice) = slices.get(index) else {
            return;
        };

        self.paint_slice(canvas, slice, self.overlay);

        let anchor_point = polar_to_cartesian(
            self.center(),
            self.radius() * LABEL_RADIUS_RATIO,
            slice.mid_angle,
        );
        let label = &self.categories[slice.category].label;
        let mut tooltip = Tooltip::new(format!("{label}: {:.0}%", slice.percentage))
            .visible(true)
            .anchor(Rect::new(anchor_point.x, anchor_point.y, 0.0, 0.0));
        tooltip.layout(self.bounds);
        tooltip.paint(canvas);
    }
}

impl Widget for PieChart {
    fn measure(&self, constraints: Constraints) -> Size {
        let diameter = self.diameter.unwrap_or(DEFAULT_DIAMETER);
        constraints.constrain(Size::new(diameter, diameter))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if self.bounds.size().is_empty() {
            return;
        }

        if let Some(title) = &self.title {
            let style = TextStyle {
                size: 13.0,
                color: Color::new(0.38, 0.40, 0.42, 1.0),
                weight: graficar_core::FontWeight::Bold,
                align: TextAlign::Middle,
            };
            canvas.draw_text(
                title,
                Point::new(self.bounds.x + self.bounds.width / 2.0, self.bounds.y + 14.0),
                &style,
            );
        }

        let slices = self.slices();
        if slices.is_empty() {
            // Zero data is a valid state: a neutral, uncolored circle.
            canvas.fill_circle(
                self.center(),
                self.radius(),
                self.palette.resolve_or_neutral(&self.placeholder_token),
            );
            return;
        }

        for slice in &slices {
            let color = self.categories[slice.category].color(&self.palette);
            self.paint_slice(canvas, slice, color);
        }
        self.paint_labels(canvas, &slices);
        self.paint_hover(canvas, &slices);
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
