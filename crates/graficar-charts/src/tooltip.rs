//! Tooltip widget for contextual hover information.

use graficar_core::widget::{AccessibleRole, LayoutResult, TextStyle};
use graficar_core::{Canvas, Color, Constraints, CornerRadius, Event, Point, Rect, Size, Widget};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Tooltip placement relative to the anchor element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TooltipPlacement {
    /// Above the anchor
    #[default]
    Top,
    /// Below the anchor
    Bottom,
    /// Left of the anchor
    Left,
    /// Right of the anchor
    Right,
}

/// Tooltip widget showing one or more lines of text near an anchor.
///
/// Charts rebuild their tooltip on every paint from the current hover state;
/// the widget itself holds no hover logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    /// Text lines, top to bottom
    lines: Vec<String>,
    /// Placement preference
    placement: TooltipPlacement,
    /// Whether tooltip is currently visible
    visible: bool,
    /// Background color
    background: Color,
    /// Text color
    text_color: Color,
    /// Corner radius
    corner_radius: f32,
    /// Padding
    padding: f32,
    /// Gap between anchor and tooltip
    gap: f32,
    /// Text size
    text_size: f32,
    /// Anchor bounds (for positioning)
    #[serde(skip)]
    anchor_bounds: Rect,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Default for Tooltip {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            placement: TooltipPlacement::Top,
            visible: false,
            background: Color::new(0.15, 0.15, 0.15, 0.95),
            text_color: Color::WHITE,
            corner_radius: 4.0,
            padding: 8.0,
            gap: 6.0,
            text_size: 12.0,
            anchor_bounds: Rect::default(),
            bounds: Rect::default(),
        }
    }
}

impl Tooltip {
    /// Create a tooltip with a single line of content.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            lines: vec![content.into()],
            ..Self::default()
        }
    }

    /// Create a tooltip from multiple lines.
    #[must_use]
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            ..Self::default()
        }
    }

    /// Set the placement.
    #[must_use]
    pub const fn placement(mut self, placement: TooltipPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Set visibility.
    #[must_use]
    pub const fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set background color.
    #[must_use]
    pub const fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set text color.
    #[must_use]
    pub const fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Set corner radius.
    #[must_use]
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius.max(0.0);
        self
    }

    /// Set padding.
    #[must_use]
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    /// Set the gap between anchor and tooltip.
    #[must_use]
    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap.max(0.0);
        self
    }

    /// Set text size.
    #[must_use]
    pub fn text_size(mut self, size: f32) -> Self {
        self.text_size = size.max(8.0);
        self
    }

    /// Set anchor bounds for positioning.
    #[must_use]
    pub const fn anchor(mut self, bounds: Rect) -> Self {
        self.anchor_bounds = bounds;
        self
    }

    /// Get the text lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Check if visible.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the tooltip.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hide the tooltip.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    fn has_content(&self) -> bool {
        self.lines.iter().any(|line| !line.is_empty())
    }

    /// Estimate the widest line. Approximate: chars * `text_size` * 0.6.
    fn estimate_text_width(&self) -> f32 {
        let chars = self.lines.iter().map(String::len).max().unwrap_or(0);
        chars as f32 * self.text_size * 0.6
    }

    fn calculate_size(&self) -> Size {
        let line_height = self.text_size * 1.3;
        Size::new(
            self.estimate_text_width() + self.padding * 2.0,
            line_height * self.lines.len() as f32 + self.padding * 2.0,
        )
    }

    fn calculate_position(&self, size: Size) -> Point {
        let anchor = self.anchor_bounds;
        match self.placement {
            TooltipPlacement::Top => Point::new(
                anchor.x + (anchor.width - size.width) / 2.0,
                anchor.y - size.height - self.gap,
            ),
            TooltipPlacement::Bottom => Point::new(
                anchor.x + (anchor.width - size.width) / 2.0,
                anchor.y + anchor.height + self.gap,
            ),
            TooltipPlacement::Left => Point::new(
                anchor.x - size.width - self.gap,
                anchor.y + (anchor.height - size.height) / 2.0,
            ),
            TooltipPlacement::Right => Point::new(
                anchor.x + anchor.width + self.gap,
                anchor.y + (anchor.height - size.height) / 2.0,
            ),
        }
    }
}

impl Widget for Tooltip {
    fn measure(&self, constraints: Constraints) -> Size {
        if !self.visible || !self.has_content() {
            return Size::ZERO;
        }
        constraints.constrain(self.calculate_size())
    }

    fn layout(&mut self, _bounds: Rect) -> LayoutResult {
        if !self.visible || !self.has_content() {
            self.bounds = Rect::default();
            return LayoutResult { size: Size::ZERO };
        }

        let size = self.calculate_size();
        let position = self.calculate_position(size);
        self.bounds = Rect::new(position.x, position.y, size.width, size.height);

        LayoutResult { size }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if !self.visible || !self.has_content() {
            return;
        }

        canvas.fill_rounded_rect(
            self.bounds,
            CornerRadius::uniform(self.corner_radius),
            self.background,
        );

        let style = TextStyle {
            size: self.text_size,
            color: self.text_color,
            ..TextStyle::default()
        };
        let line_height = self.text_size * 1.3;
        for (i, line) in self.lines.iter().enumerate() {
            canvas.draw_text(
                line,
                Point::new(
                    self.bounds.x + self.padding,
                    self.bounds.y + self.padding + self.text_size + line_height * i as f32,
                ),
                &style,
            );
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        // Visibility is controlled by the anchor chart; the tooltip only
        // needs to vanish when the pointer leaves entirely.
        if matches!(event, Event::PointerLeave) {
            self.hide();
        }
        None
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Tooltip
    }

    fn accessible_name(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
