//! Widget trait and related types.
//!
//! Widgets follow a measure-layout-paint cycle:
//!
//! 1. **Measure**: compute intrinsic size given constraints
//! 2. **Layout**: position self within allocated bounds
//! 3. **Paint**: emit draw commands for rendering
//!
//! Input arrives through [`Widget::event`]; charts use it to drive their
//! hover state between render passes.

use crate::constraints::Constraints;
use crate::draw::StrokeStyle;
use crate::event::Event;
use crate::geometry::{Point, Rect, Size};
use crate::{Color, CornerRadius};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait that all chart elements implement.
pub trait Widget: Send + Sync {
    /// Compute intrinsic size within the given constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Position self within allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Emit draw commands for rendering.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle an input event, optionally producing a message for the host.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let _ = event;
        None
    }

    /// Get child widgets for tree traversal.
    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    /// Get mutable child widgets.
    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    /// Check if this widget reacts to pointer input.
    fn is_interactive(&self) -> bool {
        false
    }

    /// Get the accessible name for screen readers.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Get the accessible role.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Basic ARIA-style roles exposed by chart widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// No specific role
    #[default]
    Generic,
    /// A figure/graphic (charts)
    Figure,
    /// Contextual hover text
    Tooltip,
    /// Plain text
    Text,
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Draw a filled rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a filled rectangle with per-corner rounding.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: CornerRadius, color: Color);

    /// Draw a stroked rectangle.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);

    /// Draw text.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Draw a line between two points.
    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32);

    /// Draw a filled circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Draw a stroked circle.
    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32);

    /// Draw a filled pie wedge.
    ///
    /// Angles are degrees clockwise from 12 o'clock. Backends must render a
    /// span at or beyond [`crate::arc::FULL_CIRCLE_SPAN`] as a circle.
    fn fill_wedge(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f64,
        end_angle: f64,
        color: Color,
    );

    /// Draw a polyline.
    fn draw_path(&mut self, points: &[Point], closed: bool, style: StrokeStyle);
}

/// Horizontal anchoring for drawn text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    /// Anchor at the left edge
    #[default]
    Start,
    /// Anchor at the center
    Middle,
    /// Anchor at the right edge
    End,
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    /// Regular weight
    #[default]
    Normal,
    /// Bold weight
    Bold,
}

/// Text style for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: Color,
    /// Font weight
    pub weight: FontWeight,
    /// Horizontal anchoring
    pub align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 12.0,
            color: Color::BLACK,
            weight: FontWeight::Normal,
            align: TextAlign::Start,
        }
    }
}
