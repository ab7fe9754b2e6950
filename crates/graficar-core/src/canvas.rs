//! Canvas implementations for rendering.
//!
//! [`RecordingCanvas`] records draw commands for inspection (tests, diffing,
//! host serialization). [`SvgCanvas`] serializes the same operations to SVG
//! markup, including the arc-path and rounded-rect path forms.

use crate::arc::{describe_arc, rounded_rect_path, FULL_CIRCLE_SPAN};
use crate::draw::{BoxStyle, DrawCommand, StrokeStyle};
use crate::widget::{Canvas, TextAlign, TextStyle};
use crate::{Color, CornerRadius, FontWeight, Point, Rect};
use std::fmt::Write as _;

/// A Canvas implementation that records draw operations as [`DrawCommand`]s.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect {
            bounds: rect,
            radius: CornerRadius::ZERO,
            style: BoxStyle::fill(color),
        });
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: CornerRadius, color: Color) {
        self.commands
            .push(DrawCommand::rounded_rect(rect, radius, color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.commands.push(DrawCommand::Rect {
            bounds: rect,
            radius: CornerRadius::ZERO,
            style: BoxStyle::stroke(StrokeStyle { color, width }),
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.commands.push(DrawCommand::Path {
            points: vec![from, to],
            closed: false,
            style: StrokeStyle { color, width },
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands
            .push(DrawCommand::filled_circle(center, radius, color));
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            style: BoxStyle::stroke(StrokeStyle { color, width }),
        });
    }

    fn fill_wedge(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f64,
        end_angle: f64,
        color: Color,
    ) {
        // A wedge spanning the whole turn degenerates as an arc path; record
        // it as the circle it visually is.
        if end_angle - start_angle >= FULL_CIRCLE_SPAN {
            self.fill_circle(center, radius, color);
            return;
        }
        self.commands.push(DrawCommand::Wedge {
            center,
            radius,
            start_angle,
            end_angle,
            style: BoxStyle::fill(color),
        });
    }

    fn draw_path(&mut self, points: &[Point], closed: bool, style: StrokeStyle) {
        self.commands.push(DrawCommand::Path {
            points: points.to_vec(),
            closed,
            style,
        });
    }
}

/// A Canvas implementation that serializes draw operations to SVG markup.
#[derive(Debug)]
pub struct SvgCanvas {
    width: f32,
    height: f32,
    body: String,
    element_count: usize,
}

impl SvgCanvas {
    /// Create a canvas for an SVG viewport of the given size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            body: String::new(),
            element_count: 0,
        }
    }

    /// Number of elements emitted so far.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.element_count
    }

    /// Finish the document, wrapping the body in an `<svg>` root.
    #[must_use]
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{:.0}\" height=\"{:.0}\" viewBox=\"0 0 {:.0} {:.0}\">\n{}</svg>\n",
            self.width, self.height, self.width, self.height, self.body
        )
    }

    fn push_element(&mut self, element: &str) {
        self.body.push_str("  ");
        self.body.push_str(element);
        self.body.push('\n');
        self.element_count += 1;
    }

    fn fill_attrs(color: Color) -> String {
        if color.a < 1.0 {
            format!("fill=\"{}\" fill-opacity=\"{:.3}\"", color.to_hex(), color.a)
        } else {
            format!("fill=\"{}\"", color.to_hex())
        }
    }

    fn stroke_attrs(color: Color, width: f32) -> String {
        let mut attrs = format!(
            "fill=\"none\" stroke=\"{}\" stroke-width=\"{width:.2}\"",
            color.to_hex()
        );
        if color.a < 1.0 {
            let _ = write!(attrs, " stroke-opacity=\"{:.3}\"", color.a);
        }
        attrs
    }

    fn escape(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }
}

impl Canvas for SvgCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let element = format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" {}/>",
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            Self::fill_attrs(color)
        );
        self.push_element(&element);
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: CornerRadius, color: Color) {
        if radius.is_zero() {
            self.fill_rect(rect, color);
            return;
        }
        if radius.is_uniform() {
            let element = format!(
                "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"{:.2}\" {}/>",
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                radius.top_left,
                Self::fill_attrs(color)
            );
            self.push_element(&element);
            return;
        }
        let element = format!(
            "<path d=\"{}\" {}/>",
            rounded_rect_path(rect, radius),
            Self::fill_attrs(color)
        );
        self.push_element(&element);
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        let element = format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" {}/>",
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            Self::stroke_attrs(color, width)
        );
        self.push_element(&element);
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        let anchor = match style.align {
            TextAlign::Start => "start",
            TextAlign::Middle => "middle",
            TextAlign::End => "end",
        };
        let weight = match style.weight {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        };
        let element = format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{:.1}\" font-weight=\"{weight}\" text-anchor=\"{anchor}\" fill=\"{}\">{}</text>",
            position.x,
            position.y,
            style.size,
            style.color.to_hex(),
            Self::escape(text)
        );
        self.push_element(&element);
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        let element = format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{width:.2}\"/>",
            from.x,
            from.y,
            to.x,
            to.y,
            color.to_hex()
        );
        self.push_element(&element);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        let element = format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" {}/>",
            center.x,
            center.y,
            radius,
            Self::fill_attrs(color)
        );
        self.push_element(&element);
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32) {
        let element = format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" {}/>",
            center.x,
            center.y,
            radius,
            Self::stroke_attrs(color, width)
        );
        self.push_element(&element);
    }

    fn fill_wedge(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f64,
        end_angle: f64,
        color: Color,
    ) {
        if end_angle - start_angle >= FULL_CIRCLE_SPAN {
            self.fill_circle(center, radius, color);
            return;
        }
        let element = format!(
            "<path d=\"{}\" {}/>",
            describe_arc(center, radius, start_angle, end_angle),
            Self::fill_attrs(color)
        );
        self.push_element(&element);
    }

    fn draw_path(&mut self, points: &[Point], closed: bool, style: StrokeStyle) {
        if points.len() < 2 {
            return;
        }
        let coords: Vec<String> = points
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect();
        let tag = if closed { "polygon" } else { "polyline" };
        let element = format!(
            "<{tag} points=\"{}\" {}/>",
            coords.join(" "),
            Self::stroke_attrs(style.color, style.width)
        );
        self.push_element(&element);
    }
}
