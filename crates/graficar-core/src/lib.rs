//! Core types and chart math for the Graficar charting engine.
//!
//! This crate provides the foundations the chart widgets build on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`CornerRadius`]
//! - Color representation: [`Color`] with WCAG contrast calculations, and
//!   symbolic design-system tokens via [`TokenPalette`]
//! - Axis scaling: [`scale::calculate_ticks`] and [`TickScale`]
//! - Polar/SVG geometry: [`arc::polar_to_cartesian`], [`arc::describe_arc`]
//! - The [`Widget`]/[`Canvas`] traits with [`RecordingCanvas`] and
//!   [`SvgCanvas`] backends
//! - Pointer input: [`Event`]

pub mod arc;
mod canvas;
mod color;
mod constraints;
mod draw;
mod event;
mod geometry;
pub mod scale;
mod token;
pub mod widget;

pub use canvas::{RecordingCanvas, SvgCanvas};
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{BoxStyle, DrawCommand, StrokeStyle};
pub use event::Event;
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use scale::TickScale;
pub use token::TokenPalette;
pub use widget::{
    AccessibleRole, Canvas, FontWeight, LayoutResult, TextAlign, TextStyle, Widget,
};
