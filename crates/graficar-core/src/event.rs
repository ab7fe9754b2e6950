//! Pointer input events for chart widgets.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
///
/// Charts are hover-only surfaces: they react to pointer movement and to the
/// pointer leaving their root container. There is no click surface by
/// design; consumers wanting drill-down wrap the rendered primitives
/// themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Pointer moved to a position (chart-local coordinates)
    PointerMove {
        /// New position
        position: Point,
    },
    /// Pointer entered the widget's root container
    PointerEnter {
        /// Entry position
        position: Point,
    },
    /// Pointer left the widget's root container
    PointerLeave,
    /// Host resized the widget
    Resize {
        /// New width
        width: f32,
        /// New height
        height: f32,
    },
}
