//! Chart widgets for the Graficar charting engine.
//!
//! Two coupled visualizations share one category model: a stacked,
//! multi-category [`StackedBarChart`] over per-period rows, and a
//! proportional [`PieChart`] over category totals. Both resolve colors
//! through a [`graficar_core::TokenPalette`], recompute their derived state
//! on every render pass, and drive hover tooltips from a per-instance
//! [`HoverState`].

pub mod bar;
pub mod category;
pub mod hover;
pub mod pie;
pub mod tooltip;

pub use bar::{stack_segments, BarSegment, StackedBarChart};
pub use category::{Category, CategoryTotals, PeriodEntry};
pub use hover::HoverState;
pub use pie::{compute_slices, PieChart, Slice, FULL_CIRCLE_PERCENT, LABEL_MIN_PERCENT};
pub use tooltip::{Tooltip, TooltipPlacement};
