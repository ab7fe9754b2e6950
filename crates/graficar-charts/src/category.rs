//! The category model and per-period data rows shared by both charts.
//!
//! Categories form a closed, caller-supplied set; the engine never infers or
//! mutates them. Data rows are keyed by category key, and every lookup goes
//! through an accessor that defaults missing keys to zero, so a row may carry
//! any subset of the declared categories.

use graficar_core::Color;
use graficar_core::TokenPalette;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named, colored data dimension (e.g. "activities", "content").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique, stable identifier matching input-data fields
    pub key: String,
    /// Display name
    pub label: String,
    /// Symbolic color reference resolved through a [`TokenPalette`]
    pub color_token: String,
}

impl Category {
    /// Create a new category.
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        color_token: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            color_token: color_token.into(),
        }
    }

    /// Resolve this category's display color.
    #[must_use]
    pub fn color(&self, palette: &TokenPalette) -> Color {
        palette.resolve_or_neutral(&self.color_token)
    }
}

/// One period's worth of per-category values (e.g. a weekday).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PeriodEntry {
    /// Period identifier displayed beneath the column
    pub label: String,
    values: BTreeMap<String, f64>,
}

impl PeriodEntry {
    /// Create an empty entry for a period.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            values: BTreeMap::new(),
        }
    }

    /// Set the value for a category key.
    ///
    /// Negative values are clamped to 0 at this boundary so percentages and
    /// pixel heights stay non-negative downstream.
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: f64) -> Self {
        self.values.insert(key.into(), value.max(0.0));
        self
    }

    /// Look up the value for a category key, defaulting to 0.
    ///
    /// This is the only way chart code reads row data: missing keys are 0,
    /// never an error and never NaN.
    #[must_use]
    pub fn value_of(&self, key: &str) -> f64 {
        self.values.get(key).copied().unwrap_or(0.0)
    }

    /// Sum this entry's values across the declared categories.
    #[must_use]
    pub fn total_for(&self, categories: &[Category]) -> f64 {
        categories.iter().map(|c| self.value_of(&c.key)).sum()
    }
}

/// Pre-computed per-category magnitudes for the pie chart.
///
/// Callers that already aggregated item-level data upstream supply one of
/// these; otherwise the pie derives totals by summing each category across
/// all period entries. Values are used verbatim as magnitudes; the sum of
/// supplied values is the denominator for both angles and displayed
/// percentages.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryTotals {
    values: BTreeMap<String, f64>,
}

impl CategoryTotals {
    /// Create an empty totals table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the magnitude for a category key, clamping negatives to 0.
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: f64) -> Self {
        self.values.insert(key.into(), value.max(0.0));
        self
    }

    /// Derive totals by summing each declared category across all entries.
    #[must_use]
    pub fn from_entries(categories: &[Category], entries: &[PeriodEntry]) -> Self {
        let mut totals = Self::new();
        for category in categories {
            let sum: f64 = entries.iter().map(|e| e.value_of(&category.key)).sum();
            totals.values.insert(category.key.clone(), sum);
        }
        totals
    }

    /// Look up the magnitude for a category key, defaulting to 0.
    #[must_use]
    pub fn value_of(&self, key: &str) -> f64 {
        self.values.get(key).copied().unwrap_or(0.0)
    }

    /// Sum of magnitudes across the declared categories.
    #[must_use]
    pub fn grand_total(&self, categories: &[Category]) -> f64 {
        categories.iter().map(|c| self.value_of(&c.key)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<Category> {
        vec![
            Category::new("activities", "Activities", "primary-500"),
            Category::new("content", "Content", "success-500"),
        ]
    }

    #[test]
    fn test_category_color_resolves_token() {
        let palette = TokenPalette::light();
        let cat = Category::new("a", "A", "primary-500");
        assert_eq!(cat.color(&palette), palette.resolve_or_neutral("primary-500"));
    }

    #[test]
    fn test_category_color_unknown_token_is_neutral() {
        let palette = TokenPalette::light();
        let cat = Category::new("a", "A", "missing-999");
        assert_eq!(cat.color(&palette), palette.resolve_or_neutral("missing-999"));
    }

    #[test]
    fn test_entry_missing_key_defaults_to_zero() {
        let entry = PeriodEntry::new("Mon").with_value("activities", 4.0);
        assert_eq!(entry.value_of("content"), 0.0);
        assert_eq!(entry.value_of("activities"), 4.0);
    }

    #[test]
    fn test_entry_negative_value_clamped() {
        let entry = PeriodEntry::new("Mon").with_value("activities", -3.0);
        assert_eq!(entry.value_of("activities"), 0.0);
    }

    #[test]
    fn test_entry_total_only_counts_declared_categories() {
        let entry = PeriodEntry::new("Mon")
            .with_value("activities", 4.0)
            .with_value("content", 2.0)
            .with_value("untracked", 99.0);
        assert_eq!(entry.total_for(&categories()), 6.0);
    }

    #[test]
    fn test_totals_from_entries() {
        let entries = vec![
            PeriodEntry::new("Mon").with_value("activities", 1.0),
            PeriodEntry::new("Tue")
                .with_value("activities", 2.0)
                .with_value("content", 5.0),
        ];
        let totals = CategoryTotals::from_entries(&categories(), &entries);
        assert_eq!(totals.value_of("activities"), 3.0);
        assert_eq!(totals.value_of("content"), 5.0);
        assert_eq!(totals.grand_total(&categories()), 8.0);
    }

    #[test]
    fn test_totals_missing_key_defaults_to_zero() {
        let totals = CategoryTotals::new().with_value("activities", 60.0);
        assert_eq!(totals.value_of("content"), 0.0);
    }

    #[test]
    fn test_entry_serde_roundtrip() {
        let entry = PeriodEntry::new("Mon")
            .with_value("activities", 4.0)
            .with_value("content", 2.5);
        let json = serde_json::to_string(&entry).expect("serialize");
        let back: PeriodEntry = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(entry, back);
    }
}
