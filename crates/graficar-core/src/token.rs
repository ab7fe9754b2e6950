//! Symbolic color tokens and their CSS custom-property rewrite.
//!
//! Charts reference colors by design-system token ("success-800",
//! "primary-500") rather than by literal value. A [`TokenPalette`] owns the
//! token-to-color table for one design system and performs the pure
//! string rewrite from a token to its CSS custom-property reference:
//!
//! ```
//! use graficar_core::TokenPalette;
//!
//! let palette = TokenPalette::light();
//! assert_eq!(palette.css_var("success-800"), "var(--color-success-800)");
//! ```
//!
//! The variable prefix is caller-supplied, so the same chart code ports
//! across design systems that namespace their custom properties differently.

use crate::color::Color;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fallback for tokens with no entry in the palette.
const FALLBACK: Color = Color {
    r: 0.62,
    g: 0.64,
    b: 0.66,
    a: 1.0,
};

/// A table mapping symbolic color tokens to concrete colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPalette {
    /// Custom-property namespace ("color" produces `var(--color-<token>)`)
    prefix: String,
    /// Token table
    entries: BTreeMap<String, Color>,
}

impl TokenPalette {
    /// Create an empty palette with the given custom-property prefix.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Add or replace a token entry.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>, color: Color) -> Self {
        self.entries.insert(token.into(), color);
        self
    }

    /// Rewrite a symbolic token to its CSS custom-property reference.
    ///
    /// This is a pure string rewrite; it does not require the token to be
    /// present in the table.
    #[must_use]
    pub fn css_var(&self, token: &str) -> String {
        format!("var(--{}-{token})", self.prefix)
    }

    /// Look up the concrete color for a token.
    #[must_use]
    pub fn resolve(&self, token: &str) -> Option<Color> {
        self.entries.get(token).copied()
    }

    /// Look up a token, falling back to a neutral gray for unknown tokens.
    ///
    /// Charts use this so that a missing palette entry degrades to a visible
    /// neutral segment instead of a panic or an invisible one.
    #[must_use]
    pub fn resolve_or_neutral(&self, token: &str) -> Color {
        self.resolve(token).unwrap_or(FALLBACK)
    }

    /// Get the custom-property prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Number of tokens in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A light-mode starter palette with the token families the stock charts
    /// reference.
    #[must_use]
    pub fn light() -> Self {
        Self::new("color")
            .with_token("primary-500", Color::rgb(0.20, 0.47, 0.96))
            .with_token("primary-800", Color::rgb(0.11, 0.28, 0.60))
            .with_token("success-500", Color::rgb(0.24, 0.65, 0.42))
            .with_token("success-800", Color::rgb(0.13, 0.42, 0.26))
            .with_token("warning-500", Color::rgb(0.93, 0.60, 0.00))
            .with_token("warning-800", Color::rgb(0.64, 0.38, 0.00))
            .with_token("neutral-200", Color::rgb(0.90, 0.91, 0.92))
            .with_token("neutral-500", Color::rgb(0.62, 0.64, 0.66))
            .with_token("neutral-800", Color::rgb(0.25, 0.27, 0.29))
    }

    /// A dark-mode starter palette.
    #[must_use]
    pub fn dark() -> Self {
        Self::new("color")
            .with_token("primary-500", Color::rgb(0.51, 0.71, 1.00))
            .with_token("primary-800", Color::rgb(0.71, 0.83, 1.00))
            .with_token("success-500", Color::rgb(0.44, 0.78, 0.58))
            .with_token("success-800", Color::rgb(0.64, 0.88, 0.72))
            .with_token("warning-500", Color::rgb(1.00, 0.78, 0.35))
            .with_token("warning-800", Color::rgb(1.00, 0.86, 0.58))
            .with_token("neutral-200", Color::rgb(0.20, 0.21, 0.22))
            .with_token("neutral-500", Color::rgb(0.45, 0.47, 0.49))
            .with_token("neutral-800", Color::rgb(0.85, 0.86, 0.87))
    }
}

impl Default for TokenPalette {
    fn default() -> Self {
        Self::light()
    }
}
