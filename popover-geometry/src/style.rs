//! Style lookups for the arrow and the popover's rounded corners.
//!
//! The engine never reads host style objects. Callers hand it a [`StyleSource`],
//! which answers with optional [`StyleHints`]. Missing or unusable values fall
//! back to the configured defaults.

use popover_core::config::PlacementConfig;
use popover_core::types::Size;
use serde::{Deserialize, Serialize};

/// Numeric style values the engine cares about. `None` means "not styled".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StyleHints {
    pub arrow_width: Option<f64>,
    pub arrow_height: Option<f64>,
    pub border_radius: Option<f64>,
}

impl StyleHints {
    /// Hints that style only the corner radius.
    pub fn with_border_radius(border_radius: f64) -> Self {
        StyleHints {
            border_radius: Some(border_radius),
            ..StyleHints::default()
        }
    }

    /// Hints that style only the arrow.
    pub fn with_arrow(width: f64, height: f64) -> Self {
        StyleHints {
            arrow_width: Some(width),
            arrow_height: Some(height),
            ..StyleHints::default()
        }
    }
}

/// Accessor the engine uses to read style values.
pub trait StyleSource {
    fn style_hints(&self) -> StyleHints;
}

impl StyleSource for StyleHints {
    fn style_hints(&self) -> StyleHints {
        *self
    }
}

impl<F> StyleSource for F
where
    F: Fn() -> StyleHints,
{
    fn style_hints(&self) -> StyleHints {
        self()
    }
}

/// Style values after defaults have been applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStyle {
    pub arrow_size: Size,
    pub border_radius: f64,
}

fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v >= 0.0)
}

/// Resolves arrow size and border radius, falling back to `config` for
/// anything the source leaves unset, negative or non-finite.
pub fn resolve_style<S: StyleSource + ?Sized>(source: &S, config: &PlacementConfig) -> ResolvedStyle {
    let hints = source.style_hints();
    let fallback = config.default_arrow_size();
    ResolvedStyle {
        arrow_size: Size::new(
            usable(hints.arrow_width).unwrap_or(fallback.width),
            usable(hints.arrow_height).unwrap_or(fallback.height),
        ),
        border_radius: usable(hints.border_radius).unwrap_or(config.default_border_radius),
    }
}
