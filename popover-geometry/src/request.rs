//! Inputs to the placement engine.

use crate::error::GeometryError;
use crate::style::{StyleHints, StyleSource};
use popover_core::types::{Placement, PlacementRequest, Rect, Size};
use serde::{Deserialize, Serialize};

/// Fractional nudge of a floating popover away from the display-area center.
///
/// Each component ranges over `-1.0..=1.0`, a fraction of the free margin on
/// that axis. Values outside the range are clamped by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PopoverShift {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl PopoverShift {
    pub fn new(x: f64, y: f64) -> Self {
        PopoverShift { x: Some(x), y: Some(y) }
    }
}

/// Everything the engine needs to place one popover.
///
/// Built from the two mandatory measurements and refined with the `with_*`
/// methods:
///
/// ```
/// use popover_core::types::{Placement, Rect, Size};
/// use popover_geometry::GeometryRequest;
///
/// let request = GeometryRequest::new(Size::new(200.0, 120.0), Rect::new(0.0, 0.0, 400.0, 800.0))
///     .with_anchor(Rect::new(150.0, 300.0, 100.0, 40.0))
///     .with_placement(Placement::Bottom)
///     .with_offset(4.0);
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryRequest {
    /// The natural, measured size of the popover content.
    pub requested_content_size: Size,
    #[serde(default)]
    pub placement: PlacementRequest,
    /// The anchor rectangle. `None` floats the popover.
    #[serde(default)]
    pub anchor: Option<Rect>,
    pub display_area: Rect,
    #[serde(default)]
    pub style: StyleHints,
    /// Explicit arrow size. Takes precedence over `style`.
    #[serde(default)]
    pub arrow_size: Option<Size>,
    /// Explicit corner radius. Takes precedence over `style`.
    #[serde(default)]
    pub border_radius: Option<f64>,
    /// Moves the arrow along the anchor, as a fraction of half the anchor's extent.
    #[serde(default)]
    pub arrow_shift: f64,
    #[serde(default)]
    pub popover_shift: PopoverShift,
    /// Extra distance between anchor and popover along the arrow axis.
    #[serde(default)]
    pub offset: f64,
    /// The placement resolved by the previous computation, for hysteresis.
    #[serde(default)]
    pub previous_placement: Option<Placement>,
}

impl GeometryRequest {
    pub fn new(requested_content_size: Size, display_area: Rect) -> Self {
        GeometryRequest {
            requested_content_size,
            placement: PlacementRequest::default(),
            anchor: None,
            display_area,
            style: StyleHints::default(),
            arrow_size: None,
            border_radius: None,
            arrow_shift: 0.0,
            popover_shift: PopoverShift::default(),
            offset: 0.0,
            previous_placement: None,
        }
    }

    pub fn with_anchor(mut self, anchor: Rect) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn with_placement(mut self, placement: impl Into<PlacementRequest>) -> Self {
        self.placement = placement.into();
        self
    }

    /// Captures the current hints of `source`.
    pub fn with_style<S: StyleSource + ?Sized>(mut self, source: &S) -> Self {
        self.style = source.style_hints();
        self
    }

    pub fn with_arrow_size(mut self, arrow_size: Size) -> Self {
        self.arrow_size = Some(arrow_size);
        self
    }

    pub fn with_border_radius(mut self, border_radius: f64) -> Self {
        self.border_radius = Some(border_radius);
        self
    }

    pub fn with_arrow_shift(mut self, arrow_shift: f64) -> Self {
        self.arrow_shift = arrow_shift;
        self
    }

    pub fn with_popover_shift(mut self, popover_shift: PopoverShift) -> Self {
        self.popover_shift = popover_shift;
        self
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_previous_placement(mut self, previous: Placement) -> Self {
        self.previous_placement = Some(previous);
        self
    }

    /// Checks the caller-level preconditions.
    ///
    /// The engine computes a geometry regardless; this exists so the caller
    /// can warn about measurements that are not usable yet.
    ///
    /// # Errors
    ///
    /// - `NonFiniteInput` for the first NaN or infinite number found.
    /// - `DegenerateContentSize` when the content has no area.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let size = self.requested_content_size;
        check_finite("requested_content_size", &[size.width, size.height])?;
        check_finite("display_area", &rect_values(&self.display_area))?;
        if let Some(anchor) = &self.anchor {
            check_finite("anchor", &rect_values(anchor))?;
        }
        if let Some(arrow) = &self.arrow_size {
            check_finite("arrow_size", &[arrow.width, arrow.height])?;
        }
        if let Some(radius) = self.border_radius {
            check_finite("border_radius", &[radius])?;
        }
        check_finite("arrow_shift", &[self.arrow_shift])?;
        check_finite(
            "popover_shift",
            &[
                self.popover_shift.x.unwrap_or(0.0),
                self.popover_shift.y.unwrap_or(0.0),
            ],
        )?;
        check_finite("offset", &[self.offset])?;

        if size.is_empty() || size.width < 0.0 || size.height < 0.0 {
            return Err(GeometryError::DegenerateContentSize {
                width: size.width,
                height: size.height,
            });
        }
        Ok(())
    }
}

fn rect_values(rect: &Rect) -> [f64; 4] {
    [rect.x, rect.y, rect.width, rect.height]
}

fn check_finite(field: &'static str, values: &[f64]) -> Result<(), GeometryError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(GeometryError::NonFiniteInput { field })
    }
}
