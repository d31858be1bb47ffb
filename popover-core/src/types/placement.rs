//! Placement Types.
//!
//! This module provides the enums used to request and report where a popover
//! is drawn relative to its anchor.
//!
//! # Types
//!
//! - [`Placement`]: A requested or resolved placement, including `Auto` and `Floating`.
//! - [`Side`]: One of the four directional placements a solver can produce.
//! - [`PlacementRequest`]: A single placement or a priority-ordered list of placements.
//!
//! # Examples
//!
//! ```
//! use popover_core::types::{Placement, PlacementRequest, Side};
//!
//! let placement: Placement = "left".parse().unwrap();
//! assert_eq!(placement.side(), Some(Side::Left));
//!
//! // The deprecated "center" spelling still parses, as `Floating`.
//! assert_eq!("center".parse::<Placement>().unwrap(), Placement::Floating);
//!
//! let request = PlacementRequest::from(vec![Placement::Top, Placement::Auto]);
//! assert!(!request.is_auto());
//! ```

use crate::error::PlacementParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a popover is drawn relative to its anchor.
///
/// `Auto` is only ever a request. `Floating` is both a request and a legitimate
/// resolved state (centered in the display area or inside the anchor).
/// The deprecated `center` spelling is accepted on input and maps to `Floating`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Above the anchor, arrow pointing down.
    Top,
    /// Below the anchor, arrow pointing up.
    Bottom,
    /// Left of the anchor, arrow pointing right.
    Left,
    /// Right of the anchor, arrow pointing left.
    Right,
    /// Let the engine pick the side with the most room.
    #[default]
    Auto,
    /// Centered, independent of the anchor.
    #[serde(alias = "center")]
    Floating,
}

impl Placement {
    /// Returns the directional [`Side`] for `Top`, `Bottom`, `Left` and `Right`,
    /// and `None` for `Auto` and `Floating`.
    pub fn side(&self) -> Option<Side> {
        match self {
            Placement::Top => Some(Side::Top),
            Placement::Bottom => Some(Side::Bottom),
            Placement::Left => Some(Side::Left),
            Placement::Right => Some(Side::Right),
            Placement::Auto | Placement::Floating => None,
        }
    }
}

impl fmt::Display for Placement {
    /// Formats the `Placement` as a lowercase string (e.g., "top", "floating").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Placement::Top => "top",
            Placement::Bottom => "bottom",
            Placement::Left => "left",
            Placement::Right => "right",
            Placement::Auto => "auto",
            Placement::Floating => "floating",
        };
        f.write_str(name)
    }
}

impl FromStr for Placement {
    type Err = PlacementParseError;

    /// Parses a placement name case-insensitively. `"center"` maps to `Floating`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "top" => Ok(Placement::Top),
            "bottom" => Ok(Placement::Bottom),
            "left" => Ok(Placement::Left),
            "right" => Ok(Placement::Right),
            "auto" => Ok(Placement::Auto),
            "floating" | "center" => Ok(Placement::Floating),
            _ => Err(PlacementParseError(s.to_string())),
        }
    }
}

/// One of the four sides of an anchor a popover can attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// All sides, in the order used for tie-breaking when ranking free space.
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Top, Side::Bottom];

    /// Checks if this side is `Left` or `Right`, i.e. the arrow runs along the x-axis.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Side::Left | Side::Right)
    }
}

impl From<Side> for Placement {
    fn from(side: Side) -> Self {
        match side {
            Side::Top => Placement::Top,
            Side::Bottom => Placement::Bottom,
            Side::Left => Placement::Left,
            Side::Right => Placement::Right,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Placement::from(*self).fmt(f)
    }
}

/// The caller's placement preference: one placement, or a list in priority order.
///
/// Deserializes from either a single name (`"top"`) or a list (`["left", "auto"]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlacementRequest {
    Single(Placement),
    List(Vec<Placement>),
}

impl PlacementRequest {
    /// Returns `true` when the request leaves the choice entirely to the engine:
    /// a single `Auto`, or an empty list.
    pub fn is_auto(&self) -> bool {
        match self {
            PlacementRequest::Single(placement) => *placement == Placement::Auto,
            PlacementRequest::List(placements) => placements.is_empty(),
        }
    }
}

impl Default for PlacementRequest {
    fn default() -> Self {
        PlacementRequest::Single(Placement::Auto)
    }
}

impl From<Placement> for PlacementRequest {
    fn from(placement: Placement) -> Self {
        PlacementRequest::Single(placement)
    }
}

impl From<Side> for PlacementRequest {
    fn from(side: Side) -> Self {
        PlacementRequest::Single(side.into())
    }
}

impl From<Vec<Placement>> for PlacementRequest {
    fn from(placements: Vec<Placement>) -> Self {
        PlacementRequest::List(placements)
    }
}
