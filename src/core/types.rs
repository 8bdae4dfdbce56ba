use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Domain-space coordinate.
///
/// Pitch locations are inches from the plate center (x) and inches above the
/// bottom of the strike zone (y), always from the batter's perspective.
/// Hit locations are feet from home plate: x toward the first-base side,
/// y toward center field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlottedPoint {
    pub x: f64,
    pub y: f64,
}

impl PlottedPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a point from typed-in coordinates.
    pub fn from_decimal(x: Decimal, y: Decimal) -> ChartResult<Self> {
        let convert = |value: Decimal, axis: &str| {
            value.to_f64().ok_or_else(|| {
                ChartError::InvalidData(format!("{axis} coordinate {value} is not representable"))
            })
        };
        Ok(Self {
            x: convert(x, "x")?,
            y: convert(y, "y")?,
        })
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Pointer-space (screen pixel) coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerPoint {
    pub x: f64,
    pub y: f64,
}

impl PointerPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Snaps to whole pixels. Only the final render pass should call this.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self {
            x: self.x.round(),
            y: self.y.round(),
        }
    }
}

/// Axis-aligned rectangle in domain units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainRect {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl DomainRect {
    #[must_use]
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.top - self.bottom
    }

    #[must_use]
    pub fn center(self) -> PlottedPoint {
        PlottedPoint::new(
            (self.left + self.right) / 2.0,
            (self.bottom + self.top) / 2.0,
        )
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains(self, point: PlottedPoint) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.bottom
            && point.y <= self.top
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.left.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
            && self.top.is_finite()
            && self.left < self.right
            && self.bottom < self.top
    }
}

/// Handedness of a thrower or the side a batter stands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}
