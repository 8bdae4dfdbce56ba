use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, PlottedPoint, PointerPoint};
use crate::error::ChartResult;

/// Which side of the plate the strike-zone plot is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewOrientation {
    /// Catcher/batter perspective. Domain x grows to the screen right.
    #[default]
    BatterView,
    /// Pitcher perspective. The x axis is mirrored.
    PitcherView,
}

impl ViewOrientation {
    #[must_use]
    pub fn is_mirrored(self) -> bool {
        matches!(self, Self::PitcherView)
    }
}

/// Serializable domain/range pairs for both axes of one plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotAxes {
    pub x_domain: (f64, f64),
    pub x_range: (f64, f64),
    pub y_domain: (f64, f64),
    pub y_range: (f64, f64),
}

impl PlotAxes {
    /// Default strike-zone plot: 10 px per inch, 40 in wide, 48 in tall.
    #[must_use]
    pub fn strike_zone_default() -> Self {
        Self {
            x_domain: (-20.0, 20.0),
            x_range: (0.0, 400.0),
            y_domain: (-12.0, 36.0),
            y_range: (480.0, 0.0),
        }
    }

    /// Default spray-chart plot: 1 px per foot, home plate at bottom center.
    #[must_use]
    pub fn field_default() -> Self {
        Self {
            x_domain: (-320.0, 320.0),
            x_range: (0.0, 640.0),
            y_domain: (0.0, 440.0),
            y_range: (440.0, 0.0),
        }
    }

    pub fn view_config(self, mirrored: bool) -> ChartResult<ViewConfig> {
        Ok(ViewConfig::new(
            LinearScale::new(self.x_domain, self.x_range)?,
            LinearScale::new(self.y_domain, self.y_range)?,
            mirrored,
        ))
    }
}

/// Pointer <-> domain transform for one rendered plot.
///
/// Mirroring is the only place the rendered orientation is known; everything
/// downstream works in batter-perspective domain coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    x: LinearScale,
    y: LinearScale,
    mirrored: bool,
}

impl ViewConfig {
    #[must_use]
    pub fn new(x: LinearScale, y: LinearScale, mirrored: bool) -> Self {
        Self { x, y, mirrored }
    }

    #[must_use]
    pub fn x_scale(self) -> LinearScale {
        self.x
    }

    #[must_use]
    pub fn y_scale(self) -> LinearScale {
        self.y
    }

    #[must_use]
    pub fn mirrored(self) -> bool {
        self.mirrored
    }

    #[must_use]
    pub fn with_mirrored(mut self, mirrored: bool) -> Self {
        self.mirrored = mirrored;
        self
    }

    /// Whether a pointer coordinate lies inside the plot rectangle.
    #[must_use]
    pub fn contains_pointer(self, pointer: PointerPoint) -> bool {
        self.x.range_contains(pointer.x) && self.y.range_contains(pointer.y)
    }

    /// Maps a pointer coordinate to domain space.
    ///
    /// Returns `None` when the pointer lies outside the plot rectangle; callers
    /// must not plot anything in that case.
    #[must_use]
    pub fn to_domain(self, pointer: PointerPoint) -> Option<PlottedPoint> {
        if !self.contains_pointer(pointer) {
            return None;
        }
        let x = self.x.invert(pointer.x);
        let x = if self.mirrored { -x } else { x };
        Some(PlottedPoint::new(x, self.y.invert(pointer.y)))
    }

    /// Maps a domain coordinate to pointer space without rounding.
    #[must_use]
    pub fn to_pointer(self, point: PlottedPoint) -> PointerPoint {
        let x = if self.mirrored { -point.x } else { point.x };
        PointerPoint::new(self.x.apply(x), self.y.apply(point.y))
    }
}
