use serde::{Deserialize, Serialize};

use crate::core::{DomainRect, PlottedPoint};
use crate::error::{ChartError, ChartResult};

/// Named partition of the strike-zone plot into numbered regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ZoneScheme {
    /// 3x3 grid numbered 1-9 plus outside regions 11 (left), 12 (bottom),
    /// 13 (top) and 14 (right).
    #[default]
    #[serde(rename = "standard-13")]
    Standard13,
    /// Simplified bullpen layout: top row 1-3, full-width middle band 4,
    /// bottom row 5-7. Nothing outside the strike zone.
    #[serde(rename = "rh-7")]
    Rh7,
}

impl ZoneScheme {
    #[must_use]
    pub fn zone_ids(self) -> &'static [u8] {
        match self {
            Self::Standard13 => &[1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 12, 13, 14],
            Self::Rh7 => &[1, 2, 3, 4, 5, 6, 7],
        }
    }

    #[must_use]
    pub fn contains(self, zone: ZoneId) -> bool {
        self.zone_ids().contains(&zone.get())
    }
}

/// Zone identifier within a [`ZoneScheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneId(u8);

impl ZoneId {
    pub const OUTSIDE_LEFT: Self = Self(11);
    pub const OUTSIDE_BOTTOM: Self = Self(12);
    pub const OUTSIDE_TOP: Self = Self(13);
    pub const OUTSIDE_RIGHT: Self = Self(14);

    /// Validates `value` against `scheme`.
    pub fn new(value: u8, scheme: ZoneScheme) -> ChartResult<Self> {
        let zone = Self(value);
        if !scheme.contains(zone) {
            return Err(ChartError::InvalidData(format!(
                "zone {value} does not exist in scheme {scheme:?}"
            )));
        }
        Ok(zone)
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// True for zones drawn inside the strike-zone rectangle.
    #[must_use]
    pub fn is_in_strike_zone(self) -> bool {
        (1..=9).contains(&self.0)
    }
}

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strike-zone rectangle in batter-perspective inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrikeZoneGeometry {
    pub rect: DomainRect,
}

impl Default for StrikeZoneGeometry {
    /// Plate width 17 in, 24 in tall, bottom edge at y = 0.
    fn default() -> Self {
        Self {
            rect: DomainRect::new(-8.5, 8.5, 0.0, 24.0),
        }
    }
}

impl StrikeZoneGeometry {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.rect.is_valid() {
            return Err(ChartError::InvalidData(
                "strike zone must be finite with left < right and bottom < top".to_owned(),
            ));
        }
        Ok(self)
    }

    fn column_edges(self) -> (f64, f64) {
        let third = self.rect.width() / 3.0;
        (self.rect.left + third, self.rect.left + 2.0 * third)
    }

    fn row_edges(self) -> (f64, f64) {
        let third = self.rect.height() / 3.0;
        (self.rect.top - third, self.rect.top - 2.0 * third)
    }

    /// Grid column 0..=2, boundaries resolving to the left cell.
    fn column_of(self, x: f64) -> usize {
        let (first, second) = self.column_edges();
        if x <= first {
            0
        } else if x <= second {
            1
        } else {
            2
        }
    }

    /// Grid row 0..=2 counted from the top, boundaries resolving upward.
    fn row_of(self, y: f64) -> usize {
        let (first, second) = self.row_edges();
        if y >= first {
            0
        } else if y >= second {
            1
        } else {
            2
        }
    }

    fn column_span(self, column: usize) -> (f64, f64) {
        let (first, second) = self.column_edges();
        match column {
            0 => (self.rect.left, first),
            1 => (first, second),
            _ => (second, self.rect.right),
        }
    }

    fn row_span(self, row: usize) -> (f64, f64) {
        let (first, second) = self.row_edges();
        match row {
            0 => (first, self.rect.top),
            1 => (second, first),
            _ => (self.rect.bottom, second),
        }
    }
}

/// Returns the zone enclosing `point`.
///
/// Zones are numbered from the batter's perspective; `point` must already be
/// in domain space (see `ViewConfig::to_domain`). A point exactly on a grid
/// boundary belongs to the lower-indexed zone.
#[must_use]
pub fn classify(
    point: PlottedPoint,
    scheme: ZoneScheme,
    geometry: StrikeZoneGeometry,
) -> Option<ZoneId> {
    if !point.is_finite() {
        return None;
    }

    let inside = geometry.rect.contains(point);
    match scheme {
        ZoneScheme::Standard13 if inside => {
            let row = geometry.row_of(point.y);
            let column = geometry.column_of(point.x);
            Some(ZoneId((row * 3 + column + 1) as u8))
        }
        ZoneScheme::Standard13 => Some(classify_outside(point, geometry.rect)),
        ZoneScheme::Rh7 if inside => {
            let zone = match geometry.row_of(point.y) {
                0 => 1 + geometry.column_of(point.x),
                1 => 4,
                _ => 5 + geometry.column_of(point.x),
            };
            Some(ZoneId(zone as u8))
        }
        ZoneScheme::Rh7 => None,
    }
}

/// Outside regions split along the rectangle's diagonals.
fn classify_outside(point: PlottedPoint, rect: DomainRect) -> ZoneId {
    let center = rect.center();
    let u = (point.x - center.x) / (rect.width() / 2.0);
    let v = (point.y - center.y) / (rect.height() / 2.0);

    let horizontal = if u < 0.0 {
        ZoneId::OUTSIDE_LEFT
    } else {
        ZoneId::OUTSIDE_RIGHT
    };
    let vertical = if v < 0.0 {
        ZoneId::OUTSIDE_BOTTOM
    } else {
        ZoneId::OUTSIDE_TOP
    };

    let (du, dv) = (u.abs(), v.abs());
    if du > dv {
        horizontal
    } else if dv > du {
        vertical
    } else {
        horizontal.min(vertical)
    }
}

/// Domain rectangle covered by an in-zone cell, or `None` for outside regions
/// and ids the scheme does not define.
#[must_use]
pub fn zone_bounds(
    zone: ZoneId,
    scheme: ZoneScheme,
    geometry: StrikeZoneGeometry,
) -> Option<DomainRect> {
    if !scheme.contains(zone) {
        return None;
    }
    let cell = |row: usize, column: usize| {
        let (left, right) = geometry.column_span(column);
        let (bottom, top) = geometry.row_span(row);
        DomainRect::new(left, right, bottom, top)
    };

    let index = usize::from(zone.get());
    match scheme {
        ZoneScheme::Standard13 if zone.is_in_strike_zone() => {
            Some(cell((index - 1) / 3, (index - 1) % 3))
        }
        ZoneScheme::Standard13 => None,
        ZoneScheme::Rh7 => match index {
            1..=3 => Some(cell(0, index - 1)),
            4 => {
                let (bottom, top) = geometry.row_span(1);
                Some(DomainRect::new(
                    geometry.rect.left,
                    geometry.rect.right,
                    bottom,
                    top,
                ))
            }
            _ => Some(cell(2, index - 5)),
        },
    }
}

/// Representative domain point for a zone, used as an aiming target.
///
/// Outside regions resolve to a point one sixth of the zone size beyond the
/// matching edge.
#[must_use]
pub fn zone_center(
    zone: ZoneId,
    scheme: ZoneScheme,
    geometry: StrikeZoneGeometry,
) -> Option<PlottedPoint> {
    if let Some(bounds) = zone_bounds(zone, scheme, geometry) {
        return Some(bounds.center());
    }
    if scheme != ZoneScheme::Standard13 {
        return None;
    }

    let rect = geometry.rect;
    let center = rect.center();
    let dx = rect.width() / 6.0;
    let dy = rect.height() / 6.0;
    match zone {
        ZoneId::OUTSIDE_LEFT => Some(PlottedPoint::new(rect.left - dx, center.y)),
        ZoneId::OUTSIDE_BOTTOM => Some(PlottedPoint::new(center.x, rect.bottom - dy)),
        ZoneId::OUTSIDE_TOP => Some(PlottedPoint::new(center.x, rect.top + dy)),
        ZoneId::OUTSIDE_RIGHT => Some(PlottedPoint::new(rect.right + dx, center.y)),
        _ => None,
    }
}
