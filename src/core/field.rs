use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{Hand, PlottedPoint};
use crate::error::{ChartError, ChartResult};

/// Fence distance sample at a spray angle (degrees, negative toward left field).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FencePoint {
    pub angle_deg: f64,
    pub distance_ft: f64,
}

impl FencePoint {
    #[must_use]
    pub fn new(angle_deg: f64, distance_ft: f64) -> Self {
        Self {
            angle_deg,
            distance_ft,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRegion {
    Foul,
    Infield,
    Outfield,
    BeyondFence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SprayDirection {
    Pull,
    Center,
    Opposite,
}

/// Spray-chart reading of one batted-ball location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitSummary {
    pub distance_ft: f64,
    pub spray_angle_deg: f64,
    pub region: FieldRegion,
    /// `None` for foul balls or when the batter's side is unknown.
    pub direction: Option<SprayDirection>,
}

/// Fan-shaped spray-chart field in feet, home plate at the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldGeometry {
    pub foul_line_angle_deg: f64,
    pub infield_radius_ft: f64,
    /// Half-width of the straightaway band used by [`FieldGeometry::spray_direction`].
    pub center_band_deg: f64,
    pub fence: Vec<FencePoint>,
}

impl Default for FieldGeometry {
    fn default() -> Self {
        Self {
            foul_line_angle_deg: 45.0,
            infield_radius_ft: 95.0,
            center_band_deg: 15.0,
            fence: vec![
                FencePoint::new(-45.0, 330.0),
                FencePoint::new(-22.5, 375.0),
                FencePoint::new(0.0, 400.0),
                FencePoint::new(22.5, 375.0),
                FencePoint::new(45.0, 330.0),
            ],
        }
    }
}

impl FieldGeometry {
    /// Validates limits and returns a copy with fence samples sorted by angle.
    pub fn validate(mut self) -> ChartResult<Self> {
        if !self.foul_line_angle_deg.is_finite()
            || self.foul_line_angle_deg <= 0.0
            || self.foul_line_angle_deg >= 90.0
        {
            return Err(ChartError::InvalidData(
                "foul line angle must be in (0, 90) degrees".to_owned(),
            ));
        }
        if !self.infield_radius_ft.is_finite() || self.infield_radius_ft <= 0.0 {
            return Err(ChartError::InvalidData(
                "infield radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.center_band_deg.is_finite()
            || self.center_band_deg < 0.0
            || self.center_band_deg > self.foul_line_angle_deg
        {
            return Err(ChartError::InvalidData(
                "center band must be within the foul lines".to_owned(),
            ));
        }
        if self.fence.is_empty() {
            return Err(ChartError::InvalidData(
                "field fence needs at least one sample".to_owned(),
            ));
        }
        for sample in &self.fence {
            if !sample.angle_deg.is_finite()
                || !sample.distance_ft.is_finite()
                || sample.distance_ft <= self.infield_radius_ft
            {
                return Err(ChartError::InvalidData(
                    "fence samples must be finite and beyond the infield".to_owned(),
                ));
            }
        }
        self.fence.sort_by_key(|sample| OrderedFloat(sample.angle_deg));
        Ok(self)
    }

    /// Distance from home plate in feet.
    #[must_use]
    pub fn distance(&self, point: PlottedPoint) -> f64 {
        point.x.hypot(point.y)
    }

    /// Angle from the straightaway-center line in degrees; negative values
    /// point toward left field.
    #[must_use]
    pub fn spray_angle(&self, point: PlottedPoint) -> f64 {
        point.x.atan2(point.y).to_degrees()
    }

    /// Whether a batted ball landing at `point` is between the foul lines.
    /// Points on a foul line are fair.
    #[must_use]
    pub fn is_fair(&self, point: PlottedPoint) -> bool {
        point.is_finite()
            && point.y >= 0.0
            && self.spray_angle(point).abs() <= self.foul_line_angle_deg
    }

    /// Fence distance at `angle_deg`, linearly interpolated between samples
    /// and held constant past the outermost ones.
    ///
    /// Samples are read in angle order, as [`FieldGeometry::validate`] leaves
    /// them.
    #[must_use]
    pub fn fence_distance_at(&self, angle_deg: f64) -> f64 {
        let Some((first, rest)) = self.fence.split_first() else {
            return f64::INFINITY;
        };
        if angle_deg <= first.angle_deg {
            return first.distance_ft;
        }

        let mut previous = *first;
        for sample in rest {
            if angle_deg <= sample.angle_deg {
                let span = sample.angle_deg - previous.angle_deg;
                if span <= 0.0 {
                    return sample.distance_ft;
                }
                let t = (angle_deg - previous.angle_deg) / span;
                return previous.distance_ft + t * (sample.distance_ft - previous.distance_ft);
            }
            previous = *sample;
        }
        previous.distance_ft
    }

    #[must_use]
    pub fn region(&self, point: PlottedPoint) -> FieldRegion {
        if !self.is_fair(point) {
            return FieldRegion::Foul;
        }
        let distance = self.distance(point);
        if distance <= self.infield_radius_ft {
            FieldRegion::Infield
        } else if distance > self.fence_distance_at(self.spray_angle(point)) {
            FieldRegion::BeyondFence
        } else {
            FieldRegion::Outfield
        }
    }

    /// Spray direction relative to the side the batter hit from.
    ///
    /// A right-side batter pulls the ball toward left field. Foul balls have
    /// no direction.
    #[must_use]
    pub fn spray_direction(
        &self,
        point: PlottedPoint,
        batter_side: Hand,
    ) -> Option<SprayDirection> {
        if !self.is_fair(point) {
            return None;
        }
        let angle = self.spray_angle(point);
        if angle.abs() <= self.center_band_deg {
            return Some(SprayDirection::Center);
        }
        let toward_left_field = angle < 0.0;
        let pulled = match batter_side {
            Hand::Right => toward_left_field,
            Hand::Left => !toward_left_field,
        };
        Some(if pulled {
            SprayDirection::Pull
        } else {
            SprayDirection::Opposite
        })
    }

    #[must_use]
    pub fn summarize(&self, point: PlottedPoint, batter_side: Option<Hand>) -> HitSummary {
        HitSummary {
            distance_ft: self.distance(point),
            spray_angle_deg: self.spray_angle(point),
            region: self.region(point),
            direction: batter_side.and_then(|side| self.spray_direction(point, side)),
        }
    }
}
