use serde::{Deserialize, Serialize};

use crate::core::{PlottedPoint, PointerPoint};

/// Which plot a pointer event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotTarget {
    /// Pitch location on the strike-zone grid.
    StrikeZone,
    /// Batted-ball landing spot on the spray chart.
    Field,
}

/// Hover state exposed to host applications for drawing a guide cursor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverState {
    pub visible: bool,
    pub target: Option<PlotTarget>,
    pub pointer: PointerPoint,
    /// Domain position under the pointer, `None` outside the plot rectangle.
    pub domain: Option<PlottedPoint>,
}

impl Default for HoverState {
    fn default() -> Self {
        Self {
            visible: false,
            target: None,
            pointer: PointerPoint::new(0.0, 0.0),
            domain: None,
        }
    }
}

/// In-progress plot for the pitch being charted.
///
/// Cleared on reset and after a successful commit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotState {
    hover: HoverState,
    pitch_point: Option<PlottedPoint>,
    hit_point: Option<PlottedPoint>,
}

impl PlotState {
    #[must_use]
    pub fn hover(self) -> HoverState {
        self.hover
    }

    #[must_use]
    pub fn pitch_point(self) -> Option<PlottedPoint> {
        self.pitch_point
    }

    #[must_use]
    pub fn hit_point(self) -> Option<PlottedPoint> {
        self.hit_point
    }

    #[must_use]
    pub fn point(self, target: PlotTarget) -> Option<PlottedPoint> {
        match target {
            PlotTarget::StrikeZone => self.pitch_point,
            PlotTarget::Field => self.hit_point,
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.pitch_point.is_none() && self.hit_point.is_none()
    }

    pub fn on_pointer_move(
        &mut self,
        target: PlotTarget,
        pointer: PointerPoint,
        domain: Option<PlottedPoint>,
    ) {
        self.hover = HoverState {
            visible: domain.is_some(),
            target: Some(target),
            pointer,
            domain,
        };
    }

    pub fn on_pointer_leave(&mut self) {
        self.hover = HoverState::default();
    }

    /// Replaces the plotted point for `target`.
    pub fn plot(&mut self, target: PlotTarget, point: PlottedPoint) {
        match target {
            PlotTarget::StrikeZone => self.pitch_point = Some(point),
            PlotTarget::Field => self.hit_point = Some(point),
        }
    }

    pub fn clear(&mut self, target: PlotTarget) {
        match target {
            PlotTarget::StrikeZone => self.pitch_point = None,
            PlotTarget::Field => self.hit_point = None,
        }
    }

    pub fn reset(&mut self) {
        self.pitch_point = None;
        self.hit_point = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{PlotState, PlotTarget};
    use crate::core::{PlottedPoint, PointerPoint};

    #[test]
    fn reset_keeps_hover_but_clears_points() {
        let mut state = PlotState::default();
        state.on_pointer_move(
            PlotTarget::StrikeZone,
            PointerPoint::new(10.0, 10.0),
            Some(PlottedPoint::new(-19.0, 35.0)),
        );
        state.plot(PlotTarget::StrikeZone, PlottedPoint::new(-19.0, 35.0));
        state.plot(PlotTarget::Field, PlottedPoint::new(0.0, 250.0));

        state.reset();

        assert!(state.is_empty());
        assert!(state.hover().visible);
    }
}
