use serde::{Deserialize, Serialize};

use crate::core::{FieldGeometry, PlotAxes, StrikeZoneGeometry, ViewOrientation, ZoneScheme};
use crate::error::{ChartError, ChartResult};

/// Charting session bootstrap configuration.
///
/// Serializable so hosts can persist operator preferences; every field has
/// a serde default, so partial JSON documents are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Manual-override mode for paused or incomplete games: outs stop at
    /// three and the half-inning never rolls over on its own.
    #[serde(default)]
    pub disable_auto_outs: bool,
    #[serde(default)]
    pub zone_scheme: ZoneScheme,
    #[serde(default)]
    pub orientation: ViewOrientation,
    #[serde(default)]
    pub strike_zone: StrikeZoneGeometry,
    #[serde(default = "PlotAxes::strike_zone_default")]
    pub zone_plot: PlotAxes,
    #[serde(default)]
    pub field: FieldGeometry,
    #[serde(default = "PlotAxes::field_default")]
    pub field_plot: PlotAxes,
    /// Turns a fourth ball into a walk and a third strike into a strikeout
    /// before the count state machine sees it.
    #[serde(default = "default_promote_terminal_pitches")]
    pub promote_terminal_pitches: bool,
}

fn default_promote_terminal_pitches() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            disable_auto_outs: false,
            zone_scheme: ZoneScheme::default(),
            orientation: ViewOrientation::default(),
            strike_zone: StrikeZoneGeometry::default(),
            zone_plot: PlotAxes::strike_zone_default(),
            field: FieldGeometry::default(),
            field_plot: PlotAxes::field_default(),
            promote_terminal_pitches: default_promote_terminal_pitches(),
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn with_disable_auto_outs(mut self, disable: bool) -> Self {
        self.disable_auto_outs = disable;
        self
    }

    #[must_use]
    pub fn with_zone_scheme(mut self, scheme: ZoneScheme) -> Self {
        self.zone_scheme = scheme;
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: ViewOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_strike_zone(mut self, strike_zone: StrikeZoneGeometry) -> Self {
        self.strike_zone = strike_zone;
        self
    }

    #[must_use]
    pub fn with_zone_plot(mut self, axes: PlotAxes) -> Self {
        self.zone_plot = axes;
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: FieldGeometry) -> Self {
        self.field = field;
        self
    }

    #[must_use]
    pub fn with_field_plot(mut self, axes: PlotAxes) -> Self {
        self.field_plot = axes;
        self
    }

    #[must_use]
    pub fn with_promote_terminal_pitches(mut self, promote: bool) -> Self {
        self.promote_terminal_pitches = promote;
        self
    }

    /// Checks geometry and plot axes; returns the config with normalized
    /// field samples.
    pub fn validate(mut self) -> ChartResult<Self> {
        self.strike_zone = self.strike_zone.validate()?;
        self.field = self.field.validate()?;
        self.zone_plot.view_config(false)?;
        self.field_plot.view_config(false)?;

        let (x0, x1) = self.zone_plot.x_domain;
        let (y0, y1) = self.zone_plot.y_domain;
        let zone = self.strike_zone.rect;
        if zone.left < x0.min(x1)
            || zone.right > x0.max(x1)
            || zone.bottom < y0.min(y1)
            || zone.top > y0.max(y1)
        {
            return Err(ChartError::InvalidData(
                "strike zone must lie inside the zone plot domain".to_owned(),
            ));
        }
        Ok(self)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::Serialization(format!("failed to parse session config json: {e}"))
        })?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize session config: {e}"))
        })
    }
}
