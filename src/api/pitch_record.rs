use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{PlottedPoint, ZoneId};
use crate::error::{ChartError, ChartResult};
use crate::game::{GameState, PitchEvent, Transition};
use crate::interaction::PlotState;

use super::{
    Batter, Catcher, ChartKind, GameStateMarker, Participants, Pitcher, PromptRole, Umpire,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PitchType {
    Fastball,
    Sinker,
    Cutter,
    Slider,
    Sweeper,
    Curveball,
    Changeup,
    Splitter,
    Knuckleball,
    Other,
}

/// Operator-entered attributes of the pitch being charted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PitchFields {
    #[serde(default)]
    pub pitch_type: Option<PitchType>,
    /// Miles per hour, as typed.
    #[serde(default)]
    pub velocity: Option<Decimal>,
    #[serde(default)]
    pub note: Option<String>,
    /// Bullpen target zone.
    #[serde(default)]
    pub intended_zone: Option<ZoneId>,
}

impl PitchFields {
    #[must_use]
    pub fn with_pitch_type(mut self, pitch_type: PitchType) -> Self {
        self.pitch_type = Some(pitch_type);
        self
    }

    #[must_use]
    pub fn with_velocity(mut self, velocity: Decimal) -> Self {
        self.velocity = Some(velocity);
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    #[must_use]
    pub fn with_intended_zone(mut self, zone: ZoneId) -> Self {
        self.intended_zone = Some(zone);
        self
    }

    /// Normalizes blank notes away and bounds velocity.
    pub fn validate(mut self) -> ChartResult<Self> {
        if let Some(velocity) = self.velocity {
            validate_velocity(velocity)?;
        }
        self.note = normalize_note(self.note);
        Ok(self)
    }
}

/// In-place correction of a persisted pitch. `None` leaves a field as is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PitchCorrection {
    #[serde(default)]
    pub velocity: Option<Decimal>,
    #[serde(default)]
    pub note: Option<String>,
}

impl PitchCorrection {
    #[must_use]
    pub fn velocity(velocity: Decimal) -> Self {
        Self {
            velocity: Some(velocity),
            note: None,
        }
    }

    #[must_use]
    pub fn note(note: impl Into<String>) -> Self {
        Self {
            velocity: None,
            note: Some(note.into()),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if let Some(velocity) = self.velocity {
            validate_velocity(velocity)?;
        }
        if self.velocity.is_none() && self.note.is_none() {
            return Err(ChartError::InvalidData(
                "pitch correction must change velocity or note".to_owned(),
            ));
        }
        Ok(())
    }

    /// Applies the correction. An empty note clears the stored note.
    pub fn apply_to(&self, record: &mut PitchRecord) {
        if let Some(velocity) = self.velocity {
            record.velocity = Some(velocity);
        }
        if let Some(note) = &self.note {
            record.note = normalize_note(Some(note.clone()));
        }
    }
}

fn validate_velocity(velocity: Decimal) -> ChartResult<()> {
    if velocity <= Decimal::ZERO || velocity > Decimal::from(120) {
        return Err(ChartError::InvalidData(format!(
            "velocity must be in (0, 120] mph, got {velocity}"
        )));
    }
    Ok(())
}

fn normalize_note(note: Option<String>) -> Option<String> {
    note.map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}

/// Persisted pitch. Immutable except for velocity/note corrections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchRecord {
    pub pitcher: Pitcher,
    #[serde(default)]
    pub batter: Option<Batter>,
    #[serde(default)]
    pub catcher: Option<Catcher>,
    #[serde(default)]
    pub umpire: Option<Umpire>,
    pub location: PlottedPoint,
    #[serde(default)]
    pub hit_location: Option<PlottedPoint>,
    /// Classified zone, bullpen charts only.
    #[serde(default)]
    pub zone: Option<ZoneId>,
    #[serde(default)]
    pub intended_zone: Option<ZoneId>,
    #[serde(default)]
    pub event: Option<PitchEvent>,
    #[serde(default)]
    pub pitch_type: Option<PitchType>,
    #[serde(default)]
    pub velocity: Option<Decimal>,
    #[serde(default)]
    pub note: Option<String>,
    /// Post-pitch game state, game charts only.
    #[serde(default)]
    pub game_state: Option<GameState>,
    pub recorded_at: DateTime<Utc>,
}

/// Store-assigned pitch identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PitchId(String);

impl PitchId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PitchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPitch {
    pub id: PitchId,
    pub record: PitchRecord,
}

/// Mode-specific input to [`build_pitch_record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordContext {
    /// Bullpen pitch: classified zone only, no count.
    Bullpen { zone: Option<ZoneId> },
    /// Game pitch with the state machine's output for it.
    Game {
        event: PitchEvent,
        transition: Transition,
    },
}

/// Assembles a pitch record from the current session inputs.
///
/// Requires a plotted pitch location and a pitcher; game charts also need a
/// batter. Pure: persisting the record and running any player prompts is the
/// caller's job.
pub fn build_pitch_record(
    participants: &Participants,
    plot: PlotState,
    fields: &PitchFields,
    context: RecordContext,
    recorded_at: DateTime<Utc>,
) -> ChartResult<PitchRecord> {
    let location = plot.pitch_point().ok_or(ChartError::MissingPlottedPoint)?;
    if !location.is_finite() {
        return Err(ChartError::InvalidData(
            "plotted point must be finite".to_owned(),
        ));
    }
    let pitcher = participants
        .pitcher
        .clone()
        .ok_or(ChartError::MissingParticipant {
            role: PromptRole::Pitcher,
        })?;

    let (batter, zone, event, game_state) = match context {
        RecordContext::Bullpen { zone } => (None, zone, None, None),
        RecordContext::Game { event, transition } => {
            let batter = participants
                .batter
                .clone()
                .ok_or(ChartError::MissingParticipant {
                    role: PromptRole::Batter,
                })?;
            (Some(batter), None, Some(event), Some(transition.next))
        }
    };

    let hit_location = match event {
        Some(PitchEvent::InPlay(_)) => plot.hit_point(),
        _ => None,
    };

    Ok(PitchRecord {
        pitcher,
        batter,
        catcher: participants.catcher.clone(),
        umpire: participants.umpire.clone(),
        location,
        hit_location,
        zone,
        intended_zone: match context {
            RecordContext::Bullpen { .. } => fields.intended_zone,
            RecordContext::Game { .. } => None,
        },
        event,
        pitch_type: fields.pitch_type,
        velocity: fields.velocity,
        note: fields.note.clone(),
        game_state,
        recorded_at,
    })
}

/// Game state implied by persisted history.
///
/// A marker set after the last pitch wins; otherwise it is the post-pitch
/// snapshot of the last record, or the opening state for an empty game chart.
#[must_use]
pub fn restore_game_state(
    kind: ChartKind,
    pitches: &[StoredPitch],
    marker: Option<&GameStateMarker>,
) -> Option<GameState> {
    match kind {
        ChartKind::Bullpen => None,
        ChartKind::Game => Some(
            marker
                .filter(|marker| marker.is_current(pitches))
                .map(|marker| marker.state)
                .or_else(|| pitches.iter().rev().find_map(|pitch| pitch.record.game_state))
                .map_or_else(GameState::opening, GameState::clamped),
        ),
    }
}
