use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::{ChartError, ChartResult};
use crate::game::GameState;

use super::{
    Batter, Catcher, ParticipantSelection, Participants, PitchCorrection, PitchId, PitchRecord,
    Pitcher, StoredPitch, Umpire,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Pitch tracking only: no batter, count or outs.
    Bullpen,
    Game,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartId(String);

impl ChartId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Chart as returned by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDocument {
    pub id: ChartId,
    pub kind: ChartKind,
    pub participants: Participants,
    pub pitches: Vec<StoredPitch>,
    #[serde(default)]
    pub game_state_marker: Option<GameStateMarker>,
}

/// Operator-set game state, such as a manual half-inning advance.
///
/// It supersedes the snapshot of `after_pitch` only while that pitch is still
/// the last one in the chart; pitching on or deleting it retires the marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateMarker {
    /// Last pitch when the marker was set, `None` for an empty chart.
    #[serde(default)]
    pub after_pitch: Option<PitchId>,
    pub state: GameState,
}

impl GameStateMarker {
    #[must_use]
    pub fn after(pitches: &[StoredPitch], state: GameState) -> Self {
        Self {
            after_pitch: pitches.last().map(|pitch| pitch.id.clone()),
            state,
        }
    }

    /// Whether the marker still sits on top of `pitches`.
    #[must_use]
    pub fn is_current(&self, pitches: &[StoredPitch]) -> bool {
        self.after_pitch.as_ref() == pitches.last().map(|pitch| &pitch.id)
    }
}

/// Partial chart update. `Some` replaces the participant or the marker.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChartUpdate {
    #[serde(default)]
    pub pitcher: Option<Pitcher>,
    #[serde(default)]
    pub batter: Option<Batter>,
    #[serde(default)]
    pub catcher: Option<Catcher>,
    #[serde(default)]
    pub umpire: Option<Umpire>,
    #[serde(default)]
    pub game_state_marker: Option<GameStateMarker>,
}

impl From<ParticipantSelection> for ChartUpdate {
    fn from(selection: ParticipantSelection) -> Self {
        let mut update = Self::default();
        match selection {
            ParticipantSelection::Pitcher(pitcher) => update.pitcher = Some(pitcher),
            ParticipantSelection::Batter(batter) => update.batter = Some(batter),
            ParticipantSelection::Catcher(catcher) => update.catcher = Some(catcher),
            ParticipantSelection::Umpire(umpire) => update.umpire = Some(umpire),
        }
        update
    }
}

impl ChartUpdate {
    #[must_use]
    pub fn game_state_marker(marker: GameStateMarker) -> Self {
        Self {
            game_state_marker: Some(marker),
            ..Self::default()
        }
    }

    pub fn apply_to(
        self,
        participants: &mut Participants,
        game_state_marker: &mut Option<GameStateMarker>,
    ) {
        if let Some(pitcher) = self.pitcher {
            participants.pitcher = Some(pitcher);
        }
        if let Some(batter) = self.batter {
            participants.batter = Some(batter);
        }
        if let Some(catcher) = self.catcher {
            participants.catcher = Some(catcher);
        }
        if let Some(umpire) = self.umpire {
            participants.umpire = Some(umpire);
        }
        if let Some(marker) = self.game_state_marker {
            *game_state_marker = Some(marker);
        }
    }
}

/// Contract implemented by the chart persistence collaborator.
///
/// Pitch mutations return the full updated pitch list in insertion order so
/// the session can recompute game state from persisted history.
pub trait ChartStore {
    fn get_chart_by_id(&mut self, chart_id: &ChartId) -> ChartResult<ChartDocument>;

    fn add_pitch(
        &mut self,
        chart_id: &ChartId,
        record: PitchRecord,
    ) -> ChartResult<Vec<StoredPitch>>;

    fn update_pitch(
        &mut self,
        chart_id: &ChartId,
        pitch_id: &PitchId,
        correction: &PitchCorrection,
    ) -> ChartResult<Vec<StoredPitch>>;

    fn delete_pitch(
        &mut self,
        chart_id: &ChartId,
        pitch_id: &PitchId,
    ) -> ChartResult<Vec<StoredPitch>>;

    fn update_chart(
        &mut self,
        chart_id: &ChartId,
        update: ChartUpdate,
    ) -> ChartResult<ChartDocument>;
}

#[derive(Debug, Clone)]
struct StoredChart {
    kind: ChartKind,
    participants: Participants,
    pitches: IndexMap<PitchId, PitchRecord>,
    game_state_marker: Option<GameStateMarker>,
}

impl StoredChart {
    fn pitch_list(&self) -> Vec<StoredPitch> {
        self.pitches
            .iter()
            .map(|(id, record)| StoredPitch {
                id: id.clone(),
                record: record.clone(),
            })
            .collect()
    }
}

/// In-process store used by headless hosts and tests.
///
/// `fail_next` injects a single persistence failure into the next call.
#[derive(Debug, Default)]
pub struct InMemoryChartStore {
    charts: IndexMap<ChartId, StoredChart>,
    next_pitch_seq: u64,
    pending_failure: Option<String>,
    call_count: usize,
}

impl InMemoryChartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty chart and returns its id.
    pub fn create_chart(
        &mut self,
        chart_id: impl Into<String>,
        kind: ChartKind,
        participants: Participants,
    ) -> ChartResult<ChartId> {
        let chart_id = ChartId::new(chart_id);
        if chart_id.as_str().is_empty() {
            return Err(ChartError::InvalidData(
                "chart id must not be empty".to_owned(),
            ));
        }
        if self.charts.contains_key(&chart_id) {
            return Err(ChartError::InvalidData(format!(
                "chart `{chart_id}` already exists"
            )));
        }
        self.charts.insert(
            chart_id.clone(),
            StoredChart {
                kind,
                participants,
                pitches: IndexMap::new(),
                game_state_marker: None,
            },
        );
        debug!(chart_id = %chart_id, ?kind, "created chart");
        Ok(chart_id)
    }

    /// Store calls made so far, failed ones included.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.call_count
    }

    pub fn fail_next(&mut self, message: impl Into<String>) {
        self.pending_failure = Some(message.into());
    }

    fn begin_call(&mut self, operation: &'static str) -> ChartResult<()> {
        self.call_count += 1;
        if let Some(message) = self.pending_failure.take() {
            warn!(operation, %message, "injected store failure");
            return Err(ChartError::Persistence(message));
        }
        Ok(())
    }

    fn chart_mut(&mut self, chart_id: &ChartId) -> ChartResult<&mut StoredChart> {
        self.charts
            .get_mut(chart_id)
            .ok_or_else(|| ChartError::ChartNotFound {
                id: chart_id.to_string(),
            })
    }

    fn document(chart_id: &ChartId, chart: &StoredChart) -> ChartDocument {
        ChartDocument {
            id: chart_id.clone(),
            kind: chart.kind,
            participants: chart.participants.clone(),
            pitches: chart.pitch_list(),
            game_state_marker: chart.game_state_marker.clone(),
        }
    }
}

impl ChartStore for InMemoryChartStore {
    fn get_chart_by_id(&mut self, chart_id: &ChartId) -> ChartResult<ChartDocument> {
        self.begin_call("get_chart_by_id")?;
        let chart = self.chart_mut(chart_id)?;
        Ok(Self::document(chart_id, chart))
    }

    fn add_pitch(
        &mut self,
        chart_id: &ChartId,
        record: PitchRecord,
    ) -> ChartResult<Vec<StoredPitch>> {
        self.begin_call("add_pitch")?;
        self.next_pitch_seq += 1;
        let pitch_id = PitchId::new(format!("{chart_id}-p{}", self.next_pitch_seq));
        let chart = self.chart_mut(chart_id)?;
        chart.pitches.insert(pitch_id.clone(), record);
        trace!(
            chart_id = %chart_id,
            pitch_id = %pitch_id,
            count = chart.pitches.len(),
            "add pitch"
        );
        Ok(chart.pitch_list())
    }

    fn update_pitch(
        &mut self,
        chart_id: &ChartId,
        pitch_id: &PitchId,
        correction: &PitchCorrection,
    ) -> ChartResult<Vec<StoredPitch>> {
        self.begin_call("update_pitch")?;
        let chart = self.chart_mut(chart_id)?;
        let record = chart
            .pitches
            .get_mut(pitch_id)
            .ok_or_else(|| ChartError::PitchNotFound {
                id: pitch_id.to_string(),
            })?;
        correction.apply_to(record);
        trace!(chart_id = %chart_id, pitch_id = %pitch_id, "update pitch");
        Ok(chart.pitch_list())
    }

    fn delete_pitch(
        &mut self,
        chart_id: &ChartId,
        pitch_id: &PitchId,
    ) -> ChartResult<Vec<StoredPitch>> {
        self.begin_call("delete_pitch")?;
        let chart = self.chart_mut(chart_id)?;
        if chart.pitches.shift_remove(pitch_id).is_none() {
            return Err(ChartError::PitchNotFound {
                id: pitch_id.to_string(),
            });
        }
        trace!(
            chart_id = %chart_id,
            pitch_id = %pitch_id,
            count = chart.pitches.len(),
            "delete pitch"
        );
        Ok(chart.pitch_list())
    }

    fn update_chart(
        &mut self,
        chart_id: &ChartId,
        update: ChartUpdate,
    ) -> ChartResult<ChartDocument> {
        self.begin_call("update_chart")?;
        let chart = self.chart_mut(chart_id)?;
        update.apply_to(&mut chart.participants, &mut chart.game_state_marker);
        trace!(chart_id = %chart_id, "update chart");
        Ok(Self::document(chart_id, chart))
    }
}
