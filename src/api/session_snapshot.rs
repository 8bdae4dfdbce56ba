use serde::{Deserialize, Serialize};

use crate::core::ViewOrientation;
use crate::game::GameState;
use crate::interaction::PlotState;

use super::{
    ChartId, ChartKind, ChartStore, ChartingSession, Participants, PitchDraft, PromptRole,
    StoredPitch,
};

/// Serializable session state used by regression tests and debugging tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub chart_id: ChartId,
    pub kind: ChartKind,
    pub participants: Participants,
    pub game_state: Option<GameState>,
    pub pitches: Vec<StoredPitch>,
    pub plot: PlotState,
    pub draft: PitchDraft,
    pub pending_prompts: Vec<PromptRole>,
    pub orientation: ViewOrientation,
    pub disable_auto_outs: bool,
}

impl<S: ChartStore> ChartingSession<S> {
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            chart_id: self.chart_id.clone(),
            kind: self.kind,
            participants: self.participants.clone(),
            game_state: self.game_state,
            pitches: self.pitches.clone(),
            plot: self.plot,
            draft: self.draft.clone(),
            pending_prompts: self.prompts.iter().collect(),
            orientation: self.config.orientation,
            disable_auto_outs: self.config.disable_auto_outs,
        }
    }
}
