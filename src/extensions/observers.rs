use serde::{Deserialize, Serialize};

use crate::api::{ChartKind, PromptRole};
use crate::game::{GameState, Half};
use crate::interaction::{PlotState, PlotTarget};

/// Read-only session snapshot passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    pub kind: ChartKind,
    pub game_state: Option<GameState>,
    pub pitches_len: usize,
    pub pending_prompt: Option<PromptRole>,
    pub plot: PlotState,
}

/// Persistence call that produced a [`SessionEvent::PersistenceFailed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersistenceOperation {
    AddPitch,
    UpdatePitch,
    DeletePitch,
    UpdateChart,
}

/// Event stream exposed to observers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    PointPlotted { target: PlotTarget, x: f64, y: f64 },
    PlotReset,
    PitchCommitted { pitch_id: String },
    PitchUpdated { pitch_id: String },
    PitchDeleted { pitch_id: String },
    /// Transient operator notification; session state was left untouched.
    PersistenceFailed {
        operation: PersistenceOperation,
        message: String,
    },
    PromptQueued { role: PromptRole },
    PromptResolved { role: PromptRole },
    HalfInningRolled { inning: u32, half: Half },
}

/// Hook interface for hosts that need to react to session activity
/// (toasts, autosave indicators, audit logs).
///
/// Observers see events and context but cannot mutate the session.
pub trait SessionObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &SessionEvent, context: &SessionContext);
}
