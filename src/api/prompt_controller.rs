use tracing::{debug, info};

use crate::error::{ChartError, ChartResult};
use crate::extensions::{PersistenceOperation, SessionEvent};
use crate::game::{GameState, Transition};

use super::{
    ChartKind, ChartStore, ChartUpdate, ChartingSession, GameStateMarker, ParticipantSelection,
    PromptRole,
};

impl<S: ChartStore> ChartingSession<S> {
    /// Persists a player selection and closes the matching prompt.
    ///
    /// Also used for unprompted player changes. On a persistence failure the
    /// prompt stays open and participants are unchanged.
    pub fn select_participant(&mut self, selection: ParticipantSelection) -> ChartResult<()> {
        let role = selection.role();
        if role == PromptRole::Batter && self.kind == ChartKind::Bullpen {
            return Err(ChartError::InvalidData(
                "bullpen charts have no batter".to_owned(),
            ));
        }

        let document = match self
            .store
            .update_chart(&self.chart_id, ChartUpdate::from(selection))
        {
            Ok(document) => document,
            Err(err) => {
                self.report_persistence_failure(PersistenceOperation::UpdateChart, &err);
                return Err(err);
            }
        };
        self.apply_chart_document(document);

        if self.prompts.resolve(role) {
            debug!(%role, remaining = self.prompts.len(), "prompt resolved");
            self.emit_session_event(SessionEvent::PromptResolved { role });
        } else {
            debug!(%role, "participant changed");
        }
        Ok(())
    }

    /// Opens a selection prompt on operator request.
    ///
    /// Returns `false` when that prompt is already pending.
    pub fn request_prompt(&mut self, role: PromptRole) -> ChartResult<bool> {
        if role == PromptRole::Batter && self.kind == ChartKind::Bullpen {
            return Err(ChartError::InvalidData(
                "bullpen charts have no batter".to_owned(),
            ));
        }
        let queued = self.prompts.push(role);
        if queued {
            self.emit_session_event(SessionEvent::PromptQueued { role });
        }
        Ok(queued)
    }

    /// Closes the current prompt without a selection.
    pub fn dismiss_prompt(&mut self) -> Option<PromptRole> {
        let role = self.prompts.pop()?;
        debug!(%role, "prompt dismissed");
        Some(role)
    }

    /// Manually starts the next half-inning.
    ///
    /// Used when auto outs are disabled and the operator decides the
    /// half-inning is over. The new state is persisted as a marker on the
    /// chart; on a persistence failure nothing changes.
    pub fn advance_half_inning(&mut self) -> ChartResult<GameState> {
        let state = self.game_state.ok_or_else(|| {
            ChartError::InvalidData("bullpen charts have no innings".to_owned())
        })?;
        let next = state.next_half_inning();
        let marker = GameStateMarker::after(&self.pitches, next);

        let document = match self
            .store
            .update_chart(&self.chart_id, ChartUpdate::game_state_marker(marker))
        {
            Ok(document) => document,
            Err(err) => {
                self.report_persistence_failure(PersistenceOperation::UpdateChart, &err);
                return Err(err);
            }
        };
        self.apply_chart_document(document);
        let next = self.game_state.unwrap_or(next);
        info!(inning = next.inning, half = ?next.half, "half-inning advanced manually");
        self.emit_session_event(SessionEvent::HalfInningRolled {
            inning: next.inning,
            half: next.half,
        });

        let rollover = Transition {
            next,
            batter_change_required: false,
            half_inning_change_required: true,
        };
        for role in self.prompts.enqueue_for_transition(rollover) {
            self.emit_session_event(SessionEvent::PromptQueued { role });
        }
        Ok(next)
    }
}
