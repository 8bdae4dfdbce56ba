use tracing::{debug, warn};

use crate::error::{ChartError, ChartResult};
use crate::extensions::{PersistenceOperation, SessionEvent};

use super::{ChartStore, ChartingSession, PitchCorrection, PitchId};

impl<S: ChartStore> ChartingSession<S> {
    /// Corrects velocity and/or note of a persisted pitch in place.
    pub fn update_pitch(
        &mut self,
        pitch_id: &PitchId,
        correction: PitchCorrection,
    ) -> ChartResult<()> {
        correction.validate()?;
        self.ensure_known_pitch(pitch_id)?;

        match self
            .store
            .update_pitch(&self.chart_id, pitch_id, &correction)
        {
            Ok(pitches) => {
                self.pitches = pitches;
                debug!(pitch_id = %pitch_id, "pitch corrected");
                self.emit_session_event(SessionEvent::PitchUpdated {
                    pitch_id: pitch_id.to_string(),
                });
                Ok(())
            }
            Err(err) => {
                self.report_persistence_failure(PersistenceOperation::UpdatePitch, &err);
                Err(err)
            }
        }
    }

    /// Deletes a persisted pitch and recomputes game state from what remains.
    pub fn delete_pitch(&mut self, pitch_id: &PitchId) -> ChartResult<()> {
        self.ensure_known_pitch(pitch_id)?;

        match self.store.delete_pitch(&self.chart_id, pitch_id) {
            Ok(pitches) => {
                self.pitches = pitches;
                self.refresh_game_state();
                debug!(
                    pitch_id = %pitch_id,
                    pitches = self.pitches.len(),
                    state = ?self.game_state,
                    "pitch deleted"
                );
                self.emit_session_event(SessionEvent::PitchDeleted {
                    pitch_id: pitch_id.to_string(),
                });
                Ok(())
            }
            Err(err) => {
                self.report_persistence_failure(PersistenceOperation::DeletePitch, &err);
                Err(err)
            }
        }
    }

    fn ensure_known_pitch(&self, pitch_id: &PitchId) -> ChartResult<()> {
        if self.pitches.iter().any(|pitch| &pitch.id == pitch_id) {
            return Ok(());
        }
        Err(ChartError::PitchNotFound {
            id: pitch_id.to_string(),
        })
    }

    pub(super) fn report_persistence_failure(
        &mut self,
        operation: PersistenceOperation,
        err: &ChartError,
    ) {
        warn!(
            chart_id = %self.chart_id,
            ?operation,
            error = %err,
            "persistence call failed"
        );
        self.emit_session_event(SessionEvent::PersistenceFailed {
            operation,
            message: err.to_string(),
        });
    }
}
