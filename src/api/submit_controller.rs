use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::ZoneId;
use crate::error::{ChartError, ChartResult};
use crate::extensions::{PersistenceOperation, SessionEvent};
use crate::game::{PitchEvent, PitchInput, Transition, promote_terminal_pitch};
use crate::interaction::PlotTarget;

use super::{
    ChartKind, ChartStore, ChartingSession, PitchFields, PitchId, PromptRole, RecordContext,
    build_pitch_record,
};

/// Pitch fields and result entered for the pitch being charted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PitchDraft {
    #[serde(default)]
    pub event: Option<PitchEvent>,
    #[serde(default)]
    pub fields: PitchFields,
}

/// Reason the submit action is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitBlocker {
    MissingPlottedPoint,
    MissingParticipant(PromptRole),
    MissingPitchResult,
    /// A pitcher or batter prompt is still open.
    PromptPending(PromptRole),
}

impl From<SubmitBlocker> for ChartError {
    fn from(blocker: SubmitBlocker) -> Self {
        match blocker {
            SubmitBlocker::MissingPlottedPoint => ChartError::MissingPlottedPoint,
            SubmitBlocker::MissingParticipant(role) => ChartError::MissingParticipant { role },
            SubmitBlocker::MissingPitchResult => {
                ChartError::InvalidData("a pitch result is required".to_owned())
            }
            SubmitBlocker::PromptPending(role) => {
                ChartError::InvalidData(format!("{role} selection is still pending"))
            }
        }
    }
}

/// What a successful submit committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitOutcome {
    pub pitch_id: PitchId,
    /// Event actually applied, after terminal-pitch promotion.
    pub event: Option<PitchEvent>,
    pub transition: Option<Transition>,
    pub zone: Option<ZoneId>,
    pub queued_prompts: Vec<PromptRole>,
}

impl<S: ChartStore> ChartingSession<S> {
    /// Validates and stores the pitch result for the draft.
    pub fn set_pitch_input(&mut self, input: PitchInput) -> ChartResult<()> {
        let event = PitchEvent::try_from(input)?;
        self.set_pitch_event(event);
        Ok(())
    }

    pub fn set_pitch_event(&mut self, event: PitchEvent) {
        if event.hit_outcome().is_none() {
            self.plot.clear(PlotTarget::Field);
        }
        self.draft.event = Some(event);
    }

    pub fn set_pitch_fields(&mut self, fields: PitchFields) -> ChartResult<()> {
        let fields = fields.validate()?;
        if let Some(zone) = fields.intended_zone {
            if !self.config.zone_scheme.contains(zone) {
                return Err(ChartError::InvalidData(format!(
                    "intended zone {zone} is not part of {:?}",
                    self.config.zone_scheme
                )));
            }
        }
        self.draft.fields = fields;
        Ok(())
    }

    /// Everything currently preventing submission, in display order.
    ///
    /// An empty list means the submit action is enabled.
    #[must_use]
    pub fn submit_blockers(&self) -> Vec<SubmitBlocker> {
        let mut blockers = Vec::new();
        if self.plot.pitch_point().is_none() {
            blockers.push(SubmitBlocker::MissingPlottedPoint);
        }
        if self.participants.pitcher.is_none() {
            blockers.push(SubmitBlocker::MissingParticipant(PromptRole::Pitcher));
        }
        if self.kind == ChartKind::Game {
            if self.participants.batter.is_none() {
                blockers.push(SubmitBlocker::MissingParticipant(PromptRole::Batter));
            }
            if self.draft.event.is_none() {
                blockers.push(SubmitBlocker::MissingPitchResult);
            }
        }
        for role in [PromptRole::Pitcher, PromptRole::Batter] {
            if self.prompts.contains(role) && self.participants.has(role) {
                blockers.push(SubmitBlocker::PromptPending(role));
            }
        }
        blockers
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.submit_blockers().is_empty()
    }

    /// Builds the pitch record, persists it and advances the session.
    ///
    /// On a persistence failure the plot, draft and game state are left
    /// exactly as they were so the operator can retry the same submission.
    pub fn submit(&mut self) -> ChartResult<SubmitOutcome> {
        if let Some(blocker) = self.submit_blockers().first().copied() {
            return Err(blocker.into());
        }

        let (context, event, zone) = match (self.kind, self.game_state) {
            (ChartKind::Game, Some(state)) => {
                let entered = self
                    .draft
                    .event
                    .ok_or_else(|| ChartError::from(SubmitBlocker::MissingPitchResult))?;
                let event = if self.config.promote_terminal_pitches {
                    promote_terminal_pitch(entered, state)
                } else {
                    entered
                };
                let transition = self.machine.apply(state, event);
                (RecordContext::Game { event, transition }, Some(event), None)
            }
            (ChartKind::Game, None) => {
                return Err(ChartError::InvalidData(
                    "game chart has no game state".to_owned(),
                ));
            }
            (ChartKind::Bullpen, _) => {
                let zone = self
                    .plot
                    .pitch_point()
                    .and_then(|point| self.classify_point(point));
                (RecordContext::Bullpen { zone }, None, zone)
            }
        };

        let record = build_pitch_record(
            &self.participants,
            self.plot,
            &self.draft.fields,
            context,
            Utc::now(),
        )?;

        let pitches = match self.store.add_pitch(&self.chart_id, record) {
            Ok(pitches) => pitches,
            Err(err) => {
                self.report_persistence_failure(PersistenceOperation::AddPitch, &err);
                return Err(err);
            }
        };

        let pitch_id = pitches
            .last()
            .map(|pitch| pitch.id.clone())
            .ok_or_else(|| {
                ChartError::Persistence("store returned no pitches after add".to_owned())
            })?;
        self.pitches = pitches;
        self.refresh_game_state();
        self.plot.reset();
        self.draft = PitchDraft::default();

        let transition = match context {
            RecordContext::Game { transition, .. } => Some(transition),
            RecordContext::Bullpen { .. } => None,
        };

        self.emit_session_event(SessionEvent::PitchCommitted {
            pitch_id: pitch_id.to_string(),
        });

        let mut queued_prompts = Vec::new();
        if let Some(transition) = transition {
            if transition.half_inning_change_required {
                info!(
                    inning = transition.next.inning,
                    half = ?transition.next.half,
                    "half-inning rolled over"
                );
                self.emit_session_event(SessionEvent::HalfInningRolled {
                    inning: transition.next.inning,
                    half: transition.next.half,
                });
            }
            queued_prompts.extend(self.prompts.enqueue_for_transition(transition));
            for role in &queued_prompts {
                self.emit_session_event(SessionEvent::PromptQueued { role: *role });
            }
        }

        debug!(
            chart_id = %self.chart_id,
            pitch_id = %pitch_id,
            pitches = self.pitches.len(),
            state = ?self.game_state,
            "pitch committed"
        );

        Ok(SubmitOutcome {
            pitch_id,
            event,
            transition,
            zone,
            queued_prompts,
        })
    }

    /// Discards the in-progress plot and draft. Never touches persistence.
    pub fn reset(&mut self) {
        self.plot.reset();
        self.draft = PitchDraft::default();
        self.emit_session_event(SessionEvent::PlotReset);
    }
}
