use crate::error::{ChartError, ChartResult};
use crate::extensions::{SessionContext, SessionEvent, SessionObserver};

use super::{ChartStore, ChartingSession};

impl<S: ChartStore> ChartingSession<S> {
    /// Registers an observer with a unique identifier.
    pub fn register_observer(&mut self, observer: Box<dyn SessionObserver>) -> ChartResult<()> {
        let observer_id = observer.id().to_owned();
        if observer_id.is_empty() {
            return Err(ChartError::InvalidData(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.has_observer(&observer_id) {
            return Err(ChartError::InvalidData(format!(
                "observer with id `{observer_id}` is already registered"
            )));
        }
        self.observers.push(observer);
        Ok(())
    }

    /// Unregisters an observer by id. Returns `true` when removed.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        match self
            .observers
            .iter()
            .position(|entry| entry.id() == observer_id)
        {
            Some(position) => {
                self.observers.remove(position);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.observers
            .iter()
            .any(|observer| observer.id() == observer_id)
    }

    #[must_use]
    pub fn session_context(&self) -> SessionContext {
        SessionContext {
            kind: self.kind,
            game_state: self.game_state,
            pitches_len: self.pitches.len(),
            pending_prompt: self.prompts.current(),
            plot: self.plot,
        }
    }

    pub(super) fn emit_session_event(&mut self, event: SessionEvent) {
        if self.observers.is_empty() {
            return;
        }
        let context = self.session_context();
        for observer in &mut self.observers {
            observer.on_event(&event, &context);
        }
    }
}
