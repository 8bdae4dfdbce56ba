use serde::{Deserialize, Serialize};

use crate::game::state::{MAX_BALLS, MAX_OUTS, MAX_STRIKES};
use crate::game::{GameState, PitchEvent};

/// Result of applying one pitch to a [`GameState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Post-pitch state, already clamped and rolled over when applicable.
    pub next: GameState,
    /// The plate appearance ended and no rollover already forced a new batter.
    pub batter_change_required: bool,
    /// Three outs were reached and the half-inning flipped; both pitcher and
    /// batter must be re-selected.
    pub half_inning_change_required: bool,
}

impl Transition {
    #[must_use]
    pub fn requires_prompt(self) -> bool {
        self.batter_change_required || self.half_inning_change_required
    }
}

/// Pure count/outs/inning transition function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CountStateMachine {
    /// Leaves outs at three instead of rolling the half-inning over.
    pub disable_auto_outs: bool,
}

impl CountStateMachine {
    #[must_use]
    pub fn new(disable_auto_outs: bool) -> Self {
        Self { disable_auto_outs }
    }

    /// Applies `event` to `state`.
    ///
    /// Total over every `PitchEvent`: the returned state is always within
    /// its resting ranges. Steps run in a fixed order: outs, ball/strike
    /// accrual, count reset, half-inning rollover, batter-change signal.
    #[must_use]
    pub fn apply(self, state: GameState, event: PitchEvent) -> Transition {
        let mut next = state.clamped();

        next.outs = next
            .outs
            .saturating_add(event.outs_recorded())
            .min(MAX_OUTS);

        match event {
            PitchEvent::Ball => {
                next.balls = next.balls.saturating_add(1).min(MAX_BALLS);
            }
            PitchEvent::CalledStrike | PitchEvent::SwingingStrike => {
                next.strikes = next.strikes.saturating_add(1).min(MAX_STRIKES);
            }
            PitchEvent::Foul if next.strikes < MAX_STRIKES => {
                next.strikes += 1;
            }
            _ => {}
        }

        if event.ends_plate_appearance() {
            next = next.with_count_reset();
        }

        let rollover = next.outs >= MAX_OUTS && !self.disable_auto_outs;
        if rollover {
            next = next.next_half_inning();
        }

        Transition {
            next,
            batter_change_required: event.ends_plate_appearance() && !rollover,
            half_inning_change_required: rollover,
        }
    }

    /// Folds a sequence of events from `state`.
    #[must_use]
    pub fn apply_all<I>(self, state: GameState, events: I) -> GameState
    where
        I: IntoIterator<Item = PitchEvent>,
    {
        events
            .into_iter()
            .fold(state, |current, event| self.apply(current, event).next)
    }
}
