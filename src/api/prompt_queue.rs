use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::game::Transition;

/// Player-selection prompt the operator must answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptRole {
    Pitcher,
    Batter,
    Catcher,
    Umpire,
}

impl std::fmt::Display for PromptRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Pitcher => "pitcher",
            Self::Batter => "batter",
            Self::Catcher => "catcher",
            Self::Umpire => "umpire",
        };
        f.write_str(name)
    }
}

/// Ordered, duplicate-free queue of pending player-selection prompts.
///
/// The controller shows `current()` and pops it once answered, so at most
/// one prompt is open at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PromptQueue {
    pending: SmallVec<[PromptRole; 4]>,
}

impl PromptQueue {
    #[must_use]
    pub fn current(&self) -> Option<PromptRole> {
        self.pending.first().copied()
    }

    #[must_use]
    pub fn contains(&self, role: PromptRole) -> bool {
        self.pending.contains(&role)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = PromptRole> + '_ {
        self.pending.iter().copied()
    }

    /// Appends `role` unless it is already pending. Returns `true` when queued.
    pub fn push(&mut self, role: PromptRole) -> bool {
        if self.contains(role) {
            return false;
        }
        self.pending.push(role);
        true
    }

    pub fn pop(&mut self) -> Option<PromptRole> {
        if self.pending.is_empty() {
            return None;
        }
        Some(self.pending.remove(0))
    }

    /// Removes `role` wherever it sits. Returns `true` when it was pending.
    pub fn resolve(&mut self, role: PromptRole) -> bool {
        match self.pending.iter().position(|pending| *pending == role) {
            Some(index) => {
                self.pending.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Queues the prompt chain a transition asks for and returns the roles
    /// that were newly added.
    ///
    /// A half-inning rollover moves pitcher then batter to the front of the
    /// queue; a plain batter change only appends the batter prompt.
    pub fn enqueue_for_transition(&mut self, transition: Transition) -> SmallVec<[PromptRole; 2]> {
        let mut added = SmallVec::new();
        if transition.half_inning_change_required {
            for (index, role) in [PromptRole::Pitcher, PromptRole::Batter]
                .into_iter()
                .enumerate()
            {
                if !self.resolve(role) {
                    added.push(role);
                }
                self.pending.insert(index, role);
            }
        } else if transition.batter_change_required && self.push(PromptRole::Batter) {
            added.push(PromptRole::Batter);
        }
        added
    }
}
