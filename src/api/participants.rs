use serde::{Deserialize, Serialize};

use crate::core::Hand;
use crate::error::{ChartError, ChartResult};

use super::PromptRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattingHand {
    Left,
    Right,
    Switch,
}

impl BattingHand {
    /// Side of the plate the batter stands on against `pitcher`.
    ///
    /// Switch hitters take the side opposite the pitcher's throwing hand.
    #[must_use]
    pub fn side_against(self, pitcher: Hand) -> Hand {
        match self {
            Self::Left => Hand::Left,
            Self::Right => Hand::Right,
            Self::Switch => pitcher.opposite(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pitcher {
    pub name: String,
    pub throwing_hand: Hand,
}

impl Pitcher {
    pub fn new(name: impl Into<String>, throwing_hand: Hand) -> ChartResult<Self> {
        Ok(Self {
            name: validated_name(name.into(), "pitcher")?,
            throwing_hand,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Batter {
    pub name: String,
    pub batting_hand: BattingHand,
}

impl Batter {
    pub fn new(name: impl Into<String>, batting_hand: BattingHand) -> ChartResult<Self> {
        Ok(Self {
            name: validated_name(name.into(), "batter")?,
            batting_hand,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Catcher {
    pub name: String,
}

impl Catcher {
    pub fn new(name: impl Into<String>) -> ChartResult<Self> {
        Ok(Self {
            name: validated_name(name.into(), "catcher")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Umpire {
    pub name: String,
}

impl Umpire {
    pub fn new(name: impl Into<String>) -> ChartResult<Self> {
        Ok(Self {
            name: validated_name(name.into(), "umpire")?,
        })
    }
}

fn validated_name(name: String, role: &str) -> ChartResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ChartError::InvalidData(format!(
            "{role} name must not be empty"
        )));
    }
    Ok(trimmed.to_owned())
}

/// Players attached to a chart. Replaced wholesale on player changes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Participants {
    #[serde(default)]
    pub pitcher: Option<Pitcher>,
    #[serde(default)]
    pub batter: Option<Batter>,
    #[serde(default)]
    pub catcher: Option<Catcher>,
    #[serde(default)]
    pub umpire: Option<Umpire>,
}

impl Participants {
    #[must_use]
    pub fn with_pitcher(mut self, pitcher: Pitcher) -> Self {
        self.pitcher = Some(pitcher);
        self
    }

    #[must_use]
    pub fn with_batter(mut self, batter: Batter) -> Self {
        self.batter = Some(batter);
        self
    }

    #[must_use]
    pub fn with_catcher(mut self, catcher: Catcher) -> Self {
        self.catcher = Some(catcher);
        self
    }

    #[must_use]
    pub fn with_umpire(mut self, umpire: Umpire) -> Self {
        self.umpire = Some(umpire);
        self
    }

    /// Batter's side for the current matchup, when both players are known.
    #[must_use]
    pub fn batter_side(&self) -> Option<Hand> {
        let pitcher = self.pitcher.as_ref()?;
        let batter = self.batter.as_ref()?;
        Some(batter.batting_hand.side_against(pitcher.throwing_hand))
    }

    #[must_use]
    pub fn has(&self, role: PromptRole) -> bool {
        match role {
            PromptRole::Pitcher => self.pitcher.is_some(),
            PromptRole::Batter => self.batter.is_some(),
            PromptRole::Catcher => self.catcher.is_some(),
            PromptRole::Umpire => self.umpire.is_some(),
        }
    }
}

/// Operator answer to a player-selection prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum ParticipantSelection {
    Pitcher(Pitcher),
    Batter(Batter),
    Catcher(Catcher),
    Umpire(Umpire),
}

impl ParticipantSelection {
    #[must_use]
    pub fn role(&self) -> PromptRole {
        match self {
            Self::Pitcher(_) => PromptRole::Pitcher,
            Self::Batter(_) => PromptRole::Batter,
            Self::Catcher(_) => PromptRole::Catcher,
            Self::Umpire(_) => PromptRole::Umpire,
        }
    }
}
