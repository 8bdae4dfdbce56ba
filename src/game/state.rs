use serde::{Deserialize, Serialize};

pub const MAX_BALLS: u8 = 3;
pub const MAX_STRIKES: u8 = 2;
pub const MAX_OUTS: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Half {
    /// Away team batting.
    #[default]
    Top,
    /// Home team batting.
    Bottom,
}

impl Half {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }
}

/// Count, outs and inning of a game chart at rest.
///
/// Bullpen charts carry no `GameState` at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub balls: u8,
    pub strikes: u8,
    pub outs: u8,
    pub inning: u32,
    pub half: Half,
}

impl Default for GameState {
    fn default() -> Self {
        Self::opening()
    }
}

impl GameState {
    /// Top of the first, empty count, nobody out.
    #[must_use]
    pub fn opening() -> Self {
        Self {
            balls: 0,
            strikes: 0,
            outs: 0,
            inning: 1,
            half: Half::Top,
        }
    }

    #[must_use]
    pub fn new(balls: u8, strikes: u8, outs: u8, inning: u32, half: Half) -> Self {
        Self {
            balls,
            strikes,
            outs,
            inning,
            half,
        }
        .clamped()
    }

    /// Forces every field into its resting range.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            balls: self.balls.min(MAX_BALLS),
            strikes: self.strikes.min(MAX_STRIKES),
            outs: self.outs.min(MAX_OUTS),
            inning: self.inning.max(1),
            half: self.half,
        }
    }

    #[must_use]
    pub fn with_count_reset(mut self) -> Self {
        self.balls = 0;
        self.strikes = 0;
        self
    }

    /// Starts the next half-inning: clears count and outs, and moves from
    /// the bottom of an inning to the top of the next one.
    #[must_use]
    pub fn next_half_inning(self) -> Self {
        let inning = match self.half {
            Half::Top => self.inning,
            Half::Bottom => self.inning.saturating_add(1),
        };
        Self {
            balls: 0,
            strikes: 0,
            outs: 0,
            inning,
            half: self.half.flipped(),
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let half = match self.half {
            Half::Top => "top",
            Half::Bottom => "bot",
        };
        write!(
            f,
            "{half} {}, {}-{}, {} out",
            self.inning, self.balls, self.strikes, self.outs
        )
    }
}
