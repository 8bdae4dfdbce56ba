use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::game::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattedType {
    GroundBall,
    FlyBall,
    LineDrive,
    Popup,
    Bunt,
}

impl BattedType {
    /// Batted types whose `field_out` records an out on the batter.
    #[must_use]
    pub fn records_field_out(self) -> bool {
        matches!(
            self,
            Self::GroundBall | Self::FlyBall | Self::LineDrive | Self::Popup
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitResult {
    Single,
    Double,
    Triple,
    HomeRun,
    DoublePlay,
    TriplePlay,
    FieldersChoice,
    Error,
    FieldOut,
}

impl HitResult {
    /// Reaching base on a hit, a fielder's choice or an error.
    #[must_use]
    pub fn is_hit(self) -> bool {
        matches!(
            self,
            Self::Single
                | Self::Double
                | Self::Triple
                | Self::HomeRun
                | Self::FieldersChoice
                | Self::Error
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HitOutcome {
    pub batted_type: BattedType,
    pub result: HitResult,
}

impl HitOutcome {
    #[must_use]
    pub fn new(batted_type: BattedType, result: HitResult) -> Self {
        Self {
            batted_type,
            result,
        }
    }

    /// Outs credited to the defense by this ball in play.
    #[must_use]
    pub fn outs_recorded(self) -> u8 {
        match self.result {
            HitResult::DoublePlay => 2,
            HitResult::TriplePlay => 3,
            HitResult::FieldOut if self.batted_type.records_field_out() => 1,
            _ => 0,
        }
    }
}

/// Flat pitch result tag as entered by the operator, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PitchResultKind {
    Ball,
    CalledStrike,
    SwingingStrike,
    Foul,
    StrikeoutLooking,
    StrikeoutSwinging,
    InPlay,
    Walk,
    HitByPitch,
    BaserunnerEvent,
}

/// Raw pitch input at the UI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchInput {
    pub result: PitchResultKind,
    #[serde(default)]
    pub hit_outcome: Option<HitOutcome>,
    #[serde(default)]
    pub outs_recorded: Option<u8>,
}

impl PitchInput {
    #[must_use]
    pub fn new(result: PitchResultKind) -> Self {
        Self {
            result,
            hit_outcome: None,
            outs_recorded: None,
        }
    }

    #[must_use]
    pub fn with_hit_outcome(mut self, outcome: HitOutcome) -> Self {
        self.hit_outcome = Some(outcome);
        self
    }

    #[must_use]
    pub fn with_outs_recorded(mut self, outs: u8) -> Self {
        self.outs_recorded = Some(outs);
        self
    }
}

/// Validated pitch event consumed by the count state machine.
///
/// `InPlay` always carries its outcome, so an in-play pitch without a batted
/// ball classification cannot reach the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PitchEvent {
    Ball,
    CalledStrike,
    SwingingStrike,
    Foul,
    StrikeoutLooking,
    StrikeoutSwinging,
    InPlay(HitOutcome),
    Walk,
    HitByPitch,
    /// Runner play during the at-bat (caught stealing, pickoff).
    BaserunnerEvent { outs_recorded: u8 },
}

impl TryFrom<PitchInput> for PitchEvent {
    type Error = ChartError;

    fn try_from(input: PitchInput) -> ChartResult<Self> {
        if input.result != PitchResultKind::InPlay && input.hit_outcome.is_some() {
            return Err(ChartError::InvalidData(format!(
                "hit outcome is only valid for in_play, got {:?}",
                input.result
            )));
        }
        if input.result != PitchResultKind::BaserunnerEvent && input.outs_recorded.is_some() {
            return Err(ChartError::InvalidData(
                "outs_recorded is only valid for baserunner events".to_owned(),
            ));
        }

        let event = match input.result {
            PitchResultKind::Ball => Self::Ball,
            PitchResultKind::CalledStrike => Self::CalledStrike,
            PitchResultKind::SwingingStrike => Self::SwingingStrike,
            PitchResultKind::Foul => Self::Foul,
            PitchResultKind::StrikeoutLooking => Self::StrikeoutLooking,
            PitchResultKind::StrikeoutSwinging => Self::StrikeoutSwinging,
            PitchResultKind::InPlay => match input.hit_outcome {
                Some(outcome) => Self::InPlay(outcome),
                None => {
                    return Err(ChartError::InvalidData(
                        "in_play requires a hit outcome".to_owned(),
                    ));
                }
            },
            PitchResultKind::Walk => Self::Walk,
            PitchResultKind::HitByPitch => Self::HitByPitch,
            PitchResultKind::BaserunnerEvent => {
                let outs_recorded = input.outs_recorded.unwrap_or(0);
                if outs_recorded > 3 {
                    return Err(ChartError::InvalidData(
                        "a baserunner event records at most 3 outs".to_owned(),
                    ));
                }
                Self::BaserunnerEvent { outs_recorded }
            }
        };
        Ok(event)
    }
}

impl PitchEvent {
    #[must_use]
    pub fn kind(self) -> PitchResultKind {
        match self {
            Self::Ball => PitchResultKind::Ball,
            Self::CalledStrike => PitchResultKind::CalledStrike,
            Self::SwingingStrike => PitchResultKind::SwingingStrike,
            Self::Foul => PitchResultKind::Foul,
            Self::StrikeoutLooking => PitchResultKind::StrikeoutLooking,
            Self::StrikeoutSwinging => PitchResultKind::StrikeoutSwinging,
            Self::InPlay(_) => PitchResultKind::InPlay,
            Self::Walk => PitchResultKind::Walk,
            Self::HitByPitch => PitchResultKind::HitByPitch,
            Self::BaserunnerEvent { .. } => PitchResultKind::BaserunnerEvent,
        }
    }

    #[must_use]
    pub fn hit_outcome(self) -> Option<HitOutcome> {
        match self {
            Self::InPlay(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Outs credited to the defense, before capping at three.
    #[must_use]
    pub fn outs_recorded(self) -> u8 {
        match self {
            Self::StrikeoutLooking | Self::StrikeoutSwinging => 1,
            Self::InPlay(outcome) => outcome.outs_recorded(),
            Self::BaserunnerEvent { outs_recorded } => outs_recorded,
            _ => 0,
        }
    }

    /// Whether the batter's plate appearance is over after this pitch.
    #[must_use]
    pub fn ends_plate_appearance(self) -> bool {
        matches!(
            self,
            Self::Walk
                | Self::HitByPitch
                | Self::StrikeoutLooking
                | Self::StrikeoutSwinging
                | Self::InPlay(_)
        )
    }
}

/// Rewrites a pitch that would overflow the count into the event it
/// actually is: a fourth ball is a walk and a third strike is a strikeout.
///
/// Fouls are left alone; a foul never ends a plate appearance.
#[must_use]
pub fn promote_terminal_pitch(event: PitchEvent, state: GameState) -> PitchEvent {
    match event {
        PitchEvent::Ball if state.balls >= 3 => PitchEvent::Walk,
        PitchEvent::CalledStrike if state.strikes >= 2 => PitchEvent::StrikeoutLooking,
        PitchEvent::SwingingStrike if state.strikes >= 2 => PitchEvent::StrikeoutSwinging,
        other => other,
    }
}
