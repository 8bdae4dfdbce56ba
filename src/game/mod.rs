pub mod pitch_event;
pub mod state;
pub mod state_machine;

pub use pitch_event::{
    BattedType, HitOutcome, HitResult, PitchEvent, PitchInput, PitchResultKind,
    promote_terminal_pitch,
};
pub use state::{GameState, Half};
pub use state_machine::{CountStateMachine, Transition};
