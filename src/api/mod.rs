mod json_contract;
mod observer_registry;
mod participants;
mod pitch_edit_controller;
mod pitch_record;
mod prompt_controller;
mod prompt_queue;
mod session;
mod session_config;
mod session_snapshot;
mod store;
mod submit_controller;

pub use json_contract::{SESSION_SNAPSHOT_JSON_SCHEMA_V1, SessionSnapshotJsonContractV1};
pub use participants::{
    Batter, BattingHand, Catcher, ParticipantSelection, Participants, Pitcher, Umpire,
};
pub use pitch_record::{
    PitchCorrection, PitchFields, PitchId, PitchRecord, PitchType, RecordContext, StoredPitch,
    build_pitch_record, restore_game_state,
};
pub use prompt_queue::{PromptQueue, PromptRole};
pub use session::ChartingSession;
pub use session_config::SessionConfig;
pub use session_snapshot::SessionSnapshot;
pub use store::{
    ChartDocument, ChartId, ChartKind, ChartStore, ChartUpdate, GameStateMarker,
    InMemoryChartStore,
};
pub use submit_controller::{PitchDraft, SubmitBlocker, SubmitOutcome};
