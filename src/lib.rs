//! pitch-chart-rs: bullpen and game charting core.
//!
//! The crate keeps the rules-heavy part of a pitch charting tool in one
//! place: the count/outs state machine that advances a game from pitch
//! events, and the coordinate mapping that turns pointer input into
//! strike-zone and spray-chart positions. Persistence, player lookup and
//! rendering stay with the host behind small traits.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod game;
pub mod interaction;
pub mod telemetry;

pub use api::{ChartingSession, SessionConfig};
pub use error::{ChartError, ChartResult};
