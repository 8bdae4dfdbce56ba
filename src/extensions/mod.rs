//! Optional hooks layered on top of the charting session.
//!
//! Keep extensions observational and out of the core transition paths.

pub mod observers;

pub use observers::{PersistenceOperation, SessionContext, SessionEvent, SessionObserver};
