use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::SessionSnapshot;

pub const SESSION_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: SessionSnapshot,
}

impl SessionSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize session snapshot: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = SessionSnapshotJsonContractV1 {
            schema_version: SESSION_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<SessionSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: SessionSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::Serialization(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != SESSION_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::Serialization(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
