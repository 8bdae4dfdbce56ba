//! Opt-in tracing setup for hosts embedding `pitch-chart-rs`.
//!
//! Session events are logged under the `pitch_chart` target. Hosts that
//! already run a `tracing` subscriber need nothing from this module.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "pitch_chart=info";

/// Installs a compact `tracing` subscriber (feature `telemetry`).
///
/// Returns `false` without the feature, or when a global subscriber is
/// already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
