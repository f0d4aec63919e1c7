//! Telemetry helpers for applications embedding `carousel-rs`.
//!
//! Tracing setup stays explicit and opt-in: hosts either call
//! [`init_default_tracing`] once at startup or install their own `tracing`
//! subscriber and filters. The engine itself only emits spans and events.

/// Initializes a default `tracing` subscriber when the `telemetry` feature
/// is enabled.
///
/// Honors `RUST_LOG` when set and otherwise logs this crate at `info`.
/// Returns `false` when nothing was installed, either because the feature is
/// off or because the host already set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("carousel_rs=info"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
