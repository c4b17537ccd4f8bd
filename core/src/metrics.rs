use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

/// Prometheus-tellere for motoren. Eget register per motor (ingen global tilstand).
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub frames_analyzed: IntCounter,
    pub incomplete_frames: IntCounter,
    pub reps_completed: IntCounter,
    pub form_corrections: IntCounter,
    pub sessions_recorded: IntCounter,
    pub achievements_unlocked: IntCounter,
}

fn counter(registry: &Registry, name: &str, help: &str) -> prometheus::Result<IntCounter> {
    let c = IntCounter::new(name, help)?;
    registry.register(Box::new(c.clone()))?;
    Ok(c)
}

impl Metrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();
        Ok(Self {
            frames_analyzed: counter(&registry, "biomech_frames_analyzed_total", "Frames run through an analyzer")?,
            incomplete_frames: counter(&registry, "biomech_incomplete_frames_total", "Frames with missing required landmarks")?,
            reps_completed: counter(&registry, "biomech_reps_completed_total", "Completed repetitions")?,
            form_corrections: counter(&registry, "biomech_form_corrections_total", "Frames with at least one error-severity feedback item")?,
            sessions_recorded: counter(&registry, "biomech_sessions_recorded_total", "Sessions recorded at stop")?,
            achievements_unlocked: counter(&registry, "biomech_achievements_unlocked_total", "Achievements unlocked")?,
            registry,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Tekstformat for /metrics-eksponering.
    pub fn gather_text(&self) -> String {
        let mut buf = Vec::new();
        let encoder = TextEncoder::new();
        if encoder.encode(&self.registry.gather(), &mut buf).is_err() {
            return String::new();
        }
        String::from_utf8(buf).unwrap_or_default()
    }
}

impl std::fmt::Debug for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metrics")
            .field("frames_analyzed", &self.frames_analyzed.get())
            .field("reps_completed", &self.reps_completed.get())
            .finish()
    }
}
