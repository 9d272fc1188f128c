use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::info;

#[derive(Debug, Clone)]
pub struct StageTiming {
    pub name: String,
    pub duration: Duration,
}

/// Ordered wall-clock durations of the steps of one run.
#[derive(Debug, Default, Clone)]
pub struct StageTimings {
    steps: Vec<StageTiming>,
    step_map: HashMap<String, Duration>,
}

impl StageTimings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_step(&mut self, name: impl Into<String>, duration: Duration) {
        let name = name.into();
        *self.step_map.entry(name.clone()).or_insert(Duration::ZERO) += duration;
        self.steps.push(StageTiming { name, duration });
    }

    /// Appends every step of `other`, keeping its order.
    pub fn extend(&mut self, other: &StageTimings) {
        for step in &other.steps {
            self.add_step(step.name.clone(), step.duration);
        }
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }

    pub fn get_step(&self, name: &str) -> Option<Duration> {
        self.step_map.get(name).copied()
    }

    pub fn steps(&self) -> &[StageTiming] {
        &self.steps
    }

    pub fn log_summary(&self) {
        let total = self.total_duration();
        for step in &self.steps {
            let percentage = if total.as_secs_f64() > 0.0 {
                (step.duration.as_secs_f64() / total.as_secs_f64()) * 100.0
            } else {
                0.0
            };
            info!(
                "{:<20} {:>10.3}ms ({:>5.1}%)",
                step.name,
                step.duration.as_secs_f64() * 1000.0,
                percentage
            );
        }
        info!("{:<20} {:>10.3}ms", "total", total.as_secs_f64() * 1000.0);
    }
}

pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            name: name.into(),
        }
    }

    pub fn stop(self) -> (String, Duration) {
        (self.name, self.start.elapsed())
    }

    /// Stops the timer and records it in `timings`.
    pub fn record(self, timings: &mut StageTimings) {
        let (name, duration) = self.stop();
        timings.add_step(name, duration);
    }
}
