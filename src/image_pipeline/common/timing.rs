use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::info;

#[derive(Debug, Clone)]
pub struct StageTiming {
    pub name: String,
    pub duration: Duration,
}

/// Wall-clock time spent in each pipeline stage, in execution order.
#[derive(Debug, Default, Clone)]
pub struct PipelineTimings {
    stages: Vec<StageTiming>,
    by_name: HashMap<String, Duration>,
}

impl PipelineTimings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, (name, duration): (String, Duration)) {
        *self.by_name.entry(name.clone()).or_insert(Duration::ZERO) += duration;
        self.stages.push(StageTiming { name, duration });
    }

    pub fn total(&self) -> Duration {
        self.stages.iter().map(|s| s.duration).sum()
    }

    pub fn get(&self, name: &str) -> Option<Duration> {
        self.by_name.get(name).copied()
    }

    pub fn stages(&self) -> &[StageTiming] {
        &self.stages
    }

    pub fn log_summary(&self) {
        let total = self.total().as_secs_f64();
        for stage in &self.stages {
            let share = if total > 0.0 {
                stage.duration.as_secs_f64() / total * 100.0
            } else {
                0.0
            };
            info!(
                "{:<12} {:>10.3}ms ({:>5.1}%)",
                stage.name,
                stage.duration.as_secs_f64() * 1000.0,
                share
            );
        }
        info!("{:<12} {:>10.3}ms", "total", total * 1000.0);
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
}
