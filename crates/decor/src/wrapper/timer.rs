use crate::decorator::Decorator;
use crate::target::Target;
use serde::Deserialize;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Measures how long each call of the wrapped target takes.
///
/// Calls slower than the optional slow threshold are reported as warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct Timer {
    slow_threshold: Option<Duration>,
}

pub fn timer() -> Timer {
    Timer::default()
}

impl Timer {
    pub fn builder() -> TimerBuilder {
        TimerBuilder::new()
    }

    pub fn slow_threshold(&self) -> Option<Duration> {
        self.slow_threshold
    }
}

#[derive(Debug, Default)]
pub struct TimerBuilder {
    slow_threshold: Option<Duration>,
}

impl TimerBuilder {
    fn new() -> Self {
        Self { slow_threshold: None }
    }

    pub fn slow_threshold(mut self, threshold: Duration) -> Self {
        self.slow_threshold = Some(threshold);
        self
    }

    pub fn build(self) -> Timer {
        Timer { slow_threshold: self.slow_threshold }
    }
}

#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct TimerConfig {
    #[serde(default)]
    pub slow_threshold_ms: Option<u64>,
}

impl From<TimerConfig> for Timer {
    fn from(config: TimerConfig) -> Self {
        Timer { slow_threshold: config.slow_threshold_ms.map(Duration::from_millis) }
    }
}

#[derive(Debug, Clone)]
pub struct Timed<T> {
    target: T,
    slow_threshold: Option<Duration>,
}

impl<T> Decorator<T> for Timer {
    type Out = Timed<T>;

    fn decorate(&self, raw: T) -> Self::Out {
        Timed { target: raw, slow_threshold: self.slow_threshold }
    }
}

impl<T: Target<Args>, Args> Target<Args> for Timed<T> {
    type Output = T::Output;

    fn call(&self, args: Args) -> Self::Output {
        let name = self.target.name();
        let start = Instant::now();
        let output = self.target.call(args);
        let elapsed = start.elapsed();

        match self.slow_threshold {
            Some(threshold) if elapsed > threshold => {
                warn!(target_name = name, ?elapsed, ?threshold, "{name} took {:.4}s", elapsed.as_secs_f64());
            }
            _ => info!(target_name = name, ?elapsed, "{name} took {:.4}s", elapsed.as_secs_f64()),
        }
        output
    }

    fn name(&self) -> &'static str {
        self.target.name()
    }
}
