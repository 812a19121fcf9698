use crate::decorator::Decorator;
use crate::error::ConfigError;
use crate::target::Target;
use serde::Deserialize;
use tracing::{info, trace};

/// Calls the wrapped target a fixed number of times per call.
///
/// The wrapped target returns `Some` with the result of the final invocation,
/// or `None` when the repeat count is zero, in which case the target is never
/// invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repeat {
    times: usize,
    message: Option<String>,
}

/// Creates a [`Repeat`] decorator, negative counts are rejected.
pub fn repeat(times: i64) -> Result<Repeat, ConfigError> {
    Repeat::builder().times(times).build()
}

/// Like [`repeat`], the wrapped target emits `message` once per call before repeating.
pub fn repeat_with_message<S: Into<String>>(times: i64, message: S) -> Result<Repeat, ConfigError> {
    Repeat::builder().times(times).message(message).build()
}

impl Repeat {
    pub fn builder() -> RepeatBuilder {
        RepeatBuilder::new()
    }

    pub fn times(&self) -> usize {
        self.times
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct RepeatBuilder {
    times: Option<i64>,
    message: Option<String>,
}

impl RepeatBuilder {
    fn new() -> Self {
        Self { times: None, message: None }
    }

    pub fn times(mut self, times: i64) -> Self {
        self.times = Some(times);
        self
    }

    pub fn message<S: Into<String>>(mut self, message: S) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn build(self) -> Result<Repeat, ConfigError> {
        let times = self.times.ok_or(ConfigError::missing_field("times"))?;
        if times < 0 {
            return Err(ConfigError::NegativeRepeat { times });
        }
        // only reachable where usize is narrower than 64 bits
        let times = usize::try_from(times).ok().ok_or(ConfigError::RepeatOverflow { times })?;
        Ok(Repeat { times, message: self.message })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepeatConfig {
    pub times: i64,
    #[serde(default)]
    pub message: Option<String>,
}

impl TryFrom<RepeatConfig> for Repeat {
    type Error = ConfigError;

    fn try_from(config: RepeatConfig) -> Result<Self, Self::Error> {
        let builder = Repeat::builder().times(config.times);
        match config.message {
            Some(message) => builder.message(message).build(),
            None => builder.build(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Repeated<T> {
    target: T,
    times: usize,
    message: Option<String>,
}

impl<T> Decorator<T> for Repeat {
    type Out = Repeated<T>;

    fn decorate(&self, raw: T) -> Self::Out {
        Repeated { target: raw, times: self.times, message: self.message.clone() }
    }
}

impl<T, Args> Target<Args> for Repeated<T>
where
    T: Target<Args>,
    Args: Clone,
{
    type Output = Option<T::Output>;

    fn call(&self, args: Args) -> Self::Output {
        let name = self.target.name();
        if let Some(message) = &self.message {
            info!(target_name = name, "{message}");
        }

        let last = self.times.checked_sub(1)?;
        for round in 0..last {
            trace!(target_name = name, round, "repeat");
            self.target.call(args.clone());
        }
        trace!(target_name = name, round = last, "repeat");
        Some(self.target.call(args))
    }

    fn name(&self) -> &'static str {
        self.target.name()
    }
}
