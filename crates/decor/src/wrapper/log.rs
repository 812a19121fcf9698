use crate::decorator::Decorator;
use crate::target::Target;
use std::fmt::Debug;
use tracing::{debug, info};

/// Logs every call of the wrapped target, before and after delegating
#[derive(Debug, Default, Clone, Copy)]
pub struct Log;

pub fn log() -> Log {
    Log
}

#[derive(Debug, Clone)]
pub struct Logged<T> {
    target: T,
}

impl<T> Decorator<T> for Log {
    type Out = Logged<T>;

    fn decorate(&self, raw: T) -> Self::Out {
        Logged { target: raw }
    }
}

impl<T: Target<Args>, Args> Target<Args> for Logged<T> {
    type Output = T::Output;

    fn call(&self, args: Args) -> Self::Output {
        let name = self.target.name();
        info!(target_name = name, "calling {name}");
        let output = self.target.call(args);
        info!(target_name = name, "{name} complete");
        output
    }

    fn name(&self) -> &'static str {
        self.target.name()
    }
}

/// Logs the arguments and the returned value of every call
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceCalls;

pub fn trace_calls() -> TraceCalls {
    TraceCalls
}

#[derive(Debug, Clone)]
pub struct Traced<T> {
    target: T,
}

impl<T> Decorator<T> for TraceCalls {
    type Out = Traced<T>;

    fn decorate(&self, raw: T) -> Self::Out {
        Traced { target: raw }
    }
}

impl<T, Args> Target<Args> for Traced<T>
where
    T: Target<Args>,
    T::Output: Debug,
    Args: Debug,
{
    type Output = T::Output;

    fn call(&self, args: Args) -> Self::Output {
        let name = self.target.name();
        debug!(target_name = name, "calling {name} with {args:?}");
        let output = self.target.call(args);
        debug!(target_name = name, "{name} returned {output:?}");
        output
    }

    fn name(&self) -> &'static str {
        self.target.name()
    }
}
