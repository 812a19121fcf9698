//! Ready-made decorators for plain targets.
//!
//! Each decorator here wraps a [`Target`](crate::Target) into a new target
//! with the same arguments and name:
//!
//! - [`log`] and [`trace_calls`] emit `tracing` events around the call
//! - [`timer`] reports how long the call took
//! - [`inspect`], [`before`] and [`after`] run user hooks around the call
//! - [`map_output`] transforms the returned value
//! - [`repeat`] and [`repeat_with_message`] invoke the target several times
//! - [`guard`] validates arguments before delegating
//! - [`recover`] translates target failures into values

mod guard;
mod inspect;
mod log;
mod map;
mod recover;
mod repeat;
mod timer;

pub use guard::{Guard, Guarded, guard};
pub use inspect::{Hook, Inspect, Inspected, after, before, inspect};
pub use log::{Log, Logged, TraceCalls, Traced, log, trace_calls};
pub use map::{MapOutput, Mapped, map_output};
pub use recover::{Recover, Recovered, recover};
pub use repeat::{Repeat, RepeatBuilder, RepeatConfig, Repeated, repeat, repeat_with_message};
pub use timer::{Timed, Timer, TimerBuilder, TimerConfig, timer};
