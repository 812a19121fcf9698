//! Composable decorators for plain functions and constructors
//!
//! This crate models function decoration as three pieces:
//!
//! - a [`Target`]: something callable with an argument tuple, carrying a name
//! - a [`Decorator`]: turns a target into a wrapped target with extra behavior
//! - a decorator factory: turns configuration into a decorator, for example
//!   [`repeat`] which rejects negative counts with a [`ConfigError`]
//!
//! Wrapped targets keep the argument tuple and the name of the target they
//! wrap, so decorators stack freely. [`decorators!`] lists a stack the way
//! stacked attributes read: the last decorator wraps the target first, the
//! first one runs first at call time.
//!
//! # Example
//!
//! ```
//! use micro_decor::{decorators, log, map_output, repeat, target_fn, Target, TargetExt};
//!
//! fn add(a: i32, b: i32) -> i32 {
//!     a + b
//! }
//!
//! let add = target_fn(add).decorate_with(decorators![
//!     log(),
//!     map_output(|last: Option<i32>| last.unwrap_or_default() * 2),
//!     repeat(3).expect("count is not negative"),
//! ]);
//!
//! assert_eq!(add.name(), "add");
//! assert_eq!(add.call((5, 7)), 24);
//! ```
//!
//! Types are decorated through their constructor, see [`class`].

mod args;
mod fn_trait;
mod target;

pub mod class;
pub mod decorator;
pub mod error;
pub mod wrapper;

#[cfg(test)]
mod test_support;

pub use args::CallArgs;
pub use class::{Computed, Property, constructor};
pub use decorator::{Decorator, DecoratorComposer, IdentityDecorator, decorator_fn};
pub use error::{ArgsError, ConfigError, DecorError, ValidationError};
pub use fn_trait::FnTrait;
pub use target::{BoxTarget, FnTarget, Target, TargetExt, named_fn, target_fn};
pub use wrapper::{
    after, before, guard, inspect, log, map_output, recover, repeat, repeat_with_message, timer, trace_calls,
};
