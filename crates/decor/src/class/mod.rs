//! Class-level wrapping.
//!
//! A type is decorated through its constructor: [`constructor`] turns a
//! function building `T` into a [`Target`](crate::Target) named after `T`.
//! Decorating that target changes how every instance is built, the same way
//! a class decorator replaces `__init__`:
//!
//! - [`log`](crate::log) logs creation before delegating to the constructor
//! - [`no_empty_text`] refuses to construct when a string argument is empty
//! - [`with_display`] adds a `display` capability to every instance
//! - [`uppercase_fields`] and [`normalize_text`] rewrite string fields after construction
//!
//! [`Property`] covers accessor wrapping: validated writes and a clear hook.
//! [`Computed`] is the read-only variant, derived from owner state.

mod display;
mod normalize;
mod property;
mod validate;

pub use display::{Described, Displayed, WithDisplay, with_display};
pub use normalize::{Normalize, Normalized, TextFields, normalize_text, uppercase_fields};
pub use property::{Computed, Property, PropertyBuilder};
pub use validate::{ArgText, TextArgs, TextGuard, no_empty_text};

use crate::fn_trait::FnTrait;
use crate::target::{FnTarget, named_fn, short_type_name};

/// Creates a constructor target for `T`, named after the type
pub fn constructor<T, Args, F>(ctor: F) -> FnTarget<F, Args>
where
    F: FnTrait<Args, Output = T>,
{
    named_fn(short_type_name::<T>(), ctor)
}
