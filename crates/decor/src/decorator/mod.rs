//! The decorator abstraction and its composition.
//!
//! A [`Decorator`] turns one value (usually a [`Target`](crate::Target)) into
//! another. Decorators compose through [`DecoratorComposer`]: the first
//! decorator wraps the raw value, the second wraps the result of the first.
//!
//! The [`decorators!`](crate::decorators) macro lists decorators the way
//! stacked attributes read, outermost first:
//!
//! ```
//! use micro_decor::{decorators, map_output, named_fn, Decorator, Target};
//!
//! let number = decorators![map_output(|v: i32| v * 2), map_output(|v: i32| v * v)]
//!     .decorate(named_fn("number", || 3));
//!
//! // squared next to the target first, then doubled
//! assert_eq!(number.call(()), 18);
//! ```

mod decorator_composer;
mod decorator_fn;
mod identity;

pub use decorator_composer::DecoratorComposer;
pub use decorator_fn::{DecoratorFn, decorator_fn};
pub use identity::IdentityDecorator;

pub trait Decorator<In> {
    type Out;

    fn decorate(&self, raw: In) -> Self::Out;
}

impl<In, D: Decorator<In> + ?Sized> Decorator<In> for &D {
    type Out = D::Out;

    #[inline]
    fn decorate(&self, raw: In) -> Self::Out {
        (**self).decorate(raw)
    }
}

/// Composes decorators listed outermost first, `decorators![d1, d2, d3]` decorates as `d1(d2(d3(target)))`.
#[macro_export]
macro_rules! decorators {
    () => {
        $crate::IdentityDecorator
    };
    ($decorator:expr $(,)?) => {
        $decorator
    };
    ($outer:expr, $($inner:expr),+ $(,)?) => {
        $crate::DecoratorComposer::new($crate::decorators!($($inner),+), $outer)
    };
}
