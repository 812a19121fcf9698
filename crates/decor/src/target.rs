//! Callables that can be decorated.
//!
//! A [`Target`] is anything that can be called with an argument tuple and
//! carries a name for diagnostics. Plain functions and closures become
//! targets through [`target_fn`] or [`named_fn`]; every wrapped target
//! produced by a decorator is a [`Target`] as well, with the same argument
//! tuple and the same name as the target it wraps.

use crate::decorator::Decorator;
use crate::fn_trait::FnTrait;
use std::any::type_name;
use std::marker::PhantomData;

/// A callable taking the argument tuple `Args`.
pub trait Target<Args> {
    type Output;

    fn call(&self, args: Args) -> Self::Output;

    /// name used in diagnostics, wrappers report the name of the target they wrap
    fn name(&self) -> &'static str;
}

pub type BoxTarget<Args, Output> = Box<dyn Target<Args, Output = Output>>;

impl<T: Target<Args> + ?Sized, Args> Target<Args> for Box<T> {
    type Output = T::Output;

    #[inline]
    fn call(&self, args: Args) -> Self::Output {
        (**self).call(args)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<T: Target<Args> + ?Sized, Args> Target<Args> for &T {
    type Output = T::Output;

    #[inline]
    fn call(&self, args: Args) -> Self::Output {
        (**self).call(args)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// a `FnTrait` holder which represents any plain function as a [`Target`]
pub struct FnTarget<F, Args> {
    name: &'static str,
    f: F,
    _phantom: PhantomData<fn(Args)>,
}

impl<F, Args> FnTarget<F, Args>
where
    F: FnTrait<Args>,
{
    fn new(name: &'static str, f: F) -> Self {
        Self { name, f, _phantom: PhantomData }
    }
}

impl<F, Args> std::fmt::Debug for FnTarget<F, Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnTarget").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Creates a target named after the function item, `add` for `fn add(..)`.
///
/// Closures have no meaningful name, use [`named_fn`] for them.
pub fn target_fn<F, Args>(f: F) -> FnTarget<F, Args>
where
    F: FnTrait<Args>,
{
    FnTarget::new(short_type_name::<F>(), f)
}

pub fn named_fn<F, Args>(name: &'static str, f: F) -> FnTarget<F, Args>
where
    F: FnTrait<Args>,
{
    FnTarget::new(name, f)
}

impl<F, Args> Target<Args> for FnTarget<F, Args>
where
    F: FnTrait<Args>,
{
    type Output = F::Output;

    #[inline]
    fn call(&self, args: Args) -> Self::Output {
        self.f.call(args)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

pub trait TargetExt<Args>: Target<Args> {
    /// apply `decorator` to this target, same as `decorator.decorate(self)`
    fn decorate_with<D>(self, decorator: D) -> D::Out
    where
        Self: Sized,
        D: Decorator<Self>,
    {
        decorator.decorate(self)
    }

    fn boxed(self) -> BoxTarget<Args, Self::Output>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<T: Target<Args> + ?Sized, Args> TargetExt<Args> for T {}

/// `Person` for `my_crate::model::Person`, `Vec` for `alloc::vec::Vec<u8>`
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = type_name::<T>();
    let without_generics = full.split('<').next().unwrap_or(full);
    without_generics.rsplit("::").next().unwrap_or(without_generics)
}

#[cfg(test)]
mod tests {
    use crate::target::{BoxTarget, Target, TargetExt, named_fn, short_type_name, target_fn};

    fn add(a: i32, b: i32) -> i32 {
        a + b
    }

    struct Point;

    #[test]
    fn test_target_fn_uses_function_name() {
        let target = target_fn(add);

        assert_eq!(target.name(), "add");
        assert_eq!(target.call((5, 7)), 12);
    }

    #[test]
    fn test_named_closure() {
        let greet = named_fn("greet", |name: &str| format!("Hello {name}"));

        assert_eq!(greet.name(), "greet");
        assert_eq!(greet.call(("Asha",)), "Hello Asha");
    }

    #[test]
    fn test_boxed_target_keeps_name() {
        let boxed: BoxTarget<(i32, i32), i32> = target_fn(add).boxed();

        assert_eq!(boxed.name(), "add");
        assert_eq!(boxed.call((1, 2)), 3);
    }

    #[test]
    fn test_reference_is_target() {
        let target = target_fn(add);
        let by_ref = &target;

        assert_eq!(by_ref.call((2, 2)), 4);
        assert_eq!(target.call((3, 3)), 6);
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name::<Point>(), "Point");
        assert_eq!(short_type_name::<Vec<u8>>(), "Vec");
        assert_eq!(short_type_name::<i32>(), "i32");
    }
}
