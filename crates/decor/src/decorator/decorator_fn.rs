use crate::decorator::Decorator;

/// A decorator written as a closure over a concrete target type
#[derive(Copy, Clone, Debug)]
pub struct DecoratorFn<F> {
    f: F,
}

pub fn decorator_fn<In, Out, F>(f: F) -> DecoratorFn<F>
where
    F: Fn(In) -> Out,
{
    DecoratorFn { f }
}

impl<In, Out, F> Decorator<In> for DecoratorFn<F>
where
    F: Fn(In) -> Out,
{
    type Out = Out;
    fn decorate(&self, raw: In) -> Self::Out {
        (self.f)(raw)
    }
}
