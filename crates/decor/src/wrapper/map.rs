use crate::decorator::Decorator;
use crate::target::Target;

/// Transforms the value returned by the wrapped target
#[derive(Debug, Clone, Copy)]
pub struct MapOutput<F> {
    f: F,
}

pub fn map_output<F>(f: F) -> MapOutput<F> {
    MapOutput { f }
}

#[derive(Debug, Clone)]
pub struct Mapped<T, F> {
    target: T,
    f: F,
}

impl<T, F: Clone> Decorator<T> for MapOutput<F> {
    type Out = Mapped<T, F>;

    fn decorate(&self, raw: T) -> Self::Out {
        Mapped { target: raw, f: self.f.clone() }
    }
}

impl<T, F, Args, R> Target<Args> for Mapped<T, F>
where
    T: Target<Args>,
    F: Fn(T::Output) -> R,
{
    type Output = R;

    #[inline]
    fn call(&self, args: Args) -> Self::Output {
        (self.f)(self.target.call(args))
    }

    fn name(&self) -> &'static str {
        self.target.name()
    }
}
