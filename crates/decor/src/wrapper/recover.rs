use crate::decorator::Decorator;
use crate::target::Target;
use tracing::warn;

/// Translates a failure of the wrapped target into a regular value.
///
/// This is the only wrapper that swallows target errors: an `Err(e)` from
/// the target is logged and replaced by `f(e)`.
#[derive(Debug, Clone, Copy)]
pub struct Recover<F> {
    f: F,
}

pub fn recover<F>(f: F) -> Recover<F> {
    Recover { f }
}

#[derive(Debug, Clone)]
pub struct Recovered<T, F> {
    target: T,
    f: F,
}

impl<T, F: Clone> Decorator<T> for Recover<F> {
    type Out = Recovered<T, F>;

    fn decorate(&self, raw: T) -> Self::Out {
        Recovered { target: raw, f: self.f.clone() }
    }
}

impl<T, F, Args, R, E> Target<Args> for Recovered<T, F>
where
    T: Target<Args, Output = Result<R, E>>,
    E: std::fmt::Display,
    F: Fn(E) -> R,
{
    type Output = R;

    fn call(&self, args: Args) -> Self::Output {
        match self.target.call(args) {
            Ok(value) => value,
            Err(e) => {
                warn!(target_name = self.target.name(), cause = %e, "recovered from failure");
                (self.f)(e)
            }
        }
    }

    fn name(&self) -> &'static str {
        self.target.name()
    }
}
