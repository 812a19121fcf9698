use crate::decorator::Decorator;
use crate::error::ValidationError;
use crate::target::Target;
use tracing::warn;

/// Validates the arguments before delegating.
///
/// The wrapped target returns `Err(ValidationError)` without invoking the
/// target when the predicate rejects the arguments, otherwise `Ok` with the
/// target's own output. A fallible target therefore yields
/// `Result<Result<T, E>, ValidationError>`, keeping guard failures apart
/// from target failures.
#[derive(Debug, Clone, Copy)]
pub struct Guard<P> {
    predicate: P,
}

pub fn guard<P>(predicate: P) -> Guard<P> {
    Guard { predicate }
}

#[derive(Debug, Clone)]
pub struct Guarded<T, P> {
    target: T,
    predicate: P,
}

impl<T, P: Clone> Decorator<T> for Guard<P> {
    type Out = Guarded<T, P>;

    fn decorate(&self, raw: T) -> Self::Out {
        Guarded { target: raw, predicate: self.predicate.clone() }
    }
}

impl<T, P, Args> Target<Args> for Guarded<T, P>
where
    T: Target<Args>,
    P: Fn(&Args) -> Result<(), ValidationError>,
{
    type Output = Result<T::Output, ValidationError>;

    fn call(&self, args: Args) -> Self::Output {
        if let Err(e) = (self.predicate)(&args) {
            warn!(target_name = self.target.name(), cause = %e, "rejected call");
            return Err(e);
        }
        Ok(self.target.call(args))
    }

    fn name(&self) -> &'static str {
        self.target.name()
    }
}
