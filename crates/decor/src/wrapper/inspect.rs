use crate::decorator::Decorator;
use crate::target::Target;

/// A side effect run by [`Inspected`] before or after the call
pub trait Hook<In: ?Sized> {
    fn run(&self, input: &In);
}

impl<F, In: ?Sized> Hook<In> for F
where
    F: Fn(&In),
{
    #[inline]
    fn run(&self, input: &In) {
        (self)(input);
    }
}

/// the hook that does nothing
impl<In: ?Sized> Hook<In> for () {
    #[inline]
    fn run(&self, _input: &In) {}
}

/// Runs `before` with the arguments and `after` with the output of every call
#[derive(Debug, Clone, Copy)]
pub struct Inspect<B, A> {
    before: B,
    after: A,
}

pub fn inspect<B, A>(before: B, after: A) -> Inspect<B, A> {
    Inspect { before, after }
}

pub fn before<B>(hook: B) -> Inspect<B, ()> {
    Inspect { before: hook, after: () }
}

pub fn after<A>(hook: A) -> Inspect<(), A> {
    Inspect { before: (), after: hook }
}

#[derive(Debug, Clone)]
pub struct Inspected<T, B, A> {
    target: T,
    before: B,
    after: A,
}

impl<T, B: Clone, A: Clone> Decorator<T> for Inspect<B, A> {
    type Out = Inspected<T, B, A>;

    fn decorate(&self, raw: T) -> Self::Out {
        Inspected { target: raw, before: self.before.clone(), after: self.after.clone() }
    }
}

impl<T, B, A, Args> Target<Args> for Inspected<T, B, A>
where
    T: Target<Args>,
    B: Hook<Args>,
    A: Hook<T::Output>,
{
    type Output = T::Output;

    fn call(&self, args: Args) -> Self::Output {
        self.before.run(&args);
        let output = self.target.call(args);
        self.after.run(&output);
        output
    }

    fn name(&self) -> &'static str {
        self.target.name()
    }
}
