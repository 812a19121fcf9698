use crate::decorator::{Decorator, IdentityDecorator};

/// Applies `inner` first and `outer` to its result, so `outer` runs first at call time
#[derive(Debug, Clone, Copy)]
pub struct DecoratorComposer<D1, D2> {
    inner: D1,
    outer: D2,
}

impl<D1, D2> DecoratorComposer<D1, D2> {
    pub fn new(inner: D1, outer: D2) -> Self {
        Self { inner, outer }
    }

    /// add a decorator which wraps everything composed so far
    pub fn and_then<D>(self, decorator: D) -> DecoratorComposer<Self, D> {
        DecoratorComposer::new(self, decorator)
    }
}

impl Default for DecoratorComposer<IdentityDecorator, IdentityDecorator> {
    fn default() -> Self {
        Self::new(IdentityDecorator, IdentityDecorator)
    }
}

impl<In, D1, D2> Decorator<In> for DecoratorComposer<D1, D2>
where
    D1: Decorator<In>,
    D2: Decorator<D1::Out>,
{
    type Out = D2::Out;

    fn decorate(&self, raw: In) -> Self::Out {
        let output_1 = self.inner.decorate(raw);
        self.outer.decorate(output_1)
    }
}

#[cfg(test)]
mod tests {
    use crate::decorator::{Decorator, DecoratorComposer, decorator_fn};

    fn tag(name: &'static str) -> impl Decorator<String, Out = String> + Copy {
        decorator_fn(move |raw: String| format!("{name}({raw})"))
    }

    #[test]
    fn test_inner_applies_first() {
        let composer = DecoratorComposer::new(tag("inner"), tag("outer"));

        assert_eq!(composer.decorate("t".into()), "outer(inner(t))");
    }

    #[test]
    fn test_and_then_wraps_outside() {
        let composer = DecoratorComposer::default().and_then(tag("d3")).and_then(tag("d2")).and_then(tag("d1"));

        assert_eq!(composer.decorate("t".into()), "d1(d2(d3(t)))");
    }

    #[test]
    fn test_macro_reads_outermost_first() {
        let composer = crate::decorators![tag("d1"), tag("d2"), tag("d3")];

        assert_eq!(composer.decorate("t".into()), "d1(d2(d3(t)))");
    }

    #[test]
    fn test_empty_macro_is_identity() {
        let composer = crate::decorators![];

        assert_eq!(composer.decorate(String::from("t")), "t");
    }
}
