use crate::decorator::Decorator;
use crate::target::Target;

/// The string fields of a type which can be rewritten in place
pub trait TextFields {
    fn text_fields_mut(&mut self) -> Vec<&mut String>;
}

/// Rewrites every text field of the constructed value
#[derive(Debug, Clone, Copy)]
pub struct Normalize<F> {
    f: F,
}

pub fn normalize_text<F>(f: F) -> Normalize<F>
where
    F: Fn(&str) -> String,
{
    Normalize { f }
}

pub fn uppercase_fields() -> Normalize<fn(&str) -> String> {
    let f: fn(&str) -> String = str::to_uppercase;
    Normalize { f }
}

#[derive(Debug, Clone)]
pub struct Normalized<T, F> {
    target: T,
    f: F,
}

impl<T, F: Clone> Decorator<T> for Normalize<F> {
    type Out = Normalized<T, F>;

    fn decorate(&self, raw: T) -> Self::Out {
        Normalized { target: raw, f: self.f.clone() }
    }
}

impl<T, F, Args> Target<Args> for Normalized<T, F>
where
    T: Target<Args>,
    T::Output: TextFields,
    F: Fn(&str) -> String,
{
    type Output = T::Output;

    fn call(&self, args: Args) -> Self::Output {
        let mut value = self.target.call(args);
        for field in value.text_fields_mut() {
            let normalized = (self.f)(field.as_str());
            *field = normalized;
        }
        value
    }

    fn name(&self) -> &'static str {
        self.target.name()
    }
}
