use crate::decorator::Decorator;
use crate::target::Target;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// Adds a `display` capability to every instance built by the wrapped constructor
#[derive(Debug, Default, Clone, Copy)]
pub struct WithDisplay;

pub fn with_display() -> WithDisplay {
    WithDisplay
}

#[derive(Debug, Clone)]
pub struct Displayed<T> {
    target: T,
}

impl<T> Decorator<T> for WithDisplay {
    type Out = Displayed<T>;

    fn decorate(&self, raw: T) -> Self::Out {
        Displayed { target: raw }
    }
}

impl<T: Target<Args>, Args> Target<Args> for Displayed<T> {
    type Output = Described<T::Output>;

    fn call(&self, args: Args) -> Self::Output {
        Described { inner: self.target.call(args), class_name: self.target.name() }
    }

    fn name(&self) -> &'static str {
        self.target.name()
    }
}

/// An instance carrying the name of the class that built it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Described<T> {
    inner: T,
    class_name: &'static str,
}

impl<T> Described<T> {
    pub fn class_name(&self) -> &'static str {
        self.class_name
    }

    pub fn display(&self) -> String {
        self.to_string()
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> fmt::Display for Described<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Object of class: {}", self.class_name)
    }
}

impl<T> Deref for Described<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for Described<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

#[cfg(test)]
mod tests {
    use crate::class::{constructor, with_display};
    use crate::target::{Target, TargetExt};

    #[derive(Debug, Default)]
    struct Sample {
        hits: u32,
    }

    #[test]
    fn test_display_added_to_instances() {
        let sample = constructor(Sample::default).decorate_with(with_display());

        let mut obj = sample.call(());
        obj.hits += 1;

        assert_eq!(obj.display(), "Object of class: Sample");
        assert_eq!(obj.class_name(), "Sample");
        assert_eq!(obj.into_inner().hits, 1);
    }
}
