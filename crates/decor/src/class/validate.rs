use crate::args::CallArgs;
use crate::error::ValidationError;
use crate::wrapper::{Guard, guard};

/// A single argument that may hold text
pub trait ArgText {
    fn arg_text(&self) -> Option<&str>;
}

impl ArgText for str {
    #[inline]
    fn arg_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl ArgText for String {
    #[inline]
    fn arg_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: ArgText + ?Sized> ArgText for &T {
    #[inline]
    fn arg_text(&self) -> Option<&str> {
        (**self).arg_text()
    }
}

impl<T: ArgText> ArgText for Option<T> {
    #[inline]
    fn arg_text(&self) -> Option<&str> {
        self.as_ref().and_then(|value| value.arg_text())
    }
}

macro_rules! impl_arg_text_for_non_text ({ $($ty:ty)* } => {
    $(
        impl ArgText for $ty {
            #[inline]
            fn arg_text(&self) -> Option<&str> {
                None
            }
        }
    )*
});

impl_arg_text_for_non_text! { bool char i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize f32 f64 }

/// An argument tuple whose text arguments can be inspected, labelled `#0`, `#1`, ...
pub trait TextArgs {
    fn texts(&self) -> Vec<(String, &str)>;
}

impl TextArgs for () {
    fn texts(&self) -> Vec<(String, &str)> {
        Vec::new()
    }
}

macro_rules! impl_text_args_for_tuple ({ $($idx:tt $param:ident)+ } => {
    impl<$($param: ArgText,)+> TextArgs for ($($param,)+) {
        fn texts(&self) -> Vec<(String, &str)> {
            let mut texts = Vec::new();
            $(
                if let Some(text) = self.$idx.arg_text() {
                    texts.push((format!("#{}", $idx), text));
                }
            )+
            texts
        }
    }
});

impl_text_args_for_tuple! { 0 A }
impl_text_args_for_tuple! { 0 A 1 B }
impl_text_args_for_tuple! { 0 A 1 B 2 C }
impl_text_args_for_tuple! { 0 A 1 B 2 C 3 D }
impl_text_args_for_tuple! { 0 A 1 B 2 C 3 D 4 E }
impl_text_args_for_tuple! { 0 A 1 B 2 C 3 D 4 E 5 F }
impl_text_args_for_tuple! { 0 A 1 B 2 C 3 D 4 E 5 F 6 G }
impl_text_args_for_tuple! { 0 A 1 B 2 C 3 D 4 E 5 F 6 G 7 H }

impl TextArgs for (CallArgs,) {
    fn texts(&self) -> Vec<(String, &str)> {
        self.0.texts().collect()
    }
}

pub type TextGuard<Args> = Guard<fn(&Args) -> Result<(), ValidationError>>;

/// A guard refusing any call where a text argument is an empty string
pub fn no_empty_text<Args: TextArgs>() -> TextGuard<Args> {
    guard(reject_empty_text::<Args> as fn(&Args) -> Result<(), ValidationError>)
}

fn reject_empty_text<Args: TextArgs>(args: &Args) -> Result<(), ValidationError> {
    match args.texts().into_iter().find(|(_, text)| text.is_empty()) {
        Some((argument, _)) => Err(ValidationError::empty_text(argument)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use crate::args::CallArgs;
    use crate::class::{TextArgs, constructor, no_empty_text};
    use crate::error::ValidationError;
    use crate::target::{Target, TargetExt, named_fn};
    use std::cell::Cell;

    #[derive(Debug)]
    struct Product {
        name: String,
        brand: String,
    }

    impl Product {
        fn new(name: &str, brand: &str) -> Self {
            Self { name: name.to_owned(), brand: brand.to_owned() }
        }
    }

    #[test]
    fn test_texts_skip_non_text_args() {
        let args = ("a", 5, String::from("b"), Some("c"), None::<String>, 1.5);

        assert_eq!(args.texts(), vec![("#0".to_owned(), "a"), ("#2".to_owned(), "b"), ("#3".to_owned(), "c")]);
    }

    #[test]
    fn test_valid_product() {
        let product = constructor(Product::new).decorate_with(no_empty_text::<(&str, &str)>());

        let item = product.call(("Laptop", "Dell")).unwrap();
        assert_eq!(item.name, "Laptop");
        assert_eq!(item.brand, "Dell");
    }

    #[test]
    fn test_empty_text_fails_before_construction() {
        let constructed = Cell::new(0);
        let product = named_fn("Product", |name: &str, brand: &str| {
            constructed.set(constructed.get() + 1);
            Product::new(name, brand)
        })
        .decorate_with(no_empty_text::<(&str, &str)>());

        assert_eq!(product.call(("", "HP")).unwrap_err(), ValidationError::empty_text("#0"));
        assert_eq!(product.call(("Laptop", "")).unwrap_err(), ValidationError::empty_text("#1"));
        assert_eq!(constructed.get(), 0);
    }

    #[test]
    fn test_call_args_are_checked() {
        let echo = named_fn("echo", |args: CallArgs| args.len()).decorate_with(no_empty_text::<(CallArgs,)>());

        assert_eq!(echo.call((CallArgs::new().arg("x").kwarg("city", ""),)), Err(ValidationError::empty_text("city")));
        assert_eq!(echo.call((CallArgs::new().arg(0).kwarg("city", "Pune"),)), Ok(2));
    }
}
