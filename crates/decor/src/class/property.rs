use crate::error::ValidationError;
use std::fmt;
use tracing::{debug, warn};

type Validator<T> = Box<dyn Fn(&T) -> Result<(), ValidationError>>;
type ClearHook<T> = Box<dyn Fn(Option<&T>)>;

/// A value behind read / validated write / clear accessors.
///
/// - [`Property::get`] reads the current value, `None` once cleared
/// - [`Property::set`] runs the validator first, a rejected value leaves the current one untouched
/// - [`Property::clear`] runs the clear hook, then resets the value to `None`
pub struct Property<T> {
    name: &'static str,
    value: Option<T>,
    validator: Option<Validator<T>>,
    on_clear: Option<ClearHook<T>>,
}

impl<T> Property<T> {
    pub fn builder(name: &'static str) -> PropertyBuilder<T> {
        PropertyBuilder::new(name)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    pub fn set(&mut self, value: T) -> Result<(), ValidationError> {
        self.validate(&value)?;
        self.value = Some(value);
        debug!(property = self.name, "value updated");
        Ok(())
    }

    /// reset to `None`, returning the previous value
    pub fn clear(&mut self) -> Option<T> {
        if let Some(on_clear) = &self.on_clear {
            on_clear(self.value.as_ref());
        }
        debug!(property = self.name, "value cleared");
        self.value.take()
    }

    fn validate(&self, value: &T) -> Result<(), ValidationError> {
        let Some(validator) = &self.validator else {
            return Ok(());
        };
        validator(value).inspect_err(|e| warn!(property = self.name, cause = %e, "rejected value"))
    }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property").field("name", &self.name).field("value", &self.value).finish_non_exhaustive()
    }
}

pub struct PropertyBuilder<T> {
    name: &'static str,
    initial: Option<T>,
    validator: Option<Validator<T>>,
    on_clear: Option<ClearHook<T>>,
}

impl<T> PropertyBuilder<T> {
    fn new(name: &'static str) -> Self {
        Self { name, initial: None, validator: None, on_clear: None }
    }

    pub fn initial(mut self, value: T) -> Self {
        self.initial = Some(value);
        self
    }

    pub fn validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&T) -> Result<(), ValidationError> + 'static,
    {
        self.validator = Some(Box::new(validator));
        self
    }

    pub fn on_clear<F>(mut self, hook: F) -> Self
    where
        F: Fn(Option<&T>) + 'static,
    {
        self.on_clear = Some(Box::new(hook));
        self
    }

    /// the initial value goes through the validator like any later write
    pub fn build(self) -> Result<Property<T>, ValidationError> {
        let mut property = Property { name: self.name, value: None, validator: self.validator, on_clear: self.on_clear };
        if let Some(initial) = self.initial {
            property.set(initial)?;
        }
        Ok(property)
    }
}

impl<T: fmt::Debug> fmt::Debug for PropertyBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyBuilder").field("name", &self.name).field("initial", &self.initial).finish_non_exhaustive()
    }
}

/// A read-only accessor whose value is derived from its owner's state.
///
/// Every [`Computed::get`] runs the getter again, so the value follows the
/// state it reads. There is no setter.
pub struct Computed<S, T> {
    name: &'static str,
    getter: fn(&S) -> T,
}

impl<S, T> Computed<S, T> {
    pub fn new(name: &'static str, getter: fn(&S) -> T) -> Self {
        Self { name, getter }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self, owner: &S) -> T {
        (self.getter)(owner)
    }
}

impl<S, T> Clone for Computed<S, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, T> Copy for Computed<S, T> {}

impl<S, T> fmt::Debug for Computed<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Computed").field("name", &self.name).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::class::{Computed, Property};
    use crate::error::ValidationError;
    use std::cell::RefCell;
    use std::f64::consts::PI;
    use std::rc::Rc;

    fn salary() -> Property<i64> {
        Property::builder("salary")
            .initial(50_000)
            .validator(|v: &i64| if *v < 0 { Err(ValidationError::rejected("Salary cannot be negative!")) } else { Ok(()) })
            .build()
            .unwrap()
    }

    #[test]
    fn test_successful_write_is_visible() {
        let mut salary = salary();
        assert_eq!(salary.get(), Some(&50_000));

        salary.set(60_000).unwrap();
        assert_eq!(salary.get(), Some(&60_000));
    }

    #[test]
    fn test_rejected_write_keeps_state() {
        let mut salary = salary();

        assert_eq!(salary.set(-1000), Err(ValidationError::rejected("Salary cannot be negative!")));
        assert_eq!(salary.get(), Some(&50_000));
    }

    #[test]
    fn test_invalid_initial_value_fails_build() {
        let result = Property::builder("salary")
            .initial(-1)
            .validator(|v: &i64| if *v < 0 { Err(ValidationError::rejected("negative")) } else { Ok(()) })
            .build();

        assert_eq!(result.unwrap_err(), ValidationError::rejected("negative"));
    }

    #[test]
    fn test_clear_runs_hook_then_resets() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let hook_seen = Rc::clone(&seen);
        let mut username = Property::builder("username")
            .initial("user123".to_owned())
            .on_clear(move |old: Option<&String>| hook_seen.borrow_mut().push(old.cloned()))
            .build()
            .unwrap();

        assert_eq!(username.get().map(String::as_str), Some("user123"));
        assert_eq!(username.clear(), Some("user123".to_owned()));
        assert_eq!(username.get(), None);
        assert!(!username.is_set());

        username.clear();
        assert_eq!(*seen.borrow(), vec![Some("user123".to_owned()), None]);
    }

    struct Circle {
        radius: Property<f64>,
    }

    fn area() -> Computed<Circle, f64> {
        Computed::new("area", |circle: &Circle| circle.radius.get().map_or(0.0, |r| PI * r * r))
    }

    #[test]
    fn test_computed_follows_its_source() {
        let mut circle = Circle { radius: Property::builder("radius").initial(5.0).build().unwrap() };
        let area = area();

        assert_eq!(area.name(), "area");
        assert!((area.get(&circle) - 25.0 * PI).abs() < 1e-9);

        circle.radius.set(10.0).unwrap();
        assert!((area.get(&circle) - 100.0 * PI).abs() < 1e-9);

        circle.radius.clear();
        assert!(area.get(&circle).abs() < 1e-9);
    }

    #[test]
    fn test_without_validator_everything_is_accepted() {
        let mut note = Property::builder("note").build().unwrap();
        assert_eq!(note.get(), None);

        note.set(String::new()).unwrap();
        assert_eq!(note.get().map(String::as_str), Some(""));
    }
}
