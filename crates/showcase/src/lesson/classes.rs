use micro_decor::class::{TextFields, no_empty_text, uppercase_fields, with_display};
use micro_decor::{DecorError, Target, TargetExt, constructor, log};

#[derive(Debug, Default)]
struct Sample;

#[derive(Debug)]
struct Person {
    name: String,
}

impl Person {
    fn new(name: &str) -> Self {
        Self { name: name.to_owned() }
    }
}

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

#[derive(Debug)]
struct City {
    name: String,
    country: String,
}

impl City {
    fn new(name: &str, country: &str) -> Self {
        Self { name: name.to_owned(), country: country.to_owned() }
    }
}

impl TextFields for City {
    fn text_fields_mut(&mut self) -> Vec<&mut String> {
        vec![&mut self.name, &mut self.country]
    }
}

pub fn run() -> Result<(), DecorError> {
    let sample = constructor(Sample::default).decorate_with(with_display());
    let obj = sample.call(());
    println!("{}", obj.display());

    let person = constructor(Person::new).decorate_with(log());
    let p = person.call(("Alice",));
    println!("{}", p.name);

    let product = constructor(Product::new).decorate_with(no_empty_text::<(&str, &str)>());
    let item = product.call(("Laptop", "Dell"))?;
    println!("{} {}", item.name, item.brand);
    if let Err(e) = product.call(("", "HP")) {
        println!("{e}");
    }

    let city = constructor(City::new).decorate_with(uppercase_fields());
    let c = city.call(("Hyderabad", "India"));
    println!("{} {}", c.name, c.country);

    Ok(())
}
