use micro_decor::{Computed, DecorError, Property, ValidationError};
use std::f64::consts::PI;

struct Circle {
    radius: f64,
}

pub fn run() -> Result<(), DecorError> {
    let student = Property::builder("name").initial("Rahul".to_owned()).build()?;
    println!("{}", student.get().map_or("", String::as_str));

    let mut salary = Property::builder("salary")
        .initial(50_000)
        .validator(|v: &i64| if *v < 0 { Err(ValidationError::rejected("Salary cannot be negative!")) } else { Ok(()) })
        .build()?;
    println!("{:?}", salary.get());
    salary.set(60_000)?;
    println!("{:?}", salary.get());
    if let Err(e) = salary.set(-1000) {
        println!("{e}, salary stays {:?}", salary.get());
    }

    let area = Computed::new("area", |circle: &Circle| PI * circle.radius * circle.radius);
    let mut circle = Circle { radius: 5.0 };
    println!("{:.2}", area.get(&circle));
    circle.radius = 10.0;
    println!("{:.2}", area.get(&circle));

    let mut username = Property::builder("username")
        .initial("user123".to_owned())
        .on_clear(|_: Option<&String>| println!("Deleting username..."))
        .build()?;
    println!("{:?}", username.get());
    username.clear();
    println!("{:?}", username.get());

    Ok(())
}
