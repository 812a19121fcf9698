use micro_decor::{DecorError, Target, TargetExt, named_fn, repeat, repeat_with_message};

pub fn run(times: i64) -> Result<(), DecorError> {
    let greet = named_fn("greet", || println!("Hello!")).decorate_with(repeat(times)?);
    greet.call(());

    let add = named_fn("add", |a: i32, b: i32| a + b).decorate_with(repeat(4)?);
    match add.call((5, 3)) {
        Some(sum) => println!("{sum}"),
        None => println!("add was never called"),
    }

    let say_name =
        named_fn("say_name", |name: &str| println!("Name: {name}")).decorate_with(repeat_with_message(2, "Running the function:")?);
    say_name.call(("Asha",));

    Ok(())
}
