use micro_decor::{DecorError, Target, TargetExt, decorators, inspect, log, map_output, named_fn, timer};
use std::thread;
use std::time::Duration;

pub fn run() -> Result<(), DecorError> {
    let star = inspect(|_: &()| println!("*****"), |_: &()| println!("*****"));
    let line = inspect(|_: &()| println!("-----"), |_: &()| println!("-----"));
    let say_hello = named_fn("say_hello", || println!("Hello!")).decorate_with(decorators![star, line]);
    say_hello.call(());

    let double = map_output(|v: i32| v * 2);
    let square = map_output(|v: i32| v.pow(2));
    let number = named_fn("number", || 3).decorate_with(decorators![double, square]);
    println!("{}", number.call(()));

    let slow_add = named_fn("slow_add", |a: i32, b: i32| {
        thread::sleep(Duration::from_millis(100));
        a + b
    })
    .decorate_with(decorators![log(), timer()]);
    println!("Result: {}", slow_add.call((5, 7)));

    Ok(())
}
