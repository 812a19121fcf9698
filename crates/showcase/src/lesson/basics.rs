use micro_decor::{BoxTarget, DecorError, Decorator, Target, TargetExt, decorator_fn, log, named_fn, target_fn};

fn say_hello() {
    println!("Hello!");
}

fn add(a: i32, b: i32) -> i32 {
    a + b
}

fn greet_user(name: &str) {
    println!("Hello, {name}!");
}

pub fn run() -> Result<(), DecorError> {
    // a function is a value, it can be passed around and called later
    let say = target_fn(say_hello);
    say.call(());

    let calculate = |func: &dyn Target<(i32, i32), Output = i32>| println!("Result: {}", func.call((10, 20)));
    calculate(&target_fn(add));

    // a decorator written by hand: take a target, return a new one around it
    let my_decorator = decorator_fn(|func: BoxTarget<(), ()>| {
        named_fn("wrapper", move || {
            println!("Before function call");
            func.call(());
            println!("After function call");
        })
    });
    let decorated = my_decorator.decorate(target_fn(say_hello).boxed());
    decorated.call(());

    let add = target_fn(add).decorate_with(log());
    println!("Returned Value: {}", add.call((5, 7)));

    let greet_user = named_fn("greet_user", greet_user).decorate_with(log());
    greet_user.call(("Asha",));

    Ok(())
}
