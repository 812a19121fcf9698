use micro_decor::{DecorError, Target, TargetExt, map_output, named_fn, recover, trace_calls};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Cannot divide by zero")]
struct DivideByZero;

pub fn run() -> Result<(), DecorError> {
    let multiply = named_fn("multiply", |a: i32, b: i32| a * b).decorate_with(trace_calls());
    let value = multiply.call((5, 4));
    println!("Final Result: {value}");

    let sum_two = named_fn("sum_two", |a: i32, b: i32| a + b).decorate_with(map_output(|v: i32| v * 2));
    println!("{}", sum_two.call((10, 5)));

    let greet = named_fn("greet", |name: &str| format!("Hello {name}")).decorate_with(map_output(|s: String| s.to_uppercase()));
    println!("{}", greet.call(("Asha",)));

    let divide = named_fn("divide", |a: i64, b: i64| a.checked_div(b).map(|v| v.to_string()).ok_or(DivideByZero))
        .decorate_with(recover(|e: DivideByZero| format!("Error: {e}")));
    println!("{}", divide.call((10, 2)));
    println!("{}", divide.call((10, 0)));

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::lesson::return_values::DivideByZero;
    use micro_decor::{Target, TargetExt, named_fn, recover};

    #[test]
    fn test_divide_by_zero_is_recovered_as_text() {
        let divide = named_fn("divide", |a: i64, b: i64| a.checked_div(b).ok_or(DivideByZero))
            .decorate_with(recover(|e: DivideByZero| {
                assert_eq!(e.to_string(), "Cannot divide by zero");
                -1
            }));

        assert_eq!(divide.call((10, 2)), 5);
        assert_eq!(divide.call((10, 0)), -1);
    }
}
