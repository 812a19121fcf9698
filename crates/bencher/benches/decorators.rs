use bencher::{TestCase, TestGroup, add};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use micro_decor::{BoxTarget, Target, TargetExt, decorators, inspect, log, map_output, repeat, target_fn};
use std::hint::black_box;

fn create_test_cases() -> Vec<TestCase> {
    vec![TestCase::shallow("small_input", (5, 7)), TestCase::deep("large_input", (u64::MAX - 1, 3))]
}

fn create_target(group: TestGroup) -> BoxTarget<(u64, u64), u64> {
    match group {
        TestGroup::Shallow => target_fn(add).decorate_with(map_output(|v: u64| v ^ 1)).boxed(),
        TestGroup::Deep => target_fn(add)
            .decorate_with(decorators![
                log(),
                inspect(|args: &(u64, u64)| { black_box(args); }, |sum: &u64| { black_box(sum); }),
                map_output(|last: Option<u64>| last.unwrap_or_default()),
                repeat(2).expect("repeat count is not negative"),
            ])
            .boxed(),
    }
}

fn benchmark_decorated_call(criterion: &mut Criterion) {
    let test_cases = create_test_cases();
    let mut group = criterion.benchmark_group("decorated_call");

    for case in test_cases {
        group.bench_with_input(BenchmarkId::new("raw", case.name()), &case, |b, case| {
            b.iter(|| black_box(add(black_box(case.input().0), black_box(case.input().1))));
        });

        let target = create_target(case.group());
        group.bench_with_input(BenchmarkId::new("decorated", case.name()), &case, |b, case| {
            b.iter(|| black_box(target.call(black_box(case.input()))));
        });
    }

    group.finish();
}

criterion_group!(decorators_bench, benchmark_decorated_call);
criterion_main!(decorators_bench);
