#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    group: TestGroup,
    input: (u64, u64),
}

impl TestCase {
    pub fn new(name: &'static str, group: TestGroup, input: (u64, u64)) -> Self {
        Self { name, group, input }
    }

    pub fn shallow(name: &'static str, input: (u64, u64)) -> Self {
        Self::new(name, TestGroup::Shallow, input)
    }

    pub fn deep(name: &'static str, input: (u64, u64)) -> Self {
        Self::new(name, TestGroup::Deep, input)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn group(&self) -> TestGroup {
        self.group
    }

    pub fn input(&self) -> (u64, u64) {
        self.input
    }
}

/// how many decorators wrap the benchmarked target
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestGroup {
    Shallow,
    Deep,
}

/// the benchmarked target
#[inline(never)]
pub fn add(a: u64, b: u64) -> u64 {
    a.wrapping_add(b)
}
