use std::cell::Cell;
use std::rc::Rc;

/// A handler that counts how often it was called.
///
/// ```rust
/// use tactile_testing::MockFn;
///
/// let on_click = MockFn::new();
/// let handler = on_click.handler();
/// handler();
/// assert_eq!(on_click.calls(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MockFn {
    calls: Rc<Cell<usize>>,
}

impl MockFn {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handler(&self) -> impl Fn() + use<> {
        let calls = self.calls.clone();
        move || calls.set(calls.get() + 1)
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn was_called(&self) -> bool {
        self.calls() > 0
    }

    pub fn reset(&self) {
        self.calls.set(0);
    }
}
