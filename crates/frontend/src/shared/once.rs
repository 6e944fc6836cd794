use std::cell::Cell;

/// Per-page "done once" flag, held in a `thread_local!`.
///
/// wasm runs on one thread, so a thread-local is page-global.
#[derive(Debug, Default)]
pub struct OnceGuard(Cell<bool>);

impl OnceGuard {
    pub const fn new() -> Self {
        Self(Cell::new(false))
    }

    /// `true` for the first caller only.
    pub fn claim(&self) -> bool {
        !self.0.replace(true)
    }

    /// Give the claim back after a failed attempt.
    pub fn release(&self) {
        self.0.set(false);
    }
}
