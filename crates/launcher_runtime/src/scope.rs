//! Cancellation scope tying async result delivery to the owning view's
//! lifetime.

use std::cell::Cell;
use std::rc::Rc;

/// Clonable token marking whether the owning view is still mounted.
///
/// Async completions check the scope before dispatching back into the
/// reducer, so a request that resolves after cleanup cannot write to state
/// the view no longer owns.
#[derive(Debug, Clone)]
pub struct ScopeHandle {
    active: Rc<Cell<bool>>,
}

impl ScopeHandle {
    /// Creates an active scope.
    pub fn new() -> Self {
        Self {
            active: Rc::new(Cell::new(true)),
        }
    }

    /// Whether results may still be delivered.
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Marks the scope (and every clone of it) as torn down.
    pub fn cancel(&self) {
        self.active.set(false);
    }
}

impl Default for ScopeHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::ScopeHandle;

    #[test]
    fn new_scope_is_active() {
        assert!(ScopeHandle::new().is_active());
    }

    #[test]
    fn cancel_deactivates_every_clone() {
        let scope = ScopeHandle::new();
        let clone = scope.clone();

        clone.cancel();

        assert!(!scope.is_active());
        assert!(!clone.is_active());
    }
}
