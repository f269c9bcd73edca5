//! Stale-completion guard for async work owned by a component.
//!
//! Each async operation takes a [`GenerationToken`] before it suspends and
//! checks it before writing state. Starting a newer operation or tearing the
//! component down invalidates every outstanding token.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct Liveness {
    generation: Rc<Cell<u64>>,
}

#[derive(Debug, Clone)]
pub struct GenerationToken {
    generation: Rc<Cell<u64>>,
    issued: u64,
}

impl Liveness {
    /// Starts a new operation, superseding any earlier token.
    pub fn begin(&self) -> GenerationToken {
        let issued = self.generation.get().wrapping_add(1);
        self.generation.set(issued);
        GenerationToken {
            generation: self.generation.clone(),
            issued,
        }
    }

    /// Called on unmount.
    pub fn invalidate(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}

impl GenerationToken {
    pub fn is_current(&self) -> bool {
        self.generation.get() == self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_current_until_superseded() {
        let liveness = Liveness::default();
        let first = liveness.begin();
        assert!(first.is_current());

        let second = liveness.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn test_invalidate_on_teardown() {
        let liveness = Liveness::default();
        let token = liveness.begin();
        liveness.invalidate();
        assert!(!token.is_current());
    }
}
