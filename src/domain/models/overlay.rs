use super::RepositoryEntry;

/// Project detail overlay.
///
/// Closing is two-phase: `close` hides immediately, `finish_close` drops the
/// selection once the exit transition has run. Each open/close bumps
/// `generation`, so a late `finish_close` from an earlier close is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectOverlay {
    selected: Option<RepositoryEntry>,
    visible: bool,
    generation: u64,
}

impl ProjectOverlay {
    pub fn open(&mut self, entry: RepositoryEntry) {
        self.generation += 1;
        self.selected = Some(entry);
        self.visible = true;
    }

    /// Hides the overlay and returns the token `finish_close` expects.
    pub fn close(&mut self) -> u64 {
        self.generation += 1;
        self.visible = false;
        self.generation
    }

    pub fn finish_close(&mut self, token: u64) -> bool {
        if token != self.generation || self.visible {
            return false;
        }
        self.selected = None;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn selected(&self) -> Option<&RepositoryEntry> {
        self.selected.as_ref()
    }

    /// The entry to render, if any. Nothing renders during the close delay.
    pub fn renderable(&self) -> Option<&RepositoryEntry> {
        if self.visible { self.selected.as_ref() } else { None }
    }
}
