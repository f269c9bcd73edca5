use super::RepositoryEntry;

/// State of the repository listing. Exactly one variant is active; an error
/// never carries a stale list alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Error(String),
    Ready(Vec<RepositoryEntry>),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            LoadState::Loading | LoadState::Ready(_) => None,
        }
    }

    /// Header summary above the grid.
    pub fn summary(&self) -> String {
        match self {
            LoadState::Loading => "Loading repos...".to_string(),
            LoadState::Error(_) => "Repos unavailable".to_string(),
            LoadState::Ready(entries) => format!("{} public repos", entries.len()),
        }
    }
}

impl<E: std::fmt::Display> From<Result<Vec<RepositoryEntry>, E>> for LoadState {
    fn from(result: Result<Vec<RepositoryEntry>, E>) -> Self {
        match result {
            Ok(entries) => LoadState::Ready(entries),
            Err(err) => LoadState::Error(err.to_string()),
        }
    }
}
