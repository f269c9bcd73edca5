use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PROJECT_IMAGE_DIR: &str = "/projects";
pub const PROJECT_IMAGE_PLACEHOLDER: &str = "/projects/placeholder.png";

/// Repository record as returned by the GitHub listing endpoint.
/// Only the fields the grid displays are decoded; everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRepository {
    pub id: u64,
    pub name: String,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    pub updated_at: String,
    #[serde(default)]
    pub fork: bool,
}

/// Repository shown in the projects grid and the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryEntry {
    pub id: u64,
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub homepage: Option<String>,
    /// ISO-8601 as delivered upstream.
    pub updated_at: String,
    pub fork: bool,
}

impl From<RawRepository> for RepositoryEntry {
    fn from(raw: RawRepository) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            html_url: raw.html_url,
            description: non_blank(raw.description),
            language: non_blank(raw.language),
            homepage: non_blank(raw.homepage),
            updated_at: raw.updated_at,
            fork: raw.fork,
        }
    }
}

impl RepositoryEntry {
    pub fn updated_at_parsed(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.updated_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Date shown in the overlay, e.g. `Mar 4, 2025`.
    pub fn updated_label(&self) -> String {
        self.updated_at_parsed()
            .map(|dt| dt.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|| "Unknown".to_string())
    }

    /// Preview image path: `/projects/<lowercased-name>.png`.
    pub fn preview_image(&self) -> String {
        format!("{}/{}.png", PROJECT_IMAGE_DIR, self.name.to_lowercase())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Projects upstream records into display entries.
///
/// Duplicate ids keep the first record seen. The result is ordered by
/// `updated_at` descending; the sort is stable, so equal timestamps keep
/// upstream order and unparseable timestamps trail in upstream order.
pub fn project_repositories(raw: Vec<RawRepository>) -> Vec<RepositoryEntry> {
    let mut seen = HashSet::with_capacity(raw.len());
    let mut entries: Vec<RepositoryEntry> = raw
        .into_iter()
        .filter(|repo| seen.insert(repo.id))
        .map(RepositoryEntry::from)
        .collect();

    entries.sort_by(compare_recency);
    entries
}

fn compare_recency(a: &RepositoryEntry, b: &RepositoryEntry) -> Ordering {
    match (a.updated_at_parsed(), b.updated_at_parsed()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
