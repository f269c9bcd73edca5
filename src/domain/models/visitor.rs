use serde::Deserialize;

/// Visitor count displayed in the about section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VisitorCount {
    #[default]
    Pending,
    Known(u64),
    /// Both the remote counter and local storage failed.
    Unknown,
}

impl VisitorCount {
    pub fn label(&self) -> String {
        match self {
            VisitorCount::Known(value) => value.to_string(),
            VisitorCount::Pending | VisitorCount::Unknown => "—".to_string(),
        }
    }
}

/// Body of a successful counter hit.
#[derive(Debug, Clone, Deserialize)]
pub struct CounterHit {
    pub value: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(VisitorCount::Known(41).label(), "41");
        assert_eq!(VisitorCount::Unknown.label(), "—");
        assert_eq!(VisitorCount::Pending.label(), "—");
    }

    #[test]
    fn test_counter_hit_decoding() {
        let hit: CounterHit = serde_json::from_str(r#"{"value": 1234}"#).unwrap();
        assert_eq!(hit.value, 1234);
        assert!(serde_json::from_str::<CounterHit>(r#"{"value": "many"}"#).is_err());
    }
}
