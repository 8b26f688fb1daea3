//! Reference cache.
//!
//! A sharded map keyed by asset path, owned by the resolver that populates
//! it. Entries are never invalidated here; whoever mutates assets owns
//! invalidation.

use bluescope_api::models::ReferenceView;
use dashmap::DashMap;

pub struct ReferenceCache {
    entries: DashMap<String, Vec<ReferenceView>>,
}

impl ReferenceCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn get(&self, path: &str) -> Option<Vec<ReferenceView>> {
        self.entries.get(path).map(|entry| entry.value().clone())
    }

    pub fn insert(&self, path: String, references: Vec<ReferenceView>) {
        self.entries.insert(path, references);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl Default for ReferenceCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bluescope_api::models::{ReferenceDirection, ReferenceKind};

    #[test]
    fn test_insert_and_get() {
        let cache = ReferenceCache::new();
        assert!(cache.is_empty());
        assert!(cache.get("/Game/A").is_none());

        cache.insert(
            "/Game/A".into(),
            vec![ReferenceView::new(
                ReferenceKind::Inheritance,
                ReferenceDirection::Outgoing,
                "/Game/B",
                "B",
                "Parent Class",
            )],
        );

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("/Game/A").unwrap().len(), 1);
        cache.clear();
        assert!(cache.is_empty());
    }
}
