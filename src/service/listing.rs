//! Category-grouped view of the catalog
use serde::{Deserialize, Serialize};

use crate::catalog::Entry;

/// Entries sharing one category, in catalog order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: String,
    pub entries: Vec<Entry>,
}

/// Result of the list operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Category substring the listing was filtered by
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    pub total: usize,
    pub groups: Vec<CategoryGroup>,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Group entries by category, keeping only categories containing `filter`
/// (case-insensitive). Groups appear in first-appearance order.
pub fn list_entries(entries: Vec<Entry>, filter: Option<&str>) -> Listing {
    let filter = filter.filter(|f| !f.trim().is_empty());
    let needle = filter.map(str::to_lowercase);

    let mut groups: Vec<CategoryGroup> = Vec::new();
    let mut total = 0;

    for entry in entries {
        if let Some(needle) = &needle {
            if !entry.category.to_lowercase().contains(needle.as_str()) {
                continue;
            }
        }

        total += 1;
        match groups.iter_mut().find(|g| g.category == entry.category) {
            Some(group) => group.entries.push(entry),
            None => groups.push(CategoryGroup {
                category: entry.category.clone(),
                entries: vec![entry],
            }),
        }
    }

    Listing {
        filter: filter.map(str::to_string),
        total,
        groups,
    }
}
