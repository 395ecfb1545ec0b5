//! Clustering data model and derived tree structure.
//!
//! A clustering is a named grouping of a collection's documents into a
//! hierarchy, delivered by the remote API as a flat item list. [`tree`]
//! projects that list into a keyed node map for incremental rendering,
//! and [`store`] holds the per-collection fetch/selection state.

pub mod store;
pub mod tree;

use serde::{Deserialize, Serialize};

/// Marker substring identifying synthetic, non-regenerable clusterings.
pub const VIRTUAL_MARKER: &str = "virtual";

/// Prefix identifying placeholder/unresolved item ids. Rows carrying it
/// must never navigate to a document.
pub const PLACEHOLDER_PREFIX: &str = "id-";

/// One clustering result for a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clustering {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Clustering {
    /// Whether this clustering is synthetic and cannot be regenerated.
    #[must_use]
    pub fn is_virtual(&self) -> bool {
        self.id.contains(VIRTUAL_MARKER)
    }
}

/// Flat record representing either a group or a leaf document.
///
/// Folder vs leaf is derived from `children`, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub children: Vec<String>,
}

/// Whether an item id denotes a placeholder entry (not yet resolved to a
/// real document).
#[must_use]
pub fn is_placeholder_id(id: &str) -> bool {
    id.starts_with(PLACEHOLDER_PREFIX)
}
