//! Pure projection of a clustering's flat item list into a keyed tree.
//!
//! The output maps item id to a lightweight node record, rooted at the
//! synthetic `"root"` id. The tree view walks it incrementally via
//! [`TreeNodes::get`] and [`TreeNode::is_folder`]; nothing here touches
//! the network or mutates the clustering.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use super::Clustering;

/// Synthetic root id. Never rendered as a row, never navigable.
pub const ROOT_ID: &str = "root";

/// Lightweight node record used to render the tree incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub id: String,
    pub name: String,
    pub children: Vec<String>,
}

impl TreeNode {
    /// A node is a folder iff it has children. Derived, not stored.
    #[must_use]
    pub fn is_folder(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Node map keyed by item id, rooted at [`ROOT_ID`].
///
/// Invariant: every id reachable from the root via `children` exists as a
/// key; the root key exists even for an empty clustering.
// No `Default`: [`build_tree`] is the only constructor, so the root key
// always exists and [`TreeNodes::root`] can index it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNodes {
    nodes: HashMap<String, TreeNode>,
}

impl TreeNodes {
    /// Look up a node by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&TreeNode> {
        self.nodes.get(id)
    }

    /// The synthetic root node.
    #[must_use]
    pub fn root(&self) -> &TreeNode {
        &self.nodes[ROOT_ID]
    }

    /// Whether the root has any children to render.
    #[must_use]
    pub fn has_entries(&self) -> bool {
        !self.root().children.is_empty()
    }

    /// Number of nodes, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Ids of every folder node below the root, in traversal order.
    /// Used by the view to drive expand-all. Each node is visited once,
    /// so a cyclic `children` relation in the payload cannot loop.
    #[must_use]
    pub fn folder_ids(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut stack: Vec<&str> = self.root().children.iter().map(String::as_str).collect();
        stack.reverse();
        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            if let Some(node) = self.nodes.get(id) {
                if node.is_folder() {
                    out.push(node.id.clone());
                    for child in node.children.iter().rev() {
                        stack.push(child);
                    }
                }
            }
        }
        out
    }
}

/// Build the node map for one clustering.
///
/// Root children are the items with no parent relation, explicit or
/// implicit (an item listed in another item's `children` is parented there
/// even without an explicit `parent`). Child ids that reference no item are
/// materialized as empty leaves named by their id, so the no-dangling
/// invariant holds structurally. Deterministic: child order follows input
/// order.
#[must_use]
pub fn build_tree(clustering: &Clustering) -> TreeNodes {
    let mut nodes: HashMap<String, TreeNode> = HashMap::with_capacity(clustering.items.len() + 1);

    for item in &clustering.items {
        nodes.insert(
            item.id.clone(),
            TreeNode {
                id: item.id.clone(),
                name: item.name.clone(),
                children: item.children.clone(),
            },
        );
    }

    // Materialize leaves for referenced-but-absent ids.
    for item in &clustering.items {
        for child in &item.children {
            nodes.entry(child.clone()).or_insert_with(|| TreeNode {
                id: child.clone(),
                name: child.clone(),
                children: Vec::new(),
            });
        }
    }

    let mut referenced: HashSet<&str> = HashSet::new();
    for item in &clustering.items {
        for child in &item.children {
            referenced.insert(child.as_str());
        }
    }

    let root_children: Vec<String> = clustering
        .items
        .iter()
        .filter(|item| item.parent.is_none() && !referenced.contains(item.id.as_str()))
        .map(|item| item.id.clone())
        .collect();

    nodes.insert(
        ROOT_ID.to_string(),
        TreeNode {
            id: ROOT_ID.to_string(),
            name: String::new(),
            children: root_children,
        },
    );

    TreeNodes { nodes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clustering::Item;

    fn item(id: &str, name: &str, children: &[&str]) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
            parent: None,
            children: children.iter().map(ToString::to_string).collect(),
        }
    }

    fn clustering(items: Vec<Item>) -> Clustering {
        Clustering {
            id: "c1".to_string(),
            title: "Topics".to_string(),
            description: "grouped by topic".to_string(),
            items,
        }
    }

    #[test]
    fn test_empty_clustering_yields_lone_root() {
        let tree = build_tree(&clustering(Vec::new()));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.root().id, ROOT_ID);
        assert_eq!(tree.root().name, "");
        assert!(tree.root().children.is_empty());
        assert!(!tree.has_entries());
    }

    #[test]
    fn test_flat_items_become_root_children() {
        let tree = build_tree(&clustering(vec![
            item("doc-1", "a.pdf", &[]),
            item("doc-2", "b.md", &[]),
        ]));
        assert_eq!(tree.root().children, vec!["doc-1", "doc-2"]);
        assert!(!tree.get("doc-1").unwrap().is_folder());
    }

    #[test]
    fn test_referenced_items_are_not_root_children() {
        let tree = build_tree(&clustering(vec![
            item("grp-1", "Group", &["doc-1"]),
            item("doc-1", "a.pdf", &[]),
        ]));
        assert_eq!(tree.root().children, vec!["grp-1"]);
        assert!(tree.get("grp-1").unwrap().is_folder());
        assert_eq!(tree.get("grp-1").unwrap().children, vec!["doc-1"]);
    }

    #[test]
    fn test_explicit_parent_excluded_from_root() {
        let mut orphan = item("doc-9", "c.txt", &[]);
        orphan.parent = Some("grp-1".to_string());
        let tree = build_tree(&clustering(vec![item("grp-1", "Group", &["doc-9"]), orphan]));
        assert_eq!(tree.root().children, vec!["grp-1"]);
    }

    #[test]
    fn test_no_dangling_references() {
        // "doc-ghost" is referenced but never defined as an item.
        let tree = build_tree(&clustering(vec![item(
            "grp-1",
            "Group",
            &["doc-1", "doc-ghost"],
        )]));

        let mut visited = HashSet::new();
        let mut stack = vec![ROOT_ID.to_string()];
        while let Some(id) = stack.pop() {
            let node = tree.get(&id).expect("reachable id must exist in the map");
            if visited.insert(id) {
                stack.extend(node.children.iter().cloned());
            }
        }

        let ghost = tree.get("doc-ghost").unwrap();
        assert_eq!(ghost.name, "doc-ghost");
        assert!(!ghost.is_folder());
    }

    #[test]
    fn test_folder_iff_nonempty_children() {
        let tree = build_tree(&clustering(vec![
            item("grp-1", "Group", &["doc-1"]),
            item("doc-1", "a.pdf", &[]),
            item("grp-empty", "Empty group", &[]),
        ]));
        for id in ["root", "grp-1", "doc-1", "grp-empty"] {
            let node = tree.get(id).unwrap();
            assert_eq!(node.is_folder(), !node.children.is_empty());
        }
        // A group with no children renders as a leaf.
        assert!(!tree.get("grp-empty").unwrap().is_folder());
    }

    #[test]
    fn test_deterministic_output() {
        let c = clustering(vec![
            item("grp-1", "Group", &["doc-1", "doc-2"]),
            item("doc-1", "a.pdf", &[]),
            item("doc-2", "b.md", &[]),
        ]);
        assert_eq!(build_tree(&c), build_tree(&c));
    }

    #[test]
    fn test_cyclic_children_terminate() {
        // c -> a -> b -> a: the payload's children relation has a cycle
        // reachable from the root.
        let tree = build_tree(&clustering(vec![
            item("c", "Outer", &["a"]),
            item("a", "Left", &["b"]),
            item("b", "Right", &["a"]),
        ]));

        let folders = tree.folder_ids();
        assert_eq!(folders, vec!["c", "a", "b"]);

        // Every id is still present exactly once in the map.
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_folder_ids_traversal_order() {
        let tree = build_tree(&clustering(vec![
            item("grp-1", "Outer", &["grp-2", "doc-3"]),
            item("grp-2", "Inner", &["doc-1"]),
            item("doc-1", "a.pdf", &[]),
            item("doc-3", "c.txt", &[]),
        ]));
        assert_eq!(tree.folder_ids(), vec!["grp-1", "grp-2"]);
    }
}
