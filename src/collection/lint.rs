use super::node::{Folder, Item};
use ahash::AHashMap;
use itertools::Itertools;

/// A name shared by several siblings of one folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateName {
    /// `/`-joined path of the folder holding the siblings; empty for the root.
    pub folder_path: String,
    pub name: String,
    pub count: usize,
}

/// Reports sibling items that share a name.
///
/// Lookups always take the first match, so every later sibling with the same name is
/// unreachable by name. This only reports them; nothing is renamed or removed.
pub fn duplicate_names(root: &Folder) -> Vec<DuplicateName> {
    let mut duplicates = Vec::new();
    let mut pending: Vec<(Vec<&str>, &Folder)> = vec![(Vec::new(), root)];

    while let Some((path, folder)) = pending.pop() {
        let mut counts: AHashMap<&str, usize> = AHashMap::new();
        for item in &folder.items {
            *counts.entry(item.name()).or_insert(0) += 1;
        }

        let folder_path = path.iter().join("/");
        duplicates.extend(
            folder
                .items
                .iter()
                .map(Item::name)
                .unique()
                .filter_map(|name| {
                    let count = counts.get(name).copied().unwrap_or(0);
                    (count > 1).then(|| DuplicateName {
                        folder_path: folder_path.clone(),
                        name: name.to_string(),
                        count,
                    })
                }),
        );

        for child in folder.items.iter().rev().filter_map(Item::as_folder) {
            let mut child_path = path.clone();
            child_path.push(&child.name);
            pending.push((child_path, child));
        }
    }

    duplicates
}
