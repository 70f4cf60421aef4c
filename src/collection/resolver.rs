use super::node::{Folder, Item, RequestItem};
use crate::error::ResolveError;
use std::fmt;

/// Where a request lookup searched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupScope {
    /// Depth-first search over the whole tree.
    Collection,
    /// Immediate children of the folder at this path.
    Folder(String),
}

impl fmt::Display for LookupScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupScope::Collection => write!(f, "the entire collection"),
            LookupScope::Folder(path) => write!(f, "folder '{}'", path),
        }
    }
}

/// Splits a folder path on `/`, ignoring empty segments.
pub fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Walks `root` one path segment at a time and returns the folder the path names.
///
/// Each segment matches the first child with that name, whatever its kind. If that
/// child is a request the walk stops with [`ResolveError::NotAFolder`]. A resolved
/// folder without items is rejected so callers never search an empty scope.
pub fn resolve_folder<'a>(path: &str, root: &'a Folder) -> Result<&'a Folder, ResolveError> {
    let mut current = root;
    for segment in path_segments(path) {
        let child = current
            .items
            .iter()
            .find(|item| item.name() == segment)
            .ok_or_else(|| ResolveError::FolderNotFound {
                path: path.to_string(),
                segment: segment.to_string(),
            })?;
        current = child.as_folder().ok_or_else(|| ResolveError::NotAFolder {
            path: path.to_string(),
            segment: segment.to_string(),
        })?;
    }

    if current.items.is_empty() {
        return Err(ResolveError::EmptyFolder {
            path: path.to_string(),
        });
    }
    Ok(current)
}

/// Finds the request called `name`.
///
/// With a folder path only that folder's immediate children are searched. Without one
/// (or with a blank one) the whole collection is searched depth-first in pre-order and
/// the first match wins.
pub fn locate_request<'a>(
    name: &str,
    folder_path: Option<&str>,
    collection: &'a Folder,
) -> Result<&'a RequestItem, ResolveError> {
    match folder_path.filter(|path| !path.trim().is_empty()) {
        Some(path) => {
            let folder = resolve_folder(path, collection)?;
            folder
                .items
                .iter()
                .filter_map(Item::as_request)
                .find(|request| request.name == name)
                .ok_or_else(|| ResolveError::RequestNotFound {
                    name: name.to_string(),
                    scope: LookupScope::Folder(path.to_string()),
                })
        }
        None => find_in_tree(name, collection).ok_or_else(|| ResolveError::RequestNotFound {
            name: name.to_string(),
            scope: LookupScope::Collection,
        }),
    }
}

/// Pre-order search with an explicit work list, so deep trees do not grow the call stack.
fn find_in_tree<'a>(name: &str, root: &'a Folder) -> Option<&'a RequestItem> {
    let mut pending: Vec<&'a Item> = root.items.iter().rev().collect();
    while let Some(item) = pending.pop() {
        match item {
            Item::Request(request) if request.name == name => return Some(request),
            Item::Request(_) => {}
            Item::Folder(folder) => pending.extend(folder.items.iter().rev()),
        }
    }
    None
}
