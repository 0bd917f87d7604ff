//! Folder navigation helpers.

use crate::model::files::{FileResource, Folder};
use std::collections::HashSet;

/// Folders whose parent is `parent_id` (`None` = root).
pub fn folder_children<'a>(folders: &'a [Folder], parent_id: Option<&str>) -> Vec<&'a Folder> {
    folders
        .iter()
        .filter(|folder| folder.parent_id.as_deref() == parent_id)
        .collect()
}

/// Files filed directly in `folder_id` (`None` = root).
pub fn files_in<'a>(files: &'a [FileResource], folder_id: Option<&str>) -> Vec<&'a FileResource> {
    files
        .iter()
        .filter(|file| file.folder_id.as_deref() == folder_id)
        .collect()
}

/// Ancestors of `folder_id` from the root down, ending with the folder
/// itself. Stops at a missing parent or a cycle.
pub fn folder_path<'a>(folders: &'a [Folder], folder_id: &str) -> Vec<&'a Folder> {
    let mut path = Vec::new();
    let mut visited = HashSet::new();
    let mut cursor = Some(folder_id);

    while let Some(current) = cursor {
        if !visited.insert(current) {
            break;
        }
        let Some(folder) = folders.iter().find(|folder| folder.id == current) else {
            break;
        };
        path.push(folder);
        cursor = folder.parent_id.as_deref();
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::{folder_children, folder_path};
    use crate::model::files::Folder;

    fn folder(id: &str, parent: Option<&str>) -> Folder {
        Folder {
            id: id.to_string(),
            name: id.to_uppercase(),
            parent_id: parent.map(str::to_string),
            created_at: String::new(),
        }
    }

    #[test]
    fn path_runs_root_to_leaf() {
        let folders = vec![folder("a", None), folder("b", Some("a")), folder("c", Some("b"))];
        let names: Vec<&str> = folder_path(&folders, "c")
            .iter()
            .map(|folder| folder.id.as_str())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(folder_children(&folders, None).len(), 1);
    }

    #[test]
    fn path_stops_on_cycle() {
        let folders = vec![folder("a", Some("b")), folder("b", Some("a"))];
        assert_eq!(folder_path(&folders, "a").len(), 2);
    }
}
