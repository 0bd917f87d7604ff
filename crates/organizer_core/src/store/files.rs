//! Folder and file mutations.

use super::{find, remove_by_id, Collection, OrganizerStore};
use crate::clock::Clock;
use crate::kv::KvStore;
use crate::model::files::{FileKind, FileResource, Folder};
use crate::model::new_entity_id;

impl<K: KvStore, C: Clock> OrganizerStore<K, C> {
    pub fn folder(&self, id: &str) -> Option<&Folder> {
        find(&self.data.folders, id)
    }

    /// Adds a folder. `parent_id` is stored as given.
    pub fn add_folder(&mut self, name: impl Into<String>, parent_id: Option<String>) -> Folder {
        let folder = Folder {
            id: new_entity_id(),
            name: name.into(),
            parent_id,
            created_at: self.clock.timestamp(),
        };
        self.data.folders.push(folder.clone());
        self.persist(Collection::Folders);
        folder
    }

    /// Removes a folder and the files filed directly in it.
    ///
    /// Child folders and their files are left untouched.
    pub fn delete_folder(&mut self, id: &str) -> bool {
        let removed_folder = remove_by_id(&mut self.data.folders, id);
        let files_before = self.data.files.len();
        self.data
            .files
            .retain(|file| file.folder_id.as_deref() != Some(id));
        let removed_files = self.data.files.len() != files_before;

        self.commit(Collection::Folders, removed_folder);
        self.commit(Collection::Files, removed_files);
        removed_folder || removed_files
    }

    pub fn add_file(
        &mut self,
        name: impl Into<String>,
        kind: FileKind,
        content: impl Into<String>,
        folder_id: Option<String>,
    ) -> FileResource {
        let file = FileResource {
            id: new_entity_id(),
            name: name.into(),
            kind,
            content: content.into(),
            folder_id,
            created_at: self.clock.timestamp(),
        };
        self.data.files.push(file.clone());
        self.persist(Collection::Files);
        file
    }

    pub fn delete_file(&mut self, id: &str) -> bool {
        let removed = remove_by_id(&mut self.data.files, id);
        self.commit(Collection::Files, removed)
    }
}
