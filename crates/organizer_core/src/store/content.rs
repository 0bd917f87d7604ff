//! Note, code snippet and focus-session mutations.

use super::{remove_by_id, Collection, OrganizerStore};
use crate::clock::Clock;
use crate::kv::KvStore;
use crate::model::content::{CodeSnippet, FocusSession, NewCodeSnippet, NewNote, Note};
use crate::model::new_entity_id;

impl<K: KvStore, C: Clock> OrganizerStore<K, C> {
    pub fn add_note(&mut self, new_note: NewNote) -> Note {
        let note = Note {
            id: new_entity_id(),
            title: new_note.title,
            content: new_note.content,
            category: new_note.category,
            tags: new_note.tags,
            color: new_note.color,
            created_at: self.clock.timestamp(),
        };
        self.data.notes.push(note.clone());
        self.persist(Collection::Notes);
        note
    }

    pub fn delete_note(&mut self, id: &str) -> bool {
        let removed = remove_by_id(&mut self.data.notes, id);
        self.commit(Collection::Notes, removed)
    }

    pub fn add_code_snippet(&mut self, new_snippet: NewCodeSnippet) -> CodeSnippet {
        let snippet = CodeSnippet {
            id: new_entity_id(),
            title: new_snippet.title,
            language: new_snippet.language,
            code: new_snippet.code,
            tags: new_snippet.tags,
        };
        self.data.code_snippets.push(snippet.clone());
        self.persist(Collection::CodeSnippets);
        snippet
    }

    pub fn delete_code_snippet(&mut self, id: &str) -> bool {
        let removed = remove_by_id(&mut self.data.code_snippets, id);
        self.commit(Collection::CodeSnippets, removed)
    }

    /// Logs a finished focus block at the front of the history.
    pub fn add_focus_session(
        &mut self,
        duration_minutes: u32,
        goal: impl Into<String>,
    ) -> FocusSession {
        let session = FocusSession {
            id: new_entity_id(),
            start_time: self.clock.epoch_millis(),
            duration: duration_minutes,
            goal: goal.into(),
            completed: true,
        };
        self.data.focus_sessions.insert(0, session.clone());
        self.persist(Collection::FocusSessions);
        session
    }
}
