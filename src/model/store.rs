use indexmap::IndexMap;

use crate::model::note::{Note, NoteId};

/// Completion filter applied on top of the search result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Complete,
    Incomplete,
}

impl Filter {
    /// Label shown in the header.
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Complete => "Complete",
            Filter::Incomplete => "Incomplete",
        }
    }

    /// Two-way toggle bound to the filter key: All ⇄ Complete.
    /// `Incomplete` stays a valid value of the type with no key binding
    /// of its own (see DESIGN.md); toggling from it returns to All.
    pub fn toggled(self) -> Filter {
        match self {
            Filter::All => Filter::Complete,
            Filter::Complete | Filter::Incomplete => Filter::All,
        }
    }
}

/// The single state store: the ordered note list plus the UI-state fields.
///
/// Insertion order is display order, oldest first. Notes are keyed by id,
/// and ids come from a counter that only moves forward, so uniqueness holds
/// for the lifetime of the store. Nothing here is persisted.
#[derive(Debug, Default)]
pub struct Store {
    notes: IndexMap<NoteId, Note>,
    next_id: u64,
    search_term: String,
    filter: Filter,
    dark_mode: bool,
    modal_open: bool,
    draft: String,
}

impl Store {
    pub fn new() -> Self {
        Store::default()
    }

    /// All notes in insertion order.
    pub fn notes(&self) -> impl Iterator<Item = &Note> {
        self.notes.values()
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.get(&id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.notes.values().filter(|n| n.completed).count()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Append a new note if `text` is non-blank after trimming.
    ///
    /// On success the note is stored as entered (untrimmed), the draft is
    /// cleared and the modal closes. Blank input is a strict no-op: nothing
    /// mutates and the modal stays open.
    pub fn add_note(&mut self, text: &str) -> Option<NoteId> {
        if text.trim().is_empty() {
            return None;
        }
        let id = NoteId(self.next_id);
        self.next_id += 1;
        self.notes.insert(id, Note::new(id, text.to_string()));
        self.draft.clear();
        self.modal_open = false;
        Some(id)
    }

    /// Flip `completed` on the matching note. An unknown id changes nothing
    /// and returns false; that is not an error condition.
    pub fn toggle_completed(&mut self, id: NoteId) -> bool {
        match self.notes.get_mut(&id) {
            Some(note) => {
                note.completed = !note.completed;
                true
            }
            None => false,
        }
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn set_search_term(&mut self, term: String) {
        self.search_term = term;
    }

    pub fn set_dark_mode(&mut self, on: bool) {
        self.dark_mode = on;
    }

    pub fn set_modal_open(&mut self, open: bool) {
        self.modal_open = open;
    }

    pub fn set_draft(&mut self, draft: String) {
        self.draft = draft;
    }
}
