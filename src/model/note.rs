use chrono::{DateTime, Local};

/// Identifier of a note, assigned by the store's monotonic counter.
///
/// Ids are unique for the lifetime of the process and never reused, even
/// though notes cannot currently be removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(pub u64);

impl std::fmt::Display for NoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single todo entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    /// Display text, stored as entered. Blank-after-trim input is rejected
    /// before a note is ever constructed.
    pub text: String,
    /// The only field that changes after creation.
    pub completed: bool,
    /// Creation time, shown dimmed in the list.
    pub created: DateTime<Local>,
}

impl Note {
    /// Create a new, not-yet-completed note stamped with the current time.
    pub fn new(id: NoteId, text: String) -> Self {
        Note {
            id,
            text,
            completed: false,
            created: Local::now(),
        }
    }
}
