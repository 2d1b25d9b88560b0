//! Session and NPC editors.
//!
//! Editors own a disposable copy of one record while it is being changed.
//! They never talk to the backend; saving produces a payload that the
//! caller hands to [`crate::service::NotesService`].

pub mod structured;
pub mod freeform;
pub mod npc;

use notekeeper_types::session::{Keyed, Session, SessionDraft, SessionType};
use notekeeper_types::temp_id;

pub use freeform::FreeFormEditor;
pub use npc::{NewNpcForm, NpcEdits};
pub use structured::{Field, Section, Selections, StructuredEditor};

/// The editor variant shown in place of the session list
#[derive(Debug, Clone)]
pub enum SessionEditor {
    Structured(StructuredEditor),
    FreeForm(FreeFormEditor),
}

impl SessionEditor {
    /// New sessions use the pre-selected variant; existing ones their stored type.
    pub fn open(session: Option<&Session>, preselected: SessionType) -> Self {
        let kind = session.map(|s| s.session_type).unwrap_or(preselected);
        match kind {
            SessionType::Structured => {
                SessionEditor::Structured(session.map(StructuredEditor::from_session).unwrap_or_default())
            }
            SessionType::FreeForm => {
                SessionEditor::FreeForm(session.map(FreeFormEditor::from_session).unwrap_or_default())
            }
        }
    }

    pub fn session_type(&self) -> SessionType {
        match self {
            SessionEditor::Structured(_) => SessionType::Structured,
            SessionEditor::FreeForm(_) => SessionType::FreeForm,
        }
    }

    pub fn session_id(&self) -> Option<&str> {
        match self {
            SessionEditor::Structured(e) => e.session_id.as_deref(),
            SessionEditor::FreeForm(e) => e.session_id.as_deref(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            SessionEditor::Structured(e) => &e.title,
            SessionEditor::FreeForm(e) => &e.title,
        }
    }

    pub fn draft(&self) -> SessionDraft {
        match self {
            SessionEditor::Structured(e) => e.draft(),
            SessionEditor::FreeForm(e) => e.draft(),
        }
    }
}

/// File name offered for a session export: whitespace runs become `_`.
pub fn export_filename(title: &str) -> String {
    let mut stem = String::with_capacity(title.len());
    let mut in_space = false;
    for c in title.chars() {
        if c.is_whitespace() {
            if !in_space {
                stem.push('_');
            }
            in_space = true;
        } else {
            stem.push(c);
            in_space = false;
        }
    }
    format!("{}_export.json", stem)
}

// ─── Keyed list helpers ──────────────────────────────────────

/// Append a blank item with a fresh temporary id and return that id.
pub fn append<T: Keyed>(items: &mut Vec<T>) -> String {
    let id = temp_id();
    items.push(T::blank(id.clone()));
    id
}

/// Apply `f` to the item with `id`. Returns `false` if there is none.
pub fn update<T: Keyed>(items: &mut [T], id: &str, f: impl FnOnce(&mut T)) -> bool {
    match items.iter_mut().find(|item| item.id() == id) {
        Some(item) => {
            f(item);
            true
        }
        None => false,
    }
}

/// Remove the item with `id`, keeping the rest in order.
pub fn remove<T: Keyed>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}
