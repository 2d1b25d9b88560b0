//! Free-form session editor with manual NPC extraction.

use std::ops::Range;

use notekeeper_types::npc::ExtractionRequest;
use notekeeper_types::session::{Session, SessionDraft};

use crate::format::{Marker, Selection};

/// Panel shown once some text has been selected
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionPanel {
    pub selected_text: String,
    pub npc_name: String,
}

#[derive(Debug, Clone, Default)]
pub struct FreeFormEditor {
    pub session_id: Option<String>,
    pub title: String,
    pub content: String,
    /// Last non-empty selection in the content buffer
    pub selection: Selection,
    pub extraction: Option<ExtractionPanel>,
    pub suggestions: Vec<String>,
}

impl FreeFormEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_session(session: &Session) -> Self {
        Self {
            session_id: Some(session.id.clone()),
            title: session.title.clone(),
            content: session.content.clone(),
            ..Self::default()
        }
    }

    pub fn draft(&self) -> SessionDraft {
        SessionDraft::free_form(self.title.clone(), self.content.clone())
    }

    /// Record the cursor range reported by the text widget. A new selection
    /// opens the extraction panel, keeping a name already typed.
    pub fn capture_selection(&mut self, range: Range<usize>) -> bool {
        match self.selection.capture(&self.content, range) {
            Some(text) => {
                self.show_extraction(text);
                true
            }
            None => false,
        }
    }

    pub fn show_extraction(&mut self, selected_text: String) {
        let npc_name = self.extraction.take().map(|p| p.npc_name).unwrap_or_default();
        self.extraction = Some(ExtractionPanel {
            selected_text,
            npc_name,
        });
    }

    /// Wrap the captured selection with `marker`. No selection, no change.
    pub fn apply_marker(&mut self, marker: Marker) -> bool {
        self.selection.apply(&mut self.content, marker)
    }

    /// Payload for `/extract-npc`, or `None` while the name or text is blank.
    pub fn extraction_request(&self) -> Option<ExtractionRequest> {
        let panel = self.extraction.as_ref()?;
        let npc_name = panel.npc_name.trim();
        if npc_name.is_empty() || panel.selected_text.trim().is_empty() {
            return None;
        }
        Some(ExtractionRequest {
            session_id: self
                .session_id
                .clone()
                .unwrap_or_else(|| ExtractionRequest::NEW_SESSION.to_string()),
            extracted_text: panel.selected_text.clone(),
            npc_name: npc_name.to_string(),
        })
    }

    pub fn finish_extraction(&mut self) {
        self.extraction = None;
        self.selection.clear();
    }

    pub fn cancel_extraction(&mut self) {
        self.extraction = None;
    }

    /// Fill the extraction name from a suggestion.
    pub fn use_suggestion(&mut self, name: &str) {
        if let Some(panel) = self.extraction.as_mut() {
            panel.npc_name = name.to_string();
        }
    }
}

/// Alert text after the backend handled an extraction.
pub fn extraction_message(npc_name: &str, action: &str) -> String {
    format!("NPC \"{}\" {} successfully!", npc_name, action)
}

pub const EXTRACTION_FAILED: &str = "Error extracting NPC";
