pub mod login;
pub mod sessions;
pub mod structured;
pub mod freeform;
pub mod npcs;
pub mod dialogs;
pub mod formatted;

use notekeeper_types::npc::ExtractionRequest;

/// What the caller should do after rendering a session editor
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    None,
    Save,
    Export,
    Cancel,
    Extract(ExtractionRequest),
    Suggest(String),
}
