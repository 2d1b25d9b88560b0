//! Edit buffers for NPC cards.
//!
//! Each card renders either the snapshot record (read-only) or an edit copy
//! of its scalar fields. History is carried along untouched.

use std::collections::HashMap;

use notekeeper_types::npc::{NewNpc, Npc};

#[derive(Debug, Clone, Default)]
pub struct NpcEdits {
    drafts: HashMap<String, Npc>,
}

impl NpcEdits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter edit mode with a copy of the current record.
    pub fn begin(&mut self, npc: &Npc) {
        self.drafts.insert(npc.id.clone(), npc.clone());
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.drafts.contains_key(id)
    }

    pub fn draft(&self, id: &str) -> Option<&Npc> {
        self.drafts.get(id)
    }

    pub fn draft_mut(&mut self, id: &str) -> Option<&mut Npc> {
        self.drafts.get_mut(id)
    }

    /// Leave edit mode, discarding changes.
    pub fn cancel(&mut self, id: &str) {
        self.drafts.remove(id);
    }

    /// Leave edit mode after the backend accepted the update.
    pub fn finish(&mut self, id: &str) -> Option<Npc> {
        self.drafts.remove(id)
    }

    /// Drop buffers for NPCs no longer present in a fresh snapshot.
    pub fn retain_known(&mut self, npcs: &[Npc]) {
        self.drafts.retain(|id, _| npcs.iter().any(|n| &n.id == id));
    }
}

/// Form behind the "New NPC" button
#[derive(Debug, Clone, Default)]
pub struct NewNpcForm {
    pub npc: NewNpc,
}

impl NewNpcForm {
    /// Payload for `POST /npcs`, or `None` while the name is blank.
    pub fn payload(&self) -> Option<NewNpc> {
        let name = self.npc.name.trim();
        if name.is_empty() {
            return None;
        }
        Some(NewNpc {
            name: name.to_string(),
            ..self.npc.clone()
        })
    }
}
