pub mod session;
pub mod npc;
pub mod auth;
pub mod event;
pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

pub use error::NotesError;
pub type Result<T> = std::result::Result<T, NotesError>;

/// Generate a temporary identifier for an item that has not been persisted yet.
pub fn temp_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
