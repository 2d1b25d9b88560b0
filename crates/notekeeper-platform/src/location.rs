//! Backend address resolution against the hosting page.

use notekeeper_types::config::{ClientConfig, BACKEND_URL_VAR};
use notekeeper_types::{NotesError, Result};

/// Origin of the page the app is served from. Opaque origins such as
/// `file://` pages report `"null"` and are refused.
pub fn page_origin() -> Result<String> {
    let origin = gloo_utils::window()
        .location()
        .origin()
        .map_err(|e| NotesError::Config(format!("page origin unavailable: {:?}", e)))?;
    usable_origin(origin)
}

fn usable_origin(origin: String) -> Result<String> {
    if origin.is_empty() || origin == "null" {
        return Err(NotesError::Config(format!("page origin is {:?}", origin)));
    }
    Ok(origin)
}

/// Use the configured backend URL, or fall back to the page origin.
pub fn resolve_backend(config: ClientConfig) -> ClientConfig {
    if config.has_backend_url() {
        return config;
    }
    match page_origin() {
        Ok(origin) => {
            log::info!("{} not set, using page origin {}", BACKEND_URL_VAR, origin);
            ClientConfig {
                backend_url: origin,
                ..config
            }
        }
        Err(e) => {
            log::warn!("{} not set and {}, using relative URLs", BACKEND_URL_VAR, e);
            config
        }
    }
}
