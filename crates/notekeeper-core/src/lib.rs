pub mod ports;
pub mod event_bus;
pub mod service;
pub mod auth;
pub mod format;
pub mod editor;
