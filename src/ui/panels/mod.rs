// Unibox - ui/panels/mod.rs

pub mod analytics;
pub mod contacts;
pub mod conversation;
pub mod filters;
pub mod inbox;
pub mod notifications;
pub mod settings;
pub mod sidebar;
