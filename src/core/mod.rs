// Unibox - core/mod.rs
//
// Core business logic layer.
// Dependencies: serde, csv, serde_json (export only).
// Must NOT depend on: ui, platform, app.

pub mod export;
pub mod filter;
pub mod fixtures;
pub mod model;
pub mod settings;
