// Unibox - app/mod.rs
//
// Application layer: dashboard state and navigation.
// Dependencies: core layer, validated config.
// Must NOT depend on: ui.

pub mod state;
pub mod report;
