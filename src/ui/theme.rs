// Unibox - ui/theme.rs
//
// Colour scheme, platform colour mapping, and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::{Platform, Presence};
use egui::Color32;

/// Brand colour for a platform badge.
pub fn platform_colour(platform: &Platform) -> Color32 {
    match platform {
        Platform::WhatsApp => Color32::from_rgb(37, 211, 102),
        Platform::LinkedIn => Color32::from_rgb(10, 102, 194),
        Platform::Instagram => Color32::from_rgb(225, 48, 108),
        Platform::Telegram => Color32::from_rgb(0, 136, 204),
        Platform::Email => Color32::from_rgb(234, 67, 53),
    }
}

/// Dot colour for a presence indicator.
pub fn presence_colour(presence: &Presence) -> Color32 {
    match presence {
        Presence::Online => Color32::from_rgb(34, 197, 94), // Green 500
        Presence::Away => Color32::from_rgb(234, 179, 8),   // Yellow 500
        Presence::Offline => Color32::from_rgb(107, 114, 128), // Gray 500
    }
}

/// Foreground for primary row text: bright for unread rows, muted otherwise.
pub fn row_text_colour(unread: bool, dark_mode: bool) -> Color32 {
    match (unread, dark_mode) {
        (true, true) => Color32::WHITE,
        (true, false) => Color32::from_rgb(17, 24, 39), // Gray 900
        (false, true) => Color32::from_rgb(156, 163, 175), // Gray 400
        (false, false) => Color32::from_rgb(107, 114, 128), // Gray 500
    }
}

/// Accent used for selection, unread dots, and active badges.
pub const ACCENT: Color32 = Color32::from_rgb(99, 102, 241); // Indigo 500

/// Star colour for priority conversations.
pub const PRIORITY: Color32 = Color32::from_rgb(245, 158, 11); // Amber 500

/// Text colour for a successful sync.
pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 280.0;
pub const SIDEBAR_COLLAPSED_WIDTH: f32 = 56.0;
pub const INBOX_LIST_WIDTH: f32 = 360.0;
pub const SEARCH_WIDTH: f32 = 320.0;
