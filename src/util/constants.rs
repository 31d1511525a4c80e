// Unibox - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Unibox";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "Unibox";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// UI defaults and limits
// =============================================================================

/// Default body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Smallest accepted `[ui] font_size`.
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Largest accepted `[ui] font_size`.
pub const MAX_FONT_SIZE: f32 = 24.0;

/// Maximum characters of a preview shown in a single inbox row before it is
/// cut with an ellipsis. The full text is still searchable.
pub const PREVIEW_MAX_CHARS: usize = 64;

/// Maximum length of a draft reply in the conversation view.
pub const MAX_DRAFT_CHARS: usize = 4_096;

// =============================================================================
// Export limits
// =============================================================================

/// Hard upper bound on records written by a single export.
pub const MAX_EXPORT_RECORDS: usize = 100_000;

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG, --debug, nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Files
// =============================================================================

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Maximum accepted size of config.toml in bytes.
pub const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024; // 64 KB

// =============================================================================
// Navigation
// =============================================================================

/// Screen keys accepted by `[ui] start_screen` and `--list`.
pub const SCREEN_KEYS: &[&str] = &[
    "inbox",
    "contacts",
    "filters",
    "analytics",
    "notifications",
    "settings",
];

/// Screen shown at startup when config does not name one.
pub const DEFAULT_START_SCREEN: &str = "inbox";
