// Unibox - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers. Records are
// flat so that every list can be exported to CSV without reshaping.

use serde::{Deserialize, Serialize};

// =============================================================================
// Platform
// =============================================================================

/// Messaging platform a conversation or message belongs to.
///
/// These are labels only; there is no integration behind any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    WhatsApp,
    LinkedIn,
    Instagram,
    Telegram,
    Email,
}

impl Platform {
    /// Returns all variants in badge display order.
    pub fn all() -> &'static [Platform] {
        &[
            Platform::WhatsApp,
            Platform::LinkedIn,
            Platform::Instagram,
            Platform::Telegram,
            Platform::Email,
        ]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::WhatsApp => "WhatsApp",
            Platform::LinkedIn => "LinkedIn",
            Platform::Instagram => "Instagram",
            Platform::Telegram => "Telegram",
            Platform::Email => "Email",
        }
    }

    /// Lowercase key, matching the serialised form.
    pub fn key(&self) -> &'static str {
        match self {
            Platform::WhatsApp => "whatsapp",
            Platform::LinkedIn => "linkedin",
            Platform::Instagram => "instagram",
            Platform::Telegram => "telegram",
            Platform::Email => "email",
        }
    }

    /// Single glyph shown on avatars and badges.
    pub fn glyph(&self) -> &'static str {
        match self {
            Platform::WhatsApp => "\u{1f4ac}",
            Platform::LinkedIn => "\u{1f4bc}",
            Platform::Instagram => "\u{1f4f8}",
            Platform::Telegram => "\u{2708}",
            Platform::Email => "\u{2709}",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Inbox
// =============================================================================

/// One row of the unified inbox: the latest message of a conversation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversation {
    /// Unique conversation ID.
    pub id: String,

    /// Display name of the other party.
    pub contact_name: String,

    /// Avatar fallback initials.
    pub initials: String,

    pub platform: Platform,

    /// Text of the most recent message.
    pub preview: String,

    /// Relative time label as displayed ("2m ago").
    pub timestamp: String,

    pub unread: bool,

    /// Starred by the user or flagged by a smart filter.
    pub priority: bool,

    /// Pinned to the top of the inbox.
    pub pinned: bool,
}

impl Conversation {
    pub fn contact_name(&self) -> &str {
        &self.contact_name
    }

    pub fn preview(&self) -> &str {
        &self.preview
    }
}

/// Delivery state of an outgoing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Sent,
    Delivered,
    Read,
}

impl DeliveryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryStatus::Sent => "Sent",
            DeliveryStatus::Delivered => "Delivered",
            DeliveryStatus::Read => "Read",
        }
    }
}

/// A single message inside a conversation thread.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThreadMessage {
    pub id: String,
    pub content: String,
    pub timestamp: String,
    /// True when the local user sent it.
    pub from_user: bool,
    pub platform: Platform,
    pub status: DeliveryStatus,
}

/// Online presence shown next to a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Online,
    Away,
    #[default]
    Offline,
}

impl Presence {
    pub fn label(&self) -> &'static str {
        match self {
            Presence::Online => "online",
            Presence::Away => "away",
            Presence::Offline => "offline",
        }
    }
}

/// Full message history with one contact, shown in the conversation view.
#[derive(Debug, Clone, PartialEq)]
pub struct Thread {
    /// ID of the inbox conversation this thread belongs to.
    pub conversation_id: String,
    pub contact_name: String,
    pub initials: String,
    pub presence: Presence,
    pub platform: Platform,
    pub messages: Vec<ThreadMessage>,
}

// =============================================================================
// Contacts
// =============================================================================

/// Priority bucket a contact was placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriorityTier {
    #[serde(rename = "Top 100")]
    Top100,
    #[serde(rename = "Top 200")]
    Top200,
}

impl PriorityTier {
    pub fn label(&self) -> &'static str {
        match self {
            PriorityTier::Top100 => "Top 100",
            PriorityTier::Top200 => "Top 200",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    Synced,
    Pending,
}

impl SyncStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SyncStatus::Synced => "Synced",
            SyncStatus::Pending => "Pending",
        }
    }
}

/// A row of the priority contacts table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    /// Free-form channel label ("Email", "Messaging App").
    pub channel: String,
    pub priority: PriorityTier,
    pub sync_status: SyncStatus,
}

impl Contact {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }
}

/// Contact pinned in the sidebar with presence.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityContact {
    pub name: String,
    pub initials: String,
    pub presence: Presence,
}

// =============================================================================
// Smart filters
// =============================================================================

/// A user-defined rule that tags incoming messages.
///
/// The criteria text is descriptive only; rules are never evaluated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SmartFilter {
    pub id: String,
    pub name: String,
    pub description: String,
    pub criteria: String,
    /// Platform label the rule applies to, or "All".
    pub platform_scope: String,
    pub active: bool,
    pub messages_matched: u32,
    pub last_triggered: String,
}

impl SmartFilter {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Platform this rule is scoped to, if it names a known one.
    pub fn platform(&self) -> Option<Platform> {
        let scope = self.platform_scope.to_lowercase();
        Platform::all().iter().copied().find(|p| p.key() == scope)
    }
}

/// Starting point offered when creating a new smart filter.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterTemplate {
    pub name: String,
    pub description: String,
}

// =============================================================================
// Notifications
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Priority,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub sender: String,
    pub initials: String,
    pub message: String,
    pub timestamp: String,
    /// Source label; may name a channel outside [`Platform`] ("Slack").
    pub platform: String,
}

impl Notification {
    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

// =============================================================================
// Analytics
// =============================================================================

/// Headline figures for the analytics screen. Static display values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsOverview {
    pub total_messages: u32,
    /// Percent change against the previous period.
    pub message_growth: f32,
    pub active_contacts: u32,
    pub contact_growth: f32,
    /// Average response time as displayed ("2m 30s").
    pub avg_response_time: String,
    pub response_improvement: f32,
}

/// One platform's share of total message volume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformShare {
    pub platform: Platform,
    pub messages: u32,
    /// 0-100.
    pub percentage: f32,
}

/// Messages received on one weekday.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyVolume {
    pub day: String,
    pub messages: u32,
}

/// A row of the most active contacts list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopContact {
    /// 1-based position in the ranking.
    pub rank: u32,
    pub name: String,
    pub platform: Platform,
    pub messages: u32,
}

impl TopContact {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn platform_label(&self) -> &str {
        self.platform.label()
    }
}
