// Unibox - core/settings.rs
//
// Account settings shown on the Settings screen: profile, connected
// accounts, notification and privacy switches, display preferences.
// Held in memory only; nothing here is written to config.toml.

use crate::core::model::Platform;
use serde::Serialize;

// =============================================================================
// Option lists
// =============================================================================

/// `(value, label)` pairs offered by a settings drop-down.
pub type SettingOptions = &'static [(&'static str, &'static str)];

pub const TIMEZONES: SettingOptions = &[
    ("America/New_York", "Eastern Time (ET)"),
    ("America/Chicago", "Central Time (CT)"),
    ("America/Denver", "Mountain Time (MT)"),
    ("America/Los_Angeles", "Pacific Time (PT)"),
    ("Europe/London", "London (GMT)"),
    ("Europe/Paris", "Central Europe (CET)"),
];

pub const LANGUAGES: SettingOptions = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("ja", "Japanese"),
];

pub const DATE_FORMATS: SettingOptions = &[
    ("MM/DD/YYYY", "MM/DD/YYYY"),
    ("DD/MM/YYYY", "DD/MM/YYYY"),
    ("YYYY-MM-DD", "YYYY-MM-DD"),
];

pub const TIME_FORMATS: SettingOptions = &[("12h", "12 Hour (AM/PM)"), ("24h", "24 Hour")];

pub const AUTO_ARCHIVE: SettingOptions = &[
    ("never", "Never"),
    ("7", "After 7 days"),
    ("30", "After 30 days"),
    ("90", "After 90 days"),
];

pub const DEFAULT_VIEWS: SettingOptions = &[
    ("unified", "Unified Inbox"),
    ("priority", "Priority Messages"),
    ("recent", "Recent Activity"),
];

/// Display label for `value`, or the value itself when it is not listed.
pub fn option_label<'a>(options: SettingOptions, value: &'a str) -> &'a str {
    for (v, label) in options {
        if *v == value {
            return label;
        }
    }
    value
}

// =============================================================================
// Connected accounts
// =============================================================================

/// A messaging account linked to the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectedAccount {
    pub platform: Platform,
    /// Phone number, address or handle the account is known by.
    pub handle: String,
    pub connected: bool,
}

impl ConnectedAccount {
    pub fn platform_label(&self) -> &str {
        self.platform.label()
    }

    pub fn handle(&self) -> &str {
        &self.handle
    }
}

// =============================================================================
// Switches
// =============================================================================

/// Every on/off switch on the Settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingToggle {
    EmailNotifications,
    PushNotifications,
    PriorityOnly,
    DailyDigest,
    WeeklyReport,
    NotificationSounds,
    ReadReceipts,
    OnlineStatus,
    DataSharing,
    AnalyticsOptIn,
}

impl SettingToggle {
    /// All switches in display order.
    pub fn all() -> &'static [SettingToggle] {
        &[
            SettingToggle::EmailNotifications,
            SettingToggle::PushNotifications,
            SettingToggle::PriorityOnly,
            SettingToggle::DailyDigest,
            SettingToggle::WeeklyReport,
            SettingToggle::NotificationSounds,
            SettingToggle::ReadReceipts,
            SettingToggle::OnlineStatus,
            SettingToggle::DataSharing,
            SettingToggle::AnalyticsOptIn,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingToggle::EmailNotifications => "Email Notifications",
            SettingToggle::PushNotifications => "Push Notifications",
            SettingToggle::PriorityOnly => "Priority Messages Only",
            SettingToggle::DailyDigest => "Daily Digest",
            SettingToggle::WeeklyReport => "Weekly Report",
            SettingToggle::NotificationSounds => "Notification Sounds",
            SettingToggle::ReadReceipts => "Read Receipts",
            SettingToggle::OnlineStatus => "Online Status",
            SettingToggle::DataSharing => "Data Sharing",
            SettingToggle::AnalyticsOptIn => "Analytics Opt-in",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SettingToggle::EmailNotifications => "Receive notifications via email",
            SettingToggle::PushNotifications => "Browser and mobile notifications",
            SettingToggle::PriorityOnly => "Only notify for priority contacts",
            SettingToggle::DailyDigest => "Summary of daily activity",
            SettingToggle::WeeklyReport => "Detailed weekly analytics",
            SettingToggle::NotificationSounds => "Play sounds for new messages",
            SettingToggle::ReadReceipts => "Let others know when you've read their messages",
            SettingToggle::OnlineStatus => "Show when you're active",
            SettingToggle::DataSharing => "Share anonymized usage data to improve the service",
            SettingToggle::AnalyticsOptIn => "Help improve Unibox with usage analytics",
        }
    }

    /// Heading of the group the switch is listed under.
    pub fn group(&self) -> &'static str {
        match self {
            SettingToggle::EmailNotifications
            | SettingToggle::PushNotifications
            | SettingToggle::PriorityOnly => "General Notifications",
            SettingToggle::DailyDigest
            | SettingToggle::WeeklyReport
            | SettingToggle::NotificationSounds => "Reports & Digests",
            SettingToggle::ReadReceipts
            | SettingToggle::OnlineStatus
            | SettingToggle::DataSharing => "Privacy Settings",
            SettingToggle::AnalyticsOptIn => "Data & Analytics",
        }
    }
}

// =============================================================================
// Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// One of the [`TIMEZONES`] values.
    pub timezone: String,
}

impl Profile {
    /// Avatar initials: first letter of each name part.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationPrefs {
    pub email: bool,
    pub push: bool,
    pub priority_only: bool,
    pub daily_digest: bool,
    pub weekly_report: bool,
    pub sounds: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivacyPrefs {
    pub read_receipts: bool,
    pub online_status: bool,
    pub data_sharing: bool,
    pub analytics_opt_in: bool,
}

/// Drop-down selections. Each field holds a value from the matching option
/// list.
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    pub language: String,
    pub date_format: String,
    pub time_format: String,
    pub auto_archive: String,
    pub default_view: String,
}

/// Everything editable on the Settings screen.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSettings {
    pub profile: Profile,
    pub notifications: NotificationPrefs,
    pub privacy: PrivacyPrefs,
    pub preferences: Preferences,
}

impl UserSettings {
    pub fn switch(&self, toggle: SettingToggle) -> bool {
        match toggle {
            SettingToggle::EmailNotifications => self.notifications.email,
            SettingToggle::PushNotifications => self.notifications.push,
            SettingToggle::PriorityOnly => self.notifications.priority_only,
            SettingToggle::DailyDigest => self.notifications.daily_digest,
            SettingToggle::WeeklyReport => self.notifications.weekly_report,
            SettingToggle::NotificationSounds => self.notifications.sounds,
            SettingToggle::ReadReceipts => self.privacy.read_receipts,
            SettingToggle::OnlineStatus => self.privacy.online_status,
            SettingToggle::DataSharing => self.privacy.data_sharing,
            SettingToggle::AnalyticsOptIn => self.privacy.analytics_opt_in,
        }
    }

    /// Mutable access to one switch, for binding to a checkbox.
    pub fn switch_mut(&mut self, toggle: SettingToggle) -> &mut bool {
        match toggle {
            SettingToggle::EmailNotifications => &mut self.notifications.email,
            SettingToggle::PushNotifications => &mut self.notifications.push,
            SettingToggle::PriorityOnly => &mut self.notifications.priority_only,
            SettingToggle::DailyDigest => &mut self.notifications.daily_digest,
            SettingToggle::WeeklyReport => &mut self.notifications.weekly_report,
            SettingToggle::NotificationSounds => &mut self.notifications.sounds,
            SettingToggle::ReadReceipts => &mut self.privacy.read_receipts,
            SettingToggle::OnlineStatus => &mut self.privacy.online_status,
            SettingToggle::DataSharing => &mut self.privacy.data_sharing,
            SettingToggle::AnalyticsOptIn => &mut self.privacy.analytics_opt_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures;

    #[test]
    fn test_switch_mut_targets_same_field_as_switch() {
        let mut settings = fixtures::user_settings();
        for toggle in SettingToggle::all() {
            let before = settings.switch(*toggle);
            *settings.switch_mut(*toggle) = !before;
            assert_eq!(settings.switch(*toggle), !before, "{toggle:?}");
        }
    }

    #[test]
    fn test_option_label_falls_back_to_value() {
        assert_eq!(option_label(TIMEZONES, "Europe/London"), "London (GMT)");
        assert_eq!(option_label(LANGUAGES, "pt"), "pt");
    }

    #[test]
    fn test_profile_initials() {
        assert_eq!(fixtures::user_settings().profile.initials(), "JD");
    }

    #[test]
    fn test_every_switch_has_a_group() {
        let groups: std::collections::HashSet<_> =
            SettingToggle::all().iter().map(|t| t.group()).collect();
        assert_eq!(groups.len(), 4);
    }
}
