// Unibox - core/fixtures.rs
//
// Built-in demo data shown on every screen. Constructed fresh on each call;
// callers own the returned collections.

use crate::core::model::{
    AnalyticsOverview, Contact, Conversation, DailyVolume, DeliveryStatus, FilterTemplate,
    Notification, NotificationKind, Platform, PlatformShare, Presence, PriorityContact,
    PriorityTier, SmartFilter, SyncStatus, Thread, ThreadMessage, TopContact,
};
use crate::core::settings::{
    ConnectedAccount, NotificationPrefs, Preferences, PrivacyPrefs, Profile, UserSettings,
};

fn conversation(
    id: &str,
    name: &str,
    initials: &str,
    platform: Platform,
    preview: &str,
    timestamp: &str,
    (unread, priority, pinned): (bool, bool, bool),
) -> Conversation {
    Conversation {
        id: id.to_string(),
        contact_name: name.to_string(),
        initials: initials.to_string(),
        platform,
        preview: preview.to_string(),
        timestamp: timestamp.to_string(),
        unread,
        priority,
        pinned,
    }
}

/// Inbox rows, most recent first.
pub fn conversations() -> Vec<Conversation> {
    vec![
        conversation(
            "1",
            "Sarah Johnson",
            "SJ",
            Platform::WhatsApp,
            "Hey! Can we discuss the project proposal? I have some ideas...",
            "2m ago",
            (true, true, true),
        ),
        conversation(
            "2",
            "Alex Chen",
            "AC",
            Platform::LinkedIn,
            "Great connecting with you at the conference. Let's schedule a call.",
            "15m ago",
            (true, false, false),
        ),
        conversation(
            "3",
            "Marketing Team",
            "MT",
            Platform::Email,
            "Weekly newsletter draft ready for review - please check ASAP",
            "1h ago",
            (false, true, false),
        ),
        conversation(
            "4",
            "Emma Rodriguez",
            "ER",
            Platform::Telegram,
            "The files are ready for download. Link expires in 24 hours.",
            "2h ago",
            (true, false, false),
        ),
        conversation(
            "5",
            "Design Studio",
            "DS",
            Platform::Instagram,
            "Loved your latest post! Let's collaborate on something similar.",
            "4h ago",
            (false, false, false),
        ),
    ]
}

fn message(
    id: &str,
    content: &str,
    timestamp: &str,
    from_user: bool,
    status: DeliveryStatus,
) -> ThreadMessage {
    ThreadMessage {
        id: id.to_string(),
        content: content.to_string(),
        timestamp: timestamp.to_string(),
        from_user,
        platform: Platform::WhatsApp,
        status,
    }
}

/// Message history for the conversation with `conversation_id`.
///
/// Only the pinned demo conversation carries a full history; every other
/// conversation gets a thread holding just its preview message.
pub fn thread_for(conversation_id: &str) -> Option<Thread> {
    if conversation_id == "1" {
        return Some(Thread {
            conversation_id: "1".to_string(),
            contact_name: "Sarah Johnson".to_string(),
            initials: "SJ".to_string(),
            presence: Presence::Online,
            platform: Platform::WhatsApp,
            messages: vec![
                message(
                    "1",
                    "Hey! How are you doing? I wanted to discuss the project proposal we talked about last week.",
                    "10:30 AM",
                    false,
                    DeliveryStatus::Read,
                ),
                message(
                    "2",
                    "Hi Sarah! I'm doing well, thanks for asking. Yes, I've been thinking about that proposal too.",
                    "10:32 AM",
                    true,
                    DeliveryStatus::Read,
                ),
                message(
                    "3",
                    "Great! I have some new ideas that could really make this project stand out. Are you free for a quick call this afternoon?",
                    "10:35 AM",
                    false,
                    DeliveryStatus::Read,
                ),
                message(
                    "4",
                    "Absolutely! I'm free after 2 PM. Should we do a video call or just voice?",
                    "10:37 AM",
                    true,
                    DeliveryStatus::Delivered,
                ),
            ],
        });
    }

    conversations()
        .into_iter()
        .find(|c| c.id == conversation_id)
        .map(|c| Thread {
            presence: Presence::Offline,
            platform: c.platform,
            messages: vec![ThreadMessage {
                id: "1".to_string(),
                content: c.preview.clone(),
                timestamp: c.timestamp.clone(),
                from_user: false,
                platform: c.platform,
                status: DeliveryStatus::Read,
            }],
            conversation_id: c.id,
            contact_name: c.contact_name,
            initials: c.initials,
        })
}

/// Priority contacts table.
pub fn contacts() -> Vec<Contact> {
    let rows: [(&str, &str, &str); 10] = [
        ("1", "Ethan Harper", "Email"),
        ("2", "Olivia Bennett", "Messaging App"),
        ("3", "Noah Carter", "Email"),
        ("4", "Ava Davis", "Messaging App"),
        ("5", "Liam Evans", "Email"),
        ("6", "Sophia Foster", "Messaging App"),
        ("7", "Jackson Green", "Email"),
        ("8", "Isabella Hayes", "Messaging App"),
        ("9", "Lucas Ingram", "Email"),
        ("10", "Mia Jenkins", "Messaging App"),
    ];

    rows.iter()
        .map(|&(id, name, channel)| Contact {
            id: id.to_string(),
            name: name.to_string(),
            channel: channel.to_string(),
            // Email contacts are the Top 100 tier in the demo data.
            priority: if channel == "Email" {
                PriorityTier::Top100
            } else {
                PriorityTier::Top200
            },
            sync_status: SyncStatus::Synced,
        })
        .collect()
}

/// Contacts pinned in the sidebar.
pub fn priority_contacts() -> Vec<PriorityContact> {
    [
        ("Sarah Johnson", "SJ", Presence::Online),
        ("Alex Chen", "AC", Presence::Away),
        ("Emma Rodriguez", "ER", Presence::Offline),
        ("Michael Brown", "MB", Presence::Online),
    ]
    .into_iter()
    .map(|(name, initials, presence)| PriorityContact {
        name: name.to_string(),
        initials: initials.to_string(),
        presence,
    })
    .collect()
}

#[allow(clippy::too_many_arguments)]
fn smart_filter(
    id: &str,
    name: &str,
    description: &str,
    criteria: &str,
    platform_scope: &str,
    active: bool,
    messages_matched: u32,
    last_triggered: &str,
) -> SmartFilter {
    SmartFilter {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        criteria: criteria.to_string(),
        platform_scope: platform_scope.to_string(),
        active,
        messages_matched,
        last_triggered: last_triggered.to_string(),
    }
}

/// Smart filter rules.
pub fn smart_filters() -> Vec<SmartFilter> {
    vec![
        smart_filter(
            "1",
            "Priority Clients",
            "Messages from top-tier clients and VIP contacts",
            "Contact in \"VIP\" list OR message contains \"urgent\"",
            "All",
            true,
            47,
            "2 hours ago",
        ),
        smart_filter(
            "2",
            "Project Updates",
            "Messages containing project-related keywords",
            "Message contains \"project\", \"deadline\", \"update\", or \"milestone\"",
            "LinkedIn",
            true,
            23,
            "5 hours ago",
        ),
        smart_filter(
            "3",
            "Meeting Requests",
            "Automatically detect meeting and call requests",
            "Message contains \"meeting\", \"call\", \"schedule\", or \"appointment\"",
            "All",
            false,
            12,
            "1 day ago",
        ),
        smart_filter(
            "4",
            "Sales Inquiries",
            "Potential sales leads and business inquiries",
            "Message contains \"price\", \"quote\", \"purchase\", or \"interested\"",
            "WhatsApp",
            true,
            18,
            "3 hours ago",
        ),
    ]
}

/// Quick-start templates listed under the smart filters.
pub fn filter_templates() -> Vec<FilterTemplate> {
    [
        ("Priority Messages", "Messages marked as high priority"),
        ("Unread Messages", "All unread messages across platforms"),
        ("Recent Contacts", "Messages from recently added contacts"),
        ("Media Messages", "Messages containing images or files"),
        ("Group Messages", "Messages from group conversations"),
    ]
    .into_iter()
    .map(|(name, description)| FilterTemplate {
        name: name.to_string(),
        description: description.to_string(),
    })
    .collect()
}

/// Notification feed, newest first within each kind.
pub fn notifications() -> Vec<Notification> {
    [
        (
            "1",
            NotificationKind::Priority,
            "Alex",
            "A",
            "Hey, just checking in. Let's discuss the project proposal this afternoon. It's urgent.",
            "10:00 AM",
            "WhatsApp",
        ),
        (
            "2",
            NotificationKind::Priority,
            "Sarah",
            "S",
            "IMPORTANT: The client meeting has been moved to 3 PM. Please confirm.",
            "10:05 AM",
            "Email",
        ),
        (
            "3",
            NotificationKind::Other,
            "Team Updates",
            "TU",
            "Weekly team sync scheduled for tomorrow at 2 PM",
            "9:45 AM",
            "Slack",
        ),
        (
            "4",
            NotificationKind::Other,
            "David",
            "D",
            "Thanks for the quick turnaround on the designs!",
            "9:30 AM",
            "LinkedIn",
        ),
        (
            "5",
            NotificationKind::Other,
            "Emily",
            "E",
            "Looking forward to our coffee chat next week",
            "Yesterday",
            "Instagram",
        ),
    ]
    .into_iter()
    .map(
        |(id, kind, sender, initials, message, timestamp, platform)| Notification {
            id: id.to_string(),
            kind,
            sender: sender.to_string(),
            initials: initials.to_string(),
            message: message.to_string(),
            timestamp: timestamp.to_string(),
            platform: platform.to_string(),
        },
    )
    .collect()
}

/// Headline analytics figures for the last 30 days.
pub fn analytics_overview() -> AnalyticsOverview {
    AnalyticsOverview {
        total_messages: 2_847,
        message_growth: 12.5,
        active_contacts: 156,
        contact_growth: -2.3,
        avg_response_time: "2m 30s".to_string(),
        response_improvement: 15.2,
    }
}

/// Message volume per platform, largest first.
pub fn platform_shares() -> Vec<PlatformShare> {
    [
        (Platform::WhatsApp, 1_243, 43.7),
        (Platform::LinkedIn, 687, 24.1),
        (Platform::Email, 542, 19.0),
        (Platform::Instagram, 234, 8.2),
        (Platform::Telegram, 141, 5.0),
    ]
    .into_iter()
    .map(|(platform, messages, percentage)| PlatformShare {
        platform,
        messages,
        percentage,
    })
    .collect()
}

/// Messages per weekday, Monday first.
pub fn weekly_volume() -> Vec<DailyVolume> {
    [
        ("Mon", 142),
        ("Tue", 186),
        ("Wed", 234),
        ("Thu", 198),
        ("Fri", 276),
        ("Sat", 89),
        ("Sun", 67),
    ]
    .into_iter()
    .map(|(day, messages)| DailyVolume {
        day: day.to_string(),
        messages,
    })
    .collect()
}

/// Most active contacts, ranked by message count.
pub fn top_contacts() -> Vec<TopContact> {
    [
        ("Sarah Chen", Platform::LinkedIn, 48),
        ("Alex Johnson", Platform::WhatsApp, 42),
        ("Maria Lopez", Platform::Email, 38),
        ("David Kim", Platform::Instagram, 34),
        ("Emma Brown", Platform::Telegram, 29),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, platform, messages), rank)| TopContact {
        rank,
        name: name.to_string(),
        platform,
        messages,
    })
    .collect()
}

/// Accounts listed under Settings > Connected Accounts.
pub fn connected_accounts() -> Vec<ConnectedAccount> {
    [
        (Platform::WhatsApp, "+1 (555) 123-4567", true),
        (Platform::LinkedIn, "john.doe@company.com", true),
        (Platform::Email, "john.doe@gmail.com", true),
        (Platform::Instagram, "@johndoe", false),
        (Platform::Telegram, "@johndoe_tg", true),
    ]
    .into_iter()
    .map(|(platform, handle, connected)| ConnectedAccount {
        platform,
        handle: handle.to_string(),
        connected,
    })
    .collect()
}

/// Settings the dashboard opens with.
pub fn user_settings() -> UserSettings {
    UserSettings {
        profile: Profile {
            name: "John Doe".to_string(),
            email: "john.doe@company.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            timezone: "America/New_York".to_string(),
        },
        notifications: NotificationPrefs {
            email: true,
            push: true,
            priority_only: false,
            daily_digest: true,
            weekly_report: false,
            sounds: true,
        },
        privacy: PrivacyPrefs {
            read_receipts: true,
            online_status: true,
            data_sharing: false,
            analytics_opt_in: true,
        },
        preferences: Preferences {
            language: "en".to_string(),
            date_format: "MM/DD/YYYY".to_string(),
            time_format: "12h".to_string(),
            auto_archive: "30".to_string(),
            default_view: "unified".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = conversations().into_iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 5);
        let ids: HashSet<_> = contacts().into_iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_every_conversation_has_a_thread() {
        for c in conversations() {
            let thread = thread_for(&c.id).expect("thread exists");
            assert_eq!(thread.contact_name, c.contact_name);
            assert!(!thread.messages.is_empty());
        }
        assert!(thread_for("missing").is_none());
    }

    #[test]
    fn test_contact_tiers_follow_channel() {
        for c in contacts() {
            let expected = if c.channel == "Email" {
                PriorityTier::Top100
            } else {
                PriorityTier::Top200
            };
            assert_eq!(c.priority, expected);
        }
    }

    #[test]
    fn test_top_contacts_ranked_by_messages() {
        let top = top_contacts();
        let ranks: Vec<u32> = top.iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
        assert!(top.windows(2).all(|w| w[0].messages >= w[1].messages));
    }

    #[test]
    fn test_platform_shares_sum_to_total_messages() {
        let total: u32 = platform_shares().iter().map(|s| s.messages).sum();
        assert_eq!(total, analytics_overview().total_messages);
    }

    #[test]
    fn test_settings_values_come_from_option_lists() {
        use crate::core::settings::{
            SettingOptions, AUTO_ARCHIVE, DATE_FORMATS, DEFAULT_VIEWS, LANGUAGES, TIMEZONES,
            TIME_FORMATS,
        };
        fn listed(options: SettingOptions, value: &str) -> bool {
            options.iter().any(|(v, _)| *v == value)
        }
        let s = user_settings();
        assert!(listed(TIMEZONES, &s.profile.timezone));
        assert!(listed(LANGUAGES, &s.preferences.language));
        assert!(listed(DATE_FORMATS, &s.preferences.date_format));
        assert!(listed(TIME_FORMATS, &s.preferences.time_format));
        assert!(listed(AUTO_ARCHIVE, &s.preferences.auto_archive));
        assert!(listed(DEFAULT_VIEWS, &s.preferences.default_view));
    }
}
