// Unibox - app/state.rs
//
// Dashboard state management. Holds the demo records, one search view per
// screen, the selected conversation, and the sidebar toggle.
// Owned by the eframe::App implementation; the filter functions it calls
// keep no state of their own.

use crate::core::filter::{self, Searchable};
use crate::core::fixtures;
use crate::core::model::{
    AnalyticsOverview, Contact, Conversation, DailyVolume, DeliveryStatus, FilterTemplate,
    Notification, NotificationKind, Platform, PlatformShare, PriorityContact, SmartFilter, Thread,
    ThreadMessage, TopContact,
};
use crate::core::settings::{ConnectedAccount, SettingToggle, UserSettings};
use crate::platform::config::AppConfig;
use crate::util::constants;

/// Dashboard screens reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Inbox,
    Contacts,
    Filters,
    Analytics,
    Notifications,
    Settings,
}

impl Screen {
    /// Returns all screens in sidebar order.
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Inbox,
            Screen::Contacts,
            Screen::Filters,
            Screen::Analytics,
            Screen::Notifications,
            Screen::Settings,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Screen::Inbox => "Unified Inbox",
            Screen::Contacts => "Priority Contacts",
            Screen::Filters => "Smart Filters",
            Screen::Analytics => "Analytics",
            Screen::Notifications => "Notifications",
            Screen::Settings => "Settings",
        }
    }

    /// Secondary line shown under the label in the expanded sidebar.
    pub fn description(&self) -> &'static str {
        match self {
            Screen::Inbox => "All conversations",
            Screen::Contacts => "Important people",
            Screen::Filters => "Custom rules",
            Screen::Analytics => "Message insights",
            Screen::Notifications => "Alert settings",
            Screen::Settings => "Preferences",
        }
    }

    /// Key used in config.toml and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Screen::Inbox => "inbox",
            Screen::Contacts => "contacts",
            Screen::Filters => "filters",
            Screen::Analytics => "analytics",
            Screen::Notifications => "notifications",
            Screen::Settings => "settings",
        }
    }

    pub fn from_key(key: &str) -> Option<Screen> {
        let key = key.trim().to_lowercase();
        Screen::all().iter().copied().find(|s| s.key() == key)
    }
}

/// Search box text and the resulting row indices for one list.
#[derive(Debug, Clone, Default)]
pub struct ListView {
    pub query: String,

    /// Indices of matching records, in record order.
    pub indices: Vec<usize>,
}

impl ListView {
    /// Re-run the search over `records`.
    pub fn refresh<R: Searchable>(&mut self, records: &[R]) {
        self.indices = filter::filter_indices(records, &self.query, R::SEARCH_FIELDS);
    }

    /// Matching records in order.
    pub fn visible<'a, R>(&self, records: &'a [R]) -> Vec<&'a R> {
        self.indices.iter().filter_map(|&i| records.get(i)).collect()
    }
}

/// Unread badge counts for the inbox header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboxBadges {
    /// Unread conversations among the visible rows.
    pub unread_total: usize,

    /// Unread conversations per platform, in badge order, zero counts omitted.
    pub per_platform: Vec<(Platform, usize)>,
}

/// Summary numbers shown above the smart filter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterStats {
    pub total: usize,
    pub active: usize,
    pub messages_matched: u64,
}

/// Top-level dashboard state.
#[derive(Debug)]
pub struct DashboardState {
    pub conversations: Vec<Conversation>,
    pub contacts: Vec<Contact>,
    pub smart_filters: Vec<SmartFilter>,
    pub templates: Vec<FilterTemplate>,
    pub notifications: Vec<Notification>,
    pub priority_contacts: Vec<PriorityContact>,
    pub analytics: AnalyticsOverview,
    pub platform_shares: Vec<PlatformShare>,
    pub weekly_volume: Vec<DailyVolume>,
    pub top_contacts: Vec<TopContact>,
    pub accounts: Vec<ConnectedAccount>,
    pub settings: UserSettings,

    /// Settings changed since the last "Save Changes".
    pub settings_dirty: bool,

    /// Screen shown in the central panel.
    pub screen: Screen,

    /// Whether the sidebar shows icons only.
    pub sidebar_collapsed: bool,

    /// Sidebar quick search over conversations.
    pub quick_search: String,

    pub inbox: ListView,
    pub contacts_view: ListView,
    pub filters_view: ListView,
    pub notifications_view: ListView,
    pub analytics_view: ListView,
    pub settings_view: ListView,

    /// ID of the conversation open in the detail panel.
    pub selected_conversation: Option<String>,

    /// Thread of the selected conversation.
    pub open_thread: Option<Thread>,

    /// Reply being typed in the conversation view.
    pub draft: String,

    /// Platform the draft will be sent through. Reset to the thread's
    /// platform whenever a conversation is opened.
    pub reply_platform: Platform,

    /// Set by "Mark all read"; clears the notification badge.
    pub notifications_read: bool,

    /// Status message for the status bar.
    pub status_message: String,

    pub dark_mode: bool,
    pub font_size: f32,
}

impl DashboardState {
    /// Create state over the built-in demo data.
    pub fn new(config: &AppConfig) -> Self {
        let mut state = Self {
            conversations: fixtures::conversations(),
            contacts: fixtures::contacts(),
            smart_filters: fixtures::smart_filters(),
            templates: fixtures::filter_templates(),
            notifications: fixtures::notifications(),
            priority_contacts: fixtures::priority_contacts(),
            analytics: fixtures::analytics_overview(),
            platform_shares: fixtures::platform_shares(),
            weekly_volume: fixtures::weekly_volume(),
            top_contacts: fixtures::top_contacts(),
            accounts: fixtures::connected_accounts(),
            settings: fixtures::user_settings(),
            settings_dirty: false,
            screen: Screen::from_key(&config.start_screen).unwrap_or(Screen::Inbox),
            sidebar_collapsed: config.sidebar_collapsed,
            quick_search: String::new(),
            inbox: ListView::default(),
            contacts_view: ListView::default(),
            filters_view: ListView::default(),
            notifications_view: ListView::default(),
            analytics_view: ListView::default(),
            settings_view: ListView::default(),
            selected_conversation: None,
            open_thread: None,
            draft: String::new(),
            reply_platform: Platform::WhatsApp,
            notifications_read: false,
            status_message: "Ready.".to_string(),
            dark_mode: config.dark_mode,
            font_size: config.font_size,
        };
        state.apply_all_filters();
        tracing::debug!(
            conversations = state.conversations.len(),
            contacts = state.contacts.len(),
            rules = state.smart_filters.len(),
            notifications = state.notifications.len(),
            "Dashboard state initialised"
        );
        state
    }

    /// Recompute every screen's visible rows.
    pub fn apply_all_filters(&mut self) {
        for screen in Screen::all() {
            self.apply_filter(*screen);
        }
    }

    /// Recompute the visible rows of one screen from its query.
    pub fn apply_filter(&mut self, screen: Screen) {
        match screen {
            Screen::Inbox => self.inbox.refresh(&self.conversations),
            Screen::Contacts => self.contacts_view.refresh(&self.contacts),
            Screen::Filters => self.filters_view.refresh(&self.smart_filters),
            Screen::Analytics => self.analytics_view.refresh(&self.top_contacts),
            Screen::Notifications => self.notifications_view.refresh(&self.notifications),
            Screen::Settings => self.settings_view.refresh(&self.accounts),
        }
        tracing::trace!(screen = screen.key(), "Filter applied");
    }

    /// Replace a screen's query and re-filter.
    pub fn set_query(&mut self, screen: Screen, query: &str) {
        self.view_mut(screen).query = query.to_string();
        self.apply_filter(screen);
    }

    pub fn view(&self, screen: Screen) -> &ListView {
        match screen {
            Screen::Inbox => &self.inbox,
            Screen::Contacts => &self.contacts_view,
            Screen::Filters => &self.filters_view,
            Screen::Analytics => &self.analytics_view,
            Screen::Notifications => &self.notifications_view,
            Screen::Settings => &self.settings_view,
        }
    }

    pub fn view_mut(&mut self, screen: Screen) -> &mut ListView {
        match screen {
            Screen::Inbox => &mut self.inbox,
            Screen::Contacts => &mut self.contacts_view,
            Screen::Filters => &mut self.filters_view,
            Screen::Analytics => &mut self.analytics_view,
            Screen::Notifications => &mut self.notifications_view,
            Screen::Settings => &mut self.settings_view,
        }
    }

    /// Number of visible rows on a screen.
    pub fn visible_count(&self, screen: Screen) -> usize {
        self.view(screen).indices.len()
    }

    /// Number of records behind a screen before filtering.
    pub fn total_count(&self, screen: Screen) -> usize {
        match screen {
            Screen::Inbox => self.conversations.len(),
            Screen::Contacts => self.contacts.len(),
            Screen::Filters => self.smart_filters.len(),
            Screen::Analytics => self.top_contacts.len(),
            Screen::Notifications => self.notifications.len(),
            Screen::Settings => self.accounts.len(),
        }
    }

    // -------------------------------------------------------------------------
    // Inbox
    // -------------------------------------------------------------------------

    pub fn visible_conversations(&self) -> Vec<&Conversation> {
        self.inbox.visible(&self.conversations)
    }

    /// Unread counts over the visible inbox rows.
    pub fn inbox_badges(&self) -> InboxBadges {
        let unread: Vec<&Conversation> = self
            .visible_conversations()
            .into_iter()
            .filter(|c| c.unread)
            .collect();
        let counts = filter::count_by_category(unread.iter().copied(), |c| c.platform);
        InboxBadges {
            unread_total: unread.len(),
            per_platform: Platform::all()
                .iter()
                .filter_map(|p| counts.get(p).map(|&n| (*p, n)))
                .collect(),
        }
    }

    /// Conversation count per platform over all conversations, for the
    /// sidebar. Zero counts omitted.
    pub fn platform_totals(&self) -> Vec<(Platform, usize)> {
        let counts = filter::count_by_category(&self.conversations, |c| c.platform);
        Platform::all()
            .iter()
            .filter_map(|p| counts.get(p).map(|&n| (*p, n)))
            .collect()
    }

    /// Sidebar quick search results.
    pub fn quick_search_results(&self) -> Vec<&Conversation> {
        if filter::normalize_query(&self.quick_search).is_empty() {
            return Vec::new();
        }
        filter::filter_records(&self.conversations, &self.quick_search)
    }

    /// Open a conversation in the detail panel.
    pub fn select_conversation(&mut self, id: &str) {
        if self.selected_conversation.as_deref() == Some(id) {
            return;
        }
        self.open_thread = fixtures::thread_for(id);
        if self.open_thread.is_none() {
            tracing::warn!(conversation = id, "No thread for selected conversation");
            self.selected_conversation = None;
            return;
        }
        self.selected_conversation = Some(id.to_string());
        self.draft.clear();
        if let Some(thread) = &self.open_thread {
            self.reply_platform = thread.platform;
        }
        if let Some(c) = self.conversations.iter_mut().find(|c| c.id == id) {
            c.unread = false;
        }
        tracing::debug!(conversation = id, "Conversation selected");
    }

    pub fn clear_selection(&mut self) {
        self.selected_conversation = None;
        self.open_thread = None;
        self.draft.clear();
    }

    pub fn selected(&self) -> Option<&Conversation> {
        let id = self.selected_conversation.as_deref()?;
        self.conversations.iter().find(|c| c.id == id)
    }

    /// Append the draft to the open thread as an outgoing message.
    ///
    /// Nothing is transmitted; the message only lives in this state. Returns
    /// false when there is no open thread or the draft is blank.
    pub fn send_draft(&mut self) -> bool {
        let content: String = self
            .draft
            .trim()
            .chars()
            .take(constants::MAX_DRAFT_CHARS)
            .collect();
        if content.is_empty() {
            return false;
        }
        let platform = self.reply_platform;
        let Some(thread) = self.open_thread.as_mut() else {
            return false;
        };

        let id = (thread.messages.len() + 1).to_string();
        thread.messages.push(ThreadMessage {
            id,
            content: content.clone(),
            timestamp: "now".to_string(),
            from_user: true,
            platform,
            status: DeliveryStatus::Sent,
        });
        let conversation_id = thread.conversation_id.clone();

        if let Some(c) = self
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)
        {
            c.preview = content;
            c.timestamp = "now".to_string();
        }
        self.draft.clear();
        self.apply_filter(Screen::Inbox);
        tracing::debug!(
            conversation = %conversation_id,
            platform = platform.key(),
            "Draft appended to thread"
        );
        true
    }

    // -------------------------------------------------------------------------
    // Contacts
    // -------------------------------------------------------------------------

    pub fn visible_contacts(&self) -> Vec<&Contact> {
        self.contacts_view.visible(&self.contacts)
    }

    // -------------------------------------------------------------------------
    // Smart filters
    // -------------------------------------------------------------------------

    pub fn visible_smart_filters(&self) -> Vec<&SmartFilter> {
        self.filters_view.visible(&self.smart_filters)
    }

    /// Flip a rule's active flag. Returns the new value, or None for an
    /// unknown ID.
    pub fn toggle_smart_filter(&mut self, id: &str) -> Option<bool> {
        let rule = self.smart_filters.iter_mut().find(|f| f.id == id)?;
        rule.active = !rule.active;
        tracing::info!(rule = %rule.name, active = rule.active, "Smart filter toggled");
        Some(rule.active)
    }

    /// Totals over all rules, independent of the search box.
    pub fn filter_stats(&self) -> FilterStats {
        FilterStats {
            total: self.smart_filters.len(),
            active: self.smart_filters.iter().filter(|f| f.active).count(),
            messages_matched: self
                .smart_filters
                .iter()
                .map(|f| u64::from(f.messages_matched))
                .sum(),
        }
    }

    // -------------------------------------------------------------------------
    // Notifications
    // -------------------------------------------------------------------------

    /// Visible notifications of one kind.
    pub fn notifications_of(&self, kind: NotificationKind) -> Vec<&Notification> {
        self.notifications_view
            .visible(&self.notifications)
            .into_iter()
            .filter(|n| n.kind == kind)
            .collect()
    }

    /// Badge count: unread priority notifications.
    pub fn unread_notification_count(&self) -> usize {
        if self.notifications_read {
            return 0;
        }
        let counts = filter::count_by_category(&self.notifications, |n| n.kind);
        counts
            .get(&NotificationKind::Priority)
            .copied()
            .unwrap_or(0)
    }

    pub fn mark_all_read(&mut self) {
        self.notifications_read = true;
        self.status_message = "All notifications marked as read.".to_string();
    }

    // -------------------------------------------------------------------------
    // Analytics
    // -------------------------------------------------------------------------

    pub fn visible_top_contacts(&self) -> Vec<&TopContact> {
        self.analytics_view.visible(&self.top_contacts)
    }

    /// Busiest day of the week, first one on a tie.
    pub fn peak_day(&self) -> Option<&DailyVolume> {
        self.weekly_volume
            .iter()
            .reduce(|best, day| if day.messages > best.messages { day } else { best })
    }

    /// Bar height of `day` relative to the busiest day, in 0.0..=1.0.
    pub fn volume_fraction(&self, day: &DailyVolume) -> f32 {
        match self.peak_day() {
            Some(peak) if peak.messages > 0 => day.messages as f32 / peak.messages as f32,
            _ => 0.0,
        }
    }

    // -------------------------------------------------------------------------
    // Settings
    // -------------------------------------------------------------------------

    pub fn visible_accounts(&self) -> Vec<&ConnectedAccount> {
        self.settings_view.visible(&self.accounts)
    }

    /// Flip one settings switch. Returns the new value.
    pub fn toggle_setting(&mut self, toggle: SettingToggle) -> bool {
        let value = self.settings.switch_mut(toggle);
        *value = !*value;
        let now = *value;
        self.settings_dirty = true;
        tracing::debug!(setting = toggle.label(), enabled = now, "Setting toggled");
        now
    }

    /// Connect or disconnect the account for `platform`. Returns the new
    /// connection state, or None when no account exists for it.
    pub fn toggle_account(&mut self, platform: Platform) -> Option<bool> {
        let account = self.accounts.iter_mut().find(|a| a.platform == platform)?;
        account.connected = !account.connected;
        let connected = account.connected;
        self.settings_dirty = true;
        tracing::info!(platform = platform.key(), connected, "Account connection changed");
        Some(connected)
    }

    pub fn connected_account_count(&self) -> usize {
        let counts = filter::count_by_category(&self.accounts, |a| a.connected);
        counts.get(&true).copied().unwrap_or(0)
    }

    /// Mark settings as saved. They stay in memory only.
    pub fn save_settings(&mut self) {
        self.settings_dirty = false;
        self.status_message = "Settings saved.".to_string();
        tracing::info!("Settings saved");
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn set_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            tracing::debug!(from = self.screen.key(), to = screen.key(), "Screen changed");
            self.screen = screen;
        }
    }

    /// Badge next to a sidebar entry, None when there is nothing to show.
    pub fn nav_badge(&self, screen: Screen) -> Option<usize> {
        let n = match screen {
            Screen::Inbox => self.conversations.iter().filter(|c| c.unread).count(),
            Screen::Contacts => self.priority_contacts.len(),
            Screen::Filters | Screen::Analytics | Screen::Settings => 0,
            Screen::Notifications => self.unread_notification_count(),
        };
        (n > 0).then_some(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_state() -> DashboardState {
        DashboardState::new(&AppConfig::default())
    }

    #[test]
    fn test_new_state_shows_everything() {
        let state = make_state();
        for screen in Screen::all() {
            assert_eq!(state.visible_count(*screen), state.total_count(*screen));
        }
        assert_eq!(state.screen, Screen::Inbox);
    }

    #[test]
    fn test_start_screen_from_config() {
        let config = AppConfig {
            start_screen: "filters".to_string(),
            sidebar_collapsed: true,
            ..AppConfig::default()
        };
        let state = DashboardState::new(&config);
        assert_eq!(state.screen, Screen::Filters);
        assert!(state.sidebar_collapsed);
    }

    #[test]
    fn test_inbox_query_matches_name_or_preview() {
        let mut state = make_state();
        state.set_query(Screen::Inbox, "sa");
        let names: Vec<_> = state
            .visible_conversations()
            .iter()
            .map(|c| c.contact_name.as_str())
            .collect();
        // "ASAP" in the Marketing Team preview contains "sa" too.
        assert_eq!(names, vec!["Sarah Johnson", "Marketing Team"]);

        state.set_query(Screen::Inbox, "asap");
        assert_eq!(state.visible_conversations()[0].contact_name, "Marketing Team");
    }

    #[test]
    fn test_inbox_badges_count_unread_visible_rows() {
        let mut state = make_state();
        let badges = state.inbox_badges();
        assert_eq!(badges.unread_total, 3);
        assert_eq!(
            badges.per_platform,
            vec![
                (Platform::WhatsApp, 1),
                (Platform::LinkedIn, 1),
                (Platform::Telegram, 1)
            ]
        );

        state.set_query(Screen::Inbox, "alex");
        let badges = state.inbox_badges();
        assert_eq!(badges.unread_total, 1);
        assert_eq!(badges.per_platform, vec![(Platform::LinkedIn, 1)]);

        state.set_query(Screen::Inbox, "nobody matches this");
        let badges = state.inbox_badges();
        assert_eq!(badges.unread_total, 0);
        assert!(badges.per_platform.is_empty());
    }

    #[test]
    fn test_contacts_search_by_channel() {
        let mut state = make_state();
        state.set_query(Screen::Contacts, "messaging");
        assert_eq!(state.visible_contacts().len(), 5);
        assert!(state
            .visible_contacts()
            .iter()
            .all(|c| c.channel == "Messaging App"));
    }

    #[test]
    fn test_select_conversation_opens_thread_and_marks_read() {
        let mut state = make_state();
        state.select_conversation("2");
        assert_eq!(state.selected().map(|c| c.contact_name.as_str()), Some("Alex Chen"));
        assert!(!state.selected().unwrap().unread);
        assert_eq!(state.open_thread.as_ref().unwrap().contact_name, "Alex Chen");

        state.select_conversation("missing");
        assert!(state.selected_conversation.is_none());
        assert!(state.open_thread.is_none());
    }

    #[test]
    fn test_send_draft_appends_outgoing_message() {
        let mut state = make_state();
        assert!(!state.send_draft());

        state.select_conversation("1");
        let before = state.open_thread.as_ref().unwrap().messages.len();
        state.draft = "   ".to_string();
        assert!(!state.send_draft());

        state.draft = "See you at 2".to_string();
        assert!(state.send_draft());
        let thread = state.open_thread.as_ref().unwrap();
        assert_eq!(thread.messages.len(), before + 1);
        let last = thread.messages.last().unwrap();
        assert!(last.from_user);
        assert_eq!(last.status, DeliveryStatus::Sent);
        assert_eq!(state.selected().unwrap().preview, "See you at 2");
        assert!(state.draft.is_empty());
    }

    #[test]
    fn test_toggle_smart_filter_and_stats() {
        let mut state = make_state();
        assert_eq!(
            state.filter_stats(),
            FilterStats {
                total: 4,
                active: 3,
                messages_matched: 100
            }
        );
        assert_eq!(state.toggle_smart_filter("3"), Some(true));
        assert_eq!(state.filter_stats().active, 4);
        assert_eq!(state.toggle_smart_filter("nope"), None);
    }

    #[test]
    fn test_notifications_partition_and_mark_read() {
        let mut state = make_state();
        assert_eq!(state.notifications_of(NotificationKind::Priority).len(), 2);
        assert_eq!(state.notifications_of(NotificationKind::Other).len(), 3);
        assert_eq!(state.nav_badge(Screen::Notifications), Some(2));

        state.mark_all_read();
        assert_eq!(state.nav_badge(Screen::Notifications), None);
    }

    #[test]
    fn test_reply_platform_recorded_on_sent_message() {
        let mut state = make_state();
        state.select_conversation("2");
        assert_eq!(state.reply_platform, Platform::LinkedIn);

        state.reply_platform = Platform::Telegram;
        state.draft = "Moving this to Telegram".to_string();
        assert!(state.send_draft());
        let last = state.open_thread.as_ref().unwrap().messages.last().unwrap();
        assert_eq!(last.platform, Platform::Telegram);
        // The conversation itself stays on its own platform.
        assert_eq!(state.selected().unwrap().platform, Platform::LinkedIn);
    }

    #[test]
    fn test_reply_platform_resets_on_new_selection() {
        let mut state = make_state();
        state.select_conversation("1");
        state.reply_platform = Platform::Email;
        state.select_conversation("4");
        assert_eq!(state.reply_platform, Platform::Telegram);
    }

    #[test]
    fn test_toggle_setting_flips_and_marks_dirty() {
        let mut state = make_state();
        assert!(!state.settings_dirty);
        assert!(!state.settings.switch(SettingToggle::PriorityOnly));

        assert!(state.toggle_setting(SettingToggle::PriorityOnly));
        assert!(state.settings.notifications.priority_only);
        assert!(state.settings_dirty);

        assert!(!state.toggle_setting(SettingToggle::ReadReceipts));
        assert!(!state.settings.privacy.read_receipts);

        assert!(!state.toggle_setting(SettingToggle::PriorityOnly));
        assert!(!state.settings.notifications.priority_only);

        state.save_settings();
        assert!(!state.settings_dirty);
        assert_eq!(state.status_message, "Settings saved.");
    }

    #[test]
    fn test_toggle_account_connection() {
        let mut state = make_state();
        assert_eq!(state.connected_account_count(), 4);
        assert_eq!(state.toggle_account(Platform::Instagram), Some(true));
        assert_eq!(state.connected_account_count(), 5);
        assert_eq!(state.toggle_account(Platform::WhatsApp), Some(false));
        assert_eq!(state.connected_account_count(), 4);
        assert!(state.settings_dirty);
    }

    #[test]
    fn test_analytics_search_and_peak_day() {
        let mut state = make_state();
        assert_eq!(state.visible_top_contacts().len(), 5);
        state.set_query(Screen::Analytics, "linkedin");
        let names: Vec<_> = state
            .visible_top_contacts()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Sarah Chen"]);

        let peak = state.peak_day().unwrap();
        assert_eq!(peak.day, "Fri");
        assert_eq!(state.volume_fraction(peak), 1.0);
        let sunday = state.weekly_volume.last().unwrap();
        assert!(state.volume_fraction(sunday) < 0.25);
    }

    #[test]
    fn test_nav_badges() {
        let state = make_state();
        assert_eq!(state.nav_badge(Screen::Inbox), Some(3));
        assert_eq!(state.nav_badge(Screen::Contacts), Some(4));
        assert_eq!(state.nav_badge(Screen::Filters), None);
        assert_eq!(state.nav_badge(Screen::Analytics), None);
        assert_eq!(state.nav_badge(Screen::Settings), None);
    }

    #[test]
    fn test_quick_search_empty_shows_nothing() {
        let mut state = make_state();
        assert!(state.quick_search_results().is_empty());
        state.quick_search = "design".to_string();
        assert_eq!(state.quick_search_results().len(), 1);
    }

    #[test]
    fn test_platform_totals_cover_all_conversations() {
        let state = make_state();
        let total: usize = state.platform_totals().iter().map(|(_, n)| n).sum();
        assert_eq!(total, state.conversations.len());
    }

    #[test]
    fn test_screen_keys_round_trip_constants() {
        for key in constants::SCREEN_KEYS {
            assert_eq!(Screen::from_key(key).map(|s| s.key()), Some(*key));
        }
        assert_eq!(Screen::from_key(" Inbox "), Some(Screen::Inbox));
        assert_eq!(Screen::from_key("Settings"), Some(Screen::Settings));
        assert_eq!(Screen::from_key("reports"), None);
        assert_eq!(Screen::all().len(), constants::SCREEN_KEYS.len());
    }
}
