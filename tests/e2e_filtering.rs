// Unibox - tests/e2e_filtering.rs
//
// End-to-end tests for search, category counts, dashboard flows, export and
// config loading, driven through the public library API over the built-in
// demo data. Filesystem tests use real temporary directories.

use unibox::app::report;
use unibox::app::state::{DashboardState, Screen};
use unibox::core::export::ExportFormat;
use unibox::core::filter::{self, FieldSelector, Searchable};
use unibox::core::fixtures;
use unibox::core::model::{Contact, Conversation, NotificationKind, Platform};
use unibox::core::settings::SettingToggle;
use unibox::platform::config::{load_config, AppConfig};
use unibox::util::constants;

// =============================================================================
// Helpers
// =============================================================================

fn names(rows: &[&Conversation]) -> Vec<String> {
    rows.iter().map(|c| c.contact_name.clone()).collect()
}

fn default_state() -> DashboardState {
    DashboardState::new(&AppConfig::default())
}

// =============================================================================
// Filter properties
// =============================================================================

/// An empty or whitespace-only query returns every record in order.
#[test]
fn e2e_blank_query_is_identity() {
    let conversations = fixtures::conversations();
    for query in ["", "   ", "\t\n"] {
        let out = filter::filter_records(&conversations, query);
        assert_eq!(out.len(), conversations.len(), "query {query:?}");
        for (kept, original) in out.iter().zip(conversations.iter()) {
            assert_eq!(kept.id, original.id);
        }
    }
}

/// "sa" matches Sarah by name and the Marketing Team by its preview text.
#[test]
fn e2e_inbox_search_matches_name_or_preview() {
    let conversations = fixtures::conversations();
    let out = filter::filter_records(&conversations, "sa");
    assert_eq!(names(&out), vec!["Sarah Johnson", "Marketing Team"]);
}

/// Results are an order-preserving subsequence and filtering is idempotent.
#[test]
fn e2e_filter_is_ordered_subsequence_and_idempotent() {
    let contacts = fixtures::contacts();
    let once = filter::filter_records(&contacts, "ia");
    let ids: Vec<usize> = once
        .iter()
        .map(|c| contacts.iter().position(|x| x.id == c.id).unwrap())
        .collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "order broken: {ids:?}");

    let owned: Vec<Contact> = once.iter().map(|c| (*c).clone()).collect();
    let twice = filter::filter_records(&owned, "ia");
    let once_ids: Vec<&str> = once.iter().map(|c| c.id.as_str()).collect();
    let twice_ids: Vec<&str> = twice.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(twice_ids, once_ids);
}

/// Matching ignores case in both the query and the record text.
#[test]
fn e2e_filter_is_case_insensitive() {
    let rules = fixtures::smart_filters();
    let lower = filter::filter_records(&rules, "meeting");
    let upper = filter::filter_records(&rules, "MEETING");
    let mixed = filter::filter_records(&rules, "  MeEtInG ");
    assert_eq!(lower.len(), 1);
    assert_eq!(lower[0].name, "Meeting Requests");
    assert_eq!(upper.len(), 1);
    assert_eq!(mixed.len(), 1);
}

/// Explicit selectors restrict which fields are searched.
#[test]
fn e2e_explicit_selectors_limit_search() {
    let conversations = fixtures::conversations();
    let by_name: [FieldSelector<Conversation>; 1] = [|c| c.contact_name()];
    assert!(filter::filter(&conversations, "asap", &by_name).is_empty());
    assert_eq!(
        filter::filter(&conversations, "asap", Conversation::SEARCH_FIELDS).len(),
        1
    );
}

/// Notifications search sender and message text.
#[test]
fn e2e_notification_search() {
    let notifications = fixtures::notifications();
    let out = filter::filter_records(&notifications, "urgent");
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].sender, "Alex");
}

// =============================================================================
// Category counts
// =============================================================================

/// Counts sum to the input length and omit absent categories.
#[test]
fn e2e_count_by_category_over_filtered_rows() {
    let contacts = fixtures::contacts();
    let visible = filter::filter_records(&contacts, "ia");
    let counts = filter::count_by_category(visible.iter().copied(), |c| c.channel.clone());
    assert_eq!(counts.values().sum::<usize>(), visible.len());
    assert_eq!(counts.get("Email").copied(), Some(1));
    assert_eq!(counts.get("Messaging App").copied(), Some(3));
}

#[test]
fn e2e_count_by_platform_has_one_entry_per_present_platform() {
    let conversations = fixtures::conversations();
    let counts = filter::count_by_category(&conversations, |c| c.platform);
    assert_eq!(counts.len(), Platform::all().len());
    assert!(counts.values().all(|&n| n == 1));
}

#[test]
fn e2e_count_by_category_empty_input() {
    let none: Vec<Conversation> = Vec::new();
    assert!(filter::count_by_category(&none, |c| c.platform).is_empty());
}

// =============================================================================
// Dashboard flows
// =============================================================================

/// Opening a conversation marks it read and the inbox badge drops.
#[test]
fn e2e_open_conversation_and_reply() {
    let mut state = default_state();
    let before = state.nav_badge(Screen::Inbox).unwrap_or(0);

    state.select_conversation("2");
    assert_eq!(state.selected().map(|c| c.contact_name.as_str()), Some("Alex Chen"));
    assert_eq!(state.nav_badge(Screen::Inbox).unwrap_or(0), before - 1);

    state.draft = "Thursday works for me".to_string();
    assert!(state.send_draft());
    assert!(state.draft.is_empty());
    let thread = state.open_thread.as_ref().unwrap();
    let last = thread.messages.last().unwrap();
    assert!(last.from_user);
    assert_eq!(last.content, "Thursday works for me");
    assert_eq!(
        state.selected().map(|c| c.preview.as_str()),
        Some("Thursday works for me")
    );
}

/// A reply sent through another platform records that platform on the message.
#[test]
fn e2e_reply_via_other_platform() {
    let mut state = default_state();
    state.select_conversation("1");
    assert_eq!(state.reply_platform, Platform::WhatsApp);

    state.reply_platform = Platform::Email;
    state.draft = "Sending the proposal by email".to_string();
    assert!(state.send_draft());
    let thread = state.open_thread.as_ref().unwrap();
    let last = thread.messages.last().unwrap();
    assert_eq!(last.platform, Platform::Email);
    assert_eq!(thread.platform, Platform::WhatsApp);
    // Earlier messages keep their own platform.
    assert!(thread.messages[..thread.messages.len() - 1]
        .iter()
        .all(|m| m.platform == Platform::WhatsApp));
}

/// Blank drafts are not sent.
#[test]
fn e2e_blank_draft_is_ignored() {
    let mut state = default_state();
    state.select_conversation("1");
    let before = state.open_thread.as_ref().unwrap().messages.len();
    state.draft = "   ".to_string();
    assert!(!state.send_draft());
    assert_eq!(state.open_thread.as_ref().unwrap().messages.len(), before);
}

/// The selection survives a query that hides its row.
#[test]
fn e2e_selection_survives_refilter() {
    let mut state = default_state();
    state.select_conversation("4");
    state.set_query(Screen::Inbox, "sarah");
    assert_eq!(state.visible_count(Screen::Inbox), 1);
    assert_eq!(state.selected_conversation.as_deref(), Some("4"));
    state.set_query(Screen::Inbox, "");
    assert_eq!(state.visible_count(Screen::Inbox), 5);
}

#[test]
fn e2e_smart_filter_toggle_updates_stats() {
    let mut state = default_state();
    let before = state.filter_stats();
    assert_eq!(before.total, 4);
    assert_eq!(before.active, 3);
    assert_eq!(before.messages_matched, 100);

    assert_eq!(state.toggle_smart_filter("3"), Some(true));
    assert_eq!(state.filter_stats().active, 4);
    assert_eq!(state.toggle_smart_filter("missing"), None);
}

#[test]
fn e2e_mark_all_read_clears_notification_badge() {
    let mut state = default_state();
    assert_eq!(state.nav_badge(Screen::Notifications), Some(2));
    state.mark_all_read();
    assert_eq!(state.nav_badge(Screen::Notifications), None);
    // Partition is unaffected by the read flag.
    assert_eq!(state.notifications_of(NotificationKind::Priority).len(), 2);
    assert_eq!(state.notifications_of(NotificationKind::Other).len(), 3);
}

#[test]
fn e2e_each_screen_keeps_its_own_query() {
    let mut state = default_state();
    state.set_query(Screen::Contacts, "evans");
    state.set_query(Screen::Notifications, "zzz");
    assert_eq!(state.visible_count(Screen::Contacts), 1);
    assert_eq!(state.visible_count(Screen::Notifications), 0);
    assert_eq!(state.visible_count(Screen::Inbox), 5);
    assert_eq!(state.visible_count(Screen::Filters), 4);
}

#[test]
fn e2e_settings_toggles_and_save() {
    let mut state = default_state();
    state.set_screen(Screen::Settings);
    assert_eq!(state.nav_badge(Screen::Settings), None);

    assert!(state.toggle_setting(SettingToggle::WeeklyReport));
    assert!(!state.toggle_setting(SettingToggle::AnalyticsOptIn));
    assert!(state.settings.notifications.weekly_report);
    assert!(!state.settings.privacy.analytics_opt_in);
    assert!(state.settings_dirty);

    assert_eq!(state.toggle_account(Platform::Instagram), Some(true));
    state.save_settings();
    assert!(!state.settings_dirty);
    // Saved values stay in place.
    assert!(state.settings.switch(SettingToggle::WeeklyReport));
    assert_eq!(state.connected_account_count(), state.accounts.len());
}

#[test]
fn e2e_analytics_and_settings_search() {
    let mut state = default_state();
    assert_eq!(state.visible_count(Screen::Analytics), 5);
    assert_eq!(state.visible_count(Screen::Settings), 5);

    state.set_query(Screen::Analytics, "TELEGRAM");
    let top: Vec<&str> = state
        .visible_top_contacts()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(top, vec!["Emma Brown"]);

    state.set_query(Screen::Settings, "john.doe");
    let accounts: Vec<Platform> = state.visible_accounts().iter().map(|a| a.platform).collect();
    assert_eq!(accounts, vec![Platform::LinkedIn, Platform::Email]);
    assert_eq!(state.visible_count(Screen::Inbox), 5);
}

// =============================================================================
// Export
// =============================================================================

#[test]
fn e2e_export_filtered_inbox_to_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inbox.json");
    let mut state = default_state();
    state.set_query(Screen::Inbox, "sa");

    let n = report::export_visible_to_file(&state, Screen::Inbox, ExportFormat::Json, &path)
        .unwrap();
    assert_eq!(n, 2);

    let text = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed.as_array().map(|a| a.len()), Some(2));
    assert_eq!(parsed[0]["contact_name"], "Sarah Johnson");
    assert_eq!(parsed[0]["platform"], "whatsapp");
}

#[test]
fn e2e_export_empty_result_writes_no_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    let mut state = default_state();
    state.set_query(Screen::Filters, "nothing matches this");

    let n = report::export_visible_to_file(&state, Screen::Filters, ExportFormat::Csv, &path)
        .unwrap();
    assert_eq!(n, 0);
    assert!(std::fs::read_to_string(&path).unwrap().trim().is_empty());
}

// =============================================================================
// Config
// =============================================================================

#[test]
fn e2e_config_drives_initial_state() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(constants::CONFIG_FILE_NAME),
        "[ui]\ntheme = \"light\"\nstart_screen = \"contacts\"\nsidebar_collapsed = true\n",
    )
    .unwrap();

    let (config, warnings) = load_config(dir.path());
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");

    let state = DashboardState::new(&config);
    assert_eq!(state.screen, Screen::Contacts);
    assert!(state.sidebar_collapsed);
    assert!(!state.dark_mode);
}

#[test]
fn e2e_config_can_start_on_settings() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(constants::CONFIG_FILE_NAME),
        "[ui]\nstart_screen = \"Settings\"\n",
    )
    .unwrap();
    let (config, warnings) = load_config(dir.path());
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    assert_eq!(DashboardState::new(&config).screen, Screen::Settings);
}

#[test]
fn e2e_broken_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(constants::CONFIG_FILE_NAME), "[ui\nbroken").unwrap();

    let (config, warnings) = load_config(dir.path());
    assert_eq!(config, AppConfig::default());
    assert_eq!(warnings.len(), 1);
    assert_eq!(DashboardState::new(&config).screen, Screen::Inbox);
}
