// Unibox - app/report.rs
//
// Plain-text and serialised renderings of a screen's visible rows, used by
// the headless `--list` mode.

use crate::app::state::{DashboardState, Screen};
use crate::core::export::{self, ExportFormat};
use crate::core::filter;
use crate::core::model::NotificationKind;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Aligned text lines for the visible rows of `screen`, followed by a
/// category summary.
pub fn table_lines(state: &DashboardState, screen: Screen) -> Vec<String> {
    let mut lines = Vec::new();

    match screen {
        Screen::Inbox => {
            let rows = state.visible_conversations();
            for c in &rows {
                let flags = format!(
                    "{}{}{}",
                    if c.unread { '*' } else { ' ' },
                    if c.priority { '!' } else { ' ' },
                    if c.pinned { '^' } else { ' ' },
                );
                lines.push(format!(
                    "{:<10} {:<16} {} {:>8}  {}",
                    c.platform.label(),
                    c.contact_name,
                    flags,
                    c.timestamp,
                    c.preview
                ));
            }
            let badges = state.inbox_badges();
            let per_platform: Vec<String> = badges
                .per_platform
                .iter()
                .map(|(p, n)| format!("{}={n}", p.key()))
                .collect();
            lines.push(String::new());
            lines.push(format!(
                "{} shown, {} unread ({})",
                rows.len(),
                badges.unread_total,
                per_platform.join(", ")
            ));
        }
        Screen::Contacts => {
            let rows = state.visible_contacts();
            for c in &rows {
                lines.push(format!(
                    "{:<16} {:<14} {:<8} {}",
                    c.name,
                    c.channel,
                    c.priority.label(),
                    c.sync_status.label()
                ));
            }
            let counts = filter::count_by_category(rows.iter().copied(), |c| c.channel.clone());
            let mut summary: Vec<String> =
                counts.iter().map(|(k, n)| format!("{k}={n}")).collect();
            summary.sort();
            lines.push(String::new());
            lines.push(format!("{} shown ({})", rows.len(), summary.join(", ")));
        }
        Screen::Filters => {
            let rows = state.visible_smart_filters();
            for f in &rows {
                lines.push(format!(
                    "{:<18} {:<9} {:<8} {:>4} matched  {}",
                    f.name,
                    f.platform_scope,
                    if f.active { "active" } else { "inactive" },
                    f.messages_matched,
                    f.description
                ));
            }
            let stats = state.filter_stats();
            lines.push(String::new());
            lines.push(format!(
                "{} shown; {} of {} rules active, {} messages matched",
                rows.len(),
                stats.active,
                stats.total,
                stats.messages_matched
            ));
        }
        Screen::Analytics => {
            let rows = state.visible_top_contacts();
            for c in &rows {
                lines.push(format!(
                    "#{:<3} {:<14} {:<10} {:>4} messages",
                    c.rank,
                    c.name,
                    c.platform.label(),
                    c.messages
                ));
            }
            let overview = &state.analytics;
            lines.push(String::new());
            lines.push(format!(
                "{} shown; {} messages ({:+.1}%), {} active contacts ({:+.1}%), avg response {}",
                rows.len(),
                overview.total_messages,
                overview.message_growth,
                overview.active_contacts,
                overview.contact_growth,
                overview.avg_response_time
            ));
        }
        Screen::Settings => {
            let rows = state.visible_accounts();
            for a in &rows {
                lines.push(format!(
                    "{:<10} {:<22} {}",
                    a.platform.label(),
                    a.handle,
                    if a.connected { "connected" } else { "disconnected" }
                ));
            }
            let counts = filter::count_by_category(rows.iter().copied(), |a| a.connected);
            lines.push(String::new());
            lines.push(format!(
                "{} shown ({} connected, {} disconnected)",
                rows.len(),
                counts.get(&true).copied().unwrap_or(0),
                counts.get(&false).copied().unwrap_or(0)
            ));
        }
        Screen::Notifications => {
            let rows = state.notifications_view.visible(&state.notifications);
            for n in &rows {
                lines.push(format!(
                    "{:<8} {:<14} {:<10} {:>9}  {}",
                    match n.kind {
                        NotificationKind::Priority => "priority",
                        NotificationKind::Other => "other",
                    },
                    n.sender,
                    n.platform,
                    n.timestamp,
                    n.message
                ));
            }
            let counts = filter::count_by_category(rows.iter().copied(), |n| n.kind);
            lines.push(String::new());
            lines.push(format!(
                "{} shown ({} priority, {} other)",
                rows.len(),
                counts.get(&NotificationKind::Priority).copied().unwrap_or(0),
                counts.get(&NotificationKind::Other).copied().unwrap_or(0)
            ));
        }
    }

    if state.visible_count(screen) == 0 {
        lines.insert(0, "No matches.".to_string());
    }
    lines
}

/// Serialise the visible rows of `screen` into `writer`.
pub fn export_visible<W: Write>(
    state: &DashboardState,
    screen: Screen,
    format: ExportFormat,
    writer: W,
    path: &Path,
) -> Result<usize, ExportError> {
    match screen {
        Screen::Inbox => export::export(format, &state.visible_conversations(), writer, path),
        Screen::Contacts => export::export(format, &state.visible_contacts(), writer, path),
        Screen::Filters => export::export(format, &state.visible_smart_filters(), writer, path),
        Screen::Analytics => export::export(format, &state.visible_top_contacts(), writer, path),
        Screen::Settings => export::export(format, &state.visible_accounts(), writer, path),
        Screen::Notifications => export::export(
            format,
            &state.notifications_view.visible(&state.notifications),
            writer,
            path,
        ),
    }
}

/// Create `path` and export the visible rows of `screen` into it.
pub fn export_visible_to_file(
    state: &DashboardState,
    screen: Screen,
    format: ExportFormat,
    path: &Path,
) -> Result<usize, ExportError> {
    let file = std::fs::File::create(path).map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = std::io::BufWriter::new(file);
    let count = export_visible(state, screen, format, &mut writer, path)?;
    writer.flush().map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(
        path = %path.display(),
        screen = screen.key(),
        count,
        format = format.extension(),
        "Export written"
    );
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::config::AppConfig;

    #[test]
    fn test_inbox_table_has_row_per_match_and_summary() {
        let mut state = DashboardState::new(&AppConfig::default());
        state.set_query(Screen::Inbox, "alex");
        let lines = table_lines(&state, Screen::Inbox);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Alex Chen"));
        assert_eq!(lines[2], "1 shown, 1 unread (linkedin=1)");
    }

    #[test]
    fn test_empty_result_says_no_matches() {
        let mut state = DashboardState::new(&AppConfig::default());
        state.set_query(Screen::Contacts, "zzz");
        let lines = table_lines(&state, Screen::Contacts);
        assert_eq!(lines[0], "No matches.");
        assert_eq!(lines.last().unwrap(), "0 shown ()");
    }

    #[test]
    fn test_contacts_summary_counts_channels() {
        let state = DashboardState::new(&AppConfig::default());
        let lines = table_lines(&state, Screen::Contacts);
        assert_eq!(
            lines.last().unwrap(),
            "10 shown (Email=5, Messaging App=5)"
        );
    }

    #[test]
    fn test_analytics_table_lists_top_contacts() {
        let state = DashboardState::new(&AppConfig::default());
        let lines = table_lines(&state, Screen::Analytics);
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("#1"));
        assert!(lines[0].contains("Sarah Chen"));
        assert_eq!(
            lines.last().unwrap(),
            "5 shown; 2847 messages (+12.5%), 156 active contacts (-2.3%), avg response 2m 30s"
        );
    }

    #[test]
    fn test_settings_table_counts_connections() {
        let mut state = DashboardState::new(&AppConfig::default());
        assert_eq!(
            table_lines(&state, Screen::Settings).last().unwrap(),
            "5 shown (4 connected, 1 disconnected)"
        );

        state.set_query(Screen::Settings, "johndoe");
        let lines = table_lines(&state, Screen::Settings);
        assert_eq!(lines[0].split_whitespace().next(), Some("Instagram"));
        assert_eq!(lines.last().unwrap(), "2 shown (1 connected, 1 disconnected)");
    }

    #[test]
    fn test_no_matches_marker_follows_visible_count() {
        let mut state = DashboardState::new(&AppConfig::default());
        state.set_query(Screen::Analytics, "nobody");
        let lines = table_lines(&state, Screen::Analytics);
        assert_eq!(lines[0], "No matches.");

        state.set_query(Screen::Analytics, "emma");
        let lines = table_lines(&state, Screen::Analytics);
        assert_ne!(lines[0], "No matches.");
        assert!(lines.iter().all(|l| l != "No matches."));
    }

    #[test]
    fn test_export_visible_json() {
        let mut state = DashboardState::new(&AppConfig::default());
        state.set_query(Screen::Filters, "sales");
        let mut buf = Vec::new();
        let n = export_visible(
            &state,
            Screen::Filters,
            ExportFormat::Json,
            &mut buf,
            Path::new("<memory>"),
        )
        .unwrap();
        assert_eq!(n, 1);
        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed[0]["name"], "Sales Inquiries");
    }

    #[test]
    fn test_export_visible_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.csv");
        let state = DashboardState::new(&AppConfig::default());
        let n = export_visible_to_file(&state, Screen::Contacts, ExportFormat::Csv, &path).unwrap();
        assert_eq!(n, 10);
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 11);
        assert!(text.starts_with("id,name,channel,priority,sync_status"));
    }

    #[test]
    fn test_export_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        let state = DashboardState::new(&AppConfig::default());
        let result = export_visible_to_file(&state, Screen::Inbox, ExportFormat::Csv, &path);
        assert!(matches!(result, Err(ExportError::Io { .. })));
    }
}
