// Unibox - ui/panels/inbox.rs
//
// Unified inbox list: search box, unread badges per platform, and one row
// per visible conversation. Row clicks select the conversation.

use crate::app::state::{DashboardState, Screen};
use crate::core::model::Conversation;
use crate::ui::{self, theme};
use crate::util::constants;

/// Render the inbox list.
pub fn render(ui: &mut egui::Ui, state: &mut DashboardState) {
    ui.heading("Unified Inbox");
    ui.add_space(4.0);
    if ui::search_box(ui, &mut state.inbox.query, "Search conversations...") {
        state.apply_filter(Screen::Inbox);
    }

    ui.add_space(6.0);
    render_badges(ui, state);
    ui.separator();

    let visible = state.visible_conversations();
    if visible.is_empty() {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("No messages found").strong());
            ui.label(egui::RichText::new("Try adjusting your search query").weak());
        });
        return;
    }

    // Collected during rendering and applied afterwards so `state` is not
    // mutably borrowed while `visible` still borrows its conversations.
    let mut clicked: Option<String> = None;
    egui::ScrollArea::vertical()
        .id_salt("inbox_rows")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for conversation in visible {
                let selected = state.selected_conversation.as_deref() == Some(&conversation.id);
                if render_row(ui, conversation, selected, state.dark_mode) {
                    clicked = Some(conversation.id.clone());
                }
                ui.separator();
            }
        });

    if let Some(id) = clicked {
        state.select_conversation(&id);
    }
}

fn render_badges(ui: &mut egui::Ui, state: &DashboardState) {
    let badges = state.inbox_badges();
    ui.horizontal_wrapped(|ui| {
        ui.label("All Messages");
        ui::count_pill(ui, badges.unread_total, theme::ACCENT);
        for (platform, count) in badges.per_platform {
            ui.add_space(8.0);
            ui.colored_label(
                theme::platform_colour(&platform),
                format!("{} {}", platform.glyph(), platform.label()),
            );
            ui::count_pill(ui, count, theme::platform_colour(&platform));
        }
    });
}

/// Render a single conversation row. Returns true when clicked.
fn render_row(
    ui: &mut egui::Ui,
    conversation: &Conversation,
    selected: bool,
    dark_mode: bool,
) -> bool {
    let text_colour = theme::row_text_colour(conversation.unread, dark_mode);
    let response = ui
        .vertical(|ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    theme::platform_colour(&conversation.platform),
                    conversation.platform.glyph(),
                );
                ui.label(
                    egui::RichText::new(&conversation.contact_name)
                        .strong()
                        .color(text_colour),
                );
                if conversation.priority {
                    ui.colored_label(theme::PRIORITY, "\u{2605}");
                }
                if conversation.pinned {
                    ui.colored_label(theme::ACCENT, "\u{1f4cc}");
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if conversation.unread {
                        ui.colored_label(theme::ACCENT, "\u{25cf}");
                    }
                    ui.label(egui::RichText::new(&conversation.timestamp).small().weak());
                });
            });
            ui.label(egui::RichText::new(truncate(&conversation.preview)).color(text_colour));
        })
        .response;

    let response = response.interact(egui::Sense::click());
    if selected {
        // Left accent bar on the selected row.
        let rect = response.rect;
        ui.painter().line_segment(
            [
                rect.left_top() - egui::vec2(4.0, 0.0),
                rect.left_bottom() - egui::vec2(4.0, 0.0),
            ],
            egui::Stroke::new(3.0, theme::ACCENT),
        );
    }
    response.clicked()
}

/// Cut a preview to `PREVIEW_MAX_CHARS` characters with an ellipsis.
fn truncate(text: &str) -> String {
    if text.chars().count() <= constants::PREVIEW_MAX_CHARS {
        return text.to_string();
    }
    let mut out: String = text.chars().take(constants::PREVIEW_MAX_CHARS).collect();
    out.push('\u{2026}');
    out
}
