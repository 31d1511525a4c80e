// Unibox - ui/panels/notifications.rs
//
// Notification feed split into Priority and Other sections.

use crate::app::state::{DashboardState, Screen};
use crate::core::model::{Notification, NotificationKind};
use crate::ui::{self, theme};

/// Render the notifications screen.
pub fn render(ui: &mut egui::Ui, state: &mut DashboardState) {
    ui.horizontal(|ui| {
        ui.heading("Notifications");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let any_unread = state.unread_notification_count() > 0;
            if ui
                .add_enabled(any_unread, egui::Button::new("\u{2714} Mark All Read"))
                .clicked()
            {
                state.mark_all_read();
            }
        });
    });
    ui.label(egui::RichText::new("Stay updated with your important messages").weak());
    ui.add_space(4.0);
    if ui::search_box(ui, &mut state.notifications_view.query, "Search notifications...") {
        state.apply_filter(Screen::Notifications);
    }
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("notifications_list")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            let priority = state.notifications_of(NotificationKind::Priority);
            ui.horizontal(|ui| {
                ui.colored_label(theme::PRIORITY, "\u{2605}");
                ui.strong("Priority");
                ui::count_pill(ui, priority.len(), theme::PRIORITY);
            });
            for notification in priority {
                render_item(ui, notification, !state.notifications_read);
            }

            ui.add_space(10.0);
            let other = state.notifications_of(NotificationKind::Other);
            ui.horizontal(|ui| {
                ui.strong("Other");
                ui::count_pill(ui, other.len(), theme::ACCENT);
            });
            for notification in other {
                render_item(ui, notification, false);
            }
        });
}

fn render_item(ui: &mut egui::Ui, notification: &Notification, unread: bool) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&notification.initials).strong());
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.strong(&notification.sender);
                    ui.label(egui::RichText::new(&notification.platform).small().weak());
                    if unread {
                        ui.colored_label(theme::ACCENT, "\u{25cf}");
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new(&notification.timestamp).small().weak());
                    });
                });
                ui.label(&notification.message);
            });
        });
    });
}
