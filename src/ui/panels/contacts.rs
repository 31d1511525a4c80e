// Unibox - ui/panels/contacts.rs
//
// Priority contacts table with search over name and channel.

use crate::app::state::{DashboardState, Screen};
use crate::core::model::{PriorityTier, SyncStatus};
use crate::ui::{self, theme};

/// Render the contacts screen.
pub fn render(ui: &mut egui::Ui, state: &mut DashboardState) {
    ui.heading("Priority Contacts");
    ui.label(egui::RichText::new("Manage and organize your most important contacts").weak());
    ui.add_space(4.0);
    if ui::search_box(ui, &mut state.contacts_view.query, "Search contacts...") {
        state.apply_filter(Screen::Contacts);
    }
    ui.separator();

    let visible = state.visible_contacts();
    if visible.is_empty() {
        ui.label("No contacts match the current search.");
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("contacts_table")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            egui::Grid::new("contacts_grid")
                .num_columns(4)
                .striped(true)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    ui.strong("NAME");
                    ui.strong("PLATFORM");
                    ui.strong("PRIORITY");
                    ui.strong("SYNC STATUS");
                    ui.end_row();

                    for contact in visible {
                        ui.label(&contact.name);
                        ui.label(egui::RichText::new(&contact.channel).weak());
                        let tier = egui::RichText::new(contact.priority.label()).small();
                        match contact.priority {
                            PriorityTier::Top100 => ui.label(tier.color(theme::ACCENT).strong()),
                            PriorityTier::Top200 => ui.label(tier),
                        };
                        match contact.sync_status {
                            SyncStatus::Synced => {
                                ui.colored_label(theme::SUCCESS, "\u{2714} Synced")
                            }
                            SyncStatus::Pending => ui.label("\u{231b} Pending"),
                        };
                        ui.end_row();
                    }
                });
        });
}
