// Unibox - ui/panels/analytics.rs
//
// Message insights: overview figures, platform split, weekly volume and the
// most active contacts.

use crate::app::state::{DashboardState, Screen};
use crate::ui::{self, theme};

fn growth_label(ui: &mut egui::Ui, growth: f32) {
    let (arrow, colour) = if growth >= 0.0 {
        ("\u{2197}", theme::SUCCESS)
    } else {
        ("\u{2198}", theme::PRIORITY)
    };
    ui.colored_label(colour, format!("{arrow} {:.1}%", growth.abs()));
}

/// Render the analytics screen.
pub fn render(ui: &mut egui::Ui, state: &mut DashboardState) {
    ui.heading("Analytics");
    ui.label(egui::RichText::new("Message insights across all your platforms").weak());
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("analytics_scroll")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            // -----------------------------------------------------------------
            // Overview
            // -----------------------------------------------------------------
            ui.strong("Overview");
            let overview = &state.analytics;
            egui::Grid::new("analytics_overview")
                .num_columns(3)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Total messages:");
                    ui.label(overview.total_messages.to_string());
                    growth_label(ui, overview.message_growth);
                    ui.end_row();

                    ui.label("Active contacts:");
                    ui.label(overview.active_contacts.to_string());
                    growth_label(ui, overview.contact_growth);
                    ui.end_row();

                    ui.label("Avg response time:");
                    ui.label(&overview.avg_response_time);
                    ui.colored_label(
                        theme::SUCCESS,
                        format!("{:.1}% faster", overview.response_improvement),
                    );
                    ui.end_row();
                });

            ui.add_space(8.0);
            ui.separator();

            // -----------------------------------------------------------------
            // Platform distribution
            // -----------------------------------------------------------------
            ui.strong("Platform distribution");
            egui::Grid::new("analytics_platforms")
                .num_columns(3)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    for share in &state.platform_shares {
                        ui.colored_label(
                            theme::platform_colour(&share.platform),
                            format!("{} {}", share.platform.glyph(), share.platform.label()),
                        );
                        ui.add(
                            egui::ProgressBar::new(share.percentage / 100.0)
                                .desired_width(200.0)
                                .fill(theme::platform_colour(&share.platform)),
                        );
                        ui.label(format!("{} ({:.1}%)", share.messages, share.percentage));
                        ui.end_row();
                    }
                });

            ui.add_space(8.0);
            ui.separator();

            // -----------------------------------------------------------------
            // Weekly volume
            // -----------------------------------------------------------------
            ui.strong("Weekly activity");
            egui::Grid::new("analytics_weekly")
                .num_columns(3)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    for day in &state.weekly_volume {
                        ui.label(&day.day);
                        ui.add(
                            egui::ProgressBar::new(state.volume_fraction(day))
                                .desired_width(200.0)
                                .fill(theme::ACCENT),
                        );
                        ui.label(day.messages.to_string());
                        ui.end_row();
                    }
                });

            ui.add_space(8.0);
            ui.separator();

            // -----------------------------------------------------------------
            // Top contacts
            // -----------------------------------------------------------------
            ui.horizontal(|ui| {
                ui.strong("Top contacts");
                if ui::search_box(ui, &mut state.analytics_view.query, "Search contacts...") {
                    state.apply_filter(Screen::Analytics);
                }
            });

            let visible = state.visible_top_contacts();
            if visible.is_empty() {
                ui.label("No contacts match the current search.");
                return;
            }
            egui::Grid::new("analytics_top_contacts")
                .num_columns(4)
                .striped(true)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    for contact in visible {
                        ui.label(egui::RichText::new(format!("#{}", contact.rank)).weak());
                        ui.label(&contact.name);
                        ui.colored_label(
                            theme::platform_colour(&contact.platform),
                            contact.platform.label(),
                        );
                        ui.label(format!("{} messages", contact.messages));
                        ui.end_row();
                    }
                });
        });
}
