// Unibox - ui/panels/filters.rs
//
// Smart filter rules: summary stats, searchable rule list with active
// toggles, and quick templates.

use crate::app::state::{DashboardState, Screen};
use crate::ui::{self, theme};

/// Render the smart filters screen.
pub fn render(ui: &mut egui::Ui, state: &mut DashboardState) {
    ui.heading("Smart Filters");
    ui.label(egui::RichText::new("Automatically organize and prioritize your messages").weak());
    ui.add_space(4.0);
    if ui::search_box(ui, &mut state.filters_view.query, "Search filters...") {
        state.apply_filter(Screen::Filters);
    }

    let stats = state.filter_stats();
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.label("Total filters");
        ui::count_pill(ui, stats.total, theme::ACCENT);
        ui.add_space(12.0);
        ui.label("Active");
        ui::count_pill(ui, stats.active, theme::SUCCESS);
        ui.add_space(12.0);
        ui.label(format!("Messages filtered: {}", stats.messages_matched));
    });
    ui.separator();

    let mut toggled: Option<String> = None;
    egui::ScrollArea::vertical()
        .id_salt("filters_list")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            let visible = state.visible_smart_filters();
            if visible.is_empty() {
                ui.label(egui::RichText::new("No filters found").strong());
                ui.label(
                    "Create your first smart filter to automatically organize your messages.",
                );
            }
            for rule in visible {
                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.strong(&rule.name);
                        let scope_colour = rule
                            .platform()
                            .map(|p| theme::platform_colour(&p))
                            .unwrap_or(ui.visuals().weak_text_color());
                        ui.colored_label(scope_colour, &rule.platform_scope);
                        let status = if rule.active { "Active" } else { "Inactive" };
                        ui.label(egui::RichText::new(status).small());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let mut active = rule.active;
                            if ui.checkbox(&mut active, "").changed() {
                                toggled = Some(rule.id.clone());
                            }
                        });
                    });
                    ui.label(&rule.description);
                    ui.label(egui::RichText::new(&rule.criteria).monospace().small());
                    ui.label(
                        egui::RichText::new(format!(
                            "{} matched \u{00b7} {}",
                            rule.messages_matched, rule.last_triggered
                        ))
                        .small()
                        .weak(),
                    );
                });
            }

            ui.add_space(12.0);
            ui.strong("Quick Templates");
            for template in &state.templates {
                ui.horizontal(|ui| {
                    ui.label(&template.name);
                    ui.label(egui::RichText::new(&template.description).small().weak());
                });
            }
        });

    if let Some(id) = toggled {
        if let Some(active) = state.toggle_smart_filter(&id) {
            state.status_message = format!(
                "Filter {}.",
                if active { "activated" } else { "deactivated" }
            );
        }
    }
}
