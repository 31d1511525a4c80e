// Unibox - ui/panels/sidebar.rs
//
// Navigation sidebar. Expanded: quick search, navigation with badges,
// priority contacts, per-platform totals. Collapsed: navigation glyphs only.

use crate::app::state::{DashboardState, Screen};
use crate::ui::{self, theme};

fn screen_glyph(screen: Screen) -> &'static str {
    match screen {
        Screen::Inbox => "\u{1f4ac}",
        Screen::Contacts => "\u{2b50}",
        Screen::Filters => "\u{1f50d}",
        Screen::Analytics => "\u{1f4ca}",
        Screen::Notifications => "\u{1f514}",
        Screen::Settings => "\u{2699}",
    }
}

/// Render the sidebar contents.
pub fn render(ui: &mut egui::Ui, state: &mut DashboardState) {
    ui.horizontal(|ui| {
        if !state.sidebar_collapsed {
            ui.heading(crate::util::constants::APP_NAME);
        }
        let toggle = if state.sidebar_collapsed { "\u{2630}" } else { "\u{2715}" };
        if ui.small_button(toggle).clicked() {
            state.toggle_sidebar();
        }
    });
    ui.separator();

    if state.sidebar_collapsed {
        for screen in Screen::all() {
            let selected = state.screen == *screen;
            if ui
                .selectable_label(selected, screen_glyph(*screen))
                .on_hover_text(screen.label())
                .clicked()
            {
                state.set_screen(*screen);
            }
        }
        return;
    }

    ui::search_box(ui, &mut state.quick_search, "Quick search...");
    render_quick_results(ui, state);

    ui.add_space(6.0);
    for screen in Screen::all() {
        let selected = state.screen == *screen;
        let badge = state.nav_badge(*screen);
        let clicked = ui
            .horizontal(|ui| {
                let response = ui.selectable_label(
                    selected,
                    format!("{}  {}", screen_glyph(*screen), screen.label()),
                );
                if let Some(n) = badge {
                    ui::count_pill(ui, n, theme::ACCENT);
                }
                response.clicked()
            })
            .inner;
        ui.label(egui::RichText::new(screen.description()).small().weak());
        if clicked {
            state.set_screen(*screen);
        }
    }

    ui.add_space(8.0);
    ui.separator();
    ui.strong("Priority Contacts");
    for contact in &state.priority_contacts {
        ui.horizontal(|ui| {
            ui.colored_label(theme::presence_colour(&contact.presence), "\u{25cf}");
            ui.label(&contact.name);
            ui.label(egui::RichText::new(contact.presence.label()).small().weak());
        });
    }

    ui.add_space(8.0);
    ui.separator();
    ui.strong("Platforms");
    egui::Grid::new("sidebar_platforms")
        .num_columns(2)
        .spacing([16.0, 2.0])
        .show(ui, |ui| {
            for (platform, count) in state.platform_totals() {
                ui.colored_label(
                    theme::platform_colour(&platform),
                    format!("{} {}", platform.glyph(), platform.label()),
                );
                ui.label(count.to_string());
                ui.end_row();
            }
        });
}

/// Matching conversations under the quick search box. Clicking one opens it
/// in the inbox.
fn render_quick_results(ui: &mut egui::Ui, state: &mut DashboardState) {
    let mut open: Option<String> = None;
    let results = state.quick_search_results();
    if results.is_empty() {
        if !state.quick_search.trim().is_empty() {
            ui.label(egui::RichText::new("No matches").small().weak());
        }
        return;
    }
    for conversation in results {
        let text = format!(
            "{} {}",
            conversation.platform.glyph(),
            conversation.contact_name
        );
        if ui.link(text).clicked() {
            open = Some(conversation.id.clone());
        }
    }
    if let Some(id) = open {
        state.set_screen(Screen::Inbox);
        state.select_conversation(&id);
        state.quick_search.clear();
    }
}
