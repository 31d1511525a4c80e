// Unibox - ui/panels/settings.rs
//
// Settings screen: profile, connected accounts, notification and privacy
// switches, appearance, display preferences.
//
// Sections are laid out top to bottom with a heading and separator each.
// Changes apply to in-memory state immediately; "Save Changes" only clears
// the unsaved marker.

use crate::app::state::{DashboardState, Screen};
use crate::core::model::Platform;
use crate::core::settings::{self, option_label, SettingOptions, SettingToggle};
use crate::ui::{self, theme};
use crate::util::constants::{DEFAULT_FONT_SIZE, MAX_FONT_SIZE, MIN_FONT_SIZE};

/// Labelled drop-down over `options`. Returns true when a new value was picked.
fn option_combo(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    options: SettingOptions,
    value: &mut String,
) -> bool {
    let mut changed = false;
    ui.label(label);
    egui::ComboBox::from_id_salt(id)
        .selected_text(option_label(options, value).to_string())
        .width(220.0)
        .show_ui(ui, |ui| {
            for (v, l) in options {
                if ui.selectable_label(value.as_str() == *v, *l).clicked() {
                    *value = v.to_string();
                    changed = true;
                }
            }
        });
    ui.end_row();
    changed
}

fn section_break(ui: &mut egui::Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(6.0);
}

/// Render the settings screen.
pub fn render(ui: &mut egui::Ui, state: &mut DashboardState) {
    ui.horizontal(|ui| {
        ui.heading("Settings");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let save = ui.add_enabled(state.settings_dirty, egui::Button::new("Save Changes"));
            if save.clicked() {
                state.save_settings();
            }
            if state.settings_dirty {
                ui.colored_label(theme::PRIORITY, "Unsaved changes");
            }
        });
    });
    ui.label(egui::RichText::new("Manage your account and preferences").weak());
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("settings_scroll")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            let mut dirty = false;

            // =========================================================
            // Profile
            // =========================================================
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(state.settings.profile.initials())
                        .strong()
                        .size(20.0)
                        .color(theme::ACCENT),
                );
                ui.heading("Profile");
            });
            ui.add_space(4.0);
            let profile = &mut state.settings.profile;
            egui::Grid::new("settings_profile")
                .num_columns(2)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Full name:");
                    dirty |= ui.text_edit_singleline(&mut profile.name).changed();
                    ui.end_row();

                    ui.label("Email:");
                    dirty |= ui.text_edit_singleline(&mut profile.email).changed();
                    ui.end_row();

                    ui.label("Phone:");
                    dirty |= ui.text_edit_singleline(&mut profile.phone).changed();
                    ui.end_row();

                    dirty |= option_combo(
                        ui,
                        "settings_timezone",
                        "Timezone:",
                        settings::TIMEZONES,
                        &mut profile.timezone,
                    );
                });

            section_break(ui);

            // =========================================================
            // Connected accounts
            // =========================================================
            ui.horizontal(|ui| {
                ui.heading("Connected Accounts");
                ui::count_pill(ui, state.connected_account_count(), theme::SUCCESS);
            });
            if ui::search_box(ui, &mut state.settings_view.query, "Search accounts...") {
                state.apply_filter(Screen::Settings);
            }
            ui.add_space(4.0);

            let mut flip: Option<Platform> = None;
            let visible = state.visible_accounts();
            if visible.is_empty() {
                ui.label("No accounts match the current search.");
            }
            egui::Grid::new("settings_accounts")
                .num_columns(4)
                .striped(true)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    for account in visible {
                        ui.colored_label(
                            theme::platform_colour(&account.platform),
                            format!("{} {}", account.platform.glyph(), account.platform.label()),
                        );
                        ui.label(egui::RichText::new(&account.handle).weak());
                        if account.connected {
                            ui.colored_label(theme::SUCCESS, "\u{2714} Connected");
                        } else {
                            ui.label("Not connected");
                        }
                        let action = if account.connected { "Disconnect" } else { "Connect" };
                        if ui.small_button(action).clicked() {
                            flip = Some(account.platform);
                        }
                        ui.end_row();
                    }
                });
            if let Some(platform) = flip {
                state.toggle_account(platform);
            }

            section_break(ui);

            // =========================================================
            // Notification and privacy switches
            // =========================================================
            let mut groups: Vec<&'static str> = Vec::new();
            for toggle in SettingToggle::all() {
                if !groups.contains(&toggle.group()) {
                    groups.push(toggle.group());
                }
            }
            for group in groups {
                ui.strong(group);
                for toggle in SettingToggle::all().iter().filter(|t| t.group() == group) {
                    let mut on = state.settings.switch(*toggle);
                    let response = ui
                        .checkbox(&mut on, toggle.label())
                        .on_hover_text(toggle.description());
                    if response.changed() {
                        state.toggle_setting(*toggle);
                    }
                }
                ui.add_space(6.0);
            }

            section_break(ui);

            // =========================================================
            // Appearance
            // =========================================================
            ui.heading("Appearance");
            ui.add_space(4.0);
            ui.checkbox(&mut state.dark_mode, "Dark mode");
            ui.horizontal(|ui| {
                ui.label("Font size:");
                let mut v = state.font_size as f64;
                if ui
                    .add(
                        egui::Slider::new(&mut v, (MIN_FONT_SIZE as f64)..=(MAX_FONT_SIZE as f64))
                            .step_by(0.5)
                            .suffix(" pt"),
                    )
                    .changed()
                {
                    state.font_size = (v as f32).clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
                }
                if (state.font_size - DEFAULT_FONT_SIZE).abs() > 0.1
                    && ui.small_button("Reset").clicked()
                {
                    state.font_size = DEFAULT_FONT_SIZE;
                }
            });

            section_break(ui);

            // =========================================================
            // Preferences
            // =========================================================
            ui.heading("Preferences");
            ui.add_space(4.0);
            let prefs = &mut state.settings.preferences;
            egui::Grid::new("settings_preferences")
                .num_columns(2)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    dirty |= option_combo(
                        ui,
                        "settings_language",
                        "Language:",
                        settings::LANGUAGES,
                        &mut prefs.language,
                    );
                    dirty |= option_combo(
                        ui,
                        "settings_date_format",
                        "Date format:",
                        settings::DATE_FORMATS,
                        &mut prefs.date_format,
                    );
                    dirty |= option_combo(
                        ui,
                        "settings_time_format",
                        "Time format:",
                        settings::TIME_FORMATS,
                        &mut prefs.time_format,
                    );
                    dirty |= option_combo(
                        ui,
                        "settings_auto_archive",
                        "Auto-archive:",
                        settings::AUTO_ARCHIVE,
                        &mut prefs.auto_archive,
                    );
                    dirty |= option_combo(
                        ui,
                        "settings_default_view",
                        "Default view:",
                        settings::DEFAULT_VIEWS,
                        &mut prefs.default_view,
                    );
                });

            if dirty {
                state.settings_dirty = true;
            }
        });
}
