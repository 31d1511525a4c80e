// Unibox - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the sidebar, the active screen, and the status bar.

use crate::app::report;
use crate::app::state::{DashboardState, Screen};
use crate::core::export::ExportFormat;
use crate::ui;

/// The Unibox application.
pub struct UniboxApp {
    pub state: DashboardState,
}

impl UniboxApp {
    /// Create a new application instance with the given state.
    pub fn new(state: DashboardState) -> Self {
        Self { state }
    }

    /// Ask for a destination and export the active screen's visible rows.
    fn export_current(&mut self, format: ExportFormat) {
        let screen = self.state.screen;
        let ext = format.extension();
        let Some(dest) = rfd::FileDialog::new()
            .add_filter(ext.to_uppercase(), &[ext])
            .set_file_name(format!("{}.{ext}", screen.key()))
            .save_file()
        else {
            return;
        };

        let result = report::export_visible_to_file(&self.state, screen, format, &dest);
        self.state.status_message = match result {
            Ok(n) => format!("Exported {n} records to {}.", dest.display()),
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                format!("Export failed: {e}")
            }
        };
    }
}

impl eframe::App for UniboxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(if self.state.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
        let font_size = self.state.font_size;
        ctx.style_mut(|style| {
            if let Some(body) = style.text_styles.get_mut(&egui::TextStyle::Body) {
                body.size = font_size;
            }
        });

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    let has_rows = self.state.visible_count(self.state.screen) > 0;
                    ui.add_enabled_ui(has_rows, |ui| {
                        ui.menu_button("Export", |ui| {
                            if ui.button("Export CSV...").clicked() {
                                self.export_current(ExportFormat::Csv);
                                ui.close_menu();
                            }
                            if ui.button("Export JSON...").clicked() {
                                self.export_current(ExportFormat::Json);
                                ui.close_menu();
                            }
                        });
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    let label = if self.state.sidebar_collapsed {
                        "Expand Sidebar"
                    } else {
                        "Collapse Sidebar"
                    };
                    if ui.button(label).clicked() {
                        self.state.toggle_sidebar();
                        ui.close_menu();
                    }
                    if ui.checkbox(&mut self.state.dark_mode, "Dark mode").changed() {
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let screen = self.state.screen;
                    ui.label(format!(
                        "{}/{} shown",
                        self.state.visible_count(screen),
                        self.state.total_count(screen)
                    ));
                });
            });
        });

        let sidebar_width = if self.state.sidebar_collapsed {
            ui::theme::SIDEBAR_COLLAPSED_WIDTH
        } else {
            ui::theme::SIDEBAR_WIDTH
        };
        egui::SidePanel::left("sidebar")
            .exact_width(sidebar_width)
            .resizable(false)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("sidebar_scroll")
                    .show(ui, |ui| {
                        ui::panels::sidebar::render(ui, &mut self.state);
                    });
            });

        // The inbox splits into list + conversation; other screens use the
        // whole central area.
        if self.state.screen == Screen::Inbox {
            egui::SidePanel::left("inbox_list")
                .default_width(ui::theme::INBOX_LIST_WIDTH)
                .resizable(true)
                .show(ctx, |ui| {
                    ui::panels::inbox::render(ui, &mut self.state);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.state.screen {
            Screen::Inbox => ui::panels::conversation::render(ui, &mut self.state),
            Screen::Contacts => ui::panels::contacts::render(ui, &mut self.state),
            Screen::Filters => ui::panels::filters::render(ui, &mut self.state),
            Screen::Analytics => ui::panels::analytics::render(ui, &mut self.state),
            Screen::Notifications => ui::panels::notifications::render(ui, &mut self.state),
            Screen::Settings => ui::panels::settings::render(ui, &mut self.state),
        });
    }
}
