// Unibox - ui/mod.rs
//
// UI layer: presentation only.
// Dependencies: app (state), core (read-only models), egui.
// Must NOT depend on: platform, direct I/O.

pub mod panels;
pub mod theme;

/// Shared search box. Returns true when the text changed.
pub fn search_box(ui: &mut egui::Ui, query: &mut String, hint: &str) -> bool {
    ui.add(
        egui::TextEdit::singleline(query)
            .hint_text(format!("\u{1f50d} {hint}"))
            .desired_width(theme::SEARCH_WIDTH),
    )
    .changed()
}

/// Rounded count pill drawn after a label.
pub fn count_pill(ui: &mut egui::Ui, count: usize, colour: egui::Color32) {
    ui.label(
        egui::RichText::new(format!(" {count} "))
            .small()
            .strong()
            .color(egui::Color32::WHITE)
            .background_color(colour),
    );
}
