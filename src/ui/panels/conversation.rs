// Unibox - ui/panels/conversation.rs
//
// Conversation detail: contact header, message history, reply box.
// Shows a placeholder when no conversation is selected.

use crate::app::state::DashboardState;
use crate::core::model::Platform;
use crate::ui::theme;
use crate::util::constants;

/// Render the conversation panel.
pub fn render(ui: &mut egui::Ui, state: &mut DashboardState) {
    let Some(thread) = state.open_thread.as_ref() else {
        ui.centered_and_justified(|ui| {
            ui.label(
                "Select a conversation\n\nChoose a conversation from the inbox to start \
                 messaging across all your platforms.",
            );
        });
        return;
    };

    let mut close = false;
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(&thread.initials).strong().size(18.0));
        ui.vertical(|ui| {
            ui.strong(&thread.contact_name);
            ui.horizontal(|ui| {
                ui.colored_label(theme::presence_colour(&thread.presence), "\u{25cf}");
                ui.label(egui::RichText::new(thread.presence.label()).small());
                ui.colored_label(
                    theme::platform_colour(&thread.platform),
                    format!("{} {}", thread.platform.glyph(), thread.platform.label()),
                );
            });
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("\u{2715}").on_hover_text("Close").clicked() {
                close = true;
            }
        });
    });
    ui.separator();

    // Reply box pinned to the bottom, history fills the rest.
    let mut send = false;
    egui::TopBottomPanel::bottom("conversation_reply")
        .show_inside(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Reply via:").small());
                for platform in Platform::all() {
                    let selected = state.reply_platform == *platform;
                    let text = egui::RichText::new(platform.glyph())
                        .color(theme::platform_colour(platform));
                    if ui
                        .selectable_label(selected, text)
                        .on_hover_text(platform.label())
                        .clicked()
                    {
                        state.reply_platform = *platform;
                    }
                }
            });
            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut state.draft)
                        .hint_text("Type a message...")
                        .char_limit(constants::MAX_DRAFT_CHARS)
                        .desired_width(ui.available_width() - 60.0),
                );
                let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                let send_button = egui::Button::new(
                    egui::RichText::new("Send").color(egui::Color32::WHITE),
                )
                .fill(theme::platform_colour(&state.reply_platform));
                if ui.add(send_button).clicked() || enter {
                    send = true;
                }
            });
        });

    // Re-borrow after the reply box took `state.draft` mutably.
    if let Some(thread) = state.open_thread.as_ref() {
        egui::ScrollArea::vertical()
            .id_salt("conversation_messages")
            .auto_shrink([false; 2])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for message in &thread.messages {
                    let layout = if message.from_user {
                        egui::Layout::right_to_left(egui::Align::TOP)
                    } else {
                        egui::Layout::left_to_right(egui::Align::TOP)
                    };
                    ui.with_layout(layout, |ui| {
                        ui.group(|ui| {
                            ui.set_max_width(420.0);
                            ui.vertical(|ui| {
                                ui.label(&message.content);
                                let meta = if message.from_user {
                                    format!("{} \u{00b7} {}", message.timestamp, message.status.label())
                                } else {
                                    message.timestamp.clone()
                                };
                                ui.label(egui::RichText::new(meta).small().weak());
                            });
                        });
                    });
                    ui.add_space(4.0);
                }
            });
    }

    if send && state.send_draft() {
        state.status_message = "Message added to conversation.".to_string();
    }
    if close {
        state.clear_selection();
    }
}
