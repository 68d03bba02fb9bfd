//! UI module for the Teaching Clock
//!
//! The entry screen and the bottom panel with hand controls, numeric fields,
//! answer buttons and the attempts counter, using egui.

use nannou_egui::egui;
use tutor_core::{ClockView, Direction, FieldRow, Hand, Mode};

/// Result of panel interactions for one frame
#[derive(Default)]
pub struct PanelResult {
    /// Mode chosen on the entry screen
    pub select_mode: Option<Mode>,
    pub back: bool,
    pub check_answer: bool,
    /// Control button currently held down, if any
    pub held_control: Option<(Hand, Direction)>,
    /// Fields whose text changed this frame
    pub edits: Vec<(Hand, String)>,
}

/// Draw the entry screen with one button per mode
pub fn draw_entry_screen(ctx: &egui::Context) -> PanelResult {
    let mut result = PanelResult::default();

    egui::Window::new("Teaching Clock")
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Teaching Clock");
                ui.add_space(12.0);
                for mode in Mode::ACTIVE {
                    let button = egui::Button::new(egui::RichText::new(mode.title()).size(18.0))
                        .min_size(egui::vec2(220.0, 40.0));
                    if ui.add(button).clicked() {
                        result.select_mode = Some(mode);
                    }
                    ui.add_space(6.0);
                }
            });
        });

    result
}

/// Draw the bottom panel for an active mode
pub fn draw_clock_panel(ctx: &egui::Context, view: &ClockView) -> PanelResult {
    let mut result = PanelResult::default();

    egui::TopBottomPanel::bottom("tutor_panel")
        .resizable(false)
        .min_height(120.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);

            if !view.controls.is_empty() {
                ui.horizontal(|ui| {
                    for &hand in view.controls {
                        ui.group(|ui| {
                            ui.label(hand.label());
                            for direction in [Direction::Clockwise, Direction::CounterClockwise] {
                                let label = match direction {
                                    Direction::Clockwise => "↻",
                                    Direction::CounterClockwise => "↺",
                                };
                                let response = ui
                                    .add(egui::Button::new(label).min_size(egui::vec2(36.0, 28.0)))
                                    .on_hover_text("Hold to keep turning");
                                // Leaving the button ends the hold
                                if response.is_pointer_button_down_on() && response.hovered() {
                                    result.held_control = Some((hand, direction));
                                }
                            }
                        });
                    }
                });
            }

            if let Some(readout) = &view.readout {
                ui.label(egui::RichText::new(readout).monospace().size(22.0));
            }

            if let Some(fields) = view.fields {
                draw_fields(ui, fields, &mut result);
            }

            ui.horizontal(|ui| {
                if let Some(attempts) = view.attempts {
                    ui.label(format!("Attempts left: {}", attempts));
                }
                if view.show_confirm && ui.button("Check").clicked() {
                    result.check_answer = true;
                }
                if ui.button("Back").clicked() {
                    result.back = true;
                }
            });
        });

    result
}

fn draw_fields(ui: &mut egui::Ui, fields: FieldRow, result: &mut PanelResult) {
    ui.horizontal(|ui| {
        field(ui, Hand::Hour, fields.hour, fields.editable, result);
        ui.label(":");
        field(ui, Hand::Minute, fields.minute, fields.editable, result);
        if let Some(second) = fields.second {
            ui.label(":");
            field(ui, Hand::Second, second, fields.editable, result);
        }
    });
}

fn field(ui: &mut egui::Ui, hand: Hand, value: u32, editable: bool, result: &mut PanelResult) {
    let mut text = value.to_string();
    let response = ui.add_enabled(
        editable,
        egui::TextEdit::singleline(&mut text)
            .desired_width(40.0)
            .id_source(hand.label()),
    );
    if response.changed() {
        result.edits.push((hand, text));
    }
}
