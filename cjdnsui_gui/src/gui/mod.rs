//! The widgets making up the front-end, and shared behaviour for them.

pub mod settings_panel;
pub mod status_panel;
pub mod view;

pub use settings_panel::SettingsPanel;
pub use status_panel::StatusPanel;


/// Use an `egui_modal::Modal` to display an error, sticking with consistent dialog styling.
pub fn modal_error(modal: &egui_modal::Modal, error: &anyhow::Error) {
    modal.dialog()
        .with_title(error.to_string())
        .with_body(error_details(error))
        .with_icon(egui_modal::Icon::Error)
        .open();
}

/// One "because: cause" line per cause of error.
fn error_details(error: &anyhow::Error) -> String {
    let mut details = String::new();
    error.chain().skip(1).for_each(|cause| details.push_str(&format!("because: {cause}\n")));
    details.trim().to_string()
}

/// A label followed by a small button copying text to the clipboard.
fn copyable_label(ui: &mut egui::Ui, text: &str) {
    ui.horizontal(|ui| {
        ui.label(text);
        if ui.small_button("Copy").on_hover_text("Copy to clipboard").clicked() {
            ui.output_mut(|output| output.copied_text = text.to_string());
        }
    });
}

/// Where the settings panel's save button is drawn in a 500x400 window.
#[cfg(test)]
const SAVE_BUTTON: egui::Pos2 = egui::pos2(30.0, 370.0);

/// Frames of input for a 500x400 window: move the pointer to pos, press, then release.
#[cfg(test)]
fn click_inputs(pos: egui::Pos2) -> Vec<egui::RawInput> {
    let screen_rect = Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(500.0, 400.0)));
    let button = |pressed| egui::Event::PointerButton {
        pos,
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::NONE
    };
    [vec![egui::Event::PointerMoved(pos)], vec![button(true)], vec![button(false)]]
        .into_iter()
        .map(|events| egui::RawInput { screen_rect, events, ..egui::RawInput::default() })
        .collect()
}
