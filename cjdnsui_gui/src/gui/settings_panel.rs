//! Editor for the daemon's `Settings`.

use cjdnsui::{settings, Settings};
use tracing::{debug, trace};

/// Shortcut which requests a save, as if the save button was clicked.
pub const SAVE_SHORTCUT: egui::KeyboardShortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);

/// Lets the user edit a `Settings` and ask for it to be saved.
///
/// The panel only reports that a save was asked for, the current
/// `Settings` are then available from `get`.
#[derive(Clone, Default, Eq, PartialEq)]
pub struct SettingsPanel {
    admin_address: String,
    admin_password: String,
    show_admin_password: bool,
    authorized_passwords: String
}

impl SettingsPanel {
    /// Create a panel with empty fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is being edited with settings.
    pub fn set(&mut self, settings: &Settings) {
        trace!("Editing {settings:?}");
        self.admin_address.clone_from(&settings.admin_address);
        self.admin_password.clone_from(&settings.admin_password);
        self.authorized_passwords = settings::authorized_passwords_to_text(&settings.authorized_passwords);
    }

    /// Get the settings as currently edited.
    #[must_use]
    pub fn get(&self) -> Settings {
        Settings {
            admin_address: self.admin_address.clone(),
            admin_password: self.admin_password.clone(),
            authorized_passwords: settings::authorized_passwords_from_text(&self.authorized_passwords)
        }
    }

    /// Render the panel.
    ///
    /// Returns true if the user asked for the settings to be saved.
    #[must_use]
    pub fn show(&mut self, ui: &mut egui::Ui) -> bool {
        let mut save = ui.input_mut(|input| input.consume_shortcut(&SAVE_SHORTCUT));

        egui_extras::StripBuilder::new(ui)
            .size(egui_extras::Size::exact(110.0))
            .size(egui_extras::Size::remainder().at_least(80.0))
            .size(egui_extras::Size::exact(30.0))
            .vertical(|mut strip| {
                strip.cell(|ui| self.show_admin_login(ui));
                strip.cell(|ui| self.show_authorized_passwords(ui));
                strip.cell(|ui| {
                    let shortcut = ui.ctx().format_shortcut(&SAVE_SHORTCUT);
                    if ui.button("Save").on_hover_text(shortcut).clicked() {
                        save = true;
                    }
                });
            });

        if save {
            debug!("Save requested");
        }
        save
    }

    fn show_admin_login(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.heading("Administration login");
            egui::Grid::new("administration_login")
                .num_columns(2)
                .show(ui, |ui| {
                    ui.label("Address:");
                    ui.add(egui::TextEdit::singleline(&mut self.admin_address).hint_text("127.0.0.1:11234"));
                    ui.end_row();

                    ui.label("Password:");
                    ui.horizontal(|ui| {
                        ui.add(egui::TextEdit::singleline(&mut self.admin_password).password(!self.show_admin_password));
                        ui.checkbox(&mut self.show_admin_password, "Show");
                    });
                    ui.end_row();
                });
        });
    }

    fn show_authorized_passwords(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.heading("Authorized passwords");
            egui::ScrollArea::both().auto_shrink(false).show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut self.authorized_passwords)
                        .hint_text("Authorized passwords")
                        .code_editor()
                        .desired_width(f32::INFINITY)
                );
            });
        });
    }
}

impl std::fmt::Debug for SettingsPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsPanel")
         .field("admin_address", &self.admin_address)
         .field("show_admin_password", &self.show_admin_password)
         .finish_non_exhaustive()
    }
}
