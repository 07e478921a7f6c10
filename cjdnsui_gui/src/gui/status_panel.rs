//! Read-only display of a node's `Status`.

use cjdnsui::{status, Status};
use tracing::trace;

const UNKNOWN: &str = "Unknown";

/// Displays the peering information from a `Status`.
///
/// The panel holds the text being displayed, `get` translates it back.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct StatusPanel {
    address: String,
    public_key: String,
    port: String
}

impl StatusPanel {
    /// Create a panel showing "Unknown" for everything.
    #[must_use]
    pub fn new() -> Self {
        Self {
            address: String::from(UNKNOWN),
            public_key: String::from(UNKNOWN),
            port: String::from(UNKNOWN)
        }
    }

    /// Display status.
    pub fn set(&mut self, status: &Status) {
        trace!("Displaying {status:?}");
        self.address.clone_from(&status.address);
        self.public_key.clone_from(&status.public_key);
        self.port = status::port_to_text(status.port);
    }

    /// Get the displayed status.
    ///
    /// # Errors
    ///
    /// [`cjdnsui::Error::InvalidPort`] if the displayed port isn't a number,
    /// for example when nothing has been set yet.
    pub fn get(&self) -> Result<Status, cjdnsui::Error> {
        Ok(Status {
            address: self.address.clone(),
            public_key: self.public_key.clone(),
            port: status::port_from_text(&self.port)?
        })
    }

    /// Render the panel.
    pub fn show(&self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.heading("Peering information");
            egui::Grid::new("peering_information")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui| {
                    ui.label("Cjdns IP:");
                    super::copyable_label(ui, &self.address);
                    ui.end_row();

                    ui.label("Public Key:");
                    super::copyable_label(ui, &self.public_key);
                    ui.end_row();

                    ui.label("Port:");
                    super::copyable_label(ui, &self.port);
                    ui.end_row();
                });
        });
    }
}

impl Default for StatusPanel {
    fn default() -> Self {
        Self::new()
    }
}
