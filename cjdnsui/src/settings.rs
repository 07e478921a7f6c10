//! Administrative settings for the cjdns daemon.

/// How to reach and authenticate with the daemon, and who may peer with it.
#[derive(Clone, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settings {
    /// Address (`ip:port`) of the daemon's admin interface.
    pub admin_address: String,

    /// Password for the daemon's admin interface.
    pub admin_password: String,

    /// Passwords peers may connect with, in display order.
    pub authorized_passwords: Vec<String>
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
         .field("admin_address", &self.admin_address)
         .field("admin_password", &"<redacted>")
         .field("authorized_passwords", &self.authorized_passwords.len())
         .finish()
    }
}

/// Render passwords as a text block, one per line.
///
/// Passwords are written as they are, so one containing a line break
/// is read back by `authorized_passwords_from_text` as several passwords.
#[must_use]
pub fn authorized_passwords_to_text(passwords: &[String]) -> String {
    passwords.join("\n")
}

/// Parse a text block of passwords.
///
/// Every whitespace character is removed from each line (not just those at the ends),
/// lines which are then empty are skipped.
#[must_use]
pub fn authorized_passwords_from_text(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<String>())
        .filter(|password| !password.is_empty())
        .collect()
}
