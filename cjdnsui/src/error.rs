/// The errors which can occur when translating displayed text back into a record.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    /// The displayed port is not a base-10 integer between 0 and 65535.
    #[error("Invalid Port (must be 0-65535): {0:?}")]
    InvalidPort(String),
}
