#![doc = include_str!("../README.md")]

pub mod gui;

pub use gui::view::{View, ViewEvent, Topic, WeakView};

/// Initialise tracing with the provided `tracing_subscriber::EnvFilter`.
///
/// Records from the `log` crate (as used by `cjdnsui`) are captured too.
///
/// # Example
///
/// ```
/// cjdnsui_gui::init_tracing(
///     tracing_subscriber::EnvFilter::from_default_env()
///         .add_directive("bin_name=info".parse().unwrap())
/// );
/// ```
pub fn init_tracing(filter: tracing_subscriber::EnvFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();
}
