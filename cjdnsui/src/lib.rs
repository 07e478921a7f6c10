#![doc = include_str!("../README.md")]

mod error;

pub mod observer;
pub mod settings;
pub mod status;

pub use error::Error;
pub use observer::{Event, Observable};
pub use settings::Settings;
pub use status::Status;
