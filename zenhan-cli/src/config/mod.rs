//! User configuration

mod settings;

pub use settings::{ConversionSettings, LoggingSettings, Settings};
