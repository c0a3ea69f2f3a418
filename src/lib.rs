pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::LpSpooler;
pub use config::PrinterConfig;
pub use crate::core::dispatcher::PrintDispatcher;
pub use crate::core::payload::{resolve_payload, PayloadSource};
pub use domain::model::Payload;
pub use utils::error::{PrinterError, Result};
