pub mod dispatcher;
pub mod feed;
pub mod layout;
pub mod payload;
pub mod postscript;

pub use crate::domain::model::{DrawCommand, FontSpec, JobReceipt, PageGeometry, Payload, PrintJob};
pub use crate::domain::ports::PrintService;
pub use crate::utils::error::Result;
