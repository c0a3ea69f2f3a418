use crate::domain::model::Payload;
use crate::domain::template;
use crate::utils::error::{PrinterError, Result};
use std::path::{Path, PathBuf};

/// Where the payload comes from. When several payload flags are given, the
/// command line keeps only the last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadSource {
    File(PathBuf),
    Text(String),
    TestStrip,
}

/// Turn the selected source into a printable payload. Missing, unreadable and
/// blank payloads are all reported as payload errors.
pub fn resolve_payload(source: Option<&PayloadSource>) -> Result<Payload> {
    let payload = match source {
        None => return Err(PrinterError::MissingPayloadError),
        Some(PayloadSource::File(path)) => read_payload_file(path)?,
        Some(PayloadSource::Text(text)) => Payload::new(text.clone()),
        Some(PayloadSource::TestStrip) => Payload::new(template::test_strip()),
    };

    if payload.is_blank() {
        return Err(PrinterError::BlankPayloadError);
    }

    tracing::debug!("Resolved payload of {} bytes", payload.as_str().len());
    Ok(payload)
}

pub fn read_payload_file(path: &Path) -> Result<Payload> {
    tracing::debug!("Reading payload from {}", path.display());
    std::fs::read_to_string(path)
        .map(Payload::new)
        .map_err(|source| PrinterError::PayloadFileError {
            path: path.to_path_buf(),
            source,
        })
}
