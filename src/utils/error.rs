use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrinterError {
    #[error("No payload provided. Use --test, --file <path>, or --text \"...\"")]
    MissingPayloadError,

    #[error("Payload is empty or whitespace-only")]
    BlankPayloadError,

    #[error("Cannot read payload file '{}': {source}", .path.display())]
    PayloadFileError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Print failed: {message}")]
    PrintError { message: String },

    #[error("Print failed: could not run spooler '{command}': {source}")]
    SpoolerLaunchError {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Print failed: spooler '{command}' exited with {status}: {stderr}")]
    SpoolerRejectedError {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in field '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Payload,
    Print,
    Configuration,
    System,
}

impl PrinterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PrinterError::MissingPayloadError
            | PrinterError::BlankPayloadError
            | PrinterError::PayloadFileError { .. } => ErrorCategory::Payload,
            PrinterError::PrintError { .. }
            | PrinterError::SpoolerLaunchError { .. }
            | PrinterError::SpoolerRejectedError { .. } => ErrorCategory::Print,
            PrinterError::ConfigValidationError { .. }
            | PrinterError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PrinterError::IoError(_) => ErrorCategory::System,
        }
    }

    /// Process exit status for this error: 1 print failure, 2 no usable
    /// payload, 3 bad configuration.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Payload => 2,
            ErrorCategory::Print | ErrorCategory::System => 1,
            ErrorCategory::Configuration => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PrinterError::PayloadFileError { path, source } => {
                format!("Could not read '{}': {}", path.display(), source)
            }
            PrinterError::SpoolerRejectedError { stderr, status, .. } if stderr.is_empty() => {
                format!("Print failed: the print service exited with {}", status)
            }
            PrinterError::SpoolerRejectedError { stderr, .. } => {
                format!("Print failed: {}", stderr)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PrinterError::MissingPayloadError | PrinterError::BlankPayloadError => {
                "Pass --test to print a test strip, or supply non-blank text with --text or --file"
            }
            PrinterError::PayloadFileError { .. } => {
                "Check that the file exists, is readable and contains UTF-8 text"
            }
            PrinterError::SpoolerLaunchError { .. } => {
                "Make sure CUPS is installed and the spooler command is on PATH"
            }
            PrinterError::PrintError { .. } | PrinterError::SpoolerRejectedError { .. } => {
                "Check that a default printer is configured (lpstat -d) and accepting jobs"
            }
            PrinterError::ConfigValidationError { .. }
            | PrinterError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and try again"
            }
            PrinterError::IoError(_) => "Check that the input can be read",
        }
    }
}

pub type Result<T> = std::result::Result<T, PrinterError>;
