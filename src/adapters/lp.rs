use crate::domain::model::{JobReceipt, PrintJob};
use crate::domain::ports::PrintService;
use crate::utils::error::{PrinterError, Result};
use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::thread;

/// Submits jobs through the CUPS `lp` command. Without `-d`, `lp` prints on
/// the host's default destination.
#[derive(Debug, Clone)]
pub struct LpSpooler {
    command: String,
    args: Vec<String>,
}

impl LpSpooler {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }
}

impl Default for LpSpooler {
    fn default() -> Self {
        Self::new("lp", Vec::new())
    }
}

impl PrintService for LpSpooler {
    fn submit(&self, job: &PrintJob) -> Result<JobReceipt> {
        tracing::debug!("Running {} {:?} -t {}", self.command, self.args, job.title);

        let mut child = Command::new(&self.command)
            .args(&self.args)
            .arg("-t")
            .arg(&job.title)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| PrinterError::SpoolerLaunchError {
                command: self.command.clone(),
                source,
            })?;

        // A `--file` payload can be any size, and a spooler may answer on
        // stdout before it has read all of stdin, so feed it from a separate
        // thread while the output is collected here.
        let stdin = child.stdin.take();
        let document = job.document.as_bytes();
        let (write_result, output) = thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                Some(mut stdin) => stdin.write_all(document),
                None => Ok(()),
            });
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("document writer panicked")));
            (written, output)
        });

        let output = output?;
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            return Err(PrinterError::SpoolerRejectedError {
                command: self.command.clone(),
                status: output.status.to_string(),
                stderr,
            });
        }

        if let Err(e) = write_result {
            return Err(PrinterError::PrintError {
                message: format!("could not send document to '{}': {}", self.command, e),
            });
        }

        if !stderr.is_empty() {
            tracing::warn!("{}: {}", self.command, stderr);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(JobReceipt {
            job_id: parse_request_id(&stdout),
        })
    }
}

/// `lp` reports "request id is <dest>-<n> (1 file(s))" on success.
pub fn parse_request_id(stdout: &str) -> Option<String> {
    stdout.lines().find_map(|line| {
        line.trim()
            .strip_prefix("request id is ")
            .and_then(|rest| rest.split_whitespace().next())
            .map(str::to_string)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> PrintJob {
        PrintJob {
            title: "unit".to_string(),
            document: "%!PS-Adobe-3.0\nshowpage\n".to_string(),
        }
    }

    #[test]
    fn test_parse_request_id() {
        assert_eq!(
            parse_request_id("request id is Office_Laser-42 (1 file(s))\n").as_deref(),
            Some("Office_Laser-42")
        );
        assert_eq!(parse_request_id(""), None);
        assert_eq!(parse_request_id("something else"), None);
    }

    #[test]
    fn test_missing_spooler_is_a_print_error() {
        let spooler = LpSpooler::new("/nonexistent/strip-printer-lp", Vec::new());
        let err = spooler.submit(&job()).unwrap_err();
        assert!(matches!(err, PrinterError::SpoolerLaunchError { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_spooler_receives_document_and_reports_job() {
        let dir = tempfile::tempdir().unwrap();
        let captured = dir.path().join("captured.ps");
        let script = format!(
            "cat > '{}'; echo 'request id is Desk-7 (1 file(s))'",
            captured.display()
        );

        // `sh -c <script> <title-flag> <title>`: the extra args land in $0/$1.
        let spooler = LpSpooler::new("sh", vec!["-c".to_string(), script]);
        let receipt = spooler.submit(&job()).unwrap();

        assert_eq!(receipt.job_id.as_deref(), Some("Desk-7"));
        assert_eq!(std::fs::read_to_string(&captured).unwrap(), job().document);
    }

    #[cfg(unix)]
    #[test]
    fn test_large_document_is_fully_delivered() {
        let dir = tempfile::tempdir().unwrap();
        let captured = dir.path().join("captured.ps");
        // `tee` echoes the document back while reading it, which fills the
        // stdout pipe long before stdin is done.
        let script = format!(
            "tee '{}'; echo 'request id is Desk-8 (1 file(s))'",
            captured.display()
        );

        let mut document = String::from("%!PS-Adobe-3.0\n");
        for _ in 0..200_000 {
            document.push_str("(ROUTE: DCT YCF J576) show\n");
        }
        document.push_str("showpage\n");
        let large = PrintJob {
            title: "large".to_string(),
            document,
        };

        let spooler = LpSpooler::new("sh", vec!["-c".to_string(), script]);
        let receipt = spooler.submit(&large).unwrap();

        assert_eq!(receipt.job_id.as_deref(), Some("Desk-8"));
        assert_eq!(std::fs::read_to_string(&captured).unwrap(), large.document);
    }

    #[cfg(unix)]
    #[test]
    fn test_spooler_failure_carries_stderr() {
        let spooler = LpSpooler::new(
            "sh",
            vec![
                "-c".to_string(),
                "cat > /dev/null; echo 'lp: Error - no default destination available.' >&2; exit 1"
                    .to_string(),
            ],
        );
        let err = spooler.submit(&job()).unwrap_err();

        assert_eq!(err.exit_code(), 1);
        assert!(err
            .user_friendly_message()
            .contains("no default destination available"));
    }
}
