use crate::core::payload::PayloadSource;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Payload flags override one another so that the last one on the command
/// line wins, including repeats of the same flag.
#[derive(Debug, Clone, Parser)]
#[command(name = "strip-printer", version)]
#[command(about = "Print text as a single monospaced page on the default printer")]
#[command(args_override_self = true)]
pub struct CliConfig {
    /// Read the payload from a UTF-8 text file
    #[arg(
        long,
        value_name = "PATH",
        allow_hyphen_values = true,
        overrides_with_all = ["text", "test"]
    )]
    pub file: Option<PathBuf>,

    /// Use the given string as the payload, verbatim
    #[arg(
        long,
        value_name = "STRING",
        allow_hyphen_values = true,
        overrides_with_all = ["file", "test"]
    )]
    pub text: Option<String>,

    /// Print the built-in test flight strip
    #[arg(long, overrides_with_all = ["file", "text"])]
    pub test: bool,

    /// TOML file with page, font and spooler settings
    #[arg(long, value_name = "PATH", allow_hyphen_values = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

const VALUE_FLAGS: [&str; 3] = ["--file", "--text", "--config"];
const SWITCHES: [&str; 7] = [
    "--test",
    "-v",
    "--verbose",
    "-h",
    "--help",
    "-V",
    "--version",
];

/// Arguments the scan did not recognise, in command-line order.
pub type IgnoredArgs = Vec<String>;

/// Keep only the tokens `CliConfig` understands. Unknown tokens are dropped,
/// as is a value flag at the very end that has nothing to take.
pub fn scan_args<I, T>(args: I) -> (Vec<OsString>, IgnoredArgs)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut kept: Vec<OsString> = args.next().into_iter().collect();
    let mut ignored = IgnoredArgs::new();

    while let Some(arg) = args.next() {
        let flag = arg.to_string_lossy().into_owned();

        if VALUE_FLAGS.contains(&flag.as_str()) {
            match args.next() {
                Some(value) => {
                    kept.push(arg);
                    kept.push(value);
                }
                None => ignored.push(flag),
            }
        } else if SWITCHES.contains(&flag.as_str()) || has_inline_value(&flag) {
            kept.push(arg);
        } else {
            ignored.push(flag);
        }
    }

    (kept, ignored)
}

/// `--file=strip.txt` style, with something after the `=`.
fn has_inline_value(arg: &str) -> bool {
    arg.split_once('=')
        .is_some_and(|(flag, value)| VALUE_FLAGS.contains(&flag) && !value.is_empty())
}

impl CliConfig {
    /// Parse the process arguments, skipping anything that is not one of our
    /// flags. Help and version requests still go through clap.
    pub fn parse_lenient() -> (Self, IgnoredArgs) {
        Self::parse_lenient_from(std::env::args_os())
    }

    pub fn parse_lenient_from<I, T>(args: I) -> (Self, IgnoredArgs)
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let (kept, ignored) = scan_args(args);
        (Self::parse_from(kept), ignored)
    }

    pub fn payload_source(&self) -> Option<PayloadSource> {
        if let Some(path) = &self.file {
            Some(PayloadSource::File(path.clone()))
        } else if let Some(text) = &self.text {
            Some(PayloadSource::Text(text.clone()))
        } else if self.test {
            Some(PayloadSource::TestStrip)
        } else {
            None
        }
    }
}
