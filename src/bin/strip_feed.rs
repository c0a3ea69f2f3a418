use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use strip_printer::core::feed::StripFeed;
use strip_printer::domain::strip::StripTracker;
use strip_printer::utils::logger;
use strip_printer::{Payload, PrintDispatcher, PrinterConfig, PrinterError};

#[derive(Parser, Debug)]
#[command(name = "strip-feed")]
#[command(about = "Print flight strips and amendments from a stream of flight plan updates")]
struct Args {
    /// TOML configuration file (control zone, page, font and spooler)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read JSON-lines updates from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Write strips to stdout instead of printing them
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

fn open_input(path: Option<&PathBuf>) -> anyhow::Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open input '{}'", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_feed_logger(args.verbose, args.log_json);

    let config = match PrinterConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let zone = config.control_zone();
    tracing::info!(
        "🚀 Watching {} airports ({:?})",
        zone.airports().len(),
        zone.mode()
    );

    let reader = match open_input(args.input.as_ref()) {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    };

    let dispatcher = PrintDispatcher::new(config.spooler(), config.page, config.font.clone());
    let mut feed = StripFeed::new(StripTracker::new(zone));
    let dry_run = args.dry_run;

    let summary = feed.run(reader, |event| {
        if dry_run {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", event.text)?;
            return Ok(());
        }

        let title = format!("{} {}", event.kind.title(), event.callsign);
        dispatcher
            .dispatch_titled(&Payload::new(event.text.clone()), &title)
            .map(|_| ())
    });

    match summary {
        Ok(summary) => {
            tracing::info!(
                "✅ Feed finished: {} plans, {} strips ({} failed), {} malformed lines, {} callsigns tracked",
                summary.plans,
                summary.strips,
                summary.failed,
                summary.malformed,
                feed.tracker().tracked_callsigns()
            );
            Ok(())
        }
        Err(e @ PrinterError::IoError(_)) => {
            eprintln!("❌ Reading updates failed: {}", e);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
