use strip_printer::utils::logger;
use strip_printer::{resolve_payload, CliConfig, PrintDispatcher, PrinterConfig, PrinterError};

fn exit_with(e: &PrinterError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, exit code {})",
        e,
        e.category(),
        e.exit_code()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn main() {
    let (config, ignored) = CliConfig::parse_lenient();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);
    if !ignored.is_empty() {
        tracing::warn!("Ignoring unrecognised arguments: {}", ignored.join(" "));
    }

    let payload = match resolve_payload(config.payload_source().as_ref()) {
        Ok(payload) => payload,
        Err(e) => exit_with(&e),
    };

    let settings = match PrinterConfig::load(config.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    let dispatcher = PrintDispatcher::new(settings.spooler(), settings.page, settings.font.clone())
        .with_title(settings.print.title.clone());

    match dispatcher.dispatch(&payload) {
        Ok(receipt) => {
            if let Some(id) = receipt.job_id {
                println!("✅ Sent to printer ({})", id);
            } else {
                println!("✅ Sent to printer");
            }
        }
        Err(e) => exit_with(&e),
    }
}
