#![cfg(unix)]

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_strip-printer");

/// Writes a config whose spooler captures the submitted document to
/// `<dir>/captured.ps` instead of printing it.
fn capturing_config(dir: &TempDir) -> Result<(PathBuf, PathBuf)> {
    let captured = dir.path().join("captured.ps");
    let config_path = dir.path().join("printer.toml");
    let config = format!(
        r#"
[print]
command = "sh"
args = ["-c", "cat > '{}'; echo 'request id is Test_Printer-1 (1 file(s))'"]
"#,
        captured.display()
    );
    std::fs::write(&config_path, config)?;
    Ok((config_path, captured))
}

fn failing_config(dir: &TempDir, script: &str) -> Result<PathBuf> {
    let config_path = dir.path().join("failing.toml");
    let config = format!(
        "[print]\ncommand = \"sh\"\nargs = [\"-c\", {}]\n",
        toml_quote(script)
    );
    std::fs::write(&config_path, config)?;
    Ok(config_path)
}

/// TOML multi-line literal string, so shell quotes pass through untouched.
fn toml_quote(s: &str) -> String {
    format!("'''{}'''", s)
}

fn run(config: &Path, args: &[&str]) -> Result<Output> {
    let output = Command::new(BIN)
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

#[test]
fn test_text_payload_is_printed() -> Result<()> {
    let dir = TempDir::new()?;
    let (config, captured) = capturing_config(&dir)?;

    let output = run(&config, &["--text", "CS: ACA123   DEP: CYYZ"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Test_Printer-1"));

    let document = std::fs::read_to_string(&captured)?;
    assert!(document.starts_with("%!PS-Adobe-3.0"));
    assert!(document.contains("%%Pages: 1"));
    assert!(document.contains("(CS: ACA123   DEP: CYYZ) show"));
    assert_eq!(document.matches("showpage").count(), 1);
    Ok(())
}

#[test]
fn test_test_strip_is_printed() -> Result<()> {
    let dir = TempDir::new()?;
    let (config, captured) = capturing_config(&dir)?;

    let output = run(&config, &["--test"])?;
    assert_eq!(output.status.code(), Some(0));

    let document = std::fs::read_to_string(&captured)?;
    for line in strip_printer::domain::template::TEST_STRIP.lines() {
        assert!(document.contains(&format!("({}) show", line)), "missing {line}");
    }
    Ok(())
}

#[test]
fn test_file_payload_is_printed() -> Result<()> {
    let dir = TempDir::new()?;
    let (config, captured) = capturing_config(&dir)?;
    let strip = dir.path().join("strip.txt");
    std::fs::write(&strip, "ROUTE: DCT YCF J576\nFL: 350\n")?;

    let output = run(&config, &["--file", strip.to_str().unwrap()])?;
    assert_eq!(output.status.code(), Some(0));

    let document = std::fs::read_to_string(&captured)?;
    assert!(document.contains("(ROUTE: DCT YCF J576) show"));
    assert!(document.contains("(FL: 350) show"));
    Ok(())
}

#[test]
fn test_later_flag_wins() -> Result<()> {
    let dir = TempDir::new()?;
    let (config, captured) = capturing_config(&dir)?;
    let strip = dir.path().join("f.txt");
    std::fs::write(&strip, "FROM FILE\n")?;

    let output = run(&config, &["--file", strip.to_str().unwrap(), "--text", "A"])?;
    assert_eq!(output.status.code(), Some(0));

    let document = std::fs::read_to_string(&captured)?;
    assert!(document.contains("(A) show"));
    assert!(!document.contains("FROM FILE"));
    Ok(())
}

#[test]
fn test_unknown_arguments_do_not_block_printing() -> Result<()> {
    let dir = TempDir::new()?;
    let (config, captured) = capturing_config(&dir)?;

    let output = run(&config, &["--test", "--copies", "2"])?;
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--copies 2"));

    let document = std::fs::read_to_string(&captured)?;
    assert_eq!(document.matches("showpage").count(), 1);
    for line in strip_printer::domain::template::TEST_STRIP.lines() {
        assert!(document.contains(&format!("({}) show", line)), "missing {line}");
    }

    let output = run(&config, &["--test", "extra"])?;
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_trailing_file_flag_without_value_is_ignored() -> Result<()> {
    let dir = TempDir::new()?;
    let (config, captured) = capturing_config(&dir)?;

    let output = run(&config, &["--text", "A", "--file"])?;
    assert_eq!(output.status.code(), Some(0));

    let document = std::fs::read_to_string(&captured)?;
    assert!(document.contains("(A) show"));
    Ok(())
}

#[test]
fn test_no_payload_exits_2_without_printing() -> Result<()> {
    let dir = TempDir::new()?;
    let (config, captured) = capturing_config(&dir)?;

    let output = run(&config, &[])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("No payload provided"));
    assert!(!captured.exists());
    Ok(())
}

#[test]
fn test_blank_payload_exits_2_without_printing() -> Result<()> {
    let dir = TempDir::new()?;
    let (config, captured) = capturing_config(&dir)?;

    let output = run(&config, &["--text", "   \n\t"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("empty or whitespace-only"));
    assert!(!captured.exists());
    Ok(())
}

#[test]
fn test_unreadable_file_exits_2() -> Result<()> {
    let dir = TempDir::new()?;
    let (config, captured) = capturing_config(&dir)?;
    let missing = dir.path().join("missing.txt");

    let output = run(&config, &["--file", missing.to_str().unwrap()])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.txt"));
    assert!(!captured.exists());
    Ok(())
}

#[test]
fn test_print_failure_exits_1_with_underlying_message() -> Result<()> {
    let dir = TempDir::new()?;
    let config = failing_config(
        &dir,
        "cat > /dev/null; echo 'lp: Error - no default destination available.' >&2; exit 1",
    )?;

    let output = run(&config, &["--test"])?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no default destination available"));
    assert!(!stderr.contains("panicked"));
    Ok(())
}

#[test]
fn test_missing_spooler_exits_1() -> Result<()> {
    let dir = TempDir::new()?;
    let config_path = dir.path().join("nospooler.toml");
    std::fs::write(
        &config_path,
        "[print]\ncommand = \"/nonexistent/strip-printer-lp\"\n",
    )?;

    let output = run(&config_path, &["--text", "hello"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("could not run spooler"));
    Ok(())
}

#[test]
fn test_invalid_config_exits_3() -> Result<()> {
    let dir = TempDir::new()?;
    let config_path = dir.path().join("bad.toml");
    std::fs::write(&config_path, "[font]\nsize = 1.0\n")?;

    let output = run(&config_path, &["--text", "hello"])?;

    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("font.size"));
    Ok(())
}
