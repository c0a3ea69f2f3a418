//! Encodes a list of draw commands as a single-page DSC-conforming PostScript
//! document, the format CUPS accepts directly from `lp`.
//!
//! Text uses the standard PostScript fonts re-encoded to ISO Latin-1, so
//! characters outside Latin-1 are replaced with `?`.

use crate::domain::model::{DrawCommand, PageGeometry};
use chrono::{DateTime, Utc};
use std::fmt::{self, Write};

const LATIN1_SUFFIX: &str = "-Latin1";

const PROLOG: &str = "\
%%BeginProlog
/reencode {
  findfont dup length dict begin
    { 1 index /FID ne { def } { pop pop } ifelse } forall
    /Encoding ISOLatin1Encoding def
    currentdict
  end definefont pop
} bind def
%%EndProlog
";

pub struct DocumentInfo<'a> {
    pub title: &'a str,
    pub page: &'a PageGeometry,
    pub created: DateTime<Utc>,
}

pub fn encode_page(info: &DocumentInfo<'_>, commands: &[DrawCommand]) -> String {
    let mut out = String::new();
    // Formatting into a String cannot fail.
    let _ = write_document(&mut out, info, commands);
    out
}

fn write_document(
    out: &mut impl Write,
    info: &DocumentInfo<'_>,
    commands: &[DrawCommand],
) -> fmt::Result {
    let page_height = info.page.height;

    writeln!(out, "%!PS-Adobe-3.0")?;
    writeln!(out, "%%Title: {}", ps_string(info.title))?;
    writeln!(out, "%%Creator: strip-printer")?;
    writeln!(
        out,
        "%%CreationDate: {}",
        ps_string(&info.created.format("%Y-%m-%d %H:%M:%S UTC").to_string())
    )?;
    writeln!(out, "%%Pages: 1")?;
    writeln!(
        out,
        "%%BoundingBox: 0 0 {} {}",
        info.page.width.ceil() as i64,
        page_height.ceil() as i64
    )?;
    let fonts = needed_fonts(commands);
    if !fonts.is_empty() {
        writeln!(out, "%%DocumentNeededResources: font {}", fonts.join(" "))?;
    }
    writeln!(out, "%%EndComments")?;
    out.write_str(PROLOG)?;
    writeln!(out, "%%Page: 1 1")?;
    writeln!(out, "gsave")?;

    for command in commands {
        match command {
            DrawCommand::Clip(rect) => writeln!(
                out,
                "{} {} {} {} rectclip",
                num(rect.left),
                num(page_height - rect.bottom()),
                num(rect.width),
                num(rect.height)
            )?,
            DrawCommand::SetFont { name, size } => {
                let latin1 = format!("{}{}", name, LATIN1_SUFFIX);
                writeln!(out, "/{} /{} reencode", latin1, name)?;
                writeln!(out, "/{} findfont {} scalefont setfont", latin1, num(*size))?;
            }
            DrawCommand::Text { x, baseline, text } => writeln!(
                out,
                "{} {} moveto {} show",
                num(*x),
                num(page_height - baseline),
                ps_string(text)
            )?,
        }
    }

    writeln!(out, "grestore")?;
    writeln!(out, "showpage")?;
    writeln!(out, "%%Trailer")?;
    writeln!(out, "%%EOF")
}

fn needed_fonts(commands: &[DrawCommand]) -> Vec<&str> {
    let mut fonts: Vec<&str> = Vec::new();
    for command in commands {
        if let DrawCommand::SetFont { name, .. } = command {
            if !fonts.contains(&name.as_str()) {
                fonts.push(name);
            }
        }
    }
    fonts
}

/// Points with at most two decimals, without trailing zeros.
fn num(value: f32) -> String {
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

/// A PostScript string literal in parentheses.
fn ps_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('(');
    for c in text.chars() {
        match c {
            '(' | ')' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            ' '..='~' => out.push(c),
            _ => {
                let code = c as u32;
                if code <= 0xFF {
                    out.push_str(&format!("\\{:03o}", code));
                } else {
                    out.push('?');
                }
            }
        }
    }
    out.push(')');
    out
}
