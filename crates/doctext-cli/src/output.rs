use std::io::Write;

use doctext_ingest::{ClientResponse, ExtractionError, ExtractionResult};
use owo_colors::OwoColorize;
use serde::Serialize;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// JSON shape of a successful extraction.
#[derive(Debug, Serialize)]
pub struct ResultJson<'a> {
    pub text: &'a str,
    pub page_count: Option<usize>,
    pub source_format: &'static str,
}

impl<'a> From<&'a ExtractionResult> for ResultJson<'a> {
    fn from(result: &'a ExtractionResult) -> Self {
        Self {
            text: &result.text,
            page_count: result.page_count,
            source_format: result.source_format.as_str(),
        }
    }
}

/// Print the extracted text with a short summary header.
pub fn print_result(
    w: &mut dyn Write,
    result: &ExtractionResult,
    color: ColorMode,
) -> std::io::Result<()> {
    let pages = match result.page_count {
        Some(n) => format!(", {} pages", n),
        None => String::new(),
    };
    let summary = format!(
        "{} characters ({}{})",
        result.text.chars().count(),
        result.source_format.as_str(),
        pages
    );
    if color.enabled() {
        writeln!(w, "{}", summary.dimmed())?;
    } else {
        writeln!(w, "{}", summary)?;
    }
    writeln!(w)?;
    writeln!(w, "{}", result.text)?;
    Ok(())
}

/// Print a classified failure the way the upload boundary would report it.
pub fn print_error(
    w: &mut dyn Write,
    err: &ExtractionError,
    response: ClientResponse,
    color: ColorMode,
) -> std::io::Result<()> {
    let headline = format!("[{}] {}", response.code, response.message);
    if color.enabled() {
        writeln!(w, "{}", headline.red())?;
        writeln!(w, "{}", err.message.dimmed())?;
    } else {
        writeln!(w, "{}", headline)?;
        writeln!(w, "{}", err.message)?;
    }
    Ok(())
}
