use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};

mod output;

use doctext_ingest::{
    DocumentExtractor, ExtractionRequest, client_response, config_file,
};
use output::ColorMode;

/// Document text extraction for resume and job-description uploads
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract plain text from a PDF, DOCX, or TXT file
    Extract {
        /// Path to the document
        file_path: PathBuf,

        /// Declared MIME type (defaults to matching by file extension)
        #[arg(long)]
        mime: Option<String>,

        /// Per-attempt decode budget in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Do not fall back to the page-walk decoder
        #[arg(long)]
        no_fallback: bool,

        /// Emit JSON instead of human-readable output
        #[arg(long)]
        json: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Extract {
            file_path,
            mime,
            timeout_ms,
            no_fallback,
            json,
            no_color,
            output,
        } => extract(file_path, mime, timeout_ms, no_fallback, json, no_color, output).await,
    }
}

async fn extract(
    file_path: PathBuf,
    mime: Option<String>,
    timeout_ms: Option<u64>,
    no_fallback: bool,
    json: bool,
    no_color: bool,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    // Resolve configuration: CLI flags > env vars > config file > defaults
    let mut config = config_file::load_config().resolve();
    let timeout_ms = timeout_ms.or_else(|| {
        std::env::var("DOCTEXT_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
    });
    if let Some(ms) = timeout_ms {
        config.timeout = Duration::from_millis(ms);
    }
    if no_fallback {
        config.enable_fallback = false;
    }

    let bytes = std::fs::read(&file_path)
        .with_context(|| format!("failed to read {}", file_path.display()))?;
    let file_name = file_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload")
        .to_string();
    let declared_mime = mime.unwrap_or_default();

    let use_color = !no_color && output.is_none();
    let color = ColorMode(use_color);
    let mut writer: Box<dyn Write> = if let Some(ref output_path) = output {
        Box::new(std::fs::File::create(output_path)?)
    } else {
        Box::new(std::io::stdout())
    };

    let extractor = DocumentExtractor::new(config);
    let request = ExtractionRequest::new(bytes, declared_mime, file_name);

    match extractor.extract(request).await {
        Ok(result) => {
            if json {
                writeln!(writer, "{}", serde_json::to_string(&output::ResultJson::from(&result))?)?;
            } else {
                output::print_result(&mut writer, &result, color)?;
            }
            writer.flush()?;
            Ok(())
        }
        Err(err) => {
            let response = client_response(err.kind);
            if json {
                writeln!(writer, "{}", serde_json::to_string(&response)?)?;
            } else {
                output::print_error(&mut writer, &err, response, color)?;
            }
            writer.flush()?;
            std::process::exit(1);
        }
    }
}
