//! pdf-docx-reader CLI - read PDF and DOCX files as JSON or plain text

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use colored::Colorize;

use pdf_docx_reader::{render, FileReader, OutputFormat};

const AFTER_HELP: &str = "\
Examples:
  pdf-docx-reader document.pdf
  pdf-docx-reader document.docx --output-format text
  pdf-docx-reader document.pdf --output-format json > output.json";

#[derive(Parser)]
#[command(name = "pdf-docx-reader")]
#[command(author = "param")]
#[command(disable_version_flag = true)]
#[command(about = "Read PDF and DOCX files and extract text content for AI agents", long_about = None)]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// Path to the PDF or DOCX file to read
    #[arg(value_name = "FILE", required_unless_present = "version")]
    file_path: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "json",
        env = "PDF_DOCX_READER_FORMAT"
    )]
    output_format: Format,

    /// Print version information and exit
    #[arg(long)]
    version: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Pretty-printed JSON
    Json,
    /// Human-readable text
    Text,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Text => OutputFormat::Text,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.version {
        println!("{}", version_string());
        return;
    }

    let Some(file_path) = cli.file_path else {
        eprintln!("{}: no input file given", "Error".red().bold());
        process::exit(1);
    };

    let format: OutputFormat = cli.output_format.into();
    if let Err(message) = run_guarded(|| cmd_read(&file_path, format)) {
        eprintln!("{}: {}", "Error".red().bold(), message);
        process::exit(1);
    }
}

type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Run a command, reporting both its error and any panic as a message.
fn run_guarded<F: FnOnce() -> CmdResult>(f: F) -> Result<(), String> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(e.to_string()),
        Err(payload) => Err(format!("Unexpected error: {}", panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    }
}

fn version_string() -> String {
    format!("PDF/DOCX Reader Tool v{}", env!("CARGO_PKG_VERSION"))
}

fn cmd_read(path: &Path, format: OutputFormat) -> CmdResult {
    if !path.exists() {
        return Err(format!("File not found: {}", path.display()).into());
    }

    let reader = FileReader::new();
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    if !reader.supports(&ext) {
        let shown = if ext.is_empty() { "(none)" } else { ext.as_str() };
        eprintln!("{}: Unsupported file type: {}", "Error".red().bold(), shown);
        eprintln!("Supported types: {}", reader.supported_extensions().join(", "));
        process::exit(1);
    }

    log::debug!("Reading {} as {}", path.display(), format);

    let record = reader.read(path)?;
    let output = render::render(&record, format)?;
    println!("{}", output);

    Ok(())
}
