use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use telelex::pipeline::{extract_document, PipelineConfig};
use telelex::prepare::{EXPECTED_HEIGHT, EXPECTED_WIDTH};

#[derive(Parser, Debug)]
#[command(name = "telelex")]
#[command(version, about = "Extract normalized vocabulary from teletext frontpage images", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract normalized word lines from one frontpage image
    Extract {
        /// Input image file path
        input: PathBuf,

        /// Working directory for engine scratch files
        #[arg(short, long)]
        work_dir: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Extract from multiple frontpage images
    Batch {
        /// Input image files
        inputs: Vec<PathBuf>,

        /// Working directory for engine scratch files
        #[arg(short, long)]
        work_dir: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Show information about a frontpage image
    Info {
        /// Input image file path
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            input,
            work_dir,
            pretty,
            quiet,
        } => extract_single(input, work_dir, pretty, quiet),
        Commands::Batch {
            inputs,
            work_dir,
            pretty,
        } => extract_batch(inputs, work_dir, pretty),
        Commands::Info { input } => show_info(input),
    }
}

fn default_work_dir() -> PathBuf {
    std::env::temp_dir().join("telelex")
}

fn extract_single(
    input: PathBuf,
    work_dir: Option<PathBuf>,
    pretty: bool,
    quiet: bool,
) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }
    if !input.is_file() {
        anyhow::bail!("Input is not a file: {}", input.display());
    }

    let work_dir = work_dir.unwrap_or_else(default_work_dir);

    if !quiet {
        eprintln!("[*] Processing: {}", input.display());
    }

    let config = PipelineConfig::new(input.clone(), work_dir);
    let document = extract_document(&config)
        .with_context(|| format!("Failed to process image: {}", input.display()))?;

    let rows = document.rows();
    let json = if pretty {
        serde_json::to_string_pretty(&rows)?
    } else {
        serde_json::to_string(&rows)?
    };
    println!("{json}");

    if !quiet {
        eprintln!(
            "[✓] Done: {} line(s), {} word(s)",
            rows.len(),
            document.token_count()
        );
    }

    Ok(())
}

fn extract_batch(inputs: Vec<PathBuf>, work_dir: Option<PathBuf>, pretty: bool) -> Result<()> {
    if inputs.is_empty() {
        anyhow::bail!("No input files specified");
    }

    eprintln!("[*] Batch processing {} file(s)", inputs.len());

    let mut success = 0;
    let mut failed = 0;

    for (i, input) in inputs.iter().enumerate() {
        eprintln!("[{}/{}] {}", i + 1, inputs.len(), input.display());

        if !input.exists() {
            eprintln!("  [!] Skipped: file does not exist");
            failed += 1;
            continue;
        }

        match extract_single(input.clone(), work_dir.clone(), pretty, true) {
            Ok(_) => {
                eprintln!("  [✓] Success");
                success += 1;
            }
            Err(e) => {
                eprintln!("  [✗] Failed: {e:#}");
                failed += 1;
            }
        }
    }

    eprintln!("\n[*] Summary: {success} succeeded, {failed} failed");

    if failed > 0 {
        anyhow::bail!("{failed} file(s) failed to process");
    }

    Ok(())
}

fn show_info(input: PathBuf) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }

    let image = image::open(&input)
        .with_context(|| format!("Failed to open image: {}", input.display()))?;

    println!("Image information");
    println!("=================");
    println!("File: {}", input.display());
    println!("Size: {}x{}", image.width(), image.height());
    if image.width() == EXPECTED_WIDTH && image.height() == EXPECTED_HEIGHT {
        println!("Frame: matches the expected {EXPECTED_WIDTH}x{EXPECTED_HEIGHT} teletext frame");
    } else {
        println!(
            "Frame: differs from the expected {EXPECTED_WIDTH}x{EXPECTED_HEIGHT} teletext frame"
        );
    }

    Ok(())
}
