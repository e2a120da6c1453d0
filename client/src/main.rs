//! imgpredict CLI - upload an image to a `/predict` endpoint
//!
//! ```bash
//! imgpredict predict cat.png                       # Upload and show the result
//! imgpredict predict cat.png --url http://host/predict --raw
//! imgpredict check cat.png                         # Validate only, no request
//! imgpredict size 1536 1048576                     # Format byte counts
//! ```
//!
//! The endpoint defaults to `IMGPREDICT_URL` (a `.env` file is honoured),
//! then `http://localhost:8000/predict`.

use clap::{Parser, Subcommand};
use imgpredict::{
    bytes_to_size, predict, CliResult, Config, HttpTransport, LocalFile, UploadWidget, WidgetView,
};
use std::path::{Path, PathBuf};
use std::time::Instant;

const BAR_WIDTH: usize = 30;

#[derive(Parser)]
#[command(name = "imgpredict")]
#[command(about = "Upload an image and show its classification", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate, upload and render the prediction
    Predict {
        /// Image file (PNG, JPEG or WEBP, max 50MB)
        input: PathBuf,

        /// Endpoint URL (default: $IMGPREDICT_URL or localhost:8000)
        #[arg(short, long)]
        url: Option<String>,

        /// Also print the raw result JSON
        #[arg(long)]
        raw: bool,
    },

    /// Validate a file without uploading it
    Check {
        /// Image file
        input: PathBuf,
    },

    /// Format byte counts the way the widget does
    Size {
        /// Byte counts
        #[arg(required = true)]
        bytes: Vec<u64>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Predict { input, url, raw } => {
            let config = Config::from_env().with_url(url);
            cmd_predict(&input, &config, raw).await
        }
        Commands::Check { input } => cmd_check(&input).await,
        Commands::Size { bytes } => {
            cmd_size(&bytes);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Milliseconds since `origin`, the widget's clock.
fn elapsed_ms(origin: Instant) -> f64 {
    origin.elapsed().as_secs_f64() * 1000.0
}

async fn cmd_predict(input: &Path, config: &Config, raw: bool) -> CliResult<()> {
    let clock = Instant::now();
    let file = LocalFile::load(input).await?;

    let mut widget = UploadWidget::new();
    widget.accept_file(Some(file))?;
    print_file(&widget.view());

    let Some(file) = widget.begin_predict(elapsed_ms(clock)) else {
        return Ok(());
    };
    eprintln!("📤 {} ({})", widget.status(), config.predict_url);

    let transport = HttpTransport::new(config.predict_url.clone());
    let outcome = predict(&transport, &file).await;
    let failure = outcome.as_ref().err().cloned();
    widget.finish_predict(outcome, elapsed_ms(clock));

    let view = widget.view();
    print_result(&view, raw);
    eprintln!("⏱️  {}", view.status);

    match failure {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

async fn cmd_check(input: &Path) -> CliResult<()> {
    let file = LocalFile::load(input).await?;

    let mut widget = UploadWidget::new();
    widget.accept_file(Some(file))?;
    print_file(&widget.view());
    eprintln!("✅ Ready to upload");

    Ok(())
}

fn cmd_size(bytes: &[u64]) {
    for n in bytes {
        println!("{}\t{}", n, bytes_to_size(*n));
    }
}

// =============================================================================
// Terminal rendering
// =============================================================================

fn print_file(view: &WidgetView) {
    if let Some(file) = &view.file {
        eprintln!("📄 {} {} {}", file.name, file.size_text, file.type_text);
    }
}

fn print_result(view: &WidgetView, raw: bool) {
    if let Some(result) = &view.result {
        let filled = ((result.confidence_percent / 100.0) * BAR_WIDTH as f64).round() as usize;
        println!("Label:        {}", result.label);
        println!(
            "Confidence:   {} [{}{}]",
            result.confidence_text,
            "#".repeat(filled),
            "-".repeat(BAR_WIDTH - filled.min(BAR_WIDTH))
        );
        if result.alternatives.is_empty() {
            println!("Alternatives: —");
        } else {
            println!("Alternatives: {}", result.alternatives.join(", "));
        }
        println!("Rationale:    {}", result.rationale);
        if raw {
            println!("{}", result.raw_json);
        }
    }
}
