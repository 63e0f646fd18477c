use anyhow::Context;
use clap::Parser;
use pdf_presentation::{DocumentRenderer, Download, PresentationRequest, RenderConfig, SPORTS};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "pdf-presentation")]
#[command(about = "Generate a one-page personal presentation PDF")]
struct Args {
    /// Full name, e.g. "Juan Pérez"
    #[arg(short, long, default_value = "")]
    name: String,

    /// Age, between 1 and 100
    #[arg(short, long, default_value_t = 25)]
    age: u32,

    /// Favourite sport, one of the entries shown by --list-sports
    #[arg(short, long, default_value = pdf_presentation::SPORT_PLACEHOLDER)]
    sport: String,

    /// Free text used instead of "Otro" when that sport is chosen
    #[arg(long)]
    other: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory the PDF is written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Print the sport catalogue and exit
    #[arg(long)]
    list_sports: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let default = if verbose {
        "pdf_presentation=debug,info"
    } else {
        "pdf_presentation=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    if args.list_sports {
        for sport in SPORTS.iter().skip(1) {
            println!("{sport}");
        }
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => RenderConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => RenderConfig::default(),
    };

    let request =
        match PresentationRequest::new(&args.name, args.age, &args.sport, args.other.as_deref()) {
            Ok(request) => request,
            Err(errors) => {
                for error in errors.iter() {
                    eprintln!("⚠️ {error}");
                }
                std::process::exit(2);
            }
        };

    tracing::info!(name = request.full_name(), "generating presentation");
    let bytes = DocumentRenderer::new(config)
        .render_request(&request)
        .context("failed to render presentation")?;
    let download = Download::for_request(&request, bytes);

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("failed to create {}", args.output_dir.display()))?;
    let path = args.output_dir.join(&download.file_name);
    std::fs::write(&path, &download.bytes)
        .with_context(|| format!("failed to write {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        bytes = download.bytes.len(),
        mime = download.mime_type,
        "presentation written"
    );
    println!("{}", path.display());
    Ok(())
}
