use clap::Parser;
use complexify::{App, AnalysisWorker, RemoteBackend, init_logging};
use complexify_client::DEFAULT_ENDPOINT;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "complexify")]
#[command(about = "A terminal client for the Complexify code-analysis service")]
struct Args {
    /// URL of the analysis endpoint
    #[arg(short, long, env = "COMPLEXIFY_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Path to the data directory (default: ~/.complexify/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".complexify")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let backend = RemoteBackend::new(args.endpoint.clone())?;
    let worker = AnalysisWorker::spawn(backend);
    let mut app = App::new(args.endpoint, worker);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
