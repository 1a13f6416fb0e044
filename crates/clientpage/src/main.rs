use std::path::PathBuf;

use clap::Parser;
use clientpage::{App, data::storage::DataDirectory, init_logging};
use clientpage_core::RecordId;

#[derive(Parser, Debug)]
#[command(name = "clientpage")]
#[command(about = "Account record page with high net worth client controls")]
struct Args {
    /// Path to the data directory (default: ~/.clientpage/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Account record id to open
    #[arg(short, long)]
    record: Option<String>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(DataDirectory::default_path);

    init_logging(&data_dir, &args.log_level)?;

    let mut app = App::with_data_dir(data_dir, args.record.map(RecordId::new))?;

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");
    Ok(())
}
