#[cfg(feature = "native")]
use clap::{Parser, Subcommand};
#[cfg(feature = "native")]
use goldenmile::data::storage::DataDirectory;
#[cfg(feature = "native")]
use goldenmile_core::MetroFlag;
#[cfg(feature = "native")]
use std::path::PathBuf;

#[cfg(feature = "native")]
#[derive(Parser, Debug)]
#[command(name = "goldenmile")]
#[command(about = "Terminal client for the Golden Mile real-estate advisory service")]
struct Args {
    /// Path to the data directory (default: ~/.goldenmile/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Backend URL, overrides server_url in config.yaml
    #[arg(short, long)]
    server: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[cfg(feature = "native")]
#[derive(Subcommand, Debug)]
enum Command {
    /// Generate an analysis without the TUI and print it to stdout
    Generate {
        #[arg(long)]
        city: String,
        /// Budget in crore
        #[arg(long)]
        budget: String,
        /// Size in square feet
        #[arg(long)]
        size: String,
        #[arg(long)]
        intent: String,
        /// Near a metro line: yes or no
        #[arg(long, value_parser = parse_metro)]
        metro: Option<MetroFlag>,
        /// Also save the PDF (to PATH, or the reports directory)
        #[arg(long, value_name = "PATH", num_args = 0..=1)]
        download: Option<Option<PathBuf>>,
    },
    /// Save the most recently generated report
    Download {
        /// File or directory to save to (default: the reports directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[cfg(feature = "native")]
fn parse_metro(value: &str) -> Result<MetroFlag, String> {
    MetroFlag::parse(value).ok_or_else(|| format!("expected yes or no, got '{}'", value))
}

#[cfg(feature = "native")]
fn main() -> color_eyre::Result<()> {
    use goldenmile::headless::{self, GenerateArgs};
    use goldenmile::platform::{HttpClient, NativeWorker};
    use goldenmile::state::AppState;
    use goldenmile::{App, init_logging};
    use goldenmile_core::FormController;

    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(DataDirectory::default_path);

    init_logging(&data_dir, &args.log_level)?;

    let storage = DataDirectory::new(data_dir);
    let mut config = storage.load_or_init_config()?;
    if let Some(server) = args.server {
        config.server_url = server;
    }
    config.validate()?;

    let reports_dir = storage.reports_dir(&config)?;
    let client = HttpClient::new(&config.server_url, config.request_timeout())?;
    tracing::info!(server = %config.server_url, "Using advisory backend");

    match args.command {
        Some(Command::Generate {
            city,
            budget,
            size,
            intent,
            metro,
            download,
        }) => {
            let generate = GenerateArgs {
                city,
                budget,
                size,
                intent,
                metro,
                download,
            };
            return headless::run_generate(&config, &client, generate, &reports_dir);
        }
        Some(Command::Download { output }) => {
            return headless::run_download(&config, &client, output, &reports_dir);
        }
        None => {}
    }

    let state = AppState::new(
        FormController::new(config.form_config()),
        storage.load_keybindings(),
    );
    let worker = NativeWorker::new(client, reports_dir);
    let mut app = App::new(state, worker);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}

#[cfg(not(feature = "native"))]
fn main() {
    // Web entry point is handled via wasm_bindgen in lib.rs
    panic!(
        "This binary requires the 'native' feature. For web, use trunk to build the WASM target."
    );
}
