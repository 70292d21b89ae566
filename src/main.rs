use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;
use csv_search::{config::Config, routes::create_router, utils, AppState};

#[derive(Parser)]
#[command(name = "csv-search", version, about = "Upload a CSV file and search its records")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve {
        /// Listen port, overrides PORT
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run the terminal client
    Tui {
        /// Server address, overrides API_HOST
        #[arg(long)]
        api_host: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = Config::from_env()?;

    match cli.command.unwrap_or(Command::Serve { port: None }) {
        Command::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            serve(config).await
        }
        Command::Tui { api_host } => {
            if let Some(api_host) = api_host {
                config.client.api_host = api_host;
            }
            let _guard = utils::init_file_logger(&config.client.log_dir, "csv-search-tui.log")?;
            csv_search::tui::run(config.client).await
        }
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    utils::init_logger();
    info!("Configuration loaded: {:?}", config.server);

    let addr = (config.server.host.clone(), config.server.port);

    let state = AppState::new(config);
    let app = create_router(state)?;

    let listener = TcpListener::bind(addr).await?;
    info!("Server running at: http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
