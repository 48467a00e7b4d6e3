use crate::demo::{run_recommend, run_seasonal, RecommendArgs, SeasonalArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use coastline_stays::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Coastline Stays",
    about = "Run the discovery and enquiry service, or demo its engines from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Run the discovery engines against the bundled demo catalog
    Discover {
        #[command(subcommand)]
        command: DiscoverCommand,
    },
}

#[derive(Subcommand, Debug)]
enum DiscoverCommand {
    /// Recommend properties for a guide slug
    Recommend(RecommendArgs),
    /// Print the seasonal digest for a month
    Seasonal(SeasonalArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Serve the bundled demo catalog instead of the hosted data service
    #[arg(long)]
    pub(crate) demo: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Discover {
            command: DiscoverCommand::Recommend(args),
        } => run_recommend(args),
        Command::Discover {
            command: DiscoverCommand::Seasonal(args),
        } => run_seasonal(args),
    }
}
