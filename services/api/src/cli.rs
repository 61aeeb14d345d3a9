use crate::report::{run_render, run_summary};
use crate::server;
use clap::{Args, Parser, Subcommand};
use dose_dashboard::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Vaccination Dose Dashboard",
    about = "Summarize an OpenDataSUS vaccination export and serve it as a dashboard",
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
    /// Print the dose summary to the terminal
    Summary(SummaryArgs),
    /// Write the dashboard as a static HTML file
    Render(RenderArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured vaccination export path
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct SummaryArgs {
    /// Override the configured vaccination export path
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
    /// Emit the summary as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RenderArgs {
    /// Override the configured vaccination export path
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
    /// Destination of the rendered page
    #[arg(long, default_value = "dashboard.html")]
    pub(crate) output: PathBuf,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Summary(args) => run_summary(args),
        Command::Render(args) => run_render(args),
    }
}
