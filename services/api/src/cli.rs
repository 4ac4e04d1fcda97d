use crate::demo::{run_demo, run_questions, run_score, DemoArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use persona_quiz::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Personality Quiz",
    about = "Serve, score, and demonstrate the personality quiz from the command line",
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
    /// Print the question catalog with option weights
    Questions,
    /// Score a set of answers without storing or sending anything
    Score(ScoreArgs),
    /// Run the canonical submission through an in-memory service
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Questions => run_questions(),
        Command::Score(args) => run_score(args),
        Command::Demo(args) => run_demo(args),
    }
}
