use crate::commands::{
    run_assess, run_automate, run_decide, run_learn, AssessArgs, AutomateArgs, DecideArgs,
    LearnArgs,
};
use crate::demo::{run_demo, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use freedom_engine::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Freedom Compass",
    about = "Score freedom assessments and generate recommendations from the command line",
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
    /// Walk through every engine with sample data
    Demo(DemoArgs),
    /// Score questionnaire answers and print the result summary
    Assess(AssessArgs),
    /// Rank decision options and print the recommendation
    Decide(DecideArgs),
    /// Suggest automations for a task list exported as CSV
    Automate(AutomateArgs),
    /// Build a learning path for one skill
    Learn(LearnArgs),
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
        Command::Demo(args) => run_demo(args),
        Command::Assess(args) => run_assess(args),
        Command::Decide(args) => run_decide(args),
        Command::Automate(args) => run_automate(args),
        Command::Learn(args) => run_learn(args),
    }
}
