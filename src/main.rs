use clap::Parser;

use spaceport::cli::{self, Cli, Commands};
use spaceport::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = cli::load_and_merge_config(&cli)?;
    cli::init_logger_from_settings(&settings)?;

    cli::execute_command(&cli, settings.clone()).await?;

    // A dry-run exits after validation; serve (or no subcommand) falls
    // through to the actual server startup here.
    match cli.command {
        Some(Commands::Serve { dry_run: true, .. }) => Ok(()),
        _ => Server::new(settings).run().await,
    }
}
