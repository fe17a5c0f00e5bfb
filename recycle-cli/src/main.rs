//! Recycle CLI - locality rules, disposal guide and chat from the terminal.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "recycle-cli",
    version,
    about = "Smart recycling guide toolkit"
)]
struct Cli {
    #[command(flatten)]
    connection: recycle_cmd::Connection,

    #[command(subcommand)]
    command: recycle_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Backend: {}", cli.connection.base_url);
    recycle_cmd::run(cli.connection, cli.command).await
}
