use anyhow::Result;
use scrabble_board_client::get_commands;
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt};

fn init_tracing() -> Result<()> {
    LogTracer::init()?;
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .json()
        .boxed();

    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = Registry::default().with(filter_layer).with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let commands = get_commands();

    let mut clap_commands = clap::Command::new("scrabble-board-client")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true);

    for command in commands.values() {
        clap_commands = clap_commands.subcommand(command.create());
    }

    let matches = clap_commands.get_matches();
    let Some((subcommand_name, subcommand_args)) = matches.subcommand() else {
        anyhow::bail!("No subcommand provided");
    };

    let command = commands
        .get(subcommand_name)
        .ok_or_else(|| anyhow::anyhow!("Unknown subcommand {subcommand_name}"))?;

    command.execute(subcommand_args).await
}
