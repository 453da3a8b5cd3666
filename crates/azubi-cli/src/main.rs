use anyhow::Result;
use azubi_cli::clipboard::SystemClipboard;
use azubi_cli::commands;
use azubi_cli::config::{Cli, Command};
use chrono::Local;
use clap::Parser;
use tracing::debug;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("azubi=info,azubi_cli=info")
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!("{:?}", cli.command);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Catalog(args) => commands::print_catalog(args.trade, args.mode, &mut out)?,
        Command::Form(args) => commands::print_form(args.trade, args.mode, &mut out)?,
        Command::Render(args) => {
            let now = Local::now().naive_local();
            commands::run_render(&args, &SystemClipboard::default(), now, &mut out)?;
        }
    }

    Ok(())
}
