mod analyze;
mod cli;
mod context;
mod error;
mod fetch;
mod health;
mod init;
mod progress;
mod session;
mod ui;
mod upload;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use context::Context;
use fetch::FetchArgs;
use std::process;

fn main() {
    let cli = Cli::parse();
    let result = run(cli);

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}

fn run(cli: Cli) -> error::Result<()> {
    // init must work without a valid configuration
    let ctx = match &cli.command {
        Commands::Init { path } => return init::execute(path.clone()),
        _ => Context::from_cli(&cli)?,
    };

    match cli.command {
        Commands::Health => health::execute(ctx),
        Commands::Watch { interval } => health::watch(ctx, interval),
        Commands::Upload {
            source,
            file,
            preview,
        } => upload::execute(ctx, source, file, preview),
        Commands::Analyze {
            query,
            model,
            speak,
            listen,
        } => analyze::execute(ctx, query, model, speak, listen),
        Commands::Fetch {
            source,
            limit,
            voice,
            no_voice,
            status,
            priority,
            metric,
        } => fetch::execute(
            ctx,
            source,
            FetchArgs {
                limit,
                voice: (voice || no_voice).then_some(voice),
                status,
                priority,
                metric,
            },
        ),
        Commands::Console => session::execute(ctx),
        Commands::Init { path } => init::execute(path),
    }
}
