use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use dotsync::cli::Cli;
use dotsync::menu::prompt::TermPrompter;
use dotsync::{SyncContext, actions, menu};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {e:#}", "Error:".red().bold());
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = SyncContext::new(cli.config)?;

    // Populate the discovered file set once before the first prompt, so
    // "list files" has something to show without an explicit update.
    actions::update::refresh_files(&mut ctx);

    let registry = actions::build_menus();
    let mut prompter = TermPrompter::default();
    menu::run_menu_loop(
        &registry,
        dotsync::ROOT_MENU_ID,
        &mut ctx,
        &mut prompter,
        actions::dispatch,
    )?;

    println!("exiting...");
    Ok(())
}
