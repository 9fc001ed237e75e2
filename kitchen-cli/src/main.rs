//! kitchen CLI - Kitchen Companion recipe bookmarks
//!
//! Entry point for the `kitchen` binary:
//! - `serve` runs the web UI
//! - `init-db` creates the database schema
//! - `list` prints saved recipes, optionally filtered

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "kitchen",
    author,
    version,
    about = "Bookmark recipes by cuisine, tag and source link",
    long_about = "Kitchen Companion keeps recipe links, notes and tags in a database and \
                  serves a small htmx web UI for browsing and editing them.\n\n\
                  Database settings come from DATABASE_URL and DATABASE_AUTH_TOKEN, read \
                  from the environment, ./.env or ~/.kitchen/.env."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the web server
    Serve(commands::serve::ServeArgs),
    /// Create database tables if they do not exist
    InitDb,
    /// Print saved recipes grouped by cuisine
    List(commands::list::ListArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Env files first so clap's `env` fallbacks and RUST_LOG can see them
    let env_files = config::load_env_files();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();
    env_files.log();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::InitDb => commands::run_init_db().await?,
        Commands::List(args) => commands::run_list(args).await?,
        Commands::Completions(args) => run_completions(args)?,
    }
    Ok(())
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}
