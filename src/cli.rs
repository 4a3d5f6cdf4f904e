use crate::commands;
use crate::config::Overrides;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "package-info-gen",
    version,
    about = "Generate missing package-info.java files"
)]
struct Cli {
    /// Increase verbosity (-v, -vv). Uses RUST_LOG under the hood
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Path to package-info.toml (defaults to current directory)
    #[arg(long)]
    config: Option<String>,
    /// Project base directory used to resolve relative paths
    #[arg(long)]
    base_dir: Option<PathBuf>,
    /// Output directory for generated files
    #[arg(long)]
    out: Option<PathBuf>,
    /// Source root to scan; repeat for several (replaces the configured list)
    #[arg(long = "source-root")]
    source_roots: Vec<PathBuf>,
    /// Text encoding of generated files
    #[arg(long)]
    encoding: Option<String>,
}

impl ConfigArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            base_dir: self.base_dir.clone(),
            out: self.out.clone(),
            source_roots: self.source_roots.clone(),
            encoding: self.encoding.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate missing package-info.java files and print the compile roots
    Generate {
        #[command(flatten)]
        args: ConfigArgs,
    },
    /// List the files generate would write, without writing them
    Check {
        #[command(flatten)]
        args: ConfigArgs,
    },
    /// Remove the output directory
    Clean {
        #[command(flatten)]
        args: ConfigArgs,
        /// Delete without confirmation
        #[arg(long)]
        yes: bool,
    },
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string());
    // Logs go to stderr; stdout carries the command's results.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(env_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn dispatch(cli: Cli) -> Result<()> {
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate { args } => {
            commands::generate(args.config.as_deref(), &args.overrides())?
        }
        Commands::Check { args } => commands::check(args.config.as_deref(), &args.overrides())?,
        Commands::Clean { args, yes } => {
            commands::clean(args.config.as_deref(), &args.overrides(), yes)?
        }
    }

    Ok(())
}

pub fn run_cli() -> Result<()> {
    dispatch(Cli::parse())
}

pub fn run_cli_with<I, S>(args: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    dispatch(Cli::try_parse_from(args)?)
}
