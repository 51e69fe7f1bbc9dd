// Everything below `attach_and_run` is only reachable where attaching works
#![cfg_attr(not(target_os = "windows"), allow(dead_code))]

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use d2mem::DEFAULT_PROCESS_NAME;
use tracing_subscriber::EnvFilter;

mod commands;
mod shutdown;

#[derive(Parser)]
#[command(name = "d2mem")]
#[command(about = "Diablo II: Resurrected memory snapshot reader")]
#[command(version)]
struct Cli {
    /// Offsets file (JSON)
    #[arg(short, long, global = true, env = "D2MEM_OFFSETS", default_value = "offsets.json")]
    offsets: PathBuf,

    /// Executable name of the game process
    #[arg(short, long, global = true, default_value = DEFAULT_PROCESS_NAME)]
    process: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print one snapshot as JSON
    Snapshot {
        #[arg(long)]
        pretty: bool,
    },
    /// Poll snapshots until Ctrl-C, logging state changes
    Watch {
        #[arg(long, default_value_t = 250)]
        interval_ms: u64,
    },
    /// Resolve a panel path (root first) and print the node
    Panel {
        #[arg(required = true)]
        path: Vec<String>,
    },
    /// Print a widget state byte by flag name (e.g. WeaponSwap)
    Widget { flag: String },
    /// Print the flags of a character on the account
    Character { name: String },
    /// Print the hire menu entries
    Mercs,
    /// Summary of UI state queries
    Status,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("d2mem=info".parse()?))
        .init();

    let cli = Cli::parse();
    attach_and_run(cli)
}

#[cfg(target_os = "windows")]
fn attach_and_run(cli: Cli) -> Result<()> {
    use d2mem::{FileOffsetResolver, GameReader, NoUnits, ProcessHandle, ReaderConfig};
    use tracing::info;

    let process = ProcessHandle::find_and_open(&cli.process)?;
    info!(
        "Attached to {} (pid: {}, base: {:#x})",
        cli.process, process.pid, process.base_address
    );

    let resolver = FileOffsetResolver::new(&cli.offsets);
    let game = GameReader::new(process, resolver, NoUnits, ReaderConfig::default())?;
    commands::dispatch(game, cli.command)
}

#[cfg(not(target_os = "windows"))]
fn attach_and_run(cli: Cli) -> Result<()> {
    anyhow::bail!(
        "Attaching to {} is only supported on Windows (offsets: {})",
        cli.process,
        cli.offsets.display()
    )
}
