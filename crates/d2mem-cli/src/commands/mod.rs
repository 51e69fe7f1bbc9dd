//! CLI command implementations.

pub mod query;
pub mod snapshot;
pub mod status;
pub mod watch;

use std::time::Duration;

use anyhow::Result;
use d2mem::{GameReader, OffsetResolver, ReadMemory, UnitSource};

use crate::Command;

pub fn dispatch<R, O, U>(mut game: GameReader<R, O, U>, command: Command) -> Result<()>
where
    R: ReadMemory,
    O: OffsetResolver,
    U: UnitSource,
{
    match command {
        Command::Snapshot { pretty } => snapshot::run(&mut game, pretty),
        Command::Watch { interval_ms } => watch::run(&mut game, Duration::from_millis(interval_ms)),
        Command::Panel { path } => query::panel(&game, &path),
        Command::Widget { flag } => query::widget(&game, &flag),
        Command::Character { name } => query::character(&game, &name),
        Command::Mercs => query::mercs(&game),
        Command::Status => status::run(&game),
    }
}
