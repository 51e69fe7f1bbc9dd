use anyhow::Result;
use d2mem::{GameReader, OffsetResolver, ReadMemory, UnitSource};

pub fn run<R, O, U>(game: &mut GameReader<R, O, U>, pretty: bool) -> Result<()>
where
    R: ReadMemory,
    O: OffsetResolver,
    U: UnitSource,
{
    let snapshot = game.snapshot();
    let json = if pretty {
        serde_json::to_string_pretty(&snapshot)?
    } else {
        serde_json::to_string(&snapshot)?
    };
    println!("{}", json);
    Ok(())
}
