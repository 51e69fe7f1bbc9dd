//! One-shot queries against the running game.

use anyhow::{Context, Result};
use d2mem::{GameReader, OffsetResolver, ReadMemory, UnitSource, WidgetFlag};
use tracing::warn;

pub fn panel<R, O, U>(game: &GameReader<R, O, U>, path: &[String]) -> Result<()>
where
    R: ReadMemory,
    O: OffsetResolver,
    U: UnitSource,
{
    let node = game.panel(path);
    if node.is_empty() {
        warn!("Panel not found: {}", path.join(" > "));
    }
    println!("{}", serde_json::to_string_pretty(&node)?);
    Ok(())
}

pub fn widget<R, O, U>(game: &GameReader<R, O, U>, name: &str) -> Result<()>
where
    R: ReadMemory,
    O: OffsetResolver,
    U: UnitSource,
{
    let flag: WidgetFlag = name
        .parse()
        .with_context(|| format!("Unknown widget flag: {}", name))?;

    match game.widget_state(flag.key()) {
        Some(value) => println!("{}: {}", flag, value),
        None => println!("{}: not present", flag),
    }
    Ok(())
}

pub fn character<R, O, U>(game: &GameReader<R, O, U>, name: &str) -> Result<()>
where
    R: ReadMemory,
    O: OffsetResolver,
    U: UnitSource,
{
    let flags = game.character_flags(name)?;
    println!("{}", serde_json::to_string_pretty(&flags)?);
    Ok(())
}

pub fn mercs<R, O, U>(game: &GameReader<R, O, U>) -> Result<()>
where
    R: ReadMemory,
    O: OffsetResolver,
    U: UnitSource,
{
    let mercs = game.merc_list();
    if mercs.is_empty() {
        println!("No hire list found (is the hire menu open?)");
        return Ok(());
    }

    println!(
        "{:>3}  {:<16} {:>3} {:>6} {:>6} {:>7}  Skill",
        "#", "Name", "Lvl", "Life", "Def", "Cost"
    );
    for merc in &mercs {
        println!(
            "{:>3}  {:<16} {:>3} {:>6} {:>6} {:>7}  {} ({})",
            merc.index,
            merc.name,
            merc.level,
            merc.life,
            merc.defense,
            merc.cost,
            merc.skill,
            merc.skill.id()
        );
    }
    Ok(())
}
