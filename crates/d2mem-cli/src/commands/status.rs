use anyhow::Result;
use d2mem::{GameReader, OffsetResolver, ReadMemory, UnitSource};
use owo_colors::OwoColorize;

fn line(label: &str, value: bool) {
    let value = if value {
        "yes".green().to_string()
    } else {
        "no".dimmed().to_string()
    };
    println!("  {:<22}{}", label, value);
}

pub fn run<R, O, U>(game: &GameReader<R, O, U>) -> Result<()>
where
    R: ReadMemory,
    O: OffsetResolver,
    U: UnitSource,
{
    let offsets = game.offsets();
    println!("{}", "Game status".bold());
    println!("  {:<22}{}", "Offsets version", offsets.version);
    if !offsets.is_resolved() {
        println!("  {}", "Unit table offset is zero; offsets look stale".yellow());
    }

    line("In game", game.is_ingame());
    line("Online", game.is_online());
    line("Lobby", game.in_lobby());
    line("Character selection", game.in_character_selection());
    line("Character creation", game.in_character_creation());
    line("Blocking", game.is_blocking());
    line("Legacy graphics", game.legacy_graphics());
    line("Has merc", game.has_merc());

    let (modal, prompt) = game.dismissable_modal();
    if modal {
        println!("  {:<22}{}", "Modal", prompt.red());
    }

    let selected = game.selected_character_name();
    if !selected.is_empty() {
        println!("  {:<22}{}", "Selected character", selected);
    }
    println!("  {:<22}{}", "Weapon slot", game.active_weapon_slot());
    println!("  {:<22}{}", "FPS", game.fps());
    println!("  {:<22}{} ms", "Ping", game.ping());
    Ok(())
}
