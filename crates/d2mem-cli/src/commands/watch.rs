//! Polling mode: log what changes between snapshots.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use d2mem::{GameReader, HoverTarget, OffsetResolver, OpenMenus, ReadMemory, Snapshot, UnitSource};
use tracing::{debug, info};

use crate::shutdown::ShutdownSignal;

/// The parts of a snapshot worth reporting on change
#[derive(Debug, Clone, PartialEq, Eq)]
struct Watched {
    is_ingame: bool,
    area: u32,
    hover: HoverTarget,
    weapon_slot: u8,
    menus: OpenMenus,
}

impl Watched {
    fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            is_ingame: snapshot.is_ingame,
            area: snapshot.player.area,
            hover: snapshot.hover,
            weapon_slot: snapshot.active_weapon_slot,
            menus: snapshot.open_menus,
        }
    }

    fn report_changes(&self, previous: Option<&Watched>) {
        if previous.is_none_or(|p| p.is_ingame != self.is_ingame) {
            info!("In game: {}", self.is_ingame);
        }
        if previous.is_none_or(|p| p.area != self.area) {
            info!("Area: {}", self.area);
        }
        if previous.is_none_or(|p| p.weapon_slot != self.weapon_slot) {
            info!("Active weapon slot: {}", self.weapon_slot);
        }
        if previous.is_none_or(|p| p.menus.loading_screen != self.menus.loading_screen) {
            info!("Loading screen: {}", self.menus.loading_screen);
        }
        if previous.is_none_or(|p| p.menus != self.menus) {
            debug!("Open menus: {:?}", self.menus);
        }
        if previous.is_none_or(|p| p.hover != self.hover) && self.hover.is_hovered {
            info!(
                "Hovering unit {} (type: {})",
                self.hover.unit_id.0, self.hover.unit_type
            );
        }
    }
}

pub fn run<R, O, U>(game: &mut GameReader<R, O, U>, interval: Duration) -> Result<()>
where
    R: ReadMemory,
    O: OffsetResolver,
    U: UnitSource,
{
    let shutdown = Arc::new(ShutdownSignal::new());
    let shutdown_ctrlc = Arc::clone(&shutdown);
    ctrlc::set_handler(move || {
        info!("Received shutdown signal, stopping...");
        shutdown_ctrlc.trigger();
    })?;
    info!("Watching every {:?} (Ctrl-C to stop)", interval);

    let mut previous: Option<Watched> = None;
    loop {
        // interval counts from poll start
        let deadline = Instant::now() + interval;
        let snapshot = game.snapshot();
        let current = Watched::from_snapshot(&snapshot);
        current.report_changes(previous.as_ref());
        previous = Some(current);

        if shutdown.wait_until(deadline) {
            break;
        }
    }

    info!("Stopped");
    Ok(())
}
