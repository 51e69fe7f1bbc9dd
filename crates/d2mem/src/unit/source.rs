use crate::memory::ReadMemory;
use crate::offset::Offsets;
use crate::ui::HoverTarget;

use super::{
    Entrance, Inventory, KeyBindings, Monster, PlayerUnits, Position, RosterMember, WorldObject,
};

/// Decoder for the unit-table derived parts of a snapshot.
///
/// Every method defaults to "nothing found" so an implementation only needs
/// to override the categories it understands.
pub trait UnitSource {
    fn player_units<R: ReadMemory + ?Sized>(&self, _reader: &R, _offsets: &Offsets) -> PlayerUnits {
        PlayerUnits::default()
    }

    fn monsters<R: ReadMemory + ?Sized>(
        &self,
        _reader: &R,
        _offsets: &Offsets,
        _origin: Position,
        _hover: &HoverTarget,
    ) -> Vec<Monster> {
        Vec::new()
    }

    fn inventory<R: ReadMemory + ?Sized>(
        &self,
        _reader: &R,
        _offsets: &Offsets,
        _units: &PlayerUnits,
        _hover: &HoverTarget,
    ) -> Inventory {
        Inventory::default()
    }

    fn objects<R: ReadMemory + ?Sized>(
        &self,
        _reader: &R,
        _offsets: &Offsets,
        _origin: Position,
        _hover: &HoverTarget,
    ) -> Vec<WorldObject> {
        Vec::new()
    }

    fn corpses<R: ReadMemory + ?Sized>(
        &self,
        _reader: &R,
        _offsets: &Offsets,
        _origin: Position,
        _hover: &HoverTarget,
    ) -> Vec<Monster> {
        Vec::new()
    }

    fn entrances<R: ReadMemory + ?Sized>(
        &self,
        _reader: &R,
        _offsets: &Offsets,
        _origin: Position,
        _hover: &HoverTarget,
    ) -> Vec<Entrance> {
        Vec::new()
    }

    fn roster<R: ReadMemory + ?Sized>(
        &self,
        _reader: &R,
        _offsets: &Offsets,
        _units: &PlayerUnits,
    ) -> Vec<RosterMember> {
        Vec::new()
    }

    fn key_bindings<R: ReadMemory + ?Sized>(&self, _reader: &R, _offsets: &Offsets) -> KeyBindings {
        KeyBindings::default()
    }
}

/// A unit source that never finds anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoUnits;

impl UnitSource for NoUnits {}
