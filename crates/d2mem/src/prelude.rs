//! Prelude module for convenient imports
//!
//! ```ignore
//! use d2mem::prelude::*;
//! ```
//!
//! This brings the following into scope:
//!
//! - Orchestration: `GameReader`, `ReaderConfig`, `Snapshot`
//! - Memory and offsets: `ReadMemory`, `Offsets`, `OffsetResolver`, `FileOffsetResolver`
//! - Decoded state: `Stats`, `StatId`, `PanelNode`, `HoverTarget`, `OpenMenus`,
//!   `CharacterFlags`, `WidgetFlag`
//! - Units: `UnitSource`, `NoUnits`
//! - Error handling: `Error`, `Result`

// Orchestration
pub use crate::config::{ReaderConfig, ReaderConfigBuilder};
pub use crate::reader::{GameReader, Snapshot};

// Error handling
pub use crate::error::{Error, Result};

// Memory boundary and offsets
#[cfg(target_os = "windows")]
pub use crate::memory::ProcessHandle;
pub use crate::memory::ReadMemory;
pub use crate::offset::{FileOffsetResolver, OffsetResolver, Offsets};

// Decoded state
pub use crate::character::CharacterFlags;
pub use crate::stat::{StatId, Stats};
pub use crate::ui::{HoverTarget, MercOption, OpenMenus, PanelNode, PanelTree};
pub use crate::widget::WidgetFlag;

// Units
pub use crate::unit::{NoUnits, UnitSource};
