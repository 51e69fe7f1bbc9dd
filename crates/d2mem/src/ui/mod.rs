//! UI state decoders: menu flags, hover slot, hire list and the panel tree

mod hover;
mod menus;
mod merc;
pub mod panel;

pub use hover::HoverTarget;
pub use menus::OpenMenus;
pub use merc::{MercOption, MercSkill, parse_merc_entry};
pub use panel::{PanelNode, PanelTree, read_panel_tree};
