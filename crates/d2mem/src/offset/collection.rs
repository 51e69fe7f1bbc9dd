use serde::{Deserialize, Serialize};

/// Named offsets into the game module, relative to its base address.
///
/// A zero offset means "not resolved"; readers depending on it decode
/// empty/default state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Offsets {
    pub version: String,
    pub unit_table: u64,
    pub ui: u64,
    pub hover: u64,
    pub quest_info: u64,
    pub fps: u64,
    pub ping: u64,
    pub widget_states: u64,
    pub char_data: u64,
    pub legacy_graphics: u64,
    pub panel_manager: u64,
    pub roster: u64,
    pub key_bindings: u64,
    pub last_game_name: u64,
    pub last_game_password: u64,
    pub selected_character_name: u64,
}

impl Offsets {
    /// The unit table is the root offset; zero means the attachment is stale
    pub fn is_resolved(&self) -> bool {
        self.unit_table != 0
    }

    /// Absolute address of a module-relative offset, or zero if unresolved
    pub fn absolute(base: u64, offset: u64) -> u64 {
        if offset == 0 {
            0
        } else {
            base.wrapping_add(offset)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_offsets_are_unresolved() {
        assert!(!Offsets::default().is_resolved());
        let offsets = Offsets {
            unit_table: 0x1D6_4A48,
            ..Default::default()
        };
        assert!(offsets.is_resolved());
    }

    #[test]
    fn test_absolute_keeps_zero() {
        assert_eq!(Offsets::absolute(0x1_4000_0000, 0), 0);
        assert_eq!(Offsets::absolute(0x1_4000_0000, 0x20), 0x1_4000_0020);
    }

    #[test]
    fn test_missing_fields_deserialize_as_zero() {
        let offsets: Offsets = serde_json::from_str(r#"{"unit_table": 4096}"#).unwrap();
        assert_eq!(offsets.unit_table, 4096);
        assert_eq!(offsets.hover, 0);
        assert!(offsets.version.is_empty());
    }
}
