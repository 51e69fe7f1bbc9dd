use serde::Serialize;

use crate::memory::ByteBuffer;
use crate::memory::layout::hover;
use crate::unit::{UnitId, UnitType};

/// The unit currently under the mouse cursor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HoverTarget {
    pub is_hovered: bool,
    pub unit_id: UnitId,
    /// Raw unit type code, see [`UnitType`]
    pub unit_type: u32,
}

impl HoverTarget {
    /// Decode the 12-byte hover slot. Nothing hovered decodes as the default.
    pub fn decode(buffer: ByteBuffer<'_>) -> Self {
        if buffer.u16_at(hover::IS_HOVERED) == 0 {
            return Self::default();
        }

        Self {
            is_hovered: true,
            unit_id: UnitId(buffer.u32_at(hover::UNIT_ID)),
            unit_type: buffer.u32_at(hover::UNIT_TYPE),
        }
    }

    pub fn kind(&self) -> Option<UnitType> {
        UnitType::from_u32(self.unit_type)
    }

    pub fn is_item(&self) -> bool {
        self.is_hovered && self.kind() == Some(UnitType::Item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(hovered: u16, unit_type: u32, id: u32) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(hover::SIZE);
        bytes.extend_from_slice(&hovered.to_le_bytes());
        bytes.extend_from_slice(&[0, 0]);
        bytes.extend_from_slice(&unit_type.to_le_bytes());
        bytes.extend_from_slice(&id.to_le_bytes());
        bytes
    }

    #[test]
    fn test_hovered_item() {
        let bytes = slot(1, 4, 0xBEEF);
        let target = HoverTarget::decode(ByteBuffer::new(&bytes));

        assert!(target.is_hovered);
        assert_eq!(target.unit_id, UnitId(0xBEEF));
        assert_eq!(target.kind(), Some(UnitType::Item));
        assert!(target.is_item());
    }

    #[test]
    fn test_not_hovered_ignores_stale_fields() {
        let bytes = slot(0, 4, 12);
        let target = HoverTarget::decode(ByteBuffer::new(&bytes));

        assert_eq!(target, HoverTarget::default());
        assert!(!target.is_item());
    }

    #[test]
    fn test_hovered_monster_is_not_item() {
        let bytes = slot(1, 1, 7);
        let target = HoverTarget::decode(ByteBuffer::new(&bytes));
        assert_eq!(target.kind(), Some(UnitType::Monster));
        assert!(!target.is_item());
    }
}
