use serde::{Deserialize, Serialize};

use crate::global_constants::LAYER_SLOT_COUNT;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerMask(u32);

impl Default for LayerMask {
    fn default() -> Self {
        LayerMask::all()
    }
}

impl LayerMask {
    pub fn all() -> Self {
        LayerMask(u32::MAX)
    }

    pub fn none() -> Self {
        LayerMask(0)
    }

    pub fn from_bits(bits: u32) -> Self {
        LayerMask(bits)
    }

    pub fn single(slot_index: u8) -> Self {
        if slot_index >= LAYER_SLOT_COUNT {
            return LayerMask::none();
        }
        LayerMask(1 << slot_index)
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    pub fn contains(&self, slot_index: u8) -> bool {
        if slot_index >= LAYER_SLOT_COUNT {
            return false;
        }
        self.0 & (1 << slot_index) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn set_slot_indices(&self) -> Vec<u8> {
        (0..LAYER_SLOT_COUNT)
            .filter(|slot_index| self.contains(*slot_index))
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedLayer {
    pub slot_index: u8,
    pub name: String,
}

impl NamedLayer {
    pub fn at_slot(slot_index: u8, name: impl Into<String>) -> Self {
        Self {
            slot_index,
            name: name.into(),
        }
    }

    pub fn mask(&self) -> LayerMask {
        LayerMask::single(self.slot_index)
    }
}
