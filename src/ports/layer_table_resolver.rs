use serde::{Deserialize, Serialize};

use crate::core::interfaces::ports::LayerNameResolver;
use crate::core::models::{LayerMask, NamedLayer};
use crate::global_constants::{LAYER_SLOT_COUNT, LOG_TAG_LAYERS};

// 32 layer slots, most of them usually unnamed. Slot order is the export
// order, so layered captures come out deterministic.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LayerTable {
    slots: [Option<String>; LAYER_SLOT_COUNT as usize],
}

impl LayerTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_named_slots(named_slots: &[(u8, &str)]) -> Self {
        let mut table = Self::default();
        for (slot_index, name) in named_slots {
            table.set_slot_name(*slot_index, name);
        }
        table
    }

    pub fn set_slot_name(&mut self, slot_index: u8, name: &str) {
        if slot_index >= LAYER_SLOT_COUNT {
            log::warn!(
                "{} ignoring name for out-of-range slot {}",
                LOG_TAG_LAYERS,
                slot_index
            );
            return;
        }

        self.slots[slot_index as usize] = Some(name.to_string());
    }

    pub fn slot_name(&self, slot_index: u8) -> Option<&str> {
        self.slots
            .get(slot_index as usize)
            .and_then(|slot| slot.as_deref())
    }
}

pub struct LayerTableResolver {
    table: LayerTable,
}

impl LayerTableResolver {
    pub fn with_table(table: LayerTable) -> Self {
        log::debug!("{} initializing layer table resolver", LOG_TAG_LAYERS);
        Self { table }
    }
}

impl LayerNameResolver for LayerTableResolver {
    fn named_layers_in_mask(&self, mask: LayerMask) -> Vec<NamedLayer> {
        let named_layers: Vec<NamedLayer> = mask
            .set_slot_indices()
            .into_iter()
            .filter_map(|slot_index| {
                self.table
                    .slot_name(slot_index)
                    .map(|name| NamedLayer::at_slot(slot_index, name))
            })
            .collect();

        log::debug!(
            "{} mask {:#010x} resolved to {} named layers",
            LOG_TAG_LAYERS,
            mask.bits(),
            named_layers.len()
        );

        named_layers
    }
}
