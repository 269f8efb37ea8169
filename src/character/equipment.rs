use crate::core::signal::Signal;
use serde::{Deserialize, Serialize};

pub const NUM_EQUIPMENT_SLOTS: usize = 11;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EquipmentType {
    Weapon,
    Shield,
    Helm,
    Hauberk,
    Brassairts,
    Vambraces,
    Gauntlets,
    Gambeson,
    Cuisses,
    Greaves,
    Sollerets,
}

impl EquipmentType {
    pub fn all() -> [EquipmentType; NUM_EQUIPMENT_SLOTS] {
        [
            EquipmentType::Weapon,
            EquipmentType::Shield,
            EquipmentType::Helm,
            EquipmentType::Hauberk,
            EquipmentType::Brassairts,
            EquipmentType::Vambraces,
            EquipmentType::Gauntlets,
            EquipmentType::Gambeson,
            EquipmentType::Cuisses,
            EquipmentType::Greaves,
            EquipmentType::Sollerets,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            EquipmentType::Weapon => "Weapon",
            EquipmentType::Shield => "Shield",
            EquipmentType::Helm => "Helm",
            EquipmentType::Hauberk => "Hauberk",
            EquipmentType::Brassairts => "Brassairts",
            EquipmentType::Vambraces => "Vambraces",
            EquipmentType::Gauntlets => "Gauntlets",
            EquipmentType::Gambeson => "Gambeson",
            EquipmentType::Cuisses => "Cuisses",
            EquipmentType::Greaves => "Greaves",
            EquipmentType::Sollerets => "Sollerets",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentChange {
    pub slot: EquipmentType,
    pub item: String,
}

/// What the character is wearing, one optional item name per slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Equipment {
    slots: [Option<String>; NUM_EQUIPMENT_SLOTS],
    /// Display line for the most recently equipped piece.
    pub best: String,
    #[serde(skip)]
    pub change: Signal<EquipmentChange>,
}

impl PartialEq for Equipment {
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots && self.best == other.best
    }
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipmentType) -> Option<&str> {
        self.slots[slot.index()].as_deref()
    }

    pub fn put(&mut self, slot: EquipmentType, item: &str) {
        self.slots[slot.index()] = Some(item.to_string());
        self.best = match slot {
            EquipmentType::Weapon => item.to_string(),
            _ => format!("{} {}", item, slot.name()),
        };
        let event = EquipmentChange {
            slot,
            item: item.to_string(),
        };
        self.change.emit(&event);
    }

    pub fn iter(&self) -> impl Iterator<Item = (EquipmentType, Option<&str>)> + '_ {
        EquipmentType::all()
            .into_iter()
            .map(move |slot| (slot, self.get(slot)))
    }

    pub fn resync(&mut self) {
        for slot in EquipmentType::all() {
            if let Some(item) = self.slots[slot.index()].clone() {
                let event = EquipmentChange { slot, item };
                self.change.emit(&event);
            }
        }
    }
}
