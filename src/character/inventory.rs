//! Gold, loot, and how much the character is hauling.

use crate::core::bar::Bar;
use crate::core::signal::Signal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub quantity: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryEvent {
    GoldChanged { gold: u64 },
    ItemAdded { name: String, quantity: u64 },
    ItemChanged { name: String, quantity: u64 },
    ItemRemoved { name: String },
}

/// Ordered item list with unique names plus a gold purse.
///
/// `encumbrance` tracks the total item count (gold weighs nothing) against
/// the carry capacity, and is updated after every item mutation. Rewards can
/// push the count past capacity; the bar then stays clamped at capacity, so
/// use [`Inventory::total_quantity`] for the true load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    gold: u64,
    items: Vec<Item>,
    pub encumbrance: Bar,
    #[serde(skip)]
    pub change: Signal<InventoryEvent>,
}

impl PartialEq for Inventory {
    fn eq(&self, other: &Self) -> bool {
        self.gold == other.gold
            && self.items == other.items
            && self.encumbrance == other.encumbrance
    }
}

impl Inventory {
    pub fn new(capacity: u32) -> Self {
        Self {
            gold: 0,
            items: Vec::new(),
            encumbrance: Bar::new(capacity as f64),
            change: Signal::new(),
        }
    }

    pub fn gold(&self) -> u64 {
        self.gold
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn quantity(&self, name: &str) -> u64 {
        self.items
            .iter()
            .find(|item| item.name == name)
            .map_or(0, |item| item.quantity)
    }

    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Stacks onto an existing entry with the same name, or appends a new one.
    pub fn add(&mut self, name: &str, quantity: u64) {
        let event = match self.items.iter_mut().find(|item| item.name == name) {
            Some(item) => {
                item.quantity += quantity;
                InventoryEvent::ItemChanged {
                    name: item.name.clone(),
                    quantity: item.quantity,
                }
            }
            None => {
                self.items.push(Item {
                    name: name.to_string(),
                    quantity,
                });
                InventoryEvent::ItemAdded {
                    name: name.to_string(),
                    quantity,
                }
            }
        };
        self.change.emit(&event);
        self.sync_encumbrance();
    }

    /// Takes the oldest entry out of the inventory.
    pub fn pop_first(&mut self) -> Option<Item> {
        if self.items.is_empty() {
            return None;
        }
        let item = self.items.remove(0);
        let event = InventoryEvent::ItemRemoved {
            name: item.name.clone(),
        };
        self.change.emit(&event);
        self.sync_encumbrance();
        Some(item)
    }

    pub fn add_gold(&mut self, amount: u64) {
        if amount == 0 {
            return;
        }
        self.gold += amount;
        self.emit_gold();
    }

    pub fn spend_gold(&mut self, amount: u64) {
        debug_assert!(amount <= self.gold, "spending more gold than owned");
        self.gold = self.gold.saturating_sub(amount);
        self.emit_gold();
    }

    pub fn set_capacity(&mut self, capacity: u32) {
        let carried = self.total_quantity() as f64;
        self.encumbrance.reset(capacity as f64, carried);
    }

    pub fn is_overloaded(&self) -> bool {
        self.encumbrance.done()
    }

    pub fn resync(&mut self) {
        self.emit_gold();
        let items = self.items.clone();
        for item in items {
            let event = InventoryEvent::ItemChanged {
                name: item.name,
                quantity: item.quantity,
            };
            self.change.emit(&event);
        }
        self.encumbrance.resync();
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.change.set_muted(muted);
        self.encumbrance.change.set_muted(muted);
    }

    /// Clamping wins over equality: position is `min(total_quantity, max)`.
    fn sync_encumbrance(&mut self) {
        let carried = self.total_quantity() as f64;
        self.encumbrance.reposition(carried);
    }

    fn emit_gold(&mut self) {
        let event = InventoryEvent::GoldChanged { gold: self.gold };
        self.change.emit(&event);
    }
}
