use crate::core::signal::Signal;
use crate::lingo::numerals::to_roman;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    pub name: String,
    pub level: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpellEvent {
    Added { name: String, level: u32 },
    Changed { name: String, level: u32 },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpellBook {
    spells: Vec<Spell>,
    #[serde(skip)]
    pub change: Signal<SpellEvent>,
}

impl PartialEq for SpellBook {
    fn eq(&self, other: &Self) -> bool {
        self.spells == other.spells
    }
}

impl SpellBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spells(&self) -> &[Spell] {
        &self.spells
    }

    pub fn level_of(&self, name: &str) -> u32 {
        self.spells
            .iter()
            .find(|s| s.name == name)
            .map_or(0, |s| s.level)
    }

    /// Learns a spell, or raises its level if already known.
    pub fn add(&mut self, name: &str, levels: u32) {
        let event = match self.spells.iter_mut().find(|s| s.name == name) {
            Some(spell) => {
                spell.level += levels;
                SpellEvent::Changed {
                    name: spell.name.clone(),
                    level: spell.level,
                }
            }
            None => {
                self.spells.push(Spell {
                    name: name.to_string(),
                    level: levels,
                });
                SpellEvent::Added {
                    name: name.to_string(),
                    level: levels,
                }
            }
        };
        self.change.emit(&event);
    }

    /// "<name> <Roman level>" of the highest-level spell; earliest learned
    /// wins ties. Empty when nothing is known yet.
    pub fn best(&self) -> String {
        let mut best: Option<&Spell> = None;
        for spell in &self.spells {
            if best.map_or(true, |b| spell.level > b.level) {
                best = Some(spell);
            }
        }
        best.map(|s| format!("{} {}", s.name, to_roman(s.level as i64)))
            .unwrap_or_default()
    }

    pub fn resync(&mut self) {
        let spells = self.spells.clone();
        for spell in spells {
            let event = SpellEvent::Changed {
                name: spell.name,
                level: spell.level,
            };
            self.change.emit(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_existing_raises_level() {
        let mut book = SpellBook::new();
        book.add("Slime Finger", 1);
        book.add("Slime Finger", 1);
        assert_eq!(book.spells().len(), 1);
        assert_eq!(book.level_of("Slime Finger"), 2);
    }

    #[test]
    fn test_best_picks_highest_level() {
        let mut book = SpellBook::new();
        assert_eq!(book.best(), "");
        book.add("Slime Finger", 1);
        book.add("Rabbit Punch", 3);
        book.add("Hastiness", 3);
        assert_eq!(book.best(), "Rabbit Punch III");
    }
}
