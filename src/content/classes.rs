//! Playable races and classes.

/// A playable race.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Race {
    pub name: &'static str,
}

/// A playable class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterClass {
    pub name: &'static str,
}

pub static RACES: &[Race] = &[
    Race { name: "Half Orc" },
    Race { name: "Half Man" },
    Race { name: "Half Halfling" },
    Race { name: "Double Hobbit" },
    Race { name: "Hob-Hobbit" },
    Race { name: "Low Elf" },
    Race { name: "Dung Elf" },
    Race { name: "Talking Pony" },
    Race { name: "Gyrognome" },
    Race { name: "Lesser Dwarf" },
    Race { name: "Crested Dwarf" },
    Race { name: "Eel Man" },
    Race { name: "Panda Man" },
    Race { name: "Trans-Kobold" },
    Race { name: "Enchanted Motorcycle" },
    Race { name: "Will o' the Wisp" },
    Race { name: "Battle-Finch" },
    Race { name: "Double Wookiee" },
    Race { name: "Skraeling" },
    Race { name: "Demicanine" },
    Race { name: "Land Squid" },
];

pub static CLASSES: &[CharacterClass] = &[
    CharacterClass { name: "Ur-Paladin" },
    CharacterClass { name: "Voodoo Princess" },
    CharacterClass { name: "Robot Monk" },
    CharacterClass { name: "Mu-Fu Monk" },
    CharacterClass { name: "Mage Illusioner" },
    CharacterClass { name: "Shiv-Knight" },
    CharacterClass { name: "Inner Mason" },
    CharacterClass { name: "Fighter/Organist" },
    CharacterClass { name: "Puma Burglar" },
    CharacterClass { name: "Runeloremaster" },
    CharacterClass { name: "Hunter Strangler" },
    CharacterClass { name: "Battle-Felon" },
    CharacterClass { name: "Tickle-Mimic" },
    CharacterClass { name: "Slow Poisoner" },
    CharacterClass { name: "Bastard Lunatic" },
    CharacterClass { name: "Lowling" },
    CharacterClass { name: "Birdrider" },
    CharacterClass { name: "Vermineer" },
];

pub fn find_race(name: &str) -> Option<&'static Race> {
    RACES.iter().find(|race| race.name == name)
}

pub fn find_class(name: &str) -> Option<&'static CharacterClass> {
    CLASSES.iter().find(|class| class.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_race_and_class_names_unique() {
        for (i, race) in RACES.iter().enumerate() {
            assert!(RACES[i + 1..].iter().all(|r| r.name != race.name));
        }
        for (i, class) in CLASSES.iter().enumerate() {
            assert!(CLASSES[i + 1..].iter().all(|c| c.name != class.name));
        }
    }

    #[test]
    fn test_find_by_name() {
        assert_eq!(find_race("Land Squid").map(|r| r.name), Some("Land Squid"));
        assert!(find_race("Hobbit").is_none());
        assert_eq!(find_class("Vermineer").map(|c| c.name), Some("Vermineer"));
        assert!(find_class("vermineer").is_none());
    }
}
