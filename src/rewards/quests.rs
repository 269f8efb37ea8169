use super::items::{boring_item, interesting_item};
use super::monsters::closest_monster;
use crate::content::monsters::MonsterRef;
use crate::core::dice::Dice;
use crate::lingo::grammar::{definite, indefinite};

/// A freshly generated quest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quest {
    pub caption: String,
    /// Set for extermination quests so encounters can favour the target.
    pub monster: Option<MonsterRef>,
}

pub fn next_quest(player_level: u32, dice: &mut impl Dice) -> Quest {
    let level = player_level as i64;
    match dice.below(5) {
        0 => {
            let monster = closest_monster(level, 4, dice);
            Quest {
                caption: format!("Exterminate {}", definite(monster.kind().name, 2)),
                monster: Some(monster),
            }
        }
        1 => Quest {
            caption: format!("Seek {}", definite(&interesting_item(dice), 1)),
            monster: None,
        },
        2 => Quest {
            caption: format!("Deliver this {}", boring_item(dice)),
            monster: None,
        },
        3 => Quest {
            caption: format!("Fetch me {}", indefinite(&boring_item(dice), 1)),
            monster: None,
        },
        4 => {
            let monster = closest_monster(level, 2, dice);
            Quest {
                caption: format!("Placate {}", definite(monster.kind().name, 2)),
                monster: None,
            }
        }
        other => unreachable!("below(5) returned {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dice::RngDice;

    #[test]
    fn test_all_quest_kinds_appear() {
        let mut dice = RngDice::seeded(42);
        let mut prefixes = std::collections::HashSet::new();
        for _ in 0..200 {
            let quest = next_quest(5, &mut dice);
            let verb = quest.caption.split(' ').next().unwrap().to_string();
            if verb == "Exterminate" {
                assert!(quest.monster.is_some());
            } else {
                assert!(quest.monster.is_none());
            }
            prefixes.insert(verb);
        }
        for verb in ["Exterminate", "Seek", "Deliver", "Fetch", "Placate"] {
            assert!(prefixes.contains(verb), "missing {}", verb);
        }
    }
}
