use super::equipment::EquipmentType;
use super::player::Player;
use super::stats::{Stats, StatsBuilder};
use crate::content::classes::{CLASSES, RACES};
use crate::core::constants::{STARTING_HAUBERK, STARTING_WEAPON};
use crate::core::dice::Dice;
use crate::lingo::names::generate_name;

/// A new level-1 character with the starting kit. Names are not validated.
pub fn create_player(name: &str, race: &str, class: &str, stats: Stats) -> Player {
    let birthday = chrono::Utc::now().timestamp();
    let mut player = Player::new(name, race, class, stats, birthday);
    player.equipment.put(EquipmentType::Weapon, STARTING_WEAPON);
    player.equipment.put(EquipmentType::Hauberk, STARTING_HAUBERK);
    player
}

/// A character with a generated name, random race and class, and one
/// fresh stat roll.
pub fn random_player(dice: &mut impl Dice) -> Player {
    let name = generate_name(dice);
    let race = dice.pick(RACES).name;
    let class = dice.pick(CLASSES).name;
    let stats = StatsBuilder::new().roll(dice);
    create_player(&name, race, class, stats)
}
