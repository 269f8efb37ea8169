use crate::content::items::{BORING_ITEMS, ITEM_ATTRIB, ITEM_OFS, SPECIALS};
use crate::core::dice::Dice;

/// "<attribute> <special>", e.g. "Golden Mirror".
pub fn interesting_item(dice: &mut impl Dice) -> String {
    format!("{} {}", dice.pick(ITEM_ATTRIB), dice.pick(SPECIALS))
}

/// "<attribute> <special> of <suffix>", the loot that sells for a bonus.
pub fn special_item(dice: &mut impl Dice) -> String {
    let base = interesting_item(dice);
    format!("{} of {}", base, dice.pick(ITEM_OFS))
}

pub fn boring_item(dice: &mut impl Dice) -> String {
    dice.pick(BORING_ITEMS).to_string()
}
