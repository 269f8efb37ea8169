//! The bestiary: every monster the encounter generator can field.

use serde::{Deserialize, Serialize};

/// Loot marker for monsters that drop a special item instead of a body part.
pub const TREASURE: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonsterKind {
    pub name: &'static str,
    pub level: i64,
    /// Body part dropped on death, or [`TREASURE`].
    pub loot: &'static str,
}

impl MonsterKind {
    pub fn drops_treasure(&self) -> bool {
        self.loot == TREASURE
    }
}

/// Stable reference into [`MONSTERS`], stored in tasks and quest books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonsterRef(pub usize);

impl MonsterRef {
    pub fn kind(self) -> &'static MonsterKind {
        &MONSTERS[self.0]
    }
}

const fn mk(name: &'static str, level: i64, loot: &'static str) -> MonsterKind {
    MonsterKind { name, level, loot }
}

pub static MONSTERS: &[MonsterKind] = &[
    mk("Anhkheg", 6, "chitin"),
    mk("Ant", 0, "antenna"),
    mk("Ape", 4, "ass"),
    mk("Baluchitherium", 14, "ear"),
    mk("Beholder", 10, "eyestalk"),
    mk("Black Pudding", 10, "saliva"),
    mk("Blink Dog", 4, "eyelid"),
    mk("Cub Scout", 1, "neckerchief"),
    mk("Girl Scout", 2, "cookie"),
    mk("Boy Scout", 3, "merit badge"),
    mk("Eagle Scout", 4, "merit badge"),
    mk("Bugbear", 3, "skin"),
    mk("Bugboar", 3, "tusk"),
    mk("Boogie", 3, "slime"),
    mk("Camel", 2, "hump"),
    mk("Carrion Crawler", 3, "egg"),
    mk("Catoblepas", 6, "neck"),
    mk("Centaur", 4, "rib"),
    mk("Centipede", 0, "leg"),
    mk("Cockatrice", 5, "wattle"),
    mk("Couatl", 9, "wing"),
    mk("Crayfish", 0, "antenna"),
    mk("Demogorgon", 53, "tentacle"),
    mk("Jubilex", 17, "gel"),
    mk("Manes", 1, "tooth"),
    mk("Orcus", 27, "wand"),
    mk("Succubus", 6, "bra"),
    mk("Vrock", 8, "neck"),
    mk("Hezrou", 9, "leg"),
    mk("Glabrezu", 10, "collar"),
    mk("Nalfeshnee", 11, "tusk"),
    mk("Marilith", 7, "arm"),
    mk("Balor", 8, "whip"),
    mk("Yeenoghu", 25, "flail"),
    mk("Asmodeus", 52, "leathers"),
    mk("Baalzebul", 43, "pants"),
    mk("Barbed Devil", 8, "flame"),
    mk("Bone Devil", 9, "hook"),
    mk("Dispater", 30, "matches"),
    mk("Erinyes", 6, "thong"),
    mk("Geryon", 30, "cornucopia"),
    mk("Malebranche", 5, "fork"),
    mk("Ice Devil", 11, "snow"),
    mk("Lemure", 3, "blob"),
    mk("Pit Fiend", 13, "seed"),
    mk("Ankylosaurus", 9, "tail"),
    mk("Brontosaurus", 30, "brain"),
    mk("Diplodocus", 24, "fin"),
    mk("Elasmosaurus", 15, "neck"),
    mk("Gorgosaurus", 13, "arm"),
    mk("Iguanadon", 6, "thumb"),
    mk("Megalosaurus", 12, "jaw"),
    mk("Monoclonius", 8, "horn"),
    mk("Pentasaurus", 12, "head"),
    mk("Stegosaurus", 18, "plate"),
    mk("Triceratops", 16, "horn"),
    mk("Tyranosaurus Rex", 18, "forearm"),
    mk("Djinn", 7, "lamp"),
    mk("Doppelganger", 4, "face"),
    mk("Black Dragon", 7, TREASURE),
    mk("Plaid Dragon", 7, "sporrin"),
    mk("Blue Dragon", 9, TREASURE),
    mk("Beige Dragon", 9, TREASURE),
    mk("Brass Dragon", 7, "pole"),
    mk("Dragon Turtle", 13, "shell"),
    mk("Bronze Dragon", 9, "medal"),
    mk("Chromatic Dragon", 16, "scale"),
    mk("Copper Dragon", 8, "loafer"),
    mk("Gold Dragon", 8, "filling"),
    mk("Green Dragon", 8, TREASURE),
    mk("Platinum Dragon", 21, TREASURE),
    mk("Red Dragon", 10, "cocktail"),
    mk("Silver Dragon", 10, TREASURE),
    mk("White Dragon", 6, "tooth"),
    mk("Dryad", 2, "acorn"),
    mk("Dwarf", 1, "drawers"),
    mk("Efreet", 10, "cinder"),
    mk("Sandman", 8, "sand"),
    mk("Water Elemental", 8, "puddle"),
    mk("Air Elemental", 8, "smoke"),
    mk("Earth Elemental", 8, "pebble"),
    mk("Fire Elemental", 8, "cinder"),
    mk("Ettin", 10, "fur"),
    mk("Gelatinous Cube", 4, "jam"),
    mk("Ghast", 4, "vomit"),
    mk("Ghost", 10, TREASURE),
    mk("Ghoul", 2, "muscle"),
    mk("Humidity Giant", 12, "drops"),
    mk("Beef Giant", 11, "steak"),
    mk("Quartz Giant", 10, "crystal"),
    mk("Porcelain Giant", 9, "fixture"),
    mk("Rice Giant", 8, "grain"),
    mk("Cloud Giant", 12, "condensation"),
    mk("Fire Giant", 11, "cigarettes"),
    mk("Frost Giant", 10, "snowman"),
    mk("Hill Giant", 8, "corpse"),
    mk("Stone Giant", 9, "hatchling"),
    mk("Storm Giant", 15, "barometer"),
    mk("Gnoll", 2, "collar"),
    mk("Gnome", 1, "hat"),
    mk("Goblin", 1, "ear"),
    mk("Grid Bug", 1, "carapace"),
    mk("Gorgon", 8, "horn"),
    mk("Gray Ooze", 3, "gravy"),
    mk("Green Slime", 2, "sample"),
    mk("Griffon", 7, "nest"),
    mk("Banshee", 7, "larynx"),
    mk("Harpy", 3, "mascara"),
    mk("Hell Hound", 5, "tongue"),
    mk("Hippocampus", 4, "mane"),
    mk("Hippogriff", 3, "egg"),
    mk("Hobgoblin", 1, "patella"),
    mk("Homunculus", 2, "fluid"),
    mk("Hydra", 8, "gyrum"),
    mk("Imp", 2, "tail"),
    mk("Invisible Stalker", 8, TREASURE),
    mk("Iron Peasant", 3, "chaff"),
    mk("Jumpskin", 3, "shin"),
    mk("Kobold", 0, "nose"),
    mk("Leprechaun", 1, "wallet"),
    mk("Leucrotta", 6, "hoof"),
    mk("Lich", 11, "crown"),
    mk("Lizard Man", 2, "tail"),
    mk("Lurker", 10, "sac"),
    mk("Manticore", 6, "spike"),
    mk("Mastodon", 12, "tusk"),
    mk("Medusa", 4, "eye"),
    mk("Multicell", 2, "dendrite"),
    mk("Pirate", 1, "booty"),
    mk("Berserker", 1, "shirt"),
    mk("Caveman", 2, "club"),
    mk("Dervish", 1, "robe"),
    mk("Merman", 1, "trident"),
    mk("Mermaid", 1, "gills"),
    mk("Mimic", 9, "hinge"),
    mk("Mind Flayer", 8, "tentacle"),
    mk("Minotaur", 6, "map"),
    mk("Yellow Mold", 1, "spore"),
    mk("Morkoth", 7, "teeth"),
    mk("Mummy", 6, "gauze"),
    mk("Naga", 9, "rattle"),
    mk("Nebbish", 1, "belly"),
    mk("Neo-Otyugh", 11, "organ"),
    mk("Nixie", 1, "webbing"),
    mk("Nymph", 3, "hanky"),
    mk("Ochre Jelly", 6, "nucleus"),
    mk("Octopus", 2, "beak"),
    mk("Ogre", 4, "talon"),
    mk("Ogre Mage", 5, "apparel"),
    mk("Orc", 1, "snout"),
    mk("Otyugh", 7, "organ"),
    mk("Owlbear", 5, "feather"),
    mk("Pegasus", 4, "aileron"),
    mk("Peryton", 4, "antler"),
    mk("Piercer", 3, "tip"),
    mk("Pixie", 1, "dust"),
    mk("Man-o-war", 3, "tentacle"),
    mk("Purple Worm", 15, "dung"),
    mk("Quasit", 3, "tail"),
    mk("Rakshasa", 7, "pajamas"),
    mk("Rat", 0, "tail"),
    mk("Remorhaz", 11, "protrusion"),
    mk("Roc", 18, "wing"),
    mk("Roper", 11, "twine"),
    mk("Rot Grub", 1, "eggsac"),
    mk("Rust Monster", 5, "shavings"),
    mk("Satyr", 5, "hoof"),
    mk("Sea Hag", 3, "wart"),
    mk("Silkie", 3, "fur"),
    mk("Shadow", 3, "silhouette"),
    mk("Shambling Mound", 10, "mulch"),
    mk("Shedu", 9, "hoof"),
    mk("Shrieker", 2, "stalk"),
    mk("Skeleton", 1, "clavicle"),
    mk("Spectre", 7, "vestige"),
    mk("Sphinx", 10, "paw"),
    mk("Spider", 0, "web"),
    mk("Sprite", 1, "can"),
    mk("Stirge", 1, "proboscis"),
    mk("Stun Bear", 5, "tooth"),
    mk("Stun Worm", 2, "trode"),
    mk("Su-monster", 5, "tail"),
    mk("Sylph", 3, "thigh"),
    mk("Titan", 20, "sandal"),
    mk("Trapper", 12, "shag"),
    mk("Treant", 10, "acorn"),
    mk("Triton", 3, "scale"),
    mk("Troglodyte", 2, "tail"),
    mk("Troll", 6, "hide"),
    mk("Umber Hulk", 8, "claw"),
    mk("Unicorn", 4, "blood"),
    mk("Vampire", 8, "pancreas"),
    mk("Wight", 4, "lung"),
    mk("Will-o'-the-Wisp", 9, "wisp"),
    mk("Wraith", 5, "finger"),
    mk("Wyvern", 7, "wing"),
    mk("Xorn", 7, "jaw"),
    mk("Yeti", 4, "fur"),
    mk("Zombie", 2, "forehead"),
    mk("Wasp", 0, "stinger"),
    mk("Giant Rat", 1, "tail"),
    mk("Mosquito", 0, "proboscis"),
    mk("Fungi", 0, "spore"),
    mk("Orange Jelly", 0, "juice"),
    mk("Blue Jelly", 0, "juice"),
    mk("Slow Loris", 1, "dander"),
    mk("Zardoz", 14, "cocktail"),
    mk("Hagbeast", 5, "bandana"),
    mk("Basilisk", 6, "glare"),
    mk("Wereboar", 4, "tusk"),
    mk("Werebear", 6, "pelt"),
    mk("Wererat", 3, "tail"),
    mk("Werewolf", 5, "pelt"),
    mk("Warg", 4, "fang"),
    mk("Axebeak", 3, "beak"),
    mk("Clay Golem", 11, "clay"),
    mk("Flesh Golem", 9, "stitches"),
    mk("Iron Golem", 18, "filings"),
    mk("Stone Golem", 14, "chip"),
    mk("Nightmare", 6, "hoof"),
    mk("Night Hag", 8, "shawl"),
    mk("Kraken", 20, "ink"),
    mk("Leviathan", 30, "fin"),
];
