//! Equipment presets and the modifier words that dress them up.

/// A named equipment template with its intrinsic quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub quality: i64,
}

/// An adjective that shifts an item's effective quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modifier {
    pub name: &'static str,
    pub quality: i64,
}

const fn p(name: &'static str, quality: i64) -> Preset {
    Preset { name, quality }
}

const fn m(name: &'static str, quality: i64) -> Modifier {
    Modifier { name, quality }
}

pub static WEAPONS: &[Preset] = &[
    p("Stick", 0),
    p("Broken Bottle", 1),
    p("Shiv", 1),
    p("Sprig", 1),
    p("Oxgoad", 1),
    p("Eelspear", 2),
    p("Bowie Knife", 2),
    p("Claw Hammer", 2),
    p("Handpeen", 2),
    p("Andiron", 3),
    p("Hatchet", 3),
    p("Tomahawk", 3),
    p("Hackbarm", 3),
    p("Crowbar", 4),
    p("Mace", 4),
    p("Battleadze", 4),
    p("Leafmace", 5),
    p("Shortsword", 5),
    p("Longiron", 5),
    p("Poachard", 5),
    p("Baselard", 5),
    p("Whinyard", 6),
    p("Blunderbuss", 6),
    p("Longsword", 6),
    p("Crankbow", 6),
    p("Blibo", 7),
    p("Broadsword", 7),
    p("Kreen", 7),
    p("Warhammer", 7),
    p("Morning Star", 8),
    p("Pole-adze", 8),
    p("Spontoon", 8),
    p("Bastard Sword", 9),
    p("Peen-arm", 9),
    p("Culverin", 10),
    p("Lance", 10),
    p("Halberd", 11),
    p("Poleax", 12),
    p("Bandyclef", 15),
];

pub static SHIELDS: &[Preset] = &[
    p("Parasol", 0),
    p("Pie Plate", 1),
    p("Garbage Can Lid", 2),
    p("Buckler", 3),
    p("Plexiglass", 4),
    p("Fender", 4),
    p("Round Shield", 5),
    p("Carapace", 5),
    p("Butterfly Shield", 6),
    p("Targe", 6),
    p("Kite Shield", 7),
    p("Pavise", 8),
    p("Tower Shield", 9),
    p("Baroque Shield", 11),
    p("Aegis", 12),
    p("Magnetic Field", 18),
];

pub static ARMORS: &[Preset] = &[
    p("Lace", 1),
    p("Macrame", 2),
    p("Burlap", 3),
    p("Canvas", 4),
    p("Flannel", 5),
    p("Chamois", 6),
    p("Pleathers", 7),
    p("Leathers", 8),
    p("Bearskin", 9),
    p("Ringmail", 10),
    p("Scale Mail", 12),
    p("Chainmail", 14),
    p("Splint Mail", 15),
    p("Platemail", 16),
    p("ABS", 17),
    p("Kevlar", 18),
    p("Titanium", 19),
    p("Mithril Mail", 20),
    p("Diamond Mail", 25),
    p("Plasma", 30),
];

pub static OFFENSE_ATTRIB: &[Modifier] = &[
    m("Polished", 1),
    m("Serrated", 1),
    m("Heavy", 1),
    m("Pronged", 2),
    m("Steely", 2),
    m("Vicious", 3),
    m("Venomed", 4),
    m("Stabbity", 4),
    m("Dancing", 5),
    m("Invisible", 6),
    m("Vorpal", 7),
];

pub static DEFENSE_ATTRIB: &[Modifier] = &[
    m("Studded", 1),
    m("Banded", 2),
    m("Gilded", 2),
    m("Festooned", 3),
    m("Holy", 4),
    m("Cambric", 1),
    m("Fine", 4),
    m("Impressive", 5),
    m("Custom", 3),
];

pub static OFFENSE_BAD: &[Modifier] = &[
    m("Dull", -2),
    m("Tarnished", -1),
    m("Rusty", -3),
    m("Padded", -5),
    m("Bent", -4),
    m("Mini", -4),
    m("Rubber", -6),
    m("Nerf", -7),
    m("Unbalanced", -2),
];

pub static DEFENSE_BAD: &[Modifier] = &[
    m("Holey", -1),
    m("Patched", -1),
    m("Threadbare", -2),
    m("Faded", -1),
    m("Rusty", -3),
    m("Motheaten", -3),
    m("Mildewed", -2),
    m("Torn", -3),
    m("Dented", -3),
    m("Cursed", -5),
    m("Plastic", -4),
    m("Cracked", -4),
    m("Warped", -3),
    m("Corroded", -3),
];
