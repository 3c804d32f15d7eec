// Static game content the generator draws from

pub const WEAPONS: [&str; 15] = [
    "AK-47",
    "M4A4",
    "M4A1-S",
    "AWP",
    "Desert Eagle",
    "P90",
    "UMP-45",
    "MP7",
    "Glock-18",
    "USP-S",
    "FAMAS",
    "Galil AR",
    "SSG 08",
    "Knife",
    "Grenade",
];

pub const MAPS: [&str; 8] = [
    "de_dust2",
    "de_inferno",
    "de_mirage",
    "de_nuke",
    "de_train",
    "de_overpass",
    "de_vertigo",
    "de_ancient",
];

pub(crate) const NAME_ADJECTIVES: [&str; 16] = [
    "swift", "silent", "lucky", "crazy", "frozen", "brave", "shadow", "rapid", "iron", "toxic",
    "cosmic", "rusty", "golden", "sneaky", "wild", "dark",
];

pub(crate) const NAME_NOUNS: [&str; 16] = [
    "falcon", "wolf", "ninja", "tiger", "viper", "ghost", "panda", "raven", "sniper", "badger",
    "comet", "otter", "knight", "hawk", "lynx", "mango",
];
