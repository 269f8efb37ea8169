// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 100;
pub const MS_PER_SECOND: u64 = 1000;
pub const AUTOSAVE_INTERVAL_SECONDS: i64 = 300;

// Intro sequence installed by the first tick
pub const LOADING_TASK_MS: u64 = 2000;
pub const PROLOGUE_PLOT_MAX: f64 = 28.0;
pub const INTRO_TASKS: [(&str, u64); 4] = [
    ("Experiencing an enigmatic and foreboding night vision", 10),
    (
        "Much is revealed about that wise old bastard you'd underestimated",
        6,
    ),
    (
        "A shocking series of events leaves you alone and bewildered, but resolute",
        6,
    ),
    (
        "Drawing upon an unrealized reserve of determination, you set out on a long and dangerous journey",
        4,
    ),
];
pub const INTRO_PLOT_SECONDS: u64 = 2;

// Routine task durations (seconds)
pub const MARKET_TRIP_SECONDS: u64 = 4;
pub const KILLING_FIELDS_TRIP_SECONDS: u64 = 4;
pub const BUY_SECONDS: u64 = 5;
pub const SELL_SECONDS: u64 = 1;

// Kill task duration: (KILL_TIME_FACTOR * monster level * 1000) / player level
pub const KILL_TIME_FACTOR: u64 = 2 * 3;

// Character
pub const STARTING_LEVEL: u32 = 1;
pub const BASE_CARRY_CAPACITY: u32 = 10;
pub const STARTING_WEAPON: &str = "Sharp Rock";
pub const STARTING_HAUBERK: &str = "-3 Burlap";

// Quests and plot
pub const QUEST_HISTORY_LIMIT: usize = 100;
pub const QUEST_BASE_LENGTH: u64 = 50;
pub const QUEST_LENGTH_SPREAD: u64 = 1000;
pub const ACT_BASE_SECONDS: f64 = 60.0 * 60.0;
pub const ACT_SECONDS_PER_ACT: f64 = 5.0;

// Encounter generation
pub const NPC_ENCOUNTER_ODDS: (u64, u64) = (1, 25);
pub const QUEST_MONSTER_ODDS: (u64, u64) = (1, 4);
pub const LEVEL_DRIFT_ODDS: (u64, u64) = (2, 5);
pub const MONSTER_SAMPLES: usize = 6;
pub const EQUIPMENT_SAMPLES: usize = 6;
pub const MAX_EQUIPMENT_MODIFIERS: usize = 2;

/// Seconds of kill time needed to leave `level`.
pub fn level_up_time(level: u32) -> f64 {
    20.0 * level as f64 * 60.0
}

/// Gold needed before the character will go shopping.
pub fn equip_price(level: u32) -> u64 {
    let level = level as u64;
    5 * level * level + 10 * level + 20
}

/// Length of the plot bar for `act`, in seconds of kill time.
pub fn act_length(act: u32) -> f64 {
    ACT_BASE_SECONDS * (1.0 + ACT_SECONDS_PER_ACT * act as f64)
}
