// Progression constants
pub const EXP_PER_LEVEL: u32 = 100;
pub const QUEST_GOLD_REWARD: u32 = 100;
pub const STARTING_LEVEL: u32 = 1;

// Main loop timing
pub const INPUT_POLL_MS: u64 = 50;

// Opening typewriter defaults
pub const TYPEWRITER_START_DELAY_MS: u64 = 500;
pub const TYPEWRITER_CHAR_INTERVAL_MS: u64 = 50;

// Background music defaults
pub const BGM_TEMPO_SECONDS: f64 = 0.2;
pub const BGM_VOLUME: f32 = 0.1;
/// Portion of each step during which the tone sounds.
pub const BGM_NOTE_GATE: f64 = 0.8;

// Persistence
pub const DATA_DIR_NAME: &str = ".localquest";
pub const OPENING_FLAG_FILE: &str = "opening_seen.json";
pub const CONFIG_FILE: &str = "config.toml";
pub const LOG_FILE: &str = "localquest.log";
