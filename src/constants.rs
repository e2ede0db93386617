// Wave template selection
pub const WAVE_TEMPLATE_OFFSET: u32 = 20;
pub const WAVE_TEMPLATE_STEP: u32 = 30;
pub const STARTING_WAVE: u32 = 1;

// Evil grunt ladder (raw wave index)
pub const GRUNT_WAVE_FIVE_SLOT: u32 = 60;
pub const GRUNT_WAVE_FOUR_SLOT: u32 = 45;
pub const GRUNT_WAVE_STRONG: u32 = 30;
pub const GRUNT_WAVE_THREE_AVG: u32 = 15;

// Daily mode difficulty curve
pub const DAILY_WAVE_BONUS: u32 = 30;
pub const DAILY_CURVE_DIVISOR: u32 = 5;

// Party level curve: 1 + dw/2 + (dw/25)^2, scaled by a strength multiplier
pub const LEVEL_CURVE_DIVISOR: f64 = 25.0;
pub const LEVEL_MULTIPLIER_MIN: f64 = 1.22;
pub const LEVEL_MULTIPLIER_MAX: f64 = 1.25;
pub const LEVEL_MULTIPLIER_FIXED_WAVE: u32 = 80;
pub const NIGHTMARE_FIXED_MULTIPLIER_WAVE: u32 = 25;
pub const NIGHTMARE_BOOSTED_LEVEL_WAVE: u32 = 300;
pub const NIGHTMARE_WAVE_BLOCK: u32 = 100;

// Ordinary trainer pool tier roll (0..512)
pub const TIER_ROLL_RANGE: u32 = 512;
pub const TIER_COMMON_MIN: u32 = 156;
pub const TIER_UNCOMMON_MIN: u32 = 32;
pub const TIER_RARE_MIN: u32 = 6;
pub const TIER_SUPER_RARE_MIN: u32 = 1;
pub const BALANCED_REROLL_ATTEMPTS: u32 = 10;

// Rival party scaling
pub const MAX_PARTY_SIZE: usize = 6;
pub const RIVAL_FILLER_END: usize = 4;
pub const RIVAL_RESERVED_SLOT: usize = 4;
pub const RIVAL_EVOLVED_SIGNATURE_STAGE: u32 = 3;
pub const RIVAL_STAGE_TWO_MUSIC_STAGE: u32 = 3;
pub const RIVAL_CLIMACTIC_MUSIC_STAGE: u32 = 5;
pub const RIVAL_BOSS_STAGE: u32 = 4;
pub const RIVAL_FINAL_STAGE: u32 = 6;
pub const RIVAL_MONEY_PER_STAGE: f64 = 0.25;
pub const RIVAL_DOUBLE_TERA_STAGE: u32 = 6;

// Boss segments by stage: (slot 0, slot 4, extra slot)
pub const STAGE_FOUR_LEAD_SEGMENTS: u8 = 3;
pub const STAGE_FIVE_SEGMENTS: (u8, u8) = (3, 2);
pub const FINAL_STAGE_SEGMENTS: (u8, u8, u8) = (4, 3, 2);

// Late-game alternate forms
pub const LATE_FORM_MIN_WAVE: u32 = 430;
pub const LATE_FORM_SECOND_WAVE: u32 = 450;

// Music
pub const RIVAL_BGM: &str = "battle_rival";
pub const RIVAL_STAGE_TWO_BGM: &str = "battle_rival_2";
pub const DEFAULT_TRAINER_BGM: &str = "battle_trainer";
pub const DEFAULT_VICTORY_BGM: &str = "victory_trainer";
pub const RIVAL_CLIMACTIC_BGM_OPTIONS: [&str; 19] = [
    "battle_bb_elite",
    "battle_aether_boss",
    "battle_aether_boss",
    "battle_legendary_giratina",
    "battle_legendary_deoxys",
    "battle_legendary_kanto",
    "battle_legendary_regis",
    "battle_legendary_arceus",
    "battle_final",
    "battle_skull_boss",
    "battle_rocket_boss",
    "battle_legendary_gro_kyo",
    "battle_legendary_kyurem",
    "battle_legendary_origin_forme",
    "battle_legendary_dusk_dawn",
    "battle_galactic_boss",
    "battle_legendary_glas_spec",
    "battle_legendary_zac_zam",
    "battle_rival_3",
];

// Dialogue
pub const RIVAL_DIALOGUE_ENTRIES: u32 = 12;
pub const VOID_DIALOGUE_OFFSET: u32 = 6;
pub const VOID_DIALOGUE_MIN: u32 = 7;
pub const VOID_DIALOGUE_MAX: u32 = 12;

// Rival encounter schedule
pub const RIVAL_FINAL_WAVE: u32 = 90;
pub const SECONDARY_FINAL_WAVE_END: u32 = 89;
pub const SECONDARY_RIVAL_COUNT: usize = 5;
pub const SCHEDULE_MAX_ATTEMPTS: u32 = 100;
