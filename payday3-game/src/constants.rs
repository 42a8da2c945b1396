//! Static content tables for the PAYDAY 3 plugin.
//!
//! Base lists never change at runtime; everything option-dependent is
//! layered on top of these in [`crate::game`].

// Descriptor ---------------------------------------------------------------
pub const GAME_NAME: &str = "PAYDAY 3";

// Datasets -----------------------------------------------------------------
pub const DIFFICULTY_BASE: [&str; 3] = ["Normal", "Hard", "Very Hard"];
pub const DIFFICULTY_OVERKILL: &str = "Overkill";

pub const LOUD_HEIST_BASE: [&str; 13] = [
    "No Rest For The Wicked",
    "Road Rage",
    "Dirty Ice",
    "Rock The Cradle",
    "Under The Surphaze",
    "Gold & Sharke",
    "99 Boxes",
    "Touch The Sky",
    "Cook Off",
    "Diamond District",
    "First World Bank",
    "Bank Withdrawal",
    "Search And Seizure",
];

pub const STEALTH_HEIST_BASE: [&str; 12] = [
    "No Rest For The Wicked",
    "Dirty Ice",
    "Rock The Cradle",
    "Under The Surphaze",
    "Gold & Sharke",
    "99 Boxes",
    "Touch The Sky",
    "Turbid Station",
    "Diamond District",
    "First World Bank",
    "Bank Withdrawal",
    "Search And Seizure",
];

// Option keys --------------------------------------------------------------
pub const OPT_INCLUDE_OVERKILL: &str = "payday_3_include_overkill";
pub const OPT_DLC_OWNED: &str = "payday_3_dlc_owned";
pub const OPT_STEALTH_WEIGHT: &str = "payday_3_stealth_weight";
pub const OPT_LOUD_WEIGHT: &str = "payday_3_loud_weight";
pub const OPT_WEIGHTING: &str = "payday_3_weighting";

// Weights ------------------------------------------------------------------
pub const WEIGHT_RANGE_START: u32 = 0;
pub const WEIGHT_RANGE_END: u32 = 100;
pub const WEIGHT_DEFAULT: u32 = 50;
pub const FIXED_LOUD_WEIGHT: u32 = 3;
pub const FIXED_STEALTH_WEIGHT: u32 = 1;

// Template labels and placeholders -----------------------------------------
pub const LOUD_TEMPLATE_LABEL: &str = "Beat LOUDHEIST on DIFFICULTY in Loud";
pub const STEALTH_TEMPLATE_LABEL: &str = "Beat STEALTHHEIST on DIFFICULTY in Stealth";
pub const PLACEHOLDER_LOUD_HEIST: &str = "LOUDHEIST";
pub const PLACEHOLDER_STEALTH_HEIST: &str = "STEALTHHEIST";
pub const PLACEHOLDER_DIFFICULTY: &str = "DIFFICULTY";
