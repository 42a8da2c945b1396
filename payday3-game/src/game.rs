//! PAYDAY 3 plugin definition: datasets and objective templates.
use crate::Game;
use crate::constants::{
    DIFFICULTY_BASE, DIFFICULTY_OVERKILL, FIXED_LOUD_WEIGHT, FIXED_STEALTH_WEIGHT, GAME_NAME,
    LOUD_HEIST_BASE, LOUD_TEMPLATE_LABEL, PLACEHOLDER_DIFFICULTY, PLACEHOLDER_LOUD_HEIST,
    PLACEHOLDER_STEALTH_HEIST, STEALTH_HEIST_BASE, STEALTH_TEMPLATE_LABEL,
};
use crate::options::{Payday3Options, Weighting};
use crate::platform::GamePlatform;
use crate::templates::ObjectiveTemplate;
use serde::Serialize;

/// Datasets a PAYDAY 3 template can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetId {
    Difficulty,
    LoudHeist,
    StealthHeist,
}

impl DatasetId {
    pub const ALL: [Self; 3] = [Self::Difficulty, Self::LoudHeist, Self::StealthHeist];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Difficulty => "difficulty",
            Self::LoudHeist => "loud_heist",
            Self::StealthHeist => "stealth_heist",
        }
    }
}

/// Template weights in effect for the current options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateWeights {
    pub loud: u32,
    pub stealth: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payday3Game {
    options: Payday3Options,
}

impl Payday3Game {
    #[must_use]
    pub const fn new(options: Payday3Options) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &Payday3Options {
        &self.options
    }

    #[must_use]
    pub const fn weights(&self) -> TemplateWeights {
        match self.options.weighting() {
            Weighting::Configured => TemplateWeights {
                loud: self.options.loud_weight(),
                stealth: self.options.stealth_weight(),
            },
            Weighting::Fixed => TemplateWeights {
                loud: FIXED_LOUD_WEIGHT,
                stealth: FIXED_STEALTH_WEIGHT,
            },
        }
    }

    /// Eligible difficulties, sorted.
    #[must_use]
    pub fn difficulty(&self) -> Vec<String> {
        let mut difficulty: Vec<String> = DIFFICULTY_BASE.iter().map(ToString::to_string).collect();
        if self.options.include_overkill() {
            difficulty.push(DIFFICULTY_OVERKILL.to_string());
        }
        sorted(difficulty)
    }

    /// Eligible loud heists including owned DLC, sorted.
    #[must_use]
    pub fn loud_heist(&self) -> Vec<String> {
        self.with_dlc_heists(&LOUD_HEIST_BASE)
    }

    /// Eligible stealth heists including owned DLC, sorted.
    #[must_use]
    pub fn stealth_heist(&self) -> Vec<String> {
        self.with_dlc_heists(&STEALTH_HEIST_BASE)
    }

    fn with_dlc_heists(&self, base: &[&str]) -> Vec<String> {
        let mut heists: Vec<String> = base.iter().map(ToString::to_string).collect();
        heists.extend(self.options.dlc_owned().heists().map(ToString::to_string));
        sorted(heists)
    }
}

fn sorted(mut items: Vec<String>) -> Vec<String> {
    items.sort_unstable();
    items
}

impl Game for Payday3Game {
    type Dataset = DatasetId;

    const NAME: &'static str = GAME_NAME;

    fn platform(&self) -> GamePlatform {
        GamePlatform::Pc
    }

    fn platforms_other(&self) -> Vec<GamePlatform> {
        vec![GamePlatform::Ps5, GamePlatform::Xsx]
    }

    fn is_adult_only_or_unrated(&self) -> bool {
        true
    }

    fn optional_game_constraint_templates(&self) -> Vec<ObjectiveTemplate<DatasetId>> {
        Vec::new()
    }

    fn game_objective_templates(&self) -> Vec<ObjectiveTemplate<DatasetId>> {
        let weights = self.weights();
        log::trace!(
            "building {} templates (loud {}, stealth {})",
            GAME_NAME,
            weights.loud,
            weights.stealth
        );
        vec![
            ObjectiveTemplate::new(LOUD_TEMPLATE_LABEL, weights.loud)
                .bind(PLACEHOLDER_LOUD_HEIST, DatasetId::LoudHeist, 1)
                .bind(PLACEHOLDER_DIFFICULTY, DatasetId::Difficulty, 1),
            ObjectiveTemplate::new(STEALTH_TEMPLATE_LABEL, weights.stealth)
                .bind(PLACEHOLDER_STEALTH_HEIST, DatasetId::StealthHeist, 1)
                .bind(PLACEHOLDER_DIFFICULTY, DatasetId::Difficulty, 1),
        ]
    }

    fn dataset(&self, id: DatasetId) -> Vec<String> {
        let items = match id {
            DatasetId::Difficulty => self.difficulty(),
            DatasetId::LoudHeist => self.loud_heist(),
            DatasetId::StealthHeist => self.stealth_heist(),
        };
        log::debug!("resolved {} dataset with {} items", id.name(), items.len());
        items
    }
}
