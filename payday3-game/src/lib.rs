//! PAYDAY 3 Objective Plugin
//!
//! Static heist and difficulty data plus option declarations for the
//! PAYDAY 3 entry of the objective randomizer. The host framework owns
//! random selection; this crate only supplies datasets and weighted
//! objective templates through the [`Game`] trait.

pub mod constants;
pub mod dlc;
pub mod game;
pub mod options;
pub mod platform;
pub mod templates;

// Re-export commonly used types
pub use dlc::{Dlc, DlcOwned};
pub use game::{DatasetId, Payday3Game, TemplateWeights};
pub use options::{
    OptionDef, OptionKind, OptionsError, Payday3Options, RangeOption, Weighting, option_schema,
};
pub use platform::GamePlatform;
pub use templates::{DataBinding, ObjectiveTemplate};

/// Descriptor a game plugin exposes to the randomizer host.
pub trait Game {
    /// Identifier templates use to refer to one of the game's datasets.
    type Dataset: Copy;

    /// Display name.
    const NAME: &'static str;

    fn platform(&self) -> GamePlatform;

    fn platforms_other(&self) -> Vec<GamePlatform>;

    fn is_adult_only_or_unrated(&self) -> bool;

    /// Optional constraints the host may layer on top of objectives.
    fn optional_game_constraint_templates(&self) -> Vec<ObjectiveTemplate<Self::Dataset>>;

    /// Objective templates, weighted for the host's random pick.
    fn game_objective_templates(&self) -> Vec<ObjectiveTemplate<Self::Dataset>>;

    /// Resolve a dataset to its current, option-dependent items.
    fn dataset(&self, id: Self::Dataset) -> Vec<String>;
}
